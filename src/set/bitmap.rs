//! Offset-indexed digital set.
//!
//! One bit per point of the governing domain's bounding box, addressed by
//! [`Domain::index_of`]. Membership tests, insertion and erasure are O(1); the
//! price is `box_size() / 8` bytes allocated up front, whatever the set holds.
//!
//! A point the domain cannot index (outside the bounding box) is rejected with
//! [`SetError::OutOfDomain`] rather than stored at a bogus offset.

use std::fmt;

use log::{debug, trace};

use super::{fmt_set, DigitalSet, SetKind};
use crate::bitset::{BitSet, BitSetIter};
use crate::domain::{Domain, PointOf};
use crate::error::SetError;

/// A digital set stored as a bitmap over the domain's bounding box.
#[derive(Debug)]
pub struct BitmapSet<'d, D: Domain> {
    domain: &'d D,
    bits: BitSet,
}

impl<'d, D: Domain> BitmapSet<'d, D> {
    pub fn new(domain: &'d D) -> Self {
        let capacity = domain.box_size();
        debug!("BitmapSet::new() => {} bits", capacity);
        Self {
            domain,
            bits: BitSet::with_capacity(capacity),
        }
    }

    /// Number of points the bitmap can address.
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    fn locate(&self, p: &PointOf<D>) -> Result<usize, SetError> {
        self.domain.index_of(p).ok_or_else(|| {
            trace!("BitmapSet: cannot index {}", p);
            SetError::out_of_domain(p)
        })
    }
}

impl<D: Domain> Clone for BitmapSet<'_, D> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            bits: self.bits.clone(),
        }
    }
}

impl<'d, D: Domain + 'd> DigitalSet<'d> for BitmapSet<'d, D> {
    type Domain = D;
    type Iter<'a>
        = BitmapIter<'a, D>
    where
        Self: 'a;

    fn new(domain: &'d D) -> Self {
        BitmapSet::new(domain)
    }

    fn kind(&self) -> SetKind {
        SetKind::Bitmap
    }

    fn domain(&self) -> &'d D {
        self.domain
    }

    fn size(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    fn contains(&self, p: &PointOf<D>) -> bool {
        match self.domain.index_of(p) {
            Some(i) => self.bits.contains(i),
            None => false,
        }
    }

    fn insert(&mut self, p: PointOf<D>) -> Result<bool, SetError> {
        let i = self.locate(&p)?;
        Ok(self.bits.insert(i))
    }

    /// Same cost as [`insert`][DigitalSet::insert]; a duplicate leaves the set
    /// unchanged.
    fn insert_new(&mut self, p: PointOf<D>) -> Result<(), SetError> {
        let i = self.locate(&p)?;
        self.bits.insert(i);
        Ok(())
    }

    fn erase(&mut self, p: &PointOf<D>) -> bool {
        match self.domain.index_of(p) {
            Some(i) => self.bits.remove(i),
            None => false,
        }
    }

    fn clear(&mut self) {
        self.bits.clear();
    }

    fn iter(&self) -> BitmapIter<'_, D> {
        BitmapIter {
            domain: self.domain,
            bits: self.bits.iter(),
        }
    }
}

impl<'d, D: Domain + 'd> fmt::Display for BitmapSet<'d, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

/// Iterator over the points of a [`BitmapSet`], in offset (sorted) order.
pub struct BitmapIter<'a, D: Domain> {
    domain: &'a D,
    bits: BitSetIter<'a>,
}

impl<D: Domain> Iterator for BitmapIter<'_, D> {
    type Item = D::Point;

    fn next(&mut self) -> Option<D::Point> {
        let i = self.bits.next()?;
        self.domain.point_at(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bits.size_hint()
    }
}

impl<D: Domain> ExactSizeIterator for BitmapIter<'_, D> {}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::domain::HyperRectDomain;
    use crate::space::Point;

    fn domain() -> HyperRectDomain<2> {
        HyperRectDomain::new(Point::new([-2, -2]), Point::new([2, 2]))
    }

    #[test]
    fn test_capacity_matches_domain() {
        let domain = domain();
        let set = BitmapSet::new(&domain);
        assert_eq!(set.capacity(), 25);
        assert!(set.is_empty());
    }

    #[test]
    fn test_out_of_domain_rejected() {
        let domain = domain();
        let mut set = BitmapSet::new(&domain);
        set.insert(Point::new([0, 0])).unwrap();

        let outside = Point::new([3, 0]);
        assert_eq!(
            set.insert(outside),
            Err(SetError::OutOfDomain("(3, 0)".to_string()))
        );
        assert!(set.insert_new(outside).is_err());
        assert!(!set.contains(&outside));
        assert!(!set.erase(&outside));
        assert_eq!(set.size(), 1);
        assert!(set.is_valid());
    }

    #[test]
    fn test_sorted_iteration() {
        let domain = domain();
        let mut set = BitmapSet::new(&domain);
        for p in [[1, -2], [-2, 2], [0, 0], [-2, -1]] {
            set.insert(Point::new(p)).unwrap();
        }
        let points: Vec<_> = set.iter().map(|p| *p.coords()).collect();
        assert_eq!(points, vec![[-2, -1], [-2, 2], [0, 0], [1, -2]]);
    }

    #[test]
    fn test_insert_new_duplicate_stays_consistent() {
        let domain = domain();
        let mut set = BitmapSet::new(&domain);
        set.insert_new(Point::new([1, 1])).unwrap();
        set.insert_new(Point::new([1, 1])).unwrap();
        assert_eq!(set.size(), 1);
        assert!(set.is_valid());
    }

    #[test]
    fn test_full_domain() {
        let domain = domain();
        let mut set = BitmapSet::new(&domain);
        for p in domain.iter() {
            set.insert_new(p).unwrap();
        }
        assert_eq!(set.size(), domain.size());
        assert_eq!(set.iter().collect::<Vec<_>>(), domain.iter().collect::<Vec<_>>());
        assert!(set.complement().unwrap().is_empty());
    }
}
