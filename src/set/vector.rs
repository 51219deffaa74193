//! Sequence-backed digital set.
//!
//! Points are kept in a `Vec` in insertion order. Every operation except
//! [`insert_new`][DigitalSet::insert_new] scans the vector, which is the right
//! trade-off for small sets that rarely change.
//!
//! # Trade-offs
//!
//! - **Pros**: No per-point allocation, cache friendly, no pre-sizing
//! - **Cons**: O(n) membership test, insertion and erasure
//!
//! `insert_new` is the fast path for bulk construction: it pushes without
//! looking. A duplicate is then stored twice, `size()` over-counts, and
//! `is_valid()` reports the inconsistency.

use std::fmt;
use std::iter::Copied;
use std::slice;

use log::debug;

use super::{fmt_set, DigitalSet, SetKind};
use crate::domain::{Domain, PointOf};
use crate::error::SetError;

/// A digital set stored as a vector of points.
#[derive(Debug)]
pub struct VecSet<'d, D: Domain> {
    domain: &'d D,
    points: Vec<D::Point>,
}

impl<'d, D: Domain> VecSet<'d, D> {
    pub fn new(domain: &'d D) -> Self {
        debug!("VecSet::new()");
        Self {
            domain,
            points: Vec::new(),
        }
    }

    /// Creates an empty set with room for `capacity` points.
    pub fn with_capacity(domain: &'d D, capacity: usize) -> Self {
        debug!("VecSet::with_capacity({})", capacity);
        Self {
            domain,
            points: Vec::with_capacity(capacity),
        }
    }

    /// The stored points, in insertion order.
    pub fn as_slice(&self) -> &[D::Point] {
        &self.points
    }
}

impl<D: Domain> Clone for VecSet<'_, D> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            points: self.points.clone(),
        }
    }
}

impl<'d, D: Domain + 'd> DigitalSet<'d> for VecSet<'d, D> {
    type Domain = D;
    type Iter<'a>
        = Copied<slice::Iter<'a, D::Point>>
    where
        Self: 'a;

    fn new(domain: &'d D) -> Self {
        VecSet::new(domain)
    }

    fn kind(&self) -> SetKind {
        SetKind::Vector
    }

    fn domain(&self) -> &'d D {
        self.domain
    }

    fn size(&self) -> usize {
        self.points.len()
    }

    fn contains(&self, p: &PointOf<D>) -> bool {
        self.points.contains(p)
    }

    fn insert(&mut self, p: PointOf<D>) -> Result<bool, SetError> {
        if self.points.contains(&p) {
            return Ok(false);
        }
        self.points.push(p);
        Ok(true)
    }

    fn insert_new(&mut self, p: PointOf<D>) -> Result<(), SetError> {
        self.points.push(p);
        Ok(())
    }

    fn erase(&mut self, p: &PointOf<D>) -> bool {
        // `remove` rather than `swap_remove`: keep the insertion order.
        match self.points.iter().position(|q| q == p) {
            Some(i) => {
                self.points.remove(i);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.points.iter().copied()
    }
}

impl<'d, D: Domain + 'd> fmt::Display for VecSet<'d, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::domain::HyperRectDomain;
    use crate::space::Point;

    fn domain() -> HyperRectDomain<2> {
        HyperRectDomain::new(Point::new([0, 0]), Point::new([3, 3]))
    }

    #[test]
    fn test_insertion_order() {
        let domain = domain();
        let mut set = VecSet::new(&domain);
        for p in [[2, 2], [0, 1], [3, 0], [0, 1]] {
            set.insert(Point::new(p)).unwrap();
        }
        let points: Vec<_> = set.iter().map(|p| *p.coords()).collect();
        assert_eq!(points, vec![[2, 2], [0, 1], [3, 0]]);
    }

    #[test]
    fn test_erase_keeps_order() {
        let domain = domain();
        let mut set = VecSet::new(&domain);
        for p in [[2, 2], [0, 1], [3, 0], [1, 1]] {
            set.insert_new(Point::new(p)).unwrap();
        }
        assert!(set.erase(&Point::new([0, 1])));
        let points: Vec<_> = set.iter().map(|p| *p.coords()).collect();
        assert_eq!(points, vec![[2, 2], [3, 0], [1, 1]]);
    }

    #[test]
    fn test_insert_new_duplicate_over_counts() {
        let domain = domain();
        let mut set = VecSet::new(&domain);
        set.insert_new(Point::new([1, 1])).unwrap();
        set.insert_new(Point::new([1, 1])).unwrap();
        assert_eq!(set.size(), 2);
        assert!(!set.is_valid());
    }

    #[test]
    fn test_out_of_domain_is_accepted_but_invalid() {
        let domain = domain();
        let mut set = VecSet::new(&domain);
        assert_eq!(set.insert(Point::new([10, 10])), Ok(true));
        assert!(set.contains(&Point::new([10, 10])));
        assert!(!set.is_valid());
    }

    #[test]
    fn test_clone_is_independent() {
        let domain = domain();
        let mut set = VecSet::with_capacity(&domain, 4);
        set.insert(Point::new([1, 2])).unwrap();
        let copy = set.clone();
        set.erase(&Point::new([1, 2]));
        assert_eq!(copy.size(), 1);
        assert!(set.is_empty());
        assert_eq!(copy.as_slice(), &[Point::new([1, 2])]);
    }
}
