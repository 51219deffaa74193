//! Digital sets: collections of unique lattice points bound to a domain.
//!
//! Every container implements the same [`DigitalSet`] contract and only differs
//! in its performance profile and native iteration order:
//!
//! | Implementation | insert | erase | contains | Memory | Iteration order |
//! |----------------|--------|-------|----------|--------|-----------------|
//! | [`VecSet`] | O(n) | O(n) | O(n) | O(size) | Insertion |
//! | [`TreeSet`] | O(log n) | O(log n) | O(log n) | O(size) | Sorted |
//! | [`BitmapSet`] | O(1) | O(1) | O(1) | O(domain) | Sorted |
//!
//! # Choosing a set
//!
//! - **Few points, rarely modified?** Use [`VecSet`] - minimal overhead, cache friendly
//! - **Many points, or frequent insert/erase?** Use [`TreeSet`] - balanced costs, no pre-sizing
//! - **Many membership tests on a moderate domain?** Use [`BitmapSet`] - O(1) tests, one bit per domain point
//!
//! Or describe the workload and let the [`selector`][crate::selector] pick.
//!
//! # Preconditions
//!
//! [`insert_new`][DigitalSet::insert_new] skips the duplicate check when the
//! container allows it. On a duplicate, [`VecSet`] stores the point twice: its
//! size over-counts and [`is_valid`][DigitalSet::is_valid] turns false.
//! [`TreeSet`] and [`BitmapSet`] stay consistent.
//!
//! [`VecSet`] and [`TreeSet`] accept points outside their domain (reported by
//! `is_valid`). [`BitmapSet`] cannot store them and returns
//! [`SetError::OutOfDomain`].
//!
//! # Example
//!
//! ```
//! use digiset::domain::HyperRectDomain;
//! use digiset::set::{DigitalSet, TreeSet};
//! use digiset::space::Point;
//!
//! let domain = HyperRectDomain::new(Point::new([0, 0]), Point::new([9, 9]));
//! let mut set = TreeSet::new(&domain);
//! set.insert(Point::new([3, 4])).unwrap();
//! set.insert(Point::new([1, 1])).unwrap();
//! set.insert(Point::new([3, 4])).unwrap();
//! assert_eq!(set.size(), 2);
//! assert_eq!(set.to_string(), "[TreeSet] size=2");
//! ```

mod bitmap;
mod tree;
mod vector;

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};

use crate::domain::{Domain, PointOf};
use crate::error::SetError;
use crate::space::LatticePoint;

pub use bitmap::{BitmapIter, BitmapSet};
pub use tree::TreeSet;
pub use vector::VecSet;

/// The container strategies available for digital sets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SetKind {
    /// [`VecSet`]
    Vector,
    /// [`TreeSet`]
    Tree,
    /// [`BitmapSet`]
    Bitmap,
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetKind::Vector => write!(f, "VecSet"),
            SetKind::Tree => write!(f, "TreeSet"),
            SetKind::Bitmap => write!(f, "BitmapSet"),
        }
    }
}

/// A mutable set of unique points of the governing domain `Self::Domain`,
/// borrowed for `'d`.
pub trait DigitalSet<'d>: fmt::Display {
    type Domain: Domain + 'd;

    /// Iterator over the points of the set, in the container's native order.
    type Iter<'a>: Iterator<Item = PointOf<Self::Domain>>
    where
        Self: 'a;

    /// Creates an empty set over `domain`.
    fn new(domain: &'d Self::Domain) -> Self
    where
        Self: Sized;

    /// The container strategy backing this set.
    fn kind(&self) -> SetKind;

    /// The governing domain.
    fn domain(&self) -> &'d Self::Domain;

    /// Number of points in the set.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Membership test.
    fn contains(&self, p: &PointOf<Self::Domain>) -> bool;

    /// Adds `p` if absent. Returns `Ok(true)` if it was added.
    fn insert(&mut self, p: PointOf<Self::Domain>) -> Result<bool, SetError>;

    /// Adds `p`, which the caller guarantees to be absent.
    ///
    /// See the [module documentation](self) for what happens otherwise.
    fn insert_new(&mut self, p: PointOf<Self::Domain>) -> Result<(), SetError>;

    /// Removes `p` if present. Returns true if it was removed.
    fn erase(&mut self, p: &PointOf<Self::Domain>) -> bool;

    /// Removes every point.
    fn clear(&mut self);

    /// Iterates over the points. Each call starts over.
    fn iter(&self) -> Self::Iter<'_>;

    /// Creates an empty set of the same kind over the same domain.
    fn new_empty(&self) -> Self
    where
        Self: Sized,
    {
        Self::new(self.domain())
    }

    /// Structural sanity check: every point lies in the governing domain,
    /// no point is stored twice, and `size()` matches the iteration.
    fn is_valid(&self) -> bool {
        let domain = self.domain();
        let mut seen = HashSet::with_capacity(self.size());
        for p in self.iter() {
            if !domain.is_inside(&p) {
                warn!("{}: point {} lies outside the domain", self.kind(), p);
                return false;
            }
            if !seen.insert(p) {
                warn!("{}: point {} is stored twice", self.kind(), p);
                return false;
            }
        }
        if seen.len() != self.size() {
            warn!("{}: size() = {} but iterated {} points", self.kind(), self.size(), seen.len());
            return false;
        }
        true
    }

    /// Tight componentwise bounds of the points, or `None` if the set is empty.
    fn bounding_box(&self) -> Option<(PointOf<Self::Domain>, PointOf<Self::Domain>)> {
        let mut it = self.iter();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p))))
    }

    /// Inserts every point of `points`. Returns the number of points added.
    fn insert_all<I>(&mut self, points: I) -> Result<usize, SetError>
    where
        I: IntoIterator<Item = PointOf<Self::Domain>>,
        Self: Sized,
    {
        let mut added = 0;
        for p in points {
            if self.insert(p)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// In-place union with a set of any kind over the same point type.
    /// Returns the number of points added.
    fn union_with<'e, S>(&mut self, other: &S) -> Result<usize, SetError>
    where
        S: DigitalSet<'e>,
        S::Domain: Domain<Point = PointOf<Self::Domain>>,
        Self: Sized,
    {
        self.insert_all(other.iter())
    }

    /// The points of the governing domain that are not in this set, as a new
    /// set of the same kind.
    fn complement(&self) -> Result<Self, SetError>
    where
        Self: Sized,
    {
        let mut res = self.new_empty();
        for p in self.domain().iter() {
            if !self.contains(&p) {
                res.insert_new(p)?;
            }
        }
        debug!("complement: {} -> {} points", self.size(), res.size());
        Ok(res)
    }

    /// Replaces the contents of this set with the points of `other`'s
    /// governing domain that are not in `other`.
    ///
    /// The result is built aside first: if some point cannot be stored, the
    /// error is returned and this set is left unchanged.
    fn assign_from_complement<'e, S>(&mut self, other: &S) -> Result<(), SetError>
    where
        S: DigitalSet<'e>,
        S::Domain: Domain<Point = PointOf<Self::Domain>>,
        Self: Sized,
    {
        let mut res = self.new_empty();
        for p in other.domain().iter() {
            if !other.contains(&p) {
                res.insert_new(p)?;
            }
        }
        *self = res;
        Ok(())
    }
}

/// Shared `Display` body: `[Kind] size=n`, and with `{:#}` the points too.
pub(crate) fn fmt_set<'d, S>(set: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: DigitalSet<'d> + ?Sized,
{
    write!(f, "[{}] size={}", set.kind(), set.size())?;
    if f.alternate() {
        write!(f, " {{")?;
        for (i, p) in set.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}", p)?;
        }
        write!(f, " }}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::domain::HyperRectDomain;
    use crate::space::Point;

    fn domain_4d() -> HyperRectDomain<4> {
        HyperRectDomain::new(Point::new([1, 2, 3, 4]), Point::new([5, 5, 3, 5]))
    }

    /// Insertion scenario shared by every container.
    fn check_insertion<'d, S>(domain: &'d HyperRectDomain<4>)
    where
        S: DigitalSet<'d, Domain = HyperRectDomain<4>>,
    {
        let mut set = S::new(domain);
        assert_eq!(set.size(), 0);
        assert!(set.is_empty());

        let p1 = Point::new([4, 3, 3, 4]);
        let p2 = Point::new([2, 5, 3, 5]);
        let p3 = Point::new([2, 5, 3, 4]);
        assert_eq!(set.insert(p1), Ok(true));
        assert_eq!(set.insert(p2), Ok(true));
        assert_eq!(set.insert(p3), Ok(true));
        assert_eq!(set.insert(p2), Ok(false));

        assert_eq!(set.size(), 3);
        assert!(set.contains(&p1) && set.contains(&p2) && set.contains(&p3));
        assert!(!set.contains(&Point::new([1, 2, 3, 4])));
        assert!(set.is_valid());

        assert!(set.erase(&p2));
        assert!(!set.erase(&p2));
        assert_eq!(set.size(), 2);
        assert!(!set.contains(&p2));

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_insertion_vector() {
        check_insertion::<VecSet<_>>(&domain_4d());
    }

    #[test]
    fn test_insertion_tree() {
        check_insertion::<TreeSet<_>>(&domain_4d());
    }

    #[test]
    fn test_insertion_bitmap() {
        check_insertion::<BitmapSet<_>>(&domain_4d());
    }

    #[test]
    fn test_bounding_box() {
        let domain = domain_4d();
        let mut set = TreeSet::new(&domain);
        assert_eq!(set.bounding_box(), None);
        set.insert(Point::new([4, 3, 3, 4])).unwrap();
        set.insert(Point::new([2, 5, 3, 5])).unwrap();
        assert_eq!(
            set.bounding_box(),
            Some((Point::new([2, 3, 3, 4]), Point::new([4, 5, 3, 5])))
        );
    }

    #[test]
    fn test_complement() {
        let domain = domain_4d();
        let mut set = BitmapSet::new(&domain);
        set.insert(domain.lower_bound()).unwrap();
        set.insert(domain.upper_bound()).unwrap();

        let comp = set.complement().unwrap();
        assert_eq!(comp.kind(), SetKind::Bitmap);
        assert_eq!(comp.size(), domain.size() - 2);
        assert!(comp.iter().all(|p| !set.contains(&p)));
        assert!(comp.is_valid());
    }

    #[test]
    fn test_assign_from_complement_across_kinds() {
        let domain = domain_4d();
        let mut tree = TreeSet::new(&domain);
        tree.insert(Point::new([3, 3, 3, 5])).unwrap();

        let mut vec = VecSet::new(&domain);
        vec.insert(Point::new([3, 3, 3, 5])).unwrap();
        vec.assign_from_complement(&tree).unwrap();
        assert_eq!(vec.size(), domain.size() - 1);
        assert!(!vec.contains(&Point::new([3, 3, 3, 5])));
        assert!(vec.is_valid());
    }

    #[test]
    fn test_assign_from_complement_failure_keeps_contents() {
        let big = HyperRectDomain::new(Point::new([0, 0]), Point::new([3, 3]));
        let small = HyperRectDomain::new(Point::new([0, 0]), Point::new([1, 1]));

        let mut source = TreeSet::new(&big);
        source.insert(Point::new([0, 0])).unwrap();

        let mut target = BitmapSet::new(&small);
        target.insert(Point::new([1, 1])).unwrap();
        assert!(matches!(
            target.assign_from_complement(&source),
            Err(SetError::OutOfDomain(_))
        ));
        assert_eq!(target.size(), 1);
        assert!(target.contains(&Point::new([1, 1])));
        assert!(target.is_valid());
    }

    #[test]
    fn test_union_with() {
        let domain = domain_4d();
        let mut a = VecSet::new(&domain);
        a.insert(Point::new([1, 2, 3, 4])).unwrap();
        let mut b = TreeSet::new(&domain);
        b.insert(Point::new([1, 2, 3, 4])).unwrap();
        b.insert(Point::new([5, 5, 3, 5])).unwrap();

        assert_eq!(a.union_with(&b), Ok(1));
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn test_display() {
        let domain = domain_4d();
        let mut set = VecSet::new(&domain);
        assert_eq!(set.to_string(), "[VecSet] size=0");
        set.insert(Point::new([2, 5, 3, 5])).unwrap();
        set.insert(Point::new([1, 2, 3, 4])).unwrap();
        assert_eq!(format!("{:#}", set), "[VecSet] size=2 { (2, 5, 3, 5), (1, 2, 3, 4) }");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SetKind::Vector.to_string(), "VecSet");
        assert_eq!(SetKind::Tree.to_string(), "TreeSet");
        assert_eq!(SetKind::Bitmap.to_string(), "BitmapSet");
    }
}
