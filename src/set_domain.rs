//! Restricting a domain to the points of a digital set.
//!
//! [`DigitalSetDomain`] borrows a set and exposes it through the [`Domain`]
//! capability: its points are exactly the set's points, in the set's native
//! order.
//!
//! # Bounds
//!
//! The bounds are those of the set's **governing domain**, not the tight box
//! around the current points: they are stable while the set changes, and
//! offsets inside the box stay valid, so any set (including
//! [`BitmapSet`][crate::set::BitmapSet]) can be built over a
//! `DigitalSetDomain`. The tight box is available through
//! [`tight_bounds`][DigitalSetDomain::tight_bounds].
//!
//! ```
//! use digiset::domain::{Domain, HyperRectDomain};
//! use digiset::set::{DigitalSet, TreeSet};
//! use digiset::set_domain::DigitalSetDomain;
//! use digiset::space::Point;
//!
//! let domain = HyperRectDomain::new(Point::new([0, 0]), Point::new([9, 9]));
//! let mut set = TreeSet::new(&domain);
//! set.insert(Point::new([2, 3])).unwrap();
//! set.insert(Point::new([5, 1])).unwrap();
//!
//! let restricted = DigitalSetDomain::new(&set);
//! assert_eq!(restricted.iter().count(), 2);
//! assert_eq!(restricted.lower_bound(), Point::new([0, 0]));
//! assert_eq!(restricted.tight_bounds(), Some((Point::new([2, 1]), Point::new([5, 3]))));
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::domain::{Domain, PointOf};
use crate::set::DigitalSet;

/// A domain made of the points of a digital set.
///
/// The view borrows the set, so the set cannot change while the view (or one
/// of its iterators) is alive.
pub struct DigitalSetDomain<'s, 'd, S: DigitalSet<'d>> {
    set: &'s S,
    _domain: PhantomData<&'d ()>,
}

impl<'s, 'd, S: DigitalSet<'d>> DigitalSetDomain<'s, 'd, S> {
    pub fn new(set: &'s S) -> Self {
        debug!("DigitalSetDomain::new({})", set);
        Self {
            set,
            _domain: PhantomData,
        }
    }

    /// The wrapped set.
    pub fn set(&self) -> &'s S {
        self.set
    }

    /// Tight bounding box of the current points, or `None` if the set is empty.
    pub fn tight_bounds(&self) -> Option<(PointOf<S::Domain>, PointOf<S::Domain>)> {
        self.set.bounding_box()
    }
}

impl<'d, S: DigitalSet<'d>> Clone for DigitalSetDomain<'_, 'd, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'d, S: DigitalSet<'d>> Copy for DigitalSetDomain<'_, 'd, S> {}

impl<'s, 'd, S: DigitalSet<'d>> Domain for DigitalSetDomain<'s, 'd, S> {
    type Point = PointOf<S::Domain>;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn lower_bound(&self) -> Self::Point {
        self.set.domain().lower_bound()
    }

    fn upper_bound(&self) -> Self::Point {
        self.set.domain().upper_bound()
    }

    fn is_inside(&self, p: &Self::Point) -> bool {
        self.set.contains(p)
    }

    fn size(&self) -> usize {
        self.set.size()
    }

    fn iter(&self) -> S::Iter<'_> {
        self.set.iter()
    }

    fn box_size(&self) -> usize {
        self.set.domain().box_size()
    }

    fn index_of(&self, p: &Self::Point) -> Option<usize> {
        self.set.domain().index_of(p)
    }

    fn point_at(&self, index: usize) -> Option<Self::Point> {
        self.set.domain().point_at(index)
    }
}

impl<'s, 'd, S: DigitalSet<'d>> fmt::Display for DigitalSetDomain<'s, 'd, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DigitalSetDomain] lower={} upper={} size={}",
            self.lower_bound(),
            self.upper_bound(),
            self.size()
        )
    }
}

impl<'s, 'd, S: DigitalSet<'d> + fmt::Debug> fmt::Debug for DigitalSetDomain<'s, 'd, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitalSetDomain").field("set", self.set).finish()
    }
}
