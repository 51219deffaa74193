//! Lattice domains.
//!
//! A [`Domain`] is a finite set of lattice points with a bounding box, a
//! membership test, and an enumeration. [`HyperRectDomain`] is the basic
//! domain: every point of an inclusive axis-aligned box.
//!
//! # Iteration order
//!
//! Domains enumerate their points in lexicographic order with the **last axis
//! varying fastest**. This is exactly the [`Ord`] order of [`Point`], so the
//! domain order, the order of sorted sets, and the linear offsets returned by
//! [`Domain::index_of`] all agree:
//!
//! ```
//! use digiset::domain::{Domain, HyperRectDomain};
//! use digiset::space::Point;
//!
//! let domain = HyperRectDomain::new(Point::new([0, 0]), Point::new([1, 2]));
//! let points: Vec<_> = domain.iter().map(|p| *p.coords()).collect();
//! assert_eq!(points, vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]);
//! assert_eq!(domain.index_of(&Point::new([1, 0])), Some(3));
//! ```
//!
//! # Empty ranges
//!
//! [`HyperRectDomain::new`] does not check its bounds. When `lower > upper` on
//! some axis the box is empty: its extent on that axis is 0, it contains no
//! point, and iteration yields nothing. Use [`HyperRectDomain::try_new`] to
//! reject such bounds instead.

use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::error::DomainError;
use crate::space::{Coordinate, LatticePoint, Point};

/// The domain capability: bounds, membership, enumeration, and linear offsets
/// inside the bounding box.
pub trait Domain {
    type Point: LatticePoint;

    /// Iterator over the points of the domain, in increasing order.
    type Iter<'a>: Iterator<Item = Self::Point>
    where
        Self: 'a;

    /// Lower corner of the bounding box.
    fn lower_bound(&self) -> Self::Point;

    /// Upper corner of the bounding box.
    fn upper_bound(&self) -> Self::Point;

    /// Returns true if `p` belongs to the domain.
    fn is_inside(&self, p: &Self::Point) -> bool;

    /// Number of points of the domain.
    fn size(&self) -> usize;

    /// Enumerates the points of the domain. Each call starts over.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of lattice points of the bounding box.
    fn box_size(&self) -> usize;

    /// Linear offset of `p` inside the bounding box, in `0..box_size()`, or
    /// `None` if `p` lies outside the box. Offsets increase with the point order.
    fn index_of(&self, p: &Self::Point) -> Option<usize>;

    /// Inverse of [`index_of`][Domain::index_of].
    fn point_at(&self, index: usize) -> Option<Self::Point>;
}

/// Shorthand for the point type of a domain.
pub type PointOf<D> = <D as Domain>::Point;

/// An inclusive axis-aligned box of the N-dimensional lattice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HyperRectDomain<const N: usize> {
    lower: Point<N>,
    upper: Point<N>,
    /// Offset increment per unit step on each axis (last axis: 1).
    strides: [usize; N],
    size: usize,
}

impl<const N: usize> HyperRectDomain<N> {
    /// Creates the box `[lower, upper]` without checking the bounds.
    ///
    /// Inverted bounds on some axis make the domain empty.
    ///
    /// # Panics
    ///
    /// Panics if the box holds more than `usize::MAX` points.
    /// [`try_new`][HyperRectDomain::try_new] reports that case as an error.
    pub fn new(lower: Point<N>, upper: Point<N>) -> Self {
        match Self::layout(&lower, &upper) {
            Some((strides, size)) => Self::with_layout(lower, upper, strides, size),
            None => panic!("HyperRectDomain [{}, {}] has more than usize::MAX points", lower, upper),
        }
    }

    /// Creates the box `[lower, upper]`, rejecting bounds with `lower > upper`
    /// on some axis and boxes whose point count does not fit in `usize`.
    pub fn try_new(lower: Point<N>, upper: Point<N>) -> Result<Self, DomainError> {
        for axis in 0..N {
            if lower[axis] > upper[axis] {
                return Err(DomainError::InvertedBounds {
                    axis,
                    lower: lower[axis],
                    upper: upper[axis],
                });
            }
        }
        let (strides, size) = Self::layout(&lower, &upper).ok_or_else(|| DomainError::TooLarge {
            lower: lower.to_string(),
            upper: upper.to_string(),
        })?;
        Ok(Self::with_layout(lower, upper, strides, size))
    }

    /// Row-major strides and point count, or `None` on `usize` overflow.
    fn layout(lower: &Point<N>, upper: &Point<N>) -> Option<([usize; N], usize)> {
        let mut strides = [0; N];
        let mut size = 1usize;
        for axis in (0..N).rev() {
            strides[axis] = size;
            let extent = usize::try_from(axis_extent(lower[axis], upper[axis])).ok()?;
            size = size.checked_mul(extent)?;
        }
        Some((strides, size))
    }

    fn with_layout(lower: Point<N>, upper: Point<N>, strides: [usize; N], size: usize) -> Self {
        debug!("HyperRectDomain::new(lower = {}, upper = {}) => size = {}", lower, upper, size);
        Self {
            lower,
            upper,
            strides,
            size,
        }
    }

    /// Number of lattice points along each axis.
    ///
    /// Spans can exceed `Coordinate::MAX`.
    pub fn extent(&self) -> [u64; N] {
        let mut res = [0; N];
        for axis in 0..N {
            res[axis] = axis_extent(self.lower[axis], self.upper[axis]);
        }
        res
    }

    /// Returns true if the box contains no point.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

fn axis_extent(lower: Coordinate, upper: Coordinate) -> u64 {
    let span = upper as i64 - lower as i64 + 1;
    if span > 0 {
        span as u64
    } else {
        0
    }
}

impl<const N: usize> Domain for HyperRectDomain<N> {
    type Point = Point<N>;
    type Iter<'a> = DomainIter<N>;

    fn lower_bound(&self) -> Point<N> {
        self.lower
    }

    fn upper_bound(&self) -> Point<N> {
        self.upper
    }

    #[inline]
    fn is_inside(&self, p: &Point<N>) -> bool {
        self.lower.is_lower_or_equal(p) && p.is_lower_or_equal(&self.upper)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn iter(&self) -> DomainIter<N> {
        DomainIter {
            lower: self.lower,
            upper: self.upper,
            next: if self.is_empty() { None } else { Some(self.lower) },
            remaining: self.size,
        }
    }

    fn box_size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index_of(&self, p: &Point<N>) -> Option<usize> {
        if !self.is_inside(p) {
            return None;
        }
        // Inside the box every partial sum stays below `size`, which fits in usize.
        let mut index = 0;
        for axis in 0..N {
            index += (p[axis] as i64 - self.lower[axis] as i64) as usize * self.strides[axis];
        }
        Some(index)
    }

    fn point_at(&self, index: usize) -> Option<Point<N>> {
        if index >= self.size {
            return None;
        }
        let mut rest = index;
        let mut p = self.lower;
        for axis in 0..N {
            let q = rest / self.strides[axis];
            rest %= self.strides[axis];
            p[axis] = (self.lower[axis] as i64 + q as i64) as Coordinate;
        }
        Some(p)
    }
}

impl<'a, const N: usize> IntoIterator for &'a HyperRectDomain<N> {
    type Item = Point<N>;
    type IntoIter = DomainIter<N>;

    fn into_iter(self) -> DomainIter<N> {
        self.iter()
    }
}

impl<const N: usize> fmt::Display for HyperRectDomain<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HyperRectDomain] lower={} upper={}", self.lower, self.upper)
    }
}

/// Iterator over the points of a [`HyperRectDomain`], last axis fastest.
#[derive(Debug, Clone)]
pub struct DomainIter<const N: usize> {
    lower: Point<N>,
    upper: Point<N>,
    next: Option<Point<N>>,
    remaining: usize,
}

impl<const N: usize> Iterator for DomainIter<N> {
    type Item = Point<N>;

    fn next(&mut self) -> Option<Point<N>> {
        let current = self.next?;
        self.remaining -= 1;

        // Odometer step: bump the last axis that is not at its upper bound,
        // and rewind every faster axis.
        let mut succ = current;
        self.next = None;
        for axis in (0..N).rev() {
            if succ[axis] < self.upper[axis] {
                succ[axis] += 1;
                for fast in axis + 1..N {
                    succ[fast] = self.lower[fast];
                }
                self.next = Some(succ);
                break;
            }
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for DomainIter<N> {}

impl<const N: usize> FusedIterator for DomainIter<N> {}
