//! Lattice points in N-dimensional integer space.
//!
//! [`Point<N>`] is a plain `Copy` value holding `N` coordinates. Points are
//! compared lexicographically with the **first axis most significant**, which
//! is also the order in which [`HyperRectDomain`][crate::domain::HyperRectDomain]
//! enumerates its points (last axis varying fastest).
//!
//! ```
//! use digiset::space::Point;
//!
//! let a = Point::new([1, 2]);
//! let b = Point::new([1, 3]);
//! assert!(a < b);
//! assert_eq!(b - a, Point::new([0, 1]));
//! assert_eq!(a.to_string(), "(1, 2)");
//! ```

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Index, IndexMut, Sub};

/// Coordinate type of lattice points.
pub type Coordinate = i32;

/// Capabilities every point type of a [`Domain`][crate::domain::Domain] must offer.
///
/// The ordering must be total and consistent with the iteration order of the
/// domains built over the point type.
pub trait LatticePoint: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    /// Componentwise maximum.
    fn sup(&self, other: &Self) -> Self;

    /// Componentwise minimum.
    fn inf(&self, other: &Self) -> Self;
}

/// A point of the N-dimensional integer lattice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point<const N: usize>([Coordinate; N]);

impl<const N: usize> Point<N> {
    /// Dimension of the space.
    pub const DIMENSION: usize = N;

    pub const fn new(coords: [Coordinate; N]) -> Self {
        Point(coords)
    }

    /// The origin.
    pub const fn zero() -> Self {
        Point([0; N])
    }

    /// A point with every coordinate equal to `value`.
    pub const fn diagonal(value: Coordinate) -> Self {
        Point([value; N])
    }

    pub fn coords(&self) -> &[Coordinate; N] {
        &self.0
    }

    /// Returns true if `self[i] <= other[i]` on every axis.
    pub fn is_lower_or_equal(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Squared Euclidean norm, computed in `i64` so it cannot overflow for
    /// reasonable dimensions.
    pub fn norm_squared(&self) -> i64 {
        self.0.iter().map(|&c| (c as i64) * (c as i64)).sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.norm_squared() as f64).sqrt()
    }
}

impl<const N: usize> LatticePoint for Point<N> {
    fn sup(&self, other: &Self) -> Self {
        let mut res = *self;
        for (r, &o) in res.0.iter_mut().zip(other.0.iter()) {
            *r = (*r).max(o);
        }
        res
    }

    fn inf(&self, other: &Self) -> Self {
        let mut res = *self;
        for (r, &o) in res.0.iter_mut().zip(other.0.iter()) {
            *r = (*r).min(o);
        }
        res
    }
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[Coordinate; N]> for Point<N> {
    fn from(coords: [Coordinate; N]) -> Self {
        Point(coords)
    }
}

impl<const N: usize> From<Point<N>> for [Coordinate; N] {
    fn from(p: Point<N>) -> Self {
        p.0
    }
}

impl<const N: usize> Index<usize> for Point<N> {
    type Output = Coordinate;

    fn index(&self, axis: usize) -> &Coordinate {
        &self.0[axis]
    }
}

impl<const N: usize> IndexMut<usize> for Point<N> {
    fn index_mut(&mut self, axis: usize) -> &mut Coordinate {
        &mut self.0[axis]
    }
}

impl<const N: usize> Add for Point<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
        self
    }
}

impl<const N: usize> Sub for Point<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
        self
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let a = Point::new([0, 5, 5]);
        let b = Point::new([1, 0, 0]);
        let c = Point::new([1, 0, 1]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new([4, 3, 3, 4]);
        let b = Point::new([1, 2, 3, 4]);
        assert_eq!(a - b, Point::new([3, 1, 0, 0]));
        assert_eq!(a + b, Point::new([5, 5, 6, 8]));
        assert_eq!((a - b)[0], 3);
    }

    #[test]
    fn test_norm() {
        let p = Point::new([3, 4]);
        assert_eq!(p.norm_squared(), 25);
        assert_eq!(p.norm(), 5.0);
        assert_eq!(Point::<3>::zero().norm(), 0.0);
    }

    #[test]
    fn test_sup_inf() {
        let a = Point::new([1, 7, -2]);
        let b = Point::new([3, 0, -5]);
        assert_eq!(a.sup(&b), Point::new([3, 7, -2]));
        assert_eq!(a.inf(&b), Point::new([1, 0, -5]));
    }

    #[test]
    fn test_lower_or_equal() {
        let a = Point::new([1, 2]);
        assert!(a.is_lower_or_equal(&Point::new([1, 2])));
        assert!(a.is_lower_or_equal(&Point::new([2, 2])));
        assert!(!a.is_lower_or_equal(&Point::new([2, 1])));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new([-449, 449]).to_string(), "(-449, 449)");
        assert_eq!(Point::new([7]).to_string(), "(7)");
    }
}
