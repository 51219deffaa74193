//! The `is_inside` capability and digitization of shapes.
//!
//! A [`Shape`] is anything that can answer whether a lattice point lies inside
//! it. Domains, digital set domains and digital sets are shapes; [`Ball`] is a
//! Euclidean one. [`digitize`] fills a digital set with the points of its
//! governing domain that lie inside a shape.

use log::debug;

use crate::domain::{Domain, HyperRectDomain, PointOf};
use crate::error::SetError;
use crate::set::{BitmapSet, DigitalSet, TreeSet, VecSet};
use crate::set_domain::DigitalSetDomain;
use crate::space::Point;

/// A region of the lattice given by its membership test.
pub trait Shape<P> {
    fn is_inside(&self, p: &P) -> bool;
}

impl<const N: usize> Shape<Point<N>> for HyperRectDomain<N> {
    fn is_inside(&self, p: &Point<N>) -> bool {
        Domain::is_inside(self, p)
    }
}

impl<'d, S: DigitalSet<'d>> Shape<PointOf<S::Domain>> for DigitalSetDomain<'_, 'd, S> {
    fn is_inside(&self, p: &PointOf<S::Domain>) -> bool {
        Domain::is_inside(self, p)
    }
}

macro_rules! impl_shape_for_set {
    ($($set:ident),*) => {
        $(
            impl<'d, D: Domain + 'd> Shape<PointOf<D>> for $set<'d, D> {
                fn is_inside(&self, p: &PointOf<D>) -> bool {
                    self.contains(p)
                }
            }
        )*
    };
}

impl_shape_for_set!(VecSet, TreeSet, BitmapSet);

/// Euclidean open ball: the points strictly closer than `radius` to `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ball<const N: usize> {
    center: Point<N>,
    radius: f64,
}

impl<const N: usize> Ball<N> {
    pub fn new(center: Point<N>, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point<N> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl<const N: usize> Shape<Point<N>> for Ball<N> {
    fn is_inside(&self, p: &Point<N>) -> bool {
        (*p - self.center).norm() < self.radius
    }
}

/// Inserts into `set` every point of its governing domain inside `shape`.
///
/// Points are added with [`insert_new`][DigitalSet::insert_new], so `set`
/// should not already hold points inside the shape (a [`VecSet`] would store
/// them twice). Returns the number of points added.
///
/// ```
/// use digiset::domain::HyperRectDomain;
/// use digiset::set::{DigitalSet, VecSet};
/// use digiset::shape::{digitize, Ball};
/// use digiset::space::Point;
///
/// let domain = HyperRectDomain::new(Point::new([-2, -2]), Point::new([2, 2]));
/// let mut disk = VecSet::new(&domain);
/// let added = digitize(&mut disk, &Ball::new(Point::zero(), 1.5)).unwrap();
/// assert_eq!(added, 9);
/// assert!(disk.is_valid());
/// ```
pub fn digitize<'d, S, H>(set: &mut S, shape: &H) -> Result<usize, SetError>
where
    S: DigitalSet<'d>,
    H: Shape<PointOf<S::Domain>> + ?Sized,
{
    let domain = set.domain();
    let mut added = 0;
    for p in domain.iter() {
        if shape.is_inside(&p) {
            set.insert_new(p)?;
            added += 1;
        }
    }
    debug!("digitize: {} points added to {}", added, set);
    Ok(added)
}
