//! # digiset: digital sets over integer lattices
//!
//! **`digiset`** provides the basic containers of digital geometry: points of
//! the N-dimensional integer lattice, box-shaped domains, and sets of points
//! bound to a domain, with several interchangeable container strategies.
//!
//! ## Key Features
//!
//! - **Typed spaces**: [`Point<N>`][crate::space::Point] carries its dimension in its type.
//! - **One contract, several containers**: [`VecSet`][crate::set::VecSet],
//!   [`TreeSet`][crate::set::TreeSet] and [`BitmapSet`][crate::set::BitmapSet] all implement
//!   [`DigitalSet`][crate::set::DigitalSet] and only differ in their performance profile.
//! - **Workload-driven selection**: describe how a set will be used and let the
//!   [`selector`] pick the container, at compile time or at run time.
//! - **Sets as domains**: [`DigitalSetDomain`][crate::set_domain::DigitalSetDomain]
//!   restricts a domain to the points of a set, and sets can be built over it in turn.
//! - **Borrow-checked lifetimes**: sets borrow their domain, views borrow their set.
//!
//! ## Basic Usage
//!
//! ```rust
//! use digiset::domain::{Domain, HyperRectDomain};
//! use digiset::selector::{Big, HighBel, HighIter, Hints, LowVar, Selected};
//! use digiset::set::DigitalSet;
//! use digiset::set_domain::DigitalSetDomain;
//! use digiset::shape::{digitize, Ball};
//! use digiset::space::Point;
//!
//! // 1. A 2D domain
//! let domain = HyperRectDomain::new(Point::new([-20, -20]), Point::new([20, 20]));
//!
//! // 2. A set type chosen from the expected workload
//! type Disk<'d> = Selected<'d, HyperRectDomain<2>, Hints<Big, LowVar, HighIter, HighBel>>;
//! let mut disk = Disk::new(&domain);
//!
//! // 3. Fill it with a digital disk, then punch out the center
//! digitize(&mut disk, &Ball::new(Point::zero(), 20.0)).unwrap();
//! disk.erase(&Point::zero());
//!
//! // 4. Iterate over it as a domain
//! let restricted = DigitalSetDomain::new(&disk);
//! assert_eq!(restricted.iter().count(), disk.size());
//! assert_eq!(restricted.lower_bound(), domain.lower_bound());
//! ```
//!
//! ## Core Components
//!
//! - **[`space`]**: lattice points.
//! - **[`domain`]**: the [`Domain`][crate::domain::Domain] capability and box domains.
//! - **[`set`]**: the [`DigitalSet`][crate::set::DigitalSet] contract and its containers.
//! - **[`selector`]**: container selection from usage hints.
//! - **[`set_domain`]**: domains restricted to a digital set.
//! - **[`shape`]**: the `is_inside` capability and digitization.

pub mod bitset;
pub mod domain;
pub mod error;
pub mod selector;
pub mod set;
pub mod set_domain;
pub mod shape;
pub mod space;
