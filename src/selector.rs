//! Picking a digital set container from usage hints.
//!
//! A workload is described along four independent axes:
//!
//! - expected **size** of the set: [`Small`], [`Medium`], [`Big`];
//! - **variability** (how often points are inserted and erased): [`LowVar`], [`HighVar`];
//! - **iteration** frequency: [`LowIter`], [`HighIter`];
//! - **membership**-test ("belonging") frequency: [`LowBel`], [`HighBel`].
//!
//! At compile time, a bundle [`Hints<Size, Var, Iter, Bel>`] resolves through
//! [`SelectSet`] to a concrete set type, named by [`Selected`]. At run time,
//! [`SetHints`] resolves the same table to a [`SetKind`] and builds an
//! [`AnySet`]. Both follow the same decision table:
//!
//! | size   | variability | iteration | membership | set           |
//! |--------|-------------|-----------|------------|---------------|
//! | Small  | Low         | any       | any        | [`VecSet`]    |
//! | Small  | High        | any       | any        | [`TreeSet`]   |
//! | Medium | any         | any       | High       | [`BitmapSet`] |
//! | Medium | any         | any       | Low        | [`TreeSet`]   |
//! | Big    | any         | any       | any        | [`TreeSet`]   |
//!
//! Small sets that rarely change are cheapest as a plain vector. Frequent
//! membership tests on a moderate domain pay for a pre-sized bitmap. Anything
//! big, or anything else, goes to the balanced tree.
//!
//! ```
//! use digiset::domain::{Domain, HyperRectDomain};
//! use digiset::selector::{HighBel, Hints, LowIter, LowVar, Medium, Selected};
//! use digiset::set::{DigitalSet, SetKind};
//! use digiset::space::Point;
//!
//! type Workload = Hints<Medium, LowVar, LowIter, HighBel>;
//!
//! let domain = HyperRectDomain::new(Point::new([0, 0]), Point::new([99, 99]));
//! let mut set = Selected::<HyperRectDomain<2>, Workload>::new(&domain);
//! set.insert(domain.lower_bound()).unwrap();
//! set.insert(domain.upper_bound()).unwrap();
//! assert_eq!(set.size(), 2);
//! assert_eq!(set.kind(), SetKind::Bitmap);
//! ```
//!
//! A bundle with its axes in the wrong slots has no [`SelectSet`] impl and is
//! rejected by the compiler.

use std::collections::btree_set;
use std::fmt;
use std::iter::Copied;
use std::marker::PhantomData;
use std::slice;

use log::debug;

use crate::domain::{Domain, PointOf};
use crate::error::SetError;
use crate::set::{BitmapIter, BitmapSet, DigitalSet, SetKind, TreeSet, VecSet};

// =============================================================================
// Runtime hints
// =============================================================================

/// Expected size of a set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Big,
}

/// Expected rate of insertions and erasures.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variability {
    Low,
    High,
}

/// Expected frequency of an operation (iteration, membership test).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Frequency {
    Low,
    High,
}

/// Runtime description of a set workload.
///
/// ```
/// use digiset::selector::{Frequency, SetHints, SizeClass};
/// use digiset::set::SetKind;
///
/// let hints = SetHints::default().with_size(SizeClass::Medium).with_membership(Frequency::High);
/// assert_eq!(hints.resolve(), SetKind::Bitmap);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SetHints {
    pub size: SizeClass,
    pub variability: Variability,
    pub iteration: Frequency,
    pub membership: Frequency,
}

impl Default for SetHints {
    fn default() -> Self {
        Self {
            size: SizeClass::Medium,
            variability: Variability::Low,
            iteration: Frequency::Low,
            membership: Frequency::Low,
        }
    }
}

impl SetHints {
    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    pub fn with_variability(mut self, variability: Variability) -> Self {
        self.variability = variability;
        self
    }

    pub fn with_iteration(mut self, iteration: Frequency) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn with_membership(mut self, membership: Frequency) -> Self {
        self.membership = membership;
        self
    }

    /// The container best suited to the workload.
    pub fn resolve(&self) -> SetKind {
        let kind = match (self.size, self.variability, self.membership) {
            (SizeClass::Small, Variability::Low, _) => SetKind::Vector,
            (SizeClass::Small, Variability::High, _) => SetKind::Tree,
            (SizeClass::Medium, _, Frequency::High) => SetKind::Bitmap,
            (SizeClass::Medium, _, Frequency::Low) => SetKind::Tree,
            (SizeClass::Big, _, _) => SetKind::Tree,
        };
        debug!("resolve({:?}) => {}", self, kind);
        kind
    }

    /// Builds an empty set of the resolved kind over `domain`.
    pub fn build<'d, D: Domain + 'd>(&self, domain: &'d D) -> AnySet<'d, D> {
        AnySet::with_kind(domain, self.resolve())
    }
}

// =============================================================================
// Type-level hints
// =============================================================================

mod sealed {
    pub trait Sealed {}
}

/// Size axis of a [`Hints`] bundle.
pub trait SizeHint: sealed::Sealed {
    const CLASS: SizeClass;
}

/// Variability axis of a [`Hints`] bundle.
pub trait VariabilityHint: sealed::Sealed {
    const LEVEL: Variability;
}

/// Iteration-frequency axis of a [`Hints`] bundle.
pub trait IterationHint: sealed::Sealed {
    const FREQUENCY: Frequency;
}

/// Membership-frequency axis of a [`Hints`] bundle.
pub trait MembershipHint: sealed::Sealed {
    const FREQUENCY: Frequency;
}

macro_rules! hint_markers {
    ($($(#[$doc:meta])* $name:ident: $trait:ident::$konst:ident: $ty:ty = $value:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Copy, Clone, Eq, PartialEq)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl $trait for $name {
                const $konst: $ty = $value;
            }
        )*
    };
}

hint_markers! {
    /// Few points.
    Small: SizeHint::CLASS: SizeClass = SizeClass::Small;
    /// A moderate number of points on a moderate domain.
    Medium: SizeHint::CLASS: SizeClass = SizeClass::Medium;
    /// Many points, or an unbounded expectation.
    Big: SizeHint::CLASS: SizeClass = SizeClass::Big;
    LowVar: VariabilityHint::LEVEL: Variability = Variability::Low;
    HighVar: VariabilityHint::LEVEL: Variability = Variability::High;
    LowIter: IterationHint::FREQUENCY: Frequency = Frequency::Low;
    HighIter: IterationHint::FREQUENCY: Frequency = Frequency::High;
    LowBel: MembershipHint::FREQUENCY: Frequency = Frequency::Low;
    HighBel: MembershipHint::FREQUENCY: Frequency = Frequency::High;
}

/// A compile-time workload description.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Hints<S, V, I, B>(PhantomData<(S, V, I, B)>);

/// A well-formed [`Hints`] bundle, with its runtime counterpart.
pub trait HintBundle {
    const HINTS: SetHints;
}

impl<S: SizeHint, V: VariabilityHint, I: IterationHint, B: MembershipHint> HintBundle
    for Hints<S, V, I, B>
{
    const HINTS: SetHints = SetHints {
        size: S::CLASS,
        variability: V::LEVEL,
        iteration: I::FREQUENCY,
        membership: B::FREQUENCY,
    };
}

/// Resolution of a hint bundle to a set type over domain `D`.
pub trait SelectSet<'d, D: Domain + 'd>: HintBundle {
    type Set: DigitalSet<'d, Domain = D>;
    const KIND: SetKind;
}

/// The set type selected by hints `H` over domain `D`.
pub type Selected<'d, D, H> = <H as SelectSet<'d, D>>::Set;

impl<'d, D, I, B> SelectSet<'d, D> for Hints<Small, LowVar, I, B>
where
    D: Domain + 'd,
    I: IterationHint,
    B: MembershipHint,
{
    type Set = VecSet<'d, D>;
    const KIND: SetKind = SetKind::Vector;
}

impl<'d, D, I, B> SelectSet<'d, D> for Hints<Small, HighVar, I, B>
where
    D: Domain + 'd,
    I: IterationHint,
    B: MembershipHint,
{
    type Set = TreeSet<'d, D>;
    const KIND: SetKind = SetKind::Tree;
}

impl<'d, D, V, I> SelectSet<'d, D> for Hints<Medium, V, I, HighBel>
where
    D: Domain + 'd,
    V: VariabilityHint,
    I: IterationHint,
{
    type Set = BitmapSet<'d, D>;
    const KIND: SetKind = SetKind::Bitmap;
}

impl<'d, D, V, I> SelectSet<'d, D> for Hints<Medium, V, I, LowBel>
where
    D: Domain + 'd,
    V: VariabilityHint,
    I: IterationHint,
{
    type Set = TreeSet<'d, D>;
    const KIND: SetKind = SetKind::Tree;
}

impl<'d, D, V, I, B> SelectSet<'d, D> for Hints<Big, V, I, B>
where
    D: Domain + 'd,
    V: VariabilityHint,
    I: IterationHint,
    B: MembershipHint,
{
    type Set = TreeSet<'d, D>;
    const KIND: SetKind = SetKind::Tree;
}

// =============================================================================
// Runtime dispatch
// =============================================================================

/// A digital set whose container is chosen at run time.
#[derive(Debug)]
pub enum AnySet<'d, D: Domain> {
    Vector(VecSet<'d, D>),
    Tree(TreeSet<'d, D>),
    Bitmap(BitmapSet<'d, D>),
}

impl<'d, D: Domain + 'd> AnySet<'d, D> {
    /// Creates an empty set of the given kind over `domain`.
    pub fn with_kind(domain: &'d D, kind: SetKind) -> Self {
        debug!("AnySet::with_kind({})", kind);
        match kind {
            SetKind::Vector => AnySet::Vector(VecSet::new(domain)),
            SetKind::Tree => AnySet::Tree(TreeSet::new(domain)),
            SetKind::Bitmap => AnySet::Bitmap(BitmapSet::new(domain)),
        }
    }
}

impl<D: Domain> Clone for AnySet<'_, D> {
    fn clone(&self) -> Self {
        match self {
            AnySet::Vector(s) => AnySet::Vector(s.clone()),
            AnySet::Tree(s) => AnySet::Tree(s.clone()),
            AnySet::Bitmap(s) => AnySet::Bitmap(s.clone()),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            AnySet::Vector($s) => $body,
            AnySet::Tree($s) => $body,
            AnySet::Bitmap($s) => $body,
        }
    };
}

/// Iterator over an [`AnySet`].
pub enum AnyIter<'a, D: Domain + 'a> {
    Vector(Copied<slice::Iter<'a, D::Point>>),
    Tree(Copied<btree_set::Iter<'a, D::Point>>),
    Bitmap(BitmapIter<'a, D>),
}

impl<'a, D: Domain + 'a> Iterator for AnyIter<'a, D> {
    type Item = PointOf<D>;

    fn next(&mut self) -> Option<PointOf<D>> {
        match self {
            AnyIter::Vector(it) => it.next(),
            AnyIter::Tree(it) => it.next(),
            AnyIter::Bitmap(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnyIter::Vector(it) => it.size_hint(),
            AnyIter::Tree(it) => it.size_hint(),
            AnyIter::Bitmap(it) => it.size_hint(),
        }
    }
}

impl<'a, D: Domain + 'a> ExactSizeIterator for AnyIter<'a, D> {}

impl<'d, D: Domain + 'd> DigitalSet<'d> for AnySet<'d, D> {
    type Domain = D;
    type Iter<'a>
        = AnyIter<'a, D>
    where
        Self: 'a;

    /// Creates a set for the default [`SetHints`].
    fn new(domain: &'d D) -> Self {
        SetHints::default().build(domain)
    }

    fn kind(&self) -> SetKind {
        dispatch!(self, s => s.kind())
    }

    fn domain(&self) -> &'d D {
        dispatch!(self, s => s.domain())
    }

    fn size(&self) -> usize {
        dispatch!(self, s => s.size())
    }

    fn contains(&self, p: &PointOf<D>) -> bool {
        dispatch!(self, s => s.contains(p))
    }

    fn insert(&mut self, p: PointOf<D>) -> Result<bool, SetError> {
        dispatch!(self, s => s.insert(p))
    }

    fn insert_new(&mut self, p: PointOf<D>) -> Result<(), SetError> {
        dispatch!(self, s => s.insert_new(p))
    }

    fn erase(&mut self, p: &PointOf<D>) -> bool {
        dispatch!(self, s => s.erase(p))
    }

    fn clear(&mut self) {
        dispatch!(self, s => s.clear())
    }

    fn iter(&self) -> AnyIter<'_, D> {
        match self {
            AnySet::Vector(s) => AnyIter::Vector(s.iter()),
            AnySet::Tree(s) => AnyIter::Tree(s.iter()),
            AnySet::Bitmap(s) => AnyIter::Bitmap(s.iter()),
        }
    }

    fn new_empty(&self) -> Self {
        AnySet::with_kind(self.domain(), self.kind())
    }

    fn is_valid(&self) -> bool {
        dispatch!(self, s => s.is_valid())
    }
}

impl<'d, D: Domain + 'd> fmt::Display for AnySet<'d, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, s => fmt::Display::fmt(s, f))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::domain::HyperRectDomain;
    use crate::space::Point;

    type Domain4 = HyperRectDomain<4>;

    fn domain_4d() -> Domain4 {
        HyperRectDomain::new(Point::new([1, 2, 3, 4]), Point::new([5, 5, 3, 5]))
    }

    fn check_bounds_pair<'d, H: SelectSet<'d, Domain4>>(domain: &'d Domain4) {
        let mut set = Selected::<Domain4, H>::new(domain);
        set.insert(domain.lower_bound()).unwrap();
        set.insert(domain.upper_bound()).unwrap();
        assert_eq!(set.size(), 2);
        assert_eq!(set.kind(), H::KIND);
        assert_eq!(H::KIND, H::HINTS.resolve());
    }

    #[test]
    fn test_small_set() {
        let domain = domain_4d();
        check_bounds_pair::<Hints<Small, LowVar, LowIter, LowBel>>(&domain);
        assert_eq!(
            <Hints<Small, LowVar, LowIter, LowBel> as SelectSet<'_, Domain4>>::KIND,
            SetKind::Vector
        );
    }

    #[test]
    fn test_big_set() {
        let domain = domain_4d();
        check_bounds_pair::<Hints<Big, LowVar, LowIter, LowBel>>(&domain);
        assert_eq!(
            <Hints<Big, LowVar, LowIter, LowBel> as SelectSet<'_, Domain4>>::KIND,
            SetKind::Tree
        );
    }

    #[test]
    fn test_medium_set_high_belonging() {
        let domain = domain_4d();
        check_bounds_pair::<Hints<Medium, LowVar, LowIter, HighBel>>(&domain);
        assert_eq!(
            <Hints<Medium, LowVar, LowIter, HighBel> as SelectSet<'_, Domain4>>::KIND,
            SetKind::Bitmap
        );
    }

    macro_rules! check_all {
        ($domain:expr; $($s:ident $v:ident $i:ident $b:ident),* $(,)?) => {
            $( check_bounds_pair::<Hints<$s, $v, $i, $b>>($domain); )*
        };
    }

    #[test]
    fn test_type_level_matches_runtime_for_all_bundles() {
        let domain = domain_4d();
        check_all!(&domain;
            Small LowVar LowIter LowBel, Small LowVar LowIter HighBel,
            Small LowVar HighIter LowBel, Small LowVar HighIter HighBel,
            Small HighVar LowIter LowBel, Small HighVar LowIter HighBel,
            Small HighVar HighIter LowBel, Small HighVar HighIter HighBel,
            Medium LowVar LowIter LowBel, Medium LowVar LowIter HighBel,
            Medium LowVar HighIter LowBel, Medium LowVar HighIter HighBel,
            Medium HighVar LowIter LowBel, Medium HighVar LowIter HighBel,
            Medium HighVar HighIter LowBel, Medium HighVar HighIter HighBel,
            Big LowVar LowIter LowBel, Big LowVar LowIter HighBel,
            Big LowVar HighIter LowBel, Big LowVar HighIter HighBel,
            Big HighVar LowIter LowBel, Big HighVar LowIter HighBel,
            Big HighVar HighIter LowBel, Big HighVar HighIter HighBel,
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let hints = SetHints::default()
            .with_size(SizeClass::Small)
            .with_variability(Variability::High)
            .with_iteration(Frequency::High);
        assert_eq!(hints.resolve(), hints.resolve());
        assert_eq!(hints.resolve(), SetKind::Tree);
        assert_eq!(SetHints::default().resolve(), SetKind::Tree);
    }

    #[test]
    fn test_any_set_behaves_like_its_kind() {
        let domain = domain_4d();
        for kind in [SetKind::Vector, SetKind::Tree, SetKind::Bitmap] {
            let mut set = AnySet::with_kind(&domain, kind);
            assert_eq!(set.kind(), kind);
            set.insert(Point::new([4, 3, 3, 4])).unwrap();
            set.insert(Point::new([2, 5, 3, 5])).unwrap();
            set.insert(Point::new([2, 5, 3, 4])).unwrap();
            set.insert(Point::new([2, 5, 3, 5])).unwrap();
            assert_eq!(set.size(), 3);
            assert_eq!(set.iter().len(), 3);
            let mut it = set.iter();
            it.next();
            assert_eq!(it.size_hint(), (2, Some(2)));
            assert!(set.is_valid());
            assert_eq!(set.to_string(), format!("[{}] size=3", kind));

            let comp = set.complement().unwrap();
            assert_eq!(comp.kind(), kind);
            assert_eq!(comp.size(), domain.size() - 3);
        }
    }

    #[test]
    fn test_build_from_hints() {
        let domain = domain_4d();
        let hints = SetHints::default()
            .with_size(SizeClass::Medium)
            .with_membership(Frequency::High);
        let set = hints.build(&domain);
        assert_eq!(set.kind(), SetKind::Bitmap);
        assert!(set.is_empty());
    }
}
