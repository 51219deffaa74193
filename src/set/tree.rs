//! Ordered-tree-backed digital set, wrapping `std::collections::BTreeSet`.
//!
//! Balanced costs for every operation and no pre-sizing: the default choice
//! for large sets or sets that change a lot. Iteration is sorted.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::Copied;

use log::{debug, warn};

use super::{fmt_set, DigitalSet, SetKind};
use crate::domain::{Domain, PointOf};
use crate::error::SetError;

/// A digital set stored in a B-tree.
#[derive(Debug)]
pub struct TreeSet<'d, D: Domain> {
    domain: &'d D,
    points: BTreeSet<D::Point>,
}

impl<'d, D: Domain> TreeSet<'d, D> {
    pub fn new(domain: &'d D) -> Self {
        debug!("TreeSet::new()");
        Self {
            domain,
            points: BTreeSet::new(),
        }
    }

    /// Smallest point of the set.
    pub fn first(&self) -> Option<D::Point> {
        self.points.first().copied()
    }

    /// Largest point of the set.
    pub fn last(&self) -> Option<D::Point> {
        self.points.last().copied()
    }
}

impl<D: Domain> Clone for TreeSet<'_, D> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            points: self.points.clone(),
        }
    }
}

impl<'d, D: Domain + 'd> DigitalSet<'d> for TreeSet<'d, D> {
    type Domain = D;
    type Iter<'a>
        = Copied<btree_set::Iter<'a, D::Point>>
    where
        Self: 'a;

    fn new(domain: &'d D) -> Self {
        TreeSet::new(domain)
    }

    fn kind(&self) -> SetKind {
        SetKind::Tree
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
        Ok(self.points.insert(p))
    }

    /// Same as [`insert`][DigitalSet::insert]: the tree checks anyway, so a
    /// duplicate leaves the set unchanged.
    fn insert_new(&mut self, p: PointOf<D>) -> Result<(), SetError> {
        self.points.insert(p);
        Ok(())
    }

    fn erase(&mut self, p: &PointOf<D>) -> bool {
        self.points.remove(p)
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.points.iter().copied()
    }

    // No duplicates and an exact size by construction: only the domain check remains.
    fn is_valid(&self) -> bool {
        let domain = self.domain;
        match self.points.iter().find(|p| !domain.is_inside(*p)) {
            Some(p) => {
                warn!("TreeSet: point {} lies outside the domain", p);
                false
            }
            None => true,
        }
    }
}

impl<'d, D: Domain + 'd> fmt::Display for TreeSet<'d, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}
