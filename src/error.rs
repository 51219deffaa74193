use thiserror::Error;

use crate::space::Coordinate;

/// Errors raised by the checked domain constructor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Inverted bounds on axis {axis}: lower = {lower} > upper = {upper}")]
    InvertedBounds {
        axis: usize,
        lower: Coordinate,
        upper: Coordinate,
    },

    /// The box holds more points than `usize` can count.
    #[error("Domain [{lower}, {upper}] has more than usize::MAX points")]
    TooLarge { lower: String, upper: String },
}

/// Errors raised by digital set mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The point cannot be stored by an offset-indexed set. Holds the
    /// display form of the point.
    #[error("Point {0} lies outside the governing domain")]
    OutOfDomain(String),
}

impl SetError {
    pub(crate) fn out_of_domain(p: &impl std::fmt::Display) -> Self {
        SetError::OutOfDomain(p.to_string())
    }
}
