//! Error types for U-Placement.

use crate::result::SearchFailure;
use thiserror::Error;

/// Errors produced by layout construction, validation and search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Board dimensions are not usable.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Search or constraint configuration is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A component the validator requires is absent from the layout.
    #[error("layout is missing required component '{0}'")]
    MissingComponent(String),

    /// A component was handed to the validator before it was placed.
    #[error("component '{0}' has no position")]
    Unplaced(String),

    /// Every attempt failed.
    #[error("{0}")]
    SearchExhausted(SearchFailure),
}

impl Error {
    /// Returns true for contract violations that no amount of retrying can fix.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::MissingComponent(_) | Self::Unplaced(_))
    }
}

/// Result type alias for U-Placement operations.
pub type Result<T> = std::result::Result<T, Error>;
