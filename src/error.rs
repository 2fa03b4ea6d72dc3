//! Error types for polyshape operations.

use thiserror::Error;

/// Invalid-argument errors raised at the call boundary.
///
/// Geometric degeneracy (slivers, self-intersecting clip output, empty fits)
/// is never reported through this type; those results are filtered out or
/// returned as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A requested area was zero, negative or not finite.
    #[error("area must be positive, got {0}")]
    NonPositiveArea(f64),

    /// A requested aspect ratio was zero, negative or not finite.
    #[error("ratio must be positive, got {0}")]
    NonPositiveRatio(f64),

    /// A spacing interval was zero, negative or not finite.
    #[error("interval must be positive, got {0}")]
    NonPositiveInterval(f64),

    /// A convergence tolerance was zero, negative or not finite.
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    /// An iteration cap of zero was requested.
    #[error("iteration limit must be at least 1")]
    InvalidIterationLimit,

    /// Geometry configuration values were rejected.
    #[error("invalid geometry config: {0}")]
    InvalidConfig(&'static str),

    /// A coordinate does not fit the fixed-point range at the configured scale.
    #[error("coordinate {0} is outside the fixed-point range")]
    CoordinateOutOfRange(f64),

    /// A required polygon had fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    EmptyPolygon(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShapeError>;
