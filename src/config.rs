//! Fixed-point precision and equality tolerance.

use crate::error::{Result, ShapeError};

/// Scale applied to floating coordinates before clipping.
///
/// Keeps twelve decimal places. At this scale the fixed-point range
/// ([`MAX_FIXED_COORD`](crate::bridge::MAX_FIXED_COORD)) admits coordinates up
/// to about ±2.3e6; larger inputs are rejected with
/// [`ShapeError::CoordinateOutOfRange`], so pick a smaller scale for them.
pub const DEFAULT_SCALE: f64 = 1e12;

/// Point-equality tolerance in floating coordinates.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Precision settings threaded through every clipping call.
///
/// # Example
///
/// ```
/// use polyshape::GeometryConfig;
///
/// let config = GeometryConfig::default().with_scale(1e6).unwrap();
/// assert_eq!(config.scale(), 1e6);
/// assert_eq!(config.epsilon(), 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    scale: f64,
    epsilon: f64,
}

impl GeometryConfig {
    /// Creates a config, rejecting non-finite or non-positive values.
    pub fn new(scale: f64, epsilon: f64) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ShapeError::InvalidConfig("scale must be finite and positive"));
        }
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(ShapeError::InvalidConfig("epsilon must be finite and positive"));
        }
        Ok(Self { scale, epsilon })
    }

    /// Returns a copy with a different fixed-point scale.
    pub fn with_scale(self, scale: f64) -> Result<Self> {
        Self::new(scale, self.epsilon)
    }

    /// Returns a copy with a different equality tolerance.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        Self::new(self.scale, epsilon)
    }

    /// Multiplier from floating to fixed-point coordinates.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Point-equality tolerance, also used as the sliver area threshold.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
