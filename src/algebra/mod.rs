//! Polygon set algebra over an injected clipping engine.
//!
//! Every operation converts its floating inputs to fixed-point paths, runs
//! one Boolean operation on the [`ClippingEngine`], and converts the answer
//! back. Degenerate output paths are dropped and every returned polygon is
//! counter-clockwise. A [`Polygon`] has no holes, so a result region that
//! encloses a hole is cut along vertical lines through its holes and
//! returned as several hole-free pieces that together cover it.
//!
//! Inputs are checked against the fixed-point range; a coordinate that does
//! not fit the grid at the configured scale is reported as
//! [`ShapeError::CoordinateOutOfRange`](crate::ShapeError::CoordinateOutOfRange).
//!
//! # Example
//!
//! ```
//! use polyshape::algebra::PolygonAlgebra;
//! use polyshape::clip::FillRule;
//! use polyshape::polygon::Polygon;
//! use polyshape::Point2;
//!
//! let square = |x: f64, y: f64| {
//!     Polygon::new(vec![
//!         Point2::new(x, y),
//!         Point2::new(x + 2.0, y),
//!         Point2::new(x + 2.0, y + 2.0),
//!         Point2::new(x, y + 2.0),
//!     ])
//! };
//!
//! let algebra = PolygonAlgebra::new();
//! let merged = algebra
//!     .merge(&[square(0.0, 0.0), square(1.0, 1.0)], FillRule::NonZero)
//!     .unwrap();
//! assert_eq!(merged.len(), 1);
//! assert!((merged[0].area() - 7.0).abs() < 1e-6);
//! ```

mod difference;
mod expand;
mod fit;
mod holes;
mod merge;

pub use expand::{AreaMatch, ExpandToArea, Termination};

use crate::clip::{ClippingEngine, OverlayEngine};
use crate::config::GeometryConfig;
use crate::polygon::Polygon;

/// Boolean operations on polygons, parameterized by the clipping engine.
///
/// Holds only an immutable engine and config; every method is a pure
/// function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct PolygonAlgebra<E = OverlayEngine> {
    engine: E,
    config: GeometryConfig,
}

impl PolygonAlgebra<OverlayEngine> {
    /// Creates an algebra on the default engine and config.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: ClippingEngine> PolygonAlgebra<E> {
    /// Creates an algebra on a custom engine with the default config.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            config: GeometryConfig::default(),
        }
    }

    /// Replaces the precision settings.
    pub fn with_config(mut self, config: GeometryConfig) -> Self {
        self.config = config;
        self
    }

    /// Precision settings used for every conversion.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// The injected clipping engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Sorts polygons by descending area.
fn sort_by_area_desc(polygons: &mut [Polygon<f64>]) {
    polygons.sort_by(|a, b| b.area().total_cmp(&a.area()));
}
