//! polyshape - Polygon set algebra and shape approximation
//!
//! Boolean merge, difference and fitting of 2D polygons through a
//! fixed-point clipping engine, iterative area matching, convex hulls, and
//! vertex-count reduction.

pub mod algebra;
pub mod bridge;
pub mod clip;
pub mod config;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod simplify;
pub mod tolerance;

pub use algebra::{AreaMatch, ExpandToArea, PolygonAlgebra, Termination};
pub use config::GeometryConfig;
pub use error::{Result, ShapeError};
pub use polygon::{Anchor, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{orient2d, point_on_segment, segments_intersect, Orientation, Winding};
