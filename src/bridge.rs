//! Bridge between floating-point polygons and fixed-point clipping paths.
//!
//! # Conversion Strategy
//!
//! - **Float → Fixed**: coordinates are multiplied by the scale, rounded to
//!   the nearest integer, and consecutive duplicates are dropped. A coordinate
//!   whose scaled magnitude exceeds [`MAX_FIXED_COORD`] (or that is not
//!   finite) is rejected with [`ShapeError::CoordinateOutOfRange`] instead of
//!   saturating.
//! - **Fixed → Float**: coordinates are divided by the scale, near-duplicate
//!   neighbours are merged, and the loop is screened for degeneracy. Paths
//!   that collapsed or self-intersect come back as `None`; callers drop them.
//!
//! # Example
//!
//! ```
//! use polyshape::bridge::{from_fixed_path, to_fixed_path};
//! use polyshape::polygon::Polygon;
//! use polyshape::Point2;
//!
//! let tri = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.25, 0.0),
//!     Point2::new(0.0, 2.5),
//! ]);
//!
//! let path = to_fixed_path(&tri, 1000.0).unwrap();
//! assert_eq!(path[1].x, 1250);
//!
//! let back = from_fixed_path(&path, 1000.0, 1e-9).unwrap();
//! assert_eq!(back, tri);
//! ```

use crate::clip::{FixedPath, FixedPoint};
use crate::error::{Result, ShapeError};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::tolerance::points_near_equal;

/// Largest scaled coordinate magnitude accepted on the fixed-point grid.
///
/// 2^61, a quarter of the `i64` range, so differences between coordinates
/// and the padding added around split boxes cannot overflow.
pub const MAX_FIXED_COORD: f64 = 2_305_843_009_213_693_952.0;

fn to_fixed(value: f64, scale: f64) -> Result<i64> {
    let scaled = (value * scale).round();
    if scaled.is_finite() && scaled.abs() <= MAX_FIXED_COORD {
        Ok(scaled as i64)
    } else {
        Err(ShapeError::CoordinateOutOfRange(value))
    }
}

/// Converts a floating polygon to a fixed-point path.
///
/// # Errors
///
/// Returns [`ShapeError::CoordinateOutOfRange`] when a scaled coordinate
/// does not fit the fixed-point grid.
pub fn to_fixed_path(polygon: &Polygon<f64>, scale: f64) -> Result<FixedPath> {
    let mut path: FixedPath = polygon
        .vertices
        .iter()
        .map(|p| Ok(FixedPoint::new(to_fixed(p.x, scale)?, to_fixed(p.y, scale)?)))
        .collect::<Result<_>>()?;

    path.dedup();
    if path.len() > 1 && path.first() == path.last() {
        path.pop();
    }
    Ok(path)
}

/// Converts a batch of polygons to fixed-point paths, failing on the first
/// out-of-range coordinate.
pub fn to_fixed_paths<'a>(
    polygons: impl IntoIterator<Item = &'a Polygon<f64>>,
    scale: f64,
) -> Result<Vec<FixedPath>> {
    polygons
        .into_iter()
        .map(|p| to_fixed_path(p, scale))
        .collect()
}

/// Converts a fixed-point path back to a polygon, screening degeneracy.
///
/// Returns `None` when fewer than three distinct points remain, when an edge
/// has zero length, or when two edges meet anywhere other than a shared
/// endpoint. This is the expected outcome for slivers, not an error.
pub fn from_fixed_path(path: &[FixedPoint], scale: f64, epsilon: f64) -> Option<Polygon<f64>> {
    let mut vertices: Vec<Point2<f64>> = Vec::with_capacity(path.len());
    for p in path {
        let point = Point2::new(p.x as f64 / scale, p.y as f64 / scale);
        if vertices
            .last()
            .map_or(true, |&last| !points_near_equal(last, point, epsilon))
        {
            vertices.push(point);
        }
    }
    while vertices.len() > 1 && points_near_equal(vertices[0], vertices[vertices.len() - 1], epsilon) {
        vertices.pop();
    }

    if vertices.len() < 3 {
        return None;
    }

    let polygon = Polygon::new(vertices);
    polygon.is_simple(epsilon).then_some(polygon)
}

/// Converts a batch of paths, dropping every degenerate one.
pub fn from_fixed_paths(paths: &[FixedPath], scale: f64, epsilon: f64) -> Vec<Polygon<f64>> {
    let polygons: Vec<Polygon<f64>> = paths
        .iter()
        .filter_map(|p| from_fixed_path(p, scale, epsilon))
        .collect();

    let dropped = paths.len() - polygons.len();
    if dropped > 0 {
        tracing::trace!(dropped, kept = polygons.len(), "dropped degenerate paths");
    }
    polygons
}
