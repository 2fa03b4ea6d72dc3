//! Radial distance thinning.
//!
//! A single O(n) pass that drops points crowding the last kept point. Used
//! as a cheap pre-pass before Douglas-Peucker.

use crate::primitives::Point2;
use num_traits::Float;

/// Removes points within `tolerance` of the last kept point.
///
/// A point is kept when its squared distance to the last kept point exceeds
/// `tolerance²`. The first point is always kept, and the last point is
/// appended if the walk did not already end on it.
///
/// # Example
///
/// ```
/// use polyshape::simplify::radial_distance;
/// use polyshape::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0),  // Too close, will be removed
///     Point2::new(0.2, 0.0),  // Too close, will be removed
///     Point2::new(1.0, 0.0),  // Far enough, kept
///     Point2::new(1.05, 0.0), // Too close, will be removed
///     Point2::new(2.0, 0.0),  // Far enough, kept
/// ];
///
/// let thinned = radial_distance(&points, 0.5);
/// assert_eq!(thinned.len(), 3);
/// ```
pub fn radial_distance<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<Point2<F>> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let tol_sq = tolerance * tolerance;
    let mut kept = Vec::with_capacity(points.len());
    kept.push(first);
    let mut last_kept = first;

    for &point in rest {
        if point.distance_squared(last_kept) > tol_sq {
            kept.push(point);
            last_kept = point;
        }
    }

    if let Some(&last) = rest.last() {
        if last_kept != last {
            kept.push(last);
        }
    }

    kept
}
