//! Ramer-Douglas-Peucker reduction.
//!
//! Keeps the endpoints of a range and splits at the point farthest from the
//! segment joining them while that distance exceeds the tolerance. Ranges
//! are processed from an explicit work stack, so very long inputs cannot
//! exhaust the call stack.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::farthest_point;
use num_traits::Float;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// The first and last points are always preserved. A point survives when
/// its squared distance to the segment between its enclosing kept points
/// exceeds `tolerance²`.
///
/// # Example
///
/// ```
/// use polyshape::{Point2, simplify::douglas_peucker};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the line, will be removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from line, will be kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = douglas_peucker(&points, 0.5);
/// assert!(simplified.len() < points.len());
/// ```
pub fn douglas_peucker<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<Point2<F>> {
    douglas_peucker_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// Useful when the points carry associated data (elevations, timestamps).
/// Indices are ascending and include `0` and `len - 1` for two or more
/// points.
pub fn douglas_peucker_indices<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;
    reduce(points, tolerance, &mut keep, vec![(0, n - 1)]);
    kept_indices(&keep)
}

/// Marks the points to keep inside each `(first, last)` range.
fn reduce<F: Float>(
    points: &[Point2<F>],
    tolerance: F,
    keep: &mut [bool],
    mut stack: Vec<(usize, usize)>,
) {
    let tol_sq = tolerance * tolerance;
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 {
            continue;
        }

        let segment = Segment2::new(points[first], points[last]);
        let (max_idx, max_dist_sq) = ((first + 1)..last)
            .map(|i| (i, segment.distance_squared_to_point(points[i])))
            .fold((first, F::zero()), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            });

        if max_dist_sq > tol_sq {
            keep[max_idx] = true;
            stack.push((first, max_idx));
            stack.push((max_idx, last));
        }
    }
}

fn kept_indices(keep: &[bool]) -> Vec<usize> {
    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}

impl<F: Float> Polygon<F> {
    /// Reduces the closed ring with Douglas-Peucker.
    ///
    /// The ring is split at its first vertex and the vertex farthest from
    /// it; both are always kept. Returns `None` when fewer than three
    /// vertices survive.
    pub fn simplified(&self, tolerance: F) -> Option<Polygon<F>> {
        let first = *self.vertices.first()?;
        let split = farthest_point(&self.vertices, first)?;

        let mut ring = self.vertices.clone();
        ring.push(first);
        let closing = ring.len() - 1;

        let mut keep = vec![false; ring.len()];
        keep[0] = true;
        keep[split] = true;
        reduce(&ring, tolerance, &mut keep, vec![(0, split), (split, closing)]);
        keep[closing] = false;

        let vertices: Vec<Point2<F>> = kept_indices(&keep).into_iter().map(|i| ring[i]).collect();
        (vertices.len() >= 3).then(|| Polygon::new(vertices))
    }
}
