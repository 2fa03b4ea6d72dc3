//! Convex hull of planar point sets.
//!
//! # Example
//!
//! ```
//! use polyshape::hull::convex_hull;
//! use polyshape::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//!
//! // Hull should be the 4 corners (interior point excluded)
//! assert_eq!(hull.len(), 4);
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::tolerance::signed_area;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order without repeating
/// the first point. Collinear points on hull edges are excluded.
///
/// # Algorithm
///
/// 1. Sort points lexicographically (by x, then by y) and drop duplicates
/// 2. Build the upper chain from left to right, keeping only strict
///    clockwise turns
/// 3. Build the lower chain from right to left the same way
/// 4. Concatenate without the shared endpoints and reverse
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// # Returns
///
/// Zero or one input point is returned unchanged. Input whose points all
/// coincide returns that single point; collinear input returns its two
/// extreme points.
///
/// # Example
///
/// ```
/// use polyshape::hull::convex_hull;
/// use polyshape::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = convex_hull(&points);
/// assert_eq!(hull.len(), 4); // Square corners
/// ```
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();

    let mut upper = chain(sorted.iter().copied());
    if upper.len() == 1 {
        return upper;
    }
    let mut lower = chain(sorted.iter().rev().copied());

    // Each chain ends where the other begins
    upper.pop();
    lower.pop();

    upper.extend(lower);
    upper.reverse();
    upper
}

/// One monotone chain, popping while the last three points fail to turn
/// strictly clockwise.
fn chain<F: Float>(points: impl Iterator<Item = Point2<F>>) -> Vec<Point2<F>> {
    let mut chain: Vec<Point2<F>> = Vec::new();
    for p in points {
        while chain.len() >= 2
            && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], &p) >= F::zero()
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Computes the area enclosed by a hull.
///
/// Returns 0 for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use polyshape::hull::{convex_hull, convex_hull_area};
/// use polyshape::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = convex_hull(&points);
/// assert!((convex_hull_area(&hull) - 4.0).abs() < 1e-10);
/// ```
pub fn convex_hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    signed_area(hull).abs()
}

/// Tests if a point is inside a counter-clockwise convex hull.
///
/// A point on the boundary is considered inside. Hulls with fewer than 3
/// vertices contain nothing.
pub fn point_in_convex_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    if hull.len() < 3 {
        return false;
    }

    let n = hull.len();
    (0..n).all(|i| cross(&hull[i], &hull[(i + 1) % n], &point) >= F::zero())
}

impl<F: Float> Polygon<F> {
    /// Returns the convex hull of this polygon's vertices.
    pub fn convex_hull(&self) -> Polygon<F> {
        Polygon::new(convex_hull(&self.vertices))
    }
}

/// Cross product of vectors OA and OB where O is the origin point.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
fn cross<F: Float>(o: &Point2<F>, a: &Point2<F>, b: &Point2<F>) -> F {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn staircase() -> Vec<Point2<f64>> {
        pts(&[
            (6.0, 11.0),
            (6.0, 7.0),
            (2.0, 7.0),
            (2.0, 4.0),
            (6.0, 0.0),
            (9.0, 0.0),
            (9.0, 4.0),
            (13.0, 4.0),
            (13.0, 7.0),
            (9.0, 7.0),
            (9.0, 11.0),
            (6.0, 4.0),
        ])
    }

    #[test]
    fn test_convex_hull_empty_and_single() {
        let empty: Vec<Point2<f64>> = vec![];
        assert!(convex_hull(&empty).is_empty());

        let single = pts(&[(1.0, 2.0)]);
        assert_eq!(convex_hull(&single), single);
    }

    #[test]
    fn test_convex_hull_coincident_points() {
        let points = pts(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
        assert_eq!(convex_hull(&points), pts(&[(3.0, 3.0)]));
    }

    #[test]
    fn test_convex_hull_collinear() {
        let points = pts(&[(1.0, 1.0), (0.0, 0.0), (3.0, 3.0), (2.0, 2.0)]);
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 2);
        assert!(hull.contains(&Point2::new(0.0, 0.0)));
        assert!(hull.contains(&Point2::new(3.0, 3.0)));
    }

    #[test]
    fn test_convex_hull_staircase() {
        let hull = convex_hull(&staircase());
        assert_eq!(
            hull,
            pts(&[
                (6.0, 0.0),
                (9.0, 0.0),
                (13.0, 4.0),
                (13.0, 7.0),
                (9.0, 11.0),
                (6.0, 11.0),
                (2.0, 7.0),
                (2.0, 4.0),
            ])
        );
    }

    #[test]
    fn test_convex_hull_contains_every_input_point() {
        let points = staircase();
        let hull = convex_hull(&points);
        for p in &points {
            assert!(point_in_convex_hull(&hull, *p), "{:?} outside hull", p);
        }
    }

    #[test]
    fn test_convex_hull_ccw_order() {
        let hull = convex_hull(&staircase());
        assert!(signed_area(&hull) > 0.0);
    }

    #[test]
    fn test_convex_hull_drops_edge_midpoints() {
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (1.0, 1.0),
        ]);
        assert_eq!(convex_hull(&points).len(), 4);
    }

    #[test]
    fn test_convex_hull_area() {
        let hull = convex_hull(&staircase());
        // 11 x 11 bounding box minus four 4 x 4 corner triangles
        assert_relative_eq!(convex_hull_area(&hull), 121.0 - 4.0 * 8.0, epsilon = 1e-10);
        assert_eq!(convex_hull_area::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_point_in_convex_hull() {
        let hull = convex_hull(&pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
        assert!(point_in_convex_hull(&hull, Point2::new(1.0, 1.0)));
        assert!(point_in_convex_hull(&hull, Point2::new(2.0, 1.0)));
        assert!(!point_in_convex_hull(&hull, Point2::new(3.0, 3.0)));
        assert!(!point_in_convex_hull(&hull[..2], Point2::new(1.0, 0.0)));
    }

    #[test]
    fn test_polygon_convex_hull() {
        let notched = Polygon::new(pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (2.0, 1.0),
            (0.0, 4.0),
        ]));
        let hull = notched.convex_hull();
        assert_eq!(hull.len(), 4);
        assert!(hull.is_ccw());
        assert_relative_eq!(hull.area(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convex_hull_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.2),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(convex_hull(&points).len(), 3);
    }
}
