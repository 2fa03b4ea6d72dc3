//! Vertex-count reduction for polylines and polygons.
//!
//! [`simplify`] chains an optional [`radial_distance`] thinning pass with
//! [`douglas_peucker`]. Polygons use the same reduction through
//! [`Polygon::simplified`](crate::polygon::Polygon::simplified).

mod radial;
mod rdp;

pub use radial::radial_distance;
pub use rdp::{douglas_peucker, douglas_peucker_indices};

use crate::primitives::Point2;
use num_traits::Float;

/// Reduces an ordered point sequence.
///
/// Runs the radial pre-pass unless `highest_quality` is set, then
/// Douglas-Peucker. Inputs of two points or fewer come back unchanged. The
/// first and last points are always preserved.
///
/// # Example
///
/// ```
/// use polyshape::simplify::simplify;
/// use polyshape::Point2;
///
/// let zigzag: Vec<Point2<f64>> = [(0.0, 0.0), (5.0, 0.0), (7.0, 7.0), (10.0, 15.0),
///     (15.0, 20.0), (10.0, 20.0), (5.0, 10.0)]
///     .iter()
///     .map(|&(x, y)| Point2::new(x, y))
///     .collect();
///
/// let reduced = simplify(&zigzag, 5.0, false);
/// assert_eq!(reduced, vec![zigzag[0], zigzag[4], zigzag[6]]);
/// ```
pub fn simplify<F: Float>(points: &[Point2<F>], tolerance: F, highest_quality: bool) -> Vec<Point2<F>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    if highest_quality {
        douglas_peucker(points, tolerance)
    } else {
        douglas_peucker(&radial_distance(points, tolerance), tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn zigzag() -> Vec<Point2<f64>> {
        pts(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (7.0, 7.0),
            (10.0, 15.0),
            (15.0, 20.0),
            (10.0, 20.0),
            (5.0, 10.0),
        ])
    }

    #[test]
    fn test_simplify_zigzag() {
        let points = zigzag();
        let expected = vec![points[0], points[4], points[6]];
        assert_eq!(simplify(&points, 5.0, false), expected);
        assert_eq!(simplify(&points, 5.0, true), expected);
    }

    #[test]
    fn test_simplify_tolerance_bands_on_zigzag() {
        let points = zigzag();
        assert_eq!(simplify(&points, 0.1, false), points);
        // (7, 7) sits about 0.32 from the chord between its neighbours
        let reduced = simplify(&points, 0.5, false);
        assert_eq!(reduced.len(), 6);
        assert!(!reduced.contains(&points[2]));
    }

    #[test]
    fn test_simplify_short_inputs_unchanged() {
        let two = pts(&[(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(simplify(&two, 10.0, false), two);
        let empty: Vec<Point2<f64>> = vec![];
        assert!(simplify(&empty, 1.0, true).is_empty());
    }

    #[test]
    fn test_simplify_zero_tolerance_drops_only_collinear() {
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 0.0), // collinear
            (2.0, 0.0),
            (2.0, 1.0),
            (3.0, 2.0),
            (4.0, 3.0), // collinear
            (5.0, 4.0),
            (5.0, 6.0),
        ]);
        let reduced = simplify(&points, 0.0, true);
        assert_eq!(
            reduced,
            pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (5.0, 4.0), (5.0, 6.0)])
        );
    }

    #[test]
    fn test_simplify_never_grows_and_keeps_endpoints() {
        let points: Vec<Point2<f64>> = (0..50)
            .map(|i| {
                let t = i as f64 * 0.3;
                Point2::new(t, (t * 1.7).sin() * 2.0)
            })
            .collect();
        for &tolerance in &[0.0, 0.01, 0.1, 0.5, 2.0, 10.0] {
            for &hq in &[false, true] {
                let reduced = simplify(&points, tolerance, hq);
                assert!(reduced.len() <= points.len());
                assert_eq!(reduced.first(), points.first());
                assert_eq!(reduced.last(), points.last());
            }
        }
    }
}
