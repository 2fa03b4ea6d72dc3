//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Closest point on the segment to `p`, with its parameter in `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= F::zero() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.start.lerp(self.end, t), t)
    }

    /// Squared distance from `p` to the nearest point of the segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    /// Returns `true` if the segment is shorter than `eps`.
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_length() {
        let s = seg(1.0, 1.0, 4.0, 5.0);
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_closest_point_is_clamped() {
        let s = seg(0.0, 0.0, 10.0, 0.0);

        let (inside, t) = s.closest_point(Point2::new(4.0, 3.0));
        assert_relative_eq!(inside.x, 4.0);
        assert_relative_eq!(t, 0.4);

        let (before, t) = s.closest_point(Point2::new(-3.0, 1.0));
        assert_eq!(before, s.start);
        assert_eq!(t, 0.0);

        let (after, t) = s.closest_point(Point2::new(12.0, -1.0));
        assert_eq!(after, s.end);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_distance_squared_to_point() {
        let s = seg(0.0, 0.0, 5.0, 10.0);
        // Beyond the end the distance is measured to the endpoint
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(15.0, 20.0)), 200.0);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(5.0, 0.0)), 20.0);
    }

    #[test]
    fn test_degenerate_segment() {
        let s = seg(2.0, 2.0, 2.0, 2.0);
        assert!(s.is_degenerate(1e-12));
        assert_eq!(s.closest_point(Point2::new(9.0, 9.0)).0, s.start);
        assert!(!seg(0.0, 0.0, 1e-3, 0.0).is_degenerate(1e-6));
    }
}
