//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// `eps` is compared against the absolute cross product of `b - a` and
/// `c - a`, i.e. twice the signed triangle area.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `p` lies within distance `eps` of the segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Returns `true` if the segments cross at a single interior point.
///
/// Touching at an endpoint and collinear overlap do not count.
pub fn segments_cross<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    use Orientation::{Clockwise, CounterClockwise};

    let o1 = orient2d(s1.start, s1.end, s2.start, F::zero());
    let o2 = orient2d(s1.start, s1.end, s2.end, F::zero());
    let o3 = orient2d(s2.start, s2.end, s1.start, F::zero());
    let o4 = orient2d(s2.start, s2.end, s1.end, F::zero());

    let straddles = |a: Orientation, b: Orientation| {
        matches!(
            (a, b),
            (Clockwise, CounterClockwise) | (CounterClockwise, Clockwise)
        )
    };
    straddles(o1, o2) && straddles(o3, o4)
}

/// Returns `true` if the closed segments share at least one point.
///
/// Endpoints within `eps` of the other segment count as touching.
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    segments_cross(s1, s2)
        || point_on_segment(s1.start, s2, eps)
        || point_on_segment(s1.end, s2, eps)
        || point_on_segment(s2.start, s1, eps)
        || point_on_segment(s2.end, s1, eps)
}
