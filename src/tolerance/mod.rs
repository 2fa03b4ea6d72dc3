//! Epsilon-aware geometric predicates and winding utilities.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;

pub use predicates::{orient2d, point_on_segment, segments_cross, segments_intersect, Orientation};

use crate::primitives::Point2;
use num_traits::Float;

/// Rotational direction of a closed vertex loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero area or fewer than three vertices.
    Degenerate,
}

impl Winding {
    /// Classifies a closed loop by the sign of its shoelace area.
    ///
    /// # Example
    ///
    /// ```
    /// use polyshape::tolerance::Winding;
    /// use polyshape::Point2;
    ///
    /// let tri = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
    /// assert_eq!(Winding::of(&tri), Winding::CounterClockwise);
    /// ```
    pub fn of<F: Float>(vertices: &[Point2<F>]) -> Self {
        let area = signed_area(vertices);
        if area > F::zero() {
            Winding::CounterClockwise
        } else if area < F::zero() {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}

/// Signed area of a closed loop using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        acc + a.x * b.y - b.x * a.y
    });

    twice / (F::one() + F::one())
}

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn near_equal<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Returns `true` if the points are within `eps` of each other.
#[inline]
pub fn points_near_equal<F: Float>(a: Point2<F>, b: Point2<F>, eps: F) -> bool {
    a.distance_squared(b) <= eps * eps
}

/// Index of the point closest to `target`; ties keep the earliest point.
pub fn nearest_point<F: Float>(points: &[Point2<F>], target: Point2<F>) -> Option<usize> {
    extremal_point(points, target, |candidate, best| candidate < best)
}

/// Index of the point farthest from `target`; ties keep the earliest point.
pub fn farthest_point<F: Float>(points: &[Point2<F>], target: Point2<F>) -> Option<usize> {
    extremal_point(points, target, |candidate, best| candidate > best)
}

fn extremal_point<F: Float>(
    points: &[Point2<F>],
    target: Point2<F>,
    better: impl Fn(F, F) -> bool,
) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance_squared(target)))
        .fold(None, |best: Option<(usize, F)>, (i, d)| match best {
            Some((_, best_d)) if !better(d, best_d) => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
}
