//! Iterative scaling of a polygon toward a target area.

use super::PolygonAlgebra;
use crate::clip::ClippingEngine;
use crate::error::{Result, ShapeError};
use crate::polygon::{Anchor, Polygon};

/// Default relative area tolerance.
pub const DEFAULT_AREA_TOLERANCE: f64 = 0.1;

/// Default cap on scale-and-fit rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Fraction of the acceptance band below which a change in area is treated
/// as no progress.
const STALL_FRACTION: f64 = 1e-3;

/// Parameters for [`PolygonAlgebra::expand_to_area`].
///
/// # Example
///
/// ```
/// use polyshape::algebra::{ExpandToArea, PolygonAlgebra, Termination};
/// use polyshape::polygon::{Anchor, Polygon};
/// use polyshape::Point2;
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// let request = ExpandToArea::new(9.0).anchor(Anchor::SouthWest);
/// let found = PolygonAlgebra::new()
///     .expand_to_area(&square, &request)
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(found.termination, Termination::WithinTolerance);
/// assert!((found.polygon.area() - 9.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ExpandToArea<'a> {
    target: f64,
    within: Option<&'a Polygon<f64>>,
    among: &'a [Polygon<f64>],
    anchor: Anchor,
    tolerance: f64,
    max_iterations: usize,
}

impl<'a> ExpandToArea<'a> {
    /// Targets `area` with no boundary, no obstacles and a centered anchor.
    pub fn new(area: f64) -> Self {
        Self {
            target: area,
            within: None,
            among: &[],
            anchor: Anchor::Center,
            tolerance: DEFAULT_AREA_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Keeps the result inside `boundary`.
    pub fn within(mut self, boundary: &'a Polygon<f64>) -> Self {
        self.within = Some(boundary);
        self
    }

    /// Keeps the result clear of `obstacles`.
    pub fn among(mut self, obstacles: &'a [Polygon<f64>]) -> Self {
        self.among = obstacles;
        self
    }

    /// Fixed point for scaling.
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Acceptable relative deviation from the target area.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Maximum scale-and-fit rounds before giving up.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    fn validate(&self) -> Result<()> {
        if !(self.target.is_finite() && self.target > 0.0) {
            return Err(ShapeError::NonPositiveArea(self.target));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ShapeError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(ShapeError::InvalidIterationLimit);
        }
        Ok(())
    }

    fn accepts(&self, area: f64) -> bool {
        (area - self.target).abs() <= self.tolerance * self.target
    }

    /// Whether moving from `area` to `next_area` failed to approach the
    /// target by a meaningful amount.
    fn stalls(&self, area: f64, next_area: f64, epsilon: f64) -> bool {
        let step = next_area - area;
        let band = (STALL_FRACTION * self.tolerance * self.target).max(epsilon * area.max(1.0));
        step * (self.target - area) <= 0.0 || step.abs() <= band
    }
}

/// Why [`PolygonAlgebra::expand_to_area`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The area is within tolerance of the target.
    WithinTolerance,
    /// A round brought the area no closer to the target; the constraints
    /// are binding.
    Stalled,
    /// The iteration cap was reached.
    IterationLimit,
}

/// Result of [`PolygonAlgebra::expand_to_area`].
#[derive(Debug, Clone, PartialEq)]
pub struct AreaMatch {
    /// Final candidate, counter-clockwise.
    pub polygon: Polygon<f64>,
    /// Scale-and-fit rounds performed.
    pub iterations: usize,
    pub termination: Termination,
}

impl<E: ClippingEngine> PolygonAlgebra<E> {
    /// Scales `polygon` about a fixed anchor until its area matches the
    /// request, clipping into the boundary and around obstacles each round.
    ///
    /// The anchor is resolved once on the input's bounding box. Every round
    /// rescales the input itself by the accumulated factor, so clipping
    /// noise does not compound. Returns `Ok(None)` when a fit leaves
    /// nothing. When a round brings the area no closer to the target, the
    /// closer of the last two candidates is returned as
    /// [`Termination::Stalled`]; when the cap is reached, the last candidate
    /// is returned as [`Termination::IterationLimit`].
    ///
    /// # Errors
    ///
    /// Rejects a non-positive target or tolerance, a zero iteration cap, a
    /// polygon with fewer than three vertices, a polygon of zero area, and
    /// coordinates outside the fixed-point range.
    pub fn expand_to_area(
        &self,
        polygon: &Polygon<f64>,
        request: &ExpandToArea<'_>,
    ) -> Result<Option<AreaMatch>> {
        request.validate()?;
        if polygon.len() < 3 {
            return Err(ShapeError::EmptyPolygon(polygon.len()));
        }

        let eps = self.config.epsilon();
        let seed = polygon.clone().into_ccw();
        let mut area = seed.area();
        if request.accepts(area) {
            return Ok(Some(AreaMatch {
                polygon: seed,
                iterations: 0,
                termination: Termination::WithinTolerance,
            }));
        }
        if area <= eps {
            return Err(ShapeError::NonPositiveArea(area));
        }

        let pivot = seed
            .anchor_point(request.anchor)
            .ok_or(ShapeError::EmptyPolygon(seed.len()))?;
        let mut factor = 1.0;
        let mut candidate = seed.clone();

        for iteration in 1..=request.max_iterations {
            factor *= (request.target / area).sqrt();
            let scaled = seed.scaled_about(pivot, factor);
            let Some(next) = self.fit_round(scaled, request, iteration)? else {
                return Ok(None);
            };

            let next_area = next.area();
            let termination = if request.accepts(next_area) {
                Termination::WithinTolerance
            } else if iteration > 1 && request.stalls(area, next_area, eps) {
                Termination::Stalled
            } else {
                candidate = next;
                area = next_area;
                continue;
            };

            let (polygon, area) = match termination {
                Termination::Stalled
                    if (area - request.target).abs() < (next_area - request.target).abs() =>
                {
                    (candidate, area)
                }
                _ => (next, next_area),
            };
            tracing::debug!(iteration, area, target = request.target, ?termination, "expand");
            return Ok(Some(AreaMatch {
                polygon,
                iterations: iteration,
                termination,
            }));
        }

        tracing::debug!(
            iterations = request.max_iterations,
            area,
            target = request.target,
            "expand hit iteration limit"
        );
        Ok(Some(AreaMatch {
            polygon: candidate,
            iterations: request.max_iterations,
            termination: Termination::IterationLimit,
        }))
    }

    /// Clips a scaled candidate into the boundary and around the obstacles.
    fn fit_round(
        &self,
        mut next: Polygon<f64>,
        request: &ExpandToArea<'_>,
        iteration: usize,
    ) -> Result<Option<Polygon<f64>>> {
        let eps = self.config.epsilon();

        if let Some(boundary) = request.within {
            if !boundary.covers(&next, eps) {
                let Some(fitted) = self.fit_most(&next, boundary)? else {
                    tracing::debug!(iteration, "nothing left inside boundary");
                    return Ok(None);
                };
                next = fitted;
            }
        }

        if self.intersects(&next, request.among) {
            let Some(fitted) = self.fit_among(&next, request.among)? else {
                tracing::debug!(iteration, "nothing left among obstacles");
                return Ok(None);
            };
            next = fitted;
        }

        Ok(Some(next))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::rect;
    use super::*;
    use crate::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_unconstrained_converges_in_one_round() {
        let algebra = PolygonAlgebra::new();
        let request = ExpandToArea::new(9.0).anchor(Anchor::SouthWest);
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 2.0, 2.0), &request)
            .unwrap()
            .unwrap();
        assert_eq!(found.iterations, 1);
        assert_eq!(found.termination, Termination::WithinTolerance);
        let (min, max) = found.polygon.bounding_box().unwrap();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_anchor_keeps_center() {
        let algebra = PolygonAlgebra::new();
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 2.0, 2.0), &ExpandToArea::new(1.0))
            .unwrap()
            .unwrap();
        assert_relative_eq!(found.polygon.area(), 1.0, epsilon = 1e-9);
        let c = found.polygon.centroid().unwrap();
        assert!(c.distance(Point2::new(1.0, 1.0)) < 1e-9);
    }

    #[test]
    fn test_already_within_tolerance() {
        let algebra = PolygonAlgebra::new();
        let square = rect(0.0, 0.0, 3.0, 3.0).reversed();
        let found = algebra
            .expand_to_area(&square, &ExpandToArea::new(9.5))
            .unwrap()
            .unwrap();
        assert_eq!(found.iterations, 0);
        assert!(found.polygon.is_ccw());
        assert_relative_eq!(found.polygon.area(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_obstacle_limits_growth() {
        let algebra = PolygonAlgebra::new();
        let obstacles = [rect(2.5, 0.0, 5.0, 5.0)];
        let request = ExpandToArea::new(9.0)
            .anchor(Anchor::SouthWest)
            .among(&obstacles);
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 2.0, 2.0), &request)
            .unwrap()
            .unwrap();

        assert_eq!(found.termination, Termination::WithinTolerance);
        assert!((found.polygon.area() - 9.0).abs() <= 0.9);
        let (_, max) = found.polygon.bounding_box().unwrap();
        assert!(max.x <= 2.5 + 1e-6);
    }

    #[test]
    fn test_boundary_too_small_stops_early() {
        let algebra = PolygonAlgebra::new();
        let boundary = rect(0.0, 0.0, 2.5, 2.5);
        let request = ExpandToArea::new(9.0)
            .anchor(Anchor::SouthWest)
            .within(&boundary)
            .max_iterations(10);
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 2.0, 2.0), &request)
            .unwrap()
            .unwrap();

        assert_eq!(found.termination, Termination::Stalled);
        assert_eq!(found.iterations, 2);
        assert_relative_eq!(found.polygon.area(), 6.25, epsilon = 1e-6);
    }

    #[test]
    fn test_binding_boundary_stalls_with_default_limit() {
        let algebra = PolygonAlgebra::new();
        let boundary = rect(0.0, 0.0, 2.5, 2.5);
        let request = ExpandToArea::new(50.0)
            .anchor(Anchor::SouthWest)
            .within(&boundary);
        let found = algebra
            .expand_to_area(&rect(0.5, 0.9, 1.5, 1.9), &request)
            .unwrap()
            .expect("boundary leaves a 2 x 1.6 corner");

        assert_eq!(found.termination, Termination::Stalled);
        assert!(found.iterations < DEFAULT_MAX_ITERATIONS);
        assert_relative_eq!(found.polygon.area(), 2.0 * 1.6, epsilon = 1e-6);
        let (min, max) = found.polygon.bounding_box().unwrap();
        assert!(min.distance(Point2::new(0.5, 0.9)) < 1e-6);
        assert!(max.distance(Point2::new(2.5, 2.5)) < 1e-6);
    }

    #[test]
    fn test_binding_boundary_and_obstacle_stall() {
        let algebra = PolygonAlgebra::new();
        let boundary = rect(0.0, 0.0, 4.0, 4.0);
        let obstacles = [rect(3.0, 0.0, 5.0, 1.0)];
        let request = ExpandToArea::new(100.0)
            .anchor(Anchor::SouthWest)
            .within(&boundary)
            .among(&obstacles);
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 1.0, 1.0), &request)
            .unwrap()
            .unwrap();

        assert_eq!(found.termination, Termination::Stalled);
        assert_relative_eq!(found.polygon.area(), 15.0, epsilon = 1e-6);
    }

    #[test]
    fn test_contained_obstacle_is_avoided() {
        let algebra = PolygonAlgebra::new();
        let obstacles = [rect(4.5, 4.5, 5.5, 5.5)];
        let request = ExpandToArea::new(64.0).among(&obstacles);
        let found = algebra
            .expand_to_area(&rect(2.0, 2.0, 3.0, 3.0), &request)
            .unwrap()
            .unwrap();

        assert_eq!(found.termination, Termination::WithinTolerance);
        for covered in [Point2::new(4.75, 4.75), Point2::new(5.25, 5.25)] {
            assert!(!found.polygon.contains(covered), "{:?} inside result", covered);
        }
        assert!(found.polygon.contains(Point2::new(2.5, 2.5)));
    }

    #[test]
    fn test_expansion_past_fixed_range_is_an_error() {
        let algebra = PolygonAlgebra::new();
        // The first round scales to +-5e6, beyond the grid at scale 1e12
        let boundary = rect(0.0, 0.0, 2.0, 2.0);
        let request = ExpandToArea::new(1.0e14).within(&boundary);
        assert!(matches!(
            algebra.expand_to_area(&rect(0.0, 0.0, 1.0, 1.0), &request),
            Err(ShapeError::CoordinateOutOfRange(_))
        ));
    }

    #[test]
    fn test_boundary_disjoint_returns_none() {
        let algebra = PolygonAlgebra::new();
        let boundary = rect(10.0, 10.0, 12.0, 12.0);
        let request = ExpandToArea::new(2.0).within(&boundary);
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 1.0, 1.0), &request)
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_swallowed_by_obstacle_returns_none() {
        let algebra = PolygonAlgebra::new();
        let obstacles = [rect(-10.0, -10.0, 10.0, 10.0)];
        let request = ExpandToArea::new(4.0).among(&obstacles);
        let found = algebra
            .expand_to_area(&rect(0.0, 0.0, 1.0, 1.0), &request)
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_invalid_requests() {
        let algebra = PolygonAlgebra::new();
        let square = rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            algebra.expand_to_area(&square, &ExpandToArea::new(0.0)),
            Err(ShapeError::NonPositiveArea(0.0))
        );
        assert_eq!(
            algebra.expand_to_area(&square, &ExpandToArea::new(2.0).tolerance(-1.0)),
            Err(ShapeError::InvalidTolerance(-1.0))
        );
        assert_eq!(
            algebra.expand_to_area(&square, &ExpandToArea::new(2.0).max_iterations(0)),
            Err(ShapeError::InvalidIterationLimit)
        );

        let line = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert_eq!(
            algebra.expand_to_area(&line, &ExpandToArea::new(2.0)),
            Err(ShapeError::EmptyPolygon(2))
        );

        let flat = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(matches!(
            algebra.expand_to_area(&flat, &ExpandToArea::new(2.0)),
            Err(ShapeError::NonPositiveArea(_))
        ));
    }
}
