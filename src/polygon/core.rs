//! Core polygon type and basic queries.

use crate::primitives::{Point2, Segment2, Vec2};
use crate::tolerance::{point_on_segment, segments_cross, segments_intersect, signed_area, Winding};
use num_traits::Float;

/// A simple polygon represented as a closed sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first)
/// and the first vertex is not repeated at the end. Values are never shared
/// mutably; every transform returns a new polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area: positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the winding derived from the signed area.
    pub fn winding(&self) -> Winding {
        Winding::of(&self.vertices)
    }

    /// Returns true for counter-clockwise winding.
    pub fn is_ccw(&self) -> bool {
        self.winding() == Winding::CounterClockwise
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Consumes the polygon and returns it with CCW winding.
    pub fn into_ccw(mut self) -> Self {
        self.ensure_ccw();
        self
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Iterates over the closing edges of the polygon.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices[1..].iter().fold((first, first), |(min, max), v| {
            (
                Point2::new(min.x.min(v.x), min.y.min(v.y)),
                Point2::new(max.x.max(v.x), max.y.max(v.y)),
            )
        }))
    }

    /// Returns the area centroid, or `None` for degenerate polygons.
    pub fn centroid(&self) -> Option<Point2<F>> {
        let area = self.signed_area();
        if area.abs() <= F::epsilon() {
            return None;
        }

        let n = self.vertices.len();
        let (cx, cy) = (0..n).fold((F::zero(), F::zero()), |(cx, cy), i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            (cx + (a.x + b.x) * cross, cy + (a.y + b.y) * cross)
        });

        let six = F::from(6.0)?;
        Some(Point2::new(cx / (six * area), cy / (six * area)))
    }

    /// Ray-casting point containment. Boundary points may go either way.
    pub fn contains(&self, point: Point2<F>) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Containment that treats points within `eps` of an edge as inside.
    pub fn contains_or_touches(&self, point: Point2<F>, eps: F) -> bool {
        self.edges().any(|e| point_on_segment(point, e, eps)) || self.contains(point)
    }

    /// Returns true if `other` lies inside or on the boundary of `self`.
    ///
    /// Every vertex of `other` must be inside or on `self`, and no pair of
    /// edges may cross properly.
    pub fn covers(&self, other: &Self, eps: F) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        if !other.vertices.iter().all(|&v| self.contains_or_touches(v, eps)) {
            return false;
        }
        !self
            .edges()
            .any(|a| other.edges().any(|b| segments_cross(a, b)))
    }

    /// Returns true if the two closed regions share at least one point.
    pub fn intersects(&self, other: &Self, eps: F) -> bool {
        let (Some((min_a, max_a)), Some((min_b, max_b))) = (self.bounding_box(), other.bounding_box())
        else {
            return false;
        };
        if max_a.x + eps < min_b.x
            || max_b.x + eps < min_a.x
            || max_a.y + eps < min_b.y
            || max_b.y + eps < min_a.y
        {
            return false;
        }

        if self
            .edges()
            .any(|a| other.edges().any(|b| segments_intersect(a, b, eps)))
        {
            return true;
        }

        // No boundary contact: one is either nested in the other or apart
        other.vertices.first().is_some_and(|&v| self.contains(v))
            || self.vertices.first().is_some_and(|&v| other.contains(v))
    }

    /// Checks the loop is a valid simple polygon.
    ///
    /// Rejects fewer than three vertices, edges shorter than `eps`, adjacent
    /// edges folding back over each other, and any contact between
    /// non-adjacent edges.
    pub fn is_simple(&self, eps: F) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let edges: Vec<Segment2<F>> = self.edges().collect();
        if edges.iter().any(|e| e.is_degenerate(eps)) {
            return false;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (edges[i], edges[j]);
                if j == i + 1 {
                    // a.end == b.start
                    if point_on_segment(b.end, a, eps) || point_on_segment(a.start, b, eps) {
                        return false;
                    }
                } else if i == 0 && j == n - 1 {
                    // b.end == a.start
                    if point_on_segment(a.end, b, eps) || point_on_segment(b.start, a, eps) {
                        return false;
                    }
                } else if segments_intersect(a, b, eps) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns a copy scaled uniformly about `pivot`.
    pub fn scaled_about(&self, pivot: Point2<F>, factor: F) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.scaled_about(pivot, factor))
                .collect(),
        }
    }

    /// Returns a translated copy.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| v + offset).collect(),
        }
    }
}
