//! Converting engine output into hole-free polygons.
//!
//! The engine returns shapes as an outer boundary followed by its holes. A
//! shape with holes is cut along a vertical line through the middle of its
//! first hole: the shape is intersected with the boxes on either side of the
//! line, which opens that hole into a notch on both halves. Halves that
//! still carry holes are cut again until every piece is a plain ring.

use super::PolygonAlgebra;
use crate::bridge::from_fixed_paths;
use crate::clip::{fixed_signed_area2, BooleanOp, ClippingEngine, FillRule, FixedPath, FixedPoint};
use crate::polygon::Polygon;

/// Split rounds budgeted per contour before a shape is given up on.
const SPLITS_PER_HOLE: usize = 4;

impl<E: ClippingEngine> PolygonAlgebra<E> {
    /// Converts engine output back to CCW polygons, splitting shapes that
    /// enclose holes into hole-free pieces.
    pub(super) fn outer_polygons(&self, paths: Vec<FixedPath>) -> Vec<Polygon<f64>> {
        let mut rings = Vec::new();
        for shape in group_shapes(paths) {
            self.split_holes(shape, &mut rings);
        }

        from_fixed_paths(&rings, self.config.scale(), self.config.epsilon())
            .into_iter()
            .map(Polygon::into_ccw)
            .collect()
    }

    fn split_holes(&self, shape: Vec<FixedPath>, rings: &mut Vec<FixedPath>) {
        let mut budget = SPLITS_PER_HOLE * shape.len();
        let mut pending = vec![shape];

        while let Some(shape) = pending.pop() {
            let mut parts = shape.into_iter();
            let Some(outer) = parts.next() else {
                continue;
            };
            // Holes narrower than two grid units cannot be cut through
            let holes: Vec<FixedPath> = parts.filter(|h| cut_line(h).is_some()).collect();
            let Some(cut) = holes.first().and_then(|h| cut_line(h)) else {
                rings.push(outer);
                continue;
            };
            let Some((min, max)) = fixed_bounds(&outer) else {
                continue;
            };
            if budget == 0 {
                tracing::warn!(holes = holes.len(), "hole split budget exhausted, dropping shape");
                continue;
            }
            budget -= 1;

            let mut shape = Vec::with_capacity(holes.len() + 1);
            shape.push(outer);
            shape.extend(holes);

            let halves = [
                fixed_box(min.x - 1, min.y - 1, cut, max.y + 1),
                fixed_box(cut, min.y - 1, max.x + 1, max.y + 1),
            ];
            for half in halves {
                let pieces = self
                    .engine
                    .execute(BooleanOp::Intersection, &shape, &[half], FillRule::NonZero);
                pending.extend(group_shapes(pieces));
            }
        }
    }
}

/// Groups a flat engine result into shapes: each outer boundary followed by
/// the holes listed after it.
fn group_shapes(paths: Vec<FixedPath>) -> Vec<Vec<FixedPath>> {
    let mut shapes: Vec<Vec<FixedPath>> = Vec::new();
    for path in paths {
        let area2 = fixed_signed_area2(&path);
        if area2 > 0 {
            shapes.push(vec![path]);
        } else if area2 < 0 {
            if let Some(shape) = shapes.last_mut() {
                shape.push(path);
            }
        }
    }
    shapes
}

/// The x coordinate of a vertical line strictly inside the hole's extent.
fn cut_line(hole: &[FixedPoint]) -> Option<i64> {
    let (min, max) = fixed_bounds(hole)?;
    (max.x - min.x >= 2).then(|| min.x + (max.x - min.x) / 2)
}

fn fixed_bounds(path: &[FixedPoint]) -> Option<(FixedPoint, FixedPoint)> {
    let first = *path.first()?;
    Some(path.iter().fold((first, first), |(min, max), p| {
        (
            FixedPoint::new(min.x.min(p.x), min.y.min(p.y)),
            FixedPoint::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

fn fixed_box(x0: i64, y0: i64, x1: i64, y1: i64) -> FixedPath {
    vec![
        FixedPoint::new(x0, y0),
        FixedPoint::new(x1, y0),
        FixedPoint::new(x1, y1),
        FixedPoint::new(x0, y1),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{rect, RecordingEngine};
    use super::*;
    use crate::bridge::to_fixed_paths;
    use crate::Point2;
    use approx::assert_relative_eq;

    fn total_area(polygons: &[Polygon<f64>]) -> f64 {
        polygons.iter().map(|p| p.area()).sum()
    }

    #[test]
    fn test_group_shapes_attaches_holes() {
        let outer = fixed_box(0, 0, 10, 10);
        let mut hole = fixed_box(4, 4, 6, 6);
        hole.reverse();
        let other = fixed_box(20, 0, 30, 10);

        let shapes = group_shapes(vec![outer.clone(), hole.clone(), other.clone()]);
        assert_eq!(shapes, vec![vec![outer, hole], vec![other]]);
    }

    #[test]
    fn test_cut_line_inside_hole() {
        assert_eq!(cut_line(&fixed_box(4, 0, 10, 3)), Some(7));
        assert_eq!(cut_line(&fixed_box(-5, 0, -3, 3)), Some(-4));
        assert_eq!(cut_line(&fixed_box(4, 0, 5, 3)), None);
    }

    #[test]
    fn test_ring_splits_into_hole_free_pieces() {
        let algebra = PolygonAlgebra::new();
        let scale = algebra.config().scale();
        let mut paths = to_fixed_paths(&[rect(0.0, 0.0, 10.0, 10.0)], scale).unwrap();
        let mut hole = to_fixed_paths(&[rect(3.0, 4.0, 7.0, 6.0)], scale).unwrap();
        hole[0].reverse();
        paths.append(&mut hole);

        let pieces = algebra.outer_polygons(paths);
        assert_eq!(pieces.len(), 2);
        assert_relative_eq!(total_area(&pieces), 100.0 - 8.0, epsilon = 1e-6);
        assert!(pieces.iter().all(|p| p.is_ccw()));
        for inside_hole in [Point2::new(4.0, 5.0), Point2::new(6.0, 5.5)] {
            assert!(pieces.iter().all(|p| !p.contains(inside_hole)));
        }
        for solid in [Point2::new(1.0, 1.0), Point2::new(9.0, 9.0), Point2::new(5.5, 8.0)] {
            assert_eq!(pieces.iter().filter(|p| p.contains(solid)).count(), 1);
        }
    }

    #[test]
    fn test_several_holes_all_opened() {
        let algebra = PolygonAlgebra::with_engine(RecordingEngine::default());
        let scale = algebra.config().scale();
        let mut paths = to_fixed_paths(&[rect(0.0, 0.0, 20.0, 10.0)], scale).unwrap();
        for hole in [rect(2.0, 2.0, 4.0, 8.0), rect(9.0, 4.0, 11.0, 6.0), rect(15.0, 1.0, 18.0, 3.0)] {
            let mut path = to_fixed_paths(&[hole.reversed()], scale).unwrap();
            paths.append(&mut path);
        }

        let pieces = algebra.outer_polygons(paths);
        assert_relative_eq!(total_area(&pieces), 200.0 - 12.0 - 4.0 - 6.0, epsilon = 1e-6);
        for inside_hole in [Point2::new(2.5, 5.0), Point2::new(10.5, 4.5), Point2::new(16.0, 2.5)] {
            assert!(pieces.iter().all(|p| !p.contains(inside_hole)));
        }
        let calls = algebra.engine().calls.borrow();
        assert!(calls.iter().all(|c| c.0 == BooleanOp::Intersection && c.2 == 1));
        assert!(calls.len() <= SPLITS_PER_HOLE * 4 * 2);
    }

    #[test]
    fn test_shape_without_holes_skips_engine() {
        let algebra = PolygonAlgebra::with_engine(RecordingEngine::default());
        let paths = to_fixed_paths(&[rect(0.0, 0.0, 1.0, 1.0), rect(2.0, 0.0, 3.0, 1.0)], 1e12).unwrap();
        let pieces = algebra.outer_polygons(paths);
        assert_eq!(pieces.len(), 2);
        assert!(algebra.engine().calls.borrow().is_empty());
    }
}
