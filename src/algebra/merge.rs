//! Union of a polygon set into disjoint components.

use super::{sort_by_area_desc, PolygonAlgebra};
use crate::bridge::to_fixed_paths;
use crate::clip::{BooleanOp, ClippingEngine, FillRule};
use crate::error::Result;
use crate::polygon::Polygon;

impl<E: ClippingEngine> PolygonAlgebra<E> {
    /// Unions `polygons` into pairwise non-overlapping components.
    ///
    /// The set is submitted as both subject and clip of a union under
    /// `fill_rule`. Further passes run under [`FillRule::NonZero`] until the
    /// component count stops decreasing. Components are CCW and sorted by
    /// descending area; degenerate paths are dropped. A component enclosing
    /// a void comes back as several hole-free pieces that leave the void
    /// uncovered.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CoordinateOutOfRange`](crate::ShapeError::CoordinateOutOfRange)
    /// when an input coordinate does not fit the fixed-point grid.
    pub fn merge(&self, polygons: &[Polygon<f64>], fill_rule: FillRule) -> Result<Vec<Polygon<f64>>> {
        if polygons.is_empty() {
            return Ok(Vec::new());
        }

        let mut current = self.union_pass(polygons, fill_rule)?;
        let mut passes = 1;
        while current.len() > 1 {
            let next = self.union_pass(&current, FillRule::NonZero)?;
            passes += 1;
            if next.len() >= current.len() {
                break;
            }
            current = next;
        }

        tracing::trace!(input = polygons.len(), output = current.len(), passes, "merge");
        sort_by_area_desc(&mut current);
        Ok(current)
    }

    fn union_pass(&self, polygons: &[Polygon<f64>], fill_rule: FillRule) -> Result<Vec<Polygon<f64>>> {
        let paths = to_fixed_paths(polygons, self.config.scale())?;
        let result = self.engine.execute(BooleanOp::Union, &paths, &paths, fill_rule);
        Ok(self.outer_polygons(result))
    }
}
