//! Subtraction and intersection against polygon sets.

use super::{sort_by_area_desc, PolygonAlgebra};
use crate::bridge::{to_fixed_path, to_fixed_paths};
use crate::clip::{BooleanOp, ClippingEngine, FillRule};
use crate::error::Result;
use crate::polygon::Polygon;

impl<E: ClippingEngine> PolygonAlgebra<E> {
    /// Subtracts every polygon in `subtract` from `polygon`.
    ///
    /// The subtract set is merged first, then one difference runs under
    /// [`FillRule::NonZero`]. Pieces whose area is below `tolerance` are
    /// discarded; the rest are CCW and sorted by descending area. An empty
    /// subtract set returns `polygon` itself, oriented CCW. An obstacle
    /// strictly inside `polygon` leaves a hole, so the remainder is returned
    /// as hole-free pieces around it.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CoordinateOutOfRange`](crate::ShapeError::CoordinateOutOfRange)
    /// when a coordinate does not fit the fixed-point grid.
    pub fn differences(
        &self,
        polygon: &Polygon<f64>,
        subtract: &[Polygon<f64>],
        tolerance: f64,
    ) -> Result<Vec<Polygon<f64>>> {
        let merged = self.merge(subtract, FillRule::NonZero)?;
        self.clip_against(BooleanOp::Difference, polygon, &merged, tolerance)
    }

    /// Intersects `polygon` with the region covered by `clips`.
    ///
    /// Same filtering and ordering as [`differences`](Self::differences).
    pub fn intersections(
        &self,
        polygon: &Polygon<f64>,
        clips: &[Polygon<f64>],
        tolerance: f64,
    ) -> Result<Vec<Polygon<f64>>> {
        self.clip_against(BooleanOp::Intersection, polygon, clips, tolerance)
    }

    fn clip_against(
        &self,
        op: BooleanOp,
        polygon: &Polygon<f64>,
        clips: &[Polygon<f64>],
        tolerance: f64,
    ) -> Result<Vec<Polygon<f64>>> {
        let scale = self.config.scale();
        let subject = [to_fixed_path(polygon, scale)?];
        let clip = to_fixed_paths(clips, scale)?;
        let result = self.engine.execute(op, &subject, &clip, FillRule::NonZero);

        let mut pieces: Vec<Polygon<f64>> = self
            .outer_polygons(result)
            .into_iter()
            .filter(|p| p.area() >= tolerance)
            .collect();
        sort_by_area_desc(&mut pieces);

        tracing::trace!(?op, clips = clips.len(), pieces = pieces.len(), "clip");
        Ok(pieces)
    }
}
