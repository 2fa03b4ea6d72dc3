//! Fitting a candidate into a boundary and among obstacles.

use super::PolygonAlgebra;
use crate::clip::ClippingEngine;
use crate::error::Result;
use crate::polygon::Polygon;

impl<E: ClippingEngine> PolygonAlgebra<E> {
    /// The largest piece of `polygon` inside `boundary`, if any survives.
    pub fn fit_most(
        &self,
        polygon: &Polygon<f64>,
        boundary: &Polygon<f64>,
    ) -> Result<Option<Polygon<f64>>> {
        let pieces =
            self.intersections(polygon, std::slice::from_ref(boundary), self.config.epsilon())?;
        Ok(pieces.into_iter().next())
    }

    /// The largest piece of `polygon` outside every obstacle, if any survives.
    ///
    /// An obstacle strictly inside `polygon` splits it, so the result never
    /// covers an obstacle.
    pub fn fit_among(
        &self,
        polygon: &Polygon<f64>,
        obstacles: &[Polygon<f64>],
    ) -> Result<Option<Polygon<f64>>> {
        let pieces = self.differences(polygon, obstacles, self.config.epsilon())?;
        Ok(pieces.into_iter().next())
    }

    /// [`fit_most`](Self::fit_most) into `boundary`, then
    /// [`fit_among`](Self::fit_among) the obstacles.
    pub fn fit_to(
        &self,
        polygon: &Polygon<f64>,
        boundary: &Polygon<f64>,
        obstacles: &[Polygon<f64>],
    ) -> Result<Option<Polygon<f64>>> {
        match self.fit_most(polygon, boundary)? {
            Some(fitted) => self.fit_among(&fitted, obstacles),
            None => Ok(None),
        }
    }

    /// Whether `polygon` meets any candidate, boundaries included.
    ///
    /// Cheap test with no engine round trip.
    pub fn intersects(&self, polygon: &Polygon<f64>, candidates: &[Polygon<f64>]) -> bool {
        let eps = self.config.epsilon();
        candidates.iter().any(|c| polygon.intersects(c, eps))
    }
}
