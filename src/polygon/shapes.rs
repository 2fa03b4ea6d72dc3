//! Rectangle constructors and edge densification.

use super::core::Polygon;
use crate::error::{Result, ShapeError};
use crate::primitives::Point2;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Polygon<f64> {
    /// Axis-aligned CCW rectangle at the origin with the given area.
    ///
    /// `ratio` is width divided by height.
    ///
    /// # Example
    ///
    /// ```
    /// use polyshape::polygon::Polygon;
    ///
    /// let rect = Polygon::rectangle_by_area(8.0, 2.0).unwrap();
    /// assert!((rect.area() - 8.0).abs() < 1e-12);
    /// assert!(Polygon::rectangle_by_area(-1.0, 1.0).is_err());
    /// ```
    pub fn rectangle_by_area(area: f64, ratio: f64) -> Result<Self> {
        if !is_positive(area) {
            return Err(ShapeError::NonPositiveArea(area));
        }
        if !is_positive(ratio) {
            return Err(ShapeError::NonPositiveRatio(ratio));
        }

        let width = (area * ratio).sqrt();
        Ok(Self::rectangle(width, area / width))
    }

    /// Axis-aligned CCW rectangle of height 1 and width `ratio`.
    pub fn rectangle_by_ratio(ratio: f64) -> Result<Self> {
        if !is_positive(ratio) {
            return Err(ShapeError::NonPositiveRatio(ratio));
        }
        Ok(Self::rectangle(ratio, 1.0))
    }

    fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(width, 0.0),
            Point2::new(width, height),
            Point2::new(0.0, height),
        ])
    }

    /// Inserts evenly spaced points so no edge is longer than `interval`.
    ///
    /// Original vertices are kept in place.
    pub fn densify(&self, interval: f64) -> Result<Self> {
        if !is_positive(interval) {
            return Err(ShapeError::NonPositiveInterval(interval));
        }

        let mut vertices = Vec::with_capacity(self.len());
        for edge in self.edges() {
            let pieces = (edge.length() / interval).ceil().max(1.0) as usize;
            vertices.extend((0..pieces).map(|k| edge.start.lerp(edge.end, k as f64 / pieces as f64)));
        }
        Ok(Self::new(vertices))
    }
}
