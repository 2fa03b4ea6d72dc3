//! Reference positions on a polygon's bounding box.

use super::core::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// One of nine fixed positions on an axis-aligned bounding box.
///
/// Used as the fixed point for uniform scaling, so repeated operations with
/// the same anchor are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Anchor {
    /// Every anchor, center first then clockwise from north.
    pub const ALL: [Anchor; 9] = [
        Anchor::Center,
        Anchor::North,
        Anchor::NorthEast,
        Anchor::East,
        Anchor::SouthEast,
        Anchor::South,
        Anchor::SouthWest,
        Anchor::West,
        Anchor::NorthWest,
    ];

    /// Resolves the anchor against a `(min, max)` box.
    pub fn locate<F: Float>(self, min: Point2<F>, max: Point2<F>) -> Point2<F> {
        let mid = min.midpoint(max);
        let (x, y) = match self {
            Anchor::Center => (mid.x, mid.y),
            Anchor::North => (mid.x, max.y),
            Anchor::NorthEast => (max.x, max.y),
            Anchor::East => (max.x, mid.y),
            Anchor::SouthEast => (max.x, min.y),
            Anchor::South => (mid.x, min.y),
            Anchor::SouthWest => (min.x, min.y),
            Anchor::West => (min.x, mid.y),
            Anchor::NorthWest => (min.x, max.y),
        };
        Point2::new(x, y)
    }
}

impl<F: Float> Polygon<F> {
    /// Returns the anchor position on this polygon's bounding box.
    ///
    /// # Example
    ///
    /// ```
    /// use polyshape::polygon::{Anchor, Polygon};
    /// use polyshape::Point2;
    ///
    /// let rect = Polygon::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(4.0, 2.0),
    ///     Point2::new(0.0, 2.0),
    /// ]);
    /// assert_eq!(rect.anchor_point(Anchor::East), Some(Point2::new(4.0, 1.0)));
    /// ```
    pub fn anchor_point(&self, anchor: Anchor) -> Option<Point2<F>> {
        let (min, max) = self.bounding_box()?;
        Some(anchor.locate(min, max))
    }
}
