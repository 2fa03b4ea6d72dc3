//! Integer polygon clipping capability.
//!
//! The algebra layer never clips polygons itself. It converts floating
//! polygons into fixed-point [`FixedPath`]s, hands them to a
//! [`ClippingEngine`], and converts the answer back. [`OverlayEngine`] is the
//! default engine; any other clipper, including one that is exact on the
//! integer grid, can be injected by implementing the trait.

mod overlay;

pub use overlay::OverlayEngine;

/// A point on the fixed-point integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedPoint {
    pub x: i64,
    pub y: i64,
}

impl FixedPoint {
    /// Creates a new grid point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A closed integer path. The first point is not repeated at the end.
pub type FixedPath = Vec<FixedPoint>;

/// Boolean operation applied by a clipping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Regions inside subject or clip.
    Union,
    /// Regions inside subject and outside clip.
    Difference,
    /// Regions inside both subject and clip.
    Intersection,
}

/// Rule deciding which regions count as inside when paths overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Odd winding numbers are inside.
    EvenOdd,
    /// Non-zero winding numbers are inside.
    #[default]
    NonZero,
    /// Positive winding numbers are inside.
    Positive,
    /// Negative winding numbers are inside.
    Negative,
}

/// Boolean clipping over closed integer paths.
///
/// Implementations must return outer boundaries counter-clockwise and holes
/// clockwise, each hole listed after the outer boundary that contains it.
/// Paths must not repeat their first point at the end.
pub trait ClippingEngine {
    /// Applies `op` to the subject and clip path sets under `fill_rule`.
    fn execute(
        &self,
        op: BooleanOp,
        subject: &[FixedPath],
        clip: &[FixedPath],
        fill_rule: FillRule,
    ) -> Vec<FixedPath>;
}

impl<E: ClippingEngine + ?Sized> ClippingEngine for &E {
    fn execute(
        &self,
        op: BooleanOp,
        subject: &[FixedPath],
        clip: &[FixedPath],
        fill_rule: FillRule,
    ) -> Vec<FixedPath> {
        (**self).execute(op, subject, clip, fill_rule)
    }
}

/// Twice the signed area of a fixed path, computed exactly.
pub fn fixed_signed_area2(path: &[FixedPoint]) -> i128 {
    let n = path.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| {
            let a = path[i];
            let b = path[(i + 1) % n];
            a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128
        })
        .sum()
}
