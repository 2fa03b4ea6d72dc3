//! Polygon value type and shape helpers.
//!
//! This module provides:
//! - Area, winding, centroid and containment queries
//! - Simplicity (self-intersection) checks used to screen clip output
//! - The nine-position [`Anchor`] palette for anchored scaling
//! - Rectangle constructors
//!
//! # Example
//!
//! ```
//! use polyshape::polygon::Polygon;
//! use polyshape::Point2;
//!
//! let cw = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//! ]);
//! assert!(!cw.is_ccw());
//!
//! let ccw = cw.into_ccw();
//! assert!(ccw.is_ccw());
//! assert_eq!(ccw.area(), 4.0);
//! ```

mod anchor;
mod core;
mod shapes;

pub use anchor::Anchor;
pub use self::core::Polygon;
