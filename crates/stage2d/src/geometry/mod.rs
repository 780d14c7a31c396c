//! 2D geometry and collision detection
//!
//! [`Rect`] is the axis-aligned box every query operates on; the
//! [`collision`] module provides the overlap, penetration, and segment
//! tests built on it.

pub mod collision;
pub mod rect;

pub use collision::{intersect_boxes, Hit};
pub use rect::Rect;
