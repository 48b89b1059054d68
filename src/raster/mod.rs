//! Unvalidated rasterizers.
//!
//! These functions write straight to a [`PixelSink`] and assume their
//! inputs are on-surface and well-formed. Use the [`crate::draw`] requests
//! for checked, all-or-nothing drawing.

mod blit;
mod circle;
mod line;
mod polygon;
mod rect;
mod sink;

pub use blit::blit;
pub use circle::fill_circle;
pub use line::{bresenham, brush_radius, draw_line};
pub use polygon::{draw_polygon, fill_polygon, stroke_polygon, OUTLINE_WEIGHT};
pub use rect::{fill_rect, outline_rect, stroke_rect};
pub use sink::{Canvas, PixelLog, PixelOp, PixelSink};
