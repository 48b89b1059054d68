//! vgadraw - integer rasterizer for a palette-indexed VGA surface
//!
//! Draws pixels, lines, filled circles, rectangles, polygons and bitmaps through a
//! caller-supplied [`PixelSink`]. Validated requests in [`draw`] check every
//! parameter before the first pixel write and report failures with stable
//! numeric codes.

pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod output;
pub mod raster;
pub mod registry;
pub mod render;
pub mod types;
pub mod validation;

pub use config::Config;
pub use draw::{clear_screen, BitmapBlit, Circle, Line, Pixel, Polygon, Rectangle, Request};
pub use error::{DrawError, Result, VgaError};
pub use raster::{Canvas, PixelLog, PixelSink};
pub use registry::{BitmapId, BitmapRegistry};
pub use render::write_png;
pub use types::{Bitmap, Color, Point, Surface};
