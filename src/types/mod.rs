//! Core value types for vgadraw.
//!
//! - `Color` - named palette entries for the 8-bit surface
//! - `Point` / `Surface` - device pixel coordinates and extents
//! - `Bitmap` - row-major indexed images

mod bitmap;
mod color;
mod point;

pub use bitmap::Bitmap;
pub use color::{index_to_rgba, Color};
pub use point::{Point, Surface};
