//! Host-side export of in-memory canvases.

mod png;

pub use png::{to_image, write_png};
