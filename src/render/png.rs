//! PNG output for canvases.
//!
//! Expands palette indices to RGBA with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, VgaError};
use crate::raster::Canvas;
use crate::types::index_to_rgba;

/// Convert a canvas to an RGBA image, each pixel becoming a `scale` x `scale` block.
///
/// A scale of 0 is treated as 1.
pub fn to_image(canvas: &Canvas, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);

    let scaled = |len: usize| {
        u32::try_from(len)
            .ok()
            .and_then(|len| len.checked_mul(scale))
            .ok_or_else(|| VgaError::Render {
                message: format!(
                    "{}x{} canvas at scale {} is too large",
                    canvas.width(),
                    canvas.height(),
                    scale
                ),
                help: Some("Use a smaller --scale".to_string()),
            })
    };
    let width = scaled(canvas.width())?;
    let height = scaled(canvas.height())?;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in canvas.pixels().chunks_exact(canvas.width().max(1)).enumerate() {
        for (x, &index) in row.iter().enumerate() {
            let rgba = Rgba(index_to_rgba(index));

            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgba);
                }
            }
        }
    }

    Ok(img)
}

/// Write a canvas to a PNG file, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let img = to_image(canvas, scale)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| VgaError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    img.save(path).map_err(|e| VgaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
