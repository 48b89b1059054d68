//! Indexed bitmap images.
//!
//! A bitmap is a row-major grid of raw palette indices. Unlike shape
//! colours, bitmap pixels may hold any byte the surface can display.

use crate::error::{Result, VgaError};

/// A row-major grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap, checking that `pixels` holds `width * height` entries.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let count = pixel_count(width, height)?;
        if pixels.len() != count {
            return Err(VgaError::Parse {
                message: format!(
                    "Bitmap is {}x{} but has {} pixels (expected {})",
                    width,
                    height,
                    pixels.len(),
                    count
                ),
                help: Some("Provide exactly width * height palette indices, row by row".to_string()),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap filled with a single index.
    pub fn solid(width: usize, height: usize, index: u8) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Self::new(width, height, vec![index; count])
    }

    /// Decode the packed `[height, width, pixel...]` layout.
    ///
    /// Trailing bytes beyond `height * width` pixels are ignored.
    pub fn from_packed(data: &[u8]) -> Result<Self> {
        let (&height, rest) = data.split_first().ok_or_else(|| packed_error("missing height"))?;
        let (&width, rest) = rest.split_first().ok_or_else(|| packed_error("missing width"))?;
        let (height, width) = (height as usize, width as usize);

        let count = pixel_count(width, height)?;
        if rest.len() < count {
            return Err(packed_error(&format!(
                "{}x{} needs {} pixels, found {}",
                width,
                height,
                count,
                rest.len()
            )));
        }

        Self::new(width, height, rest[..count].to_vec())
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Check if the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the index at a position.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Raw row-major pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0
        self.pixels.chunks_exact(self.width.max(1))
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| VgaError::Parse {
        message: format!("Bitmap size {}x{} is too large", width, height),
        help: Some("Width times height must fit in memory".to_string()),
    })
}

fn packed_error(detail: &str) -> VgaError {
    VgaError::Parse {
        message: format!("Invalid packed bitmap: {}", detail),
        help: Some("Packed bitmaps start with height and width bytes, then pixels".to_string()),
    }
}
