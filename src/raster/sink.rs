//! The pixel sink capability and the sinks shipped with the crate.

use std::collections::HashMap;

use crate::types::{index_to_rgba, Point, Surface};

/// Commits pixel writes to a surface.
///
/// Rasterizers only ever write through this trait. A sink gets exclusive,
/// non-reentrant access for the duration of one draw call.
pub trait PixelSink {
    /// Set one pixel to a palette index.
    fn set_pixel(&mut self, x: i32, y: i32, color: u8);

    /// Set every pixel on the surface to a palette index.
    fn fill_screen(&mut self, color: u8);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        (**self).set_pixel(x, y, color);
    }

    fn fill_screen(&mut self, color: u8) {
        (**self).fill_screen(color);
    }
}

/// An in-memory palette-indexed frame buffer.
///
/// Writes outside the surface are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    surface: Surface,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas cleared to index 0.
    pub fn new(surface: Surface) -> Self {
        Self::filled(surface, 0)
    }

    /// Create a canvas cleared to `color`.
    pub fn filled(surface: Surface, color: u8) -> Self {
        Self {
            surface,
            pixels: vec![color; surface.area()],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.surface.width.max(0) as usize
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.surface.height.max(0) as usize
    }

    /// Get the index at a position, `None` if off-surface.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Positions whose index differs from `background`, row-major.
    pub fn painted(&self, background: u8) -> Vec<Point> {
        let width = self.width();
        self.pixels
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != background)
            .map(|(i, _)| Point::new((i % width) as i32, (i / width) as i32))
            .collect()
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| index_to_rgba(p)).collect()
    }

    /// Text dump: `.` for index 0, `#` for anything else, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.height());
        for row in self.pixels.chunks(self.width().max(1)) {
            out.extend(row.iter().map(|&p| if p == 0 { '.' } else { '#' }));
            out.push('\n');
        }
        out
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        self.surface
            .contains(Point::new(x, y))
            .then(|| y as usize * self.width() + x as usize)
    }
}

impl PixelSink for Canvas {
    fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill_screen(&mut self, color: u8) {
        self.pixels.fill(color);
    }
}

/// A single recorded sink call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOp {
    Set { x: i32, y: i32, color: u8 },
    Fill { color: u8 },
}

/// A sink that records every call in order and paints nothing.
///
/// Useful for dry runs and for checking exactly which writes a draw makes.
#[derive(Debug, Clone, Default)]
pub struct PixelLog {
    ops: Vec<PixelOp>,
}

impl PixelLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls.
    pub fn ops(&self) -> &[PixelOp] {
        &self.ops
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of `set_pixel` calls.
    pub fn write_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PixelOp::Set { .. }))
            .count()
    }

    /// How many times each position was written.
    pub fn write_counts(&self) -> HashMap<Point, usize> {
        let mut counts = HashMap::new();
        for op in &self.ops {
            if let PixelOp::Set { x, y, .. } = *op {
                *counts.entry(Point::new(x, y)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Final index of every written position (last write wins).
    pub fn final_pixels(&self) -> HashMap<Point, u8> {
        let mut pixels = HashMap::new();
        for op in &self.ops {
            if let PixelOp::Set { x, y, color } = *op {
                pixels.insert(Point::new(x, y), color);
            }
        }
        pixels
    }
}

impl PixelSink for PixelLog {
    fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        self.ops.push(PixelOp::Set { x, y, color });
    }

    fn fill_screen(&mut self, color: u8) {
        self.ops.push(PixelOp::Fill { color });
    }
}
