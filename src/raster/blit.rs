//! Bitmap blitting.

use crate::types::{Bitmap, Point};

use super::PixelSink;

/// Copy a bitmap row by row with its upper-left corner at `dest`.
///
/// No scaling or transparency: every source index is written as-is.
pub fn blit<S: PixelSink + ?Sized>(sink: &mut S, bitmap: &Bitmap, dest: Point) {
    for (sy, row) in bitmap.rows().enumerate() {
        for (sx, &index) in row.iter().enumerate() {
            sink.set_pixel(dest.x + sx as i32, dest.y + sy as i32, index);
        }
    }
}
