//! Thick lines: Bresenham stepping with a disc brush.

use crate::types::Point;

use super::circle::fill_circle;
use super::PixelSink;

/// Brush radius for a line weight. Truncating division: weights 0 and 1
/// both give a single-pixel brush.
pub const fn brush_radius(weight: i32) -> i32 {
    weight / 2
}

/// Visit every Bresenham step from `from` to `to`, both endpoints included.
///
/// Terminates exactly when the current point equals `to`, so a zero-length
/// line yields one point.
pub fn bresenham(from: Point, to: Point, mut visit: impl FnMut(Point)) {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut err = dx - dy;
    let mut p = from;

    loop {
        visit(p);

        if p == to {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            p.x += sx;
        }
        if e2 < dx {
            err += dx;
            p.y += sy;
        }
    }
}

/// Draw a line of the given weight, stamping a disc of radius `weight / 2`
/// at every step. No bounds checking.
///
/// Work grows with `weight²` per step, so callers should bound `weight`.
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, from: Point, to: Point, weight: i32, color: u8) {
    let radius = brush_radius(weight);
    bresenham(from, to, |p| fill_circle(&mut *sink, p, radius, color));
}
