//! Filled discs via the midpoint circle algorithm.

use crate::types::Point;

use super::PixelSink;

/// Paint a filled disc of `radius` around `center`.
///
/// Each step paints four horizontal spans: half-width `x` at rows `±y` and
/// half-width `y` at rows `±x`. Radius 0 paints the centre pixel only;
/// a negative radius paints nothing. No bounds checking.
pub fn fill_circle<S: PixelSink + ?Sized>(sink: &mut S, center: Point, radius: i32, color: u8) {
    let Point { x: cx, y: cy } = center;

    let mut x = radius;
    let mut y = 0;
    let mut decision = 1 - radius;

    while y <= x {
        span(sink, cx - x, cx + x, cy + y, color);
        span(sink, cx - x, cx + x, cy - y, color);
        span(sink, cx - y, cx + y, cy + x, color);
        span(sink, cx - y, cx + y, cy - x, color);

        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        } else {
            x -= 1;
            decision += 2 * (y - x) + 1;
        }
    }
}

/// Paint the inclusive run `[x0, x1]` on row `y`.
pub(crate) fn span<S: PixelSink + ?Sized>(sink: &mut S, x0: i32, x1: i32, y: i32, color: u8) {
    for x in x0..=x1 {
        sink.set_pixel(x, y, color);
    }
}
