//! Axis-aligned rectangles.

use crate::types::Point;

use super::circle::span;
use super::line::draw_line;
use super::PixelSink;

/// Paint every pixel of the inclusive box `[min, max]`, one span per row.
pub fn fill_rect<S: PixelSink + ?Sized>(sink: &mut S, min: Point, max: Point, color: u8) {
    for y in min.y..=max.y {
        span(sink, min.x, max.x, y, color);
    }
}

/// Paint the one-pixel outline of `[min, max]`.
///
/// Top and bottom rows are painted in full; the side columns skip the
/// corners, so every boundary pixel is written exactly once.
pub fn outline_rect<S: PixelSink + ?Sized>(sink: &mut S, min: Point, max: Point, color: u8) {
    span(sink, min.x, max.x, min.y, color);
    if max.y != min.y {
        span(sink, min.x, max.x, max.y, color);
    }

    for y in min.y + 1..max.y {
        sink.set_pixel(min.x, y, color);
        if max.x != min.x {
            sink.set_pixel(max.x, y, color);
        }
    }
}

/// Stroke the four sides of `[min, max]` with thick lines.
pub fn stroke_rect<S: PixelSink + ?Sized>(
    sink: &mut S,
    min: Point,
    max: Point,
    weight: i32,
    color: u8,
) {
    let top_right = Point::new(max.x, min.y);
    let bottom_left = Point::new(min.x, max.y);

    draw_line(sink, min, bottom_left, weight, color);
    draw_line(sink, min, top_right, weight, color);
    draw_line(sink, max, bottom_left, weight, color);
    draw_line(sink, max, top_right, weight, color);
}
