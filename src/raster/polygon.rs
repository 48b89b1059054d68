//! Closed polygons: outline strokes plus winding-number fill.

use crate::geometry::{bounding_box, edges, is_in_polygon};
use crate::types::Point;

use super::line::draw_line;
use super::PixelSink;

/// Outline weight used for polygon edges.
pub const OUTLINE_WEIGHT: i32 = 1;

/// Stroke every edge of the closed polygon, last vertex back to the first.
pub fn stroke_polygon<S: PixelSink + ?Sized>(sink: &mut S, vertices: &[Point], color: u8) {
    for (from, to) in edges(vertices) {
        draw_line(sink, from, to, OUTLINE_WEIGHT, color);
    }
}

/// Paint every pixel of the bounding box that lies inside the polygon.
///
/// This tests each candidate against the winding-number predicate, so the
/// cost is proportional to the bounding-box area.
pub fn fill_polygon<S: PixelSink + ?Sized>(sink: &mut S, vertices: &[Point], color: u8) {
    let Some((min, max)) = bounding_box(vertices) else {
        return;
    };

    for x in min.x..=max.x {
        for y in min.y..=max.y {
            let p = Point::new(x, y);
            if is_in_polygon(p, vertices) {
                sink.set_pixel(x, y, color);
            }
        }
    }
}

/// Stroke the outline, then fill the interior if `filled`.
pub fn draw_polygon<S: PixelSink + ?Sized>(sink: &mut S, vertices: &[Point], color: u8, filled: bool) {
    stroke_polygon(sink, vertices, color);
    if filled {
        fill_polygon(sink, vertices, color);
    }
}
