//! Checked pixel, line, circle, rectangle and polygon requests.

use crate::error::DrawError;
use crate::geometry::{bounding_box, max, min};
use crate::raster::{
    brush_radius, draw_line, draw_polygon, fill_circle, fill_rect, outline_rect, stroke_rect,
    PixelSink,
};
use crate::types::{Color, Point, Surface};
use crate::validation::{
    check_box, check_color, check_height, check_radius, check_vertices, check_weight, check_width,
    expand_box, far_corner,
};

/// A single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub at: Point,
    pub color: i32,
}

impl Pixel {
    pub const fn new(at: Point, color: i32) -> Self {
        Self { at, color }
    }

    /// Checks, in order: colour, position.
    pub fn validate(&self, surface: &Surface) -> Result<Color, DrawError> {
        let color = check_color(self.color)?;
        check_box(surface, self.at, self.at)?;
        Ok(color)
    }

    pub fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, surface: &Surface) -> Result<(), DrawError> {
        let color = self.validate(surface)?;
        sink.set_pixel(self.at.x, self.at.y, color.index());
        Ok(())
    }
}

/// A thick line stamped with a disc brush of radius `weight / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub weight: i32,
    pub color: i32,
}

impl Line {
    pub const fn new(from: Point, to: Point, weight: i32, color: i32) -> Self {
        Self { from, to, weight, color }
    }

    /// Checks, in order: colour, weight, brush-expanded bounds.
    pub fn validate(&self, surface: &Surface) -> Result<Color, DrawError> {
        let color = check_color(self.color)?;
        let weight = check_weight(self.weight)?;

        let lo = Point::new(min(self.from.x, self.to.x), min(self.from.y, self.to.y));
        let hi = Point::new(max(self.from.x, self.to.x), max(self.from.y, self.to.y));
        let (lo, hi) = expand_box(lo, hi, brush_radius(weight));
        check_box(surface, lo, hi)?;

        Ok(color)
    }

    pub fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, surface: &Surface) -> Result<(), DrawError> {
        let color = self.validate(surface)?;
        draw_line(sink, self.from, self.to, self.weight, color.index());
        Ok(())
    }
}

/// A filled disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub color: i32,
}

impl Circle {
    pub const fn new(center: Point, radius: i32, color: i32) -> Self {
        Self { center, radius, color }
    }

    /// Checks, in order: colour, radius, disc bounds.
    pub fn validate(&self, surface: &Surface) -> Result<Color, DrawError> {
        let color = check_color(self.color)?;
        let radius = check_radius(self.radius)?;

        let (lo, hi) = expand_box(self.center, self.center, radius);
        check_box(surface, lo, hi)?;

        Ok(color)
    }

    pub fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, surface: &Surface) -> Result<(), DrawError> {
        let color = self.validate(surface)?;
        fill_circle(sink, self.center, self.radius, color.index());
        Ok(())
    }
}

/// An axis-aligned rectangle with its upper-left corner at `(x, y)`.
///
/// Outline mode paints a one-pixel frame in `color` and ignores
/// `border_color`. Filled mode paints the box in `color`, then strokes the
/// four sides with `weight` in `border_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: i32,
    pub filled: bool,
    pub weight: i32,
    pub border_color: i32,
}

impl Rectangle {
    /// One-pixel outline.
    pub const fn outline(x: i32, y: i32, width: i32, height: i32, color: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            filled: false,
            weight: 0,
            border_color: color,
        }
    }

    /// Filled box with a border stroke of `weight` in `border_color`.
    pub const fn filled(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: i32,
        weight: i32,
        border_color: i32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            filled: true,
            weight,
            border_color,
        }
    }

    /// Checks, in order: colour, border colour (filled only), weight,
    /// width, height, bounds.
    ///
    /// Returns the resolved fill and border colours.
    pub fn validate(&self, surface: &Surface) -> Result<(Color, Color), DrawError> {
        let color = check_color(self.color)?;
        let border = if self.filled {
            check_color(self.border_color)?
        } else {
            color
        };
        let weight = check_weight(self.weight)?;
        let width = check_width(self.width)?;
        let height = check_height(self.height)?;

        let origin = Point::new(self.x, self.y);
        let margin = if self.filled { brush_radius(weight) } else { 0 };
        let (lo, hi) = expand_box(origin, far_corner(origin, width, height), margin);
        check_box(surface, lo, hi)?;

        Ok((color, border))
    }

    pub fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, surface: &Surface) -> Result<(), DrawError> {
        let (color, border) = self.validate(surface)?;
        let origin = Point::new(self.x, self.y);
        let end = far_corner(origin, self.width, self.height);

        if self.filled {
            fill_rect(sink, origin, end, color.index());
            stroke_rect(sink, origin, end, self.weight, border.index());
        } else {
            outline_rect(sink, origin, end, color.index());
        }
        Ok(())
    }
}

/// A closed polygon of three or more vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    pub color: i32,
    pub filled: bool,
}

impl Polygon {
    pub fn new(vertices: impl Into<Vec<Point>>, color: i32, filled: bool) -> Self {
        Self {
            vertices: vertices.into(),
            color,
            filled,
        }
    }

    /// The five-vertex figure of the legacy command set.
    pub fn figure(vertices: [Point; 5], color: i32, filled: bool) -> Self {
        Self::new(vertices, color, filled)
    }

    /// Checks, in order: colour, vertex count, vertex bounds.
    pub fn validate(&self, surface: &Surface) -> Result<Color, DrawError> {
        let color = check_color(self.color)?;
        check_vertices(&self.vertices)?;

        // outline strokes have a zero-radius brush, so the vertex box is the extent
        let (lo, hi) = bounding_box(&self.vertices).ok_or(DrawError::VerticesInvalid)?;
        check_box(surface, lo, hi)?;

        Ok(color)
    }

    pub fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, surface: &Surface) -> Result<(), DrawError> {
        let color = self.validate(surface)?;
        draw_polygon(sink, &self.vertices, color.index(), self.filled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::raster::{Canvas, PixelLog};

    const SMALL: Surface = Surface::new(16, 16);

    fn rejected<F>(draw: F) -> DrawError
    where
        F: FnOnce(&mut PixelLog) -> Result<(), DrawError>,
    {
        let mut log = PixelLog::new();
        let err = draw(&mut log).unwrap_err();
        assert!(log.is_empty(), "rejected draw wrote {} pixels", log.len());
        err
    }

    #[test]
    fn test_pixel_checks() {
        let pixel = Pixel::new(Point::new(16, 0), 0x42);
        assert_eq!(rejected(|s| pixel.draw(s, &SMALL)), DrawError::ColorInvalid);

        let pixel = Pixel { color: 0xFC, ..pixel };
        assert_eq!(rejected(|s| pixel.draw(s, &SMALL)), DrawError::OutOfBounds);

        let pixel = Pixel { at: Point::new(0, -1), ..pixel };
        assert_eq!(rejected(|s| pixel.draw(s, &SMALL)), DrawError::OutOfBounds);

        let pixel = Pixel { at: Point::new(15, 15), ..pixel };
        let mut canvas = Canvas::new(SMALL);
        assert_eq!(pixel.draw(&mut canvas, &SMALL), Ok(()));
        assert_eq!(canvas.get(15, 15), Some(0xFC));
        assert_eq!(canvas.pixels().iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_line_check_order() {
        // bad colour wins over bad weight and bad bounds
        let line = Line::new(Point::new(-5, 0), Point::new(99, 0), -1, 0x42);
        assert_eq!(rejected(|s| line.draw(s, &SMALL)), DrawError::ColorInvalid);

        let line = Line { color: 0xE0, ..line };
        assert_eq!(rejected(|s| line.draw(s, &SMALL)), DrawError::WeightInvalid);

        let line = Line { weight: 1, ..line };
        assert_eq!(rejected(|s| line.draw(s, &SMALL)), DrawError::OutOfBounds);
    }

    #[test]
    fn test_line_bounds_include_brush() {
        // weight 4 means radius 2, so x = 1 would reach x = -1
        let line = Line::new(Point::new(1, 5), Point::new(8, 5), 4, 0xE0);
        assert_eq!(rejected(|s| line.draw(s, &SMALL)), DrawError::OutOfBounds);

        let line = Line::new(Point::new(2, 5), Point::new(13, 5), 4, 0xE0);
        let mut canvas = Canvas::new(SMALL);
        assert_eq!(line.draw(&mut canvas, &SMALL), Ok(()));
    }

    #[test]
    fn test_circle_checks() {
        let circle = Circle::new(Point::new(8, 8), -1, 0x42);
        assert_eq!(rejected(|s| circle.draw(s, &SMALL)), DrawError::ColorInvalid);

        let circle = Circle { color: 0x03, ..circle };
        assert_eq!(rejected(|s| circle.draw(s, &SMALL)), DrawError::RadiusInvalid);

        let circle = Circle { radius: 9, ..circle };
        assert_eq!(rejected(|s| circle.draw(s, &SMALL)), DrawError::OutOfBounds);

        let circle = Circle { radius: 8, center: Point::new(8, 7), ..circle };
        assert_eq!(rejected(|s| circle.draw(s, &SMALL)), DrawError::OutOfBounds);

        let circle = Circle::new(Point::new(7, 7), 7, 0x03);
        let mut canvas = Canvas::new(SMALL);
        assert_eq!(circle.draw(&mut canvas, &SMALL), Ok(()));
        assert_eq!(canvas.get(0, 7), Some(0x03));
        assert_eq!(canvas.get(14, 7), Some(0x03));
    }

    #[test]
    fn test_rectangle_check_order() {
        let rect = Rectangle {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            color: 0x42,
            filled: true,
            weight: -1,
            border_color: 0x42,
        };
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::ColorInvalid);

        let rect = Rectangle { color: 0x1C, ..rect };
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::ColorInvalid);

        let rect = Rectangle { border_color: 0xFF, ..rect };
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::WeightInvalid);

        let rect = Rectangle { weight: 0, ..rect };
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::WidthInvalid);

        let rect = Rectangle { width: 3, ..rect };
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::HeightInvalid);
    }

    #[test]
    fn test_outline_ignores_border_color() {
        let rect = Rectangle {
            border_color: 0x42,
            ..Rectangle::outline(1, 1, 4, 4, 0xFF)
        };
        let mut canvas = Canvas::new(SMALL);
        assert_eq!(rect.draw(&mut canvas, &SMALL), Ok(()));
        assert_eq!(canvas.painted(0).len(), 12);
    }

    #[test]
    fn test_rectangle_edge_of_surface() {
        let rect = Rectangle::outline(0, 0, 16, 16, 0xFF);
        let mut canvas = Canvas::new(SMALL);
        assert_eq!(rect.draw(&mut canvas, &SMALL), Ok(()));

        let rect = Rectangle::outline(1, 0, 16, 16, 0xFF);
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::OutOfBounds);
    }

    #[test]
    fn test_filled_rectangle_bounds_include_border_brush() {
        let rect = Rectangle::filled(1, 1, 4, 4, 0x1C, 4, 0xFF);
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::OutOfBounds);

        let rect = Rectangle::filled(2, 2, 4, 4, 0x1C, 4, 0xFF);
        let mut canvas = Canvas::new(SMALL);
        assert_eq!(rect.draw(&mut canvas, &SMALL), Ok(()));
        assert_eq!(canvas.get(0, 2), Some(0xFF));
        assert_eq!(canvas.get(0, 0), Some(0));
    }

    #[test]
    fn test_rectangle_huge_width_is_out_of_bounds() {
        let rect = Rectangle::outline(10, 0, i32::MAX, 1, 0xFF);
        assert_eq!(rejected(|s| rect.draw(s, &SMALL)), DrawError::OutOfBounds);
    }

    #[test]
    fn test_filled_rectangle_border_over_fill() {
        let rect = Rectangle::filled(1, 1, 5, 4, 0x1C, 0, 0xFF);
        let mut canvas = Canvas::new(Surface::new(7, 6));
        assert_eq!(rect.draw(&mut canvas, &Surface::new(7, 6)), Ok(()));

        assert_eq!(canvas.get(1, 1), Some(0xFF));
        assert_eq!(canvas.get(5, 4), Some(0xFF));
        assert_eq!(canvas.get(3, 2), Some(0x1C));
        assert_eq!(canvas.get(0, 0), Some(0));
    }

    #[test]
    fn test_polygon_checks() {
        let tri = vec![Point::new(1, 1), Point::new(10, 1), Point::new(1, 10)];

        let poly = Polygon::new(tri.clone(), 0x42, true);
        assert_eq!(rejected(|s| poly.draw(s, &SMALL)), DrawError::ColorInvalid);

        let poly = Polygon::new(&tri[..2], 0xFC, true);
        assert_eq!(rejected(|s| poly.draw(s, &SMALL)), DrawError::VerticesInvalid);

        let poly = Polygon::new(vec![Point::new(1, 1), Point::new(16, 1), Point::new(1, 10)], 0xFC, false);
        assert_eq!(rejected(|s| poly.draw(s, &SMALL)), DrawError::OutOfBounds);

        let poly = Polygon::new(tri, 0xFC, false);
        let mut log = PixelLog::new();
        assert_eq!(poly.draw(&mut log, &SMALL), Ok(()));
        assert!(!log.is_empty());
    }

    #[test]
    fn test_polygon_figure() {
        let poly = Polygon::figure(
            [
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
                Point::new(0, 0),
            ],
            0xFC,
            true,
        );
        assert_eq!(poly.vertices.len(), 5);

        let mut canvas = Canvas::new(SMALL);
        assert_eq!(poly.draw(&mut canvas, &SMALL), Ok(()));
        assert_eq!(canvas.painted(0).len(), 121);
    }
}
