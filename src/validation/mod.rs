//! Parameter and bounds checks run before any pixel is written.
//!
//! Every check is pure. Draw requests call them in a fixed order and stop at
//! the first failure, so a rejected draw never touches the sink.

use crate::error::DrawError;
use crate::types::{Color, Point, Surface};

/// Resolve a raw colour value to a palette entry.
pub fn check_color(raw: i32) -> Result<Color, DrawError> {
    Color::try_from(raw)
}

/// Line weight must not be negative.
pub fn check_weight(weight: i32) -> Result<i32, DrawError> {
    if weight < 0 {
        return Err(DrawError::WeightInvalid);
    }
    Ok(weight)
}

/// Circle radius must not be negative. Zero is a single pixel.
pub fn check_radius(radius: i32) -> Result<i32, DrawError> {
    if radius < 0 {
        return Err(DrawError::RadiusInvalid);
    }
    Ok(radius)
}

/// Rectangle width must be positive.
pub fn check_width(width: i32) -> Result<i32, DrawError> {
    if width <= 0 {
        return Err(DrawError::WidthInvalid);
    }
    Ok(width)
}

/// Rectangle height must be positive.
pub fn check_height(height: i32) -> Result<i32, DrawError> {
    if height <= 0 {
        return Err(DrawError::HeightInvalid);
    }
    Ok(height)
}

/// Polygons need at least three vertices.
pub fn check_vertices(vertices: &[Point]) -> Result<(), DrawError> {
    if vertices.len() < 3 {
        return Err(DrawError::VerticesInvalid);
    }
    Ok(())
}

/// The inclusive box `[min, max]` must lie entirely on the surface.
pub fn check_box(surface: &Surface, min: Point, max: Point) -> Result<(), DrawError> {
    if !surface.contains_box(min, max) {
        return Err(DrawError::OutOfBounds);
    }
    Ok(())
}

/// Grow the inclusive box `[min, max]` by `margin` on every side.
///
/// Saturates instead of wrapping, so a huge margin still lands off-surface.
pub fn expand_box(min: Point, max: Point, margin: i32) -> (Point, Point) {
    (
        Point::new(min.x.saturating_sub(margin), min.y.saturating_sub(margin)),
        Point::new(max.x.saturating_add(margin), max.y.saturating_add(margin)),
    )
}

/// Inclusive far corner of a box of `width` x `height` starting at `origin`.
pub fn far_corner(origin: Point, width: i32, height: i32) -> Point {
    Point::new(
        origin.x.saturating_add(width - 1),
        origin.y.saturating_add(height - 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_color() {
        assert_eq!(check_color(0xE0), Ok(Color::Red));
        assert_eq!(check_color(0), Ok(Color::Black));
        assert_eq!(check_color(0x42), Err(DrawError::ColorInvalid));
        assert_eq!(check_color(1000), Err(DrawError::ColorInvalid));
    }

    #[test]
    fn test_check_weight() {
        assert_eq!(check_weight(0), Ok(0));
        assert_eq!(check_weight(7), Ok(7));
        assert_eq!(check_weight(-1), Err(DrawError::WeightInvalid));
    }

    #[test]
    fn test_check_radius() {
        assert_eq!(check_radius(0), Ok(0));
        assert_eq!(check_radius(-3), Err(DrawError::RadiusInvalid));
    }

    #[test]
    fn test_check_dimensions() {
        assert_eq!(check_width(1), Ok(1));
        assert_eq!(check_width(0), Err(DrawError::WidthInvalid));
        assert_eq!(check_width(-1), Err(DrawError::WidthInvalid));
        assert_eq!(check_height(0), Err(DrawError::HeightInvalid));
        assert_eq!(check_height(-5), Err(DrawError::HeightInvalid));
    }

    #[test]
    fn test_check_vertices() {
        let p = Point::new(0, 0);
        assert_eq!(check_vertices(&[p, p]), Err(DrawError::VerticesInvalid));
        assert_eq!(check_vertices(&[p, p, p]), Ok(()));
    }

    #[test]
    fn test_check_box() {
        let s = Surface::new(320, 240);
        assert_eq!(check_box(&s, Point::new(0, 0), Point::new(319, 239)), Ok(()));
        assert_eq!(
            check_box(&s, Point::new(0, 0), Point::new(320, 239)),
            Err(DrawError::OutOfBounds)
        );
        assert_eq!(
            check_box(&s, Point::new(-1, 0), Point::new(3, 3)),
            Err(DrawError::OutOfBounds)
        );
    }

    #[test]
    fn test_expand_box_saturates() {
        let (lo, hi) = expand_box(Point::new(5, 5), Point::new(6, 6), 2);
        assert_eq!((lo, hi), (Point::new(3, 3), Point::new(8, 8)));

        let (lo, _) = expand_box(Point::new(i32::MIN + 1, 0), Point::new(0, 0), 10);
        assert_eq!(lo.x, i32::MIN);
    }

    #[test]
    fn test_far_corner() {
        assert_eq!(far_corner(Point::new(0, 0), 3, 2), Point::new(2, 1));
        assert_eq!(far_corner(Point::new(i32::MAX, 0), 10, 1).x, i32::MAX);
    }
}
