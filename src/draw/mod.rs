//! Validated drawing.
//!
//! Each request carries raw integer fields as they arrive from a caller's
//! transport. `draw` runs every check for that shape first and only then
//! rasterizes, so a failed request leaves the sink untouched.
//!
//! ```
//! use vgadraw::draw::Rectangle;
//! use vgadraw::error::DrawError;
//! use vgadraw::raster::Canvas;
//! use vgadraw::types::Surface;
//!
//! let surface = Surface::VGA;
//! let mut canvas = Canvas::new(surface);
//!
//! let rect = Rectangle::outline(10, 10, 20, 5, 0xE0);
//! assert_eq!(rect.draw(&mut canvas, &surface), Ok(()));
//!
//! let rect = Rectangle::outline(10, 10, -1, 5, 0xE0);
//! assert_eq!(rect.draw(&mut canvas, &surface), Err(DrawError::WidthInvalid));
//! ```

mod bitmap;
mod shapes;

use std::fmt;

pub use bitmap::BitmapBlit;
pub use shapes::{Circle, Line, Pixel, Polygon, Rectangle};

use crate::error::DrawError;
use crate::raster::PixelSink;
use crate::registry::BitmapRegistry;
use crate::types::Surface;
use crate::validation::check_color;

/// Fill the whole surface with one colour.
pub fn clear_screen<S: PixelSink + ?Sized>(sink: &mut S, color: i32) -> Result<(), DrawError> {
    let color = check_color(color)?;
    sink.fill_screen(color.index());
    Ok(())
}

/// Any single draw operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Pixel(Pixel),
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Bitmap(BitmapBlit),
    Clear { color: i32 },
}

impl Request {
    /// Validate and draw. `registry` is only consulted for bitmap blits.
    pub fn draw<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
        surface: &Surface,
        registry: &BitmapRegistry,
    ) -> Result<(), DrawError> {
        match self {
            Request::Pixel(pixel) => pixel.draw(sink, surface),
            Request::Line(line) => line.draw(sink, surface),
            Request::Circle(circle) => circle.draw(sink, surface),
            Request::Rectangle(rect) => rect.draw(sink, surface),
            Request::Polygon(poly) => poly.draw(sink, surface),
            Request::Bitmap(blit) => blit.draw(sink, surface, registry),
            Request::Clear { color } => clear_screen(sink, *color),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Pixel(p) => write!(f, "pixel at {}", p.at),
            Request::Line(l) => write!(f, "line {} -> {} (weight {})", l.from, l.to, l.weight),
            Request::Circle(c) => write!(f, "circle at {} (radius {})", c.center, c.radius),
            Request::Rectangle(r) => {
                let mode = if r.filled { "filled" } else { "outline" };
                write!(f, "{} rectangle {}x{} at {},{}", mode, r.width, r.height, r.x, r.y)
            }
            Request::Polygon(p) => {
                let mode = if p.filled { "filled" } else { "outline" };
                write!(f, "{} polygon with {} vertices", mode, p.vertices.len())
            }
            Request::Bitmap(b) => write!(f, "bitmap {} at {}", b.id, b.dest),
            Request::Clear { color } => write!(f, "clear to {}", color),
        }
    }
}

impl From<Pixel> for Request {
    fn from(pixel: Pixel) -> Self {
        Request::Pixel(pixel)
    }
}

impl From<Line> for Request {
    fn from(line: Line) -> Self {
        Request::Line(line)
    }
}

impl From<Circle> for Request {
    fn from(circle: Circle) -> Self {
        Request::Circle(circle)
    }
}

impl From<Rectangle> for Request {
    fn from(rect: Rectangle) -> Self {
        Request::Rectangle(rect)
    }
}

impl From<Polygon> for Request {
    fn from(poly: Polygon) -> Self {
        Request::Polygon(poly)
    }
}

impl From<BitmapBlit> for Request {
    fn from(blit: BitmapBlit) -> Self {
        Request::Bitmap(blit)
    }
}
