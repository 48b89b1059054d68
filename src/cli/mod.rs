pub mod completions;
pub mod draw;
pub mod palette;

use clap::{Parser, Subcommand};

/// vgadraw - preview VGA drawing commands as PNG
#[derive(Parser, Debug)]
#[command(name = "vgadraw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub canvas: draw::CanvasArgs,

    /// Show extra detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set a single pixel
    Pixel(draw::PixelArgs),

    /// Draw a thick line
    Line(draw::LineArgs),

    /// Draw a filled circle
    Circle(draw::CircleArgs),

    /// Draw a rectangle outline, or a filled rectangle with a border
    Rect(draw::RectArgs),

    /// Draw a closed polygon
    Polygon(draw::PolygonArgs),

    /// Blit a bitmap from the bitmap file
    Bitmap(draw::BitmapArgs),

    /// Clear the whole surface to one colour
    Clear(draw::ClearArgs),

    /// List the recognized palette colours
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::draw::{Line, Pixel, Polygon, Rectangle, Request};
    use crate::types::{Color, Point};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vgadraw").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_line_with_negative_coordinates() {
        let cli = parse(&["line", "-5", "0", "10", "-2", "--weight", "3", "--color", "rood"]);
        let Commands::Line(args) = cli.command else {
            panic!("expected line");
        };
        assert_eq!(
            Request::from(args),
            Request::Line(Line::new(Point::new(-5, 0), Point::new(10, -2), 3, 0xE0))
        );
    }

    #[test]
    fn test_rect_border_defaults_to_fill() {
        let cli = parse(&["rect", "1", "2", "30", "40", "--filled", "-c", "green"]);
        let Commands::Rect(args) = cli.command else {
            panic!("expected rect");
        };
        assert_eq!(
            Request::from(args),
            Request::Rectangle(Rectangle::filled(1, 2, 30, 40, 0x1C, 1, 0x1C))
        );
    }

    #[test]
    fn test_pixel() {
        let cli = parse(&["pixel", "12", "-1", "-c", "geel"]);
        let Commands::Pixel(args) = cli.command else {
            panic!("expected pixel");
        };
        assert_eq!(Request::from(args), Request::Pixel(Pixel::new(Point::new(12, -1), 0xFC)));
    }

    #[test]
    fn test_polygon_vertices() {
        let cli = parse(&["polygon", "0,0", "3,10", "10,10", "--filled", "-c", "red"]);
        let Commands::Polygon(args) = cli.command else {
            panic!("expected polygon");
        };
        assert_eq!(
            Request::from(args),
            Request::Polygon(Polygon::new(
                vec![Point::new(0, 0), Point::new(3, 10), Point::new(10, 10)],
                0xE0,
                true
            ))
        );
    }

    #[test]
    fn test_polygon_negative_vertices_after_separator() {
        let cli = parse(&["polygon", "--filled", "--", "0,0", "-3,10", "10,10"]);
        let Commands::Polygon(args) = cli.command else {
            panic!("expected polygon");
        };
        assert_eq!(
            Request::from(args),
            Request::Polygon(Polygon::new(
                vec![Point::new(0, 0), Point::new(-3, 10), Point::new(10, 10)],
                0xFF,
                true
            ))
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&["clear", "--color", "0x92", "--dry-run", "--background", "wit", "--width", "64"]);

        assert!(cli.canvas.dry_run);
        assert_eq!(cli.canvas.background, Some(Color::White));
        assert_eq!(cli.canvas.surface_width, Some(64));
        let Commands::Clear(args) = cli.command else {
            panic!("expected clear");
        };
        assert_eq!(args.color, 0x92);
    }

    #[test]
    fn test_unknown_colour_name_is_a_usage_error() {
        let result = Cli::try_parse_from(["vgadraw", "circle", "1", "1", "1", "--color", "mauve"]);
        assert!(result.is_err());
    }
}
