//! Draw commands.
//!
//! Each invocation performs one validated draw on a fresh canvas cleared to
//! the background colour, then writes a PNG preview.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::draw::{BitmapBlit, Circle, Line, Pixel, Polygon, Rectangle, Request};
use crate::error::{Result, VgaError};
use crate::output::{display_path, plural, Printer};
use crate::raster::{Canvas, PixelLog, PixelSink};
use crate::registry::BitmapRegistry;
use crate::render::write_png;
use crate::types::{Color, Point, Surface};

/// Canvas and output options shared by every draw command.
#[derive(Args, Debug, Clone, Default)]
pub struct CanvasArgs {
    /// Configuration file (defaults to ./vgadraw.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, global = true)]
    pub scale: Option<u32>,

    /// Surface width in pixels
    #[arg(long = "width", value_name = "W", global = true)]
    pub surface_width: Option<i32>,

    /// Surface height in pixels
    #[arg(long = "height", value_name = "H", global = true)]
    pub surface_height: Option<i32>,

    /// Colour the canvas is cleared to before drawing
    #[arg(long, global = true)]
    pub background: Option<Color>,

    /// Validate and count pixel writes without writing a PNG
    #[arg(long, global = true)]
    pub dry_run: bool,
}

impl CanvasArgs {
    /// Load the configuration and apply command-line overrides.
    pub fn resolve(&self) -> Result<Config> {
        let cwd = std::env::current_dir().map_err(|e| VgaError::Io {
            path: PathBuf::from("."),
            message: format!("Failed to read working directory: {}", e),
        })?;
        let mut config = Config::discover(self.config.as_deref(), &cwd)?;

        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(scale) = self.scale {
            config.scale = Some(scale);
        }
        if let Some(background) = self.background {
            config.background = Some(background);
        }

        let surface = Surface::new(
            self.surface_width.unwrap_or(config.surface.width),
            self.surface_height.unwrap_or(config.surface.height),
        );
        if surface.width <= 0 || surface.height <= 0 {
            return Err(VgaError::Parse {
                message: format!("Invalid surface {}", surface),
                help: Some("--width and --height must be positive".to_string()),
            });
        }
        config.surface = surface;

        Ok(config)
    }
}

/// Accept a colour name or a raw number.
///
/// Numbers are passed through unchecked so the engine can reject them with
/// its own error code.
pub fn parse_color_value(s: &str) -> std::result::Result<i32, String> {
    if let Some(color) = Color::from_name(s) {
        return Ok(color.index().into());
    }

    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => i32::from_str_radix(hex, 16),
        None => s.parse::<i32>(),
    };
    parsed.map_err(|_| format!("unknown colour '{}' (see `vgadraw palette`)", s))
}

/// Set a single pixel
#[derive(Args, Debug)]
pub struct PixelArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Colour name or palette index
    #[arg(long, short, default_value = "white", value_parser = parse_color_value)]
    pub color: i32,
}

impl From<PixelArgs> for Request {
    fn from(args: PixelArgs) -> Self {
        Pixel::new(Point::new(args.x, args.y), args.color).into()
    }
}

/// Draw a thick line
#[derive(Args, Debug)]
pub struct LineArgs {
    #[arg(allow_negative_numbers = true)]
    pub x1: i32,
    #[arg(allow_negative_numbers = true)]
    pub y1: i32,
    #[arg(allow_negative_numbers = true)]
    pub x2: i32,
    #[arg(allow_negative_numbers = true)]
    pub y2: i32,

    /// Line thickness (brush radius is weight / 2)
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub weight: i32,

    /// Colour name or palette index
    #[arg(long, short, default_value = "white", value_parser = parse_color_value)]
    pub color: i32,
}

impl From<LineArgs> for Request {
    fn from(args: LineArgs) -> Self {
        Line::new(
            Point::new(args.x1, args.y1),
            Point::new(args.x2, args.y2),
            args.weight,
            args.color,
        )
        .into()
    }
}

/// Draw a filled circle
#[derive(Args, Debug)]
pub struct CircleArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
    #[arg(allow_negative_numbers = true)]
    pub radius: i32,

    /// Colour name or palette index
    #[arg(long, short, default_value = "white", value_parser = parse_color_value)]
    pub color: i32,
}

impl From<CircleArgs> for Request {
    fn from(args: CircleArgs) -> Self {
        Circle::new(Point::new(args.x, args.y), args.radius, args.color).into()
    }
}

/// Draw a rectangle outline, or a filled rectangle with a border
#[derive(Args, Debug)]
pub struct RectArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
    #[arg(allow_negative_numbers = true)]
    pub width: i32,
    #[arg(allow_negative_numbers = true)]
    pub height: i32,

    /// Colour name or palette index
    #[arg(long, short, default_value = "white", value_parser = parse_color_value)]
    pub color: i32,

    /// Fill the rectangle and stroke its border
    #[arg(long)]
    pub filled: bool,

    /// Border thickness in filled mode
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub weight: i32,

    /// Border colour in filled mode (defaults to --color)
    #[arg(long, value_parser = parse_color_value)]
    pub border_color: Option<i32>,
}

impl From<RectArgs> for Request {
    fn from(args: RectArgs) -> Self {
        Rectangle {
            x: args.x,
            y: args.y,
            width: args.width,
            height: args.height,
            color: args.color,
            filled: args.filled,
            weight: args.weight,
            border_color: args.border_color.unwrap_or(args.color),
        }
        .into()
    }
}

/// Draw a closed polygon
#[derive(Args, Debug)]
pub struct PolygonArgs {
    /// Vertices as X,Y pairs (put negative vertices after `--`)
    #[arg(required = true)]
    pub vertices: Vec<Point>,

    /// Colour name or palette index
    #[arg(long, short, default_value = "white", value_parser = parse_color_value)]
    pub color: i32,

    /// Fill the interior
    #[arg(long)]
    pub filled: bool,
}

impl From<PolygonArgs> for Request {
    fn from(args: PolygonArgs) -> Self {
        Polygon::new(args.vertices, args.color, args.filled).into()
    }
}

/// Blit a bitmap from the bitmap file
#[derive(Args, Debug)]
pub struct BitmapArgs {
    #[arg(allow_negative_numbers = true)]
    pub id: i32,
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Bitmap file (overrides `bitmaps` in vgadraw.yaml)
    #[arg(long)]
    pub bitmaps: Option<PathBuf>,
}

impl From<&BitmapArgs> for Request {
    fn from(args: &BitmapArgs) -> Self {
        BitmapBlit::new(args.id, Point::new(args.x, args.y)).into()
    }
}

/// Clear the whole surface to one colour
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Colour name or palette index
    #[arg(long, short, default_value = "black", value_parser = parse_color_value)]
    pub color: i32,
}

impl From<ClearArgs> for Request {
    fn from(args: ClearArgs) -> Self {
        Request::Clear { color: args.color }
    }
}

/// What a draw command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// PNG written to this path.
    Written(PathBuf),
    /// Dry run: total pixel writes and distinct pixels touched.
    Checked { writes: usize, pixels: usize },
}

/// Run one draw request against a fresh canvas.
pub fn run(
    request: Request,
    canvas_args: &CanvasArgs,
    bitmaps: Option<&Path>,
    printer: &Printer,
) -> Result<Outcome> {
    let config = canvas_args.resolve()?;
    printer.verbose("Surface", &config.surface.to_string());

    let registry = load_registry(&request, bitmaps.or(config.bitmaps.as_deref()), printer)?;

    if canvas_args.dry_run {
        let mut log = PixelLog::new();
        draw(&request, &mut log, &config.surface, &registry, printer)?;

        let writes = log.write_count();
        let pixels = log.final_pixels().len();
        printer.status(
            "Checked",
            &format!(
                "{}: {} to {}",
                request,
                plural(writes, "write", "writes"),
                plural(pixels, "pixel", "pixels")
            ),
        );
        return Ok(Outcome::Checked { writes, pixels });
    }

    let background = config.effective_background();
    printer.verbose("Background", background.name());
    let mut canvas = Canvas::filled(config.surface, background.index());

    printer.status("Drawing", &request.to_string());
    draw(&request, &mut canvas, &config.surface, &registry, printer)?;

    write_png(&canvas, &config.output, config.effective_scale())?;
    printer.status("Finished", &display_path(&config.output));

    Ok(Outcome::Written(config.output))
}

fn draw<S: PixelSink>(
    request: &Request,
    sink: &mut S,
    surface: &Surface,
    registry: &BitmapRegistry,
    printer: &Printer,
) -> Result<()> {
    request.draw(sink, surface, registry).map_err(|err| {
        printer.error("Rejected", &format!("{} (error {})", request, err.code()));
        VgaError::from(err)
    })
}

fn load_registry(request: &Request, path: Option<&Path>, printer: &Printer) -> Result<BitmapRegistry> {
    if !matches!(request, Request::Bitmap(_)) {
        return Ok(BitmapRegistry::new());
    }

    let Some(path) = path else {
        printer.warning("Warning", "no bitmap file given, the registry is empty");
        return Ok(BitmapRegistry::new());
    };

    let registry = BitmapRegistry::load(path)?;
    let ids: Vec<String> = registry.ids().map(|id| id.to_string()).collect();
    printer.verbose(
        "Loaded",
        &format!(
            "{} from {} (ids {})",
            plural(registry.len(), "bitmap", "bitmaps"),
            display_path(path),
            ids.join(", ")
        ),
    );
    Ok(registry)
}
