use clap::Parser;
use miette::Result;
use vgadraw::cli::{draw, Cli, Commands};
use vgadraw::draw::Request;
use vgadraw::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);
    let canvas = &cli.canvas;

    match cli.command {
        Commands::Pixel(args) => {
            draw::run(args.into(), canvas, None, &printer)?;
        }
        Commands::Line(args) => {
            draw::run(args.into(), canvas, None, &printer)?;
        }
        Commands::Circle(args) => {
            draw::run(args.into(), canvas, None, &printer)?;
        }
        Commands::Rect(args) => {
            draw::run(args.into(), canvas, None, &printer)?;
        }
        Commands::Polygon(args) => {
            draw::run(args.into(), canvas, None, &printer)?;
        }
        Commands::Bitmap(args) => {
            draw::run(Request::from(&args), canvas, args.bitmaps.as_deref(), &printer)?;
        }
        Commands::Clear(args) => {
            draw::run(args.into(), canvas, None, &printer)?;
        }
        Commands::Palette(args) => vgadraw::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => vgadraw::cli::completions::run(args)?,
    }

    Ok(())
}
