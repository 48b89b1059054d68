//! List the recognized palette colours.

use clap::Args;
use serde::Serialize;

use crate::error::{Result, VgaError};
use crate::output::{plural, Printer};
use crate::types::Color;

/// List the recognized palette colours
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PaletteEntry {
    name: &'static str,
    index: u8,
    hex: String,
    rgba: [u8; 4],
}

impl From<Color> for PaletteEntry {
    fn from(color: Color) -> Self {
        let rgba = color.rgba();
        Self {
            name: color.name(),
            index: color.index(),
            hex: format!("#{:02x}{:02x}{:02x}", rgba[0], rgba[1], rgba[2]),
            rgba,
        }
    }
}

fn entries() -> Vec<PaletteEntry> {
    Color::ALL.iter().copied().map(PaletteEntry::from).collect()
}

/// Render the palette listing printed to stdout.
fn render(json: bool) -> Result<String> {
    let entries = entries();

    if json {
        return serde_json::to_string_pretty(&entries).map_err(|e| VgaError::Render {
            message: format!("Failed to serialize palette: {}", e),
            help: None,
        });
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|e| format!("0x{:02X}  {:<14} {}", e.index, e.name, e.hex))
        .collect();
    Ok(lines.join("\n"))
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    println!("{}", render(args.json)?);
    printer.status("Listed", &plural(Color::ALL.len(), "colour", "colours"));
    Ok(())
}
