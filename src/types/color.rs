//! Palette colours for the 8-bit VGA surface.
//!
//! Palette indices use 3-3-2 RGB packing (`RRRGGGBB`). Only the named
//! entries below are legal for shape drawing; bitmaps may carry any byte.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::DrawError;

/// A recognized palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0x00,
    Blue = 0x03,
    Green = 0x1C,
    Red = 0xE0,
    White = 0xFF,
    Cyan = 0x1F,
    Magenta = 0xE3,
    Yellow = 0xFC,
    LightBlue = 0x4B,
    LightGreen = 0x5D,
    LightRed = 0xE9,
    LightCyan = 0x7F,
    LightMagenta = 0xEF,
    Brown = 0x88,
    Gray = 0x92,
    DarkGray = 0x49,
}

impl Color {
    /// Every recognized entry, base colours first.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::White,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightRed,
        Color::LightCyan,
        Color::LightMagenta,
        Color::Brown,
        Color::Gray,
        Color::DarkGray,
    ];

    /// The palette index written to the surface.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Canonical kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::White => "white",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::LightBlue => "light-blue",
            Color::LightGreen => "light-green",
            Color::LightRed => "light-red",
            Color::LightCyan => "light-cyan",
            Color::LightMagenta => "light-magenta",
            Color::Brown => "brown",
            Color::Gray => "gray",
            Color::DarkGray => "dark-gray",
        }
    }

    /// Look up a palette entry by its index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.index() == index)
    }

    /// Look up a palette entry by name.
    ///
    /// Accepts English names in any case with `-`, `_` or no separator
    /// (`light-cyan`, `LIGHT_CYAN`, `lightcyan`) and the Dutch names of the
    /// legacy command set (`rood`, `geel`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let colour = match key.as_str() {
            "black" | "zwart" => Color::Black,
            "blue" | "blauw" => Color::Blue,
            "green" | "groen" => Color::Green,
            "red" | "rood" => Color::Red,
            "white" | "wit" => Color::White,
            // legacy scripts use "lichtcyaan" for plain cyan
            "cyan" | "cyaan" | "lichtcyaan" => Color::Cyan,
            "magenta" => Color::Magenta,
            "yellow" | "geel" => Color::Yellow,
            "lightblue" | "lichtblauw" => Color::LightBlue,
            "lightgreen" | "lichtgroen" => Color::LightGreen,
            "lightred" | "lichtrood" => Color::LightRed,
            "lightcyan" => Color::LightCyan,
            "lightmagenta" | "lichtmagenta" => Color::LightMagenta,
            "brown" | "bruin" => Color::Brown,
            "gray" | "grey" | "grijs" => Color::Gray,
            "darkgray" | "darkgrey" | "donkergrijs" => Color::DarkGray,
            _ => return None,
        };
        Some(colour)
    }

    /// Expand to 8-bit RGBA for host-side preview.
    pub fn rgba(self) -> [u8; 4] {
        index_to_rgba(self.index())
    }
}

/// Expand any 3-3-2 palette index to opaque 8-bit RGBA.
pub fn index_to_rgba(index: u8) -> [u8; 4] {
    let r = (index >> 5) & 0x07;
    let g = (index >> 2) & 0x07;
    let b = index & 0x03;
    [
        (r as u16 * 255 / 7) as u8,
        (g as u16 * 255 / 7) as u8,
        (b as u16 * 255 / 3) as u8,
        255,
    ]
}

impl From<Color> for u8 {
    fn from(colour: Color) -> Self {
        colour.index()
    }
}

impl TryFrom<i32> for Color {
    type Error = DrawError;

    fn try_from(value: i32) -> Result<Self, DrawError> {
        u8::try_from(value)
            .ok()
            .and_then(Color::from_index)
            .ok_or(DrawError::ColorInvalid)
    }
}

impl FromStr for Color {
    type Err = DrawError;

    /// Parse a name or a numeric palette index (decimal or `0x` hex).
    fn from_str(s: &str) -> Result<Self, DrawError> {
        if let Some(colour) = Self::from_name(s) {
            return Ok(colour);
        }

        let s = s.trim();
        let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => i32::from_str_radix(hex, 16),
            None => s.parse::<i32>(),
        };

        value
            .map_err(|_| DrawError::ColorInvalid)
            .and_then(Color::try_from)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(i32),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Index(value) => Color::try_from(value).map_err(serde::de::Error::custom),
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
