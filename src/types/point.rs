//! Device pixel coordinates and surface extents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VgaError};

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = VgaError;

    /// Parse `"x,y"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VgaError::Parse {
            message: format!("Invalid point: {}", s),
            help: Some("Use x,y with integer coordinates, e.g. 10,20".to_string()),
        };

        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// The addressable extent of a pixel surface.
///
/// Valid coordinates are `0..width` by `0..height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: i32,
    pub height: i32,
}

impl Surface {
    /// 320x240, the mode of the VGA controller.
    pub const VGA: Self = Self::new(320, 240);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if a point is addressable.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Check if the inclusive box `[min, max]` is fully addressable.
    pub fn contains_box(&self, min: Point, max: Point) -> bool {
        min.x <= max.x && min.y <= max.y && self.contains(min) && self.contains(max)
    }

    /// Number of pixels on the surface.
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::VGA
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
