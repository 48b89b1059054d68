//! Preview configuration (vgadraw.yaml).
//!
//! Every key is optional. Command-line flags override what the file sets.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, VgaError};
use crate::types::{Color, Surface};

/// Name of the configuration file picked up from the working directory.
pub const CONFIG_FILE: &str = "vgadraw.yaml";

/// Preview configuration loaded from vgadraw.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Addressable surface extent.
    pub surface: Surface,

    /// Path of the rendered PNG.
    pub output: PathBuf,

    /// Integer upscale factor for the PNG.
    pub scale: Option<u32>,

    /// Colour the canvas is cleared to before drawing.
    pub background: Option<Color>,

    /// Bitmap registry file for `bitmap` draws.
    pub bitmaps: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("vgadraw.png")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: Surface::VGA,
            output: default_output(),
            scale: None,
            background: None,
            bitmaps: None,
        }
    }
}

impl Config {
    /// Load a configuration file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VgaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let Some(dir) = path.parent() {
            config.rebase(dir);
        }
        Ok(config)
    }

    /// Load `path` if given, else vgadraw.yaml from `dir` if present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a configuration from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        // an empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| VgaError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })?;

        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.surface.width <= 0 || self.surface.height <= 0 {
            return Err(VgaError::Parse {
                message: format!("Invalid surface {}", self.surface),
                help: Some("Surface width and height must be positive".to_string()),
            });
        }

        if self.scale == Some(0) {
            return Err(VgaError::Parse {
                message: "Invalid scale 0".to_string(),
                help: Some("Scale must be at least 1".to_string()),
            });
        }

        Ok(())
    }

    fn rebase(&mut self, dir: &Path) {
        if self.output.is_relative() {
            self.output = dir.join(&self.output);
        }
        if let Some(bitmaps) = self.bitmaps.as_mut() {
            if bitmaps.is_relative() {
                *bitmaps = dir.join(&*bitmaps);
            }
        }
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1)
    }

    /// Get the effective background colour.
    pub fn effective_background(&self) -> Color {
        self.background.unwrap_or(Color::Black)
    }
}
