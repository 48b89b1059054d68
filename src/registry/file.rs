//! Bitmap files (YAML).
//!
//! ```yaml
//! bitmaps:
//!   - id: 0
//!     width: 2
//!     height: 2
//!     pixels: [0, 255, 255, 0]
//!   - id: 1
//!     packed: [1, 2, 224, 28]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VgaError};
use crate::types::Bitmap;

use super::{BitmapId, BitmapRegistry};

/// On-disk bitmap collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BitmapFile {
    #[serde(default)]
    pub bitmaps: Vec<BitmapEntry>,
}

/// A single bitmap definition.
///
/// Either `width`/`height`/`pixels` or the legacy `packed` layout
/// (`[height, width, pixel...]`) must be given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BitmapEntry {
    pub id: BitmapId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pixels: Vec<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packed: Option<Vec<u8>>,
}

impl BitmapEntry {
    /// Decode the entry into a bitmap.
    pub fn to_bitmap(&self) -> Result<Bitmap> {
        if let Some(packed) = &self.packed {
            return Bitmap::from_packed(packed).map_err(|e| self.context(e));
        }

        match (self.width, self.height) {
            (Some(width), Some(height)) => {
                Bitmap::new(width, height, self.pixels.clone()).map_err(|e| self.context(e))
            }
            _ => Err(VgaError::Parse {
                message: format!("{} has no dimensions", self.label()),
                help: Some("Set width and height, or use the packed layout".to_string()),
            }),
        }
    }

    fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("Bitmap {} ('{}')", self.id, name),
            None => format!("Bitmap {}", self.id),
        }
    }

    fn context(&self, err: VgaError) -> VgaError {
        match err {
            VgaError::Parse { message, help } => VgaError::Parse {
                message: format!("{}: {}", self.label(), message),
                help,
            },
            other => other,
        }
    }
}

impl BitmapFile {
    /// Load a bitmap file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VgaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read bitmap file: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a bitmap file from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| VgaError::Parse {
            message: format!("Invalid bitmap file: {}", e),
            help: Some("Expected a top-level `bitmaps:` list".to_string()),
        })
    }

    /// Decode every entry into a registry. Duplicate ids are rejected.
    pub fn into_registry(self) -> Result<BitmapRegistry> {
        let mut seen = HashSet::new();
        let mut registry = BitmapRegistry::new();

        for entry in &self.bitmaps {
            if !seen.insert(entry.id) {
                return Err(VgaError::Parse {
                    message: format!("Duplicate bitmap id {}", entry.id),
                    help: Some("Each bitmap needs a unique id".to_string()),
                });
            }
            registry.insert(entry.id, entry.to_bitmap()?);
        }

        Ok(registry)
    }
}

impl BitmapRegistry {
    /// Load a registry from a YAML bitmap file.
    pub fn load(path: &Path) -> Result<Self> {
        BitmapFile::load(path)?.into_registry()
    }
}
