//! Bitmap registry.
//!
//! The registry maps integer ids to bitmaps. It is owned by the caller and
//! passed by reference into bitmap draws; the engine never keeps one.
//!
//! # Example
//!
//! ```
//! use vgadraw::registry::BitmapRegistry;
//! use vgadraw::types::Bitmap;
//!
//! let mut registry = BitmapRegistry::new();
//! registry.insert(7, Bitmap::solid(4, 4, 0xE0).unwrap());
//! assert!(registry.resolve(7).is_ok());
//! assert_eq!(registry.resolve(8).unwrap_err().code(), 606);
//! ```

mod file;

use std::collections::BTreeMap;

use crate::error::DrawError;
use crate::types::Bitmap;

pub use file::{BitmapEntry, BitmapFile};

/// Bitmap id as used on the wire.
pub type BitmapId = u32;

/// Caller-owned storage for bitmaps, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct BitmapRegistry {
    bitmaps: BTreeMap<BitmapId, Bitmap>,
}

impl BitmapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bitmap, returning the one it replaced.
    pub fn insert(&mut self, id: BitmapId, bitmap: Bitmap) -> Option<Bitmap> {
        self.bitmaps.insert(id, bitmap)
    }

    /// Get a bitmap by id.
    pub fn get(&self, id: BitmapId) -> Option<&Bitmap> {
        self.bitmaps.get(&id)
    }

    /// Get a bitmap by id, failing with `BitmapInvalid` if it is missing.
    pub fn resolve(&self, id: BitmapId) -> Result<&Bitmap, DrawError> {
        self.get(id).ok_or(DrawError::BitmapInvalid)
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = BitmapId> + '_ {
        self.bitmaps.keys().copied()
    }

    /// Number of bitmaps.
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}

impl FromIterator<(BitmapId, Bitmap)> for BitmapRegistry {
    fn from_iter<I: IntoIterator<Item = (BitmapId, Bitmap)>>(iter: I) -> Self {
        Self {
            bitmaps: iter.into_iter().collect(),
        }
    }
}
