//! Checked bitmap blits against a caller-owned registry.

use crate::error::DrawError;
use crate::raster::{blit, PixelSink};
use crate::registry::{BitmapId, BitmapRegistry};
use crate::types::{Bitmap, Point, Surface};
use crate::validation::{check_box, far_corner};

/// Copy registered bitmap `id` with its upper-left corner at `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapBlit {
    pub id: i32,
    pub dest: Point,
}

impl BitmapBlit {
    pub const fn new(id: i32, dest: Point) -> Self {
        Self { id, dest }
    }

    /// Checks, in order: id resolves, destination box on-surface.
    ///
    /// An empty bitmap has no extent and always passes the bounds check.
    pub fn validate<'r>(
        &self,
        registry: &'r BitmapRegistry,
        surface: &Surface,
    ) -> Result<&'r Bitmap, DrawError> {
        let id = BitmapId::try_from(self.id).map_err(|_| DrawError::BitmapInvalid)?;
        let bitmap = registry.resolve(id)?;

        if !bitmap.is_empty() {
            let width = i32::try_from(bitmap.width()).map_err(|_| DrawError::OutOfBounds)?;
            let height = i32::try_from(bitmap.height()).map_err(|_| DrawError::OutOfBounds)?;
            check_box(surface, self.dest, far_corner(self.dest, width, height))?;
        }

        Ok(bitmap)
    }

    pub fn draw<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
        surface: &Surface,
        registry: &BitmapRegistry,
    ) -> Result<(), DrawError> {
        let bitmap = self.validate(registry, surface)?;
        blit(sink, bitmap, self.dest);
        Ok(())
    }
}
