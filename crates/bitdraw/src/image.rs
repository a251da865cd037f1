//! Host-side collaborators: decoded images and density metrics.

use bitdraw_core::Density;

/// A decoded raster image owned by the host toolkit.
///
/// bitdraw only reads its metadata; pixel access is the canvas' business.
pub trait ImageHandle {
    /// Width in pixels, as stored.
    fn width(&self) -> i32;

    /// Height in pixels, as stored.
    fn height(&self) -> i32;

    /// Density the pixels were authored for. [`Density::NONE`] disables
    /// scaling.
    fn density(&self) -> Density;

    /// Whether any pixel may be less than fully opaque.
    fn has_alpha(&self) -> bool;

    /// Width scaled from the image's density to `target`.
    fn scaled_width(&self, target: Density) -> i32 {
        Density::scale(self.width(), self.density(), target)
    }

    /// Height scaled from the image's density to `target`.
    fn scaled_height(&self, target: Density) -> i32 {
        Density::scale(self.height(), self.density(), target)
    }
}

/// Source of the display density a drawable renders at.
pub trait DensityMetrics {
    /// Raw display density in dpi.
    fn density_dpi(&self) -> i32;
}

impl DensityMetrics for Density {
    #[inline]
    fn density_dpi(&self) -> i32 {
        self.0 as i32
    }
}
