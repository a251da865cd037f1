//! [`RasterImage`]: decoded RGBA pixels tagged with a density.

use bitdraw::{Density, ImageHandle};
use image::{DynamicImage, RgbaImage};

/// An RGBA image with the density it was authored for.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pixels: RgbaImage,
    density: Density,
    has_alpha: bool,
}

impl RasterImage {
    /// Wrap RGBA pixels. Transparency is detected by scanning the alpha
    /// channel.
    pub fn from_rgba(pixels: RgbaImage, density: Density) -> Self {
        let has_alpha = pixels.pixels().any(|p| p.0[3] < 0xFF);
        Self {
            pixels,
            density,
            has_alpha,
        }
    }

    /// Convert a decoded image. Transparency follows the source colour type.
    pub fn from_dynamic(image: DynamicImage, density: Density) -> Self {
        let has_alpha = image.color().has_alpha();
        Self {
            pixels: image.into_rgba8(),
            density,
            has_alpha,
        }
    }

    /// The pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Pixel at `(x, y)`, which must be inside the image.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        self.pixels.get_pixel(x as u32, y as u32).0
    }
}

impl ImageHandle for RasterImage {
    fn width(&self) -> i32 {
        self.pixels.width() as i32
    }

    fn height(&self) -> i32 {
        self.pixels.height() as i32
    }

    fn density(&self) -> Density {
        self.density
    }

    fn has_alpha(&self) -> bool {
        self.has_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn detects_alpha_by_scanning() {
        let mut px = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        assert!(!RasterImage::from_rgba(px.clone(), Density::DEFAULT).has_alpha());
        px.put_pixel(2, 1, Rgba([0, 0, 0, 254]));
        let img = RasterImage::from_rgba(px, Density::HIGH);
        assert!(img.has_alpha());
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.density(), Density::HIGH);
        assert_eq!(img.pixel(2, 1), [0, 0, 0, 254]);
    }

    #[test]
    fn dynamic_rgb_is_opaque() {
        let rgb = DynamicImage::new_rgb8(4, 4);
        assert!(!RasterImage::from_dynamic(rgb, Density::DEFAULT).has_alpha());
        let rgba = DynamicImage::new_rgba8(4, 4);
        assert!(RasterImage::from_dynamic(rgba, Density::DEFAULT).has_alpha());
    }
}
