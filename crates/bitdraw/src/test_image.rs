//! Metadata-only image for unit tests.

use bitdraw_core::Density;

use crate::image::ImageHandle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TestImage {
    pub width: i32,
    pub height: i32,
    pub density: Density,
    pub alpha: bool,
}

impl TestImage {
    pub fn opaque(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            density: Density::DEFAULT,
            alpha: false,
        }
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_alpha(mut self) -> Self {
        self.alpha = true;
        self
    }
}

impl ImageHandle for TestImage {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn density(&self) -> Density {
        self.density
    }

    fn has_alpha(&self) -> bool {
        self.alpha
    }
}
