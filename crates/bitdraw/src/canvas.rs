//! The [`Canvas`] draw sink and the [`BitmapShader`] tiling pattern.
//!
//! Compositing is left to the host: a canvas receives fully resolved
//! geometry and render attributes. [`RecordingCanvas`] keeps the calls
//! instead of drawing them.

use std::fmt;
use std::rc::Rc;

use bitdraw_core::{Density, Paint, Rect, TileMode};

use crate::image::ImageHandle;

// ---------------------------------------------------------------------------
// BitmapShader
// ---------------------------------------------------------------------------

/// An image repeated over a region according to per-axis tile modes.
///
/// The pattern is anchored at the canvas origin, not at the filled rect.
pub struct BitmapShader<I: ?Sized> {
    image: Rc<I>,
    tile_x: TileMode,
    tile_y: TileMode,
}

impl<I: ImageHandle + ?Sized> BitmapShader<I> {
    /// Build a shader. A `None` axis is tiled with [`TileMode::Clamp`].
    pub fn new(image: Rc<I>, tile_x: TileMode, tile_y: TileMode) -> Self {
        Self {
            image,
            tile_x: tile_x.or_clamp(),
            tile_y: tile_y.or_clamp(),
        }
    }

    /// The pattern image.
    #[inline]
    pub fn image(&self) -> &I {
        &self.image
    }

    #[inline]
    pub fn tile_x(&self) -> TileMode {
        self.tile_x
    }

    #[inline]
    pub fn tile_y(&self) -> TileMode {
        self.tile_y
    }
}

impl<I: ?Sized> Clone for BitmapShader<I> {
    fn clone(&self) -> Self {
        Self {
            image: Rc::clone(&self.image),
            tile_x: self.tile_x,
            tile_y: self.tile_y,
        }
    }
}

impl<I: ?Sized> fmt::Debug for BitmapShader<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitmapShader")
            .field("tile_x", &self.tile_x)
            .field("tile_y", &self.tile_y)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A render target provided by the host toolkit.
pub trait Canvas<I: ImageHandle + ?Sized> {
    /// Density of the target surface; [`Density::NONE`] when unknown.
    fn density(&self) -> Density {
        Density::NONE
    }

    /// Draw `src` of `image` (the whole image when `None`) scaled into `dst`.
    fn draw_image(&mut self, image: &I, src: Option<Rect>, dst: Rect, paint: &Paint);

    /// Fill `dst` with the shader's pattern.
    fn draw_rect(&mut self, dst: Rect, shader: &BitmapShader<I>, paint: &Paint);
}

// ---------------------------------------------------------------------------
// RecordingCanvas
// ---------------------------------------------------------------------------

/// One call received by a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Image {
        image_size: (i32, i32),
        src: Option<Rect>,
        dst: Rect,
        paint: Paint,
    },
    Rect {
        dst: Rect,
        tile_x: TileMode,
        tile_y: TileMode,
        paint: Paint,
    },
}

/// A canvas that records every call it receives.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    pub density: Density,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// An empty recorder reporting [`Density::NONE`].
    pub fn new() -> Self {
        Self {
            density: Density::NONE,
            calls: Vec::new(),
        }
    }

    /// An empty recorder reporting `density`.
    pub fn with_density(density: Density) -> Self {
        Self {
            density,
            calls: Vec::new(),
        }
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ImageHandle + ?Sized> Canvas<I> for RecordingCanvas {
    fn density(&self) -> Density {
        self.density
    }

    fn draw_image(&mut self, image: &I, src: Option<Rect>, dst: Rect, paint: &Paint) {
        self.calls.push(DrawCall::Image {
            image_size: (image.width(), image.height()),
            src,
            dst,
            paint: *paint,
        });
    }

    fn draw_rect(&mut self, dst: Rect, shader: &BitmapShader<I>, paint: &Paint) {
        self.calls.push(DrawCall::Rect {
            dst,
            tile_x: shader.tile_x(),
            tile_y: shader.tile_y(),
            paint: *paint,
        });
    }
}
