//! **bitdraw**: bitmap drawables that are stretched, aligned or tiled
//! inside their bounds.
//!
//! A [`BitmapDrawable`] wraps an image supplied by the host toolkit (any
//! [`ImageHandle`]), scales its size to a target [`Density`], places it with
//! a [`Gravity`] or repeats it with per-axis [`TileMode`]s, and hands the
//! resolved geometry to a host [`Canvas`]. Configuration is held in a
//! [`BitmapState`] shared between drawables until one of them changes it.
//!
//! Everything here is single-threaded: states and images are held through
//! `Rc`.

pub mod canvas;
pub mod dirty;
pub mod drawable;
pub mod image;
pub mod state;

#[cfg(test)]
mod test_image;

pub use bitdraw_core::*;
pub use canvas::{BitmapShader, Canvas, DrawCall, RecordingCanvas};
pub use dirty::DirtyState;
pub use drawable::{BitmapDrawable, Drawable, Opacity};
pub use image::{DensityMetrics, ImageHandle};
pub use state::{BitmapState, StateConfig, StateRef};
