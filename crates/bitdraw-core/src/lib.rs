//! **bitdraw-core**: value types for placing bitmaps inside rectangles.
//!
//! This crate holds everything that does not depend on an image or a
//! canvas: integer geometry, the [`Gravity`] placement engine, per-axis
//! [`TileMode`]s, [`Density`] scaling and the [`Paint`] render attributes.

pub mod config;
pub mod density;
pub mod geom;
pub mod gravity;
pub mod style;
pub mod tile;

pub use config::ConfigMask;
pub use density::Density;
pub use geom::{Point, Rect};
pub use gravity::{AxisAlign, Gravity};
pub use style::{Color, ColorFilter, Paint, PaintFlags};
pub use tile::TileMode;
