//! **bitdraw-raster**: a software backend for bitdraw.
//!
//! [`RasterImage`] holds decoded RGBA pixels, [`RasterCanvas`] composites
//! bitdraw's draw calls into an RGBA buffer, and the [`decode`] helpers load
//! images through the `image` crate.

pub mod bitmap;
pub mod canvas;
pub mod decode;

pub use bitmap::RasterImage;
pub use canvas::RasterCanvas;
pub use decode::{
    DecodeError, decode_bytes, decode_file, decode_reader, drawable_from_file, drawable_from_reader,
};
