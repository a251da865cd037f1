//! Decoding images from files, readers and memory.
//!
//! The `decode_*` functions report failures. The `drawable_from_*` helpers
//! log them and return a drawable without an image, which draws nothing.

use std::fmt;
use std::io::{self, BufRead, Cursor, Seek};
use std::path::Path;
use std::rc::Rc;

use bitdraw::{BitmapDrawable, Density, DensityMetrics};
use image::ImageReader;

use crate::bitmap::RasterImage;

/// Error type for image decoding.
#[derive(Debug)]
pub enum DecodeError {
    /// The source could not be opened or read.
    Io(io::Error),
    /// The data is not an image in a supported format.
    Image(image::ImageError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(e) => write!(f, "cannot read image: {e}"),
            DecodeError::Image(e) => write!(f, "cannot decode image: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            DecodeError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Io(e)
    }
}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        DecodeError::Image(e)
    }
}

/// Decode the image at `path`, tagging it with `density`.
pub fn decode_file(
    path: impl AsRef<Path>,
    density: Density,
) -> Result<RasterImage, DecodeError> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(RasterImage::from_dynamic(image, density))
}

/// Decode an image from a seekable reader.
pub fn decode_reader<R: BufRead + Seek>(
    reader: R,
    density: Density,
) -> Result<RasterImage, DecodeError> {
    let image = ImageReader::new(reader).with_guessed_format()?.decode()?;
    Ok(RasterImage::from_dynamic(image, density))
}

/// Decode an image held in memory.
pub fn decode_bytes(bytes: &[u8], density: Density) -> Result<RasterImage, DecodeError> {
    decode_reader(Cursor::new(bytes), density)
}

fn drawable_from(
    decoded: Result<RasterImage, DecodeError>,
    source: &dyn fmt::Display,
    metrics: Option<&dyn DensityMetrics>,
) -> BitmapDrawable<RasterImage> {
    let image = match decoded {
        Ok(image) => Some(Rc::new(image)),
        Err(e) => {
            log::warn!("bitmap drawable cannot decode {source}: {e}");
            None
        }
    };
    match metrics {
        Some(m) => BitmapDrawable::with_metrics(image, m),
        None => BitmapDrawable::new(image),
    }
}

/// A drawable for the image file at `path`, decoded at the default density.
///
/// Decoding failures are logged and produce an empty drawable.
pub fn drawable_from_file(
    path: impl AsRef<Path>,
    metrics: Option<&dyn DensityMetrics>,
) -> BitmapDrawable<RasterImage> {
    let path = path.as_ref();
    drawable_from(decode_file(path, Density::DEFAULT), &path.display(), metrics)
}

/// A drawable for the image read from `reader`, decoded at the default
/// density.
///
/// Decoding failures are logged and produce an empty drawable.
pub fn drawable_from_reader<R: BufRead + Seek>(
    reader: R,
    metrics: Option<&dyn DensityMetrics>,
) -> BitmapDrawable<RasterImage> {
    drawable_from(decode_reader(reader, Density::DEFAULT), &"stream", metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitdraw::Drawable;

    #[test]
    fn garbage_is_an_image_error() {
        let err = decode_bytes(b"definitely not a png", Density::DEFAULT).unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
        assert!(err.to_string().starts_with("cannot decode image"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = decode_file("/nonexistent/bitdraw/none.png", Density::DEFAULT).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn failed_decode_yields_empty_drawable() {
        let d = drawable_from_file("/nonexistent/bitdraw/none.png", None);
        assert!(d.image().is_none());
        assert_eq!(d.intrinsic_width(), -1);
        let d = drawable_from_reader(Cursor::new(b"junk".to_vec()), Some(&Density::HIGH));
        assert!(d.image().is_none());
        assert_eq!(d.target_density(), Density::HIGH);
    }
}
