//! The external raster codec used for every format other than YIQ1.
//!
//! The pipeline only needs three things from it: decode arbitrary bytes into
//! RGB pixels, report the color mode the image had before that conversion,
//! and encode RGB pixels into a named format. [`ImageCodec`] provides them
//! with the `image` crate.

use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageFormat, RgbImage};

use crate::error::Error;
use crate::pixel::PixelBuffer;

/// An image decoded by a [`RasterCodec`], already converted to RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedRaster {
  pub buffer: PixelBuffer,
  /// The container format the bytes were recognized as.
  pub format: ImageFormat,
  /// The image's natural color mode, before conversion to 8-bit RGB.
  pub color: ColorType,
}

/// Decoder and encoder for generic raster formats.
pub trait RasterCodec {
  /// Decodes `bytes`, converting the pixels to 8-bit RGB. Any failure is
  /// reported as `Error::UnrecognizedSource`.
  fn decode(&self, bytes: &[u8]) -> Result<DecodedRaster, Error>;

  /// Encodes `buffer` into `format`, returning the complete file contents.
  fn encode(&self, buffer: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, Error>;
}

/// [`RasterCodec`] backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCodec;

impl RasterCodec for ImageCodec {
  fn decode(&self, bytes: &[u8]) -> Result<DecodedRaster, Error> {
    let unrecognized = |e: image::ImageError| Error::UnrecognizedSource { reason: e.to_string() };

    let format = image::guess_format(bytes).map_err(unrecognized)?;
    let image = image::load_from_memory_with_format(bytes, format).map_err(unrecognized)?;
    let color = image.color();

    tracing::debug!(?format, ?color, width = image.width(), height = image.height(), "Decoded raster image");

    let rgb = image.into_rgb8();
    let (width, height) = rgb.dimensions();
    let buffer = PixelBuffer::from_raw(width, height, rgb.as_raw())?;

    Ok(DecodedRaster { buffer, format, color })
  }

  fn encode(&self, buffer: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, Error> {
    let (width, height) = buffer.dimensions();
    let rgb = RgbImage::from_raw(width, height, buffer.to_raw()).ok_or(Error::InvalidDimensions {
      width,
      height,
      len: buffer.pixels().len(),
    })?;

    let mut dest = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(rgb).write_to(&mut dest, format)?;

    Ok(dest.into_inner())
  }
}

/// Resolves a raster format from a name such as `png` or `jpeg`.
pub fn format_from_name(name: &str) -> Option<ImageFormat> {
  ImageFormat::from_extension(name.trim().to_ascii_lowercase())
}

/// The file extension conventionally used for `format`.
pub fn primary_extension(format: ImageFormat) -> &'static str {
  format.extensions_str().first().copied().unwrap_or("img")
}
