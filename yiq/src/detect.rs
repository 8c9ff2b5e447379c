use image::{ColorType, ImageFormat};

use crate::decode::decode_slice;
use crate::error::Error;
use crate::pixel::PixelBuffer;
use crate::raster::{DecodedRaster, RasterCodec};
use crate::sample::CodecOptions;

/// Which decoder produced a [`Source`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceKind {
  Yiq1,
  External,
}

/// A decoded image together with the decoder that recognized it.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
  /// A YIQ1 stream, decoded back to RGB.
  Yiq1(PixelBuffer),
  /// Any format the external raster codec understood.
  External(DecodedRaster),
}

impl Source {
  pub fn kind(&self) -> SourceKind {
    match self {
      Source::Yiq1(_) => SourceKind::Yiq1,
      Source::External(_) => SourceKind::External,
    }
  }

  pub fn buffer(&self) -> &PixelBuffer {
    match self {
      Source::Yiq1(buffer) => buffer,
      Source::External(raster) => &raster.buffer,
    }
  }

  pub fn into_buffer(self) -> PixelBuffer {
    match self {
      Source::Yiq1(buffer) => buffer,
      Source::External(raster) => raster.buffer,
    }
  }

  /// The image's natural `(width, height)`.
  pub fn dimensions(&self) -> (u32, u32) {
    self.buffer().dimensions()
  }

  /// The external container format, if the source was not YIQ1.
  pub fn external_format(&self) -> Option<ImageFormat> {
    match self {
      Source::Yiq1(_) => None,
      Source::External(raster) => Some(raster.format),
    }
  }

  /// The color mode the source had before conversion to RGB. YIQ1 sources
  /// always decode to 8-bit RGB.
  pub fn color(&self) -> ColorType {
    match self {
      Source::Yiq1(_) => ColorType::Rgb8,
      Source::External(raster) => raster.color,
    }
  }
}

/// Interprets `bytes` as a YIQ1 stream first and, if it is not one, hands
/// them to `codec`.
///
/// Only `Error::NotThisFormat` falls through to the external decoder. A
/// stream that is recognizably YIQ1 but damaged fails immediately.
pub fn detect_source<C: RasterCodec + ?Sized>(
  bytes: &[u8],
  codec: &C,
  options: &CodecOptions,
) -> Result<Source, Error> {
  match decode_slice(bytes, options) {
    Ok(buffer) => return Ok(Source::Yiq1(buffer)),
    Err(Error::NotThisFormat) => {
      tracing::debug!(len = bytes.len(), "Source is not YIQ1, trying external decoder");
    }
    Err(e) => return Err(e),
  }

  match codec.decode(bytes) {
    Ok(raster) => Ok(Source::External(raster)),
    Err(e @ Error::UnrecognizedSource { .. }) => Err(e),
    Err(e) => Err(Error::UnrecognizedSource { reason: e.to_string() }),
  }
}
