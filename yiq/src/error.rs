use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An enumeration of all error values this crate may produce.
#[derive(Debug, Error)]
pub enum Error {
  /// The source does not start with a YIQ1 magic tag or data marker. Only
  /// used while probing a source; the format detector recovers from it by
  /// trying the next decoder.
  #[error("source is not a YIQ1 image")]
  NotThisFormat,
  /// The YIQ1 header matched, but the payload length does not match the
  /// dimensions declared in the header.
  #[error("truncated or corrupt YIQ1 data: expected {expected} payload bytes, found {actual}")]
  TruncatedOrCorruptData {
    expected: u64,
    actual: u64,
  },
  /// Neither the YIQ1 decoder nor the external raster decoder could
  /// interpret the source.
  #[error("unrecognized image source: {reason}")]
  UnrecognizedSource {
    reason: String,
  },
  /// An unknown colorspace profile name was requested.
  #[error("unsupported colorspace profile `{0}`, expected SMPTE-C or NTSC-1953")]
  UnsupportedProfile(String),
  /// An unknown output format name was requested.
  #[error("unsupported output format `{0}`")]
  UnsupportedFormat(String),
  /// The destination could not be opened or created for writing.
  #[error("cannot write to {}: {source}", .path.display())]
  SinkUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  /// A pixel buffer was built from pixel data that does not cover exactly
  /// `width * height` pixels.
  #[error("pixel data of length {len} does not match a {width}x{height} image")]
  InvalidDimensions {
    width: u32,
    height: u32,
    len: usize,
  },
  /// The external raster encoder failed.
  #[error("failed to encode image: {0}")]
  Encode(#[from] image::ImageError),
  /// Any `std::io::Error` raised while reading a source or writing to an
  /// already opened destination.
  #[error(transparent)]
  Io(#[from] io::Error),
}

impl Error {
  /// Whether this error is the soft "not a YIQ1 stream" probing signal.
  pub fn is_not_this_format(&self) -> bool {
    matches!(self, Error::NotThisFormat)
  }
}
