pub const YIQ1_MAGIC: &[u8; 4] = b"YIQ1";
pub const YIQ1_DATA_MARKER: &[u8; 4] = b"DATA";
pub const YIQ1_HEADER_LEN: usize = 16;
pub const YIQ1_BYTES_PER_PIXEL: usize = 3;

/// Metadata describing a YIQ1 image, as stored in its header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageMeta {
  /// The image's width.
  pub width: u32,
  /// The image's height.
  pub height: u32,
}

impl ImageMeta {
  /// Returns the total number of pixels that make up the image.
  pub fn num_pixels(&self) -> u64 {
    self.width as u64 * self.height as u64
  }

  /// Returns the exact payload length in bytes that must follow the header,
  /// or `None` if it does not fit into a `usize` on this platform.
  pub fn payload_len(&self) -> Option<usize> {
    usize::try_from(self.num_pixels())
      .ok()?
      .checked_mul(YIQ1_BYTES_PER_PIXEL)
  }
}
