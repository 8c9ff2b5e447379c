use std::io;

use rayon::prelude::*;

use crate::error::Error;
use crate::meta::{ImageMeta, YIQ1_BYTES_PER_PIXEL, YIQ1_DATA_MARKER, YIQ1_HEADER_LEN, YIQ1_MAGIC};
use crate::pixel::{PixelBuffer, Rgb};
use crate::sample::{CodecOptions, YiqSample};

/// Decodes a YIQ1 encoded image into a `PixelBuffer`.
///
/// Returns `Error::NotThisFormat` when the source does not carry the YIQ1
/// magic tag and data marker, so callers can fall back to another decoder.
/// A source that does carry them must hold exactly `width * height * 3`
/// payload bytes, otherwise `Error::TruncatedOrCorruptData` is returned and
/// nothing is decoded.
pub fn decode_image<R: io::Read>(mut reader: R, options: &CodecOptions) -> Result<PixelBuffer, Error> {
  let meta = decode_header(&mut reader)?;

  let mut payload = Vec::new();
  reader.read_to_end(&mut payload)?;

  let actual = payload.len() as u64;
  let expected = meta.num_pixels() * YIQ1_BYTES_PER_PIXEL as u64;

  if meta.payload_len() != Some(payload.len()) {
    return Err(Error::TruncatedOrCorruptData { expected, actual });
  }

  let profile = options.profile;
  let row_len = (meta.width as usize).saturating_mul(YIQ1_BYTES_PER_PIXEL).max(YIQ1_BYTES_PER_PIXEL);

  let pixels: Vec<Rgb> = payload
    .par_chunks(row_len)
    .flat_map_iter(|row| {
      row
        .chunks_exact(YIQ1_BYTES_PER_PIXEL)
        .map(move |b| YiqSample::from_bytes([b[0], b[1], b[2]]).to_rgb(profile))
    })
    .collect();

  PixelBuffer::new(meta.width, meta.height, pixels)
}

/// Decodes a YIQ1 image held in memory.
pub fn decode_slice(bytes: &[u8], options: &CodecOptions) -> Result<PixelBuffer, Error> {
  decode_image(bytes, options)
}

/// Reads and validates the 16 byte YIQ1 header.
pub fn decode_header<R: io::Read>(mut reader: R) -> Result<ImageMeta, Error> {
  let mut magic = [0; 4];

  if read_fully(&mut reader, &mut magic)? < magic.len() || &magic != YIQ1_MAGIC {
    return Err(Error::NotThisFormat);
  }

  let mut rest = [0; YIQ1_HEADER_LEN - 4];
  let read = read_fully(&mut reader, &mut rest)?;

  if read < rest.len() {
    // The magic matched, so a short header is a damaged YIQ1 stream rather
    // than some other format.
    return Err(Error::TruncatedOrCorruptData {
      expected: YIQ1_HEADER_LEN as u64,
      actual: (magic.len() + read) as u64,
    });
  }

  if &rest[8..12] != YIQ1_DATA_MARKER {
    return Err(Error::NotThisFormat);
  }

  Ok(ImageMeta {
    width: u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]),
    height: u32::from_le_bytes([rest[4], rest[5], rest[6], rest[7]]),
  })
}

// Like `read_exact`, but reports how many bytes were read instead of failing
// on a short source.
fn read_fully<R: io::Read>(mut reader: R, buf: &mut [u8]) -> Result<usize, Error> {
  let mut filled = 0;

  while filled < buf.len() {
    match reader.read(&mut buf[filled..]) {
      Ok(0) => break,
      Ok(n) => filled += n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
      Err(e) => return Err(e.into()),
    }
  }

  Ok(filled)
}
