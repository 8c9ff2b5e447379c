use std::io;

use rayon::prelude::*;

use crate::error::Error;
use crate::meta::{ImageMeta, YIQ1_BYTES_PER_PIXEL, YIQ1_DATA_MARKER, YIQ1_HEADER_LEN, YIQ1_MAGIC};
use crate::pixel::PixelBuffer;
use crate::sample::{CodecOptions, YiqSample};

/// Encodes a `PixelBuffer` into a YIQ1 image and writes it to `writer`.
///
/// The header is written first, followed by one quantized (Y, I, Q) triple
/// per pixel in row-major order. Pixels are transformed in parallel, one row
/// per task, but the payload is always assembled in row-major order before
/// anything is written.
pub fn encode_image<W: io::Write>(
  buffer: &PixelBuffer,
  mut writer: W,
  options: &CodecOptions,
) -> Result<(), Error> {
  let meta = ImageMeta { width: buffer.width(), height: buffer.height() };

  encode_header(&meta, &mut writer)?;
  encode_payload(buffer, &mut writer, options)?;
  writer.flush()?;

  Ok(())
}

/// Encodes a `PixelBuffer` into an in-memory YIQ1 image.
pub fn encode_to_vec(buffer: &PixelBuffer, options: &CodecOptions) -> Result<Vec<u8>, Error> {
  let capacity = YIQ1_HEADER_LEN + buffer.pixels().len() * YIQ1_BYTES_PER_PIXEL;
  let mut dest = Vec::with_capacity(capacity);

  encode_image(buffer, &mut dest, options)?;

  Ok(dest)
}

/// Writes the 16 byte YIQ1 header for `meta`.
pub fn encode_header<W: io::Write>(meta: &ImageMeta, mut writer: W) -> Result<(), Error> {
  writer.write_all(YIQ1_MAGIC)?;
  writer.write_all(&meta.width.to_le_bytes())?;
  writer.write_all(&meta.height.to_le_bytes())?;
  writer.write_all(YIQ1_DATA_MARKER)?;
  Ok(())
}

/// Writes the quantized pixel payload that follows the header.
pub fn encode_payload<W: io::Write>(
  buffer: &PixelBuffer,
  mut writer: W,
  options: &CodecOptions,
) -> Result<(), Error> {
  // `par_chunks` panics on a zero chunk size; a zero width means no pixels.
  let row_len = (buffer.width() as usize).max(1);

  let payload: Vec<u8> = buffer
    .pixels()
    .par_chunks(row_len)
    .flat_map_iter(|row| {
      row
        .iter()
        .flat_map(move |pixel| YiqSample::from_rgb(*pixel, options).to_bytes())
    })
    .collect();

  writer.write_all(&payload)?;
  Ok(())
}
