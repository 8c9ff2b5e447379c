use pretty_assertions::assert_eq;
use yiq::{
  decode_image, decode_slice, encode_to_vec, CodecOptions, ConversionProfile, Error, PixelBuffer,
  Quantization, Rgb,
};

// Worst case per-channel error of a YIQ1 round trip over the whole RGB cube
// is 6 under SMPTE-C and 5 under NTSC-1953.
const MAX_ROUND_TRIP_ERROR: u8 = 8;

fn round_trip(source: &PixelBuffer, options: &CodecOptions) -> PixelBuffer {
  let encoded = encode_to_vec(source, options).expect("Failed to encode image");
  decode_slice(&encoded, options).expect("Failed to decode image")
}

fn max_channel_error(a: &PixelBuffer, b: &PixelBuffer) -> u8 {
  a.pixels()
    .iter()
    .zip(b.pixels())
    .map(|(p, q)| p.r.abs_diff(q.r).max(p.g.abs_diff(q.g)).max(p.b.abs_diff(q.b)))
    .max()
    .unwrap_or(0)
}

fn color_cube(step: usize) -> PixelBuffer {
  let levels: Vec<u8> = (0..=255).step_by(step).map(|v| v as u8).collect();
  let mut pixels = Vec::new();

  for &r in &levels {
    for &g in &levels {
      for &b in &levels {
        pixels.push(Rgb::new(r, g, b));
      }
    }
  }

  let width = levels.len() as u32;
  PixelBuffer::new(width, width * width, pixels).expect("Failed to build buffer")
}

#[test]
fn test_decoding_blank_image() {
  let source = b"YIQ1\0\0\0\0\0\0\0\0DATA";
  let dest = decode_image(source.as_slice(), &CodecOptions::default()).expect("Failed to decode image");

  assert_eq!(dest.dimensions(), (0, 0));
  assert!(dest.pixels().is_empty());
}

#[test]
fn test_decoding_incomplete_image() {
  let source = PixelBuffer::filled(4, 4, Rgb::new(90, 90, 90));
  let mut encoded = encode_to_vec(&source, &CodecOptions::default()).expect("Failed to encode image");
  encoded.truncate(encoded.len() - 3);

  match decode_slice(&encoded, &CodecOptions::default()) {
    Err(Error::TruncatedOrCorruptData { expected: 48, actual: 45 }) => {}
    other => panic!("Expected TruncatedOrCorruptData, got {:?}", other),
  }
}

#[test]
fn test_decoding_foreign_bytes() {
  let source = b"\x89PNG\r\n\x1a\n rest of a png";
  let result = decode_slice(source, &CodecOptions::default());

  assert!(matches!(result, Err(Error::NotThisFormat)));
}

#[test]
fn test_white_round_trip() {
  let source = PixelBuffer::filled(1, 1, Rgb::new(255, 255, 255));
  let dest = round_trip(&source, &CodecOptions::default());

  assert!(max_channel_error(&source, &dest) <= 2);
}

#[test]
fn test_gray_round_trip() {
  let pixels = (0..=255u8).map(|v| Rgb::new(v, v, v)).collect();
  let source = PixelBuffer::new(256, 1, pixels).expect("Failed to build buffer");

  for profile in ConversionProfile::ALL {
    let options = CodecOptions { profile, ..CodecOptions::default() };
    let dest = round_trip(&source, &options);

    assert!(max_channel_error(&source, &dest) <= 4, "{}", profile);
  }
}

#[test]
fn test_color_cube_round_trip() {
  let source = color_cube(15);

  for profile in ConversionProfile::ALL {
    for quantization in [Quantization::Clamp, Quantization::Wrap] {
      let options = CodecOptions { profile, quantization };
      let dest = round_trip(&source, &options);

      assert_eq!(dest.dimensions(), source.dimensions());
      assert!(max_channel_error(&source, &dest) <= MAX_ROUND_TRIP_ERROR, "{}", profile);
    }
  }
}
