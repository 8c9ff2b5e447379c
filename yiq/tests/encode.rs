use pretty_assertions::assert_eq;
use yiq::{encode_image, encode_to_vec, CodecOptions, PixelBuffer, Rgb};

#[test]
fn test_encoding_blank_image() {
  let source = PixelBuffer::filled(0, 0, Rgb::default());
  let mut dest = Vec::new();

  let result = encode_image(&source, &mut dest, &CodecOptions::default());

  assert!(result.is_ok());
  assert_eq!(dest, b"YIQ1\0\0\0\0\0\0\0\0DATA".to_vec());
}

#[test]
fn test_encoding_header_of_3x2_image() {
  let source = PixelBuffer::filled(3, 2, Rgb::new(12, 34, 56));
  let dest = encode_to_vec(&source, &CodecOptions::default()).expect("Failed to encode image");

  assert_eq!(&dest[0..4], b"YIQ1");
  assert_eq!(&dest[4..8], &[0x03, 0x00, 0x00, 0x00]);
  assert_eq!(&dest[8..12], &[0x02, 0x00, 0x00, 0x00]);
  assert_eq!(&dest[12..16], b"DATA");
  assert_eq!(dest.len(), 16 + 18);
}

#[test]
fn test_encoding_white_pixel() {
  let source = PixelBuffer::filled(1, 1, Rgb::new(255, 255, 255));
  let dest = encode_to_vec(&source, &CodecOptions::default()).expect("Failed to encode image");

  assert_eq!(dest[16..].to_vec(), vec![100, 60, 52]);
}

#[test]
fn test_encoding_primaries() {
  let pixels = vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];
  let source = PixelBuffer::new(3, 1, pixels).expect("Failed to build buffer");
  let dest = encode_to_vec(&source, &CodecOptions::default()).expect("Failed to encode image");

  assert_eq!(
    dest[16..].to_vec(),
    vec![
      30, 119, 74, // red
      59, 32, 0, // green
      11, 27, 83, // blue
    ]
  );
}

#[test]
fn test_encoding_large_image_length() {
  let pixels = (0..200u32 * 150)
    .map(|n| Rgb::new(n as u8, (n >> 3) as u8, (n >> 6) as u8))
    .collect();
  let source = PixelBuffer::new(200, 150, pixels).expect("Failed to build buffer");
  let dest = encode_to_vec(&source, &CodecOptions::default()).expect("Failed to encode image");

  assert_eq!(dest.len(), 16 + 200 * 150 * 3);
}
