use crate::error::Error;

/// A single 8-bit RGB pixel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rgb {
  // Red channel value.
  pub r: u8,
  // Green channel value.
  pub g: u8,
  // Blue channel value.
  pub b: u8,
}

impl Rgb {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  // Channels scaled into `0.0..=1.0`.
  pub fn normalized(&self) -> [f64; 3] {
    [
      self.r as f64 / 255.0,
      self.g as f64 / 255.0,
      self.b as f64 / 255.0,
    ]
  }

  // Scales normalized channels back to 8 bits, rounding and clamping each
  // into `0..=255`.
  pub fn from_normalized([r, g, b]: [f64; 3]) -> Self {
    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Self { r: channel(r), g: channel(g), b: channel(b) }
  }
}

/// An in-memory RGB image, stored row-major.
///
/// The pixel count always equals `width * height`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer {
  width: u32,
  height: u32,
  pixels: Vec<Rgb>,
}

impl PixelBuffer {
  /// Builds a buffer from row-major pixels, failing with
  /// `Error::InvalidDimensions` when the pixel count does not match.
  pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, Error> {
    if width as u64 * height as u64 != pixels.len() as u64 {
      return Err(Error::InvalidDimensions { width, height, len: pixels.len() });
    }

    Ok(Self { width, height, pixels })
  }

  /// Builds a buffer from packed `r, g, b` bytes.
  pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> Result<Self, Error> {
    if raw.len() % 3 != 0 {
      return Err(Error::InvalidDimensions { width, height, len: raw.len() / 3 });
    }

    let pixels = raw
      .chunks_exact(3)
      .map(|c| Rgb::new(c[0], c[1], c[2]))
      .collect();

    Self::new(width, height, pixels)
  }

  /// A buffer with every pixel set to `fill`.
  pub fn filled(width: u32, height: u32, fill: Rgb) -> Self {
    let len = width as usize * height as usize;
    Self { width, height, pixels: vec![fill; len] }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn dimensions(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  pub fn pixels(&self) -> &[Rgb] {
    &self.pixels
  }

  /// Returns the pixel at column `x` of row `y`, if in bounds.
  pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
    if x >= self.width || y >= self.height {
      return None;
    }

    self.pixels.get(y as usize * self.width as usize + x as usize).copied()
  }

  /// Packed `r, g, b` bytes in row-major order.
  pub fn to_raw(&self) -> Vec<u8> {
    self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rejecting_mismatched_pixel_count() {
    let result = PixelBuffer::new(2, 2, vec![Rgb::default(); 3]);

    match result {
      Err(Error::InvalidDimensions { width: 2, height: 2, len: 3 }) => {}
      other => panic!("Expected InvalidDimensions, got {:?}", other),
    }
  }

  #[test]
  fn test_raw_bytes_are_row_major() {
    let raw = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    let buffer = PixelBuffer::from_raw(2, 2, &raw).expect("Failed to build buffer");

    assert_eq!(buffer.get(1, 0), Some(Rgb::new(4, 5, 6)));
    assert_eq!(buffer.get(0, 1), Some(Rgb::new(7, 8, 9)));
    assert_eq!(buffer.get(2, 0), None);
    assert_eq!(buffer.to_raw(), raw.to_vec());
  }

  #[test]
  fn test_from_normalized_clamps() {
    assert_eq!(Rgb::from_normalized([1.2, -0.3, 0.5]), Rgb::new(255, 0, 128));
  }
}
