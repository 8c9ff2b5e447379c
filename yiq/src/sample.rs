use crate::pixel::Rgb;
use crate::profile::ConversionProfile;

/// Bias added to I before quantization, centering it for byte storage.
pub const I_BIAS: f64 = 0.5957;
/// Bias added to Q before quantization, centering it for byte storage.
pub const Q_BIAS: f64 = 0.5226;

const SCALE: f64 = 100.0;

/// How a rounded sample is narrowed into a signed byte.
///
/// In-gamut RGB input never leaves `-128..=127` under either profile, so the
/// two modes only differ for out-of-range values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Quantization {
  /// Saturate to `-128..=127`.
  #[default]
  Clamp,
  /// Keep the low 8 bits (two's complement wraparound), as legacy YIQ1
  /// writers did.
  Wrap,
}

impl Quantization {
  /// Scales `value` by 100, rounds half away from zero and narrows it.
  pub fn quantize(self, value: f64) -> i8 {
    let scaled = (value * SCALE).round();

    match self {
      Quantization::Clamp => scaled.clamp(i8::MIN as f64, i8::MAX as f64) as i8,
      Quantization::Wrap => (scaled as i64) as i8,
    }
  }
}

/// Settings shared by YIQ1 encoding and decoding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodecOptions {
  pub profile: ConversionProfile,
  pub quantization: Quantization,
}

/// A quantized YIQ pixel as stored in a YIQ1 payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct YiqSample {
  pub y: i8,
  pub i: i8,
  pub q: i8,
}

impl YiqSample {
  pub fn from_rgb(pixel: Rgb, options: &CodecOptions) -> Self {
    let [r, g, b] = pixel.normalized();
    let [y, i, q] = options.profile.rgb_to_yiq(r, g, b);

    Self {
      y: options.quantization.quantize(y),
      i: options.quantization.quantize(i + I_BIAS),
      q: options.quantization.quantize(q + Q_BIAS),
    }
  }

  pub fn to_rgb(self, profile: ConversionProfile) -> Rgb {
    let y = self.y as f64 / SCALE;
    let i = self.i as f64 / SCALE - I_BIAS;
    let q = self.q as f64 / SCALE - Q_BIAS;

    Rgb::from_normalized(profile.yiq_to_rgb(y, i, q))
  }

  pub fn to_bytes(self) -> [u8; 3] {
    [self.y as u8, self.i as u8, self.q as u8]
  }

  pub fn from_bytes(bytes: [u8; 3]) -> Self {
    Self { y: bytes[0] as i8, i: bytes[1] as i8, q: bytes[2] as i8 }
  }
}
