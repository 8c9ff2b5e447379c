//! RGB and YIQ conversion under the two supported coefficient profiles.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A row-major 3x3 coefficient matrix.
pub type Matrix = [[f64; 3]; 3];

const SMPTE_C_FORWARD: Matrix = [
  [0.30, 0.59, 0.11],
  [0.599, -0.2773, -0.3217],
  [0.213, -0.5251, 0.3121],
];

const SMPTE_C_INVERSE: Matrix = [
  [1.0, 0.9469, 0.6236],
  [1.0, -0.2748, -0.6357],
  [1.0, -1.1, 1.7],
];

const NTSC_1953_FORWARD: Matrix = [
  [0.299, 0.587, 0.114],
  [0.5959, -0.2746, -0.3213],
  [0.2115, -0.5227, 0.3112],
];

const NTSC_1953_INVERSE: Matrix = [
  [1.0, 0.956, 0.619],
  [1.0, -0.272, -0.647],
  [1.0, -1.106, 1.703],
];

/// The coefficient set used to move between RGB and YIQ.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ConversionProfile {
  /// The original 1953 FCC NTSC coefficients.
  Ntsc1953,
  /// SMPTE-C coefficients. This is the profile YIQ1 streams are written with.
  #[default]
  SmpteC,
}

impl ConversionProfile {
  pub const ALL: [ConversionProfile; 2] = [ConversionProfile::Ntsc1953, ConversionProfile::SmpteC];

  /// The canonical name of the profile.
  pub fn name(self) -> &'static str {
    match self {
      ConversionProfile::Ntsc1953 => "NTSC-1953",
      ConversionProfile::SmpteC => "SMPTE-C",
    }
  }

  /// Matrix applied to normalized `[r, g, b]` to produce `[y, i, q]`.
  pub fn forward(self) -> &'static Matrix {
    match self {
      ConversionProfile::Ntsc1953 => &NTSC_1953_FORWARD,
      ConversionProfile::SmpteC => &SMPTE_C_FORWARD,
    }
  }

  /// Approximate inverse of [`ConversionProfile::forward`].
  pub fn inverse(self) -> &'static Matrix {
    match self {
      ConversionProfile::Ntsc1953 => &NTSC_1953_INVERSE,
      ConversionProfile::SmpteC => &SMPTE_C_INVERSE,
    }
  }

  pub fn rgb_to_yiq(self, r: f64, g: f64, b: f64) -> [f64; 3] {
    apply(self.forward(), [r, g, b])
  }

  pub fn yiq_to_rgb(self, y: f64, i: f64, q: f64) -> [f64; 3] {
    apply(self.inverse(), [y, i, q])
  }
}

/// Converts normalized RGB channels (`0.0..=1.0`) into a `[y, i, q]` triple.
pub fn rgb_to_yiq(r: f64, g: f64, b: f64, profile: ConversionProfile) -> [f64; 3] {
  profile.rgb_to_yiq(r, g, b)
}

/// Converts a `[y, i, q]` triple back into normalized `[r, g, b]` channels.
/// The result is not clamped.
pub fn yiq_to_rgb(y: f64, i: f64, q: f64, profile: ConversionProfile) -> [f64; 3] {
  profile.yiq_to_rgb(y, i, q)
}

fn apply(matrix: &Matrix, v: [f64; 3]) -> [f64; 3] {
  let row = |m: &[f64; 3]| m[0] * v[0] + m[1] * v[1] + m[2] * v[2];
  [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

impl fmt::Display for ConversionProfile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Accepts the canonical names and a few common spellings, ignoring case.
impl FromStr for ConversionProfile {
  type Err = Error;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    match name.trim().to_ascii_lowercase().as_str() {
      "ntsc-1953" | "ntsc1953" | "ntsc" => Ok(ConversionProfile::Ntsc1953),
      "smpte-c" | "smptec" | "smpte" => Ok(ConversionProfile::SmpteC),
      _ => Err(Error::UnsupportedProfile(name.to_string())),
    }
  }
}
