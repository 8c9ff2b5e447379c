//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use yiq::{ConversionProfile, Quantization, Target};

#[derive(Debug, Parser)]
#[command(name = "yiq")]
#[command(version, about = "Convert images to and from the YIQ1 format")]
pub struct Args {
  /// Source image, or `-` to read from stdin. YIQ1 sources are detected
  /// automatically; anything else is decoded as a regular image.
  pub input: PathBuf,

  /// Destination file, or `-` for stdout. Defaults to the input path with
  /// the output format's extension appended.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Output format: `auto` (YIQ1 for images, PNG for YIQ1), `yiq`, or an
  /// image extension such as `png`, `jpg` or `bmp`.
  #[arg(short, long, default_value = "auto", value_parser = parse_target)]
  pub format: Target,

  /// Coefficient profile for the RGB/YIQ transform (SMPTE-C or NTSC-1953).
  /// YIQ1 files are normally written with SMPTE-C; a file written with
  /// NTSC-1953 must be read back with the same profile.
  #[arg(short, long, default_value = "SMPTE-C", value_parser = parse_profile)]
  pub profile: ConversionProfile,

  /// How out-of-range samples are stored.
  #[arg(short, long, value_enum, default_value_t = QuantizationMode::Clamp)]
  pub quantization: QuantizationMode,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QuantizationMode {
  /// Saturate to the signed byte range
  Clamp,
  /// Keep the low byte, like legacy YIQ1 writers
  Wrap,
}

impl QuantizationMode {
  pub fn to_quantization(self) -> Quantization {
    match self {
      QuantizationMode::Clamp => Quantization::Clamp,
      QuantizationMode::Wrap => Quantization::Wrap,
    }
  }
}

impl Args {
  /// `true` when the input is read from stdin.
  pub fn input_is_stdin(&self) -> bool {
    is_dash(&self.input)
  }

  /// The default log filter for the requested verbosity.
  pub fn log_filter(&self) -> &'static str {
    match self.verbose {
      0 => "yiq=warn,yiq_cli=warn",
      1 => "yiq=info,yiq_cli=info",
      2 => "yiq=debug,yiq_cli=debug",
      _ => "yiq=trace,yiq_cli=trace",
    }
  }
}

pub fn is_dash(path: &std::path::Path) -> bool {
  path.as_os_str() == "-"
}

fn parse_target(name: &str) -> Result<Target, String> {
  name.parse().map_err(|e: yiq::Error| e.to_string())
}

fn parse_profile(name: &str) -> Result<ConversionProfile, String> {
  name.parse().map_err(|e: yiq::Error| e.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use yiq::OutputFormat;

  #[test]
  fn test_defaults() {
    let args = Args::try_parse_from(["yiq", "photo.jpg"]).expect("Failed to parse args");

    assert_eq!(args.input, PathBuf::from("photo.jpg"));
    assert_eq!(args.output, None);
    assert_eq!(args.format, Target::Mirror);
    assert_eq!(args.profile, ConversionProfile::SmpteC);
    assert!(matches!(args.quantization, QuantizationMode::Clamp));
    assert_eq!(args.log_filter(), "yiq=warn,yiq_cli=warn");
  }

  #[test]
  fn test_explicit_options() {
    let args = Args::try_parse_from([
      "yiq", "-", "-o", "-", "-f", "yiq", "-p", "ntsc-1953", "-q", "wrap", "-vv",
    ])
    .expect("Failed to parse args");

    assert!(args.input_is_stdin());
    assert_eq!(args.format, Target::Format(OutputFormat::Yiq1));
    assert_eq!(args.profile, ConversionProfile::Ntsc1953);
    assert_eq!(args.quantization.to_quantization(), Quantization::Wrap);
    assert_eq!(args.verbose, 2);
  }

  #[test]
  fn test_unknown_profile_is_rejected() {
    let result = Args::try_parse_from(["yiq", "photo.jpg", "--profile", "PAL"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_unknown_format_is_rejected() {
    let result = Args::try_parse_from(["yiq", "photo.jpg", "--format", "xyz"]);
    assert!(result.is_err());
  }
}
