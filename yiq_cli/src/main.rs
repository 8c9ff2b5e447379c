//! Command line converter between regular raster images and YIQ1.
//!
//! ```sh
//! yiq photo.jpg                # writes photo.jpg.yiq
//! yiq photo.jpg.yiq            # writes photo.jpg.yiq.png
//! yiq photo.yiq -o photo.bmp   # output format follows the extension
//! cat photo.png | yiq - > photo.yiq
//! ```

mod args;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yiq::{
  detect_source, CodecOptions, ConversionJob, ImageCodec, OutputFormat, Sink, Source, Target,
  TracingObserver,
};

use crate::args::{is_dash, Args};

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| args.log_filter().into()),
    )
    .with(
      tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(io::stderr),
    )
    .init();

  run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
  let options = CodecOptions {
    profile: args.profile,
    quantization: args.quantization.to_quantization(),
  };

  let bytes = read_input(&args.input)?;
  let source = detect_source(&bytes, &ImageCodec, &options)
    .with_context(|| format!("Failed to read {}", display_input(&args.input)))?;

  log_source(&args.input, &source);

  let target = resolve_target(args.format, args.output.as_deref());
  let job = ConversionJob::new(source, target).with_options(options);
  let sink = resolve_sink(args, job.output_format());

  let output = job
    .run(&ImageCodec, &TracingObserver)
    .with_context(|| format!("Failed to convert {}", display_input(&args.input)))?;

  sink
    .write_all(&output)
    .with_context(|| format!("Failed to write {}", sink))?;

  tracing::info!(destination = %sink, bytes = output.len(), "Wrote output");

  Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<Vec<u8>> {
  if is_dash(input) {
    let mut bytes = Vec::new();
    io::stdin()
      .lock()
      .read_to_end(&mut bytes)
      .context("Failed to read stdin")?;
    return Ok(bytes);
  }

  fs::read(input).with_context(|| format!("Failed to open {}", input.display()))
}

fn display_input(input: &Path) -> String {
  if is_dash(input) {
    "<stdin>".to_string()
  } else {
    input.display().to_string()
  }
}

fn log_source(input: &Path, source: &Source) {
  let (width, height) = source.dimensions();

  tracing::info!(
    name = %display_input(input),
    kind = ?source.kind(),
    format = ?source.external_format(),
    color = ?source.color(),
    width,
    height,
    "Loaded source",
  );
}

/// With `--format auto`, an output path whose extension names a known format
/// selects that format; otherwise the source is mirrored.
fn resolve_target(requested: Target, output: Option<&Path>) -> Target {
  if requested != Target::Mirror {
    return requested;
  }

  output
    .filter(|path| !is_dash(path))
    .and_then(|path| path.extension())
    .and_then(|ext| ext.to_str())
    .and_then(|ext| ext.parse::<Target>().ok())
    .unwrap_or(Target::Mirror)
}

/// An explicit `--output` wins. Otherwise stdin input goes to stdout and a
/// file input gets the output format's extension appended to its name.
fn resolve_sink(args: &Args, format: OutputFormat) -> Sink {
  match &args.output {
    Some(path) if is_dash(path) => Sink::Stdout,
    Some(path) => Sink::Path(path.clone()),
    None if args.input_is_stdin() => Sink::Stdout,
    None => Sink::Path(append_extension(&args.input, format.extension())),
  }
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
  let mut name = OsString::from(path.as_os_str());
  name.push(".");
  name.push(extension);
  PathBuf::from(name)
}

#[cfg(test)]
mod tests {
  use super::*;
  use yiq::image::ImageFormat;

  fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).expect("Failed to parse args")
  }

  #[test]
  fn test_default_yiq1_destination() {
    let args = parse(&["yiq", "photos/cat.jpg"]);

    assert_eq!(
      resolve_sink(&args, OutputFormat::Yiq1),
      Sink::Path(PathBuf::from("photos/cat.jpg.yiq"))
    );
  }

  #[test]
  fn test_default_raster_destination() {
    let args = parse(&["yiq", "cat.jpg.yiq"]);

    assert_eq!(
      resolve_sink(&args, OutputFormat::Raster(ImageFormat::Png)),
      Sink::Path(PathBuf::from("cat.jpg.yiq.png"))
    );
  }

  #[test]
  fn test_stdio_destinations() {
    assert_eq!(resolve_sink(&parse(&["yiq", "-"]), OutputFormat::Yiq1), Sink::Stdout);
    assert_eq!(resolve_sink(&parse(&["yiq", "cat.png", "-o", "-"]), OutputFormat::Yiq1), Sink::Stdout);
  }

  #[test]
  fn test_output_extension_selects_format() {
    assert_eq!(
      resolve_target(Target::Mirror, Some(Path::new("out.bmp"))),
      Target::Format(OutputFormat::Raster(ImageFormat::Bmp))
    );
    assert_eq!(
      resolve_target(Target::Mirror, Some(Path::new("out.yiq"))),
      Target::Format(OutputFormat::Yiq1)
    );
    assert_eq!(resolve_target(Target::Mirror, Some(Path::new("out.unknown"))), Target::Mirror);
    assert_eq!(resolve_target(Target::Mirror, None), Target::Mirror);
  }

  #[test]
  fn test_explicit_format_wins_over_extension() {
    let requested = Target::Format(OutputFormat::Yiq1);
    assert_eq!(resolve_target(requested, Some(Path::new("out.png"))), requested);
  }

  #[test]
  fn test_run_converts_file_to_yiq1() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("dot.png");

    yiq::image::RgbImage::from_pixel(1, 1, [255, 255, 255].into())
      .save(&input)
      .expect("Failed to write png");

    let args = parse(&["yiq", input.to_str().expect("utf-8 temp path")]);
    run(&args).expect("Failed to run conversion");

    let output = fs::read(dir.path().join("dot.png.yiq")).expect("Failed to read output");
    assert_eq!(&output[16..], &[100, 60, 52]);
  }

  #[test]
  fn test_run_reports_missing_input() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("missing.png");

    let args = parse(&["yiq", input.to_str().expect("utf-8 temp path")]);
    let err = run(&args).expect_err("Expected a missing input error");

    assert!(err.to_string().starts_with("Failed to open"));
  }
}
