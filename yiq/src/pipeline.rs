//! Drives one conversion: a detected [`Source`] is re-encoded into the
//! requested [`OutputFormat`] entirely in memory, and only then handed to a
//! [`Sink`].

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use image::ImageFormat;

use crate::detect::{detect_source, Source, SourceKind};
use crate::encode::{encode_header, encode_payload};
use crate::error::Error;
use crate::meta::{ImageMeta, YIQ1_BYTES_PER_PIXEL, YIQ1_HEADER_LEN};
use crate::raster::{format_from_name, primary_extension, ImageCodec, RasterCodec};
use crate::sample::CodecOptions;

/// The raster format a YIQ1 source is mirrored to.
pub const DEFAULT_RASTER_FORMAT: ImageFormat = ImageFormat::Png;

/// A concrete output encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
  Yiq1,
  Raster(ImageFormat),
}

impl OutputFormat {
  /// The file extension conventionally used for this format.
  pub fn extension(&self) -> &'static str {
    match self {
      OutputFormat::Yiq1 => "yiq",
      OutputFormat::Raster(format) => primary_extension(*format),
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OutputFormat::Yiq1 => f.write_str("YIQ1"),
      OutputFormat::Raster(format) => write!(f, "{:?}", format),
    }
  }
}

/// What the caller asked the output to be.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Target {
  /// The counterpart of the source: YIQ1 becomes a PNG raster, anything
  /// else becomes YIQ1.
  #[default]
  Mirror,
  Format(OutputFormat),
}

impl Target {
  /// Resolves `Mirror` against the kind of source being converted.
  pub fn resolve(self, source: SourceKind) -> OutputFormat {
    match (self, source) {
      (Target::Format(format), _) => format,
      (Target::Mirror, SourceKind::Yiq1) => OutputFormat::Raster(DEFAULT_RASTER_FORMAT),
      (Target::Mirror, SourceKind::External) => OutputFormat::Yiq1,
    }
  }
}

/// Accepts `auto`/`mirror`, `yiq`/`yiq1`, or any raster extension the
/// external codec knows, ignoring case.
impl FromStr for Target {
  type Err = Error;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    match name.trim().to_ascii_lowercase().as_str() {
      "auto" | "mirror" => Ok(Target::Mirror),
      "yiq" | "yiq1" => Ok(Target::Format(OutputFormat::Yiq1)),
      other => format_from_name(other)
        .map(|format| Target::Format(OutputFormat::Raster(format)))
        .ok_or_else(|| Error::UnsupportedFormat(name.to_string())),
    }
  }
}

/// Receives progress notifications at fixed points of a conversion. Every
/// method defaults to doing nothing.
pub trait JobObserver {
  fn job_started(&self, _source: SourceKind, _target: OutputFormat, _width: u32, _height: u32) {}

  /// Only called for YIQ1 output, once the 16 byte header is in the buffer.
  fn header_written(&self, _meta: &ImageMeta) {}

  fn payload_complete(&self, _total_bytes: usize) {}
}

/// The silent observer.
impl JobObserver for () {}

/// Logs conversion milestones with `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl JobObserver for TracingObserver {
  fn job_started(&self, source: SourceKind, target: OutputFormat, width: u32, height: u32) {
    tracing::info!(?source, %target, width, height, "Starting conversion");
  }

  fn header_written(&self, meta: &ImageMeta) {
    tracing::debug!(width = meta.width, height = meta.height, "YIQ1 header written");
  }

  fn payload_complete(&self, total_bytes: usize) {
    tracing::info!(total_bytes, "Conversion complete");
  }
}

/// A single conversion of one source into one output format.
#[derive(Clone, Debug)]
pub struct ConversionJob {
  source: Source,
  target: Target,
  options: CodecOptions,
}

impl ConversionJob {
  pub fn new(source: Source, target: Target) -> Self {
    Self { source, target, options: CodecOptions::default() }
  }

  pub fn with_options(mut self, options: CodecOptions) -> Self {
    self.options = options;
    self
  }

  pub fn source(&self) -> &Source {
    &self.source
  }

  /// The format `run` will produce.
  pub fn output_format(&self) -> OutputFormat {
    self.target.resolve(self.source.kind())
  }

  /// Encodes the source into the resolved output format and returns the
  /// complete output. Nothing is written anywhere; a failed encode leaves no
  /// trace.
  pub fn run<C, O>(self, codec: &C, observer: &O) -> Result<Vec<u8>, Error>
  where
    C: RasterCodec + ?Sized,
    O: JobObserver + ?Sized,
  {
    let format = self.output_format();
    let kind = self.source.kind();
    let (width, height) = self.source.dimensions();
    let buffer = self.source.into_buffer();

    observer.job_started(kind, format, width, height);

    let bytes = match format {
      OutputFormat::Yiq1 => {
        let meta = ImageMeta { width, height };
        let mut dest = Vec::with_capacity(YIQ1_HEADER_LEN + buffer.pixels().len() * YIQ1_BYTES_PER_PIXEL);

        encode_header(&meta, &mut dest)?;
        observer.header_written(&meta);
        encode_payload(&buffer, &mut dest, &self.options)?;
        dest
      }
      OutputFormat::Raster(image_format) => codec.encode(&buffer, image_format)?,
    };

    observer.payload_complete(bytes.len());

    Ok(bytes)
  }
}

/// The result of [`convert`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conversion {
  pub format: OutputFormat,
  pub bytes: Vec<u8>,
}

/// Detects the format of `bytes` and converts them to `target` using the
/// `image` crate for raster formats.
pub fn convert(bytes: &[u8], target: Target, options: &CodecOptions) -> Result<Conversion, Error> {
  let source = detect_source(bytes, &ImageCodec, options)?;
  let job = ConversionJob::new(source, target).with_options(*options);
  let format = job.output_format();
  let bytes = job.run(&ImageCodec, &())?;

  Ok(Conversion { format, bytes })
}

/// Where converted bytes end up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Sink {
  Stdout,
  Path(PathBuf),
}

impl Sink {
  /// Writes the complete output. A file destination is only created here,
  /// after the output has been fully assembled.
  pub fn write_all(&self, bytes: &[u8]) -> Result<(), Error> {
    match self {
      Sink::Stdout => {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
      }
      Sink::Path(path) => {
        let mut file = File::create(path).map_err(|source| Error::SinkUnavailable {
          path: path.clone(),
          source,
        })?;
        file.write_all(bytes)?;
        file.flush()?;
      }
    }

    Ok(())
  }
}

impl fmt::Display for Sink {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Sink::Stdout => f.write_str("<stdout>"),
      Sink::Path(path) => write!(f, "{}", path.display()),
    }
  }
}
