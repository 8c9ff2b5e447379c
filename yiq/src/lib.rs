//! This crate converts images between RGB and YIQ1, a compact binary
//! encoding of the YIQ colorspace.
//!
//! A YIQ1 image is a 16 byte header (`YIQ1`, little-endian `u32` width and
//! height, `DATA`) followed by three signed bytes (Y, I, Q) per pixel in
//! row-major order. Each sample is the YIQ value, with I and Q biased into a
//! positive range, scaled by 100 and rounded.
//!
//! The primary exports are `encode_image` and `decode_image` for the YIQ1
//! format itself, `detect_source` for telling YIQ1 apart from other image
//! formats, and `ConversionJob`/`convert` for running a full conversion.
//! Every other raster format (PNG, JPEG, ...) is handled by the `image`
//! crate through the `RasterCodec` trait.
//!
//! # In-memory encode example
//!
//! ```rust
//! use yiq::{encode_to_vec, CodecOptions, PixelBuffer, Rgb};
//!
//! // A 1x1 image made up of a single white pixel.
//! let image = PixelBuffer::filled(1, 1, Rgb::new(255, 255, 255));
//!
//! let encoded = encode_to_vec(&image, &CodecOptions::default()).unwrap();
//!
//! assert_eq!(&encoded[..4], b"YIQ1");
//! assert_eq!(&encoded[16..], &[100, 60, 52]);
//! ```
//!
//! # Conversion example
//!
//! ```rust
//! use yiq::{convert, CodecOptions, OutputFormat, PixelBuffer, Rgb, Target};
//!
//! let image = PixelBuffer::filled(2, 2, Rgb::new(0, 0, 0));
//! let encoded = yiq::encode_to_vec(&image, &CodecOptions::default()).unwrap();
//!
//! // A YIQ1 source is mirrored to a PNG image.
//! let conversion = convert(&encoded, Target::Mirror, &CodecOptions::default()).unwrap();
//! assert_eq!(conversion.format, OutputFormat::Raster(yiq::image::ImageFormat::Png));
//! ```

pub use crate::decode::{decode_header, decode_image, decode_slice};
pub use crate::detect::{detect_source, Source, SourceKind};
pub use crate::encode::{encode_header, encode_image, encode_payload, encode_to_vec};
pub use crate::error::Error;
pub use crate::meta::{ImageMeta, YIQ1_DATA_MARKER, YIQ1_HEADER_LEN, YIQ1_MAGIC};
pub use crate::pipeline::{
  convert, Conversion, ConversionJob, JobObserver, OutputFormat, Sink, Target, TracingObserver,
};
pub use crate::pixel::{PixelBuffer, Rgb};
pub use crate::profile::{rgb_to_yiq, yiq_to_rgb, ConversionProfile};
pub use crate::raster::{DecodedRaster, ImageCodec, RasterCodec};
pub use crate::sample::{CodecOptions, Quantization, YiqSample, I_BIAS, Q_BIAS};

pub use image;

mod decode;
mod detect;
mod encode;
mod error;
mod meta;
pub mod pipeline;
mod pixel;
pub mod profile;
pub mod raster;
mod sample;
