//! pixelup - Bilinear image upscaling
//!
//! Decodes a PNG or JPEG payload, resamples it to a new resolution with
//! bilinear interpolation, normalizes the result to RGBA, and re-encodes
//! it as PNG.
//!
//! # Example
//!
//! ```no_run
//! use pixelup::pipeline::{Pipeline, ScaleOptions};
//!
//! let pipeline = Pipeline::new();
//! let input = std::fs::read("photo.jpg").unwrap();
//! let output = pipeline
//!     .upscale(&input, &ScaleOptions::with_scale(2.0))
//!     .unwrap();
//! std::fs::write("photo@2x.png", output).unwrap();
//! ```
//!
//! The stages are also usable on their own: [`resample::resize_bilinear`]
//! is a pure function over [`PixelBuffer`]s, and [`io`] exposes the
//! decoders, the PNG encoder, and base64 data-URI framing.

// Re-export core types (primary data structures used everywhere)
pub use pixelup_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixelup_io as io;
pub use pixelup_pipeline as pipeline;
pub use pixelup_resample as resample;
