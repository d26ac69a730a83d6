//! pixelup-pipeline - Upscale request orchestration
//!
//! Composes the pixelup stages into a single request pipeline:
//!
//! - Validation of payload presence, scale factor, and pixel budget
//! - Decode via a pluggable [`ImageDecoder`]
//! - Bilinear resampling and RGBA normalization
//! - Encode via a pluggable [`ImageEncoder`]
//!
//! The pipeline holds no shared mutable state; a single [`Pipeline`] value
//! can serve concurrent requests.

mod codec;
mod config;
mod error;
mod pipeline;

pub use codec::{ImageDecoder, ImageEncoder, StandardCodec};
pub use config::{DEFAULT_MAX_TARGET_PIXELS, DEFAULT_SCALE, Limits, ScaleOptions};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::Pipeline;
