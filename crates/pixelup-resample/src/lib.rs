//! pixelup-resample - Resampling and channel normalization for pixelup
//!
//! This crate provides the algorithmic heart of pixelup:
//!
//! - Bilinear resampling of [`PixelBuffer`]s to a new resolution
//! - Target-dimension derivation from a scale factor
//! - Channel normalization between RGB and RGBA
//!
//! All operations are pure functions over buffers: no hidden state, no
//! I/O, deterministic for identical inputs.
//!
//! [`PixelBuffer`]: pixelup_core::PixelBuffer

mod bilinear;
mod channels;
mod error;

pub use bilinear::{resize_bilinear, target_dimensions};
pub use channels::{OPAQUE_ALPHA, to_rgb, to_rgba};
pub use error::{ResampleError, ResampleResult};
