//! pixelup-core - Core data structures for pixelup
//!
//! This crate provides the canonical image representation shared by every
//! pixelup stage: [`PixelBuffer`] (row-major 8-bit samples plus shape
//! metadata) and [`ChannelLayout`] (interleaved RGB or RGBA).
//!
//! # Example
//!
//! ```
//! use pixelup_core::{ChannelLayout, PixelBuffer};
//!
//! let buf = PixelBuffer::new(640, 480, ChannelLayout::Rgba).unwrap();
//! assert_eq!(buf.width(), 640);
//! assert_eq!(buf.samples().len(), 640 * 480 * 4);
//! ```

mod buffer;
mod error;

pub use buffer::{ChannelLayout, PixelBuffer};
pub use error::{Error, Result};
