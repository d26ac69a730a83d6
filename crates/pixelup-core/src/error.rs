//! Error types for pixelup-core
//!
//! Provides a unified error type for pixel buffer construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Channel count other than 3 (RGB) or 4 (RGBA)
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(u32),

    /// Sample vector length does not match the declared shape
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the buffer
    #[error("coordinate out of bounds: ({x},{y}) in {width}x{height}")]
    CoordinateOutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
