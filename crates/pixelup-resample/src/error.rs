//! Error types for pixelup-resample

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelup_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(f64),

    /// Target dimensions are degenerate
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

/// Result type for resample operations
pub type ResampleResult<T> = Result<T, ResampleError>;
