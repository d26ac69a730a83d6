//! Error types for pixelup-pipeline
//!
//! One enum covers every way a request can fail, split between
//! client-caused conditions (bad or missing input, oversized targets) and
//! server-caused ones (collaborator failures). The transport maps these to
//! its own status convention via [`PipelineError::is_client_error`] and
//! serializes [`PipelineError::kind`] as the machine-readable kind.

use thiserror::Error;

/// Errors that can occur while processing one upscale request
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No image payload was provided
    #[error("image payload is required")]
    MissingInput,

    /// The scale factor is non-finite or not strictly positive
    #[error("invalid scale factor: {0}")]
    InvalidScale(f64),

    /// The payload could not be decoded into an image
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The decoded image carries a channel count other than 3 or 4
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(u32),

    /// The derived target dimensions are degenerate
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The target pixel count exceeds the configured budget
    #[error("target of {requested} pixels exceeds the budget of {budget}")]
    ResourceLimitExceeded { requested: u64, budget: u64 },

    /// The result could not be encoded
    #[error("encode failure: {0}")]
    EncodeFailure(String),

    /// Unexpected failure in a collaborator
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Machine-readable error kind for structured responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::InvalidScale(_) => "invalid_scale",
            Self::InvalidImage(_) => "invalid_image",
            Self::UnsupportedChannelCount(_) => "unsupported_channel_count",
            Self::InvalidDimension { .. } => "invalid_dimension",
            Self::ResourceLimitExceeded { .. } => "resource_limit_exceeded",
            Self::EncodeFailure(_) => "encode_failure",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Whether the failure was caused by the request rather than the
    /// server. Client errors cannot succeed on retry with the same input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::EncodeFailure(_) | Self::Internal(_))
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
