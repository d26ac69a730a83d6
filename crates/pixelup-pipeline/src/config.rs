//! Pipeline configuration
//!
//! The optional request parameters and the process-wide limits, resolved
//! once at pipeline entry rather than defaulted ad hoc inside the
//! algorithm.

use crate::error::{PipelineError, PipelineResult};

/// Scale factor applied when the request does not specify one.
pub const DEFAULT_SCALE: f64 = 2.0;

/// Default ceiling on `target_width * target_height`.
///
/// 32 M pixels is ~128 MB of RGBA output, comfortably above 8K-class
/// images while keeping one adversarial request from exhausting memory.
pub const DEFAULT_MAX_TARGET_PIXELS: u64 = 32_000_000;

/// Per-request options
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleOptions {
    /// Requested scale factor; `None` means [`DEFAULT_SCALE`].
    pub scale: Option<f64>,
}

impl ScaleOptions {
    /// Options with an explicit scale factor.
    pub fn with_scale(scale: f64) -> Self {
        ScaleOptions { scale: Some(scale) }
    }

    /// Resolve the effective scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidScale`] if an explicit factor is
    /// non-finite or not strictly positive.
    pub fn resolve_scale(&self) -> PipelineResult<f64> {
        match self.scale {
            None => Ok(DEFAULT_SCALE),
            Some(f) if f.is_finite() && f > 0.0 => Ok(f),
            Some(f) => Err(PipelineError::InvalidScale(f)),
        }
    }
}

/// Process-wide resource limits
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum allowed `target_width * target_height`.
    pub max_target_pixels: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_target_pixels: DEFAULT_MAX_TARGET_PIXELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        assert_eq!(ScaleOptions::default().resolve_scale().unwrap(), DEFAULT_SCALE);
    }

    #[test]
    fn test_explicit_scale() {
        assert_eq!(ScaleOptions::with_scale(1.5).resolve_scale().unwrap(), 1.5);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ScaleOptions::with_scale(bad).resolve_scale(),
                Err(PipelineError::InvalidScale(_))
            ));
        }
    }
}
