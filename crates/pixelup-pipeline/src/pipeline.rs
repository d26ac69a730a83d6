//! The upscaling pipeline
//!
//! Orchestrates one request: decode → resample → normalize → encode.
//! Stages run strictly in order; each stage's buffer is dropped as soon as
//! the next stage's output exists, and ownership never duplicates, so
//! every intermediate buffer is released on success and on every error
//! path alike. Requests share no mutable state and may run in parallel.

use crate::codec::{ImageDecoder, ImageEncoder, StandardCodec};
use crate::config::{Limits, ScaleOptions};
use crate::error::{PipelineError, PipelineResult};
use pixelup_io::IoError;
use pixelup_resample::{ResampleError, resize_bilinear, target_dimensions, to_rgba};
use tracing::debug;

/// One-request upscaling pipeline.
///
/// Generic over its codec collaborators; [`Pipeline::new`] wires in the
/// production PNG/JPEG codec.
///
/// # Example
///
/// ```no_run
/// use pixelup_pipeline::{Pipeline, ScaleOptions};
///
/// let pipeline = Pipeline::new();
/// let png_bytes = std::fs::read("photo.jpg").unwrap();
/// let upscaled = pipeline
///     .upscale(&png_bytes, &ScaleOptions::with_scale(2.0))
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<D = StandardCodec, E = StandardCodec> {
    decoder: D,
    encoder: E,
    limits: Limits,
}

impl Pipeline {
    /// Pipeline with the production codec and default limits.
    pub fn new() -> Self {
        Pipeline {
            decoder: StandardCodec,
            encoder: StandardCodec,
            limits: Limits::default(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ImageDecoder, E: ImageEncoder> Pipeline<D, E> {
    /// Pipeline with explicit collaborators, used by tests to inject
    /// failing codecs.
    pub fn with_codec(decoder: D, encoder: E, limits: Limits) -> Self {
        Pipeline {
            decoder,
            encoder,
            limits,
        }
    }

    /// Get the configured limits.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Upscale one encoded image, returning re-encoded PNG bytes.
    ///
    /// # Errors
    ///
    /// Any [`PipelineError`]; see the error module for the taxonomy and
    /// the client/server split.
    pub fn upscale(&self, encoded: &[u8], options: &ScaleOptions) -> PipelineResult<Vec<u8>> {
        if encoded.is_empty() {
            return Err(PipelineError::MissingInput);
        }
        let factor = options.resolve_scale()?;

        let source = self
            .decoder
            .decode(encoded)
            .map_err(classify_decode_error)?;
        debug!(
            width = source.width(),
            height = source.height(),
            channels = source.layout().samples_per_pixel(),
            "decoded source image"
        );

        let (target_w, target_h) =
            target_dimensions(source.width(), source.height(), factor)
                .map_err(classify_resample_error)?;

        // Fail fast before the target buffer exists; the source buffer is
        // released on this path by falling out of scope.
        let requested = u64::from(target_w) * u64::from(target_h);
        if requested > self.limits.max_target_pixels {
            return Err(PipelineError::ResourceLimitExceeded {
                requested,
                budget: self.limits.max_target_pixels,
            });
        }

        let resampled =
            resize_bilinear(&source, target_w, target_h).map_err(classify_resample_error)?;
        drop(source);
        debug!(width = target_w, height = target_h, "resampled");

        let normalized = to_rgba(&resampled);
        drop(resampled);

        let output = self
            .encoder
            .encode(&normalized)
            .map_err(|e| PipelineError::EncodeFailure(e.to_string()))?;
        debug!(bytes = output.len(), "encoded result");
        Ok(output)
    }

    /// Upscale a base64-framed payload, returning a PNG data URI.
    ///
    /// Accepts either a `data:image/...;base64,` URI or a bare base64
    /// string, matching the transport's request format.
    pub fn upscale_data_uri(
        &self,
        payload: &str,
        options: &ScaleOptions,
    ) -> PipelineResult<String> {
        if payload.is_empty() {
            return Err(PipelineError::MissingInput);
        }
        let bytes = pixelup_io::decode_image_payload(payload)
            .map_err(|e| PipelineError::InvalidImage(e.to_string()))?;
        let upscaled = self.upscale(&bytes, options)?;
        Ok(pixelup_io::encode_png_data_uri(&upscaled))
    }
}

/// Map a decode-side collaborator failure onto the request taxonomy.
fn classify_decode_error(e: IoError) -> PipelineError {
    match e {
        IoError::Core(pixelup_core::Error::UnsupportedChannelCount(n)) => {
            PipelineError::UnsupportedChannelCount(n)
        }
        IoError::Core(err @ pixelup_core::Error::InvalidDimension { .. }) => {
            PipelineError::InvalidImage(err.to_string())
        }
        IoError::UnsupportedFormat(msg)
        | IoError::InvalidData(msg)
        | IoError::DecodeError(msg) => PipelineError::InvalidImage(msg),
        other => PipelineError::Internal(other.to_string()),
    }
}

fn classify_resample_error(e: ResampleError) -> PipelineError {
    match e {
        ResampleError::InvalidScaleFactor(f) => PipelineError::InvalidScale(f),
        ResampleError::InvalidDimension { width, height } => {
            PipelineError::InvalidDimension { width, height }
        }
        ResampleError::Core(err) => PipelineError::Internal(err.to_string()),
    }
}
