//! Bilinear resampling
//!
//! Maps a source [`PixelBuffer`] to a new resolution with the standard
//! scale-and-center coordinate mapping and a per-channel bilinear blend of
//! the four nearest source samples. The function is pure: identical inputs
//! always produce identical outputs, independent of call order or
//! concurrency.

use crate::error::{ResampleError, ResampleResult};
use pixelup_core::PixelBuffer;

/// Compute target dimensions for a scale factor.
///
/// Each axis is `round(dim * factor)`, clamped to a minimum of 1 so that a
/// small factor on a small image cannot produce a degenerate shape.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidScaleFactor`] if `factor` is not finite
/// or not strictly positive.
pub fn target_dimensions(src_w: u32, src_h: u32, factor: f64) -> ResampleResult<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ResampleError::InvalidScaleFactor(factor));
    }
    let w = (f64::from(src_w) * factor).round().max(1.0);
    let h = (f64::from(src_h) * factor).round().max(1.0);
    // Saturate rather than wrap for absurd factors; the pipeline's pixel
    // budget rejects anything near this anyway.
    let clamp = |v: f64| if v > f64::from(u32::MAX) { u32::MAX } else { v as u32 };
    Ok((clamp(w), clamp(h)))
}

/// Resample an image to the given dimensions with bilinear interpolation.
///
/// Every output pixel `(ox, oy)` is mapped back to source coordinates
///
/// ```text
/// sx = (ox + 0.5) * srcW / targetW - 0.5
/// sy = (oy + 0.5) * srcH / targetH - 0.5
/// ```
///
/// clamped to the source extent, and each channel is blended from the four
/// neighboring samples by fractional distance, rounded to nearest, and
/// stored as an 8-bit sample. The output keeps the source channel layout;
/// alpha, when present, is interpolated exactly like the color channels.
///
/// At `target == source` dimensions the fractions collapse to zero and the
/// output is bit-identical to the source, so there is no identity fast
/// path to keep in sync with the general one.
///
/// # Arguments
///
/// * `src` - Source image
/// * `target_w` - Output width in pixels
/// * `target_h` - Output height in pixels
///
/// # Errors
///
/// Returns [`ResampleError::InvalidDimension`] if either target dimension
/// is 0.
pub fn resize_bilinear(
    src: &PixelBuffer,
    target_w: u32,
    target_h: u32,
) -> ResampleResult<PixelBuffer> {
    if target_w == 0 || target_h == 0 {
        return Err(ResampleError::InvalidDimension {
            width: target_w,
            height: target_h,
        });
    }

    let src_w = src.width() as usize;
    let src_h = src.height() as usize;
    let spp = src.layout().samples_per_pixel();
    let samples = src.samples();

    let x_ratio = src_w as f64 / target_w as f64;
    let y_ratio = src_h as f64 / target_h as f64;
    let src_stride = src_w * spp;

    let mut out = vec![0u8; target_w as usize * target_h as usize * spp];
    let mut out_idx = 0;

    for oy in 0..target_h as usize {
        let sy = ((oy as f64 + 0.5) * y_ratio - 0.5).clamp(0.0, (src_h - 1) as f64);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = sy - y0 as f64;

        let row0 = y0 * src_stride;
        let row1 = y1 * src_stride;

        for ox in 0..target_w as usize {
            let sx = ((ox as f64 + 0.5) * x_ratio - 0.5).clamp(0.0, (src_w - 1) as f64);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f64;

            let w00 = (1.0 - fx) * (1.0 - fy);
            let w10 = fx * (1.0 - fy);
            let w01 = (1.0 - fx) * fy;
            let w11 = fx * fy;

            let p00 = row0 + x0 * spp;
            let p10 = row0 + x1 * spp;
            let p01 = row1 + x0 * spp;
            let p11 = row1 + x1 * spp;

            for c in 0..spp {
                let value = w00 * f64::from(samples[p00 + c])
                    + w10 * f64::from(samples[p10 + c])
                    + w01 * f64::from(samples[p01 + c])
                    + w11 * f64::from(samples[p11 + c]);
                out[out_idx] = value.round().clamp(0.0, 255.0) as u8;
                out_idx += 1;
            }
        }
    }

    Ok(PixelBuffer::from_samples(
        target_w,
        target_h,
        src.layout(),
        out,
    )?)
}
