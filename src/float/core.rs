// src/float/core.rs

use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;

use super::bitrev::fft_size;
use super::buffer::WorkingBuffer;
use super::math::{hypot, sin_cos};
use crate::common::{FftError, Sample};

/// Twiddle factor `e^(i·angle)`.
#[inline]
pub(crate) fn twiddle(angle: f64) -> Complex64 {
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// One radix-2 stage over the whole buffer.
///
/// `src` holds sub-transforms of `size / 2` points; `dst` receives the
/// sub-transforms of `size` points. Groups of `size` cover the buffer exactly.
pub(crate) fn butterfly_stage(src: &[Complex64], dst: &mut [Complex64], size: usize) {
    let half = size >> 1;
    // Forward transform: negative fundamental angle.
    let angle_step = -2.0 * PI / (size as f64);

    for (a, b) in src.chunks_exact(size).zip(dst.chunks_exact_mut(size)) {
        for i in 0..half {
            let w = twiddle(angle_step * (i as f64));
            b[i] = a[i] + w * a[half + i];
        }
        // W^i for i >= half is -W^(i - half), which yields the difference half.
        for i in half..size {
            let w = twiddle(angle_step * (i as f64));
            b[i] = a[i - half] + w * a[i];
        }
    }
}

/// Normalized magnitude spectrum `2·|X[k]| / N` of `samples`.
///
/// `samples.len()` must equal `2^bit_width`; anything else is rejected with
/// [`FftError::SizeMismatch`] before any work is done. The output has one
/// bin per sample, in natural order. Phase is not returned.
pub fn transform<S: Sample>(samples: &[S], bit_width: u32) -> Result<Vec<f64>, FftError> {
    let n = fft_size(bit_width)?;
    if samples.len() != n {
        return Err(FftError::SizeMismatch {
            expected: n,
            actual: samples.len(),
        });
    }

    // 1. Load in bit-reversed order
    let mut buffer = WorkingBuffer::load_bit_reversed(samples, bit_width);

    // 2. Butterfly stages, strictly in increasing size
    for q in 1..=bit_width {
        let (src, dst) = buffer.split();
        butterfly_stage(src, dst, 1 << q);
        buffer.swap();
    }

    // 3. Normalize to magnitude
    let scale = 2.0 / (n as f64);
    Ok(buffer
        .active()
        .iter()
        .map(|z| scale * hypot(z.re, z.im))
        .collect())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
