//! Magnitude spectra tied to the sampling interval they were measured at.

use alloc::vec::Vec;

use crate::common::{FftError, Sample};
use crate::float::bitrev::bit_width_of;
use crate::float::core::transform;
use crate::float::math::round;

/// Normalized magnitude spectrum of a sampled signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    magnitudes: Vec<f64>,
    sample_interval: f64,
}

pub(crate) fn check_sample_interval(sample_interval: f64) -> Result<(), FftError> {
    if sample_interval.is_finite() && sample_interval > 0.0 {
        Ok(())
    } else {
        Err(FftError::InvalidSampleInterval)
    }
}

impl Spectrum {
    /// Transforms `samples` (`2^bit_width` of them, `sample_interval` seconds apart).
    pub fn compute<S: Sample>(
        samples: &[S],
        bit_width: u32,
        sample_interval: f64,
    ) -> Result<Self, FftError> {
        check_sample_interval(sample_interval)?;
        let magnitudes = transform(samples, bit_width)?;
        Ok(Self {
            magnitudes,
            sample_interval,
        })
    }

    /// Like [`Spectrum::compute`], with the bit width taken from `samples.len()`.
    pub fn from_signal<S: Sample>(samples: &[S], sample_interval: f64) -> Result<Self, FftError> {
        let bit_width = bit_width_of(samples.len())?;
        Self::compute(samples, bit_width, sample_interval)
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn into_magnitudes(self) -> Vec<f64> {
        self.magnitudes
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    pub fn sample_interval(&self) -> f64 {
        self.sample_interval
    }

    /// Frequency spacing between adjacent bins, in Hz.
    pub fn resolution(&self) -> f64 {
        1.0 / (self.len() as f64 * self.sample_interval)
    }

    /// Centre frequency of `bin` in Hz, `None` past the last bin.
    ///
    /// Bins past the first half map to negative frequencies, the same layout
    /// as numpy's `fftfreq`.
    pub fn frequency(&self, bin: usize) -> Option<f64> {
        let n = self.len();
        if bin >= n {
            return None;
        }
        if bin < n.div_ceil(2) {
            Some(bin as f64 * self.resolution())
        } else {
            Some(-((n - bin) as f64) * self.resolution())
        }
    }

    /// Frequencies of every bin, in bin order.
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|bin| self.frequency(bin)).collect()
    }

    /// Bin whose centre is closest to `frequency`. Negative frequencies wrap
    /// into the upper half.
    pub fn nearest_bin(&self, frequency: f64) -> usize {
        let n = self.len() as i64;
        let bin = round(frequency * n as f64 * self.sample_interval) as i64;
        bin.rem_euclid(n) as usize
    }

    /// Bins `0..=N/2`: DC up to Nyquist.
    pub fn positive_half(&self) -> &[f64] {
        &self.magnitudes[..=self.len() / 2]
    }

    /// The `count` strongest bins of the positive half as `(bin, magnitude)`,
    /// strongest first. Equal magnitudes keep ascending bin order; NaN bins
    /// rank last.
    pub fn peaks(&self, count: usize) -> Vec<(usize, f64)> {
        let mut bins: Vec<(usize, f64)> =
            self.positive_half().iter().copied().enumerate().collect();
        bins.sort_by(|a, b| {
            a.1.is_nan()
                .cmp(&b.1.is_nan())
                .then_with(|| b.1.total_cmp(&a.1))
        });
        bins.truncate(count);
        bins
    }
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
