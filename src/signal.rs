//! Synthetic sinusoidal test signals.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::common::FftError;
use crate::float::math::sin;
use crate::spectrum::check_sample_interval;

/// One sinusoidal component `amplitude·sin(2π·frequency·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
}

impl Tone {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        self.amplitude * sin(2.0 * PI * self.frequency * t)
    }
}

/// Sampling instants `k·sample_interval` for `k in 0..len`.
pub fn time_axis(len: usize, sample_interval: f64) -> Result<Vec<f64>, FftError> {
    check_sample_interval(sample_interval)?;
    Ok((0..len).map(|k| k as f64 * sample_interval).collect())
}

/// Sum of `tones` sampled `len` times, `sample_interval` seconds apart.
pub fn sample_tones(
    tones: &[Tone],
    len: usize,
    sample_interval: f64,
) -> Result<Vec<f64>, FftError> {
    Ok(time_axis(len, sample_interval)?
        .into_iter()
        .map(|t| tones.iter().map(|tone| tone.at(t)).sum())
        .collect())
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
