// src/float/buffer.rs

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex64;

use super::bitrev::reverse_bits;
use crate::common::Sample;

/// Two equal-length arenas used as alternating read/write buffers across
/// butterfly stages. `active` names the arena holding the latest stage output.
pub(crate) struct WorkingBuffer {
    arenas: [Vec<Complex64>; 2],
    active: usize,
}

impl WorkingBuffer {
    /// Copies `samples` into arena 0 in bit-reversed order.
    ///
    /// `samples.len()` must already be validated as `2^bit_width`.
    pub(crate) fn load_bit_reversed<S: Sample>(samples: &[S], bit_width: u32) -> Self {
        let n = samples.len();
        let mut loaded = vec![Complex64::new(0.0, 0.0); n];
        for (k, &sample) in samples.iter().enumerate() {
            loaded[reverse_bits(k, bit_width)] = sample.to_complex();
        }

        Self {
            arenas: [loaded, vec![Complex64::new(0.0, 0.0); n]],
            active: 0,
        }
    }

    /// Splits into (read, write) views: the active arena and the other one.
    pub(crate) fn split(&mut self) -> (&[Complex64], &mut [Complex64]) {
        let [first, second] = &mut self.arenas;
        if self.active == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }

    /// Makes the arena just written the input of the next stage.
    #[inline]
    pub(crate) fn swap(&mut self) {
        self.active ^= 1;
    }

    pub(crate) fn active(&self) -> &[Complex64] {
        &self.arenas[self.active]
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
