// src/float/bitrev.rs

use crate::common::FftError;

/// Reverses the lowest `bit_width` bits of `index`.
///
/// The result is only meaningful for `index < 2^bit_width`; callers
/// validate that before asking.
#[inline]
pub fn reverse_bits(index: usize, bit_width: u32) -> usize {
    // A width of 0 (N = 1) shifts everything out, leaving 0.
    index
        .reverse_bits()
        .checked_shr(usize::BITS.saturating_sub(bit_width))
        .unwrap_or(0)
}

/// Number of samples for a transform over `bit_width` bits, `2^bit_width`.
pub fn fft_size(bit_width: u32) -> Result<usize, FftError> {
    1usize
        .checked_shl(bit_width)
        .ok_or(FftError::BitWidthTooLarge { bit_width })
}

/// Bit width `p` such that `len == 2^p`.
pub fn bit_width_of(len: usize) -> Result<u32, FftError> {
    if !len.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo { len });
    }
    Ok(len.trailing_zeros())
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
