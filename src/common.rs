// src/common.rs

use core::fmt;
use num_complex::{Complex32, Complex64};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    /// The sample count is not `2^bit_width`.
    SizeMismatch { expected: usize, actual: usize },
    /// A bit width was requested for a length that is not a power of 2.
    NotPowerOfTwo { len: usize },
    /// `2^bit_width` does not fit in a `usize`.
    BitWidthTooLarge { bit_width: u32 },
    /// The sampling interval must be finite and strictly positive.
    InvalidSampleInterval,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch { expected, actual } => write!(
                f,
                "Sample count {} does not match FFT size {}",
                actual, expected
            ),
            FftError::NotPowerOfTwo { len } => write!(f, "Size {} is not a power of 2", len),
            FftError::BitWidthTooLarge { bit_width } => {
                write!(f, "Bit width {} is too large for this platform", bit_width)
            }
            FftError::InvalidSampleInterval => {
                write!(f, "Sample interval must be finite and positive")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// A time-domain measurement the engine can consume.
///
/// Real values enter the transform with a zero imaginary part.
pub trait Sample: Copy {
    fn to_complex(self) -> Complex64;
}

impl Sample for f64 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }
}

impl Sample for Complex64 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

impl Sample for Complex32 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
