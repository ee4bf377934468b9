pub mod bitrev;
mod buffer;
pub mod core;
pub(crate) mod math;

pub use crate::common::{FftError, Sample};
pub use bitrev::{bit_width_of, fft_size, reverse_bits};
pub use self::core::transform;
