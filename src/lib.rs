#![no_std]

// The engine hands back owned spectra, so `alloc` is always needed.
extern crate alloc;

// `std` is linked for the `std` feature and for tests,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;
pub mod signal;
pub mod spectrum;

pub use common::{FftError, Sample};
pub use float::{bit_width_of, fft_size, reverse_bits, transform};
pub use signal::{Tone, sample_tones, time_axis};
pub use spectrum::Spectrum;
