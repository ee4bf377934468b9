// src/float/math.rs

// Platform-agnostic scalar helpers: native f64 math with `std`, libm otherwise.

#[inline]
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

#[inline]
pub(crate) fn sin(angle: f64) -> f64 {
    #[cfg(feature = "std")]
    return angle.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(angle);
}

/// `sqrt(x² + y²)` without intermediate overflow.
#[inline]
pub(crate) fn hypot(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.hypot(y);

    #[cfg(not(feature = "std"))]
    return libm::hypot(x, y);
}

#[inline]
pub(crate) fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
