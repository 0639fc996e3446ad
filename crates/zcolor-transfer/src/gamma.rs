//! Pure power gamma and the linear identity.
//!
//! # Range
//!
//! - Input/Output: [0, 1]; negative inputs map to 0.

/// EOTF for arbitrary gamma: `v^gamma`
///
/// # Example
///
/// ```rust
/// use zcolor_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-3);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    if !(v > 0.0) { 0.0 } else { v.powf(gamma) }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    if !(l > 0.0) { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Identity transfer with negatives clamped to 0.
#[inline]
pub fn linear(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}
