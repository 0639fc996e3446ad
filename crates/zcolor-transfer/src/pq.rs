//! SMPTE ST 2084 Perceptual Quantizer (PQ) transfer function.
//!
//! PQ is the HDR curve of Rec.2100. Here the linear side is normalized:
//! `1.0` is the 10,000 cd/m2 peak, so it composes with the RGB matrices
//! like every other transfer function.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 1] (fraction of [`L_MAX`])
//!
//! # Reference
//!
//! SMPTE ST 2084:2014, ITU-R BT.2100-2
//!
//! # Usage
//!
//! ```rust
//! use zcolor_transfer::pq;
//!
//! let linear = pq::eotf(0.5);
//! let signal = pq::oetf(linear);
//! assert!((signal - 0.5).abs() < 1e-9);
//! ```

/// Peak luminance in cd/m2 (nits) represented by linear `1.0`.
pub const L_MAX: f64 = 10000.0;

// PQ constants from SMPTE ST 2084
const M1: f64 = 2610.0 / 16384.0;
const M2: f64 = 2523.0 / 32.0;
const C1: f64 = 3424.0 / 4096.0;
const C2: f64 = 2413.0 / 128.0;
const C3: f64 = 2392.0 / 128.0;

/// PQ EOTF: decodes a PQ signal to normalized linear light.
///
/// Inputs the curve cannot represent decode to black: a non-positive
/// signal, a non-positive denominator (`C2 - C3 * v^(1/M2)`), or a ratio
/// that is non-positive or non-finite all return `0.0`.
#[inline]
pub fn eotf(v: f64) -> f64 {
    if !(v > 0.0) {
        return 0.0;
    }

    let vp = v.powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;
    if den <= 0.0 {
        return 0.0;
    }

    let ratio = num / den;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0.0;
    }
    ratio.powf(1.0 / M1)
}

/// PQ OETF (inverse EOTF): encodes normalized linear light to a PQ signal.
///
/// Values above the peak extrapolate past 1.0 so callers can detect and
/// rescale out-of-range light.
#[inline]
pub fn oetf(l: f64) -> f64 {
    if !(l > 0.0) {
        return 0.0;
    }

    let yp = l.powf(M1);
    let num = C1 + C2 * yp;
    let den = 1.0 + C3 * yp;

    (num / den).powf(M2)
}

/// Decodes a PQ signal to absolute luminance in cd/m2.
#[inline]
pub fn eotf_nits(v: f64) -> f64 {
    eotf(v) * L_MAX
}

/// Encodes absolute luminance in cd/m2 to a PQ signal.
#[inline]
pub fn oetf_nits(nits: f64) -> f64 {
    oetf(nits / L_MAX)
}
