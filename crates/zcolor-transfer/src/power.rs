//! Piecewise power-law transfer functions (sRGB, BT.709, BT.2020).
//!
//! A linear segment near black joined to an offset power curve:
//!
//! ```text
//! if L <= threshold:
//!     V = slope * L
//! else:
//!     V = (1 + offset) * L^(1/exponent) - offset
//! ```
//!
//! Decoding is the algebraic inverse, split at `slope * threshold`.
//!
//! # Range
//!
//! - Input/Output: [0, 1]; negative inputs map to 0.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999 (sRGB), ITU-R BT.709-6, ITU-R BT.2020-2

/// Parameters of a piecewise power-law curve.
///
/// # Example
///
/// ```rust
/// use zcolor_transfer::power::{PowerLaw, POWER_SRGB};
///
/// let v = POWER_SRGB.encode(0.214);
/// assert!((v - 0.5).abs() < 0.01);
///
/// let custom = PowerLaw::new(0.0, 1.0, 2.2, 0.0);
/// assert!((custom.decode(custom.encode(0.3)) - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    /// Linear value where the curve switches from the linear to the power segment.
    pub threshold: f64,
    /// Slope of the linear segment.
    pub slope: f64,
    /// Exponent of the decode side (encode uses `1/exponent`).
    pub exponent: f64,
    /// Offset of the power segment.
    pub offset: f64,
}

/// sRGB curve (IEC 61966-2-1).
pub const POWER_SRGB: PowerLaw = PowerLaw::new(0.0031308, 12.92, 2.4, 0.055);

/// BT.709 / BT.2020 camera curve, with the continuous high-precision constants.
pub const POWER_BT709: PowerLaw =
    PowerLaw::new(0.018053968510807, 4.5, 1.0 / 0.45, 0.09929682680944);

impl PowerLaw {
    /// Creates a curve from `(threshold, slope, exponent, offset)`.
    pub const fn new(threshold: f64, slope: f64, exponent: f64, offset: f64) -> Self {
        Self {
            threshold,
            slope,
            exponent,
            offset,
        }
    }

    /// Encoded value of [`PowerLaw::threshold`], where decoding switches segments.
    #[inline]
    pub fn encoded_threshold(&self) -> f64 {
        self.slope * self.threshold
    }

    /// Encodes linear light.
    #[inline]
    pub fn encode(&self, l: f64) -> f64 {
        if !(l > 0.0) {
            0.0
        } else if l <= self.threshold {
            self.slope * l
        } else {
            (1.0 + self.offset) * l.powf(1.0 / self.exponent) - self.offset
        }
    }

    /// Decodes to linear light.
    #[inline]
    pub fn decode(&self, v: f64) -> f64 {
        if !(v > 0.0) {
            0.0
        } else if v <= self.encoded_threshold() {
            v / self.slope
        } else {
            ((v + self.offset) / (1.0 + self.offset)).powf(self.exponent)
        }
    }
}
