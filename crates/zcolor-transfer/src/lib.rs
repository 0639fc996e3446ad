//! # zcolor-transfer
//!
//! Transfer functions for device color spaces.
//!
//! A transfer function converts between linear light and the non-linear
//! (gamma encoded) signal a device works in. Every curve here is a pair of
//! pure functions over nominal [0, 1] values:
//!
//! - **encode**: linear -> encoded (OETF)
//! - **decode**: encoded -> linear (EOTF / inverse OETF)
//!
//! Both sides return 0 for negative or NaN input, so a half-typed value
//! coming from an editor never turns into NaN downstream.
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Module |
//! |----------|----------|--------|
//! | sRGB | Web, consumer displays, lamp gamuts | [`power`] |
//! | BT.709 / BT.2020 | HDTV, UHDTV | [`power`] |
//! | PQ | HDR (Rec.2100 PQ) | [`pq`] |
//! | HLG | HDR broadcast (Rec.2100 HLG) | [`hlg`] |
//! | Gamma / linear | Simple power curves | [`gamma`] |
//!
//! # Usage
//!
//! ```rust
//! use zcolor_transfer::TransferFunction;
//!
//! let srgb = TransferFunction::SRGB;
//! let linear = srgb.decode(0.5);
//! let encoded = srgb.encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `zcolor-primaries` - color space definitions
//! - `zcolor` - RGB <-> XYZ conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fmt;

pub mod gamma;
pub mod hlg;
pub mod power;
pub mod pq;

pub use power::{POWER_BT709, POWER_SRGB, PowerLaw};

/// A transfer function selectable per color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferFunction {
    /// Identity (scene-linear data).
    Linear,
    /// Pure power curve with the given decode exponent.
    Gamma(f64),
    /// Piecewise power law with a linear toe.
    PowerLaw(PowerLaw),
    /// SMPTE ST 2084 perceptual quantizer, normalized to the 10,000 nit peak.
    Pq,
    /// ITU-R BT.2100 hybrid log-gamma.
    Hlg,
}

impl TransferFunction {
    /// sRGB curve.
    pub const SRGB: Self = Self::PowerLaw(POWER_SRGB);
    /// BT.709 / BT.2020 curve.
    pub const BT709: Self = Self::PowerLaw(POWER_BT709);

    /// Encodes a linear value.
    #[inline]
    pub fn encode(&self, l: f64) -> f64 {
        match self {
            Self::Linear => gamma::linear(l),
            Self::Gamma(g) => gamma::gamma_oetf(l, *g),
            Self::PowerLaw(p) => p.encode(l),
            Self::Pq => pq::oetf(l),
            Self::Hlg => hlg::oetf(l),
        }
    }

    /// Decodes an encoded value to linear.
    #[inline]
    pub fn decode(&self, v: f64) -> f64 {
        match self {
            Self::Linear => gamma::linear(v),
            Self::Gamma(g) => gamma::gamma_eotf(v, *g),
            Self::PowerLaw(p) => p.decode(v),
            Self::Pq => pq::eotf(v),
            Self::Hlg => hlg::eotf(v),
        }
    }

    /// Encodes an RGB triplet.
    #[inline]
    pub fn encode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.encode(c))
    }

    /// Decodes an RGB triplet.
    #[inline]
    pub fn decode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.decode(c))
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Gamma(g) => write!(f, "gamma {}", g),
            Self::PowerLaw(p) if *p == POWER_SRGB => f.write_str("sRGB"),
            Self::PowerLaw(p) if *p == POWER_BT709 => f.write_str("BT.709"),
            Self::PowerLaw(p) => write!(
                f,
                "power law (threshold {}, slope {}, exponent {}, offset {})",
                p.threshold, p.slope, p.exponent, p.offset
            ),
            Self::Pq => f.write_str("PQ"),
            Self::Hlg => f.write_str("HLG"),
        }
    }
}
