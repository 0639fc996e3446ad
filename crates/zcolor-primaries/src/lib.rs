//! # zcolor-primaries
//!
//! Color spaces, RGB-XYZ matrix generation and the gamut registry.
//!
//! A [`ColorSpace`] is a fixed description of what a device can reproduce:
//! three primaries and a white point as CIE xy chromaticities, plus the
//! [`TransferFunction`] the device encodes with. From the chromaticities
//! [`rgb_to_xyz_matrix`] derives the linear RGB -> XYZ transform.
//!
//! # Included Color Spaces
//!
//! | Key | Primaries | Transfer | White |
//! |-----|-----------|----------|-------|
//! | `cie1931` | CIE 1931 RGB | sRGB | D65 |
//! | `srgb` | Rec.709 | sRGB | D65 |
//! | `rec709` | Rec.709 | BT.709 | D65 |
//! | `rec2020` | Rec.2020 | BT.709 | D65 |
//! | `rec2100_pq` | Rec.2020 | PQ | D65 |
//! | `rec2100_hlg` | Rec.2020 | HLG | D65 |
//! | `display_p3` | P3 | sRGB | D65 |
//! | `hue_gamut_a` / `_c` | Philips Hue | sRGB | D65 |
//! | `hue_gamut_b` | Philips Hue | sRGB | E |
//!
//! # Usage
//!
//! ```rust
//! use zcolor_primaries::{GamutRegistry, SRGB};
//! use zcolor_math::Vec3;
//!
//! let registry = GamutRegistry::standard();
//! let space = registry.get("srgb").unwrap();
//! assert_eq!(space, &SRGB);
//!
//! let m = registry.matrices(space);
//! let white = m.to_xyz * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `zcolor` - conversions parameterized by a gamut

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod registry;

pub use cache::{MatrixCache, RgbXyzMatrices};
pub use registry::{DEFAULT_GAMUT, GamutRegistry, normalize_key};

use zcolor_math::{Mat3, Vec3};
pub use zcolor_transfer::TransferFunction;

/// A device color space.
///
/// Defines a gamut by its three primaries and white point, all as CIE xy
/// chromaticity coordinates, and pairs it with a transfer function.
/// Color spaces are static constants; derived matrices are cached by
/// [`ColorSpace::name`] in a [`MatrixCache`].
///
/// # Example
///
/// ```rust
/// use zcolor_primaries::{ColorSpace, TransferFunction, D65_XY};
///
/// let lamp = ColorSpace {
///     name: "Custom lamp",
///     red: (0.68, 0.31),
///     green: (0.17, 0.70),
///     blue: (0.15, 0.05),
///     white: D65_XY,
///     transfer: TransferFunction::SRGB,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpace {
    /// Display name, also the matrix cache key.
    pub name: &'static str,
    /// Red primary (x, y) chromaticity
    pub red: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub green: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub blue: (f64, f64),
    /// White point (x, y) chromaticity
    pub white: (f64, f64),
    /// Encoding used by the device.
    pub transfer: TransferFunction,
}

impl ColorSpace {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.white.0, self.white.1)
    }

    /// Primaries in R, G, B order.
    #[inline]
    pub fn primaries(&self) -> [(f64, f64); 3] {
        [self.red, self.green, self.blue]
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// Equal-energy white point chromaticity (illuminant E).
pub const E_XY: (f64, f64) = (1.0 / 3.0, 1.0 / 3.0);

// ============================================================================
// Color Spaces
// ============================================================================

/// CIE 1931 RGB primaries with a D65 white.
///
/// The generic gamut used when a device does not advertise its own.
pub const CIE1931: ColorSpace = ColorSpace {
    name: "CIE 1931",
    red: (0.7347, 0.2653),
    green: (0.2738, 0.7174),
    blue: (0.1666, 0.0089),
    white: D65_XY,
    transfer: TransferFunction::SRGB,
};

/// sRGB (Rec.709 primaries, sRGB curve).
pub const SRGB: ColorSpace = ColorSpace {
    name: "sRGB",
    red: (0.6400, 0.3300),
    green: (0.3000, 0.6000),
    blue: (0.1500, 0.0600),
    white: D65_XY,
    transfer: TransferFunction::SRGB,
};

/// Rec.709 (BT.709 curve).
pub const REC709: ColorSpace = ColorSpace {
    name: "Rec.709",
    transfer: TransferFunction::BT709,
    ..SRGB
};

/// Rec.2020 (BT.2020 primaries, BT.709-style curve).
pub const REC2020: ColorSpace = ColorSpace {
    name: "Rec.2020",
    red: (0.7080, 0.2920),
    green: (0.1700, 0.7970),
    blue: (0.1310, 0.0460),
    white: D65_XY,
    transfer: TransferFunction::BT709,
};

/// Rec.2100 with the PQ curve.
pub const REC2100_PQ: ColorSpace = ColorSpace {
    name: "Rec.2100 PQ",
    transfer: TransferFunction::Pq,
    ..REC2020
};

/// Rec.2100 with the HLG curve.
pub const REC2100_HLG: ColorSpace = ColorSpace {
    name: "Rec.2100 HLG",
    transfer: TransferFunction::Hlg,
    ..REC2020
};

/// Display P3 (P3 primaries, D65, sRGB curve).
pub const DISPLAY_P3: ColorSpace = ColorSpace {
    name: "Display P3",
    red: (0.6800, 0.3200),
    green: (0.2650, 0.6900),
    blue: (0.1500, 0.0600),
    white: D65_XY,
    transfer: TransferFunction::SRGB,
};

/// Philips Hue gamut A (LivingColors, early Bloom/Iris).
pub const HUE_GAMUT_A: ColorSpace = ColorSpace {
    name: "Hue Gamut A",
    red: (0.7040, 0.2960),
    green: (0.2151, 0.7106),
    blue: (0.1380, 0.0800),
    white: D65_XY,
    transfer: TransferFunction::SRGB,
};

/// Philips Hue gamut B (first generation bulbs).
///
/// D65 falls just outside this triangle (left of the green-blue edge),
/// which would give red a negative luminance. The equal-energy white is
/// inside it.
pub const HUE_GAMUT_B: ColorSpace = ColorSpace {
    name: "Hue Gamut B",
    red: (0.6750, 0.3220),
    green: (0.4090, 0.5180),
    blue: (0.1670, 0.0400),
    white: E_XY,
    transfer: TransferFunction::SRGB,
};

/// Philips Hue gamut C (current bulbs and strips).
pub const HUE_GAMUT_C: ColorSpace = ColorSpace {
    name: "Hue Gamut C",
    red: (0.6915, 0.3083),
    green: (0.1700, 0.7000),
    blue: (0.1532, 0.0475),
    white: D65_XY,
    transfer: TransferFunction::SRGB,
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ with Y=1.
///
/// `y = 0` yields non-finite components; the matrix builder turns those
/// into a zero matrix.
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
}

/// Computes the linear RGB to XYZ matrix for a color space.
///
/// # Algorithm
///
/// 1. Convert the primaries' and white's xy chromaticities to XYZ (Y=1)
/// 2. Solve `P * S = W` for the per-channel scale `S`
/// 3. Scale each primary column by its factor
///
/// Degenerate primaries (collinear, zero `y`) produce [`Mat3::ZERO`].
///
/// # Example
///
/// ```rust
/// use zcolor_primaries::{SRGB, rgb_to_xyz_matrix};
///
/// let m = rgb_to_xyz_matrix(&SRGB);
/// assert!((m.m[0][0] - 0.4124564).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz_matrix(space: &ColorSpace) -> Mat3 {
    let r_xyz = xy_to_xyz(space.red.0, space.red.1);
    let g_xyz = xy_to_xyz(space.green.0, space.green.1);
    let b_xyz = xy_to_xyz(space.blue.0, space.blue.1);
    let w_xyz = space.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse_or_zero() * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z).sanitized()
}

/// Computes the XYZ to linear RGB matrix for a color space.
///
/// This is the inverse of [`rgb_to_xyz_matrix`], or [`Mat3::ZERO`].
pub fn xyz_to_rgb_matrix(space: &ColorSpace) -> Mat3 {
    rgb_to_xyz_matrix(space).inverse_or_zero()
}
