//! Format-to-format conversion.
//!
//! [`convert_to_color`] takes a color in any one format and derives the
//! other three; [`convert_from_color`] projects a [`ZigbeeColor`] back to
//! the single-format payload a device is sent.
//!
//! Conversion never fails. Input that cannot be converted yields a
//! defined color (white for unknown formats and broken payloads, white
//! for `y = 0` chromaticity); [`convert_to_color_checked`] reports
//! when that happened.

use std::fmt;

use tracing::trace;

use crate::convert::{
    clamp_rgb, convert_hex_to_rgb, convert_hsv_to_rgb, convert_rgb_to_hex, convert_rgb_to_hsv,
    convert_rgb_to_xyy, convert_xy_to_rgb, max_luminance,
};
use crate::{
    AnyColor, ColorFormat, Gamut, HexColor, HsColor, RgbColor, XyColor, ZigbeeColor,
};

/// Why a conversion substituted a default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The format key was not recognised.
    UnknownFormat,
    /// The payload did not have the shape of its format.
    InvalidPayload,
    /// The chromaticity had `y <= 0` or was not finite.
    DegenerateChromaticity,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownFormat => "unknown format",
            Self::InvalidPayload => "invalid payload",
            Self::DegenerateChromaticity => "degenerate chromaticity",
        })
    }
}

/// A conversion result with its fallback diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    /// The converted color.
    pub color: ZigbeeColor,
    /// Set when `color` is a default rather than the input.
    pub fallback: Option<Fallback>,
}

impl Converted {
    fn exact(color: ZigbeeColor) -> Self {
        Self {
            color,
            fallback: None,
        }
    }

    fn fallback(color: ZigbeeColor, reason: Fallback) -> Self {
        trace!(%reason, hex = %color.hex, "color conversion fell back to default");
        Self {
            color,
            fallback: Some(reason),
        }
    }
}

/// Derives all four representations from an RGB triplet in [0, 255].
pub fn color_from_rgb(rgb: [f64; 3], gamut: &Gamut) -> ZigbeeColor {
    let [r, g, b] = clamp_rgb(rgb);
    ZigbeeColor {
        color_rgb: [r, g, b],
        color_hs: convert_rgb_to_hsv(r, g, b),
        color_xy: convert_rgb_to_xyy(r, g, b, gamut),
        hex: convert_rgb_to_hex(r, g, b),
    }
}

/// Derives all four representations from `[hue, saturation, value]`.
///
/// The HSV triplet is kept as given (after clamping) instead of being
/// recomputed from the RGB, so the hue of gray input survives.
pub fn color_from_hsv(hsv: [f64; 3], gamut: &Gamut) -> ZigbeeColor {
    let hsv = clamp_hsv(hsv);
    let rgb = convert_hsv_to_rgb(hsv[0], hsv[1], hsv[2]);
    ZigbeeColor {
        color_hs: hsv,
        ..color_from_rgb(rgb, gamut)
    }
}

/// White in `gamut`, used as the default color.
pub fn default_color(gamut: &Gamut) -> ZigbeeColor {
    color_from_rgb([255.0; 3], gamut)
}

pub(crate) fn clamp_hsv(hsv: [f64; 3]) -> [f64; 3] {
    let clamp = |v: f64, max: f64| if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
    [clamp(hsv[0], 360.0), clamp(hsv[1], 100.0), clamp(hsv[2], 100.0)]
}

fn or_default(v: Option<f64>, default: f64) -> f64 {
    v.filter(|v| v.is_finite()).unwrap_or(default)
}

/// Converts a single-format color into a [`ZigbeeColor`], reporting fallbacks.
pub fn convert_to_color_checked(source: &AnyColor, gamut: &Gamut) -> Converted {
    match source {
        AnyColor::Rgb(c) => Converted::exact(color_from_rgb(
            [
                or_default(c.r, 255.0),
                or_default(c.g, 255.0),
                or_default(c.b, 255.0),
            ],
            gamut,
        )),
        AnyColor::Hs(c) => Converted::exact(color_from_hsv(
            [or_default(c.hue, 0.0), or_default(c.saturation, 0.0), 100.0],
            gamut,
        )),
        AnyColor::Xy(c) => {
            let (wx, wy) = gamut.white();
            let x = c.x.unwrap_or(wx);
            let y = c.y.unwrap_or(wy);
            // A non-finite luminance counts as missing
            let given = c.luminance.filter(|l| l.is_finite());
            if !x.is_finite() || !y.is_finite() || y <= 0.0 {
                let color = ZigbeeColor {
                    color_xy: [x, y, given.unwrap_or(0.0)],
                    ..default_color(gamut)
                };
                return Converted::fallback(color, Fallback::DegenerateChromaticity);
            }

            let lum = given.unwrap_or_else(|| max_luminance(x, y, gamut));
            let rgb = convert_xy_to_rgb(x, y, Some(lum), gamut);
            Converted::exact(ZigbeeColor {
                color_xy: [x, y, lum],
                ..color_from_rgb(rgb, gamut)
            })
        }
        AnyColor::Hex(c) => {
            let rgb = c.hex.as_deref().map_or([255.0; 3], convert_hex_to_rgb);
            Converted::exact(color_from_rgb(rgb, gamut))
        }
    }
}

/// Converts a single-format color into a [`ZigbeeColor`].
///
/// Missing sub-fields take defaults: RGB channels 255, hue and
/// saturation 0 (value 100), xy the gamut's white point, hex white.
///
/// # Example
///
/// ```rust
/// use zcolor::{AnyColor, Gamut, GamutRegistry, RgbColor, convert_to_color};
///
/// let registry = GamutRegistry::standard();
/// let gamut = Gamut::resolve(&registry, "srgb").unwrap();
///
/// let color = convert_to_color(&AnyColor::Rgb(RgbColor::new(255.0, 0.0, 0.0)), &gamut);
/// assert_eq!(color.hex, "#ff0000");
/// assert_eq!(color.color_hs, [0.0, 100.0, 100.0]);
/// assert!((color.color_xy[0] - 0.64).abs() < 1e-6);
/// ```
pub fn convert_to_color(source: &AnyColor, gamut: &Gamut) -> ZigbeeColor {
    convert_to_color_checked(source, gamut).color
}

/// Converts an untagged JSON payload named by a format key.
///
/// Unknown formats and malformed payloads produce white, with the
/// reason in [`Converted::fallback`].
///
/// ```rust
/// use serde_json::json;
/// use zcolor::{Fallback, Gamut, GamutRegistry, convert_value_to_color};
///
/// let registry = GamutRegistry::standard();
/// let gamut = Gamut::default_of(&registry);
///
/// let c = convert_value_to_color("color_temp", &json!(300), &gamut);
/// assert_eq!(c.fallback, Some(Fallback::UnknownFormat));
/// assert_eq!(c.color.hex, "#ffffff");
/// ```
pub fn convert_value_to_color(format: &str, value: &serde_json::Value, gamut: &Gamut) -> Converted {
    let Ok(format) = format.parse::<ColorFormat>() else {
        return Converted::fallback(default_color(gamut), Fallback::UnknownFormat);
    };
    match AnyColor::from_json(format, value) {
        Ok(source) => convert_to_color_checked(&source, gamut),
        Err(_) => Converted::fallback(default_color(gamut), Fallback::InvalidPayload),
    }
}

/// Projects one representation of `color` as a device payload.
///
/// RGB is rounded to integers, `color_hs` drops the value component and
/// `color_xy` drops the luminance.
pub fn convert_from_color(color: &ZigbeeColor, target: ColorFormat) -> AnyColor {
    match target {
        ColorFormat::Rgb => {
            let [r, g, b] = color.color_rgb.map(f64::round);
            AnyColor::Rgb(RgbColor::new(r, g, b))
        }
        ColorFormat::Hs => AnyColor::Hs(HsColor::new(color.color_hs[0], color.color_hs[1])),
        ColorFormat::Xy => AnyColor::Xy(XyColor::new(color.color_xy[0], color.color_xy[1])),
        ColorFormat::Hex => AnyColor::Hex(HexColor::new(color.hex.as_str())),
    }
}

/// Like [`convert_from_color`], but `color_xy` keeps the luminance.
pub fn convert_from_color_with_luminance(color: &ZigbeeColor, target: ColorFormat) -> AnyColor {
    match target {
        ColorFormat::Xy => {
            let [x, y, lum] = color.color_xy;
            AnyColor::Xy(XyColor::with_luminance(x, y, lum))
        }
        _ => convert_from_color(color, target),
    }
}

/// [`convert_from_color`] as an untagged JSON payload.
pub fn convert_from_color_json(
    color: &ZigbeeColor,
    target: ColorFormat,
) -> crate::ColorResult<serde_json::Value> {
    convert_from_color(color, target).to_json()
}
