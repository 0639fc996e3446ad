//! Color value types exchanged with editors and devices.
//!
//! - [`ZigbeeColor`]: one color in all four representations, derived
//!   together by [`convert_to_color`](crate::convert_to_color).
//! - [`AnyColor`]: a color in exactly one format, as a device reports it or
//!   an editor submits it. Sub-fields are optional; missing ones take
//!   defaults during conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ColorError, ColorResult};

/// The four color formats a light can be driven with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// RGB triplet, `color_rgb`.
    #[serde(rename = "color_rgb")]
    Rgb,
    /// Hue/saturation, `color_hs`.
    #[serde(rename = "color_hs")]
    Hs,
    /// CIE xy chromaticity, `color_xy`.
    #[serde(rename = "color_xy")]
    Xy,
    /// `#rrggbb`, `hex`.
    #[serde(rename = "hex")]
    Hex,
}

impl ColorFormat {
    /// Every format, in display order.
    pub const ALL: [Self; 4] = [Self::Xy, Self::Hs, Self::Rgb, Self::Hex];

    /// Wire key of the format.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rgb => "color_rgb",
            Self::Hs => "color_hs",
            Self::Xy => "color_xy",
            Self::Hex => "hex",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    /// Accepts the wire keys and the short names `rgb`, `hs`, `hsv`, `xy`, `xyy`.
    fn from_str(s: &str) -> ColorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color_rgb" | "rgb" => Ok(Self::Rgb),
            "color_hs" | "hs" | "hsv" => Ok(Self::Hs),
            "color_xy" | "xy" | "xyy" => Ok(Self::Xy),
            "hex" => Ok(Self::Hex),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

/// RGB channels in [0, 255]. Missing channels default to 255.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RgbColor {
    /// Red.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    /// Green.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub g: Option<f64>,
    /// Blue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

impl RgbColor {
    /// Fully specified RGB.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
        }
    }
}

/// Hue in degrees and saturation in percent. Missing fields default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HsColor {
    /// Hue, [0, 360].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    /// Saturation, [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
}

impl HsColor {
    /// Fully specified hue/saturation.
    pub const fn new(hue: f64, saturation: f64) -> Self {
        Self {
            hue: Some(hue),
            saturation: Some(saturation),
        }
    }
}

/// CIE xy chromaticity with optional luminance `Y`.
///
/// Missing `x`/`y` default to the gamut's white point. Without `Y` the
/// brightest displayable luminance for the chromaticity is used.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct XyColor {
    /// x chromaticity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// y chromaticity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Luminance.
    #[serde(rename = "Y", skip_serializing_if = "Option::is_none")]
    pub luminance: Option<f64>,
}

impl XyColor {
    /// Chromaticity only.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            luminance: None,
        }
    }

    /// Chromaticity and luminance.
    pub const fn with_luminance(x: f64, y: f64, luminance: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            luminance: Some(luminance),
        }
    }
}

/// `#rrggbb`. A missing value reads as white.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HexColor {
    /// Hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl HexColor {
    /// Hex from a string.
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: Some(hex.into()),
        }
    }
}

/// A color in exactly one format.
///
/// Serializes externally tagged by the format key:
/// `{"color_xy": {"x": 0.3, "y": 0.3}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyColor {
    /// RGB.
    #[serde(rename = "color_rgb")]
    Rgb(RgbColor),
    /// Hue/saturation.
    #[serde(rename = "color_hs")]
    Hs(HsColor),
    /// xy(Y).
    #[serde(rename = "color_xy")]
    Xy(XyColor),
    /// Hex.
    #[serde(rename = "hex")]
    Hex(HexColor),
}

impl AnyColor {
    /// Format tag of this color.
    pub fn format(&self) -> ColorFormat {
        match self {
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Hs(_) => ColorFormat::Hs,
            Self::Xy(_) => ColorFormat::Xy,
            Self::Hex(_) => ColorFormat::Hex,
        }
    }

    /// Reads an untagged device payload as `format`.
    ///
    /// Objects may omit fields. A hex payload may also be a bare string.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use zcolor::{AnyColor, ColorFormat, XyColor};
    ///
    /// let c = AnyColor::from_json(ColorFormat::Xy, &json!({"x": 0.3})).unwrap();
    /// assert_eq!(c, AnyColor::Xy(XyColor { x: Some(0.3), ..Default::default() }));
    /// ```
    pub fn from_json(format: ColorFormat, value: &serde_json::Value) -> ColorResult<Self> {
        let invalid = |reason: String| ColorError::InvalidPayload {
            format: format.key(),
            reason,
        };

        if let (ColorFormat::Hex, serde_json::Value::String(s)) = (format, value) {
            return Ok(Self::Hex(HexColor::new(s.as_str())));
        }
        if !value.is_object() {
            return Err(invalid(format!("expected an object, got {}", value)));
        }

        let parsed = match format {
            ColorFormat::Rgb => serde_json::from_value(value.clone()).map(Self::Rgb),
            ColorFormat::Hs => serde_json::from_value(value.clone()).map(Self::Hs),
            ColorFormat::Xy => serde_json::from_value(value.clone()).map(Self::Xy),
            ColorFormat::Hex => serde_json::from_value(value.clone()).map(Self::Hex),
        };
        parsed.map_err(|e| invalid(e.to_string()))
    }

    /// The untagged payload, as a device expects it.
    pub fn to_json(&self) -> ColorResult<serde_json::Value> {
        let value = match self {
            Self::Rgb(c) => serde_json::to_value(c)?,
            Self::Hs(c) => serde_json::to_value(c)?,
            Self::Xy(c) => serde_json::to_value(c)?,
            Self::Hex(c) => serde_json::to_value(c)?,
        };
        Ok(value)
    }
}

/// One color in all four representations.
///
/// The fields agree with each other as of the conversion that produced
/// the value. Editing one field alone breaks that; re-derive through
/// [`convert_to_color`](crate::convert_to_color) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZigbeeColor {
    /// `[r, g, b]`, each in [0, 255].
    pub color_rgb: [f64; 3],
    /// `[hue, saturation, value]`: [0, 360], [0, 100], [0, 100].
    pub color_hs: [f64; 3],
    /// `[x, y, Y]`.
    pub color_xy: [f64; 3],
    /// `#rrggbb`.
    pub hex: String,
}

/// [`ZigbeeColor`] rendered for text inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZigbeeColorString {
    /// `"r, g, b"` as integers.
    pub color_rgb: String,
    /// `"H°, S%, V%"` with two decimals.
    pub color_hs: String,
    /// `"x, y, Y"` with three decimals.
    pub color_xy: String,
    /// `#rrggbb`.
    pub hex: String,
}

impl ZigbeeColorString {
    /// The text of one format.
    pub fn get(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Rgb => &self.color_rgb,
            ColorFormat::Hs => &self.color_hs,
            ColorFormat::Xy => &self.color_xy,
            ColorFormat::Hex => &self.hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_parse() {
        assert_eq!("color_xy".parse::<ColorFormat>().unwrap(), ColorFormat::Xy);
        assert_eq!("HSV".parse::<ColorFormat>().unwrap(), ColorFormat::Hs);
        assert_eq!(" rgb ".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        assert!(matches!(
            "color_temp".parse::<ColorFormat>(),
            Err(ColorError::UnknownFormat(ref s)) if s == "color_temp"
        ));
        for format in ColorFormat::ALL {
            assert_eq!(format.key().parse::<ColorFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_partial_payloads() {
        let c = AnyColor::from_json(ColorFormat::Hs, &json!({"hue": 120})).unwrap();
        assert_eq!(c, AnyColor::Hs(HsColor { hue: Some(120.0), saturation: None }));

        let c = AnyColor::from_json(ColorFormat::Rgb, &json!({})).unwrap();
        assert_eq!(c, AnyColor::Rgb(RgbColor::default()));

        let c = AnyColor::from_json(ColorFormat::Xy, &json!({"x": 0.1, "y": 0.2, "Y": 0.5})).unwrap();
        assert_eq!(c, AnyColor::Xy(XyColor::with_luminance(0.1, 0.2, 0.5)));
    }

    #[test]
    fn test_hex_payloads() {
        let bare = AnyColor::from_json(ColorFormat::Hex, &json!("#ff0000")).unwrap();
        let object = AnyColor::from_json(ColorFormat::Hex, &json!({"hex": "#ff0000"})).unwrap();
        assert_eq!(bare, object);
    }

    #[test]
    fn test_invalid_payloads() {
        let err = AnyColor::from_json(ColorFormat::Xy, &json!([0.1, 0.2])).unwrap_err();
        assert!(matches!(err, ColorError::InvalidPayload { format: "color_xy", .. }));

        let err = AnyColor::from_json(ColorFormat::Rgb, &json!({"r": "red"})).unwrap_err();
        assert!(matches!(err, ColorError::InvalidPayload { format: "color_rgb", .. }));
    }

    #[test]
    fn test_to_json_is_untagged() {
        let xy = AnyColor::Xy(XyColor::new(0.3, 0.4));
        assert_eq!(xy.to_json().unwrap(), json!({"x": 0.3, "y": 0.4}));

        let hs = AnyColor::Hs(HsColor::new(10.0, 20.0));
        assert_eq!(hs.to_json().unwrap(), json!({"hue": 10.0, "saturation": 20.0}));
    }

    #[test]
    fn test_tagged_serde() {
        let c = AnyColor::Xy(XyColor::with_luminance(0.3, 0.4, 1.0));
        let text = serde_json::to_string(&c).unwrap();
        assert_eq!(text, r#"{"color_xy":{"x":0.3,"y":0.4,"Y":1.0}}"#);
        assert_eq!(serde_json::from_str::<AnyColor>(&text).unwrap(), c);
    }

    #[test]
    fn test_color_string_get() {
        let s = ZigbeeColorString {
            color_rgb: "1, 2, 3".into(),
            color_hs: "h".into(),
            color_xy: "xy".into(),
            hex: "#010203".into(),
        };
        assert_eq!(s.get(ColorFormat::Rgb), "1, 2, 3");
        assert_eq!(s.get(ColorFormat::Hex), "#010203");
    }
}
