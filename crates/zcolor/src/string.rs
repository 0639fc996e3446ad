//! Text forms of each color format, as typed into editor inputs.
//!
//! Parsing is lenient. Numbers are pulled out of the text wherever they
//! appear, so `"180°, 50%, 75%"`, `"180 50 75"` and `"h=180 s=50 v=75"`
//! all read the same. A component that is missing reads as 0.

use std::sync::OnceLock;

use regex::Regex;

use crate::unified::{clamp_hsv, color_from_hsv};
use crate::{
    AnyColor, ColorFormat, Gamut, HexColor, RgbColor, XyColor, ZigbeeColor, ZigbeeColorString,
    clamp_rgb, convert_to_color,
};

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-+]?\d*\.?\d+").expect("valid number regex"))
}

/// Every number in `text`, in order. Fragments that do not parse are skipped.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    number_regex()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

fn first_three(text: &str) -> [f64; 3] {
    let nums = extract_numbers(text);
    std::array::from_fn(|i| nums.get(i).copied().unwrap_or(0.0))
}

/// Formats `[x, y, Y]` with three decimals.
///
/// ```rust
/// use zcolor::convert_xyy_to_string;
///
/// assert_eq!(convert_xyy_to_string([0.1234, 0.5678, 0.9]), "0.123, 0.568, 0.900");
/// ```
pub fn convert_xyy_to_string(xyy: [f64; 3]) -> String {
    format!("{:.3}, {:.3}, {:.3}", xyy[0], xyy[1], xyy[2])
}

/// Formats `[hue, saturation, value]` as `H°, S%, V%` with two decimals.
pub fn convert_hsv_to_string(hsv: [f64; 3]) -> String {
    format!("{:.2}°, {:.2}%, {:.2}%", hsv[0], hsv[1], hsv[2])
}

/// Formats RGB as rounded integers.
pub fn convert_rgb_to_string(rgb: [f64; 3]) -> String {
    let [r, g, b] = clamp_rgb(rgb).map(|c| c.round() as i64);
    format!("{r}, {g}, {b}")
}

/// Lower-cases a hex color and makes sure it starts with `#`.
pub fn convert_hex_to_string(hex: &str) -> String {
    let hex = hex.trim().to_ascii_lowercase();
    if hex.starts_with('#') {
        hex
    } else {
        format!("#{hex}")
    }
}

/// Reads `x, y, Y`. Values are not range checked.
pub fn convert_string_to_xyy(text: &str) -> [f64; 3] {
    first_three(text)
}

/// Reads `H, S, V`, clamping hue to [0, 360] and S, V to [0, 100].
///
/// ```rust
/// use zcolor::convert_string_to_hsv;
///
/// assert_eq!(convert_string_to_hsv("400°, 50%, -3%"), [360.0, 50.0, 0.0]);
/// ```
pub fn convert_string_to_hsv(text: &str) -> [f64; 3] {
    clamp_hsv(first_three(text))
}

/// Reads `r, g, b`, clamping each channel to [0, 255].
pub fn convert_string_to_rgb(text: &str) -> [f64; 3] {
    clamp_rgb(first_three(text))
}

/// Hex text is taken as is.
pub fn convert_string_to_hex(text: &str) -> String {
    text.to_string()
}

/// Renders every representation of `color` as text.
pub fn convert_color_to_string(color: &ZigbeeColor) -> ZigbeeColorString {
    ZigbeeColorString {
        color_rgb: convert_rgb_to_string(color.color_rgb),
        color_hs: convert_hsv_to_string(color.color_hs),
        color_xy: convert_xyy_to_string(color.color_xy),
        hex: convert_hex_to_string(&color.hex),
    }
}

/// Parses `text` as `format` and converts it to all representations.
///
/// For `color_xy` a missing third number means "brightest displayable";
/// for `color_hs` the value component is honored when present.
///
/// ```rust
/// use zcolor::{ColorFormat, Gamut, GamutRegistry, convert_string_to_color};
///
/// let registry = GamutRegistry::standard();
/// let gamut = Gamut::default_of(&registry);
///
/// let color = convert_string_to_color("255, 0, 0", ColorFormat::Rgb, &gamut);
/// assert_eq!(color.hex, "#ff0000");
/// ```
pub fn convert_string_to_color(text: &str, format: ColorFormat, gamut: &Gamut) -> ZigbeeColor {
    match format {
        ColorFormat::Xy => {
            let nums = extract_numbers(text);
            let x = nums.first().copied().unwrap_or(0.0);
            let y = nums.get(1).copied().unwrap_or(0.0);
            let source = match nums.get(2) {
                Some(&lum) => XyColor::with_luminance(x, y, lum),
                None => XyColor::new(x, y),
            };
            convert_to_color(&AnyColor::Xy(source), gamut)
        }
        ColorFormat::Hs => {
            let nums = extract_numbers(text);
            let component = |i: usize, default: f64| nums.get(i).copied().unwrap_or(default);
            color_from_hsv([component(0, 0.0), component(1, 0.0), component(2, 100.0)], gamut)
        }
        ColorFormat::Rgb => {
            let [r, g, b] = convert_string_to_rgb(text);
            convert_to_color(&AnyColor::Rgb(RgbColor::new(r, g, b)), gamut)
        }
        ColorFormat::Hex => {
            let hex = convert_string_to_hex(text);
            convert_to_color(&AnyColor::Hex(HexColor::new(hex)), gamut)
        }
    }
}
