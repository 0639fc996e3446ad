//! Core conversions between RGB, XYZ, xyY, HSV and hex.
//!
//! Application-facing units throughout:
//!
//! | Format | Components | Range |
//! |--------|------------|-------|
//! | RGB | r, g, b | [0, 255], encoded by the gamut's transfer function |
//! | XYZ | X, Y, Z | linear, white has Y = 1 |
//! | xyY | x, y chromaticity, Y luminance | x, y in [0, 1] |
//! | HSV | hue, saturation, value | [0, 360), [0, 100], [0, 100] |
//! | Hex | `#rrggbb` | lower case |
//!
//! None of these functions fail. Degenerate input has a defined answer:
//! black chromaticity reports the white point, `y <= 0` or NaN
//! chromaticity produces black, unparsable hex digits read as 0.

use tracing::trace;
use zcolor_math::Vec3;

use crate::{ColorError, ColorResult, Gamut};

/// RGB channels below this are treated as black when computing chromaticity.
pub const BLACK_EPSILON: f64 = 1e-12;

/// Iterations of the maximum luminance search in [`max_luminance`].
pub const MAX_LUMINANCE_ITERATIONS: usize = 10;

// ============================================================================
// RGB <-> XYZ
// ============================================================================

/// Converts RGB in [0, 255] to XYZ.
///
/// Each channel is decoded with the gamut's transfer function, then
/// transformed by the RGB -> XYZ matrix.
pub fn convert_rgb_to_xyz(r: f64, g: f64, b: f64, gamut: &Gamut) -> [f64; 3] {
    let tf = gamut.space.transfer;
    let linear = Vec3::new(r, g, b).map(|c| tf.decode(c / 255.0));
    (gamut.matrices.to_xyz * linear).to_array()
}

/// Converts XYZ to encoded RGB in [0, 1].
///
/// The result is not clamped or scaled; multiply by 255 and clamp for
/// display.
pub fn convert_xyz_to_rgb(x: f64, y: f64, z: f64, gamut: &Gamut) -> [f64; 3] {
    let tf = gamut.space.transfer;
    (gamut.matrices.to_rgb * Vec3::new(x, y, z))
        .map(|c| tf.encode(c))
        .to_array()
}

// ============================================================================
// XYZ <-> xyY
// ============================================================================

/// Projects XYZ to xyY.
///
/// When `X + Y + Z` is zero or not finite the chromaticity is undefined
/// and `white` is reported instead.
pub fn convert_xyz_to_xyy(xyz: [f64; 3], white: (f64, f64)) -> [f64; 3] {
    let v = Vec3::from_array(xyz);
    let (x, y) = (v.x, v.y);
    let sum = v.sum();
    if !sum.is_finite() || sum.abs() < BLACK_EPSILON {
        let lum = if y.is_finite() { y } else { 0.0 };
        return [white.0, white.1, lum];
    }
    [x / sum, y / sum, y]
}

/// Expands xyY to XYZ. `y <= 0` maps to zero.
pub fn convert_xyy_to_xyz(x: f64, y: f64, lum: f64) -> [f64; 3] {
    if !(y > 0.0) {
        return [0.0; 3];
    }
    let scale = lum / y;
    [x * scale, lum, (1.0 - x - y) * scale]
}

// ============================================================================
// RGB <-> xyY
// ============================================================================

/// Converts RGB in [0, 255] to `[x, y, Y]`.
///
/// Black has no chromaticity, so for black input the chromaticity of
/// RGB white (the gamut's white point) is returned with `Y = 0`.
///
/// # Example
///
/// ```rust
/// use zcolor::{Gamut, GamutRegistry, convert_rgb_to_xyy};
///
/// let registry = GamutRegistry::standard();
/// let gamut = Gamut::resolve(&registry, "srgb").unwrap();
///
/// let [x, y, lum] = convert_rgb_to_xyy(255.0, 0.0, 0.0, &gamut);
/// assert!((x - 0.64).abs() < 1e-6 && (y - 0.33).abs() < 1e-6);
/// assert!((lum - 0.2126).abs() < 1e-3);
///
/// let [x, y, lum] = convert_rgb_to_xyy(0.0, 0.0, 0.0, &gamut);
/// assert!((x - 0.3127).abs() < 1e-9 && (y - 0.329).abs() < 1e-9);
/// assert_eq!(lum, 0.0);
/// ```
pub fn convert_rgb_to_xyy(r: f64, g: f64, b: f64, gamut: &Gamut) -> [f64; 3] {
    if r < BLACK_EPSILON && g < BLACK_EPSILON && b < BLACK_EPSILON {
        let white = convert_rgb_to_xyz(255.0, 255.0, 255.0, gamut);
        let [x, y, _] = convert_xyz_to_xyy(white, gamut.white());
        return [x, y, 0.0];
    }
    convert_xyz_to_xyy(convert_rgb_to_xyz(r, g, b, gamut), gamut.white())
}

/// Encoded RGB in [0, 1], unclamped, for a chromaticity and luminance.
fn xyy_to_encoded(x: f64, y: f64, lum: f64, gamut: &Gamut) -> Vec3 {
    let [cx, cy, cz] = convert_xyy_to_xyz(x, y, lum);
    Vec3::from_array(convert_xyz_to_rgb(cx, cy, cz, gamut))
}

/// Largest luminance at which `(x, y)` is displayable without clipping.
///
/// Starts at `Y = 1` and divides by the largest encoded channel for a
/// fixed [`MAX_LUMINANCE_ITERATIONS`] rounds, converging on the luminance
/// where the brightest channel is exactly 1. Returns 0 if a round
/// produces no positive, finite channel.
pub fn max_luminance(x: f64, y: f64, gamut: &Gamut) -> f64 {
    let mut bri = 1.0;
    for _ in 0..MAX_LUMINANCE_ITERATIONS {
        let rgb = xyy_to_encoded(x, y, bri, gamut);
        let max = rgb.max_element();
        if !rgb.is_finite() || !(max > 0.0) {
            trace!(x, y, "chromaticity not displayable");
            return 0.0;
        }
        bri /= max;
    }
    bri
}

/// Converts a chromaticity to RGB in [0, 255].
///
/// With `lum = None` the brightest displayable luminance for `(x, y)` is
/// used (see [`max_luminance`]). Non-finite input or `y <= 0` yields
/// black. Channels are clamped to [0, 255] but not rounded.
///
/// # Example
///
/// ```rust
/// use zcolor::{Gamut, GamutRegistry, convert_xy_to_rgb};
///
/// let registry = GamutRegistry::standard();
/// let gamut = Gamut::resolve(&registry, "srgb").unwrap();
///
/// let [r, g, b] = convert_xy_to_rgb(0.3127, 0.329, None, &gamut);
/// assert!(r > 254.0 && g > 254.0 && b > 254.0);
/// assert_eq!(convert_xy_to_rgb(0.3, 0.0, Some(1.0), &gamut), [0.0; 3]);
/// ```
pub fn convert_xy_to_rgb(x: f64, y: f64, lum: Option<f64>, gamut: &Gamut) -> [f64; 3] {
    if !x.is_finite() || !y.is_finite() || y <= 0.0 {
        return [0.0; 3];
    }
    let lum = match lum {
        Some(l) if l.is_finite() => l,
        Some(_) => return [0.0; 3],
        None => max_luminance(x, y, gamut),
    };
    clamp_rgb((xyy_to_encoded(x, y, lum, gamut) * 255.0).to_array())
}

/// Clamps each channel to [0, 255]; non-finite channels become 0.
#[inline]
pub fn clamp_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|c| if c.is_finite() { c.clamp(0.0, 255.0) } else { 0.0 })
}

// ============================================================================
// RGB <-> HSV
// ============================================================================

/// Converts RGB in [0, 255] to `[hue, saturation, value]`.
///
/// Hue is in degrees [0, 360); saturation and value are percentages.
/// Achromatic input has hue 0.
pub fn convert_rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    [hue.rem_euclid(360.0), saturation * 100.0, max * 100.0]
}

/// Converts `[hue, saturation, value]` to RGB in [0, 255].
///
/// Uses the six-sector formula on `floor(hue / 60) mod 6`; hue wraps.
pub fn convert_hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation / 100.0;
    let v = value / 100.0;

    let c = v * s;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h.floor() as i64).rem_euclid(6) {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

// ============================================================================
// RGB <-> Hex
// ============================================================================

#[inline]
fn channel_byte(c: f64) -> u8 {
    if c.is_finite() { c.round().clamp(0.0, 255.0) as u8 } else { 0 }
}

/// Formats RGB as `#rrggbb`. Channels are rounded to the nearest integer.
///
/// ```rust
/// use zcolor::convert_rgb_to_hex;
///
/// assert_eq!(convert_rgb_to_hex(10.4, 20.5, 30.6), "#0a151f");
/// ```
pub fn convert_rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_byte(r),
        channel_byte(g),
        channel_byte(b)
    )
}

/// Parses `#rrggbb` (or `#rgb`) into RGB.
///
/// Lenient: the `#` is optional, and each pair that is not valid hex
/// reads as 0. Use [`parse_hex_strict`] to reject malformed input.
pub fn convert_hex_to_rgb(hex: &str) -> [f64; 3] {
    let digits = expand_hex(hex);
    let mut rgb = [0.0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = digits
            .get(i * 2..i * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .map_or(0.0, f64::from);
    }
    rgb
}

/// Parses `#rrggbb` or `#rgb`, rejecting anything else.
pub fn parse_hex_strict(hex: &str) -> ColorResult<[u8; 3]> {
    let trimmed = hex.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !matches!(body.len(), 3 | 6) || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let digits = expand_hex(body);
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
    }
    Ok(rgb)
}

/// Strips `#` and expands the 3-digit shorthand.
fn expand_hex(hex: &str) -> String {
    let trimmed = hex.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if body.len() == 3 && body.is_ascii() {
        body.chars().flat_map(|c| [c, c]).collect()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use zcolor_primaries::{ColorSpace, GamutRegistry, SRGB};

    fn within(a: [f64; 3], b: [f64; 3], tol: f64) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
    }

    #[test]
    fn test_rgb_xyz_white() {
        let registry = GamutRegistry::standard();
        let gamut = Gamut::resolve(&registry, "srgb").unwrap();
        let [x, y, z] = convert_rgb_to_xyz(255.0, 255.0, 255.0, &gamut);
        assert!((y - 1.0).abs() < 1e-9);
        assert!((x - 0.3127 / 0.329).abs() < 1e-9);
        assert!((z - (1.0 - 0.3127 - 0.329) / 0.329).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_xyz_roundtrip() {
        let registry = GamutRegistry::standard();
        for (key, _) in registry.iter() {
            let gamut = Gamut::resolve(&registry, key).unwrap();
            for rgb in [[255.0, 128.0, 0.0], [12.0, 200.0, 90.0], [1.0, 1.0, 254.0]] {
                let [x, y, z] = convert_rgb_to_xyz(rgb[0], rgb[1], rgb[2], &gamut);
                let back = convert_xyz_to_rgb(x, y, z, &gamut).map(|c| c * 255.0);
                assert!(within(rgb, back, 1e-6), "{}: {:?} -> {:?}", key, rgb, back);
            }
        }
    }

    #[test]
    fn test_xyz_to_xyy_zero_sum() {
        assert_eq!(convert_xyz_to_xyy([0.0; 3], (0.3, 0.4)), [0.3, 0.4, 0.0]);
        assert_eq!(convert_xyz_to_xyy([f64::NAN, 1.0, 0.0], (0.3, 0.4)), [0.3, 0.4, 1.0]);
    }

    #[test]
    fn test_xyz_to_xyy_projection() {
        let [x, y, lum] = convert_xyz_to_xyy([0.2, 0.5, 0.3], (0.3, 0.4));
        assert_abs_diff_eq!(x, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.5, epsilon = 1e-12);
        assert_eq!(lum, 0.5);
    }

    #[test]
    fn test_xyy_to_xyz() {
        let [x, y, z] = convert_xyy_to_xyz(0.25, 0.5, 0.8);
        assert_abs_diff_eq!(x, 0.4, epsilon = 1e-12);
        assert_eq!(y, 0.8);
        assert_abs_diff_eq!(z, 0.4, epsilon = 1e-12);
        assert_eq!(convert_xyy_to_xyz(0.25, 0.0, 0.8), [0.0; 3]);
    }

    #[test]
    fn test_black_reports_white_point() {
        let registry = GamutRegistry::standard();
        for (key, space) in registry.iter() {
            let gamut = Gamut::resolve(&registry, key).unwrap();
            let [x, y, lum] = convert_rgb_to_xyy(0.0, 0.0, 0.0, &gamut);
            assert!((x - space.white.0).abs() < 1e-9, "{}", key);
            assert!((y - space.white.1).abs() < 1e-9, "{}", key);
            assert_eq!(lum, 0.0);
        }
    }

    #[test]
    fn test_xy_to_rgb_degenerate() {
        let gamut = Gamut::uncached(&SRGB);
        assert_eq!(convert_xy_to_rgb(0.3, 0.0, Some(0.5), &gamut), [0.0; 3]);
        assert_eq!(convert_xy_to_rgb(0.3, -0.2, None, &gamut), [0.0; 3]);
        assert_eq!(convert_xy_to_rgb(f64::NAN, 0.3, None, &gamut), [0.0; 3]);
        assert_eq!(convert_xy_to_rgb(0.3, f64::INFINITY, None, &gamut), [0.0; 3]);
        assert_eq!(convert_xy_to_rgb(0.3, 0.3, Some(f64::NAN), &gamut), [0.0; 3]);
    }

    #[test]
    fn test_xy_to_rgb_max_luminance_hits_full_channel() {
        let gamut = Gamut::uncached(&SRGB);
        let rgb = convert_xy_to_rgb(0.5, 0.4, None, &gamut);
        let max = rgb.iter().cloned().fold(0.0, f64::max);
        assert!(max > 254.0, "{:?}", rgb);
    }

    #[test]
    fn test_max_luminance_of_white() {
        let gamut = Gamut::uncached(&SRGB);
        let lum = max_luminance(0.3127, 0.329, &gamut);
        assert!((lum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_space_renders_black() {
        let flat = ColorSpace {
            name: "flat",
            red: (0.2, 0.2),
            green: (0.3, 0.3),
            blue: (0.4, 0.4),
            ..SRGB
        };
        let gamut = Gamut::uncached(&flat);
        assert_eq!(max_luminance(0.3, 0.3, &gamut), 0.0);
        assert_eq!(convert_xy_to_rgb(0.3, 0.3, None, &gamut), [0.0; 3]);
        assert_eq!(convert_xy_to_rgb(0.3, 0.3, Some(1.0), &gamut), [0.0; 3]);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(convert_rgb_to_hsv(255.0, 0.0, 0.0), [0.0, 100.0, 100.0]);
        assert_eq!(convert_rgb_to_hsv(0.0, 255.0, 0.0), [120.0, 100.0, 100.0]);
        assert_eq!(convert_rgb_to_hsv(0.0, 0.0, 255.0), [240.0, 100.0, 100.0]);
        assert_eq!(convert_rgb_to_hsv(255.0, 0.0, 255.0), [300.0, 100.0, 100.0]);
        assert_eq!(convert_rgb_to_hsv(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(convert_rgb_to_hsv(255.0, 255.0, 255.0), [0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_hsv_sectors() {
        assert!(within(convert_hsv_to_rgb(0.0, 100.0, 100.0), [255.0, 0.0, 0.0], 1e-9));
        assert!(within(convert_hsv_to_rgb(60.0, 100.0, 100.0), [255.0, 255.0, 0.0], 1e-9));
        assert!(within(convert_hsv_to_rgb(180.0, 100.0, 100.0), [0.0, 255.0, 255.0], 1e-9));
        assert!(within(convert_hsv_to_rgb(300.0, 100.0, 100.0), [255.0, 0.0, 255.0], 1e-9));
        assert!(within(convert_hsv_to_rgb(360.0, 100.0, 100.0), [255.0, 0.0, 0.0], 1e-9));
        assert!(within(convert_hsv_to_rgb(-60.0, 100.0, 100.0), [255.0, 0.0, 255.0], 1e-9));
    }

    #[test]
    fn test_hsv_roundtrip() {
        for rgb in [[255.0, 255.0, 255.0], [0.0, 0.0, 0.0], [0.0, 0.0, 255.0], [12.0, 180.0, 77.0]] {
            let [h, s, v] = convert_rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
            assert!(within(convert_hsv_to_rgb(h, s, v), rgb, 1e-9), "{:?}", rgb);
        }
    }

    #[test]
    fn test_hex() {
        assert_eq!(convert_rgb_to_hex(10.4, 20.5, 30.6), "#0a151f");
        assert_eq!(convert_hex_to_rgb("#0a151f"), [10.0, 21.0, 31.0]);
        assert_eq!(convert_rgb_to_hex(-5.0, 300.0, f64::NAN), "#00ff00");
    }

    #[test]
    fn test_hex_lenient() {
        assert_eq!(convert_hex_to_rgb("FF8000"), [255.0, 128.0, 0.0]);
        assert_eq!(convert_hex_to_rgb("#f80"), [255.0, 136.0, 0.0]);
        assert_eq!(convert_hex_to_rgb("#zz8000"), [0.0, 128.0, 0.0]);
        assert_eq!(convert_hex_to_rgb("#ff"), [255.0, 0.0, 0.0]);
        assert_eq!(convert_hex_to_rgb(""), [0.0; 3]);
        assert_eq!(convert_hex_to_rgb("#ééé"), [0.0; 3]);
    }

    #[test]
    fn test_hex_strict() {
        assert_eq!(parse_hex_strict("#0A151F").unwrap(), [10, 21, 31]);
        assert_eq!(parse_hex_strict("fff").unwrap(), [255, 255, 255]);
        assert!(matches!(parse_hex_strict("#12345"), Err(ColorError::InvalidHex(_))));
        assert!(parse_hex_strict("#gg0000").is_err());
    }
}
