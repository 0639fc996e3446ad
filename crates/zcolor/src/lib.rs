//! # zcolor
//!
//! Color conversion engine for Zigbee lights.
//!
//! A light is addressed in one of four formats (`color_xy`, `color_hs`,
//! `color_rgb` or a hex string), but what it can actually show depends on
//! its gamut. This crate converts between the four formats through the
//! device's color space, so editors can show every representation of the
//! same color and send the one the device understands.
//!
//! # Architecture
//!
//! ```text
//!                    zcolor
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!   zcolor-primaries        zcolor-transfer
//!          |                       |
//!          +-----------+-----------+
//!                      |
//!                 zcolor-math
//! ```
//!
//! Every conversion goes through linear RGB and CIE XYZ:
//!
//! ```text
//! hex <-> RGB 0-255 <-> encoded 0-1 <-> linear <-> XYZ <-> xyY
//!           |
//!          HSV
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use zcolor::{AnyColor, ColorFormat, Gamut, GamutRegistry, XyColor};
//! use zcolor::{convert_from_color, convert_to_color};
//!
//! let registry = GamutRegistry::standard();
//! let gamut = Gamut::resolve(&registry, "hue_gamut_c").unwrap();
//!
//! // A device reports its state in xy
//! let color = convert_to_color(&AnyColor::Xy(XyColor::new(0.5, 0.4)), &gamut);
//! println!("{} {:?}", color.hex, color.color_hs);
//!
//! // and an editor sends RGB back
//! let payload = convert_from_color(&color, ColorFormat::Rgb);
//! assert_eq!(payload.format(), ColorFormat::Rgb);
//! ```
//!
//! # Failure Behavior
//!
//! Conversions do not return errors. Degenerate gamuts produce zero
//! matrices (every color black), `y = 0` chromaticities produce white,
//! and unknown formats produce the default white color. Use
//! [`convert_to_color_checked`] or [`convert_value_to_color`] to learn
//! when a default was substituted. [`ColorError`] is reserved for lookups
//! and payload parsing.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod gamut;
pub mod convert;
pub mod string;
pub mod unified;

pub use color::{
    AnyColor, ColorFormat, HexColor, HsColor, RgbColor, XyColor, ZigbeeColor, ZigbeeColorString,
};
pub use convert::{
    clamp_rgb, convert_hex_to_rgb, convert_hsv_to_rgb, convert_rgb_to_hex, convert_rgb_to_hsv,
    convert_rgb_to_xyy, convert_rgb_to_xyz, convert_xy_to_rgb, convert_xyy_to_xyz,
    convert_xyz_to_rgb, convert_xyz_to_xyy, max_luminance, parse_hex_strict,
};
pub use error::{ColorError, ColorResult};
pub use gamut::Gamut;
pub use string::{
    convert_color_to_string, convert_hex_to_string, convert_hsv_to_string,
    convert_rgb_to_string, convert_string_to_color, convert_string_to_hex,
    convert_string_to_hsv, convert_string_to_rgb, convert_string_to_xyy, convert_xyy_to_string,
};
pub use unified::{
    Converted, Fallback, convert_from_color, convert_from_color_json,
    convert_from_color_with_luminance, convert_to_color, convert_to_color_checked,
    convert_value_to_color,
};

// Re-export sub-crates for convenience
pub use zcolor_math as math;
pub use zcolor_primaries as primaries;
pub use zcolor_transfer as transfer;

pub use zcolor_primaries::{ColorSpace, DEFAULT_GAMUT, GamutRegistry};
pub use zcolor_transfer::TransferFunction;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        AnyColor, ColorFormat, Gamut, GamutRegistry, ZigbeeColor, ZigbeeColorString,
        convert_from_color, convert_string_to_color, convert_to_color,
    };
}
