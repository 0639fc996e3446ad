//! CLI command implementations

pub mod convert;
pub mod gamuts;
pub mod matrix;
pub mod string;

use anyhow::{Context, Result};
use zcolor::{ColorFormat, Gamut, GamutRegistry, ZigbeeColor};

/// Resolves a gamut key, failing with the list of known keys.
pub fn resolve_gamut<'a>(registry: &'a GamutRegistry, key: &str) -> Result<Gamut<'a>> {
    Gamut::resolve(registry, key).with_context(|| {
        format!("known gamuts: {}", registry.keys().collect::<Vec<_>>().join(", "))
    })
}

/// Parses a format key.
pub fn parse_format(key: &str) -> Result<ColorFormat> {
    key.parse::<ColorFormat>()
        .context("expected color_xy, color_hs, color_rgb or hex")
}

/// Prints all representations as aligned text.
pub fn print_color(color: &ZigbeeColor) {
    let text = zcolor::convert_color_to_string(color);
    for format in ColorFormat::ALL {
        println!("  {:<10} {}", format.key(), text.get(format));
    }
}
