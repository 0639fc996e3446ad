//! Prints the RGB/XYZ matrices of a gamut.

use crate::{Ctx, MatrixArgs};
use anyhow::Result;
use serde_json::json;
use tracing::{debug, trace};
use zcolor::GamutRegistry;
use zcolor::math::Mat3;

/// Runs the matrix command.
pub fn run(args: MatrixArgs, ctx: &Ctx) -> Result<()> {
    let key = args.name.as_deref().unwrap_or(&ctx.gamut);
    trace!(gamut = key, "matrix::run");

    let registry = GamutRegistry::standard();
    let gamut = super::resolve_gamut(&registry, key)?;
    let m = gamut.matrices;
    if m.to_xyz == Mat3::ZERO {
        debug!(gamut = key, "Degenerate primaries, matrices are zero");
    }

    if ctx.json {
        let out = json!({
            "gamut": gamut.space.name,
            "to_xyz": m.to_xyz.m,
            "to_rgb": m.to_rgb.m,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", gamut.space.name);
    print_matrix("RGB -> XYZ", &m.to_xyz);
    print_matrix("XYZ -> RGB", &m.to_rgb);
    Ok(())
}

fn print_matrix(label: &str, m: &Mat3) {
    println!("  {label}");
    for row in m.m {
        println!("    [{:>12.8} {:>12.8} {:>12.8}]", row[0], row[1], row[2]);
    }
}
