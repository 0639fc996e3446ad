//! Parses editor text and shows how it normalizes.

use crate::{Ctx, StringArgs};
use anyhow::Result;
use serde_json::json;
use tracing::{debug, trace};
use zcolor::{GamutRegistry, convert_color_to_string, convert_string_to_color};

/// Runs the string command.
pub fn run(args: StringArgs, ctx: &Ctx) -> Result<()> {
    trace!(format = %args.format, text = %args.text, "string::run");

    let registry = GamutRegistry::standard();
    let gamut = super::resolve_gamut(&registry, &ctx.gamut)?;
    let format = super::parse_format(&args.format)?;

    let numbers = zcolor::string::extract_numbers(&args.text);
    debug!(?numbers, "Extracted numbers");

    let color = convert_string_to_color(&args.text, format, &gamut);
    let text = convert_color_to_string(&color);

    if ctx.json {
        let out = json!({
            "input": args.text,
            "normalized": text.get(format),
            "strings": text,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("  {:<10} {:?} -> {:?}", format.key(), args.text, text.get(format));
    if ctx.verbose > 0 {
        super::print_color(&color);
    }
    Ok(())
}
