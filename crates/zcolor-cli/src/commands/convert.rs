//! Format conversion command.
//!
//! Takes a device payload in one format and prints every representation.

use crate::{ConvertArgs, Ctx};
use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::{debug, info, trace, warn};
use zcolor::{GamutRegistry, convert_from_color_json, convert_value_to_color};

/// Runs the convert command.
pub fn run(args: ConvertArgs, ctx: &Ctx) -> Result<()> {
    trace!(format = %args.format, value = %args.value, gamut = %ctx.gamut, "convert::run");

    let registry = GamutRegistry::standard();
    let gamut = super::resolve_gamut(&registry, &ctx.gamut)?;
    let format = super::parse_format(&args.format)?;
    let target = args.to.as_deref().map(super::parse_format).transpose()?;

    let value = parse_payload(&args.value)?;
    debug!(%format, payload = %value, "Parsed payload");

    let converted = convert_value_to_color(format.key(), &value, &gamut);
    if let Some(reason) = converted.fallback {
        warn!(%reason, "Input could not be converted, using default color");
    }
    info!(hex = %converted.color.hex, gamut = gamut.space.name, "Converted");

    let payload = target
        .map(|t| convert_from_color_json(&converted.color, t).map(|v| (t, v)))
        .transpose()?;

    if ctx.json {
        let mut out = json!({
            "gamut": gamut.space.name,
            "color": converted.color,
            "fallback": converted.fallback.map(|f| f.to_string()),
        });
        if let Some((t, v)) = payload {
            let mut device = serde_json::Map::new();
            device.insert(t.key().to_string(), v);
            out["payload"] = Value::Object(device);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if ctx.verbose > 0 {
        println!("Converting {} in {}", format, gamut.space.name);
    }
    super::print_color(&converted.color);
    if let Some(reason) = converted.fallback {
        println!("  (fallback: {reason})");
    }
    if let Some((t, v)) = payload {
        println!("  {:<10} {}", format!("-> {t}"), v);
    }
    Ok(())
}

/// Reads the payload as JSON, or as a plain string when it is not JSON.
fn parse_payload(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).with_context(|| format!("invalid JSON payload: {raw}"));
    }
    Ok(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}
