//! Lists the gamut registry.

use crate::Ctx;
use anyhow::Result;
use serde_json::json;
use tracing::trace;
use zcolor::GamutRegistry;

/// Runs the gamuts command.
pub fn run(ctx: &Ctx) -> Result<()> {
    trace!("gamuts::run");
    let registry = GamutRegistry::standard();

    if ctx.json {
        let list: Vec<_> = registry
            .iter()
            .map(|(key, space)| {
                json!({
                    "key": key,
                    "name": space.name,
                    "red": [space.red.0, space.red.1],
                    "green": [space.green.0, space.green.1],
                    "blue": [space.blue.0, space.blue.1],
                    "white": [space.white.0, space.white.1],
                    "transfer": space.transfer.to_string(),
                    "default": key == zcolor::DEFAULT_GAMUT,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    for (key, space) in registry.iter() {
        let marker = if key == zcolor::DEFAULT_GAMUT { "*" } else { " " };
        println!("{marker} {key:<14} {:<20} {}", space.name, space.transfer);
        if ctx.verbose > 0 {
            println!(
                "    R ({:.4}, {:.4})  G ({:.4}, {:.4})  B ({:.4}, {:.4})  W ({:.4}, {:.4})",
                space.red.0,
                space.red.1,
                space.green.0,
                space.green.1,
                space.blue.0,
                space.blue.1,
                space.white.0,
                space.white.1
            );
        }
    }
    Ok(())
}
