//! zcolor - color conversion for Zigbee lights from the terminal
//!
//! Converts a color given in one device format into every other format,
//! for any gamut in the registry.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "zcolor")]
#[command(author, version, about = "Color conversion for Zigbee lights")]
#[command(long_about = "
Converts light colors between the xy, hue/saturation, RGB and hex formats
through a device gamut.

Examples:
  zcolor convert color_xy '{\"x\": 0.5, \"y\": 0.4}'
  zcolor convert hex '#ff8000' --gamut hue_gamut_c
  zcolor convert color_rgb '{\"r\": 255}' --json
  zcolor gamuts
  zcolor matrix srgb
  zcolor string color_hs '180, 50%, 75'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Device gamut key
    #[arg(short, long, global = true, env = "ZCOLOR_GAMUT", default_value = zcolor::DEFAULT_GAMUT)]
    gamut: String,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one color to all four formats
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// List the known gamuts
    #[command(visible_alias = "g")]
    Gamuts,

    /// Print the RGB/XYZ matrices of a gamut
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Parse and re-format the text form of a color
    #[command(visible_alias = "s")]
    String(StringArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source format: color_xy, color_hs, color_rgb or hex
    format: String,

    /// JSON payload, e.g. '{"x":0.3,"y":0.4}'. A bare hex string is accepted for `hex`.
    value: String,

    /// Also print the device payload in this format
    #[arg(short, long)]
    to: Option<String>,
}

#[derive(Args)]
struct MatrixArgs {
    /// Gamut key (defaults to --gamut)
    name: Option<String>,
}

#[derive(Args)]
struct StringArgs {
    /// Format of the text: color_xy, color_hs, color_rgb or hex
    format: String,

    /// Text as typed into an editor, e.g. "0.3, 0.4, 0.5"
    text: String,
}

/// Context shared by all commands.
pub(crate) struct Ctx {
    pub gamut: String,
    pub json: bool,
    pub verbose: u8,
}

/// Log level used when `RUST_LOG` is unset.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Ctx {
        gamut: cli.gamut,
        json: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &ctx),
        Commands::Gamuts => commands::gamuts::run(&ctx),
        Commands::Matrix(args) => commands::matrix::run(args, &ctx),
        Commands::String(args) => commands::string::run(args, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "debug");
        assert_eq!(default_level(2), "trace");
        assert_eq!(default_level(5), "trace");
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::try_parse_from(["zcolor", "-vv", "gamuts"]).unwrap();
        assert_eq!(default_level(cli.verbose), "trace");
        let cli = Cli::try_parse_from(["zcolor", "gamuts", "-v"]).unwrap();
        assert_eq!(default_level(cli.verbose), "debug");
    }
}
