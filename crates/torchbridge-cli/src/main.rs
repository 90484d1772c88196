//! torchctl - Drive the flash plugin from the command line
//!
//! Commands:
//! - `torchctl probe` - Print what discovery found
//! - `torchctl toggle --on|--off` - Switch the torch
//! - `torchctl brightness <level>` - Set a brightness percentage
//! - `torchctl preset <label>` - Apply a named brightness preset
//! - `torchctl presets` - List the profile's presets
//!
//! Every command runs against simulated hardware described by a device
//! profile (`--profile torchctl.toml`), or a built-in phone with one rear
//! flash when no profile is given.

use anyhow::Context;
use clap::{Parser, Subcommand};
use flash_plugin::DEFAULT_BRIGHTNESS;
use std::path::PathBuf;
use std::process::ExitCode;
use torchbridge_core::LogLevel;
use tracing_subscriber::EnvFilter;

mod profile;
mod shell;

use profile::Profile;
use shell::{Report, Shell};

#[derive(Parser)]
#[command(name = "torchctl")]
#[command(author, version, about = "Camera flash control shell", long_about = None)]
struct Cli {
    /// Device profile (default: built-in single rear flash, API level 34)
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flash capabilities found on the device
    Probe,

    /// Turn the torch on or off (off when neither flag is given)
    Toggle {
        /// Turn the torch on
        #[arg(long, conflicts_with = "off")]
        on: bool,

        /// Turn the torch off
        #[arg(long)]
        off: bool,
    },

    /// Set the torch brightness as a percentage
    Brightness {
        /// Brightness percentage
        #[arg(default_value_t = DEFAULT_BRIGHTNESS, allow_negative_numbers = true)]
        level: i32,
    },

    /// Apply a named brightness preset
    Preset {
        /// Preset label (case-insensitive)
        label: String,
    },

    /// List the brightness presets of the profile
    Presets,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = LogLevel::parse(&cli.log_level)
        .with_context(|| format!("Unknown log level '{}'", cli.log_level))?;
    init_tracing(level);

    let profile = match &cli.profile {
        Some(path) => Profile::from_file(path)?,
        None => Profile::builtin(),
    };
    profile.validate()?;

    let report = match cli.command {
        Commands::Presets => {
            for preset in &profile.presets {
                println!("{:<12} {:>3}", preset.label, preset.value);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Probe => with_shell(&profile, level, |shell| Ok(shell.probe()))?,
        Commands::Toggle { on, off } => {
            let state = match (on, off) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            with_shell(&profile, level, |shell| Ok(shell.toggle(state)))?
        }
        Commands::Brightness { level: brightness } => {
            with_shell(&profile, level, |shell| Ok(shell.brightness(brightness)))?
        }
        Commands::Preset { label } => {
            let preset = profile.preset(&label).with_context(|| {
                let known: Vec<&str> = profile.presets.iter().map(|p| p.label.as_str()).collect();
                format!("Unknown preset '{}' (known: {})", label, known.join(", "))
            })?;
            with_shell(&profile, level, |shell| Ok(shell.preset(preset)))?
        }
    };

    print_report(&report)?;
    if report.outcome.is_resolved() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Load the plugin, run one command, then unload it
fn with_shell<F>(profile: &Profile, level: LogLevel, run: F) -> anyhow::Result<Report>
where
    F: FnOnce(&Shell) -> anyhow::Result<Report>,
{
    let shell = Shell::open(profile, level)?;
    let report = run(&shell)?;
    shell.close()?;
    Ok(report)
}

/// Log to stderr; `RUST_LOG` overrides `--log-level`
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_ascii_lowercase()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_report(report: &Report) -> anyhow::Result<()> {
    let rendered =
        serde_json::to_string_pretty(report).context("Failed to render call outcome")?;
    println!("{}", rendered);
    Ok(())
}
