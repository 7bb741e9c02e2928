//! logoconvert CLI - generate Expo asset PNGs from a single `icon.jpeg`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logoconvert::{Config, Converter};

/// Convert icon.jpeg into icon.png, splash-icon.png, adaptive-icon.png
/// (1024x1024) and favicon.png (96x96).
#[derive(Parser, Debug)]
#[command(name = "logoconvert")]
#[command(version, about, long_about = None)]
struct Args {
    /// Assets directory containing icon.jpeg. Defaults to the directory
    /// the executable lives in.
    #[arg(value_name = "ASSETS_DIR")]
    assets_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("logoconvert={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let assets_dir = match args.assets_dir {
        Some(dir) => dir,
        None => default_assets_dir().context("Failed to locate the executable's directory")?,
    };

    let converter = Converter::new(Config::new(&assets_dir));
    converter.run().context("Conversion failed")?;

    println!("Successfully converted assets in {}", assets_dir.display());

    Ok(())
}

/// The original workflow keeps icon.jpeg next to the converter itself, so
/// with no argument we resolve relative to the executable's own location
/// rather than the caller's working directory.
fn default_assets_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to resolve the current executable path")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;

    Ok(dir.to_path_buf())
}
