use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use disk_erase::ui::render_disks;
use disk_erase::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "disk-erase")]
#[command(about = "Inventory block devices and dispatch device-aware secure erase")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "DISK_ERASE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all detected disks
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Read `lshw -json` output from a file instead of scanning
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Erase disks (commands are logged, not executed)
    Erase {
        /// Erase strategy (secure, gutmann); overrides the config file
        #[arg(short, long)]
        strategy: Option<String>,

        /// Only erase this device path; every disk otherwise
        #[arg(short, long)]
        device: Option<String>,

        /// Read `lshw -json` output from a file instead of scanning
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_topology(input: Option<&Path>) -> Result<HwNode> {
    match input {
        Some(path) => LshwScanner::load_file(path)
            .with_context(|| format!("Failed to read topology from {}", path.display())),
        None => LshwScanner::scan().context("Failed to scan hardware with lshw"),
    }
}

fn list_disks(config: &AppConfig, input: Option<&Path>, json: bool) -> Result<()> {
    let topology = load_topology(input)?;
    let disks = DiskClassifier::new(config.classifier.clone()).classify(&topology);

    if json {
        println!("{}", serde_json::to_string_pretty(&disks)?);
    } else {
        print!("{}", render_disks(&disks));
    }
    Ok(())
}

fn erase_disks(
    config: &AppConfig,
    strategy: Option<&str>,
    device: Option<&str>,
    input: Option<&Path>,
) -> Result<()> {
    let strategy = match strategy {
        Some(s) => s.parse::<EraseStrategy>()?,
        None => config.erase.strategy,
    };

    let topology = load_topology(input)?;
    let mut disks = DiskClassifier::new(config.classifier.clone()).classify(&topology);

    if let Some(device) = device {
        disks.retain(|d| d.path() == device);
        if disks.is_empty() {
            bail!("Disk {} not found", device);
        }
    }

    let orchestrator = EraseOrchestrator::new(strategy, DryRunBackend)
        .with_exclusions(config.erase.exclude_paths.iter().cloned());
    let session = orchestrator.erase_all(&mut disks);

    println!("{}", serde_json::to_string_pretty(&session)?);

    if session.failed() > 0 {
        bail!("{} of {} disks failed to erase", session.failed(), session.outcomes.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match &cli.command {
        Commands::List { json, input } => list_disks(&config, input.as_deref(), *json),
        Commands::Erase {
            strategy,
            device,
            input,
        } => erase_disks(&config, strategy.as_deref(), device.as_deref(), input.as_deref()),
    }
}
