/*!
 * Tailsig - lightweight tail-signature marker and checker
 *
 * Command-line front end over the tailsig library: classifies a file's
 * signature state and applies the sign/unsign/resign transforms.
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use tailsig::config::Config;
use tailsig::detector::{self, SignatureStatus};
use tailsig::file_io;
use tailsig::hasher;
use tailsig::ops::{self, Action};
use tailsig::utils;

#[derive(Parser)]
#[command(name = "tailsig")]
#[command(about = "Lightweight tail-signature marker and checker for binary files")]
#[command(version = "0.4.1")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether a file is signed, unsigned, or has changed data
    Check {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Append a signature trailer computed from the payload
    Sign {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Strip the signature trailer, leaving the bare payload
    Unsign {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Strip any trailer and append a freshly computed one
    Resign {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_level, cli.no_color)?;

    let config = match cli.config {
        Some(config_path) => Config::from_file(&config_path).with_context(|| {
            format!("failed to load configuration from {}", config_path.display())
        })?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Check { input } => handle_check(input, &config),

        Commands::Sign { input, output } => {
            handle_transform(Action::AddSign, input, output, &config)
        }

        Commands::Unsign { input, output } => {
            handle_transform(Action::RemoveSign, input, output, &config)
        }

        Commands::Resign { input, output } => {
            handle_transform(Action::Resign, input, output, &config)
        }
    }
}

fn handle_check(input: PathBuf, config: &Config) -> Result<()> {
    let buffer = file_io::read_file_bytes(&input, config)?;
    info!(
        "read {} from {}",
        utils::format_bytes(buffer.len() as u64),
        input.display()
    );

    let classification = detector::classify(&buffer);
    match classification.status {
        SignatureStatus::Signed => info!("trailer hash matches the payload"),
        SignatureStatus::Unsigned => info!("no trailer present"),
        SignatureStatus::ChangedData => {
            warn!("trailer present but its hash does not match the payload")
        }
    }

    println!("{}: {}", input.display(), classification.status);
    Ok(())
}

fn handle_transform(
    action: Action,
    input: PathBuf,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let output_path = file_io::resolve_output_path(&input, output, config)?;
    let buffer = file_io::read_file_bytes(&input, config)?;

    let classification = detector::classify(&buffer);
    info!("{} classified as {}", input.display(), classification.status);

    if action == Action::AddSign && classification.status == SignatureStatus::ChangedData {
        warn!("input carries a stale trailer; signing the stripped payload");
    }

    let Some(result) = ops::apply(action, &classification) else {
        return Ok(());
    };

    if matches!(action, Action::AddSign | Action::Resign) {
        let hash = hasher::hash64(&classification.payload);
        info!("payload hash {}", hex::encode(hash.to_le_bytes()));
    }

    file_io::write_file_bytes(&output_path, &result)?;
    info!(
        "wrote {} to {}",
        utils::format_bytes(result.len() as u64),
        output_path.display()
    );

    Ok(())
}

fn setup_logging(level: &str, no_color: bool) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
