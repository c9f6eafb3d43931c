use anyhow::Context;
use clap::Parser;
use state_hoisting::config::Config;
use state_hoisting::logging;
use state_hoisting::shutdown::ShutdownHandle;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "state-hoisting",
    version,
    about = "Counter demo: an observable view-model driving stateless terminal widgets"
)]
struct Cli {
    /// Config file (default: <config dir>/state-hoisting/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" (RUST_LOG still wins)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Input poll and redraw interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_rate_ms: Option<u64>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    apply_overrides(&cli, &mut config);
    config.validate().context("Invalid configuration")?;

    let log_path = logging::init(&config.logging).context("Failed to initialise logging")?;
    tracing::info!(log = %log_path.display(), version = env!("CARGO_PKG_VERSION"), "Starting");

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    state_hoisting::ui::run(&config, shutdown).context("Terminal UI failed")?;
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.ui.tick_rate_ms = tick_rate_ms;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }
}
