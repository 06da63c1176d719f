//! spawnwait
//!
//! Runs two small demonstrations of spawning a lightweight task:
//!
//! ```text
//!   detached                         joined
//!   ────────                         ──────
//!   start                            start
//!   spawn ──▶ task: go routine 0..   JoinBarrier(1)
//!   end          (may be cut off)    spawn ──▶ task: go routine index=0..
//!   return                           wait  ◀── guard dropped
//!                                    end
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use spawnwait::config::{resolve_config, AppConfig, ConfigOverrides, LogFormat};
use spawnwait::demo::{detached, joined};
use spawnwait::observability::{logging, Logger};

#[derive(Parser)]
#[command(name = "spawnwait")]
#[command(about = "Spawn a task without and with waiting for it", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lines emitted by each spawned task.
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Keep the runtime alive this long after the detached flow returns.
    #[arg(long)]
    linger_ms: Option<u64>,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Spawn and return without waiting
    Detached,
    /// Spawn and wait on a join barrier
    Joined,
    /// Run detached, then joined
    Both,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            iterations: self.iterations,
            linger_ms: self.linger_ms,
            log_format: self.log_format,
        }
    }
}

async fn run_detached(logger: &Logger, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let _task = detached::run(logger, config.demo.iterations)?;

    if config.demo.linger_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.demo.linger_ms)).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;

    logging::init_logging(&config.observability)?;

    tracing::debug!(
        iterations = config.demo.iterations,
        linger_ms = config.demo.linger_ms,
        "Configuration loaded"
    );

    let logger = Logger::tracing();

    match cli.command {
        Commands::Detached => run_detached(&logger, &config).await?,
        Commands::Joined => joined::run(&logger, config.demo.iterations).await?,
        Commands::Both => {
            run_detached(&logger, &config).await?;
            joined::run(&logger, config.demo.iterations).await?;
        }
    }

    Ok(())
}
