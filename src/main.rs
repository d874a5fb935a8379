//! Voice agent configuration check.
//!
//! Loads the agent configuration from the environment, validates it and reports
//! the result. Exits with status 1 on the first configuration error.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use voice_agent_config::AgentConfig;

/// Command line options.
#[derive(Parser, Debug)]
#[command(name = "voice-agent-config")]
#[command(author, version, about = "Load and validate the voice agent configuration", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Print the validated configuration as JSON (secret redacted)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if cli.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .context("Failed to build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("Voice agent config v{}", env!("CARGO_PKG_VERSION"));

    let config = match AgentConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    config.log_config();

    if cli.json {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{}", json);
    }

    info!("Configuration is valid");
    Ok(())
}
