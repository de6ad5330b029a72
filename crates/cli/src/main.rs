//! advent runner entry point.
//!
//! Loads configuration, resolves the session cookie, then fetches (or reads
//! from cache) the configured day and prints both answers on stdout.
//! Logging goes to stderr so answers can be piped.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use advent_client::Advent;
use advent_core::{AppConfig, resolve_session};

mod runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    let session = resolve_session(None)?;

    tracing::info!(year = config.year, day = config.day, "starting advent runner");

    let advent = Advent::new(&config, session)?;
    if !advent.validate_session() {
        println!("Invalid session!");
        return Ok(());
    }

    let solver = advent_puzzles::solver_for(config.year, config.day);
    let mut stdout = std::io::stdout().lock();
    runner::run(&advent, &config, solver, &mut stdout).await?;

    Ok(())
}
