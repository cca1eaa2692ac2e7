use std::sync::Arc;

use clap::Parser;
use numbers_aggregator::cli::Cli;
use numbers_aggregator::engine::Aggregator;
use numbers_aggregator::server;
use numbers_aggregator::source::HttpSource;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = cli.into_config()?;

    let source = Arc::new(HttpSource::new()?);
    let aggregator = Arc::new(Aggregator::new(source, cfg.budget));
    server::serve(cfg, aggregator).await?;

    Ok(())
}
