use std::{env, io};

use anyhow::{anyhow, Result};
use clap::Parser;
use holder_filter::{
    config::{CliConfig, LoggingFormat},
    exclusions, report, snapshot,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(format: LoggingFormat) -> Result<()> {
    const LOG_CONFIGURATION_ENVVAR: &str = "RUST_LOG";

    let filter = EnvFilter::new(
        env::var(LOG_CONFIGURATION_ENVVAR)
            .as_deref()
            .unwrap_or("info"),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stdout)
        .with_target(true)
        .with_env_filter(filter);

    match format {
        LoggingFormat::Json => subscriber.json().try_init(),
        LoggingFormat::Text => subscriber.try_init(),
    }
    .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    let config = CliConfig::parse();
    init_logging(config.logging_format)?;

    let exclusions = exclusions::load(&config.exclusions)?;
    info!(entries = exclusions.len(), "Exclusion list loaded");

    let snapshot = snapshot::scan(&config.holders, config.filter_amount, &exclusions)?;
    info!(
        holders = snapshot.holders.len(),
        offset_tier1 = %snapshot.offset_tier1,
        offset_tier2 = %snapshot.offset_tier2,
        "Holder export processed"
    );

    report::write(&snapshot, &config.output)?;
    info!("Report written to {:?}", config.output);

    Ok(())
}
