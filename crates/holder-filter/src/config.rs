use std::path::PathBuf;

use alloy_primitives::U256;
use clap::{Parser, ValueEnum};

#[derive(Clone, Eq, PartialEq, Debug, Parser)]
#[clap(name = "holder-filter", version)]
pub struct CliConfig {
    /// Minimum token balance (in human units) required for a holder to be
    /// considered at all.
    #[clap(long, alias = "filterAmount", default_value = "0", value_parser = parsing::parse_token_amount)]
    pub filter_amount: U256,

    /// Path to the holder balance export (headerless CSV; column 0 is the
    /// address, column 1 the balance, further columns are ignored).
    #[clap(long, default_value = "./holders0.csv")]
    pub holders: PathBuf,

    /// Path to the exclusion list (JSON).
    #[clap(long, default_value = "./excludedAddresses.json")]
    pub exclusions: PathBuf,

    /// Path the result document is written to.
    ///
    /// An existing file will be overwritten; the containing directory is
    /// created if missing.
    #[clap(long, default_value = "./outputs/holders0.json")]
    pub output: PathBuf,

    /// Logging configuration.
    #[clap(short = 'l', value_enum, default_value = "text")]
    pub logging_format: LoggingFormat,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum LoggingFormat {
    #[default]
    Text,
    Json,
}

mod parsing {
    use alloy_primitives::U256;
    use anyhow::{anyhow, Result};

    pub fn parse_token_amount(string: &str) -> Result<U256> {
        crate::amount::parse_token_amount(string).map_err(|e| anyhow!(e))
    }
}
