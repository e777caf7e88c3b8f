//! The single-pass filter/exclusion/tiering scan over the holder export.

use std::path::Path;

use alloy_primitives::{Address, U256};
use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::{
    amount::{parse_token_amount, UNITS_PER_TOKEN},
    exclusions::ExclusionSet,
};

/// Tier-1 offsets catch excluded balances from 50,000 tokens up.
fn tier1_threshold() -> U256 {
    U256::from(50_000) * UNITS_PER_TOKEN
}

/// Tier-2 offsets catch excluded balances from 1,000 tokens up.
fn tier2_threshold() -> U256 {
    U256::from(1_000) * UNITS_PER_TOKEN
}

/// Result of scanning the holder export.
///
/// `holders[i]` and `balances[i]` always describe the same input row; rows
/// are kept in export order and never deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub holders: Vec<Address>,
    pub balances: Vec<U256>,
    pub offset_tier1: U256,
    pub offset_tier2: U256,
}

impl Snapshot {
    fn record(&mut self, address: Address, balance: U256, exclusions: &ExclusionSet) {
        match exclusions.lookup(address) {
            None => {
                self.holders.push(address);
                self.balances.push(balance);
            }
            // excluded from the token distribution entirely
            Some(true) => {}
            Some(false) => {
                if balance >= tier1_threshold() {
                    self.offset_tier1 += balance;
                } else if balance >= tier2_threshold() {
                    self.offset_tier2 += balance;
                }
                // below both thresholds the excluded balance contributes to
                // neither offset
            }
        }
    }
}

/// Run the filter/exclusion/tiering pass over the CSV export at `path`.
///
/// Rows below `filter_amount` are dropped before anything else is looked at,
/// including their address. Every surviving row must parse; a malformed
/// balance or address aborts the whole run.
pub fn scan(path: &Path, filter_amount: U256, exclusions: &ExclusionSet) -> Result<Snapshot> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open holder export {path:?}"))?;

    let mut snapshot = Snapshot::default();
    let mut below_filter = 0usize;

    for (row_number, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read row {row_number} of {path:?}"))?;

        let balance = row
            .get(1)
            .ok_or_else(|| anyhow!("missing balance column"))
            .and_then(|field| parse_token_amount(field.trim()).map_err(|e| anyhow!(e)))
            .with_context(|| format!("Malformed row {row_number} of {path:?}"))?;
        if balance < filter_amount {
            below_filter += 1;
            continue;
        }

        let address = row
            .get(0)
            .ok_or_else(|| anyhow!("missing address column"))
            .and_then(|field| {
                field
                    .trim()
                    .parse::<Address>()
                    .map_err(|e| anyhow!("bad address `{field}`: {e}"))
            })
            .with_context(|| format!("Malformed row {row_number} of {path:?}"))?;

        snapshot.record(address, balance, exclusions);
    }

    info!(
        kept = snapshot.holders.len(),
        below_filter, "Holder export scanned"
    );
    Ok(snapshot)
}
