//! Serialization of the scan result into the distribution input document.

use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::snapshot::Snapshot;

/// Document consumed by the downstream distribution tooling.
///
/// Balances and offsets are rendered as decimal strings so that 256-bit
/// amounts survive JSON parsers that read numbers as doubles. Addresses are
/// rendered in their EIP-55 checksum form.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    input: Input,
}

#[derive(Clone, Debug, Serialize)]
struct Input {
    holders: Vec<String>,
    balances: Vec<String>,
    offset_tier1: String,
    offset_tier2: String,
}

impl From<&Snapshot> for Report {
    fn from(snapshot: &Snapshot) -> Self {
        Report {
            input: Input {
                holders: snapshot
                    .holders
                    .iter()
                    .map(|address| address.to_checksum(None))
                    .collect(),
                balances: snapshot
                    .balances
                    .iter()
                    .map(|balance| balance.to_string())
                    .collect(),
                offset_tier1: snapshot.offset_tier1.to_string(),
                offset_tier2: snapshot.offset_tier2.to_string(),
            },
        }
    }
}

/// Write `snapshot` to `path`, creating the containing directory if missing.
/// An existing document is overwritten.
pub fn write(snapshot: &Snapshot, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {dir:?}"))?;
        }
    }

    let serialized = serde_json::to_string_pretty(&Report::from(snapshot))
        .map_err(|e| anyhow!("Failed to serialize report: {e}"))?;
    fs::write(path, serialized).with_context(|| format!("Failed to write report to {path:?}"))
}
