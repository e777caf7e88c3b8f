//! One-shot transform over a token-holder balance export.
//!
//! Reads a CSV export of (address, balance) rows, drops holders below a
//! minimum balance, normalizes addresses to their EIP-55 checksum form and
//! cross-references an exclusion list. Excluded holders that still count
//! towards the distribution are folded into two tier-offset totals instead of
//! the holder list. The result is a single JSON document consumed by the
//! downstream distribution tooling.

pub mod amount;
pub mod config;
pub mod exclusions;
pub mod report;
pub mod snapshot;
