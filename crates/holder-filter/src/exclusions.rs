//! Loading of the exclusion list.
//!
//! The list is a JSON document of the form
//! `{ "exclusions": [ { "address": "0x…", "excludedInToken": bool }, … ] }`.
//! Lookups are keyed by the parsed 20-byte address, so the case of the hex
//! string in the file does not matter.

use std::{collections::HashMap, fs, path::Path};

use alloy_primitives::Address;
use anyhow::{Context, Result};
use serde::Deserialize;

/// One carve-out entry of the exclusion list.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Exclusion {
    pub address: Address,
    /// When set, the address is excluded from the tier offsets as well.
    #[serde(rename = "excludedInToken")]
    pub excluded_in_token: bool,
}

#[derive(Debug, Deserialize)]
struct ExclusionDocument {
    exclusions: Vec<Exclusion>,
}

/// Exclusion entries keyed by address.
#[derive(Clone, Debug, Default)]
pub struct ExclusionSet {
    entries: HashMap<Address, bool>,
}

impl ExclusionSet {
    /// The first entry wins when an address appears more than once.
    pub fn new(exclusions: impl IntoIterator<Item = Exclusion>) -> Self {
        let mut entries = HashMap::new();
        for exclusion in exclusions {
            entries
                .entry(exclusion.address)
                .or_insert(exclusion.excluded_in_token);
        }
        ExclusionSet { entries }
    }

    /// Returns the `excludedInToken` flag for an excluded address, or `None`
    /// when the address is not excluded at all.
    pub fn lookup(&self, address: Address) -> Option<bool> {
        self.entries.get(&address).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the exclusion list from `path`.
pub fn load(path: &Path) -> Result<ExclusionSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read exclusion list {path:?}"))?;
    parse(&content).with_context(|| format!("Malformed exclusion list {path:?}"))
}

fn parse(content: &str) -> Result<ExclusionSet> {
    let document: ExclusionDocument = serde_json::from_str(content)?;
    Ok(ExclusionSet::new(document.exclusions))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn parses_exclusion_document() {
        let set = parse(
            r#"{
                "exclusions": [
                    { "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", "excludedInToken": true },
                    { "address": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359", "excludedInToken": false }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.lookup(address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")),
            Some(true)
        );
        assert_eq!(
            set.lookup(address!("fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359")),
            Some(false)
        );
        assert_eq!(
            set.lookup(address!("dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB")),
            None
        );
    }

    #[test]
    fn entry_case_does_not_affect_lookup() {
        let set = parse(
            r#"{ "exclusions": [
                { "address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "excludedInToken": false }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            set.lookup(address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")),
            Some(false)
        );
    }

    #[test]
    fn first_entry_wins_for_duplicate_addresses() {
        let set = parse(
            r#"{ "exclusions": [
                { "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", "excludedInToken": false },
                { "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", "excludedInToken": true }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            set.lookup(address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")),
            Some(false)
        );
    }

    #[test]
    fn missing_exclusions_key_is_rejected() {
        assert!(parse(r#"{ "excluded": [] }"#).is_err());
    }

    #[test]
    fn malformed_entry_is_rejected() {
        assert!(parse(r#"{ "exclusions": [ { "address": "not-hex", "excludedInToken": true } ] }"#).is_err());
    }
}
