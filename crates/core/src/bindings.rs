//! Key-to-gear-pattern binding table.
//!
//! Each key maps to an ordered list of patterns. Earlier patterns win ties
//! during selection, so the order written in the config is the priority order.

use std::collections::BTreeMap;

use crate::keys::KeyId;
use crate::types::{GearPattern, SlotHint};

/// Bindings written to disk on first run. Keep in sync with the docs.
pub const DEFAULT_BINDINGS: &[(&str, &[&str])] = &[
    (
        "F1",
        &[
            "GEAR_Rifle_Barbs",
            "GEAR_Rifle_Trader",
            "GEAR_Rifle",
            "GEAR_Rifle_Curators",
            "GEAR_Rifle_Vaughns",
        ],
    ),
    (
        "F2",
        &["GEAR_RevolverStubNosed", "GEAR_Revolver", "GEAR_RevolverFancy", "GEAR_RevolverGreen"],
    ),
    ("F3", &["GEAR_Bow_Bushcraft", "GEAR_Bow_Woodwrights", "GEAR_Bow", "GEAR_Bow_Manufactured"]),
    ("F4", &["GEAR_KeroseneLamp_Spelunkers", "GEAR_KeroseneLampB"]),
    ("F5", &["GEAR_Torch"]),
    ("F6", &["GEAR_MooseHideBag:1"]),
];

/// Split `name` or `name:slot` on the first colon.
///
/// The name is always the part before the colon, even when the suffix is not
/// a valid slot. Suffixes other than 1 or 2 leave the hint unspecified.
pub fn parse_pattern(raw: &str) -> GearPattern {
    match raw.split_once(':') {
        Some((name, suffix)) => {
            let slot = suffix
                .trim()
                .parse::<i64>()
                .map(SlotHint::from_config_value)
                .unwrap_or(SlotHint::Unspecified);
            GearPattern { name: name.to_string(), slot }
        }
        None => GearPattern { name: raw.to_string(), slot: SlotHint::Unspecified },
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingTable {
    bindings: BTreeMap<KeyId, Vec<GearPattern>>,
}

/// Result of building a table from raw config entries.
#[derive(Debug)]
pub struct LoadedBindings {
    pub table: BindingTable,
    /// Key names that did not resolve to a `KeyId`.
    pub skipped: Vec<String>,
}

impl BindingTable {
    pub fn defaults() -> Self {
        let entries = DEFAULT_BINDINGS.iter().map(|(key, patterns)| {
            (key.to_string(), patterns.iter().map(|p| p.to_string()).collect())
        });
        Self::from_entries(entries).table
    }

    /// Build a table from `(key name, raw patterns)` pairs in file order.
    /// Unknown key names are dropped; a repeated key keeps its last list.
    pub fn from_entries<E>(entries: E) -> LoadedBindings
    where
        E: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut table = BindingTable::default();
        let mut skipped = Vec::new();
        for (key_name, raw_patterns) in entries {
            match key_name.parse::<KeyId>() {
                Ok(key) => {
                    let patterns =
                        raw_patterns.iter().map(String::as_str).map(parse_pattern).collect();
                    table.bindings.insert(key, patterns);
                }
                Err(_) => skipped.push(key_name),
            }
        }
        LoadedBindings { table, skipped }
    }

    pub fn get(&self, key: KeyId) -> Option<&[GearPattern]> {
        self.bindings.get(&key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeyId, &[GearPattern])> {
        self.bindings.iter().map(|(key, patterns)| (*key, patterns.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
