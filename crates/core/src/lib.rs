//! Hotkey gear selection for a survival game mod.
//!
//! Keys are bound to ordered lists of gear-name patterns. Pressing a bound key
//! picks the best matching item the player carries and equips or wears it.

/// Verbose step logging, only emitted while the diagnostics marker exists.
macro_rules! diag {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::info!(target: "hotkey::debug", $($arg)+);
        }
    };
}

pub mod bindings;
pub mod bindings_file;
pub mod equipper;
pub mod error;
pub mod host;
pub mod hotkey_mod;
pub mod keys;
pub mod selector;
pub mod types;

#[cfg(test)]
mod test_support;

pub use bindings::{BindingTable, LoadedBindings, parse_pattern};
pub use bindings_file::ModPaths;
pub use equipper::{EquipOutcome, PreviousClothing};
pub use error::{ConfigError, EquipError, HostError};
pub use host::{GameHost, PlayerEquipment};
pub use hotkey_mod::{HotkeyMod, KeyReport};
pub use keys::KeyId;
pub use selector::{Candidate, collect_candidates, select_best};
pub use types::*;
