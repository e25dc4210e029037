use std::io;
use std::path::PathBuf;

/// The binding config exists but could not be read or understood.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config {} has the wrong shape: {reason}", path.display())]
    Shape { path: PathBuf, reason: String },
}

/// A host object was missing or a host call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("inventory component is unavailable")]
    InventoryUnavailable,
    #[error("player equipment context is unavailable")]
    PlayerUnavailable,
    #[error("host call {op} failed: {reason}")]
    Call { op: &'static str, reason: String },
}

impl HostError {
    pub fn call(op: &'static str, reason: impl Into<String>) -> Self {
        HostError::Call { op, reason: reason.into() }
    }

    /// Missing host objects, as opposed to a host call that threw.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, HostError::InventoryUnavailable | HostError::PlayerUnavailable)
    }
}

/// Aborts a single equip invocation. Never fatal to the mod.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error(transparent)]
    Host(#[from] HostError),
}
