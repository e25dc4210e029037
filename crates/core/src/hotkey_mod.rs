//! Process-wide mod state and the entry points the host calls.
//!
//! The host calls [`HotkeyMod::start`] once and [`HotkeyMod::update`] once per
//! frame, always from the same thread. Nothing here blocks or spawns work.

use std::fmt;

use crate::bindings::BindingTable;
use crate::bindings_file::ModPaths;
use crate::equipper::{EquipOutcome, PreviousClothing, apply_choice};
use crate::error::{EquipError, HostError};
use crate::host::GameHost;
use crate::keys::KeyId;
use crate::selector::{collect_candidates, select_best};
use crate::types::GearPattern;

/// What one fired binding did this tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyReport<I> {
    pub key: KeyId,
    /// `Ok(None)` when nothing in the inventory matched.
    pub result: Result<Option<EquipOutcome<I>>, EquipError>,
}

#[derive(Debug)]
pub struct HotkeyMod<I> {
    paths: ModPaths,
    bindings: BindingTable,
    previous_clothing: PreviousClothing<I>,
    diagnostics: bool,
}

impl<I: Copy + Eq + fmt::Debug> HotkeyMod<I> {
    /// Startup entry point: read the diagnostics marker and load the bindings.
    pub fn start(paths: ModPaths) -> Self {
        tracing::info!("Hotkey Overhaul mod loaded");
        let diagnostics = paths.diagnostics_enabled();
        let mut this = Self {
            paths,
            bindings: BindingTable::default(),
            previous_clothing: PreviousClothing::default(),
            diagnostics,
        };
        this.reload();
        this
    }

    /// Re-read the config. A broken file falls back to the defaults for this
    /// session and is left as-is on disk.
    pub fn reload(&mut self) {
        match BindingTable::load(&self.paths.config) {
            Ok(loaded) => {
                for key in &loaded.skipped {
                    diag!(self.diagnostics, key = %key, "skipping unknown key in config");
                }
                self.bindings = loaded.table;
            }
            Err(err) => {
                tracing::warn!(error = %err, "hotkey config unusable, using default bindings");
                self.bindings = BindingTable::defaults();
            }
        }
        diag!(self.diagnostics, bindings = self.bindings.len(), "config loaded");
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn previous_clothing(&self) -> &PreviousClothing<I> {
        &self.previous_clothing
    }

    pub fn diagnostics(&self) -> bool {
        self.diagnostics
    }

    /// Per-tick entry point. Runs every binding whose key was pressed this tick,
    /// in key order. Failures are logged and never escape.
    pub fn update<H>(&mut self, host: &mut H, keys_pressed: &[KeyId]) -> Vec<KeyReport<I>>
    where
        H: GameHost<Item = I>,
    {
        let Self { bindings, previous_clothing, diagnostics, .. } = self;
        let mut reports = Vec::new();

        for (key, patterns) in bindings.iter() {
            if !keys_pressed.contains(&key) {
                continue;
            }
            diag!(*diagnostics, %key, "hotkey pressed, trying to equip");
            let result = equip_best(host, previous_clothing, patterns, *diagnostics);
            if let Err(EquipError::Host(err)) = &result {
                log_host_error(key, err);
            }
            reports.push(KeyReport { key, result });
        }
        reports
    }

    /// Select and equip the best item for one pattern list.
    pub fn equip_best<H>(
        &mut self,
        host: &mut H,
        patterns: &[GearPattern],
    ) -> Result<Option<EquipOutcome<I>>, EquipError>
    where
        H: GameHost<Item = I>,
    {
        equip_best(host, &mut self.previous_clothing, patterns, self.diagnostics)
    }
}

fn equip_best<H: GameHost>(
    host: &mut H,
    previous: &mut PreviousClothing<H::Item>,
    patterns: &[GearPattern],
    diagnostics: bool,
) -> Result<Option<EquipOutcome<H::Item>>, EquipError> {
    let items = host.inventory()?;
    let candidates = collect_candidates(patterns, &items);
    if candidates.is_empty() {
        tracing::warn!("no matching items found in inventory");
        return Ok(None);
    }

    let Some(choice) = select_best(&candidates) else {
        tracing::warn!("no suitable item found after selection");
        return Ok(None);
    };

    let player = host.player()?;
    let outcome = apply_choice(player, previous, choice, diagnostics)?;
    Ok(Some(outcome))
}

fn log_host_error(key: KeyId, err: &HostError) {
    if err.is_unavailable() {
        tracing::warn!(%key, error = %err, "host unavailable, skipping hotkey");
    } else {
        tracing::error!(%key, error = %err, "failed to equip item");
    }
}
