//! Equip, wear and take-off transitions for the chosen item.
//!
//! Clothing toggles: wearing the chosen piece again in its target layer takes
//! it off and puts back whatever the mod displaced from that slot earlier.

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::host::PlayerEquipment;
use crate::selector::Candidate;
use crate::types::SlotKey;

/// Clothing the mod took off to make room, keyed by region and layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviousClothing<I> {
    entries: BTreeMap<SlotKey, I>,
}

impl<I> Default for PreviousClothing<I> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<I: Copy> PreviousClothing<I> {
    pub fn get(&self, key: SlotKey) -> Option<I> {
        self.entries.get(&key).copied()
    }

    /// Replaces any older record for the same slot.
    pub fn record(&mut self, key: SlotKey, item: I) {
        self.entries.insert(key, item);
    }

    pub fn take(&mut self, key: SlotKey) -> Option<I> {
        self.entries.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipOutcome<I> {
    /// Generic equip for anything that is not clothing.
    Equipped { item: I },
    /// `replaced` is what occupied the slot before and is now recorded.
    PutOn { item: I, slot: SlotKey, replaced: Option<I> },
    /// `restored` is the recorded item put back on, if any.
    TookOff { item: I, slot: SlotKey, restored: Option<I> },
}

/// Apply the transition for `choice`. Any host failure aborts the remaining
/// steps; steps already done stay done.
pub fn apply_choice<P: PlayerEquipment>(
    player: &mut P,
    previous: &mut PreviousClothing<P::Item>,
    choice: &Candidate<'_, P::Item>,
    diagnostics: bool,
) -> Result<EquipOutcome<P::Item>, HostError> {
    let item = choice.info.item;
    let Some(clothing) = choice.info.clothing else {
        player.equip(item)?;
        match choice.info.rounds_in_clip {
            Some(rounds) => diag!(diagnostics, name = %choice.info.name, rounds, "equipped"),
            None => diag!(diagnostics, name = %choice.info.name, hp = choice.info.hp, "equipped"),
        }
        return Ok(EquipOutcome::Equipped { item });
    };

    let layer = clothing.target_layer(choice.slot);
    let slot = SlotKey { region: clothing.region, layer };

    // A failed wearing query counts as "not worn here".
    let worn_here = matches!(player.worn_layer(item), Ok(Some(worn)) if worn == layer);

    if worn_here {
        player.take_off_clothing(item)?;
        let _ = player.play_unequip_audio(item);
        diag!(diagnostics, name = %choice.info.name, %slot, "took off clothing");

        let mut restored = None;
        if let Some(prev) = previous.take(slot) {
            match player.worn_layer(prev) {
                Ok(None) => {
                    player.put_on_clothing(prev, layer)?;
                    let _ = player.play_equip_audio(prev);
                    diag!(diagnostics, item = ?prev, %slot, "restored previous clothing");
                    restored = Some(prev);
                }
                Ok(Some(_)) => {
                    diag!(diagnostics, item = ?prev, %slot, "previous clothing worn elsewhere");
                }
                // The recorded item is gone from the host.
                Err(err) => {
                    diag!(diagnostics, item = ?prev, %slot, error = %err, "cannot restore");
                }
            }
        }
        return Ok(EquipOutcome::TookOff { item, slot, restored });
    }

    let mut replaced = None;
    if let Some(current) = player.clothing_in_slot(clothing.region, layer)?
        && current != item
    {
        previous.record(slot, current);
        player.take_off_clothing(current)?;
        diag!(diagnostics, item = ?current, %slot, "stored and took off previous clothing");
        replaced = Some(current);
    }

    player.put_on_clothing(item, layer)?;
    let _ = player.play_equip_audio(item);
    diag!(diagnostics, name = %choice.info.name, %slot, "put on clothing");
    Ok(EquipOutcome::PutOn { item, slot, replaced })
}
