//! A stand-in for the game host, driven from a JSON inventory snapshot.
//!
//! Items live in a `SlotMap`, so a handle to a removed item stays invalid
//! instead of aliasing a newer one. Every host call on a stale handle fails
//! the way a destroyed host object would.

use std::fs;
use std::path::Path;

use anyhow::Context;
use hotkey_core::{
    ClothingFacet, ClothingLayer, ClothingRegion, GameHost, GearInfo, HostError, PlayerEquipment,
};
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct SimItemId;
}

fn full_hp() -> f32 {
    100.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimItem {
    pub name: String,
    #[serde(default = "full_hp")]
    pub hp: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clothing: Option<ClothingFacet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worn_layer: Option<ClothingLayer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct InventorySnapshot {
    pub items: Vec<SimItem>,
}

impl InventorySnapshot {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Inventory file is not a valid snapshot: {}", path.display()))
    }
}

#[derive(Debug, Default)]
pub struct SimPlayer {
    items: SlotMap<SimItemId, SimItem>,
    equipped: Option<SimItemId>,
    audio_fails: bool,
    audio_cues: usize,
}

impl SimPlayer {
    fn item(&self, op: &'static str, id: SimItemId) -> Result<&SimItem, HostError> {
        self.items.get(id).ok_or_else(|| HostError::call(op, format!("stale handle {id:?}")))
    }

    fn item_mut(&mut self, op: &'static str, id: SimItemId) -> Result<&mut SimItem, HostError> {
        self.items.get_mut(id).ok_or_else(|| HostError::call(op, format!("stale handle {id:?}")))
    }

    fn audio(&mut self, op: &'static str, id: SimItemId) -> Result<(), HostError> {
        self.item(op, id)?;
        if self.audio_fails {
            return Err(HostError::call(op, "audio source missing"));
        }
        self.audio_cues += 1;
        Ok(())
    }
}

impl PlayerEquipment for SimPlayer {
    type Item = SimItemId;

    fn equip(&mut self, item: SimItemId) -> Result<(), HostError> {
        self.item("equip", item)?;
        self.equipped = Some(item);
        Ok(())
    }

    fn put_on_clothing(&mut self, item: SimItemId, layer: ClothingLayer) -> Result<(), HostError> {
        let entry = self.item_mut("put_on_clothing", item)?;
        if entry.clothing.is_none() {
            let reason = format!("{} is not clothing", entry.name);
            return Err(HostError::call("put_on_clothing", reason));
        }
        entry.worn_layer = Some(layer);
        Ok(())
    }

    fn take_off_clothing(&mut self, item: SimItemId) -> Result<(), HostError> {
        self.item_mut("take_off_clothing", item)?.worn_layer = None;
        Ok(())
    }

    fn clothing_in_slot(
        &self,
        region: ClothingRegion,
        layer: ClothingLayer,
    ) -> Result<Option<SimItemId>, HostError> {
        Ok(self.items.iter().find_map(|(id, item)| {
            let in_slot = item.clothing.is_some_and(|facet| facet.region == region)
                && item.worn_layer == Some(layer);
            in_slot.then_some(id)
        }))
    }

    fn worn_layer(&self, item: SimItemId) -> Result<Option<ClothingLayer>, HostError> {
        Ok(self.item("worn_layer", item)?.worn_layer)
    }

    fn play_equip_audio(&mut self, item: SimItemId) -> Result<(), HostError> {
        self.audio("play_equip_audio", item)
    }

    fn play_unequip_audio(&mut self, item: SimItemId) -> Result<(), HostError> {
        self.audio("play_unequip_audio", item)
    }
}

#[derive(Debug, Default)]
pub struct SimHost {
    player: SimPlayer,
    /// Models a host that has not created its player yet.
    pub player_missing: bool,
}

impl SimHost {
    pub fn from_snapshot(snapshot: InventorySnapshot) -> Self {
        let mut host = Self::default();
        for item in snapshot.items {
            host.add_item(item);
        }
        host
    }

    pub fn add_item(&mut self, item: SimItem) -> SimItemId {
        self.player.items.insert(item)
    }

    pub fn remove_item(&mut self, id: SimItemId) -> Option<SimItem> {
        if self.player.equipped == Some(id) {
            self.player.equipped = None;
        }
        self.player.items.remove(id)
    }

    pub fn set_audio_fails(&mut self, fails: bool) {
        self.player.audio_fails = fails;
    }

    pub fn audio_cues(&self) -> usize {
        self.player.audio_cues
    }

    pub fn name_of(&self, id: SimItemId) -> Option<&str> {
        self.player.items.get(id).map(|item| item.name.as_str())
    }

    pub fn find(&self, name: &str) -> Option<SimItemId> {
        self.player.items.iter().find(|(_, item)| item.name == name).map(|(id, _)| id)
    }

    pub fn equipped(&self) -> Option<SimItemId> {
        self.player.equipped
    }

    /// Worn clothing as `(name, region, layer)`, in region then layer order.
    pub fn worn(&self) -> Vec<(&str, ClothingRegion, ClothingLayer)> {
        let mut worn: Vec<_> = self
            .player
            .items
            .values()
            .filter_map(|item| {
                let facet = item.clothing?;
                let layer = item.worn_layer?;
                Some((item.name.as_str(), facet.region, layer))
            })
            .collect();
        worn.sort_by_key(|(name, region, layer)| (*region, *layer, *name));
        worn
    }
}

impl GameHost for SimHost {
    type Item = SimItemId;
    type Player = SimPlayer;

    fn inventory(&self) -> Result<Vec<GearInfo<SimItemId>>, HostError> {
        Ok(self
            .player
            .items
            .iter()
            .map(|(id, item)| GearInfo {
                item: id,
                name: item.name.clone(),
                hp: item.hp,
                rounds_in_clip: item.rounds,
                clothing: item.clothing,
            })
            .collect())
    }

    fn player(&mut self) -> Result<&mut SimPlayer, HostError> {
        if self.player_missing {
            return Err(HostError::PlayerUnavailable);
        }
        Ok(&mut self.player)
    }
}
