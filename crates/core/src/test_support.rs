//! In-memory host fakes shared by the unit tests.

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::host::{GameHost, PlayerEquipment};
use crate::types::{ClothingFacet, ClothingLayer, ClothingRegion, GearInfo};

pub(crate) fn item(id: u32, name: &str) -> GearInfo<u32> {
    GearInfo { item: id, name: name.to_string(), hp: 100.0, rounds_in_clip: None, clothing: None }
}

pub(crate) fn gun(id: u32, name: &str, rounds: u32) -> GearInfo<u32> {
    GearInfo { rounds_in_clip: Some(rounds), ..item(id, name) }
}

pub(crate) fn torch(id: u32, hp: f32) -> GearInfo<u32> {
    GearInfo { hp, ..item(id, "GEAR_Torch") }
}

/// Clothing that can go in the `Mid` (minimum) or `Top` (maximum) layer.
pub(crate) fn clothing(id: u32, name: &str, region: ClothingRegion) -> GearInfo<u32> {
    let facet =
        ClothingFacet { region, min_layer: ClothingLayer::Mid, max_layer: ClothingLayer::Top };
    GearInfo { clothing: Some(facet), ..item(id, name) }
}

#[derive(Debug, Default)]
pub(crate) struct FakePlayer {
    regions: BTreeMap<u32, ClothingRegion>,
    worn: BTreeMap<u32, ClothingLayer>,
    pub equipped: Option<u32>,
    pub audio_fails: bool,
    pub take_off_fails: bool,
}

impl FakePlayer {
    pub(crate) fn knowing(items: &[&GearInfo<u32>]) -> Self {
        let regions = items
            .iter()
            .filter_map(|info| info.clothing.map(|facet| (info.item, facet.region)))
            .collect();
        Self { regions, ..Self::default() }
    }

    pub(crate) fn wear(&mut self, item: u32, region: ClothingRegion, layer: ClothingLayer) {
        self.regions.insert(item, region);
        self.worn.insert(item, layer);
    }

    /// Forget `item`, as the host does when it destroys an object.
    pub(crate) fn destroy(&mut self, item: u32) {
        self.regions.remove(&item);
        self.worn.remove(&item);
    }

    fn known(&self, op: &'static str, item: u32) -> Result<(), HostError> {
        if !self.regions.contains_key(&item) {
            return Err(HostError::call(op, format!("unknown item {item}")));
        }
        Ok(())
    }

    fn audio(&self) -> Result<(), HostError> {
        if self.audio_fails {
            return Err(HostError::call("play_audio", "no audio source"));
        }
        Ok(())
    }
}

impl PlayerEquipment for FakePlayer {
    type Item = u32;

    fn equip(&mut self, item: u32) -> Result<(), HostError> {
        self.equipped = Some(item);
        Ok(())
    }

    fn put_on_clothing(&mut self, item: u32, layer: ClothingLayer) -> Result<(), HostError> {
        self.known("put_on_clothing", item)?;
        self.worn.insert(item, layer);
        Ok(())
    }

    fn take_off_clothing(&mut self, item: u32) -> Result<(), HostError> {
        if self.take_off_fails {
            return Err(HostError::call("take_off_clothing", "host threw"));
        }
        self.worn.remove(&item);
        Ok(())
    }

    fn clothing_in_slot(
        &self,
        region: ClothingRegion,
        layer: ClothingLayer,
    ) -> Result<Option<u32>, HostError> {
        Ok(self
            .worn
            .iter()
            .find(|(item, worn)| **worn == layer && self.regions.get(item) == Some(&region))
            .map(|(item, _)| *item))
    }

    fn worn_layer(&self, item: u32) -> Result<Option<ClothingLayer>, HostError> {
        self.known("worn_layer", item)?;
        Ok(self.worn.get(&item).copied())
    }

    fn play_equip_audio(&mut self, _item: u32) -> Result<(), HostError> {
        self.audio()
    }

    fn play_unequip_audio(&mut self, _item: u32) -> Result<(), HostError> {
        self.audio()
    }
}

/// `None` fields model a host whose inventory or player context is missing.
#[derive(Debug)]
pub(crate) struct FakeHost {
    pub items: Option<Vec<GearInfo<u32>>>,
    pub player: Option<FakePlayer>,
}

impl FakeHost {
    pub(crate) fn new(items: Vec<GearInfo<u32>>) -> Self {
        let player = FakePlayer::knowing(&items.iter().collect::<Vec<_>>());
        Self { items: Some(items), player: Some(player) }
    }
}

impl GameHost for FakeHost {
    type Item = u32;
    type Player = FakePlayer;

    fn inventory(&self) -> Result<Vec<GearInfo<u32>>, HostError> {
        self.items.clone().ok_or(HostError::InventoryUnavailable)
    }

    fn player(&mut self) -> Result<&mut FakePlayer, HostError> {
        self.player.as_mut().ok_or(HostError::PlayerUnavailable)
    }
}
