//! Contracts the host game provides to the mod.
//!
//! Items are referenced through `Copy` handles that are resolved again on
//! every tick. The host may destroy an item between ticks, in which case any
//! call with its handle fails with `HostError::Call`.

use std::fmt;

use crate::error::HostError;
use crate::types::{ClothingLayer, ClothingRegion, GearInfo};

pub trait GameHost {
    type Item: Copy + Eq + fmt::Debug;
    type Player: PlayerEquipment<Item = Self::Item>;

    /// Everything the player currently carries.
    /// Fails with `HostError::InventoryUnavailable` when there is no inventory.
    fn inventory(&self) -> Result<Vec<GearInfo<Self::Item>>, HostError>;

    /// Fails with `HostError::PlayerUnavailable` when there is no player context.
    fn player(&mut self) -> Result<&mut Self::Player, HostError>;
}

pub trait PlayerEquipment {
    type Item: Copy + Eq + fmt::Debug;

    fn equip(&mut self, item: Self::Item) -> Result<(), HostError>;

    fn put_on_clothing(&mut self, item: Self::Item, layer: ClothingLayer) -> Result<(), HostError>;

    fn take_off_clothing(&mut self, item: Self::Item) -> Result<(), HostError>;

    fn clothing_in_slot(
        &self,
        region: ClothingRegion,
        layer: ClothingLayer,
    ) -> Result<Option<Self::Item>, HostError>;

    /// The layer `item` is worn in, or `None` if it is not worn.
    fn worn_layer(&self, item: Self::Item) -> Result<Option<ClothingLayer>, HostError>;

    fn play_equip_audio(&mut self, item: Self::Item) -> Result<(), HostError>;

    fn play_unequip_audio(&mut self, item: Self::Item) -> Result<(), HostError>;
}
