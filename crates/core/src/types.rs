use std::fmt;

use serde::{Deserialize, Serialize};

/// Which clothing layer a pattern asks for. Only meaningful for clothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotHint {
    #[default]
    Unspecified,
    /// Config value `1`: the item's minimum layer.
    Min,
    /// Config value `2`: the item's maximum layer.
    Max,
}

impl SlotHint {
    pub fn from_config_value(value: i64) -> Self {
        match value {
            1 => SlotHint::Min,
            2 => SlotHint::Max,
            _ => SlotHint::Unspecified,
        }
    }

    pub fn config_value(self) -> Option<u8> {
        match self {
            SlotHint::Unspecified => None,
            SlotHint::Min => Some(1),
            SlotHint::Max => Some(2),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GearPattern {
    pub name: String,
    pub slot: SlotHint,
}

impl GearPattern {
    /// Case-insensitive exact or substring match. An empty name matches nothing.
    pub fn matches(&self, item_name: &str) -> bool {
        if self.name.is_empty() {
            return false;
        }
        let needle = self.name.to_lowercase();
        let haystack = item_name.to_lowercase();
        haystack == needle || haystack.contains(&needle)
    }
}

impl fmt::Display for GearPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.config_value() {
            Some(slot) => write!(f, "{}:{slot}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClothingRegion {
    Head,
    Accessory,
    Chest,
    Hands,
    Legs,
    Feet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClothingLayer {
    Base,
    Mid,
    Top,
    Top2,
}

/// Composite key for the previously-worn record: one entry per region and layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub region: ClothingRegion,
    pub layer: ClothingLayer,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.region as u8, self.layer as u8)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingFacet {
    pub region: ClothingRegion,
    pub min_layer: ClothingLayer,
    pub max_layer: ClothingLayer,
}

impl ClothingFacet {
    pub fn target_layer(&self, slot: SlotHint) -> ClothingLayer {
        match slot {
            SlotHint::Max => self.max_layer,
            SlotHint::Min | SlotHint::Unspecified => self.min_layer,
        }
    }
}

/// Snapshot of one inventory item, resolved from the host for the current tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GearInfo<I> {
    pub item: I,
    pub name: String,
    pub hp: f32,
    /// `None` when the item has no ammunition concept.
    pub rounds_in_clip: Option<u32>,
    pub clothing: Option<ClothingFacet>,
}
