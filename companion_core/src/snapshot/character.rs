//! Character profile snapshot as returned by the profile provider
//!
//! Every nested collection defaults to empty, and an explicit `null` is read
//! as empty too, so the stat sources can iterate unconditionally.

use super::{RawValue, SnapshotError};
use serde::{Deserialize, Deserializer, Serialize};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    #[serde(default, deserialize_with = "nullable")]
    pub character_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub server_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub info: CharacterInfo,
}

impl CharacterSnapshot {
    /// Decode a snapshot from the provider's JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `ItemLevel` from the raw stat sheet, 0 when absent
    pub fn item_level(&self) -> f64 {
        self.info
            .stat
            .stat_list
            .iter()
            .find(|s| s.stat_type == "ItemLevel")
            .map(|s| s.value.as_f64())
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub equipment_list: Vec<EquippedItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub daevanion: Daevanion,
    #[serde(default, deserialize_with = "nullable")]
    pub title: TitleCollection,
    #[serde(default, deserialize_with = "nullable")]
    pub stat: StatSheet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquippedItem {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
    #[serde(default)]
    pub item_info: Option<ItemInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub main_stats: Vec<ItemStat>,
    #[serde(default, deserialize_with = "nullable")]
    pub sub_stats: Vec<ItemStat>,
    #[serde(default, deserialize_with = "nullable")]
    pub magic_stone_stat: Vec<ItemStat>,
    /// Sub stats only count once the item has a soul-bind rate
    #[serde(default)]
    pub soul_bind_rate: Option<RawValue>,
}

impl ItemInfo {
    pub fn is_soul_bound(&self) -> bool {
        self.soul_bind_rate
            .as_ref()
            .map(|rate| rate.as_f64() != 0.0)
            .unwrap_or(false)
    }
}

/// One stat line on an item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStat {
    /// The data source's own key for this stat, when it sends one
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: RawValue,
    #[serde(default)]
    pub extra: Option<RawValue>,
    #[serde(default)]
    pub min_value: Option<RawValue>,
    #[serde(default, deserialize_with = "nullable")]
    pub exceed: bool,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ItemStat {
    /// `value + extra`
    pub fn combined_value(&self) -> f64 {
        self.value.as_f64() + self.extra.as_ref().map(RawValue::as_f64).unwrap_or(0.0)
    }

    pub fn explicit_min(&self) -> Option<f64> {
        self.min_value.as_ref().map(RawValue::as_f64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Daevanion {
    #[serde(default, deserialize_with = "nullable")]
    pub board_list: Vec<Board>,
}

/// A passive board and the effects unlocked on it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub open_stat_effect_list: Vec<BoardEffect>,
}

/// `"<label> <value>"` effect description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardEffect {
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCollection {
    #[serde(default, deserialize_with = "nullable")]
    pub title_list: Vec<Title>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub equip_stat_list: Vec<BoardEffect>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSheet {
    #[serde(default, deserialize_with = "nullable")]
    pub stat_list: Vec<RawStat>,
}

/// One line of the raw attribute sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStat {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub stat_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: RawValue,
}
