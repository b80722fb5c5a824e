//! Snapshot models consumed from upstream collaborators

mod character;

pub use character::{
    Board, BoardEffect, CharacterInfo, CharacterSnapshot, Daevanion, EquippedItem, ItemInfo, ItemStat,
    RawStat, StatSheet, Title, TitleCollection,
};

use crate::stat_pool::parse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot decoding error
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to decode snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stat value as delivered by the data source: a bare number or a string
/// that may carry a percent sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Number(0.0)
    }
}

impl RawValue {
    /// Tolerant numeric reading, 0 when malformed
    pub fn as_f64(&self) -> f64 {
        match self {
            RawValue::Number(v) if v.is_finite() => *v,
            RawValue::Number(_) => 0.0,
            RawValue::Text(s) => parse::to_num(s),
        }
    }

    pub fn has_percent(&self) -> bool {
        match self {
            RawValue::Number(_) => false,
            RawValue::Text(s) => parse::has_percent(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}
