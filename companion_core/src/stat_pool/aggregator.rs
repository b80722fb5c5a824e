//! StatAggregator - Sum queries over a StatEntriesMap

use super::{StatEntriesMap, StatEntry};
use crate::types::StatType;
use serde::{Deserialize, Serialize};

/// Which number of each entry is summed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SumMode {
    /// Nominal value
    #[default]
    Value,
    /// Minimum value, falling back to the nominal value
    Min,
}

/// One or more stat types to sum over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTypes(Vec<StatType>);

impl StatTypes {
    pub fn as_slice(&self) -> &[StatType] {
        &self.0
    }
}

impl From<StatType> for StatTypes {
    fn from(stat: StatType) -> Self {
        StatTypes(vec![stat])
    }
}

impl From<&[StatType]> for StatTypes {
    fn from(stats: &[StatType]) -> Self {
        StatTypes(stats.to_vec())
    }
}

impl<const N: usize> From<[StatType; N]> for StatTypes {
    fn from(stats: [StatType; N]) -> Self {
        StatTypes(stats.to_vec())
    }
}

impl From<Vec<StatType>> for StatTypes {
    fn from(stats: Vec<StatType>) -> Self {
        StatTypes(stats)
    }
}

/// Result of a sum query: the total and the entries that made it up
#[derive(Debug, Clone, PartialEq)]
pub struct StatSum<'a> {
    pub total: f64,
    pub entries: Vec<&'a StatEntry>,
}

/// Sum the entries recorded under `types`
///
/// Groups are concatenated in request order; types absent from the map
/// contribute nothing.
pub fn sum<'a>(types: impl Into<StatTypes>, map: &'a StatEntriesMap, mode: SumMode) -> StatSum<'a> {
    let types = types.into();
    let entries: Vec<&StatEntry> = types
        .as_slice()
        .iter()
        .flat_map(|t| map.get(*t).iter())
        .collect();

    let total = match mode {
        SumMode::Value => entries.iter().map(|e| e.value()).sum(),
        SumMode::Min => entries.iter().map(|e| e.effective_min()).sum(),
    };

    StatSum { total, entries }
}
