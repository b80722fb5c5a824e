//! StatPool - Provenance-tagged stat contributions grouped by canonical type

mod aggregator;
pub mod parse;

pub use aggregator::{sum, StatSum, StatTypes, SumMode};

use crate::types::{StatType, Unit};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One contribution to a character's stat pool
///
/// Entries are built once by a stat source and never changed afterwards;
/// fields are only readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(rename = "type")]
    stat_type: StatType,
    name: String,
    value: f64,
    /// Lower end of range-valued stats
    #[serde(default)]
    min_value: Option<f64>,
    /// Provenance, e.g. `"Sword[soul-bind]"`
    from: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    unit: Unit,
}

impl StatEntry {
    /// Create an entry with no range, icon or unit
    pub fn new(stat_type: StatType, name: impl Into<String>, value: f64) -> Self {
        StatEntry {
            stat_type,
            name: name.into(),
            value,
            min_value: None,
            from: String::new(),
            icon: String::new(),
            unit: Unit::None,
        }
    }

    pub fn with_min_value(mut self, min_value: Option<f64>) -> Self {
        self.min_value = min_value;
        self
    }

    pub fn with_source(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn stat_type(&self) -> StatType {
        self.stat_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    /// Minimum value, falling back to the nominal value
    pub fn effective_min(&self) -> f64 {
        self.min_value.unwrap_or(self.value)
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

/// Stat entries grouped by canonical type, each group in collection order
///
/// Entries are keyed by their own `stat_type`. Deserialization goes through
/// [`StatEntriesMap::push`] as well and rejects entries filed under another
/// type's key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatEntriesMap {
    groups: BTreeMap<StatType, Vec<StatEntry>>,
}

impl StatEntriesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the group of its own type
    pub fn push(&mut self, entry: StatEntry) {
        self.groups.entry(entry.stat_type).or_default().push(entry);
    }

    /// Entries recorded under a type (empty when absent)
    pub fn get(&self, stat_type: StatType) -> &[StatEntry] {
        self.groups.get(&stat_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, stat_type: StatType) -> bool {
        self.groups.contains_key(&stat_type)
    }

    /// Number of distinct types present
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of entries across all types
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatType, &[StatEntry])> {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Contributions whose label the catalog could not resolve
    pub fn unknown_entries(&self) -> &[StatEntry] {
        self.get(StatType::Unknown)
    }

    /// Sum over a set of types, see [`sum`]
    pub fn sum<'a>(&'a self, types: impl Into<StatTypes>, mode: SumMode) -> StatSum<'a> {
        sum(types, self, mode)
    }

    /// Only the total of [`StatEntriesMap::sum`]
    pub fn total(&self, types: impl Into<StatTypes>, mode: SumMode) -> f64 {
        sum(types, self, mode).total
    }
}

impl<'de> Deserialize<'de> for StatEntriesMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let groups = BTreeMap::<StatType, Vec<StatEntry>>::deserialize(deserializer)?;
        let mut map = StatEntriesMap::new();
        for (key, entries) in groups {
            for entry in entries {
                if entry.stat_type != key {
                    return Err(de::Error::custom(format!(
                        "{} entry filed under {}",
                        entry.stat_type, key
                    )));
                }
                map.push(entry);
            }
        }
        Ok(map)
    }
}

impl FromIterator<StatEntry> for StatEntriesMap {
    fn from_iter<I: IntoIterator<Item = StatEntry>>(iter: I) -> Self {
        let mut map = StatEntriesMap::new();
        for entry in iter {
            map.push(entry);
        }
        map
    }
}

impl Extend<StatEntry> for StatEntriesMap {
    fn extend<I: IntoIterator<Item = StatEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}
