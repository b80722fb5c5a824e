//! StatCollector - Walks a character snapshot through every stat source

use crate::config::StatCatalog;
use crate::snapshot::CharacterSnapshot;
use crate::source::{
    BaseStatsSource, BoardSource, ConversionSource, GearSource, StatSource, TitleSource,
};
use crate::stat_pool::{StatEntriesMap, StatEntry};
use crate::types::StatType;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// How unrecognized stat labels are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectMode {
    /// Log and keep them under `StatType::Unknown`
    #[default]
    Lenient,
    /// Fail the whole collection
    Strict,
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("unrecognized stat labels: {}", .0.join(", "))]
    UnrecognizedLabels(Vec<String>),
}

/// Collects provenance-tagged stat entries from a character snapshot
pub struct StatCollector<'c> {
    catalog: &'c StatCatalog,
    mode: CollectMode,
}

impl<'c> StatCollector<'c> {
    pub fn new(catalog: &'c StatCatalog) -> Self {
        StatCollector {
            catalog,
            mode: CollectMode::Lenient,
        }
    }

    pub fn with_mode(mut self, mode: CollectMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> CollectMode {
        self.mode
    }

    /// Every source the snapshot provides, unsorted
    pub fn sources<'s>(&self, snapshot: &'s CharacterSnapshot) -> Vec<Box<dyn StatSource + 's>> {
        let info = &snapshot.info;
        let mut sources: Vec<Box<dyn StatSource + 's>> = vec![Box::new(BaseStatsSource::default())];

        for item in &info.equipment_list {
            sources.push(Box::new(GearSource::new(item)));
        }
        for board in &info.daevanion.board_list {
            sources.push(Box::new(BoardSource::new(board)));
        }
        for title in &info.title.title_list {
            sources.push(Box::new(TitleSource::new(title)));
        }
        sources.push(Box::new(ConversionSource::new(&info.stat)));

        sources
    }

    /// Ordered entries from all of the snapshot's sources
    pub fn collect_entries(&self, snapshot: &CharacterSnapshot) -> Result<Vec<StatEntry>, CollectError> {
        self.collect_from_sources(&self.sources(snapshot))
    }

    /// Entries grouped by canonical type
    pub fn collect(&self, snapshot: &CharacterSnapshot) -> Result<StatEntriesMap, CollectError> {
        Ok(self.collect_entries(snapshot)?.into_iter().collect())
    }

    /// Run an explicit set of sources in priority order
    ///
    /// Sources with equal priority keep the order they were given in.
    pub fn collect_from_sources(
        &self,
        sources: &[Box<dyn StatSource + '_>],
    ) -> Result<Vec<StatEntry>, CollectError> {
        let mut sorted: Vec<_> = sources.iter().collect();
        sorted.sort_by_key(|s| s.priority());

        let mut entries = Vec::new();
        for source in sorted {
            let before = entries.len();
            source.collect(self.catalog, &mut entries);
            debug!(source = source.id(), count = entries.len() - before, "collected stat entries");
        }

        if self.mode == CollectMode::Strict {
            let unrecognized: Vec<String> = entries
                .iter()
                .filter(|e| e.stat_type() == StatType::Unknown)
                .map(|e| format!("{} ({})", e.name(), e.from()))
                .collect();
            if !unrecognized.is_empty() {
                return Err(CollectError::UnrecognizedLabels(unrecognized));
            }
        }

        Ok(entries)
    }
}

/// Collect a snapshot leniently with the given catalog
pub fn collect_stats(snapshot: &CharacterSnapshot, catalog: &StatCatalog) -> StatEntriesMap {
    StatCollector::new(catalog)
        .collect_entries(snapshot)
        .map(|entries| entries.into_iter().collect())
        .unwrap_or_default()
}
