//! companion_core - Character scoring and combat analytics for a game companion
//!
//! This library provides:
//! - StatCatalog: Display label <-> canonical stat key mapping
//! - StatCollector: Provenance-tagged stat entries from a character snapshot
//! - StatEntriesMap + sum: Grouped stat pool and sum queries
//! - ScoreEngine: Seven-zone multiplicative power score with a breakdown
//! - Combat reduction: Ranked per-player and per-skill views of a live fight

pub mod collector;
pub mod combat;
pub mod config;
pub mod prelude;
pub mod score;
pub mod snapshot;
pub mod source;
pub mod stat_pool;
pub mod types;

// Re-export core types for convenience
pub use collector::{collect_stats, CollectError, CollectMode, StatCollector};
pub use combat::{
    reduce, summarize_targets, CombatSnapshot, DerivedView, HitStats, PlayerRow,
    SelectionContext, SkillRow, TargetSummary,
};
pub use config::{default_catalog, ConfigError, DisplaySettings, ScoreConstants, StatCatalog};
pub use score::{
    compute_score, score_character, CharacterScores, ScoreBreakdown, ScoreEngine, ScoreZone,
    ScoredCharacter, ZoneKind,
};
pub use snapshot::{CharacterSnapshot, SnapshotError};
pub use source::{
    BaseStatsSource, BoardSource, ConversionSource, GearSource, StatSource, TitleSource,
};
pub use stat_pool::{sum, StatEntriesMap, StatEntry, StatSum, SumMode};
pub use types::{SpecialHit, StatType, Unit};
