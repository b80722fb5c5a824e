//! Prelude module for convenient imports
//!
//! ```rust
//! use companion_core::prelude::*;
//! ```

// Core types
pub use crate::stat_pool::{StatEntriesMap, StatEntry, SumMode};
pub use crate::types::{SpecialHit, StatType, Unit};

// Collection
pub use crate::collector::{CollectMode, StatCollector};
pub use crate::snapshot::CharacterSnapshot;
pub use crate::source::StatSource;

// Scoring
pub use crate::score::{compute_score, score_character, ScoreBreakdown, ScoreEngine, ZoneKind};

// Combat
pub use crate::combat::{reduce, CombatSnapshot, DerivedView, SelectionContext};

// Config
pub use crate::config::{default_catalog, DisplaySettings, ScoreConstants, StatCatalog};
