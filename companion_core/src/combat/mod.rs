//! Combat analytics - Ranked views over live damage-meter snapshots
//!
//! Every view is recomputed from scratch from a [`CombatSnapshot`] and a
//! [`SelectionContext`]; nothing is carried between reductions.

mod context;
mod reducer;
mod result;
mod snapshot;
mod summary;

pub use context::SelectionContext;
pub use reducer::{auto_target, reduce, DerivedView};
pub use result::{PlayerRow, SkillRow, SpecialHitStat};
pub use snapshot::{CombatSnapshot, HitStats, OverviewStats, Rollups};
pub use summary::{
    summarize_targets, summarize_targets_in, TargetSummary, TimestampUnit, MIN_ARCHIVE_DAMAGE,
};
