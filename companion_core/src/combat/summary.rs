//! End-of-fight summaries of the targets worth keeping

use super::{CombatSnapshot, Rollups};
use crate::stat_pool::parse::round2;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Damage a mob must have taken for its fight to be archived
pub const MIN_ARCHIVE_DAMAGE: u64 = 500_000;

/// Unit of the per-target `start`/`last` timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampUnit {
    #[default]
    Milliseconds,
    Seconds,
}

impl TimestampUnit {
    /// Convert a timestamp difference to seconds
    pub fn to_seconds(self, delta: f64) -> f64 {
        match self {
            TimestampUnit::Milliseconds => delta / 1000.0,
            TimestampUnit::Seconds => delta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub target_id: i64,
    pub mob_code: i64,
    pub total_damage: u64,
    /// Seconds between the first and latest hit, 0 when unknown
    pub duration: f64,
    /// Rounded to two decimals
    pub dps: f64,
    /// Per-player rollup on this target
    pub player_stats: Rollups,
}

/// Summaries of mob targets that took more than `min_damage`,
/// highest damage first, with millisecond timestamps
///
/// Empty when the fight has nothing worth archiving.
pub fn summarize_targets(snapshot: &CombatSnapshot, min_damage: u64) -> Vec<TargetSummary> {
    summarize_targets_in(snapshot, min_damage, TimestampUnit::default())
}

/// [`summarize_targets`] for a producer stamping targets in `unit`
pub fn summarize_targets_in(
    snapshot: &CombatSnapshot,
    min_damage: u64,
    unit: TimestampUnit,
) -> Vec<TargetSummary> {
    let mut summaries: Vec<TargetSummary> = snapshot
        .overview_stats_by_target
        .iter()
        .filter_map(|(key, stats)| {
            let target_id = key.parse::<i64>().ok()?;
            let mob_code = snapshot.mob_code_of(target_id)?;
            if stats.total_damage <= min_damage {
                return None;
            }

            let duration = snapshot
                .target_window(target_id)
                .map(|window| unit.to_seconds(window))
                .unwrap_or(0.0);
            let dps = if duration > 0.0 {
                round2(stats.total_damage as f64 / duration)
            } else {
                0.0
            };

            Some(TargetSummary {
                target_id,
                mob_code,
                total_damage: stats.total_damage,
                duration,
                dps,
                player_stats: snapshot
                    .overview_stats_by_target_player
                    .get(key)
                    .cloned()
                    .unwrap_or_default(),
            })
        })
        .collect();

    summaries.sort_by_key(|s| (Reverse(s.total_damage), s.target_id));
    summaries
}
