//! Reduce a combat snapshot and a selection into a ranked view

use super::{CombatSnapshot, HitStats, PlayerRow, Rollups, SelectionContext, SkillRow};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Everything the combat panel shows for one snapshot and selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedView {
    /// Target the view is scoped to after auto-targeting
    pub effective_target: Option<i64>,
    /// Target auto-targeting would pick
    pub auto_target: Option<i64>,
    pub total_damage: u64,
    pub current_target_damage: u64,
    pub duration: f64,
    pub running_time: f64,
    /// Seconds the current target has been fought, or the session running time
    pub actual_running_time: f64,
    pub player_stats: Vec<PlayerRow>,
    pub max_damage_player: u64,
    pub skills: Vec<SkillRow>,
    pub target_list: Vec<i64>,
    pub main_player: Option<String>,
}

impl DerivedView {
    /// Damage per second of a row over the displayed running time
    pub fn player_dps(&self, row: &PlayerRow) -> f64 {
        row.dps(self.actual_running_time)
    }

    /// Summed damage of the listed skills
    pub fn skills_total_damage(&self) -> u64 {
        self.skills.iter().map(|s| s.stats.total_damage).sum()
    }
}

/// Target auto-targeting follows: the main player's last target, else the
/// last damaged target
pub fn auto_target(snapshot: &CombatSnapshot) -> Option<i64> {
    snapshot.last_target_by_me.or(snapshot.last_target)
}

/// Build the view for one snapshot and selection
pub fn reduce(snapshot: &CombatSnapshot, context: &SelectionContext) -> DerivedView {
    let auto_target = auto_target(snapshot);
    // Auto-follow replaces the selection outright, even with nothing to follow
    let target = if context.settings.auto_target {
        auto_target
    } else {
        context.current_target
    };
    let player = context.current_player;

    let current_target_damage = match target {
        None => snapshot.overview_stats.total_damage,
        Some(t) => snapshot
            .overview_stats_by_target
            .get(&t.to_string())
            .map(|s| s.total_damage)
            .unwrap_or(0),
    };

    let actual_running_time = target
        .and_then(|t| snapshot.target_window(t))
        .unwrap_or(snapshot.running_time);

    let player_stats = rank_players(snapshot, context, target);
    let max_damage_player = player_stats
        .iter()
        .map(|p| p.stats.total_damage)
        .max()
        .unwrap_or(0);

    DerivedView {
        effective_target: target,
        auto_target,
        total_damage: snapshot.overview_stats.total_damage,
        current_target_damage,
        duration: snapshot.duration,
        running_time: snapshot.running_time,
        actual_running_time,
        player_stats,
        max_damage_player,
        skills: player_skills(snapshot, target, player),
        target_list: snapshot.target_list.clone(),
        main_player: snapshot.main_player.clone(),
    }
}

/// Numeric ids of a rollup with their stats; other keys are dropped
fn numeric_rows(rollups: &Rollups) -> impl Iterator<Item = (i64, &HitStats)> {
    rollups
        .iter()
        .filter_map(|(key, stats)| key.parse::<i64>().ok().map(|id| (id, stats)))
}

fn rank_players(
    snapshot: &CombatSnapshot,
    context: &SelectionContext,
    target: Option<i64>,
) -> Vec<PlayerRow> {
    let rollups = match target {
        Some(t) => snapshot.overview_stats_by_target_player.get(&t.to_string()),
        None => Some(&snapshot.overview_stats_by_player),
    };
    let Some(rollups) = rollups else {
        return Vec::new();
    };

    let settings = &context.settings;
    let mut rows: Vec<PlayerRow> = numeric_rows(rollups)
        .filter(|(id, _)| settings.show_unclassified || snapshot.class_name(*id).is_some())
        .map(|(id, stats)| {
            let nickname = snapshot.nickname(id).map(str::to_string);
            let is_main_player = match (&nickname, &snapshot.main_player) {
                (Some(name), Some(main)) => name == main,
                _ => false,
            };
            PlayerRow {
                player_id: id,
                class_name: snapshot.class_name(id).map(str::to_string),
                is_main_player,
                is_mob: snapshot.mob_code_of(id).is_some(),
                nickname,
                stats: stats.clone(),
            }
        })
        .collect();

    rows.sort_by_key(|r| (Reverse(r.stats.total_damage), r.player_id));
    rows.truncate(settings.max_display_count);
    rows
}

fn player_skills(snapshot: &CombatSnapshot, target: Option<i64>, player: Option<i64>) -> Vec<SkillRow> {
    let Some(player) = player else {
        return Vec::new();
    };
    let player_key = player.to_string();

    let rollups = match target {
        Some(t) => snapshot
            .detailed_skills_stats_by_target_player
            .get(&t.to_string())
            .and_then(|by_player| by_player.get(&player_key)),
        None => snapshot.detailed_skills_stats_by_actor.get(&player_key),
    };
    let Some(rollups) = rollups else {
        return Vec::new();
    };

    let slots = snapshot.actor_skill_slots.get(&player_key);
    let mut skills: Vec<SkillRow> = numeric_rows(rollups)
        .map(|(skill_id, stats)| {
            let original_code = snapshot
                .parsed_skill_code
                .get(&skill_id.to_string())
                .copied()
                .unwrap_or(0);
            SkillRow {
                skill_id,
                original_code,
                slots: slots
                    .and_then(|s| s.get(&original_code.to_string()))
                    .cloned()
                    .unwrap_or_default(),
                stats: stats.clone(),
            }
        })
        .collect();

    skills.sort_by_key(|s| (Reverse(s.stats.total_damage), s.skill_id));
    skills
}
