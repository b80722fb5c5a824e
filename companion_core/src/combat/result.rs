//! Rows of a reduced combat view

use super::HitStats;
use crate::types::SpecialHit;
use serde::{Deserialize, Serialize};

/// One ranked damage dealer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub player_id: i64,
    pub nickname: Option<String>,
    /// Class from the producer's class map, `None` for unclassified actors
    pub class_name: Option<String>,
    pub is_main_player: bool,
    /// Whether the actor has a mob code
    pub is_mob: bool,
    #[serde(flatten)]
    pub stats: HitStats,
}

impl PlayerRow {
    /// Damage per second over `duration` seconds
    pub fn dps(&self, duration: f64) -> f64 {
        if duration > 0.0 {
            self.stats.total_damage as f64 / duration
        } else {
            0.0
        }
    }

    /// Fraction of `total` dealt by this player
    pub fn share_of(&self, total: u64) -> f64 {
        fraction(self.stats.total_damage, total)
    }

    /// Length of this row's bar relative to the top row, in [0, 1]
    pub fn fill_ratio(&self, max: u64) -> f64 {
        fraction(self.stats.total_damage, max)
    }

    /// Nickname, or a placeholder carrying the id
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(name) => name.clone(),
            None => format!("Unknown({})", self.player_id),
        }
    }
}

/// One skill of the selected player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub skill_id: i64,
    /// Base skill code the id was parsed from, 0 when unknown
    pub original_code: i64,
    /// Slots the base skill is equipped in
    pub slots: Vec<i64>,
    #[serde(flatten)]
    pub stats: HitStats,
}

impl SkillRow {
    /// Damage per hit, rounded down
    pub fn average_damage(&self) -> u64 {
        if self.stats.counts > 0 {
            self.stats.total_damage / self.stats.counts
        } else {
            0
        }
    }

    pub fn share_of(&self, total: u64) -> f64 {
        fraction(self.stats.total_damage, total)
    }

    /// Special hits that occurred, most frequent first
    pub fn special_hits(&self) -> Vec<SpecialHitStat> {
        let mut hits: Vec<SpecialHitStat> = self
            .stats
            .special_counts
            .iter()
            .filter_map(|(key, &count)| {
                let kind = SpecialHit::from_key(key)?;
                (count > 0).then(|| SpecialHitStat {
                    kind,
                    count,
                    percentage: fraction(count, self.stats.counts) * 100.0,
                })
            })
            .collect();

        // HashMap order is arbitrary; kind order breaks count ties
        hits.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| kind_index(a.kind).cmp(&kind_index(b.kind)))
        });
        hits
    }
}

/// Frequency of one special-hit kind within a skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialHitStat {
    pub kind: SpecialHit,
    pub count: u64,
    /// Percent of the skill's hits
    pub percentage: f64,
}

fn kind_index(kind: SpecialHit) -> usize {
    SpecialHit::all().iter().position(|k| *k == kind).unwrap_or(usize::MAX)
}

fn fraction(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64
    } else {
        0.0
    }
}
