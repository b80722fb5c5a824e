//! CombatSnapshot - Live telemetry as published by the damage meter
//!
//! Ids are kept as the string keys the producer serializes them with. Every
//! field defaults, so partial or early snapshots decode.

use crate::snapshot::SnapshotError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Damage and hit counts of one rollup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitStats {
    #[serde(default)]
    pub total_damage: u64,
    #[serde(default)]
    pub counts: u64,
    /// Hits per special-hit key (`"CRITICAL"`, `"BACK"`, ...)
    #[serde(default)]
    pub special_counts: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    #[serde(default)]
    pub total_damage: u64,
    #[serde(default)]
    pub counts: u64,
}

/// Rollups keyed by id
pub type Rollups = HashMap<String, HitStats>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    #[serde(default)]
    pub overview_stats: OverviewStats,
    #[serde(default)]
    pub target_list: Vec<i64>,
    #[serde(default, rename = "actort_list")]
    pub actor_list: Vec<i64>,
    /// First hit on each target, in seconds
    #[serde(default)]
    pub target_start_time: HashMap<String, f64>,
    /// Latest hit on each target, in seconds
    #[serde(default)]
    pub target_last_time: HashMap<String, f64>,
    #[serde(default)]
    pub nickname_map: HashMap<String, String>,
    #[serde(default)]
    pub actor_class_map: HashMap<String, String>,
    /// Skill id to the base skill code it was parsed from
    #[serde(default)]
    pub parsed_skill_code: HashMap<String, i64>,
    /// Actor id -> base skill code -> equipped slot numbers
    #[serde(default)]
    pub actor_skill_slots: HashMap<String, HashMap<String, Vec<i64>>>,
    /// Present only for targets that are mobs
    #[serde(default)]
    pub mob_code: HashMap<String, i64>,
    #[serde(default)]
    pub last_target: Option<i64>,
    /// Last target the main player hit
    #[serde(default)]
    pub last_target_by_me: Option<i64>,
    #[serde(default)]
    pub main_player: Option<String>,
    /// Seconds since the first hit of the session
    #[serde(default)]
    pub duration: f64,
    /// Seconds between the first and latest hit of the session
    #[serde(default)]
    pub running_time: f64,

    #[serde(default)]
    pub overview_stats_by_target: Rollups,
    #[serde(default)]
    pub overview_stats_by_target_player: HashMap<String, Rollups>,
    #[serde(default)]
    pub overview_stats_by_player: Rollups,
    #[serde(default, rename = "detailed_skills_stats_by_tagert_player")]
    pub detailed_skills_stats_by_target_player: HashMap<String, HashMap<String, Rollups>>,
    #[serde(default)]
    pub detailed_skills_stats_by_actor: HashMap<String, Rollups>,
}

impl CombatSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Time between the first and latest hit on a target, in the producer's
    /// timestamp unit, when both are known
    pub fn target_window(&self, target: i64) -> Option<f64> {
        let key = target.to_string();
        let start = self.target_start_time.get(&key)?;
        let last = self.target_last_time.get(&key)?;
        Some(last - start)
    }

    pub fn nickname(&self, actor: i64) -> Option<&str> {
        self.nickname_map.get(&actor.to_string()).map(String::as_str)
    }

    pub fn class_name(&self, actor: i64) -> Option<&str> {
        self.actor_class_map.get(&actor.to_string()).map(String::as_str)
    }

    pub fn mob_code_of(&self, id: i64) -> Option<i64> {
        self.mob_code.get(&id.to_string()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_decodes() {
        let snapshot = CombatSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot.overview_stats.total_damage, 0);
        assert!(snapshot.target_list.is_empty());
        assert_eq!(snapshot.last_target, None);
        assert_eq!(snapshot.main_player, None);
    }

    #[test]
    fn test_wire_names() {
        let json = r#"{
            "actort_list": [7, 9],
            "last_target": null,
            "last_target_by_me": 5,
            "target_start_time": { "5": 100.0 },
            "target_last_time": { "5": 130.5 },
            "detailed_skills_stats_by_tagert_player": {
                "5": { "7": { "1100": { "total_damage": 800, "counts": 4, "special_counts": { "CRITICAL": 2 } } } }
            }
        }"#;
        let snapshot = CombatSnapshot::from_json(json).unwrap();

        assert_eq!(snapshot.actor_list, vec![7, 9]);
        assert_eq!(snapshot.last_target_by_me, Some(5));
        assert_eq!(snapshot.target_window(5), Some(30.5));
        assert_eq!(snapshot.target_window(6), None);

        let skill = &snapshot.detailed_skills_stats_by_target_player["5"]["7"]["1100"];
        assert_eq!(skill.total_damage, 800);
        assert_eq!(skill.special_counts["CRITICAL"], 2);
    }

    #[test]
    fn test_lookups() {
        let mut snapshot = CombatSnapshot::default();
        snapshot.nickname_map.insert("7".into(), "Ayla".into());
        snapshot.actor_class_map.insert("7".into(), "Cleric".into());
        snapshot.mob_code.insert("5".into(), 2_100_301);

        assert_eq!(snapshot.nickname(7), Some("Ayla"));
        assert_eq!(snapshot.class_name(7), Some("Cleric"));
        assert_eq!(snapshot.class_name(9), None);
        assert_eq!(snapshot.mob_code_of(5), Some(2_100_301));
    }
}
