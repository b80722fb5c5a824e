//! ScoreEngine - Multiplicative power score over a character's stat pool
//!
//! The score is the product of seven zone multipliers, measured against a
//! fixed baseline target (see [`ScoreConstants`]). Every zone keeps the
//! intermediate values it used so the result can be audited.

mod zones;

pub use zones::{
    accuracy_zone, additional_hit_zone, amplify_zone, chance, critical_chance, critical_zone,
    damage_zone, hard_hit_zone, hit_chance, perfect_zone, ScoreInputs, MAX_CRITICAL_CHANCE,
};

use crate::collector::collect_stats;
use crate::config::{ScoreConstants, StatCatalog};
use crate::snapshot::CharacterSnapshot;
use crate::stat_pool::StatEntriesMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The seven score zones, in multiplication order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Damage,
    Accuracy,
    Critical,
    Amplify,
    Perfect,
    HardHit,
    AdditionalHit,
}

impl ZoneKind {
    pub fn all() -> &'static [ZoneKind] {
        &[
            ZoneKind::Damage,
            ZoneKind::Accuracy,
            ZoneKind::Critical,
            ZoneKind::Amplify,
            ZoneKind::Perfect,
            ZoneKind::HardHit,
            ZoneKind::AdditionalHit,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ZoneKind::Damage => "Damage",
            ZoneKind::Accuracy => "Back attack & accuracy",
            ZoneKind::Critical => "Critical",
            ZoneKind::Amplify => "Damage amplify",
            ZoneKind::Perfect => "Perfect",
            ZoneKind::HardHit => "Hard hit",
            ZoneKind::AdditionalHit => "Additional hit",
        }
    }
}

/// One multiplier of the score with its audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreZone {
    pub kind: ZoneKind,
    pub name: String,
    pub value: f64,
    pub details: Vec<String>,
}

impl ScoreZone {
    pub fn new(kind: ZoneKind, value: f64, details: Vec<String>) -> Self {
        ScoreZone {
            kind,
            name: kind.name().to_string(),
            value,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub parts: Vec<ScoreZone>,
    pub final_score: f64,
}

impl ScoreBreakdown {
    /// Zone of the given kind
    pub fn part(&self, kind: ZoneKind) -> Option<&ScoreZone> {
        self.parts.iter().find(|p| p.kind == kind)
    }
}

/// Computes score breakdowns against a fixed baseline
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    constants: ScoreConstants,
}

impl ScoreEngine {
    pub fn new(constants: ScoreConstants) -> Self {
        ScoreEngine { constants }
    }

    pub fn constants(&self) -> &ScoreConstants {
        &self.constants
    }

    pub fn compute(&self, map: &StatEntriesMap) -> ScoreBreakdown {
        self.compute_inputs(&ScoreInputs::from_map(map))
    }

    /// Score from already summed inputs
    pub fn compute_inputs(&self, inputs: &ScoreInputs) -> ScoreBreakdown {
        let c = &self.constants;
        let parts = vec![
            damage_zone(inputs, c),
            accuracy_zone(inputs, c),
            critical_zone(inputs, c),
            amplify_zone(inputs, c),
            perfect_zone(inputs, c),
            hard_hit_zone(inputs, c),
            additional_hit_zone(inputs, c),
        ];
        let final_score = parts.iter().map(|p| p.value).product();

        debug!(final_score, "computed power score");
        ScoreBreakdown { parts, final_score }
    }
}

/// Score a stat pool against the default baseline
pub fn compute_score(map: &StatEntriesMap) -> ScoreBreakdown {
    ScoreEngine::default().compute(map)
}

/// Headline numbers shown next to a character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterScores {
    pub pve_score: f64,
    pub item_level: f64,
}

/// Everything derived from one character snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCharacter {
    pub entries: StatEntriesMap,
    pub breakdown: ScoreBreakdown,
    pub scores: CharacterScores,
}

/// Collect, aggregate and score a character snapshot
pub fn score_character(
    snapshot: &CharacterSnapshot,
    catalog: &StatCatalog,
    constants: &ScoreConstants,
) -> ScoredCharacter {
    let entries = collect_stats(snapshot, catalog);
    let breakdown = ScoreEngine::new(constants.clone()).compute(&entries);
    let scores = CharacterScores {
        pve_score: breakdown.final_score,
        item_level: snapshot.item_level(),
    };

    ScoredCharacter {
        entries,
        breakdown,
        scores,
    }
}
