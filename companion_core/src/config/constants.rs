//! Score formula constants

use serde::{Deserialize, Serialize};

/// Baseline opponent the power score is measured against, plus the fixed
/// assumptions about how a reference skill is used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConstants {
    #[serde(default)]
    pub target: TargetBaseline,
    #[serde(default)]
    pub assumptions: ScoreAssumptions,
}

impl Default for ScoreConstants {
    fn default() -> Self {
        ScoreConstants {
            target: TargetBaseline::default(),
            assumptions: ScoreAssumptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetBaseline {
    #[serde(default = "default_defense")]
    pub defense: f64,
    #[serde(default)]
    pub evasion: f64,
    #[serde(default)]
    pub critical_resist: f64,
    #[serde(default)]
    pub decrease_critical_damage: f64,
    #[serde(default)]
    pub decrease_back_attack: f64,
    /// Percent damage resistance, subtracted from the amplify total
    #[serde(default = "default_decrease_damage")]
    pub decrease_damage: f64,
    #[serde(default)]
    pub perfect_resist: f64,
    #[serde(default)]
    pub hard_hit_resist: f64,
    #[serde(default)]
    pub additional_hit_resist_rate: f64,
}

impl Default for TargetBaseline {
    fn default() -> Self {
        TargetBaseline {
            defense: 3000.0,
            evasion: 0.0,
            critical_resist: 0.0,
            decrease_critical_damage: 0.0,
            decrease_back_attack: 0.0,
            decrease_damage: 65.0,
            perfect_resist: 0.0,
            hard_hit_resist: 0.0,
            additional_hit_resist_rate: 0.0,
        }
    }
}

fn default_defense() -> f64 {
    3000.0
}
fn default_decrease_damage() -> f64 {
    65.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAssumptions {
    /// Share of hits landing from behind (0.8 = 80%)
    #[serde(default = "default_back_attack_ratio")]
    pub back_attack_ratio: f64,
    /// Damage coefficient of the reference skill
    #[serde(default = "default_skill_coefficient")]
    pub skill_coefficient: f64,
}

impl Default for ScoreAssumptions {
    fn default() -> Self {
        ScoreAssumptions {
            back_attack_ratio: 0.8,
            skill_coefficient: 0.75,
        }
    }
}

fn default_back_attack_ratio() -> f64 {
    0.8
}
fn default_skill_coefficient() -> f64 {
    0.75
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_toml;

    #[test]
    fn test_default_constants() {
        let constants = ScoreConstants::default();
        assert!((constants.target.defense - 3000.0).abs() < f64::EPSILON);
        assert!((constants.target.decrease_damage - 65.0).abs() < f64::EPSILON);
        assert!((constants.assumptions.skill_coefficient - 0.75).abs() < f64::EPSILON);
        assert!((constants.assumptions.back_attack_ratio - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[target]
defense = 4500
critical_resist = 200

[assumptions]
back_attack_ratio = 0.5
"#;

        let constants: ScoreConstants = parse_toml(toml).unwrap();
        assert!((constants.target.defense - 4500.0).abs() < f64::EPSILON);
        assert!((constants.target.critical_resist - 200.0).abs() < f64::EPSILON);
        // Unspecified fields keep their defaults
        assert!((constants.target.decrease_damage - 65.0).abs() < f64::EPSILON);
        assert!((constants.assumptions.skill_coefficient - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_constants() {
        let constants: ScoreConstants = parse_toml("").unwrap();
        assert!((constants.target.defense - 3000.0).abs() < f64::EPSILON);
    }
}
