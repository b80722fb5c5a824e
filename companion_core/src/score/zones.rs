//! Per-zone multipliers of the power score
//!
//! Each zone is a pure function of the summed stat inputs and the target
//! baseline. Ratios read from the pool are percentages (`20` = 20%).
//!
//! Zones:
//! - Damage: `raw * skill_coefficient - (defense - pierce) / 10`
//! - Accuracy: back-attack share amplified, front share scaled by hit chance
//! - Critical: logistic crit chance capped at 80%
//! - Amplify: `1 + (amplify - resistance) / 100`, clamped to [1, 2]
//! - Perfect, hard hit, additional hit: chance-weighted bonuses

use super::{ScoreZone, ZoneKind};
use crate::config::ScoreConstants;
use crate::stat_pool::{StatEntriesMap, SumMode};
use crate::types::StatType;

/// Hard cap on critical chance
pub const MAX_CRITICAL_CHANCE: f64 = 0.8;

/// Evasion offset and span of the hit-chance curve
const ACCURACY_OFFSET: f64 = 1500.0;
const ACCURACY_SPAN: f64 = 2900.0;

/// Hit multiplier applied to a frontal miss
const GRAZE_MULTIPLIER: f64 = 0.4;

/// Base critical damage, in percent
const BASE_CRITICAL_DAMAGE: f64 = 150.0;

/// Stat totals the zones read, summed once from the pool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreInputs {
    pub weapon_fixing_damage: f64,
    pub fixing_damage: f64,
    pub min_weapon_fixing_damage: f64,
    pub min_fixing_damage: f64,
    pub damage_ratio: f64,
    pub defense_pierce: f64,

    pub weapon_accuracy: f64,
    pub accuracy: f64,
    pub accuracy_ratio: f64,
    pub amplify_back_attack: f64,
    pub back_attack_damage: f64,

    pub weapon_critical: f64,
    pub critical: f64,
    pub critical_ratio: f64,
    pub amplify_critical_damage: f64,
    pub critical_add_damage: f64,

    pub amplify_all_damage: f64,
    pub pve_amplify_damage: f64,
    pub boss_npc_amplify_damage: f64,

    pub perfect: f64,
    pub hard_hit: f64,
    pub additional_hit_rate: f64,
}

impl ScoreInputs {
    pub fn from_map(map: &StatEntriesMap) -> Self {
        let value = |stat: StatType| map.total(stat, SumMode::Value);
        let min = |stat: StatType| map.total(stat, SumMode::Min);

        ScoreInputs {
            weapon_fixing_damage: value(StatType::WeaponFixingDamage),
            fixing_damage: value(StatType::FixingDamage),
            min_weapon_fixing_damage: min(StatType::WeaponFixingDamage),
            min_fixing_damage: min(StatType::FixingDamage),
            damage_ratio: value(StatType::DamageRatio),
            defense_pierce: value(StatType::DefensePierce),

            weapon_accuracy: value(StatType::WeaponAccuracy),
            accuracy: value(StatType::Accuracy),
            accuracy_ratio: value(StatType::AccuracyRatio),
            amplify_back_attack: value(StatType::AmplifyBackAttack),
            back_attack_damage: value(StatType::BackAttackDamage),

            weapon_critical: value(StatType::WeaponCritical),
            critical: value(StatType::Critical),
            critical_ratio: value(StatType::CriticalRatio),
            amplify_critical_damage: value(StatType::AmplifyCriticalDamage),
            critical_add_damage: value(StatType::CriticalAddDamage),

            amplify_all_damage: value(StatType::AmplifyAllDamage),
            pve_amplify_damage: value(StatType::PveAmplifyDamage),
            boss_npc_amplify_damage: value(StatType::BossNpcAmplifyDamage),

            perfect: value(StatType::Perfect),
            hard_hit: value(StatType::HardHit),
            additional_hit_rate: value(StatType::AdditionalHitRate),
        }
    }

    /// Attack before skill coefficient and target defense
    pub fn raw_damage(&self) -> f64 {
        (self.weapon_fixing_damage + self.fixing_damage) * (1.0 + self.damage_ratio / 100.0)
    }
}

/// `numerator / denominator`, or 1 when the denominator is zero
fn ratio_or_one(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        numerator / denominator
    }
}

/// Clamp a percentage difference to a [0, 1] chance
pub fn chance(value: f64, resist: f64) -> f64 {
    ((value - resist) / 100.0).clamp(0.0, 1.0)
}

/// Chance of a frontal hit landing
pub fn hit_chance(accuracy_total: f64, target_evasion: f64) -> f64 {
    ((accuracy_total - target_evasion + ACCURACY_OFFSET) / ACCURACY_SPAN).clamp(0.0, 1.0)
}

/// Logistic critical chance, capped at [`MAX_CRITICAL_CHANCE`]
pub fn critical_chance(critical_total: f64, target_resist: f64) -> f64 {
    let chance = 1.0461 / (1.0 + (-0.006 * (critical_total - target_resist - 1024.52)).exp());
    chance.clamp(0.0, MAX_CRITICAL_CHANCE)
}

pub fn damage_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let raw = inputs.raw_damage();
    let coefficient = constants.assumptions.skill_coefficient;
    let defense = constants.target.defense;
    let value = raw * coefficient - (defense - inputs.defense_pierce) / 10.0;

    ScoreZone::new(
        ZoneKind::Damage,
        value,
        vec![
            "damage = attack * skill coefficient - (defense - pierce) / 10".to_string(),
            format!(
                "{:.2} = {:.2} * {} - ({} - {}) / 10",
                value, raw, coefficient, defense, inputs.defense_pierce
            ),
        ],
    )
}

pub fn accuracy_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let raw = inputs.raw_damage();
    let back_ratio = constants.assumptions.back_attack_ratio;

    let accuracy_total =
        (inputs.weapon_accuracy + inputs.accuracy) * (1.0 + inputs.accuracy_ratio / 100.0);
    let hit = hit_chance(accuracy_total, constants.target.evasion);
    let back_amplify =
        (100.0 + inputs.amplify_back_attack - constants.target.decrease_back_attack) / 100.0;
    let back_bonus = ratio_or_one(raw + inputs.back_attack_damage, raw);

    let value = back_ratio * back_amplify * back_bonus
        + (1.0 - back_ratio) * (hit + (1.0 - hit) * GRAZE_MULTIPLIER);

    ScoreZone::new(
        ZoneKind::Accuracy,
        value,
        vec![
            "accuracy = back ratio * back amplify * back bonus + (1 - back ratio) * (hit + (1 - hit) * 0.4)"
                .to_string(),
            format!("back attack ratio: {:.1}%", back_ratio * 100.0),
            format!("back amplify: (100 + amplify - resist) / 100 = {:.2}%", back_amplify * 100.0),
            format!("back bonus: (attack + back attack) / attack = {:.2}%", back_bonus * 100.0),
            format!("hit chance: (accuracy - evasion + 1500) / 2900 = {:.2}%", hit * 100.0),
        ],
    )
}

pub fn critical_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let raw = inputs.raw_damage();
    let critical_total =
        (inputs.weapon_critical + inputs.critical) * (1.0 + inputs.critical_ratio / 100.0);
    let chance = critical_chance(critical_total, constants.target.critical_resist);
    let add_bonus = ratio_or_one(raw + inputs.critical_add_damage, raw);
    let damage_bonus = (BASE_CRITICAL_DAMAGE + inputs.amplify_critical_damage
        - constants.target.decrease_critical_damage)
        / 100.0;

    let value = chance * add_bonus * damage_bonus + (1.0 - chance);

    ScoreZone::new(
        ZoneKind::Critical,
        value,
        vec![
            "critical = chance * add bonus * damage bonus + (1 - chance)".to_string(),
            format!(
                "chance: 1.0461 / (1 + exp(-0.006 * (critical - resist - 1024.52))) = {:.2}%",
                chance * 100.0
            ),
            format!("add bonus: (attack + critical attack) / attack = {:.3}", add_bonus),
            format!("damage bonus: (150 + amplify - resist) / 100 = {:.3}", damage_bonus),
        ],
    )
}

pub fn amplify_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let amplify =
        inputs.amplify_all_damage + inputs.pve_amplify_damage + inputs.boss_npc_amplify_damage;
    let raw = 1.0 + (amplify - constants.target.decrease_damage) / 100.0;
    let value = raw.clamp(1.0, 2.0);

    ScoreZone::new(
        ZoneKind::Amplify,
        value,
        vec![
            "amplify = 1 + (amplify - resistance) / 100, clamped to [1, 2]".to_string(),
            format!("amplify: all + PvE + boss = {:.2}%", amplify),
            format!("target resistance: {}%", constants.target.decrease_damage),
            format!("raw: {:.3}, final: {:.3}", raw, value),
        ],
    )
}

pub fn perfect_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let max_damage = inputs.weapon_fixing_damage + inputs.fixing_damage;
    let min_damage = inputs.min_weapon_fixing_damage + inputs.min_fixing_damage;
    let coefficient = ratio_or_one(max_damage * 2.0, max_damage + min_damage);
    let ratio = chance(inputs.perfect, constants.target.perfect_resist);
    let value = ratio * coefficient + (1.0 - ratio);

    ScoreZone::new(
        ZoneKind::Perfect,
        value,
        vec![
            "perfect = chance * coefficient + (1 - chance)".to_string(),
            format!("coefficient: max / (max + min) * 2 = {:.2}%", coefficient * 100.0),
            format!("chance: (perfect - resist) / 100 = {:.2}%", ratio * 100.0),
            format!("max attack: {:.2}", max_damage),
            format!("min attack: {:.2}", min_damage),
        ],
    )
}

pub fn hard_hit_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let ratio = chance(inputs.hard_hit, constants.target.hard_hit_resist);
    let value = ratio * 2.0 + (1.0 - ratio);

    ScoreZone::new(
        ZoneKind::HardHit,
        value,
        vec![
            "hard hit = chance * 2 + (1 - chance)".to_string(),
            format!("chance: (hard hit - resist) / 100 = {:.2}%", ratio * 100.0),
        ],
    )
}

pub fn additional_hit_zone(inputs: &ScoreInputs, constants: &ScoreConstants) -> ScoreZone {
    let ratio = chance(inputs.additional_hit_rate, constants.target.additional_hit_resist_rate);
    let value = 1.0 + 0.2 * ratio;

    ScoreZone::new(
        ZoneKind::AdditionalHit,
        value,
        vec![
            "additional hit = 1 + 0.2 * chance".to_string(),
            format!("chance: (additional hit - resist) / 100 = {:.2}%", ratio * 100.0),
            format!("result: {:.3}", value),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn attack(value: f64) -> ScoreInputs {
        ScoreInputs {
            weapon_fixing_damage: value,
            min_weapon_fixing_damage: value,
            ..Default::default()
        }
    }

    #[test]
    fn test_damage_zone() {
        let zone = damage_zone(&attack(1000.0), &ScoreConstants::default());
        assert!((zone.value - 450.0).abs() < 1e-9);
        assert_eq!(zone.details[1], "450.00 = 1000.00 * 0.75 - (3000 - 0) / 10");
    }

    #[test]
    fn test_damage_ratio_scales_raw() {
        let inputs = ScoreInputs {
            damage_ratio: 20.0,
            fixing_damage: 200.0,
            ..attack(800.0)
        };
        assert!((inputs.raw_damage() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_critical_stats() {
        let zone = critical_zone(&attack(1000.0), &ScoreConstants::default());
        let chance = critical_chance(0.0, 0.0);
        assert!(chance < 0.01);
        assert!((zone.value - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_critical_chance_caps() {
        assert!((critical_chance(10_000.0, 0.0) - MAX_CRITICAL_CHANCE).abs() < f64::EPSILON);
        // Midpoint of the curve
        let mid = critical_chance(1024.52, 0.0);
        assert!((mid - 1.0461 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_zone_baseline() {
        // No accuracy: hit chance 1500/2900, back bonus 1, back amplify 1
        let zone = accuracy_zone(&attack(1000.0), &ScoreConstants::default());
        let hit = 1500.0 / 2900.0;
        let expected = 0.8 + 0.2 * (hit + (1.0 - hit) * 0.4);
        assert!((zone.value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_back_attack_damage_bonus() {
        let inputs = ScoreInputs {
            back_attack_damage: 100.0,
            weapon_accuracy: 1400.0,
            ..attack(1000.0)
        };
        let zone = accuracy_zone(&inputs, &ScoreConstants::default());
        let expected = 0.8 * 1.1 + 0.2;
        assert!((zone.value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_raw_damage_has_no_bonus_ratios() {
        let inputs = ScoreInputs {
            back_attack_damage: 50.0,
            critical_add_damage: 50.0,
            critical: 2000.0,
            ..Default::default()
        };
        let constants = ScoreConstants::default();
        assert!(accuracy_zone(&inputs, &constants).value.is_finite());
        assert!(critical_zone(&inputs, &constants).value.is_finite());
        assert!((perfect_zone(&inputs, &constants).value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_amplify_zone_clamps() {
        let constants = ScoreConstants::default();
        let low = ScoreInputs {
            amplify_all_damage: 10.0,
            ..Default::default()
        };
        assert!((amplify_zone(&low, &constants).value - 1.0).abs() < f64::EPSILON);

        let mid = ScoreInputs {
            amplify_all_damage: 50.0,
            pve_amplify_damage: 20.0,
            boss_npc_amplify_damage: 15.0,
            ..Default::default()
        };
        assert!((amplify_zone(&mid, &constants).value - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_zone_uses_min_attack() {
        let inputs = ScoreInputs {
            weapon_fixing_damage: 600.0,
            min_weapon_fixing_damage: 400.0,
            perfect: 50.0,
            ..Default::default()
        };
        let zone = perfect_zone(&inputs, &ScoreConstants::default());
        // coefficient = 600 / 1000 * 2 = 1.2
        assert!((zone.value - (0.5 * 1.2 + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_hard_and_additional_hit() {
        let inputs = ScoreInputs {
            hard_hit: 10.0,
            additional_hit_rate: 150.0,
            ..Default::default()
        };
        let constants = ScoreConstants::default();
        assert!((hard_hit_zone(&inputs, &constants).value - 1.1).abs() < 1e-9);
        assert!((additional_hit_zone(&inputs, &constants).value - 1.2).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_critical_chance_in_bounds(crit in -1.0e7..1.0e7f64, resist in -1.0e4..1.0e4f64) {
            let c = critical_chance(crit, resist);
            prop_assert!((0.0..=MAX_CRITICAL_CHANCE).contains(&c));
        }

        #[test]
        fn prop_chance_in_unit_interval(value in -1.0e6..1.0e6f64, resist in -1.0e4..1.0e4f64) {
            let c = chance(value, resist);
            prop_assert!((0.0..=1.0).contains(&c));
            let h = hit_chance(value, resist);
            prop_assert!((0.0..=1.0).contains(&h));
        }

        #[test]
        fn prop_amplify_zone_in_bounds(all in -1.0e4..1.0e4f64, pve in -1.0e3..1.0e3f64) {
            let inputs = ScoreInputs {
                amplify_all_damage: all,
                pve_amplify_damage: pve,
                ..Default::default()
            };
            let value = amplify_zone(&inputs, &ScoreConstants::default()).value;
            prop_assert!((1.0..=2.0).contains(&value));
        }

        #[test]
        fn prop_hit_zones_bounded(hard in -1.0e4..1.0e4f64, extra in -1.0e4..1.0e4f64) {
            let inputs = ScoreInputs {
                hard_hit: hard,
                additional_hit_rate: extra,
                ..Default::default()
            };
            let constants = ScoreConstants::default();
            let hard_value = hard_hit_zone(&inputs, &constants).value;
            let extra_value = additional_hit_zone(&inputs, &constants).value;
            prop_assert!((1.0..=2.0).contains(&hard_value));
            prop_assert!((1.0..=1.2).contains(&extra_value));
        }
    }
}
