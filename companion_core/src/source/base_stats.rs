//! BaseStatsSource - The character's innate attack

use super::{StatSource, DEFAULT_ICON};
use crate::config::StatCatalog;
use crate::stat_pool::StatEntry;
use crate::types::StatType;

/// Attack every character has before equipment
pub const BASE_ATTACK: f64 = 61.0;

/// Stats a character has regardless of equipment
pub struct BaseStatsSource {
    pub base_attack: f64,
}

impl BaseStatsSource {
    pub fn new(base_attack: f64) -> Self {
        BaseStatsSource { base_attack }
    }
}

impl Default for BaseStatsSource {
    fn default() -> Self {
        Self::new(BASE_ATTACK)
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats come first
    }

    fn collect(&self, catalog: &StatCatalog, out: &mut Vec<StatEntry>) {
        let stat = StatType::WeaponFixingDamage;
        out.push(
            StatEntry::new(stat, catalog.display_name(stat), self.base_attack)
                .with_min_value(Some(self.base_attack))
                .with_source("character-base")
                .with_icon(DEFAULT_ICON),
        );
    }
}
