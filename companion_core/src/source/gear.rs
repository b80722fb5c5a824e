//! GearSource - Stats from an equipped item

use super::{resolve_label, StatSource};
use crate::config::StatCatalog;
use crate::snapshot::{EquippedItem, ItemStat};
use crate::stat_pool::{parse, StatEntry};
use crate::types::{StatType, Unit};
use tracing::warn;

/// Stats from one equipped item: main stats, soul-bind sub stats and
/// socketed stones, in that order
pub struct GearSource<'a> {
    pub item: &'a EquippedItem,
}

impl<'a> GearSource<'a> {
    pub fn new(item: &'a EquippedItem) -> Self {
        GearSource { item }
    }

    fn resolve(&self, catalog: &StatCatalog, stat: &ItemStat, label: &str) -> StatType {
        let resolved = resolve_label(catalog, label, &self.item.name);
        if let Some(id) = stat.id.as_deref() {
            if resolved != StatType::Unknown && id != resolved.as_key() {
                warn!(
                    label,
                    id,
                    resolved = %resolved,
                    item = %self.item.name,
                    "stat label and source id disagree"
                );
            }
        }
        resolved
    }

    fn icon_for(&self, stat: &ItemStat) -> String {
        match stat.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon.to_string(),
            _ => self.item.icon.clone(),
        }
    }

    fn main_stat(&self, catalog: &StatCatalog, stat: &ItemStat) -> StatEntry {
        let label = parse::normalize_label(&stat.name);
        let value = stat.combined_value();
        let from = if stat.exceed {
            format!("{}[exceed]", self.item.name)
        } else {
            self.item.name.clone()
        };

        StatEntry::new(self.resolve(catalog, stat, label), label, value)
            .with_min_value(Some(stat.explicit_min().unwrap_or(value)))
            .with_source(from)
            .with_icon(self.icon_for(stat))
            .with_unit(percent_if(stat.value.has_percent()))
    }

    fn sub_stat(&self, catalog: &StatCatalog, stat: &ItemStat) -> StatEntry {
        let label = parse::normalize_label(&stat.name);
        let value = stat.combined_value();

        StatEntry::new(self.resolve(catalog, stat, label), label, value)
            .with_min_value(Some(stat.explicit_min().unwrap_or(value)))
            .with_source(format!("{}[soul-bind]", self.item.name))
            .with_icon(self.icon_for(stat))
            .with_unit(percent_if(stat.value.has_percent()))
    }

    fn stone_stat(&self, catalog: &StatCatalog, stat: &ItemStat) -> StatEntry {
        let label = parse::normalize_label(&stat.name);
        let resolved = self.resolve(catalog, stat, label);

        // Stones report these amplify stats at 100x the scale of other percents
        let (value, unit) = if catalog.is_stone_percent_scaled(resolved) {
            (stat.combined_value() / 100.0, Unit::Percent)
        } else {
            (stat.combined_value(), percent_if(stat.value.has_percent()))
        };

        StatEntry::new(resolved, label, value)
            .with_min_value(stat.explicit_min())
            .with_source(format!("{}[stone]", self.item.name))
            .with_icon(self.icon_for(stat))
            .with_unit(unit)
    }
}

fn percent_if(flag: bool) -> Unit {
    if flag {
        Unit::Percent
    } else {
        Unit::None
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        &self.item.name
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn collect(&self, catalog: &StatCatalog, out: &mut Vec<StatEntry>) {
        let Some(info) = self.item.item_info.as_ref() else {
            return;
        };

        for stat in &info.main_stats {
            out.push(self.main_stat(catalog, stat));
        }

        if info.is_soul_bound() {
            for stat in &info.sub_stats {
                out.push(self.sub_stat(catalog, stat));
            }
        }

        for stat in &info.magic_stone_stat {
            out.push(self.stone_stat(catalog, stat));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::snapshot::{ItemInfo, RawValue};

    fn item_stat(name: &str, value: &str) -> ItemStat {
        ItemStat {
            name: name.to_string(),
            value: RawValue::from(value),
            ..Default::default()
        }
    }

    fn sword(info: ItemInfo) -> EquippedItem {
        EquippedItem {
            name: "Sword".to_string(),
            icon: "sword.png".to_string(),
            item_info: Some(info),
        }
    }

    fn collect(item: &EquippedItem) -> Vec<StatEntry> {
        let mut out = Vec::new();
        GearSource::new(item).collect(&default_catalog(), &mut out);
        out
    }

    #[test]
    fn test_main_stat_with_extra_and_qualifier() {
        let mut stat = item_stat("攻擊力[突破]", "500");
        stat.extra = Some(RawValue::Number(40.0));
        stat.min_value = Some(RawValue::Number(420.0));
        stat.exceed = true;
        let item = sword(ItemInfo {
            main_stats: vec![stat],
            ..Default::default()
        });

        let out = collect(&item);
        assert_eq!(out.len(), 1);
        let entry = &out[0];
        assert_eq!(entry.stat_type(), StatType::WeaponFixingDamage);
        assert_eq!(entry.name(), "攻擊力");
        assert!((entry.value() - 540.0).abs() < f64::EPSILON);
        assert_eq!(entry.min_value(), Some(420.0));
        assert_eq!(entry.from(), "Sword[exceed]");
        assert_eq!(entry.icon(), "sword.png");
        assert_eq!(entry.unit(), Unit::None);
    }

    #[test]
    fn test_min_value_defaults_to_value() {
        let item = sword(ItemInfo {
            main_stats: vec![item_stat("暴擊增加", "3.5%")],
            ..Default::default()
        });

        let out = collect(&item);
        assert_eq!(out[0].min_value(), Some(3.5));
        assert_eq!(out[0].unit(), Unit::Percent);
        assert_eq!(out[0].from(), "Sword");
    }

    #[test]
    fn test_sub_stats_need_soul_bind_rate() {
        let mut info = ItemInfo {
            sub_stats: vec![item_stat("暴擊", "30")],
            ..Default::default()
        };
        assert!(collect(&sword(info.clone())).is_empty());

        info.soul_bind_rate = Some(RawValue::from("12.5%"));
        let out = collect(&sword(info));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].stat_type(), StatType::Critical);
        assert_eq!(out[0].from(), "Sword[soul-bind]");
    }

    #[test]
    fn test_stone_amplify_is_rescaled() {
        let item = sword(ItemInfo {
            magic_stone_stat: vec![item_stat("傷害增幅", "150"), item_stat("暴擊", "12")],
            ..Default::default()
        });

        let out = collect(&item);
        assert_eq!(out.len(), 2);

        assert_eq!(out[0].stat_type(), StatType::AmplifyAllDamage);
        assert!((out[0].value() - 1.5).abs() < f64::EPSILON);
        assert_eq!(out[0].unit(), Unit::Percent);
        assert_eq!(out[0].min_value(), None);
        assert_eq!(out[0].from(), "Sword[stone]");

        assert_eq!(out[1].stat_type(), StatType::Critical);
        assert!((out[1].value() - 12.0).abs() < f64::EPSILON);
        assert_eq!(out[1].unit(), Unit::None);
    }

    #[test]
    fn test_collection_order_main_sub_stone() {
        let item = sword(ItemInfo {
            main_stats: vec![item_stat("攻擊力", "100")],
            sub_stats: vec![item_stat("暴擊", "10")],
            magic_stone_stat: vec![item_stat("完美", "2")],
            soul_bind_rate: Some(RawValue::Number(10.0)),
        });

        let froms: Vec<_> = collect(&item).iter().map(|e| e.from().to_string()).collect();
        assert_eq!(froms, vec!["Sword", "Sword[soul-bind]", "Sword[stone]"]);
    }

    #[test]
    fn test_item_without_info_contributes_nothing() {
        let item = EquippedItem {
            name: "Empty".to_string(),
            ..Default::default()
        };
        assert!(collect(&item).is_empty());
    }

    #[test]
    fn test_unrecognized_label_is_bucketed() {
        let item = sword(ItemInfo {
            main_stats: vec![item_stat("Mystery", "7")],
            ..Default::default()
        });
        let out = collect(&item);
        assert_eq!(out[0].stat_type(), StatType::Unknown);
        assert!((out[0].value() - 7.0).abs() < f64::EPSILON);
    }
}
