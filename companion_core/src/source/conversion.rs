//! ConversionSource - Attribute points spread into derived stats
//!
//! Each attribute on the raw stat sheet converts into the derived types its
//! catalog template lists. Primary attributes convert at a lower rate than
//! secondary ones.

use super::{StatSource, DEFAULT_ICON};
use crate::config::StatCatalog;
use crate::snapshot::StatSheet;
use crate::stat_pool::{parse, StatEntry};
use crate::types::{StatType, Unit};
use tracing::debug;

pub struct ConversionSource<'a> {
    pub sheet: &'a StatSheet,
}

impl<'a> ConversionSource<'a> {
    pub fn new(sheet: &'a StatSheet) -> Self {
        ConversionSource { sheet }
    }
}

impl StatSource for ConversionSource<'_> {
    fn id(&self) -> &str {
        "attribute_conversion"
    }

    fn priority(&self) -> i32 {
        300 // After everything else
    }

    fn collect(&self, catalog: &StatCatalog, out: &mut Vec<StatEntry>) {
        for raw in &self.sheet.stat_list {
            let Some(attribute) = StatType::from_key(&raw.stat_type) else {
                debug!(stat = %raw.stat_type, "no conversion for unknown stat key");
                continue;
            };

            let targets = catalog.template(attribute);
            if targets.is_empty() {
                debug!(stat = %attribute, "stat has no conversion template");
                continue;
            }

            let value = parse::round2(raw.value.as_f64() * catalog.conversion_coefficient(attribute));
            let from = format!("{}-conversion", catalog.display_name(attribute));

            for &target in targets {
                out.push(
                    StatEntry::new(target, catalog.display_name(target), value)
                        .with_min_value(Some(value))
                        .with_source(from.clone())
                        .with_icon(DEFAULT_ICON)
                        .with_unit(Unit::Percent),
                );
            }
        }
    }
}
