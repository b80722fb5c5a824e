//! StatSource - Trait and implementations for stat contributors

mod base_stats;
mod board;
mod conversion;
mod gear;
mod title;

pub use base_stats::BaseStatsSource;
pub use board::BoardSource;
pub use conversion::ConversionSource;
pub use gear::GearSource;
pub use title::TitleSource;

use crate::config::StatCatalog;
use crate::stat_pool::{parse, StatEntry};
use crate::types::{StatType, Unit};
use tracing::warn;

/// Icon used for contributions that are not tied to an item
pub const DEFAULT_ICON: &str = "/game_icons/aion2.png";

/// Trait for anything that contributes stat entries to a character's pool
pub trait StatSource: Send + Sync {
    /// Identifier used in logs
    fn id(&self) -> &str;

    /// Priority for collection order (higher = collected later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Gear: 0
    /// - Boards: 100
    /// - Titles: 200
    /// - Attribute conversion: 300
    fn priority(&self) -> i32 {
        0
    }

    /// Append this source's entries, in display order
    fn collect(&self, catalog: &StatCatalog, out: &mut Vec<StatEntry>);
}

/// Resolve a normalized label, bucketing unrecognized ones as `Unknown`
pub(crate) fn resolve_label(catalog: &StatCatalog, label: &str, source: &str) -> StatType {
    match catalog.lookup(label) {
        Some(stat) => stat,
        None => {
            warn!(label, source, "unrecognized stat label");
            StatType::Unknown
        }
    }
}

/// Build an entry from a `"<label> <value>"` effect description
///
/// A description without a value is kept at 0 so it still shows up in the
/// breakdown. Blank descriptions yield nothing.
pub(crate) fn description_entry(
    catalog: &StatCatalog,
    desc: &str,
    from: String,
) -> Option<StatEntry> {
    let (label, raw) = parse::split_description(desc)?;
    if raw.is_empty() {
        warn!(desc, source = %from, "effect description has no value");
    }

    let stat = resolve_label(catalog, label, &from);
    let value = parse::to_num(raw);
    let unit = if parse::has_percent(raw) {
        Unit::Percent
    } else {
        Unit::None
    };

    Some(
        StatEntry::new(stat, label, value)
            .with_min_value(Some(value))
            .with_source(from)
            .with_icon(DEFAULT_ICON)
            .with_unit(unit),
    )
}
