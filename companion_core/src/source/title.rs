//! TitleSource - Stat effects of an equipped title

use super::{description_entry, StatSource};
use crate::config::StatCatalog;
use crate::snapshot::Title;
use crate::stat_pool::StatEntry;

pub struct TitleSource<'a> {
    pub title: &'a Title,
}

impl<'a> TitleSource<'a> {
    pub fn new(title: &'a Title) -> Self {
        TitleSource { title }
    }
}

impl StatSource for TitleSource<'_> {
    fn id(&self) -> &str {
        &self.title.name
    }

    fn priority(&self) -> i32 {
        200
    }

    fn collect(&self, catalog: &StatCatalog, out: &mut Vec<StatEntry>) {
        let from = format!("{}[title]", self.title.name);
        for effect in &self.title.equip_stat_list {
            if let Some(entry) = description_entry(catalog, &effect.desc, from.clone()) {
                out.push(entry);
            }
        }
    }
}
