//! BoardSource - Effects unlocked on a passive board

use super::{description_entry, StatSource};
use crate::config::StatCatalog;
use crate::snapshot::Board;
use crate::stat_pool::StatEntry;

pub struct BoardSource<'a> {
    pub board: &'a Board,
}

impl<'a> BoardSource<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardSource { board }
    }
}

impl StatSource for BoardSource<'_> {
    fn id(&self) -> &str {
        &self.board.name
    }

    fn priority(&self) -> i32 {
        100
    }

    fn collect(&self, catalog: &StatCatalog, out: &mut Vec<StatEntry>) {
        let from = format!("{}[board]", self.board.name);
        out.extend(
            self.board
                .open_stat_effect_list
                .iter()
                .filter_map(|effect| description_entry(catalog, &effect.desc, from.clone())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::snapshot::BoardEffect;
    use crate::types::{StatType, Unit};

    fn effect(desc: &str) -> BoardEffect {
        BoardEffect {
            desc: desc.to_string(),
        }
    }

    #[test]
    fn test_board_effects() {
        let board = Board {
            name: "Nezakan".to_string(),
            open_stat_effect_list: vec![effect("暴擊 20"), effect("完美 1.5%"), effect("broken")],
        };

        let mut out = Vec::new();
        BoardSource::new(&board).collect(&default_catalog(), &mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].stat_type(), StatType::Critical);
        assert_eq!(out[0].from(), "Nezakan[board]");
        assert_eq!(out[0].min_value(), Some(20.0));
        assert_eq!(out[1].stat_type(), StatType::Perfect);
        assert_eq!(out[1].unit(), Unit::Percent);
        assert_eq!(out[1].icon(), crate::source::DEFAULT_ICON);
        // No value: kept at 0 under its raw label
        assert_eq!(out[2].name(), "broken");
        assert_eq!(out[2].stat_type(), StatType::Unknown);
        assert_eq!(out[2].value(), 0.0);
    }
}
