// src/table.rs
// Long (one record per team) → wide (one row per game).

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::NormalizeError;
use crate::specs::moneylines::{GameRecord, Side};

/// Output columns. Consumers parse positionally, so the order is fixed.
pub const HEADERS: [&str; 4] = ["Away Team", "Money Line Away", "Home Team", "Money Line Home"];

/// What to do with a game that lost one of its sides upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IncompletePolicy {
    /// Leave the game out, log it, keep going.
    #[default]
    Drop,
    /// Fail the whole reshape on the first incomplete game.
    Abort,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedRow {
    pub game: usize,
    // Kept for diagnostics; not part of the exported columns.
    pub date: Option<String>,
    pub time: String,
    pub away_team: String,
    pub away_line: String,
    pub home_team: String,
    pub home_line: String,
}

impl NormalizedRow {
    /// Cells in [`HEADERS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.away_team, &self.away_line, &self.home_team, &self.home_line]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinesTable {
    pub rows: Vec<NormalizedRow>,
    /// Game indices left out under [`IncompletePolicy::Drop`].
    pub incomplete: Vec<usize>,
}

impl LinesTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Default)]
struct Pair {
    away: Vec<GameRecord>,
    home: Vec<GameRecord>,
}

/// Pivot records on `game`: one row per game, ascending game index.
pub fn normalize(records: Vec<GameRecord>, policy: IncompletePolicy) -> Result<LinesTable, NormalizeError> {
    let mut by_game: BTreeMap<usize, Pair> = BTreeMap::new();
    for rec in records {
        let pair = by_game.entry(rec.game).or_default();
        match rec.side {
            Side::Away => pair.away.push(rec),
            Side::Home => pair.home.push(rec),
        }
    }

    let mut table = LinesTable::default();
    for (game, pair) in by_game {
        match into_row(pair) {
            Some(row) => table.rows.push(row),
            None => match policy {
                IncompletePolicy::Abort => return Err(NormalizeError::IncompleteGame(game)),
                IncompletePolicy::Drop => {
                    warn!(game, "Dropping incomplete game");
                    table.incomplete.push(game);
                }
            },
        }
    }
    Ok(table)
}

fn into_row(mut pair: Pair) -> Option<NormalizedRow> {
    if pair.away.len() != 1 || pair.home.len() != 1 {
        return None;
    }
    let away = pair.away.pop()?;
    let home = pair.home.pop()?;
    Some(NormalizedRow {
        game: away.game,
        date: away.date,
        time: away.time,
        away_team: away.team,
        away_line: away.moneyline,
        home_team: home.team,
        home_line: home.moneyline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(game: usize, side: Side, team: &str, ml: &str) -> GameRecord {
        GameRecord {
            date: Some(s!("2023-10-05")),
            time: s!("10:00 AM"),
            game,
            team: s!(team),
            side,
            moneyline: s!(ml),
        }
    }

    #[test]
    fn pivots_one_game() {
        let recs = vec![rec(3, Side::Away, "DEN", "-110"), rec(3, Side::Home, "NYJ", "+120")];
        let table = normalize(recs, IncompletePolicy::Drop).unwrap();

        assert_eq!(table.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.game, 3);
        assert_eq!(row.cells(), ["DEN", "-110", "NYJ", "+120"]);
        assert_eq!(row.date.as_deref(), Some("2023-10-05"));
    }

    #[test]
    fn sorts_by_game_regardless_of_input_order() {
        let recs = vec![
            rec(2, Side::Home, "MIA", "+130"),
            rec(0, Side::Away, "KC", "-200"),
            rec(2, Side::Away, "BUF", "-150"),
            rec(0, Side::Home, "LV", "+170"),
        ];
        let table = normalize(recs, IncompletePolicy::Drop).unwrap();
        let games: Vec<usize> = table.rows.iter().map(|r| r.game).collect();
        assert_eq!(games, vec![0, 2]);
        assert_eq!(table.rows[1].cells(), ["BUF", "-150", "MIA", "+130"]);
    }

    #[test]
    fn drop_policy_skips_one_sided_game() {
        let recs = vec![
            rec(0, Side::Away, "KC", "-200"),
            rec(1, Side::Away, "BUF", "-150"),
            rec(1, Side::Home, "MIA", "+130"),
        ];
        let table = normalize(recs, IncompletePolicy::Drop).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].game, 1);
        assert_eq!(table.incomplete, vec![0]);
    }

    #[test]
    fn abort_policy_names_the_game() {
        let recs = vec![
            rec(0, Side::Away, "KC", "-200"),
            rec(0, Side::Home, "LV", "+170"),
            rec(1, Side::Home, "MIA", "+130"),
        ];
        let err = normalize(recs, IncompletePolicy::Abort).unwrap_err();
        assert_eq!(err, NormalizeError::IncompleteGame(1));
    }

    #[test]
    fn two_away_rows_are_incomplete() {
        let recs = vec![rec(4, Side::Away, "KC", "-200"), rec(4, Side::Away, "LV", "+170")];
        let table = normalize(recs, IncompletePolicy::Drop).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.incomplete, vec![4]);
    }

    #[test]
    fn empty_in_empty_out() {
        let table = normalize(Vec::new(), IncompletePolicy::Abort).unwrap();
        assert!(table.is_empty());
        assert!(table.incomplete.is_empty());
    }
}
