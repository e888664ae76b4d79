// src/specs/moneylines.rs
//! Odds page → per-team [`GameRecord`]s.
//!
//! Layout the selectors describe:
//!
//! ```text
//! table_section
//! ├── headline                      (sanity check, logged)
//! └── date_group *                  (one per calendar date)
//!     ├── date?                     (missing → previous date carries over)
//!     └── game_table *              (one per matchup)
//!         ├── header *              (time, label, label, …)
//!         └── teams {2}             (away row, home row)
//!             └── td: team link | line cells…
//! ```
//!
//! Every `game_table` gets the next game index before it is validated, so a
//! skipped matchup leaves a hole in the output but never shifts its
//! neighbours.

use std::fmt;

use scraper::{ElementRef, Html};
use tracing::{debug, info, warn};

use crate::config::selectors::{SelectorField, Selectors};
use crate::core::html::{attr, select_all, select_first, select_last, text_of};
use crate::core::sanitize::team_code_from_href;
use crate::error::ExtractError;

/// Which team row of a matchup. The first row is always away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Away,
    Home,
}

impl Side {
    const IN_ROW_ORDER: [Side; 2] = [Side::Away, Side::Home];

    pub fn label(self) -> &'static str {
        match self {
            Side::Away => "Away Team",
            Side::Home => "Home Team",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One team's line in one matchup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub date: Option<String>,
    pub time: String,
    pub game: usize,
    pub team: String,
    pub side: Side,
    pub moneyline: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingHeader,
    TeamCount(usize),
    CellMismatch { side: Side, cells: usize, labels: usize },
    MissingTeamLink { side: Side },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingHeader => write!(f, "header missing in game table"),
            SkipReason::TeamCount(n) => write!(f, "expected 2 teams, got {n}"),
            SkipReason::CellMismatch { side, cells, labels } => write!(
                f,
                "{side}: {cells} line cells but {labels} header labels"
            ),
            SkipReason::MissingTeamLink { side } => write!(f, "{side}: no usable team link"),
        }
    }
}

/// A matchup (or one of its team rows) that produced no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchupSkipped {
    pub game: usize,
    pub reason: SkipReason,
}

/// Everything one pass over the page produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub headline: String,
    pub records: Vec<GameRecord>,
    pub skipped: Vec<MatchupSkipped>,
    /// Number of `game_table`s seen, i.e. the next unused game index.
    pub matchups: usize,
}

/// Per-call traversal state. Built fresh for every extraction.
struct Traversal<'s> {
    sels: &'s Selectors,
    date: Option<String>,
    next_game: usize,
    out: Extraction,
}

/// Parse and extract in one go.
pub fn parse_doc(html_doc: &str, sels: &Selectors) -> Result<Extraction, ExtractError> {
    let doc = crate::core::html::parse(html_doc);
    extract_games(&doc, sels)
}

/// Walk the results table and collect one record per team row.
///
/// Only a missing `table_section` or `headline` is an error; anything wrong
/// inside a matchup is logged, recorded in [`Extraction::skipped`] and
/// passed over.
pub fn extract_games(doc: &Html, sels: &Selectors) -> Result<Extraction, ExtractError> {
    let table = required(doc.root_element(), sels, SelectorField::TableSection)?;
    let headline = required(table, sels, SelectorField::Headline)?;

    let headline = text_of(headline);
    info!("Parsing games from {headline}");

    let mut t = Traversal {
        sels,
        date: None,
        next_game: 0,
        out: Extraction { headline, ..Extraction::default() },
    };

    for block in select_all(table, sels.get(SelectorField::DateGroup)) {
        t.date_group(block);
    }

    t.out.matchups = t.next_game;
    debug!(
        matchups = t.out.matchups,
        records = t.out.records.len(),
        skipped = t.out.skipped.len(),
        "Extraction done"
    );
    Ok(t.out)
}

fn required<'a>(
    scope: ElementRef<'a>,
    sels: &Selectors,
    field: SelectorField,
) -> Result<ElementRef<'a>, ExtractError> {
    select_first(scope, sels.get(field)).ok_or_else(|| {
        tracing::error!(selector = field.key(), "No elements found with the selector: {field}");
        ExtractError::StructureNotFound(field)
    })
}

impl Traversal<'_> {
    fn date_group(&mut self, block: ElementRef<'_>) {
        if let Some(marker) = select_first(block, self.sels.get(SelectorField::Date)) {
            self.date = Some(text_of(marker));
        }

        for game_table in select_all(block, self.sels.get(SelectorField::GameTable)) {
            let game = self.next_game;
            self.next_game += 1;
            self.matchup(game_table, game);
        }
    }

    fn matchup(&mut self, game_table: ElementRef<'_>, game: usize) {
        let header = select_all(game_table, self.sels.get(SelectorField::Header));
        let Some((time_cell, label_cells)) = header.split_first() else {
            return self.skip(game, SkipReason::MissingHeader);
        };
        let time = text_of(*time_cell);
        let labels = label_cells.len();

        let teams = select_all(game_table, self.sels.get(SelectorField::Teams));
        if teams.len() != 2 {
            return self.skip(game, SkipReason::TeamCount(teams.len()));
        }

        for (row, side) in teams.into_iter().zip(Side::IN_ROW_ORDER) {
            match self.team_row(row, side, labels) {
                Ok((team, moneyline)) => self.out.records.push(GameRecord {
                    date: self.date.clone(),
                    time: time.clone(),
                    game,
                    team,
                    side,
                    moneyline,
                }),
                Err(reason) => self.skip(game, reason),
            }
        }
    }

    /// `(team code, raw line)` for one team row.
    fn team_row(
        &self,
        row: ElementRef<'_>,
        side: Side,
        labels: usize,
    ) -> Result<(String, String), SkipReason> {
        let cells = select_all(row, self.sels.cell.as_ref());
        let Some((team_cell, line_cells)) = cells.split_first() else {
            return Err(SkipReason::CellMismatch { side, cells: 0, labels });
        };
        if line_cells.len() != labels {
            return Err(SkipReason::CellMismatch { side, cells: line_cells.len(), labels });
        }

        let team = select_last(*team_cell, self.sels.link.as_ref())
            .and_then(|a| attr(a, "href"))
            .and_then(team_code_from_href)
            .ok_or(SkipReason::MissingTeamLink { side })?;

        let moneyline = line_cells.iter().map(|td| text_of(*td)).collect::<String>();
        Ok((team, moneyline))
    }

    fn skip(&mut self, game: usize, reason: SkipReason) {
        warn!(game, "Skipping: {reason}");
        self.out.skipped.push(MatchupSkipped { game, reason });
    }
}
