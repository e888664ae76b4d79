// src/config/selectors.rs
use std::fmt;

use scraper::Selector;
use serde::Deserialize;

use super::consts::{CELL_SELECTOR, DEFAULT_DATE_GROUP, LINK_SELECTOR};

/// Where each piece of the odds page lives, as CSS selectors.
///
/// Queries are relative to the element found by the step before:
/// `table_section` → `date_group` → `game_table` → (`header`, `teams`).
/// `headline` and `date` are looked up inside the table and the date group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    pub table_section: String,
    pub headline: String,
    pub date: String,
    pub game_table: String,
    /// Header cells of one matchup: time first, then column labels.
    pub header: String,
    /// The two team rows of one matchup, away first.
    pub teams: String,
    #[serde(default = "default_date_group")]
    pub date_group: String,
}

fn default_date_group() -> String {
    s!(DEFAULT_DATE_GROUP)
}

/// Logical field names, displayed as their config keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorField {
    TableSection,
    Headline,
    DateGroup,
    Date,
    GameTable,
    Header,
    Teams,
}

impl SelectorField {
    pub fn key(self) -> &'static str {
        match self {
            SelectorField::TableSection => "table_section",
            SelectorField::Headline => "headline",
            SelectorField::DateGroup => "date_group",
            SelectorField::Date => "date",
            SelectorField::GameTable => "game_table",
            SelectorField::Header => "header",
            SelectorField::Teams => "teams",
        }
    }
}

impl fmt::Display for SelectorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl SelectorConfig {
    pub fn query(&self, field: SelectorField) -> &str {
        match field {
            SelectorField::TableSection => &self.table_section,
            SelectorField::Headline => &self.headline,
            SelectorField::DateGroup => &self.date_group,
            SelectorField::Date => &self.date,
            SelectorField::GameTable => &self.game_table,
            SelectorField::Header => &self.header,
            SelectorField::Teams => &self.teams,
        }
    }
}

/// Parsed form of a [`SelectorConfig`].
///
/// A query that does not parse is kept as `None` and behaves like a query
/// that matches nothing, so the navigator reports it the same way.
#[derive(Debug)]
pub struct Selectors {
    pub table_section: Option<Selector>,
    pub headline: Option<Selector>,
    pub date_group: Option<Selector>,
    pub date: Option<Selector>,
    pub game_table: Option<Selector>,
    pub header: Option<Selector>,
    pub teams: Option<Selector>,
    pub cell: Option<Selector>,
    pub link: Option<Selector>,
}

impl Selectors {
    pub fn compile(config: &SelectorConfig) -> Self {
        let field = |f: SelectorField| compile_one(f.key(), config.query(f));
        Self {
            table_section: field(SelectorField::TableSection),
            headline: field(SelectorField::Headline),
            date_group: field(SelectorField::DateGroup),
            date: field(SelectorField::Date),
            game_table: field(SelectorField::GameTable),
            header: field(SelectorField::Header),
            teams: field(SelectorField::Teams),
            cell: compile_one("cell", CELL_SELECTOR),
            link: compile_one("link", LINK_SELECTOR),
        }
    }

    pub fn get(&self, field: SelectorField) -> Option<&Selector> {
        match field {
            SelectorField::TableSection => self.table_section.as_ref(),
            SelectorField::Headline => self.headline.as_ref(),
            SelectorField::DateGroup => self.date_group.as_ref(),
            SelectorField::Date => self.date.as_ref(),
            SelectorField::GameTable => self.game_table.as_ref(),
            SelectorField::Header => self.header.as_ref(),
            SelectorField::Teams => self.teams.as_ref(),
        }
    }
}

fn compile_one(key: &str, query: &str) -> Option<Selector> {
    match Selector::parse(query) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::error!(selector = key, query, "Invalid selector: {e}");
            None
        }
    }
}
