// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* and *how to pull it out* without touching the
//! network or the filesystem.
//!
//! ## What lives here
//! - **Pure HTML walking** over a parsed `scraper::Html`, driven by the
//!   selectors from `config.json` (`config::selectors`).
//! - **Tolerant extraction**: a broken matchup is logged and passed over, a
//!   missing results table is an error.
//! - **Typed records** (`GameRecord`) in document order, nothing reshaped yet.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), reshaping (`table`), export (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → scrape::collect_lines → specs::moneylines::parse_doc
//!                                          ↘  table::normalize → file::export_table
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline snippets and saved pages in
//!   `tests/fixtures/`.
pub mod moneylines;
