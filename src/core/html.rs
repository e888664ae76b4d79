// src/core/html.rs
// Thin helpers over `scraper` so the specs read like the page layout.
// A `None` selector (failed to parse) matches nothing.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// All descendants of `el` matching `sel`, in document order.
pub fn select_all<'a>(el: ElementRef<'a>, sel: Option<&Selector>) -> Vec<ElementRef<'a>> {
    match sel {
        Some(sel) => el.select(sel).collect(),
        None => Vec::new(),
    }
}

pub fn select_first<'a>(el: ElementRef<'a>, sel: Option<&Selector>) -> Option<ElementRef<'a>> {
    sel.and_then(|sel| el.select(sel).next())
}

pub fn select_last<'a>(el: ElementRef<'a>, sel: Option<&Selector>) -> Option<ElementRef<'a>> {
    sel.and_then(|sel| el.select(sel).last())
}

/// All text under `el`, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
