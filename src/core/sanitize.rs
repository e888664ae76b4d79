// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;`) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Team code from a team link: second-to-last `/` segment, upper-cased.
/// `/nfl/teams/den/schedule` → `DEN`, `/nfl/teams/den/` → `DEN`.
pub fn team_code_from_href(href: &str) -> Option<String> {
    let parts: Vec<&str> = href.split('/').collect();
    if parts.len() < 2 {
        return None;
    }
    let code = parts[parts.len() - 2].trim();
    if code.is_empty() { None } else { Some(code.to_ascii_uppercase()) }
}
