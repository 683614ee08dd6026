// src/specs/attendance.rs
//! Scraping *spec* for the event signup page.
//!
//! Purpose:
//! - Locate the signup roster table: the one whose header row carries the
//!   localized column labels `Status | Namn | Gäst | Kommentar`.
//! - Parse each participant row into a [`Signup`]: cleaned display name plus
//!   the status icon stem (`yes.png` → `"yes"` means attending).
//! - Filter the roster against a caller-supplied set of names of interest.
//!
//! Non-Responsibilities (by design):
//! - **No caching / persistence.**
//! - **No output formatting** — the CLI owns that.

use std::collections::HashSet;
use std::error::Error;

use crate::config::consts::{
    ATTENDING_ICON, HEADER_ANCHOR, ICON_PREFIX, ICON_SUFFIX, NAME_CELL_CLASS, REQUIRED_HEADERS,
};
use crate::config::options::FetchOptions;
use crate::core::html::{
    attr_value, enclosing_block_ci, inner_after_open_tag, next_tag_block_ci, next_tag_open_ci,
    strip_tags, tag_opener,
};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, normalize_ws};

/// One roster row. `status_icon` is the icon file stem (`"yes"`, `"no"`,
/// `"maybe"`, …) or `None` when the row carries no recognizable icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub status_icon: Option<String>,
}

impl Signup {
    pub fn is_attending(&self) -> bool {
        self.status_icon.as_deref() == Some(ATTENDING_ICON)
    }
}

/// Output bundle: header-cell texts plus parsed rows, row order preserved.
#[derive(Debug)]
pub struct RosterBundle {
    pub headers: Vec<String>,
    pub signups: Vec<Signup>,
}

pub fn fetch(opts: &FetchOptions) -> Result<RosterBundle, Box<dyn Error>> {
    let doc = net::http_get(opts)?;
    extract(&doc)
}

/// Locate + parse. A document without a qualifying roster table is a hard
/// error: no roster means no attendance data is derivable.
pub fn extract(doc: &str) -> Result<RosterBundle, Box<dyn Error>> {
    let table = locate_roster_table(doc).ok_or("signup roster table not found")?;
    Ok(RosterBundle {
        headers: header_texts(table),
        signups: parse_signups(table),
    })
}

/// Anchor on the first `<th>` whose text mentions the status label, ascend
/// to its innermost enclosing `<table>`, then verify the full header set
/// before trusting it. Only the first anchor cell is considered; a table
/// that fails verification is a miss, not a retry.
pub fn locate_roster_table(doc: &str) -> Option<&str> {
    let anchor = first_status_header(doc)?;
    let (tb_s, tb_e) = enclosing_block_ci(doc, anchor, "<table", "</table>")?;
    let table = &doc[tb_s..tb_e];

    let texts = header_texts(table);
    let complete = REQUIRED_HEADERS
        .iter()
        .all(|want| texts.iter().any(|have| have == want));
    if complete { Some(table) } else { None }
}

/// The ordered attendance filter. Keeps roster row order, keeps
/// duplicates, matches cleaned names exactly against the interest set.
pub fn attending_names(signups: &[Signup], interest: &HashSet<String>) -> Vec<String> {
    signups
        .iter()
        .filter(|s| interest.contains(&s.name) && s.is_attending())
        .map(|s| s.name.clone())
        .collect()
}

/* ---------- helpers ---------- */

/// Byte offset of the first `<th>` whose text contains the anchor label.
fn first_status_header(doc: &str) -> Option<usize> {
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_tag_block_ci(doc, "<th", "</th>", pos) {
        if cell_text(&doc[th_s..th_e]).contains(HEADER_ANCHOR) {
            return Some(th_s);
        }
        pos = th_e;
    }
    None
}

/// All `<th>` texts within the table block, cleaned.
fn header_texts(table: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_tag_block_ci(table, "<th", "</th>", pos) {
        out.push(cell_text(&table[th_s..th_e]));
        pos = th_e;
    }
    out
}

fn parse_signups(table: &str) -> Vec<Signup> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        // Participant rows carry the name in a TextSmall cell; header and
        // layout rows don't, and are skipped wholesale.
        let Some(raw_name) = name_cell_text(tr) else { continue };
        let name = clean_name(&raw_name);
        if name.is_empty() {
            continue;
        }

        out.push(Signup {
            name,
            status_icon: status_icon(tr),
        });
    }
    out
}

/// Text of the first `<td>` whose class list contains the name-cell marker.
fn name_cell_text(tr: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        let block = &tr[td_s..td_e];
        pos = td_e;

        let class = attr_value(tag_opener(block), "class").unwrap_or("");
        if class.split_ascii_whitespace().any(|c| c == NAME_CELL_CLASS) {
            return Some(cell_text(block));
        }
    }
    None
}

/// Stem of the first status icon in the row: an `<img>` whose `src` sits
/// under the site's image directory. `"/images/yes.png"` → `"yes"`.
fn status_icon(tr: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((img_s, img_e)) = next_tag_open_ci(tr, "<img", pos) {
        pos = img_e;
        if let Some(src) = attr_value(&tr[img_s..img_e], "src") {
            if src.starts_with(ICON_PREFIX) && src.ends_with(ICON_SUFFIX) {
                let base = src.rsplit('/').next().unwrap_or(src);
                let stem = base.strip_suffix(ICON_SUFFIX).unwrap_or(base);
                return Some(stem.to_string());
            }
        }
    }
    None
}

/// The site appends a parenthesized signup date to display names. Cut at
/// the LAST `(` so names that themselves contain parentheses survive.
fn clean_name(raw: &str) -> String {
    let cut = match raw.rfind('(') {
        Some(i) => &raw[..i],
        None => raw,
    };
    cut.trim().to_string()
}

fn cell_text(block: &str) -> String {
    normalize_ws(&strip_tags(&normalize_entities(inner_after_open_tag(block))))
}
