// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on a single
//! page and encodes *where the ground truth lives in the HTML* and *how to
//! extract it robustly*:
//!
//! - **Pure HTML parsing** using `core::html` helpers (case-insensitive tag
//!   blocks, tag stripping, whitespace/entity normalization).
//! - **Selector choice** (e.g., anchor the roster table on its `Status`
//!   header cell, then verify the full header set before trusting it).
//! - **Light shaping** of results into small bundle structs.
//!
//! What does **not** live here: networking policy, filtering decisions,
//! export formatting. Specs read pages; the `scrape` layer decides what to
//! do with the result.
//!
//! ## Conventions & invariants
//! - Case-insensitive tag detection; no full-document regexes.
//! - Prefer local scanning within known blocks (`<table>…</table>`,
//!   `<td class="TextSmall">…`).
//! - Row-level shape mismatches skip the row; they never abort the page.
//! - Specs are testable offline against fixture HTML.
pub mod attendance;
