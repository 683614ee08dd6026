// src/scrape/mod.rs
// Collect layer: composes the page spec into ready-to-use results and
// logs milestones. Specs read the page; this layer decides what the rest
// of the program gets to see.

use std::collections::HashSet;
use std::error::Error;

use crate::config::consts::DEFAULT_ROSTER_HEADERS;
use crate::config::options::FetchOptions;
use crate::specs::attendance::{self, RosterBundle, Signup};
use crate::{logd, logf, loge};

/// Scraped data in export shape.
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Full roster as `[Name, Status]` rows, canonical headers synthesized.
pub fn collect_roster(fetch: &FetchOptions) -> Result<DataSet, Box<dyn Error>> {
    let bundle = fetch_bundle(fetch)?;

    let rows = bundle.signups.iter().map(roster_row).collect();
    Ok(DataSet {
        headers: Some(DEFAULT_ROSTER_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows,
    })
}

/// Attending names out of the interest set, in roster row order.
pub fn collect_attending(
    fetch: &FetchOptions,
    interest: &HashSet<String>,
) -> Result<Vec<String>, Box<dyn Error>> {
    let bundle = fetch_bundle(fetch)?;
    let attending = attendance::attending_names(&bundle.signups, interest);
    logf!("{} of {} interest names attending", attending.len(), interest.len());
    Ok(attending)
}

fn fetch_bundle(fetch: &FetchOptions) -> Result<RosterBundle, Box<dyn Error>> {
    logf!("Fetching signup page: {}", fetch.url);
    match attendance::fetch(fetch) {
        Ok(bundle) => {
            logf!("Parsed {} signup rows", bundle.signups.len());
            logd!("Roster headers: {:?}", bundle.headers);
            Ok(bundle)
        }
        Err(e) => {
            loge!("Scrape failed: {e}");
            Err(e)
        }
    }
}

fn roster_row(signup: &Signup) -> Vec<String> {
    vec![
        signup.name.clone(),
        signup.status_icon.clone().unwrap_or_default(),
    ]
}
