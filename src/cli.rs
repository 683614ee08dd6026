// src/cli.rs
use std::collections::HashSet;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::config::options::{ExportOptions, FetchOptions, OutputFormat};
use crate::{csv, scrape};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub url: Option<String>,          // else BOKAT_URL from the environment
    pub names: Vec<String>,           // interest set, row order irrelevant
    pub names_file: Option<PathBuf>,  // one name per line
    pub roster: bool,                 // dump the whole roster instead of filtering
    pub export: ExportOptions,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub show_help: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: None,
            names: Vec::new(),
            names_file: None,
            roster: false,
            export: ExportOptions::default(),
            timeout_secs: None,
            user_agent: None,
            show_help: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;

    if params.show_help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let fetch = resolve_fetch(&params)?;

    let output = if params.roster {
        let data = scrape::collect_roster(&fetch)?;
        csv::dataset_to_string(&data, &params.export)
    } else {
        let interest = resolve_interest(&params)?;
        let attending = scrape::collect_attending(&fetch, &interest)?;
        let mut text = attending.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    };

    emit(&params.export, &output)
}

pub fn parse_args(args: impl Iterator<Item = String>) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();
    let mut args = args;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.url = Some(args.next().ok_or("Missing value for --url")?),
            "--names" => {
                let v = args.next().ok_or("Missing value for --names")?;
                params.names.extend(parse_names_list(&v));
            }
            "--names-file" => {
                let v = args.next().ok_or("Missing value for --names-file")?;
                params.names_file = Some(PathBuf::from(v));
            }
            "--roster" => params.roster = true,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.export.out = Some(PathBuf::from(v));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.export.include_headers = true,
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if v == 0 {
                    return Err("Timeout must be at least 1 second".into());
                }
                params.timeout_secs = Some(v);
            }
            "--user-agent" => {
                params.user_agent = Some(args.next().ok_or("Missing value for --user-agent")?);
            }
            "-h" | "--help" => params.show_help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn parse_names_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

fn resolve_fetch(params: &Params) -> Result<FetchOptions, Box<dyn Error>> {
    let mut fetch = match &params.url {
        Some(url) => FetchOptions::new(url.clone()),
        None => FetchOptions::from_env()
            .map_err(|e| format!("{} (or pass --url)", e))?,
    };
    if let Some(secs) = params.timeout_secs {
        fetch = fetch.with_timeout_secs(secs);
    }
    if let Some(ua) = &params.user_agent {
        fetch = fetch.with_user_agent(ua.clone());
    }
    Ok(fetch)
}

fn resolve_interest(params: &Params) -> Result<HashSet<String>, Box<dyn Error>> {
    let mut interest: HashSet<String> = params.names.iter().cloned().collect();

    if let Some(path) = &params.names_file {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        interest.extend(
            text.lines()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
        );
    }

    if interest.is_empty() {
        return Err("No names given; use --names, --names-file or --roster".into());
    }
    Ok(interest)
}

fn emit(export: &ExportOptions, output: &str) -> Result<(), Box<dyn Error>> {
    match &export.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, output)?;
        }
        None => print!("{output}"),
    }
    Ok(())
}
