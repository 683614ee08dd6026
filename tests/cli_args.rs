// tests/cli_args.rs
//
// Argument parsing only; nothing here touches the network or the
// environment.
//
use std::path::PathBuf;

use bokat_scrape::cli::{parse_args, Params};
use bokat_scrape::config::options::OutputFormat;

fn parse(args: &[&str]) -> Result<Params, String> {
    parse_args(args.iter().map(|a| a.to_string())).map_err(|e| e.to_string())
}

#[test]
fn empty_args_give_defaults() {
    let params = parse(&[]).unwrap();
    assert_eq!(params, Params::new());
}

#[test]
fn names_split_and_trim() {
    let params = parse(&["--names", "Jane Doe, John Smith,,  Erik Ek "]).unwrap();
    assert_eq!(params.names, vec!["Jane Doe", "John Smith", "Erik Ek"]);
}

#[test]
fn repeated_names_flags_accumulate() {
    let params = parse(&["--names", "Jane Doe", "--names", "John Smith"]).unwrap();
    assert_eq!(params.names, vec!["Jane Doe", "John Smith"]);
}

#[test]
fn url_and_fetch_overrides() {
    let params = parse(&[
        "--url",
        "http://example.se/event?id=1",
        "--timeout",
        "5",
        "--user-agent",
        "test/1.0",
    ])
    .unwrap();
    assert_eq!(params.url.as_deref(), Some("http://example.se/event?id=1"));
    assert_eq!(params.timeout_secs, Some(5));
    assert_eq!(params.user_agent.as_deref(), Some("test/1.0"));
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(parse(&["--timeout", "0"]).is_err());
}

#[test]
fn roster_and_export_flags() {
    let params = parse(&[
        "--roster",
        "--format",
        "tsv",
        "--include-headers",
        "-o",
        "out/roster.tsv",
    ])
    .unwrap();
    assert!(params.roster);
    assert_eq!(params.export.format, OutputFormat::Tsv);
    assert!(params.export.include_headers);
    assert_eq!(params.export.out, Some(PathBuf::from("out/roster.tsv")));
}

#[test]
fn unknown_format_is_rejected() {
    let err = parse(&["--format", "xml"]).unwrap_err();
    assert!(err.contains("Unknown format"));
}

#[test]
fn unknown_arg_is_rejected() {
    let err = parse(&["--frobnicate"]).unwrap_err();
    assert!(err.contains("Unknown arg"));
}

#[test]
fn missing_values_are_rejected() {
    assert!(parse(&["--url"]).is_err());
    assert!(parse(&["--names"]).is_err());
    assert!(parse(&["--out"]).is_err());
}

#[test]
fn help_flag_sets_show_help() {
    assert!(parse(&["-h"]).unwrap().show_help);
    assert!(parse(&["--help"]).unwrap().show_help);
}
