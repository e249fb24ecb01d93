//! Tests for parse, normalize and edit.

use super::parse;
use crate::cli::{Cli, CliCommand, Format};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["domurl", "parse", "http://example.com/a?b=1"]) {
        CliCommand::Parse { target, format } => {
            assert_eq!(target.url, "http://example.com/a?b=1");
            assert!(target.base.is_none());
            assert!(!target.no_transform);
            assert!(format.is_none());
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json_with_base() {
    match parse(&[
        "domurl",
        "parse",
        "../x",
        "--base",
        "http://example.com/a/b/",
        "--format",
        "json",
    ]) {
        CliCommand::Parse { target, format } => {
            assert_eq!(target.url, "../x");
            assert_eq!(target.base.as_deref(), Some("http://example.com/a/b/"));
            assert_eq!(format, Some(Format::Json));
        }
        _ => panic!("expected Parse with --base --format json"),
    }
}

#[test]
fn cli_parse_parse_without_url_means_base() {
    match parse(&["domurl", "parse"]) {
        CliCommand::Parse { target, .. } => assert_eq!(target.url, ""),
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_normalize_no_transform() {
    match parse(&["domurl", "normalize", "/foo?x", "--no-transform"]) {
        CliCommand::Normalize { target } => {
            assert_eq!(target.url, "/foo?x");
            assert!(target.no_transform);
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_edit() {
    match parse(&[
        "domurl",
        "edit",
        "http://h/?a=1",
        "--set",
        "b=2",
        "--set",
        "c=3",
        "--null",
        "flag",
        "--append",
        "a=4",
        "--remove",
        "old",
        "--clear",
    ]) {
        CliCommand::Edit { target, edits } => {
            assert_eq!(target.url, "http://h/?a=1");
            assert_eq!(edits.set, vec!["b=2", "c=3"]);
            assert_eq!(edits.null, vec!["flag"]);
            assert_eq!(edits.append, vec!["a=4"]);
            assert_eq!(edits.remove, vec!["old"]);
            assert!(edits.clear);
        }
        _ => panic!("expected Edit"),
    }
}

#[test]
fn cli_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["domurl", "parse", "x", "--format", "yaml"]).is_err());
}
