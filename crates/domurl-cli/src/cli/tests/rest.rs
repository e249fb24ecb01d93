//! Tests for decode, encode, completions and man.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_decode() {
    match parse(&["domurl", "decode", "a+b%3F"]) {
        CliCommand::Decode { text } => assert_eq!(text, "a+b%3F"),
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_encode() {
    match parse(&["domurl", "encode", "a b"]) {
        CliCommand::Encode { text } => assert_eq!(text, "a b"),
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["domurl", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["domurl", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
