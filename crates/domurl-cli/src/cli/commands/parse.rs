//! `domurl parse <url>` – show each component.

use anyhow::{Context, Result};
use domurl_core::config::{DomurlConfig, OutputFormat};
use domurl_core::{QueryItem, QueryValue, Url};
use std::fmt::Write;

use crate::cli::Target;

pub fn run_parse(cfg: &DomurlConfig, target: &Target, format: Option<OutputFormat>) -> Result<()> {
    let url = target.resolve(cfg);
    match format.or(cfg.output).unwrap_or_default() {
        OutputFormat::Text => print!("{}", render_text(&url)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&url).context("serialize URL")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// One `name: value` line per component, then one line per query key.
pub(crate) fn render_text(url: &Url) -> String {
    let mut out = String::new();
    let fields = [
        ("protocol", &url.protocol),
        ("user", &url.user),
        ("pass", &url.pass),
        ("host", &url.host),
        ("port", &url.port),
        ("path", &url.path),
    ];
    for (name, value) in fields {
        let _ = writeln!(out, "{name}: {value}");
    }
    let _ = writeln!(out, "query: {}", url.query);
    for (key, value) in url.query.iter() {
        let _ = writeln!(out, "  {key} = {}", describe(value));
    }
    let _ = writeln!(out, "hash: {}", url.hash);
    let _ = writeln!(out, "href: {url}");
    out
}

fn describe(value: &QueryValue) -> String {
    match value {
        QueryValue::Null => "null".to_string(),
        QueryValue::Value(v) => format!("{v:?}"),
        QueryValue::List(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    QueryItem::Missing => "missing".to_string(),
                    QueryItem::Null => "null".to_string(),
                    QueryItem::Value(v) => format!("{v:?}"),
                })
                .collect();
            format!("[{}]", parts.join(", "))
        }
    }
}
