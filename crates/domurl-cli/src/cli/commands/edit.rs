//! `domurl edit <url>` – rewrite query parameters.

use anyhow::{bail, Result};
use clap::Args;
use domurl_core::config::DomurlConfig;
use domurl_core::{QueryItem, QueryValue, Url};

use crate::cli::Target;

/// Query mutations, applied in the order: clear, remove, set, null, append.
#[derive(Debug, Clone, Default, Args)]
pub struct QueryEdits {
    /// Set KEY to VALUE, replacing any previous value(s).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Set KEY as a bare parameter with no value.
    #[arg(long = "null", value_name = "KEY")]
    pub null: Vec<String>,

    /// Add another KEY=VALUE occurrence (repeats become a list).
    #[arg(long = "append", value_name = "KEY=VALUE")]
    pub append: Vec<String>,

    /// Remove KEY entirely.
    #[arg(long = "remove", value_name = "KEY")]
    pub remove: Vec<String>,

    /// Drop every query parameter first.
    #[arg(long)]
    pub clear: bool,
}

pub fn run_edit(cfg: &DomurlConfig, target: &Target, edits: &QueryEdits) -> Result<()> {
    let mut url = target.resolve(cfg);
    apply_edits(&mut url, edits)?;
    println!("{url}");
    Ok(())
}

pub(crate) fn apply_edits(url: &mut Url, edits: &QueryEdits) -> Result<()> {
    if edits.clear {
        url.clear_query();
    }
    for key in &edits.remove {
        url.query.remove(key);
    }
    for raw in &edits.set {
        let (key, value) = split_assignment(raw)?;
        url.query.insert(key, QueryValue::from(value));
    }
    for key in &edits.null {
        url.query.insert(key.as_str(), QueryValue::Null);
    }
    for raw in &edits.append {
        let (key, value) = split_assignment(raw)?;
        url.query.append(key, QueryItem::from(value));
    }
    tracing::debug!(params = url.query_length(), "applied query edits");
    Ok(())
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => bail!("empty key in {raw:?}"),
        Some(pair) => Ok(pair),
        None => bail!("expected KEY=VALUE, got {raw:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits() -> QueryEdits {
        QueryEdits::default()
    }

    #[test]
    fn set_replaces_and_appends_new_keys() {
        let mut url = Url::new("http://h/?a=1&a=2&b");
        let e = QueryEdits {
            set: vec!["a=x".into(), "c=y z".into()],
            ..edits()
        };
        apply_edits(&mut url, &e).unwrap();
        assert_eq!(url.to_string(), "http://h/?a=x&b&c=y%20z");
    }

    #[test]
    fn append_promotes_to_list() {
        let mut url = Url::new("http://h/?a=1");
        let e = QueryEdits {
            append: vec!["a=2".into(), "a=".into(), "n=v".into()],
            ..edits()
        };
        apply_edits(&mut url, &e).unwrap();
        assert_eq!(url.to_string(), "http://h/?a=1&a=2&a=&n=v");
        assert_eq!(url.query_length(), 2);
    }

    #[test]
    fn null_remove_and_clear() {
        let mut url = Url::new("http://h/p?a=1&b=2#f");
        let e = QueryEdits {
            remove: vec!["a".into()],
            null: vec!["flag".into()],
            ..edits()
        };
        apply_edits(&mut url, &e).unwrap();
        assert_eq!(url.to_string(), "http://h/p?b=2&flag#f");

        let e = QueryEdits {
            clear: true,
            set: vec!["only=1".into()],
            ..edits()
        };
        apply_edits(&mut url, &e).unwrap();
        assert_eq!(url.to_string(), "http://h/p?only=1#f");
    }

    #[test]
    fn value_may_contain_equals() {
        let mut url = Url::new("http://h/");
        let e = QueryEdits {
            set: vec!["expr=a=b".into()],
            ..edits()
        };
        apply_edits(&mut url, &e).unwrap();
        assert_eq!(url.query.get("expr").and_then(QueryValue::as_str), Some("a=b"));
    }

    #[test]
    fn bad_assignments_are_errors() {
        let mut url = Url::new("http://h/");
        let e = QueryEdits {
            set: vec!["novalue".into()],
            ..edits()
        };
        assert!(apply_edits(&mut url, &e).is_err());
        let e = QueryEdits {
            append: vec!["=v".into()],
            ..edits()
        };
        assert!(apply_edits(&mut url, &e).is_err());
    }
}
