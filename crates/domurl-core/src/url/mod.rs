//! URL Resolver/Parser.
//!
//! [`Url`] holds a URL split into plain string fields plus a live [`Query`].
//! Parsing is lenient: every input yields a `Url`, with missing pieces left
//! empty. `Display` reassembles the canonical string.

pub mod base;
mod port;
mod resolve;
mod split;

pub use base::{BaseError, BaseProvider, CurrentDir, FixedBase};
pub use port::default_port;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::codec::{self, Component};
use crate::query::Query;

/// Used when the base provider fails.
const FALLBACK_BASE: &str = "file:///";

/// Knobs for [`Url::parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep the components as found: no merging of relative references with
    /// the base and no leading `/` forced onto the path.
    pub no_transform: bool,
}

/// A parsed URL. Every field is public and may be edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Url {
    /// Scheme without the trailing `:`.
    pub protocol: String,
    pub user: String,
    pub pass: String,
    /// Host name only, no port.
    pub host: String,
    /// Empty when absent, zero, or the scheme's default.
    pub port: String,
    pub path: String,
    pub query: Query,
    /// Fragment without the leading `#`.
    pub hash: String,
}

impl Url {
    /// Parses `input`, resolving relative references against the current
    /// working directory. An empty `input` yields the working directory itself.
    pub fn new(input: &str) -> Self {
        Self::parse_with(input, &CurrentDir, ParseOptions::default())
    }

    /// Parses `input` without relative resolution or path fix-ups.
    pub fn new_raw(input: &str) -> Self {
        Self::parse_with(input, &CurrentDir, ParseOptions { no_transform: true })
    }

    /// Parses `input`, resolving relative references against `base`.
    pub fn with_base(input: &str, base: &str) -> Self {
        Self::parse_with(input, &FixedBase::new(base), ParseOptions::default())
    }

    pub fn parse_with(input: &str, base: &dyn BaseProvider, options: ParseOptions) -> Self {
        // An empty input is the base itself, never merged onto itself.
        if input.is_empty() {
            let base_text = base_or_fallback(base);
            if options.no_transform {
                return Self::from_parts(&split::split(&base_text));
            }
            return Self::absolute(&base_text);
        }

        let parts = split::split(input);
        let mut url = Self::from_parts(&parts);

        if options.no_transform {
            return url;
        }

        if parts.scheme.is_empty() && !parts.has_authority {
            let base_url = Self::absolute(&base_or_fallback(base));
            let relative = std::mem::take(&mut url.path);
            url.path = resolve::merge_paths(&base_url.path, &relative);
            tracing::debug!(
                relative = %relative,
                base = %base_url,
                path = %url.path,
                "resolved relative reference"
            );
            url.protocol = base_url.protocol;
            url.user = base_url.user;
            url.pass = base_url.pass;
            url.host = base_url.host;
            url.port = base_url.port;
        } else {
            // `//host/path` keeps its own authority but takes the base scheme.
            if parts.scheme.is_empty() {
                url.protocol = Self::absolute(&base_or_fallback(base)).protocol;
                url.port = port::elide_port(&url.protocol, parts.port);
            }
            ensure_leading_slash(&mut url.path);
        }

        url
    }

    /// Parses a base location: no relative resolution, rooted path.
    fn absolute(input: &str) -> Self {
        let mut url = Self::from_parts(&split::split(input));
        ensure_leading_slash(&mut url.path);
        url
    }

    fn from_parts(parts: &split::Parts<'_>) -> Self {
        Self {
            protocol: parts.scheme.to_string(),
            user: parts.user.to_string(),
            pass: parts.pass.to_string(),
            host: codec::escape_component(parts.host, Component::Host),
            port: port::elide_port(parts.scheme, parts.port),
            path: codec::escape_component(parts.path, Component::Path),
            query: Query::parse(parts.query),
            hash: codec::escape_component(parts.fragment, Component::Fragment),
        }
    }

    /// Removes every query parameter; the rest of the URL is untouched.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Number of distinct query keys.
    pub fn query_length(&self) -> usize {
        self.query.len()
    }
}

fn base_or_fallback(provider: &dyn BaseProvider) -> String {
    provider.base().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "base location unavailable, using {}", FALLBACK_BASE);
        FALLBACK_BASE.to_string()
    })
}

fn ensure_leading_slash(path: &mut String) {
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.protocol.is_empty() {
            write!(f, "{}://", self.protocol)?;
        }
        if !self.user.is_empty() {
            f.write_str(&self.user)?;
            if !self.pass.is_empty() {
                write!(f, ":{}", self.pass)?;
            }
            f.write_str("@")?;
        }
        f.write_str(&self.host)?;
        if !self.port.is_empty() {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(&self.path)?;
        let query = self.query.to_string();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        if !self.hash.is_empty() {
            write!(f, "#{}", self.hash)?;
        }
        Ok(())
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
