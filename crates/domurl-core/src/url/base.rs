//! Base locations for relative references.
//!
//! The parser only depends on [`BaseProvider`]; where the base comes from
//! (the process's working directory, a configured URL, a `--base` flag) is
//! up to the caller.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::{self, Component};

#[derive(Debug, Error)]
pub enum BaseError {
    #[error("cannot read current directory")]
    CurrentDir(#[source] std::io::Error),
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Supplies the base used when the input is empty or relative.
pub trait BaseProvider {
    fn base(&self) -> Result<String, BaseError>;
}

/// The current working directory as a `file://` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentDir;

impl BaseProvider for CurrentDir {
    fn base(&self) -> Result<String, BaseError> {
        let dir = std::env::current_dir().map_err(BaseError::CurrentDir)?;
        file_url(&dir)
    }
}

/// A base given up front, e.g. from configuration or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBase(pub String);

impl FixedBase {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }
}

impl BaseProvider for FixedBase {
    fn base(&self) -> Result<String, BaseError> {
        Ok(self.0.clone())
    }
}

/// Formats an absolute filesystem path as a `file://` URL (no trailing slash
/// added). Backslashes are turned into `/` and a leading `/` is ensured so
/// Windows drive paths come out as `file:///C:/...`.
pub fn file_url(path: &Path) -> Result<String, BaseError> {
    let text = path
        .to_str()
        .ok_or_else(|| BaseError::NonUtf8Path(path.to_path_buf()))?
        .replace('\\', "/");
    let rooted = if text.starts_with('/') {
        text
    } else {
        format!("/{text}")
    };
    Ok(format!(
        "file://{}",
        codec::escape_component(&rooted, Component::Path)
    ))
}
