//! Query Model: an insertion-ordered, mutable view of a query string.
//!
//! Keys map to a [`QueryValue`]: a bare key (`Null`), a string (possibly
//! empty), or a list when the key repeats. Serialization re-encodes every
//! key and value with [`codec::encode`].

mod scan;
mod value;

pub use value::{QueryItem, QueryValue};

use std::fmt;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::codec;

/// Ordered key/value store built from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: IndexMap<String, QueryValue>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the model from a raw query string (without the leading `?`).
    ///
    /// Keys and values are decoded with [`codec::decode`]. `key` yields
    /// [`QueryValue::Null`], `key=` an empty string, and repeated keys are
    /// collected into a list in arrival order.
    pub fn parse(query: &str) -> Self {
        let mut out = Self::new();
        for pair in scan::pairs(query) {
            let key = codec::decode(pair.key);
            let item = match pair.value {
                Some(v) => QueryItem::Value(codec::decode(v)),
                None => QueryItem::Null,
            };
            tracing::trace!(key = %key, bare = pair.value.is_none(), "query token");
            out.append(key, item);
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        self.params.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Sets `key` to `value`, replacing whatever shape it had before.
    ///
    /// An existing key keeps its position; a new key goes last.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Option<QueryValue> {
        self.params.insert(key.into(), value.into())
    }

    /// Assigns `Some(value)` like [`insert`](Self::insert), or removes the key
    /// for `None`, leaving serialization as if it had never been set.
    pub fn assign(&mut self, key: impl Into<String>, value: Option<QueryValue>) {
        let key = key.into();
        match value {
            Some(v) => {
                self.params.insert(key, v);
            }
            None => {
                self.params.shift_remove(&key);
            }
        }
    }

    /// Removes `key`, keeping the relative order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.params.shift_remove(key)
    }

    /// Adds one occurrence of `key`: the first sets the value, the second
    /// promotes it to a two-element list, later ones append.
    pub fn append(&mut self, key: impl Into<String>, item: QueryItem) {
        match self.params.entry(key.into()) {
            Entry::Occupied(mut e) => e.get_mut().push(item),
            Entry::Vacant(e) => {
                if let Some(v) = item.into_value() {
                    e.insert(v);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Number of distinct keys; a list-valued key counts once.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.params {
            let key = codec::encode(key);
            match value {
                QueryValue::Null => write_token(f, &mut first, &key, None)?,
                QueryValue::Value(v) => write_token(f, &mut first, &key, Some(v))?,
                QueryValue::List(items) if items.is_empty() => {
                    write_token(f, &mut first, &key, Some(""))?
                }
                QueryValue::List(items) => {
                    for item in items {
                        match item {
                            QueryItem::Missing => {}
                            QueryItem::Null => write_token(f, &mut first, &key, None)?,
                            QueryItem::Value(v) => write_token(f, &mut first, &key, Some(v))?,
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_token(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    key: &str,
    value: Option<&str>,
) -> fmt::Result {
    if !std::mem::take(first) {
        f.write_str("&")?;
    }
    f.write_str(key)?;
    if let Some(v) = value {
        write!(f, "={}", codec::encode(v))?;
    }
    Ok(())
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = indexmap::map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
