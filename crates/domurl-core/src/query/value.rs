//! Per-key value shapes of the query model.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// The value stored for a key that is present in a [`Query`](super::Query).
///
/// A key that is not in the map at all is the "missing" state and is left
/// out of serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Present without a value: serialized as a bare `key`.
    Null,
    /// Serialized as `key=value`, including `key=` for an empty string.
    Value(String),
    /// One token per non-missing item; an empty list serializes as `key=`.
    List(Vec<QueryItem>),
}

/// One position of a list-valued key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryItem {
    /// Skipped when serializing; the other positions keep their order.
    Missing,
    Null,
    Value(String),
}

impl QueryValue {
    /// The string value, if this is a single non-null value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }

    pub fn as_list(&self) -> Option<&[QueryItem]> {
        match self {
            QueryValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<QueryItem>> {
        match self {
            QueryValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Adds another occurrence of the key, turning a single value into a
    /// two-element list on the first repeat.
    pub fn push(&mut self, item: QueryItem) {
        match self {
            QueryValue::List(items) => items.push(item),
            single => {
                let first = match std::mem::replace(single, QueryValue::Null) {
                    QueryValue::Value(v) => QueryItem::Value(v),
                    _ => QueryItem::Null,
                };
                *single = QueryValue::List(vec![first, item]);
            }
        }
    }
}

impl QueryItem {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryItem::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The value this item would hold on its own, `None` for `Missing`.
    pub fn into_value(self) -> Option<QueryValue> {
        match self {
            QueryItem::Missing => None,
            QueryItem::Null => Some(QueryValue::Null),
            QueryItem::Value(v) => Some(QueryValue::Value(v)),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Value(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Value(v)
    }
}

impl From<Option<&str>> for QueryValue {
    fn from(v: Option<&str>) -> Self {
        v.map_or(QueryValue::Null, QueryValue::from)
    }
}

impl From<Vec<QueryItem>> for QueryValue {
    fn from(items: Vec<QueryItem>) -> Self {
        QueryValue::List(items)
    }
}

impl From<&str> for QueryItem {
    fn from(v: &str) -> Self {
        QueryItem::Value(v.to_string())
    }
}

impl From<String> for QueryItem {
    fn from(v: String) -> Self {
        QueryItem::Value(v)
    }
}

impl From<Option<&str>> for QueryItem {
    fn from(v: Option<&str>) -> Self {
        v.map_or(QueryItem::Null, QueryItem::from)
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryValue::Null => serializer.serialize_none(),
            QueryValue::Value(v) => serializer.serialize_str(v),
            QueryValue::List(items) => {
                let present = items.iter().filter(|i| !matches!(i, QueryItem::Missing));
                let mut seq = serializer.serialize_seq(Some(present.clone().count()))?;
                for item in present {
                    match item {
                        QueryItem::Value(v) => seq.serialize_element(v)?,
                        _ => seq.serialize_element(&Option::<&str>::None)?,
                    }
                }
                seq.end()
            }
        }
    }
}
