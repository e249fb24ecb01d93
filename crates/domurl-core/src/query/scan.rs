//! Tokenizer for raw query strings.

/// One `key(=value)?` token, still percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawPair<'a> {
    pub key: &'a str,
    /// `None` for a bare key, `Some("")` for `key=`.
    pub value: Option<&'a str>,
}

/// Iterates the tokens of a query string.
///
/// Runs of `&` and `=` before a key are skipped, so `=x&&y` yields the bare
/// keys `x` and `y`. A value runs to the next `&` and may itself contain `=`.
pub(crate) fn pairs(query: &str) -> Pairs<'_> {
    Pairs { query, pos: 0 }
}

pub(crate) struct Pairs<'a> {
    query: &'a str,
    pos: usize,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = RawPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.query.as_bytes();
        let mut i = self.pos;

        while i < bytes.len() && (bytes[i] == b'&' || bytes[i] == b'=') {
            i += 1;
        }
        if i >= bytes.len() {
            self.pos = i;
            return None;
        }

        let key_start = i;
        while i < bytes.len() && bytes[i] != b'&' && bytes[i] != b'=' {
            i += 1;
        }
        let key = &self.query[key_start..i];

        let value = if bytes.get(i) == Some(&b'=') {
            let value_start = i + 1;
            i = value_start;
            while i < bytes.len() && bytes[i] != b'&' {
                i += 1;
            }
            Some(&self.query[value_start..i])
        } else {
            None
        };

        self.pos = i;
        Some(RawPair { key, value })
    }
}
