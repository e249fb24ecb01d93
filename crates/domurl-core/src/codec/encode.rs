//! Percent-encoding for query tokens and URL components.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Everything except alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

const HOST: &AsciiSet = &PATH.add(b'/').add(b'@');

/// URL component whose text is canonicalized by [`escape_component`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Host,
    Path,
    Fragment,
}

/// Percent-encodes a query key or value.
///
/// Letters, digits and `-_.!~*'()` are kept; every other byte of the UTF-8
/// encoding becomes `%XX` with uppercase hex.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Escapes the characters that may not appear literally in `component`.
///
/// `%` is never escaped, so text that is already encoded is left as it is.
pub fn escape_component(input: &str, component: Component) -> String {
    let set = match component {
        Component::Host => HOST,
        Component::Path => PATH,
        Component::Fragment => FRAGMENT,
    };
    utf8_percent_encode(input, set).to_string()
}
