//! Default-port elision.

/// Well-known default ports, per the WHATWG URL standard.
const DEFAULT_PORTS: [(&str, u16); 6] = [
    ("ftp", 21),
    ("gopher", 70),
    ("http", 80),
    ("https", 443),
    ("ws", 80),
    ("wss", 443),
];

/// The default port for `scheme` (ASCII case-insensitive).
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}

/// Returns `port` unless it is zero or the scheme's default, in which case
/// it is dropped. Non-numeric ports are kept verbatim.
pub(crate) fn elide_port(scheme: &str, port: &str) -> String {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return port.to_string();
    }
    match port.parse::<u64>() {
        Ok(0) => String::new(),
        Ok(n) if default_port(scheme).map(u64::from) == Some(n) => String::new(),
        _ => port.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_defaults() {
        assert_eq!(default_port("http"), Some(80));
        assert_eq!(default_port("HTTPS"), Some(443));
        assert_eq!(default_port("gopher"), Some(70));
        assert_eq!(default_port("file"), None);
    }

    #[test]
    fn elides_default_and_zero() {
        assert_eq!(elide_port("http", "80"), "");
        assert_eq!(elide_port("http", "080"), "");
        assert_eq!(elide_port("wss", "443"), "");
        assert_eq!(elide_port("ftp", "21"), "");
        assert_eq!(elide_port("custom", "0"), "");
        assert_eq!(elide_port("http", "000"), "");
    }

    #[test]
    fn keeps_other_ports() {
        assert_eq!(elide_port("http", "8080"), "8080");
        assert_eq!(elide_port("https", "80"), "80");
        assert_eq!(elide_port("", "80"), "80");
        assert_eq!(elide_port("http", "abc"), "abc");
        assert_eq!(elide_port("http", "99999999999999999999999"), "99999999999999999999999");
    }
}
