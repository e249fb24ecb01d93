//! Form-style percent decoding with best-effort UTF-8 reassembly.

/// Outcome of matching a run of escapes against one decoding pass.
enum Merge {
    /// The run does not fit this pass; try again one byte further on.
    NoMatch,
    /// The run fits the pass but encodes something we refuse to build
    /// (overlong form, surrogate, beyond the BMP). It is copied verbatim.
    Keep,
    Char(char),
}

/// Decodes a query component.
///
/// `+` becomes a space first. Escapes are then merged in three passes:
/// 3-byte UTF-8 sequences, 2-byte sequences, and finally single escapes in
/// `%00..=%7F`. Whatever is left over stays as escape text.
///
/// # Examples
///
/// - `decode("a+b%3f")` → `"a b?"`
/// - `decode("caf%C3%A9")` → `"café"`
/// - `decode("%C0%AF")` → `"%C0%AF"` (overlong, not merged)
pub fn decode(input: &str) -> String {
    let s = input.replace('+', " ");
    let s = replace_escapes(&s, 3, three_byte);
    let s = replace_escapes(&s, 2, two_byte);
    replace_escapes(&s, 1, ascii)
}

/// Scans `input` once, left to right, for runs of `count` consecutive `%XX`
/// escapes and lets `merge` decide what each run becomes. A matched run is
/// consumed even when kept verbatim, so the scan resumes after it.
fn replace_escapes(input: &str, count: usize, merge: fn(&[u8]) -> Merge) -> String {
    let bytes = input.as_bytes();
    let width = count * 3;
    let mut octets = [0u8; 3];
    let mut out = String::with_capacity(input.len());
    // Start of the text not yet copied to `out`. Always sits on a char
    // boundary because escapes start with the ASCII byte `%`.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' || !read_escapes(&bytes[i..], &mut octets[..count]) {
            i += 1;
            continue;
        }
        match merge(&octets[..count]) {
            Merge::NoMatch => i += 1,
            Merge::Keep => i += width,
            Merge::Char(c) => {
                out.push_str(&input[copied..i]);
                out.push(c);
                i += width;
                copied = i;
            }
        }
    }

    out.push_str(&input[copied..]);
    out
}

/// Reads `out.len()` consecutive escapes from the start of `bytes`.
fn read_escapes(bytes: &[u8], out: &mut [u8]) -> bool {
    for (n, slot) in out.iter_mut().enumerate() {
        let at = n * 3;
        if bytes.get(at) != Some(&b'%') {
            return false;
        }
        let high = bytes.get(at + 1).copied().and_then(hex_digit);
        let low = bytes.get(at + 2).copied().and_then(hex_digit);
        match (high, low) {
            (Some(h), Some(l)) => *slot = h << 4 | l,
            _ => return false,
        }
    }
    true
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn is_continuation(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

fn three_byte(octets: &[u8]) -> Merge {
    let (lead, second, third) = (octets[0], octets[1], octets[2]);
    if lead < 0xE0 || !is_continuation(second) || !is_continuation(third) {
        return Merge::NoMatch;
    }
    let n1 = u32::from(lead - 0xE0);
    let n2 = u32::from(second - 0x80);
    let n3 = u32::from(third - 0x80);
    // E0 followed by 80..9F would fit in two bytes.
    if n1 == 0 && n2 < 0x20 {
        return Merge::Keep;
    }
    let code = (n1 << 12) + (n2 << 6) + n3;
    if code > 0xFFFF {
        return Merge::Keep;
    }
    char::from_u32(code).map_or(Merge::Keep, Merge::Char)
}

fn two_byte(octets: &[u8]) -> Merge {
    let (lead, second) = (octets[0], octets[1]);
    if !(0xC0..=0xDF).contains(&lead) || !is_continuation(second) {
        return Merge::NoMatch;
    }
    let n1 = u32::from(lead - 0xC0);
    if n1 < 2 {
        return Merge::Keep;
    }
    let code = (n1 << 6) + u32::from(second - 0x80);
    char::from_u32(code).map_or(Merge::Keep, Merge::Char)
}

fn ascii(octets: &[u8]) -> Merge {
    match octets[0] {
        b @ 0x00..=0x7F => Merge::Char(char::from(b)),
        _ => Merge::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_escapes_are_case_insensitive() {
        assert_eq!(decode("%3F"), "?");
        assert_eq!(decode("%3f"), "?");
        assert_eq!(decode("%41%62c"), "Abc");
    }

    #[test]
    fn plus_is_space() {
        assert_eq!(decode("hello+world"), "hello world");
        assert_eq!(decode("a%2Bb"), "a+b");
    }

    #[test]
    fn two_and_three_byte_sequences() {
        assert_eq!(decode("caf%C3%A9"), "café");
        assert_eq!(decode("caf%c3%a9"), "café");
        assert_eq!(decode("%E2%82%AC5"), "€5");
        assert_eq!(decode("%E0%A0%80"), "\u{800}");
        assert_eq!(decode("%D0%BF%D1%80%D0%B8"), "при");
    }

    #[test]
    fn overlong_sequences_pass_through() {
        assert_eq!(decode("%C0%AF"), "%C0%AF");
        assert_eq!(decode("%C1%BF"), "%C1%BF");
        assert_eq!(decode("%E0%80%AF"), "%E0%80%AF");
        assert_eq!(decode("%E0%9F%BF"), "%E0%9F%BF");
    }

    #[test]
    fn four_byte_and_surrogate_sequences_pass_through() {
        assert_eq!(decode("%F0%9F%98%80"), "%F0%9F%98%80");
        assert_eq!(decode("%ED%A0%80"), "%ED%A0%80");
    }

    #[test]
    fn stray_bytes_pass_through() {
        assert_eq!(decode("%80"), "%80");
        assert_eq!(decode("%C3"), "%C3");
        assert_eq!(decode("%E2%82"), "%E2%82");
        assert_eq!(decode("%FF%41"), "%FFA");
    }

    #[test]
    fn malformed_escapes_are_literal() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("%zz"), "%zz");
        assert_eq!(decode("%4"), "%4");
        assert_eq!(decode("%%41"), "%A");
    }

    #[test]
    fn decoded_percent_is_not_decoded_again() {
        assert_eq!(decode("%2541"), "%41");
    }

    #[test]
    fn multi_byte_passes_run_before_single_escapes() {
        assert_eq!(decode("%25C3%A9"), "%é");
    }

    #[test]
    fn broken_lead_does_not_swallow_following_sequence() {
        assert_eq!(decode("%E0%8F%E1%80%80"), "%E0%8F\u{1000}");
    }

    #[test]
    fn non_ascii_input_is_preserved() {
        assert_eq!(decode("ünï%20cödé"), "ünï cödé");
    }
}
