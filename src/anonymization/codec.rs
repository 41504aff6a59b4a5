//! Dotted-quad address codec
//!
//! Converts between the textual dotted-quad form of an IPv4 address and its
//! 32-bit numeric value. Parsing assumes the input has already been validated
//! by the token scanner; it performs no range checking of its own.

/// Parse a scanner-validated dotted-quad byte slice into a 32-bit address.
///
/// Octet 0 of the text becomes the most significant byte of the result.
/// Behavior on malformed input is unspecified; callers must only pass text
/// for which [`scan_ipv4`](crate::anonymization::scanner::scan_ipv4)
/// reported a match.
pub(crate) fn parse_addr(text: &[u8]) -> u32 {
    let mut octets = [0u32; 4];
    let mut cyc = 0;
    for &b in text {
        match b {
            b'0'..=b'9' => octets[cyc] = octets[cyc] * 10 + u32::from(b - b'0'),
            b'.' => cyc += 1,
            _ => {}
        }
    }
    (octets[0] << 24) | (octets[1] << 16) | (octets[2] << 8) | octets[3]
}

/// Render a 32-bit address as canonical dotted-quad text.
///
/// Most significant octet first, no leading zeros. The result is at most
/// 15 characters.
pub(crate) fn format_addr(addr: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (addr >> 24) & 0xff,
        (addr >> 16) & 0xff,
        (addr >> 8) & 0xff,
        addr & 0xff
    )
}
