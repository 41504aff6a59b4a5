//! Dotted-quad token scanner
//!
//! Recognizes the longest valid dotted-quad substring starting at the head
//! of a byte slice. A miss is not an error; the message driver simply moves
//! on to the next offset.

/// Shortest possible dotted-quad token, e.g. `1.1.1.1`.
pub(crate) const MIN_IPV4_LEN: usize = 7;

/// Consume leading ASCII digits from `buf`.
///
/// Returns the accumulated value and the number of bytes consumed, or
/// `None` if the slice does not start with a digit. Accumulation saturates;
/// callers only ever compare the value against 255.
pub(crate) fn scan_decimal(buf: &[u8]) -> Option<(u32, usize)> {
    let mut val: u32 = 0;
    let mut consumed = 0;
    for &b in buf {
        if b.is_ascii_digit() {
            val = val.saturating_mul(10).saturating_add(u32::from(b - b'0'));
            consumed += 1;
        } else {
            break;
        }
    }
    if consumed == 0 {
        None
    } else {
        Some((val, consumed))
    }
}

/// Attempt to match a dotted-quad token at the head of `buf`.
///
/// Succeeds only if four decimal groups, each in 0..=255, joined by literal
/// dots are present contiguously. Returns the total byte length of the
/// token. Leading zeros within a group are accepted; a group above 255 or a
/// truncated token rejects the whole match.
pub(crate) fn scan_ipv4(buf: &[u8]) -> Option<usize> {
    let mut idx = 0;
    for group in 0..4 {
        if group > 0 {
            if buf.get(idx) != Some(&b'.') {
                return None;
            }
            idx += 1;
        }
        let (val, consumed) = scan_decimal(&buf[idx..])?;
        if val > 255 {
            return None;
        }
        idx += consumed;
    }
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_decimal() {
        assert_eq!(scan_decimal(b"123abc"), Some((123, 3)));
        assert_eq!(scan_decimal(b"0"), Some((0, 1)));
        assert_eq!(scan_decimal(b"abc"), None);
        assert_eq!(scan_decimal(b""), None);
    }

    #[test]
    fn test_scan_decimal_saturates() {
        let (val, consumed) = scan_decimal(b"99999999999999999999").unwrap();
        assert_eq!(consumed, 20);
        assert!(val > 255);
    }

    #[test]
    fn test_scan_ipv4_match() {
        assert_eq!(scan_ipv4(b"192.168.1.5 ok"), Some(11));
        assert_eq!(scan_ipv4(b"0.0.0.0"), Some(7));
        assert_eq!(scan_ipv4(b"255.255.255.255"), Some(15));
    }

    #[test]
    fn test_scan_ipv4_consumes_exact_span() {
        // Trailing digits past a valid quad are folded into the last group,
        // which then overflows and rejects; a trailing dot is not consumed.
        assert_eq!(scan_ipv4(b"1.2.3.4."), Some(7));
        assert_eq!(scan_ipv4(b"10.0.0.1:8080"), Some(8));
    }

    #[test]
    fn test_scan_ipv4_octet_out_of_range() {
        assert_eq!(scan_ipv4(b"999.1.1.1"), None);
        assert_eq!(scan_ipv4(b"1.2.3.256"), None);
        assert_eq!(scan_ipv4(b"1.256.3.4"), None);
    }

    #[test]
    fn test_scan_ipv4_truncated() {
        assert_eq!(scan_ipv4(b"1.2.3"), None);
        assert_eq!(scan_ipv4(b"1.2.3."), None);
        assert_eq!(scan_ipv4(b"1.2."), None);
        assert_eq!(scan_ipv4(b""), None);
    }

    #[test]
    fn test_scan_ipv4_missing_separator() {
        assert_eq!(scan_ipv4(b"1,2,3,4"), None);
        assert_eq!(scan_ipv4(b"no address here"), None);
    }

    #[test]
    fn test_scan_ipv4_leading_zeros_accepted() {
        assert_eq!(scan_ipv4(b"010.001.000.009"), Some(15));
    }
}
