//! In-place buffer rewriting
//!
//! The single primitive behind every substitution: replace a sub-range of an
//! owned byte buffer with replacement text of any length, preserving every
//! byte outside the span.

/// Replace `len` bytes of `buf` starting at `start` with `replacement`.
///
/// Equal-length replacements overwrite in place without reallocation;
/// otherwise the buffer grows or shrinks around the span. Bytes before and
/// after the span keep their value and order. Returns the offset just past
/// the replacement text, so the caller's scan never re-examines bytes that
/// were just written.
pub(crate) fn splice(buf: &mut Vec<u8>, start: usize, len: usize, replacement: &[u8]) -> usize {
    if replacement.len() == len {
        buf[start..start + len].copy_from_slice(replacement);
    } else {
        buf.splice(start..start + len, replacement.iter().copied());
    }
    start + replacement.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_length_overwrites_in_place() {
        let mut buf = b"conn from 192.168.1.5 ok".to_vec();
        let next = splice(&mut buf, 10, 11, b"192.168.1.0");
        assert_eq!(buf, b"conn from 192.168.1.0 ok");
        assert_eq!(next, 21);
    }

    #[test]
    fn test_shrinking_replacement() {
        let mut buf = b"src=255.255.255.255 dst=x".to_vec();
        let next = splice(&mut buf, 4, 15, b"0.0.0.0");
        assert_eq!(buf, b"src=0.0.0.0 dst=x");
        assert_eq!(next, 11);
    }

    #[test]
    fn test_growing_replacement() {
        let mut buf = b"ip 1.1.1.1 end".to_vec();
        let next = splice(&mut buf, 3, 7, b"101.101.101.101");
        assert_eq!(buf, b"ip 101.101.101.101 end");
        assert_eq!(next, 18);
    }

    #[test]
    fn test_bytes_outside_span_untouched() {
        let original = b"head 10.0.0.1 tail".to_vec();
        let mut buf = original.clone();
        splice(&mut buf, 5, 8, b"10.0.0.0");
        assert_eq!(&buf[..5], &original[..5]);
        assert_eq!(&buf[13..], &original[13..]);
    }

    #[test]
    fn test_splice_at_buffer_end() {
        let mut buf = b"end 1.1.1.1".to_vec();
        let next = splice(&mut buf, 4, 7, b"0.0.0.0");
        assert_eq!(buf, b"end 0.0.0.0");
        assert_eq!(next, buf.len());
    }
}
