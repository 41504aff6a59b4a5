//! Masking policies
//!
//! The three transforms applied to a matched address: zeroing low bits,
//! randomizing low bits, and character-level digit masking ("simple" mode).
//! A [`MaskPolicy`] is the normalized form of the user-facing
//! [`AnonymizationConfig`](crate::anonymization::config::AnonymizationConfig),
//! produced once at engine creation time.

use crate::anonymization::config::{AnonymizationConfig, AnonymizationMode};
use crate::domain::{LogveilError, Result};
use rand::Rng;

/// Normalized anonymization mode.
///
/// The configuration surface additionally accepts `random-consistent` and
/// `rewrite`; both collapse into these three variants during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskMode {
    /// Clear the low `bits` bits of the address.
    Zero,
    /// Clear the low `bits` bits, then add a fresh random value below `2^bits`.
    Random,
    /// Overwrite digit characters of the trailing octets in place.
    Simple,
}

/// Normalized masking policy, owned by an engine for its entire lifetime.
#[derive(Debug, Clone)]
pub struct MaskPolicy {
    pub mode: MaskMode,
    /// Number of low-order address bits subject to masking (0..=32).
    /// Always a multiple of 8 in simple mode.
    pub bits: u8,
    /// Whether repeated addresses must map to the same replacement.
    /// Only meaningful in random mode.
    pub random_consistent: bool,
    /// Replacement character for simple mode, always ASCII.
    pub replacement_char: u8,
}

impl MaskPolicy {
    /// Normalize a raw configuration into a policy.
    ///
    /// Out-of-range `bits` values are corrected rather than rejected: values
    /// above 32 clamp to 32, and simple mode rounds up to the next octet
    /// boundary. Each correction surfaces a warning exactly once, here.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement character is not ASCII.
    pub fn from_config(config: &AnonymizationConfig) -> Result<Self> {
        if !config.replacement_char.is_ascii() {
            return Err(LogveilError::Configuration(format!(
                "replacement_char must be a single ASCII character, got '{}'",
                config.replacement_char
            )));
        }

        let (mode, random_consistent) = match config.mode {
            AnonymizationMode::Zero => (MaskMode::Zero, false),
            AnonymizationMode::Random => (MaskMode::Random, false),
            AnonymizationMode::RandomConsistent => (MaskMode::Random, true),
            AnonymizationMode::Simple | AnonymizationMode::Rewrite => (MaskMode::Simple, false),
        };

        let mut bits = config.bits;
        if bits > 32 {
            tracing::warn!(
                bits = config.bits,
                "invalid number of bits, corrected to 32"
            );
            bits = 32;
        }
        if mode == MaskMode::Simple {
            let rounded = next_octet_boundary(bits);
            if rounded != bits {
                tracing::warn!(
                    bits,
                    corrected = rounded,
                    "invalid number of bits in simple mode, corrected to octet boundary"
                );
                bits = rounded;
            }
        }

        Ok(Self {
            mode,
            bits,
            random_consistent,
            replacement_char: config.replacement_char as u8,
        })
    }
}

/// Round `bits` up to the next octet boundary.
///
/// Zero rounds up to 8, matching the long-standing behavior of the
/// configuration surface this replaces.
fn next_octet_boundary(bits: u8) -> u8 {
    match bits {
        0..=8 => 8,
        9..=16 => 16,
        17..=24 => 24,
        _ => 32,
    }
}

/// Clear the low `bits` bits of `addr`.
///
/// Shifts through 64 bits so that `bits = 32` is well defined and yields 0.
pub(crate) fn zero_low_bits(addr: u32, bits: u8) -> u32 {
    ((u64::from(addr) >> bits) << bits) as u32
}

/// Clear the low `bits` bits of `addr` and add a fresh draw in
/// `[0, 2^bits - 1]`.
pub(crate) fn random_low_bits<R: Rng>(addr: u32, bits: u8, rng: &mut R) -> u32 {
    let cleared = u64::from(zero_low_bits(addr, bits));
    let span = 1u64 << bits;
    (cleared + rng.gen_range(0..span)) as u32
}

/// Mask the trailing `bits / 8` octets of a dotted-quad token in text form.
///
/// Walks right to left over the digit runs between dots, overwriting every
/// digit that differs from the replacement character. Returns the masked
/// copy only if at least one digit actually changed, which keeps the
/// operation idempotent: a second pass over already-masked text reports no
/// change. The token length never changes.
pub(crate) fn mask_simple(token: &[u8], bits: u8, replacement: u8) -> Option<Vec<u8>> {
    let mut masked = token.to_vec();
    let mut changed = false;
    let mut idx = masked.len();
    for octet in 0..(bits / 8) {
        if octet > 0 {
            // step over the dot separating octet runs
            if idx == 0 {
                break;
            }
            idx -= 1;
        }
        while idx > 0 && masked[idx - 1].is_ascii_digit() {
            idx -= 1;
            if masked[idx] != replacement {
                masked[idx] = replacement;
                changed = true;
            }
        }
    }
    changed.then_some(masked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    fn config(mode: AnonymizationMode, bits: u8) -> AnonymizationConfig {
        AnonymizationConfig {
            mode,
            bits,
            replacement_char: 'x',
        }
    }

    #[test]
    fn test_zero_low_bits() {
        assert_eq!(zero_low_bits(0xc0a80105, 8), 0xc0a80100);
        assert_eq!(zero_low_bits(0xc0a80105, 0), 0xc0a80105);
        assert_eq!(zero_low_bits(u32::MAX, 32), 0);
    }

    #[test]
    fn test_random_low_bits_preserves_high_bits() {
        let mut rng = StdRng::seed_from_u64(7);
        for bits in [0u8, 1, 8, 16, 31, 32] {
            let addr = 0xc0a80105;
            let out = random_low_bits(addr, bits, &mut rng);
            assert_eq!(
                zero_low_bits(out, bits),
                zero_low_bits(addr, bits),
                "high bits must survive for bits={bits}"
            );
        }
    }

    #[test]
    fn test_random_low_bits_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_low_bits(0x01020304, 0, &mut rng), 0x01020304);
    }

    #[test_case(b"10.0.0.1", 16, b"10.0.x.x" ; "two octets")]
    #[test_case(b"10.0.0.1", 8, b"10.0.0.x" ; "one octet")]
    #[test_case(b"1.2.3.4", 32, b"x.x.x.x" ; "whole address")]
    #[test_case(b"192.168.100.200", 16, b"192.168.xxx.xxx" ; "multi digit octets")]
    fn test_mask_simple(token: &[u8], bits: u8, expected: &[u8]) {
        let masked = mask_simple(token, bits, b'x').expect("digits should change");
        assert_eq!(masked, expected);
    }

    #[test]
    fn test_mask_simple_idempotent() {
        let once = mask_simple(b"10.0.0.1", 16, b'x').unwrap();
        assert_eq!(mask_simple(&once, 16, b'x'), None);
    }

    #[test]
    fn test_mask_simple_zero_octets() {
        assert_eq!(mask_simple(b"10.0.0.1", 0, b'x'), None);
    }

    #[test]
    fn test_policy_mode_aliases() {
        let p = MaskPolicy::from_config(&config(AnonymizationMode::RandomConsistent, 8)).unwrap();
        assert_eq!(p.mode, MaskMode::Random);
        assert!(p.random_consistent);

        let p = MaskPolicy::from_config(&config(AnonymizationMode::Rewrite, 8)).unwrap();
        assert_eq!(p.mode, MaskMode::Simple);
        assert!(!p.random_consistent);
    }

    #[test_case(0, 8)]
    #[test_case(3, 8)]
    #[test_case(8, 8)]
    #[test_case(9, 16)]
    #[test_case(17, 24)]
    #[test_case(25, 32)]
    #[test_case(32, 32)]
    fn test_policy_simple_bits_rounding(bits: u8, expected: u8) {
        let p = MaskPolicy::from_config(&config(AnonymizationMode::Simple, bits)).unwrap();
        assert_eq!(p.bits, expected);
    }

    #[test]
    fn test_policy_bits_clamped_to_32() {
        let p = MaskPolicy::from_config(&config(AnonymizationMode::Zero, 200)).unwrap();
        assert_eq!(p.bits, 32);
    }

    #[test]
    fn test_policy_rejects_non_ascii_replacement() {
        let cfg = AnonymizationConfig {
            mode: AnonymizationMode::Simple,
            bits: 8,
            replacement_char: 'ä',
        };
        assert!(MaskPolicy::from_config(&cfg).is_err());
    }
}
