//! Main anonymization engine
//!
//! This module provides the core [`AnonymizationEngine`] that scans a log
//! message for embedded IPv4 dotted-quad tokens and rewrites each match
//! according to the configured masking policy.
//!
//! # Architecture
//!
//! The engine drives three components over every message:
//! - **Scanner**: finds dotted-quad tokens at each byte offset
//! - **Policy**: maps a matched address to its replacement
//! - **Rewriter**: splices the replacement into the message buffer
//!
//! In `random-consistent` mode a shared consistency cache guarantees that a
//! given original address always rewrites to the same replacement for the
//! lifetime of the engine.
//!
//! # Examples
//!
//! ```
//! use logveil::anonymization::{AnonymizationConfig, AnonymizationEngine, AnonymizationMode};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AnonymizationConfig {
//!     mode: AnonymizationMode::Zero,
//!     bits: 8,
//!     replacement_char: 'x',
//! };
//! let engine = AnonymizationEngine::new(&config)?;
//!
//! let rewritten = engine.anonymize_message(b"conn from 192.168.1.5 ok");
//! assert_eq!(rewritten.as_deref(), Some(&b"conn from 192.168.1.0 ok"[..]));
//! # Ok(())
//! # }
//! ```

use crate::anonymization::cache::ConsistencyCache;
use crate::anonymization::codec::{format_addr, parse_addr};
use crate::anonymization::config::AnonymizationConfig;
use crate::anonymization::policy::{
    mask_simple, random_low_bits, zero_low_bits, MaskMode, MaskPolicy,
};
use crate::anonymization::rewriter::splice;
use crate::anonymization::scanner::{scan_ipv4, MIN_IPV4_LEN};
use crate::domain::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;
use std::sync::Mutex;

/// Scans log messages for IPv4 addresses and rewrites them.
///
/// # Thread Safety
///
/// The engine is `Send + Sync` and can be shared across worker threads via
/// `Arc`. Consistency-cache lookups and random draws are serialized
/// internally.
pub struct AnonymizationEngine {
    policy: MaskPolicy,
    cache: Option<ConsistencyCache>,
    rng: Mutex<StdRng>,
}

impl AnonymizationEngine {
    /// Create an engine from a raw configuration.
    ///
    /// Normalizes the configuration (clamping and rounding `bits` as needed,
    /// with warnings surfaced once, here) and allocates the consistency
    /// cache when the mode calls for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be normalized, e.g. a
    /// non-ASCII replacement character.
    pub fn new(config: &AnonymizationConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a seeded random source, for deterministic tests.
    pub fn with_seed(config: &AnonymizationConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &AnonymizationConfig, rng: StdRng) -> Result<Self> {
        let policy = MaskPolicy::from_config(config)?;
        let cache = (policy.mode == MaskMode::Random && policy.random_consistent)
            .then(ConsistencyCache::new);
        Ok(Self {
            policy,
            cache,
            rng: Mutex::new(rng),
        })
    }

    /// The normalized policy this engine applies.
    pub fn policy(&self) -> &MaskPolicy {
        &self.policy
    }

    /// Anonymize every IPv4 dotted-quad token in `msg`.
    ///
    /// Sweeps all byte offsets, rewriting each match; the scan resumes past
    /// each replacement so freshly written text is never re-interpreted as a
    /// new address. Returns the rewritten buffer, or `None` when no
    /// substitution occurred, in which case the caller keeps its original
    /// buffer and no allocation took place.
    pub fn anonymize_message(&self, msg: &[u8]) -> Option<Vec<u8>> {
        let mut buf: Cow<'_, [u8]> = Cow::Borrowed(msg);
        let mut changed = false;
        let mut idx = 0;
        // the buffer length must be re-read every iteration: rewrites in
        // zero/random mode may grow or shrink the message
        while idx + MIN_IPV4_LEN <= buf.len() {
            if let Some(token_len) = scan_ipv4(&buf[idx..]) {
                match self.policy.mode {
                    MaskMode::Simple => {
                        if let Some(masked) =
                            mask_simple(&buf[idx..idx + token_len], self.policy.bits, self.policy.replacement_char)
                        {
                            buf.to_mut()[idx..idx + token_len].copy_from_slice(&masked);
                            changed = true;
                        }
                        idx += token_len;
                    }
                    MaskMode::Zero | MaskMode::Random => {
                        let addr = parse_addr(&buf[idx..idx + token_len]);
                        let replacement = match &self.cache {
                            Some(cache) => cache
                                .lookup_or_insert_with(addr, || format_addr(self.mask_addr(addr))),
                            None => format_addr(self.mask_addr(addr)),
                        };
                        idx = splice(buf.to_mut(), idx, token_len, replacement.as_bytes());
                        changed = true;
                    }
                }
            }
            idx += 1;
        }
        changed.then(|| buf.into_owned())
    }

    /// Apply the numeric transform for zero and random modes.
    fn mask_addr(&self, addr: u32) -> u32 {
        match self.policy.mode {
            MaskMode::Zero => zero_low_bits(addr, self.policy.bits),
            MaskMode::Random => {
                let mut rng = match self.rng.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                random_low_bits(addr, self.policy.bits, &mut *rng)
            }
            // simple mode is handled textually in the driver
            MaskMode::Simple => addr,
        }
    }
}
