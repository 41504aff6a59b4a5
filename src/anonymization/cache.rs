//! Consistency cache
//!
//! Memoizes the anonymized text for each original address so that a given
//! address always rewrites to the same replacement within an engine's
//! lifetime. Backed by a binary trie over the upper 31 address bits with two
//! leaf slots per node, selected by the least significant bit; storing two
//! slots per leaf halves the node count for the same addressing resolution.
//!
//! The whole lookup-or-insert is serialized behind a mutex so the cache can
//! be shared across worker threads. Entries are never evicted; the trie is
//! torn down with the engine.

use std::sync::Mutex;

#[derive(Default)]
struct TrieNode {
    /// Child taken when the current address bit is 1.
    more: Option<Box<TrieNode>>,
    /// Child taken when the current address bit is 0.
    less: Option<Box<TrieNode>>,
    /// Replacement text for addresses whose bit 0 is 1. Only used at depth 31.
    high: Option<String>,
    /// Replacement text for addresses whose bit 0 is 0. Only used at depth 31.
    low: Option<String>,
}

/// Write-once memoization cache keyed by 32-bit address.
pub(crate) struct ConsistencyCache {
    root: Mutex<Option<Box<TrieNode>>>,
}

impl ConsistencyCache {
    /// Create an empty cache. The trie root is allocated on first lookup.
    pub(crate) fn new() -> Self {
        Self {
            root: Mutex::new(None),
        }
    }

    /// Return the cached replacement text for `addr`, computing and storing
    /// it via `compute` on first sight.
    ///
    /// A populated slot is never overwritten, so `compute` runs at most once
    /// per address over the cache's lifetime.
    pub(crate) fn lookup_or_insert_with(
        &self,
        addr: u32,
        compute: impl FnOnce() -> String,
    ) -> String {
        let mut guard = match self.root.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut node = guard.get_or_insert_with(Default::default);
        for bit in (1..=31).rev() {
            node = if (addr >> bit) & 1 == 1 {
                node.more.get_or_insert_with(Default::default)
            } else {
                node.less.get_or_insert_with(Default::default)
            };
        }
        let slot = if addr & 1 == 1 {
            &mut node.high
        } else {
            &mut node.low
        };
        slot.get_or_insert_with(compute).clone()
    }
}
