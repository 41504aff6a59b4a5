//! Anonymization configuration

use serde::{Deserialize, Serialize};

/// Anonymization mode as it appears on the configuration surface.
///
/// `random-consistent` selects random masking with the consistency cache;
/// `rewrite` is a historical alias for `simple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnonymizationMode {
    /// Clear the low-order bits of each matched address
    Zero,
    /// Replace the low-order bits with a fresh random value
    Random,
    /// Random masking with a stable original-to-anonymized mapping
    RandomConsistent,
    /// Overwrite trailing octet digits with the replacement character
    Simple,
    /// Alias for `simple`
    Rewrite,
}

impl Default for AnonymizationMode {
    fn default() -> Self {
        Self::Zero
    }
}

/// Anonymization configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Anonymization mode
    #[serde(default)]
    pub mode: AnonymizationMode,

    /// Number of low-order address bits to mask (0-32)
    #[serde(default = "default_bits")]
    pub bits: u8,

    /// Replacement character for simple mode
    #[serde(default = "default_replacement_char")]
    pub replacement_char: char,
}

fn default_bits() -> u8 {
    16
}

fn default_replacement_char() -> char {
    'x'
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            mode: AnonymizationMode::default(),
            bits: default_bits(),
            replacement_char: default_replacement_char(),
        }
    }
}
