//! Configuration for [`Normalizer`](crate::Normalizer).
//!
//! The defaults reproduce the legacy index exactly. Any change yields keys
//! that will not match entries the legacy system stored.

use crate::cleanup::STANDARD_PUNCTUATION;
use crate::error::Result;
use crate::padding::DEFAULT_PAD_WIDTH;
use serde::{Deserialize, Serialize};

/// Length limits and padding width.
///
/// # Examples
///
/// ```
/// use phrase_index::NormalizerConfig;
///
/// let config = NormalizerConfig::from_json_str(r#"{"max_key_chars": 100}"#)?;
/// assert_eq!(config.max_key_chars, 100);
/// assert_eq!(config.max_input_chars, 150);
/// # Ok::<(), phrase_index::NormalizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Input is cut to this many characters before the standard and
    /// bib-utility pipelines run.
    pub max_input_chars: usize,
    /// Standard and bib-utility keys are cut to this many characters.
    pub max_key_chars: usize,
    /// Width of padded digit runs in the standard pipeline.
    pub pad_length: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 150,
            max_key_chars: 125,
            pad_length: DEFAULT_PAD_WIDTH,
        }
    }
}

impl NormalizerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::Json` if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-call overrides for the standard pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardOptions<'a> {
    /// Width of padded digit runs; `0` disables padding of plain runs.
    pub pad_length: usize,
    /// Characters removed after padding.
    pub punctuation: &'a [char],
}

impl Default for StandardOptions<'_> {
    fn default() -> Self {
        Self {
            pad_length: DEFAULT_PAD_WIDTH,
            punctuation: STANDARD_PUNCTUATION,
        }
    }
}

impl<'a> StandardOptions<'a> {
    /// Options with the given pad width and the standard punctuation class.
    #[must_use]
    pub fn with_pad_length(pad_length: usize) -> Self {
        Self {
            pad_length,
            ..Self::default()
        }
    }

    /// Replace the punctuation class.
    #[must_use]
    pub fn punctuation(mut self, punctuation: &'a [char]) -> Self {
        self.punctuation = punctuation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NormalizerConfig::default();
        assert_eq!(config.max_input_chars, 150);
        assert_eq!(config.max_key_chars, 125);
        assert_eq!(config.pad_length, 8);
    }

    #[test]
    fn test_partial_json() {
        let config = NormalizerConfig::from_json_str(r#"{"pad_length": 10}"#).unwrap();
        assert_eq!(config.pad_length, 10);
        assert_eq!(config.max_key_chars, 125);
    }

    #[test]
    fn test_bad_json() {
        assert!(NormalizerConfig::from_json_str("{pad_length: 10}").is_err());
    }

    #[test]
    fn test_standard_options_builder() {
        let opts = StandardOptions::with_pad_length(0).punctuation(&['.']);
        assert_eq!(opts.pad_length, 0);
        assert_eq!(opts.punctuation, &['.']);
    }
}
