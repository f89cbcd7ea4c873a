//! Phrase normalization pipelines and the index-code dispatcher.
//!
//! A [`Normalizer`] turns a raw field value into the key the legacy phrase
//! index would have stored for it. Each index family has its own pipeline;
//! [`Normalizer::normalize`] picks one from the [`IndexType`].
//!
//! All pipelines are pure: the output depends only on the input, the
//! injected [`TransliterationTable`], and the [`NormalizerConfig`]. Keys are
//! not idempotent; normalizing a key again can change it, because padding and
//! removed punctuation move token boundaries.
//!
//! # Examples
//!
//! ```
//! use phrase_index::{IndexType, Normalizer};
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(
//!     normalizer.normalize("1,000,000 dollar dream", Some(IndexType::Title)),
//!     Some(" 1000000 dollar dream".to_string())
//! );
//! assert_eq!(normalizer.normalize("   ", Some(IndexType::Author)), None);
//! ```

use crate::cleanup::{
    collapse_whitespace, expand_ampersand, non_empty, replace_braces, strip_chars,
    strip_quotes, strip_subfield_delimiters, truncate_chars, BIB_UTILITY_PUNCTUATION,
    NUMBER_PUNCTUATION, STANDARD_PUNCTUATION_KEEP_HASH,
};
use crate::config::{NormalizerConfig, StandardOptions};
use crate::index_type::IndexType;
use crate::padding::{pad_numbers, pad_numbers_year_aware, PadOptions};
use crate::transliteration::TransliterationTable;
use std::sync::Arc;
use tracing::{debug, trace};

/// Temporary fill character for padded numbers.
///
/// Padding is written with this marker so that whitespace collapsing does
/// not eat it; the marker becomes a space at the end of the pipeline.
pub(crate) const PAD_MARK: char = '~';

/// Phrase normalizer bound to a transliteration table.
///
/// Cheap to clone; the table is shared.
#[derive(Debug, Clone)]
pub struct Normalizer {
    table: Arc<TransliterationTable>,
    config: NormalizerConfig,
}

impl Default for Normalizer {
    /// Normalizer over the built-in table with legacy defaults.
    fn default() -> Self {
        Self::new(TransliterationTable::builtin())
    }
}

impl Normalizer {
    /// Create a normalizer with the default configuration.
    #[must_use]
    pub fn new(table: Arc<TransliterationTable>) -> Self {
        Self::with_config(table, NormalizerConfig::default())
    }

    /// Create a normalizer with an explicit configuration.
    #[must_use]
    pub fn with_config(table: Arc<TransliterationTable>, config: NormalizerConfig) -> Self {
        Self { table, config }
    }

    /// The transliteration table in use.
    #[must_use]
    pub fn table(&self) -> &TransliterationTable {
        &self.table
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize `phrase` for the given index.
    ///
    /// `None` as the index type selects the standard pipeline. Returns `None`
    /// when nothing is left of the phrase after normalization.
    #[must_use]
    pub fn normalize(&self, phrase: &str, index_type: Option<IndexType>) -> Option<String> {
        trace!(index = ?index_type, "normalizing phrase");
        match index_type {
            Some(IndexType::StandardNumber | IndexType::Barcode) => self.number_normalize(phrase),
            Some(IndexType::BibUtility) => self.bib_utility_normalize(phrase),
            Some(
                IndexType::Author
                | IndexType::Title
                | IndexType::Series
                | IndexType::Subject
                | IndexType::JournalTitle,
            )
            | None => self.standard_normalize(phrase),
            Some(IndexType::Name) => self.name_normalize(phrase),
            Some(IndexType::LcCallNumber) => self.lc_normalize(phrase),
            Some(IndexType::DeweyCallNumber) => self.dewey_normalize(phrase),
            Some(IndexType::SudocCallNumber) => self.sudoc_normalize(phrase),
        }
    }

    /// Normalize `phrase` for a raw index code string.
    ///
    /// An empty or unrecognized code selects the standard pipeline.
    #[must_use]
    pub fn normalize_code(&self, phrase: &str, code: &str) -> Option<String> {
        let index_type = code.parse::<IndexType>().ok();
        if index_type.is_none() && !code.is_empty() {
            debug!(code, "unrecognized index code, using standard normalization");
        }
        self.normalize(phrase, index_type)
    }

    /// Standard pipeline for titles, authors, series, and subjects.
    #[must_use]
    pub fn standard_normalize(&self, phrase: &str) -> Option<String> {
        self.standard_normalize_with(
            phrase,
            StandardOptions::with_pad_length(self.config.pad_length),
        )
    }

    /// Standard pipeline with an explicit pad width and punctuation class.
    ///
    /// # Examples
    ///
    /// ```
    /// use phrase_index::{Normalizer, StandardOptions};
    ///
    /// let normalizer = Normalizer::default();
    /// let key = normalizer.standard_normalize_with("Vol. 2", StandardOptions::with_pad_length(0));
    /// assert_eq!(key.as_deref(), Some("vol 2"));
    /// ```
    #[must_use]
    pub fn standard_normalize_with(
        &self,
        phrase: &str,
        options: StandardOptions<'_>,
    ) -> Option<String> {
        let text = truncate_chars(phrase, self.config.max_input_chars).to_lowercase();
        let text = replace_braces(&strip_quotes(&text));
        let text = self.table.transliterate(&text).to_lowercase();
        let text = expand_ampersand(&text).replace(PAD_MARK, " ");
        let text = pad_numbers(&text, PadOptions::new(options.pad_length, PAD_MARK));
        let text = strip_subfield_delimiters(&text);
        let text = strip_chars(&text, options.punctuation);
        let text = collapse_whitespace(&text).replace(PAD_MARK, " ");
        self.finish_key(&text)
    }

    /// Name pipeline.
    ///
    /// Lighter than the standard pipeline: no transliteration, padding, or
    /// truncation, and `#` is kept.
    #[must_use]
    pub fn name_normalize(&self, phrase: &str) -> Option<String> {
        let text = strip_quotes(&phrase.to_lowercase());
        let text = strip_chars(&text, STANDARD_PUNCTUATION_KEEP_HASH);
        non_empty(collapse_whitespace(&text))
    }

    /// Bib-utility pipeline for OCLC-style numbers.
    ///
    /// Like the standard pipeline, but hyphenated digit runs are padded per
    /// segment with the year-aware padder.
    #[must_use]
    pub fn bib_utility_normalize(&self, phrase: &str) -> Option<String> {
        let text = truncate_chars(phrase, self.config.max_input_chars).to_lowercase();
        let text = replace_braces(&strip_quotes(&text));
        let text = self.table.transliterate(&text).to_lowercase();
        let text = expand_ampersand(&text).replace(PAD_MARK, " ");
        let text = strip_chars(&text, BIB_UTILITY_PUNCTUATION);
        let text = pad_numbers_year_aware(&text, PAD_MARK);
        let text = strip_subfield_delimiters(&text);
        let text = strip_chars(&text, &[',', '-']);
        let text = collapse_whitespace(&text).replace(PAD_MARK, " ");
        self.finish_key(&text)
    }

    /// Number pipeline for ISBN, ISSN, and barcodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use phrase_index::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.number_normalize("0-306-40615-2 (pbk.)").as_deref(), Some("0306406152pbk"));
    /// ```
    #[must_use]
    pub fn number_normalize(&self, phrase: &str) -> Option<String> {
        let text = strip_quotes(&phrase.to_lowercase());
        let text = strip_chars(&text, NUMBER_PUNCTUATION);
        non_empty(text.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Apply the table, dropping combining marks.
    pub(crate) fn strip_diacritics(&self, text: &str) -> String {
        self.table.transliterate(text)
    }

    /// Cut to the key length limit and drop trailing spaces.
    fn finish_key(&self, text: &str) -> Option<String> {
        non_empty(truncate_chars(text, self.config.max_key_chars).trim_end().to_string())
    }
}
