//! Diacritic stripping and transliteration.
//!
//! A [`TransliterationTable`] maps source characters (or short character
//! sequences) to plain replacements. Tables are assembled from ordered
//! categories: when two categories map the same source key, the category
//! added later wins. Once built, a table is immutable and is shared between
//! normalizers and threads behind an [`Arc`].
//!
//! Characters with no table entry are canonically decomposed and any
//! combining marks dropped, so `é` and `e` + U+0301 both reduce to `e`.
//!
//! # Examples
//!
//! ```
//! use phrase_index::TransliterationTable;
//!
//! let table = TransliterationTable::builder()
//!     .category("latin", [("æ", "ae"), ("ø", "o")])
//!     .category("danish", [("ø", "oe")])
//!     .build()?;
//!
//! assert_eq!(table.transliterate("Købmand æble café"), "Koebmand aeble cafe");
//! # Ok::<(), phrase_index::NormalizeError>(())
//! ```

use crate::error::{NormalizeError, Result};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Built-in categories, lowest precedence first.
const BUILTIN_CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "latin",
        &[
            ("Æ", "AE"),
            ("æ", "ae"),
            ("Œ", "OE"),
            ("œ", "oe"),
            ("Ø", "O"),
            ("ø", "o"),
            ("Ł", "L"),
            ("ł", "l"),
            ("Đ", "D"),
            ("đ", "d"),
            ("Ð", "D"),
            ("ð", "d"),
            ("Þ", "TH"),
            ("þ", "th"),
            ("ß", "ss"),
            ("ẞ", "SS"),
            ("ı", "i"),
            ("Ħ", "H"),
            ("ħ", "h"),
            ("Ŋ", "N"),
            ("ŋ", "n"),
            ("Ŀ", "L"),
            ("ŀ", "l"),
            ("ſ", "s"),
            ("Ʀ", "R"),
            ("Ɨ", "I"),
            ("ɨ", "i"),
            ("Ʉ", "U"),
            ("ʉ", "u"),
            ("Ƶ", "Z"),
            ("ƶ", "z"),
        ],
    ),
    (
        "ligatures",
        &[
            ("ﬀ", "ff"),
            ("ﬁ", "fi"),
            ("ﬂ", "fl"),
            ("ﬃ", "ffi"),
            ("ﬄ", "ffl"),
            ("ﬅ", "st"),
            ("ﬆ", "st"),
            ("Ĳ", "IJ"),
            ("ĳ", "ij"),
        ],
    ),
    (
        "romanization",
        &[
            // Alif, ayn, and soft/hard signs carry no letter of their own.
            ("ʹ", ""),
            ("ʺ", ""),
            ("ʻ", ""),
            ("ʼ", ""),
            ("ʾ", ""),
            ("ʿ", ""),
            ("ˀ", ""),
        ],
    ),
    (
        "punctuation",
        &[
            ("\u{a0}", " "),
            ("\u{2002}", " "),
            ("\u{2003}", " "),
            ("\u{2009}", " "),
            ("‐", "-"),
            ("‑", "-"),
            ("‒", "-"),
            ("–", "-"),
            ("—", "-"),
            ("―", "-"),
            ("‘", "'"),
            ("’", "'"),
            ("‚", ","),
            ("‛", "'"),
            ("„", ""),
            ("«", ""),
            ("»", ""),
            ("‹", ""),
            ("›", ""),
            ("…", "..."),
            ("¡", "!"),
            ("¿", "?"),
        ],
    ),
    (
        "symbols",
        &[
            ("©", "(c)"),
            ("℗", "(p)"),
            ("®", "(r)"),
            ("°", ""),
            ("¼", " 1/4"),
            ("½", " 1/2"),
            ("¾", " 3/4"),
        ],
    ),
];

lazy_static! {
    static ref BUILTIN_TABLE: Arc<TransliterationTable> = {
        let mut builder = TransliterationTable::builder();
        for (name, entries) in BUILTIN_CATEGORIES {
            builder = builder.category(name, entries.iter().copied());
        }
        Arc::new(builder.assemble())
    };
}

/// Immutable transliteration mapping.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    entries: HashMap<String, String>,
    /// Length in chars of the longest source key
    max_key_chars: usize,
    categories: Vec<String>,
}

/// On-disk table document.
///
/// ```json
/// {
///   "categories": [
///     { "name": "latin", "entries": { "æ": "ae", "ø": "o" } },
///     { "name": "local", "entries": { "ø": "oe" } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableDocument {
    /// Categories in increasing precedence.
    pub categories: Vec<TableCategory>,
}

/// One named category of a [`TableDocument`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCategory {
    /// Category name, kept for diagnostics.
    pub name: String,
    /// Source key to replacement.
    #[serde(default)]
    pub entries: IndexMap<String, String>,
}

/// Builder for [`TransliterationTable`].
#[derive(Debug, Default)]
pub struct TransliterationTableBuilder {
    entries: IndexMap<String, String>,
    categories: Vec<String>,
}

impl TransliterationTableBuilder {
    /// Add a category. Entries overwrite any earlier mapping of the same key.
    #[must_use]
    pub fn category<I, K, V>(mut self, name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.entries.insert(key.into(), value.into());
        }
        self.categories.push(name.to_string());
        self
    }

    /// Finish the table.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::InvalidTable` if any source key is empty.
    pub fn build(self) -> Result<TransliterationTable> {
        if let Some((_, value)) = self.entries.iter().find(|(key, _)| key.is_empty()) {
            return Err(NormalizeError::InvalidTable(format!(
                "empty source key (replacement {value:?})"
            )));
        }
        Ok(self.assemble())
    }

    fn assemble(self) -> TransliterationTable {
        let max_key_chars = self
            .entries
            .keys()
            .map(|key| key.chars().count())
            .max()
            .unwrap_or(0);
        let table = TransliterationTable {
            entries: self.entries.into_iter().collect(),
            max_key_chars,
            categories: self.categories,
        };
        debug!(
            categories = table.categories.len(),
            entries = table.entries.len(),
            "assembled transliteration table"
        );
        table
    }
}

impl TransliterationTable {
    /// Start building a table from ordered categories.
    #[must_use]
    pub fn builder() -> TransliterationTableBuilder {
        TransliterationTableBuilder::default()
    }

    /// Shared handle to the built-in Latin table.
    ///
    /// The table is assembled on first use and never changes afterwards.
    #[must_use]
    pub fn builtin() -> Arc<TransliterationTable> {
        Arc::clone(&BUILTIN_TABLE)
    }

    /// Build a table from a parsed [`TableDocument`].
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::InvalidTable` if any source key is empty.
    pub fn from_document(document: TableDocument) -> Result<Self> {
        document
            .categories
            .into_iter()
            .fold(Self::builder(), |builder, category| {
                builder.category(&category.name, category.entries)
            })
            .build()
    }

    /// Parse a table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the table is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Parse a table from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the JSON is malformed, or the table
    /// is invalid.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    /// Load a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading transliteration table");
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Replacement for a source key, if mapped.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of mapped source keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table maps nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category names in precedence order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Replace mapped sequences and strip combining marks from everything else.
    ///
    /// Source keys are matched longest-first at each position. Replacements
    /// may contain uppercase letters; callers that need lowercase output
    /// lowercase again afterwards.
    #[must_use]
    pub fn transliterate(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut utf8 = [0u8; 4];
        let mut i = 0;

        'scan: while i < chars.len() {
            let longest = self.max_key_chars.min(chars.len() - i);
            for len in (2..=longest).rev() {
                let key: String = chars[i..i + len].iter().collect();
                if let Some(replacement) = self.entries.get(&key) {
                    out.push_str(replacement);
                    i += len;
                    continue 'scan;
                }
            }
            if longest >= 1 {
                if let Some(replacement) = self.entries.get(&*chars[i].encode_utf8(&mut utf8)) {
                    out.push_str(replacement);
                    i += 1;
                    continue;
                }
            }
            push_without_marks(&mut out, chars[i]);
            i += 1;
        }

        out
    }
}

/// Push `c`, dropping combining marks from its canonical decomposition.
///
/// Characters whose decomposition has no marks (Hangul syllables, for one)
/// are pushed unchanged.
fn push_without_marks(out: &mut String, c: char) {
    if c.is_ascii() {
        out.push(c);
        return;
    }
    let mut parts: Vec<char> = Vec::with_capacity(4);
    decompose_canonical(c, |d| parts.push(d));
    if parts.iter().any(|&d| is_combining_mark(d)) {
        out.extend(parts.into_iter().filter(|&d| !is_combining_mark(d)));
    } else {
        out.push(c);
    }
}
