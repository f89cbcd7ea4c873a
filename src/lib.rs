#![warn(missing_docs)]

//! # phrase-index: legacy phrase-index key normalization
//!
//! Reproduces, outside the integrated library system, the normalized keys
//! its phrase index stores for titles, names, standard numbers, and call
//! numbers, so that externally computed search terms can be matched (exactly
//! or by prefix) against previously stored index entries.
//!
//! ## Quick Start
//!
//! ```
//! use phrase_index::{IndexType, MatchStrategy, Normalizer};
//!
//! let normalizer = Normalizer::default();
//!
//! let key = normalizer.normalize("CJ2666 .H68 1979", Some(IndexType::LcCallNumber));
//! assert_eq!(key.as_deref(), Some("cj 2666 h68 1979"));
//!
//! let key = normalizer.normalize("$5,000 note $5,000", None);
//! assert_eq!(key.as_deref(), Some("$5000 note $5000"));
//!
//! assert_eq!(IndexType::Title.match_strategy(), MatchStrategy::Prefix);
//! ```
//!
//! ### Supplying a transliteration table
//!
//! ```no_run
//! use phrase_index::{Normalizer, TransliterationTable};
//! use std::sync::Arc;
//!
//! let table = Arc::new(TransliterationTable::from_path("transliteration.json")?);
//! let normalizer = Normalizer::new(table);
//! # Ok::<(), phrase_index::NormalizeError>(())
//! ```
//!
//! ## Modules
//!
//! - [`normalizer`] — The [`Normalizer`] and the standard, name, bib-utility,
//!   and number pipelines, plus the index-code dispatcher
//! - [`call_number`] — LC, Dewey, and SuDoc call-number pipelines
//! - [`index_type`] — Index codes and match strategies
//! - [`transliteration`] — Diacritic stripping tables
//! - [`cleanup`] — Punctuation classes and text cleanup primitives
//! - [`padding`] — Number padding
//! - [`batch`] — Parallel batch normalization
//! - [`config`] — Length limits and per-call options
//! - [`error`] — Error types and result type

pub mod batch;
pub mod call_number;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod index_type;
pub mod normalizer;
pub mod padding;
pub mod transliteration;

pub use call_number::LcCallNumber;
pub use config::{NormalizerConfig, StandardOptions};
pub use error::{NormalizeError, Result};
pub use index_type::{IndexType, MatchStrategy};
pub use normalizer::Normalizer;
pub use transliteration::{TableCategory, TableDocument, TransliterationTable};
