//! Parallel batch normalization using Rayon.
//!
//! Normalization is a pure function of the phrase, so a catalog can be split
//! across threads with no coordination. These helpers use Rayon's
//! work-stealing pool (which respects `RAYON_NUM_THREADS`) and return results
//! in input order.
//!
//! # Examples
//!
//! ```
//! use phrase_index::batch::normalize_batch;
//! use phrase_index::{IndexType, Normalizer};
//!
//! let normalizer = Normalizer::default();
//! let values = vec![
//!     ("HC111.A1 E25", Some(IndexType::LcCallNumber)),
//!     ("147800018X", Some(IndexType::StandardNumber)),
//!     ("   ", Some(IndexType::Title)),
//! ];
//! let keys = normalize_batch(&normalizer, &values);
//! assert_eq!(keys[0].as_deref(), Some("hc  111 a1 e25"));
//! assert_eq!(keys[1].as_deref(), Some("147800018x"));
//! assert_eq!(keys[2], None);
//! ```

use crate::index_type::IndexType;
use crate::normalizer::Normalizer;
use rayon::prelude::*;
use tracing::debug;

/// Normalize `(phrase, index)` pairs in parallel.
///
/// The result at position `i` is `normalizer.normalize(&values[i].0, values[i].1)`.
#[must_use]
pub fn normalize_batch<S>(
    normalizer: &Normalizer,
    values: &[(S, Option<IndexType>)],
) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    debug!(count = values.len(), "normalizing batch");
    values
        .par_iter()
        .map(|(phrase, index_type)| normalizer.normalize(phrase.as_ref(), *index_type))
        .collect()
}

/// Normalize phrases that all belong to the same index, in parallel.
#[must_use]
pub fn normalize_batch_as<S>(
    normalizer: &Normalizer,
    phrases: &[S],
    index_type: Option<IndexType>,
) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    debug!(count = phrases.len(), index = ?index_type, "normalizing batch");
    phrases
        .par_iter()
        .map(|phrase| normalizer.normalize(phrase.as_ref(), index_type))
        .collect()
}
