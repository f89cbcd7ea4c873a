//! Call-number normalization.
//!
//! Three classification schemes each get their own pipeline:
//!
//! - **LC** (`c` index): class letters, class number, decimal, and cutters.
//!   Values that do not parse as LC fall back to the standard pipeline.
//! - **Dewey** (`e` index): numbers padded so that the integer part lines up
//!   and thousands groups stay together.
//! - **SuDoc** (`g` index): every digit run padded to five places, spacing
//!   tightened around letters and punctuation.
//!
//! # Examples
//!
//! ```
//! use phrase_index::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(normalizer.lc_normalize("HC111.A1 E25").as_deref(), Some("hc  111 a1 e25"));
//! assert_eq!(normalizer.dewey_normalize("373.757 M13e").as_deref(), Some("     373.757 m13e"));
//! assert_eq!(normalizer.sudoc_normalize("Y 4.2:B 43").as_deref(), Some("y    4.    2 :b   43"));
//! ```

mod dewey;
mod lc;
mod sudoc;

pub use dewey::pad_dewey_numbers;
pub use lc::LcCallNumber;
pub use sudoc::pad_digit_runs;
