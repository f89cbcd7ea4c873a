//! SuDoc (Superintendent of Documents) call numbers.

use crate::cleanup::{collapse_whitespace, non_empty, replace_braces, strip_subfield_delimiters};
use crate::normalizer::Normalizer;
use crate::padding::right_justify;
use lazy_static::lazy_static;
use regex::Regex;

/// Width of every padded SuDoc digit run.
const SUDOC_PAD_WIDTH: usize = 5;

lazy_static! {
    static ref PUNCTUATION_SPACING: Regex =
        Regex::new(r"\s*([#?\[\]&.()<>/,;-])\s*").expect("valid punctuation pattern");
    static ref COLON_SPACING: Regex = Regex::new(r"\s*:\s*").expect("valid colon pattern");
}

impl Normalizer {
    /// SuDoc call-number pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use phrase_index::Normalizer;
    ///
    /// let key = Normalizer::default().sudoc_normalize("Y 4.2:B 43/5/D 67/V.1-3");
    /// assert_eq!(key.as_deref(), Some("y    4.    2 :b   43/    5/d   67/v.    1-    3"));
    /// ```
    #[must_use]
    pub fn sudoc_normalize(&self, phrase: &str) -> Option<String> {
        let text = replace_braces(&strip_subfield_delimiters(phrase.trim_start()));
        let text = self.strip_diacritics(&text).to_lowercase();
        let text = remove_spaces_near_single_letters(&collapse_whitespace(&text));
        let text = PUNCTUATION_SPACING.replace_all(&text, "$1");
        let text = COLON_SPACING.replace_all(&text, " :");
        let text = pad_digit_runs(&text, SUDOC_PAD_WIDTH);
        non_empty(text.trim_end().to_string())
    }
}

/// Right-justify every digit run to `width` with spaces.
///
/// # Examples
///
/// ```
/// use phrase_index::call_number::pad_digit_runs;
///
/// assert_eq!(pad_digit_runs("a1/23", 3), "a  1/ 23");
/// ```
#[must_use]
pub fn pad_digit_runs(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + width);
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if !digits.is_empty() {
            out.push_str(&right_justify(&digits, width, ' '));
            digits.clear();
        }
        out.push(c);
    }
    if !digits.is_empty() {
        out.push_str(&right_justify(&digits, width, ' '));
    }
    out
}

/// Remove spaces touching a one-letter word.
fn remove_spaces_near_single_letters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let is_letter = |k: usize| chars.get(k).is_some_and(|c| c.is_alphabetic());
    let is_single_letter = |k: usize| {
        is_letter(k) && !(k > 0 && is_letter(k - 1)) && !is_letter(k + 1)
    };

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c != ' ' || !((i > 0 && is_single_letter(i - 1)) || is_single_letter(i + 1))
        })
        .map(|(_, &c)| c)
        .collect()
}
