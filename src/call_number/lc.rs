//! Library of Congress call numbers.

use crate::cleanup::{
    non_empty, replace_chars, strip_quotes, strip_subfield_delimiters,
    STANDARD_PUNCTUATION_KEEP_HASH,
};
use crate::config::StandardOptions;
use crate::normalizer::Normalizer;
use crate::padding::right_justify;
use tracing::debug;

/// Punctuation turned into spaces inside the cutter/date remainder.
const REMAINDER_PUNCTUATION: &[char] = &[
    '!', '&', '\'', '(', ')', '*', ',', '#', '.', '/', ':', ';', '<', '=', '>', '?', '-', '[',
    '\\', ']', '^', '_', '`', '|', '{', '}', '~', '+', '$', '%', '@',
];

/// Volume and series designators whose number is padded to four places.
const DESIGNATORS: &[&str] = &["no", "v", "sv", "zv", "liv", "rev"];

/// An LC call number split into its parts.
///
/// Produced by [`LcCallNumber::parse`]; all parts borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcCallNumber<'a> {
    /// Free text before the classification, such as a location stamp.
    pub prestamp: &'a str,
    /// One to three uppercase class letters.
    pub class: &'a str,
    /// One to four digit class number.
    pub number: &'a str,
    /// Decimal extension of the class number, including the `.`.
    pub decimal: &'a str,
    /// Cutters, dates, and volume designators.
    pub remainder: &'a str,
}

impl<'a> LcCallNumber<'a> {
    /// Parse a call number.
    ///
    /// The classification may start at the beginning of the text or at any
    /// word after it; whatever precedes it is the prestamp. Returns `None`
    /// when no word starts an LC classification.
    ///
    /// # Examples
    ///
    /// ```
    /// use phrase_index::call_number::LcCallNumber;
    ///
    /// let parsed = LcCallNumber::parse("Folio QA76.73.J38 1999").unwrap();
    /// assert_eq!(parsed.prestamp, "Folio ");
    /// assert_eq!(parsed.class, "QA");
    /// assert_eq!(parsed.number, "76");
    /// assert_eq!(parsed.decimal, ".73");
    /// assert_eq!(parsed.remainder, ".J38 1999");
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Option<Self> {
        let text = text.trim_start();
        let mut after_space = true;
        for (idx, c) in text.char_indices() {
            if after_space && !c.is_whitespace() {
                if let Some(parsed) = Self::parse_at(text, idx) {
                    return Some(parsed);
                }
            }
            after_space = c.is_whitespace();
        }
        None
    }

    fn parse_at(text: &'a str, start: usize) -> Option<Self> {
        let rest = &text[start..];
        let bytes = rest.as_bytes();

        let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
        if !(1..=3).contains(&letters) {
            return None;
        }
        let mut pos = letters;
        if bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }

        let digits = bytes[pos..]
            .iter()
            .take(4)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }
        let number = &rest[pos..pos + digits];
        pos += digits;

        let mut decimal = "";
        if bytes.get(pos) == Some(&b'.') && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) {
            let len = 1 + bytes[pos + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            decimal = &rest[pos..pos + len];
            pos += len;
        }

        Some(LcCallNumber {
            prestamp: &text[..start],
            class: &rest[..letters],
            number,
            decimal,
            remainder: &rest[pos..],
        })
    }

    /// Assemble the index key: class letters in three places, class number
    /// right-justified in four, decimal, then the cleaned remainder.
    ///
    /// The prestamp is not part of the key.
    #[must_use]
    pub fn normalized_key(&self) -> String {
        let mut key = format!("{:<3}", self.class.to_lowercase());
        key.push_str(&right_justify(self.number, 4, ' '));
        key.push_str(self.decimal);
        let remainder = normalize_remainder(self.remainder);
        if !remainder.is_empty() {
            key.push(' ');
            key.push_str(&remainder);
        }
        key.trim_end().to_string()
    }
}

impl Normalizer {
    /// LC call-number pipeline.
    ///
    /// Text that is not an LC call number goes through the standard pipeline
    /// without number padding, keeping `#`. A class number of more than four
    /// digits also falls back, with the standard punctuation class.
    #[must_use]
    pub fn lc_normalize(&self, phrase: &str) -> Option<String> {
        let text = self.strip_diacritics(&strip_subfield_delimiters(phrase));
        let Some(call_number) = LcCallNumber::parse(&text) else {
            debug!("no LC classification found, using standard normalization");
            return self.standard_normalize_with(
                phrase,
                StandardOptions::with_pad_length(0).punctuation(STANDARD_PUNCTUATION_KEEP_HASH),
            );
        };
        if call_number
            .remainder
            .starts_with(|c: char| c.is_ascii_digit())
        {
            debug!(
                class = call_number.class,
                "LC class number too long, using standard normalization"
            );
            return self.standard_normalize_with(phrase, StandardOptions::with_pad_length(0));
        }
        non_empty(call_number.normalized_key())
    }
}

/// Clean the cutter/date remainder of an LC call number.
fn normalize_remainder(remainder: &str) -> String {
    let chars: Vec<char> = remainder.to_lowercase().chars().collect();
    let mut text = String::with_capacity(remainder.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '.' {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next_is_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if prev.is_some_and(|p| p.is_ascii_digit()) && next_is_digit {
                text.push(' ');
                continue;
            }
            if !prev.is_some_and(char::is_alphabetic) && !next_is_digit {
                continue;
            }
        }
        text.push(c);
    }

    let text = replace_chars(&strip_quotes(&text), REMAINDER_PUNCTUATION, ' ');
    pad_designators(&text)
}

/// Pad the number after a volume designator to four places.
///
/// Also joins the remaining tokens with single spaces.
fn pad_designators(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        if DESIGNATORS.contains(&token) {
            if let Some(next) = tokens.get(i + 1).filter(|t| is_digits(t)) {
                out.push(format!("{token} {}", right_justify(next, 4, ' ')));
                i += 2;
                continue;
            }
        }
        let split = token.find(|c: char| c.is_ascii_digit()).unwrap_or(token.len());
        let (word, number) = token.split_at(split);
        if DESIGNATORS.contains(&word) && is_digits(number) {
            out.push(format!("{word} {}", right_justify(number, 4, ' ')));
        } else {
            out.push(token.to_string());
        }
        i += 1;
    }

    out.join(" ")
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
