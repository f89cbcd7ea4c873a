//! Text cleanup primitives shared by the normalization pipelines.
//!
//! Each function takes a string slice and returns a new `String`; pipelines
//! are built by chaining them.

/// Punctuation removed by the standard (title/author/series/subject) pipeline.
pub const STANDARD_PUNCTUATION: &[char] = &[
    '!', '&', '\'', '(', ')', '*', ',', '#', '.', '/', ':', ';', '<', '=', '>', '?', '-', '[',
    '\\', ']', '^', '_', '`', '|',
];

/// Standard punctuation less `#`.
///
/// Used by the name pipeline and by the LC fallback for values that are not
/// LC call numbers at all.
pub const STANDARD_PUNCTUATION_KEEP_HASH: &[char] = &[
    '!', '&', '\'', '(', ')', '*', ',', '.', '/', ':', ';', '<', '=', '>', '?', '-', '[', '\\',
    ']', '^', '_', '`', '|',
];

/// Standard punctuation less `,` and `-`, which the year-aware padder needs.
///
/// `|` is also kept so that subfield delimiters are still recognizable when
/// they are stripped after padding.
pub const BIB_UTILITY_PUNCTUATION: &[char] = &[
    '!', '&', '\'', '(', ')', '*', '#', '.', '/', ':', ';', '<', '=', '>', '?', '[', '\\', ']',
    '^', '_', '`',
];

/// Punctuation removed from standard numbers and barcodes.
pub const NUMBER_PUNCTUATION: &[char] = &[
    '$', '!', '&', '\'', '(', ')', '*', ',', '.', '/', ':', ';', '<', '=', '>', '-', '?', '[',
    '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Quote characters stripped outright.
pub const QUOTES: &[char] = &['"', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Remove every occurrence of the given characters.
#[must_use]
pub fn strip_chars(text: &str, class: &[char]) -> String {
    text.chars().filter(|c| !class.contains(c)).collect()
}

/// Replace every occurrence of the given characters with `replacement`.
#[must_use]
pub fn replace_chars(text: &str, class: &[char], replacement: char) -> String {
    text.chars()
        .map(|c| if class.contains(&c) { replacement } else { c })
        .collect()
}

/// Remove straight and curly quotes.
#[must_use]
pub fn strip_quotes(text: &str) -> String {
    strip_chars(text, QUOTES)
}

/// Replace `{` and `}` with spaces.
#[must_use]
pub fn replace_braces(text: &str) -> String {
    replace_chars(text, &['{', '}'], ' ')
}

/// Expand `&` to ` and `.
///
/// The surrounding spaces keep the word from fusing with its neighbours;
/// doubled spaces are collapsed later.
#[must_use]
pub fn expand_ampersand(text: &str) -> String {
    text.replace('&', " and ")
}

/// Replace subfield delimiters (`|` plus a one-character code) with a space.
///
/// A trailing `|` with no code is replaced as well.
///
/// # Examples
///
/// ```
/// use phrase_index::cleanup::strip_subfield_delimiters;
///
/// assert_eq!(strip_subfield_delimiters("Smith|dJohn"), "Smith John");
/// ```
#[must_use]
pub fn strip_subfield_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '|' {
            chars.next();
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapse whitespace runs to one space and trim both ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Keep at most `max_chars` characters.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// `None` for an empty key.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_and_replace() {
        assert_eq!(strip_chars("a.b,c", &['.', ',']), "abc");
        assert_eq!(replace_chars("a.b,c", &['.', ','], ' '), "a b c");
        assert_eq!(replace_braces("{a}b"), " a b");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Hamlet\" \u{201c}Lear\u{201d}"), "Hamlet Lear");
    }

    #[test]
    fn test_expand_ampersand() {
        assert_eq!(expand_ampersand("Tom&Jerry"), "Tom and Jerry");
        assert_eq!(
            collapse_whitespace(&expand_ampersand("Tom & Jerry")),
            "Tom and Jerry"
        );
    }

    #[test]
    fn test_subfield_delimiters() {
        assert_eq!(strip_subfield_delimiters("|aTitle|bsub"), " Title sub");
        assert_eq!(strip_subfield_delimiters("end|"), "end ");
        assert_eq!(strip_subfield_delimiters("5916808|%1762189"), "5916808 1762189");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b \t c  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_punctuation_classes() {
        assert!(!STANDARD_PUNCTUATION_KEEP_HASH.contains(&'#'));
        assert!(STANDARD_PUNCTUATION.contains(&'#'));
        assert!(!BIB_UTILITY_PUNCTUATION.contains(&','));
        assert!(!BIB_UTILITY_PUNCTUATION.contains(&'-'));
        assert!(!STANDARD_PUNCTUATION.contains(&'$'));
    }
}
