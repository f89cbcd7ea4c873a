//! Dewey call numbers.

use crate::cleanup::{
    collapse_whitespace, expand_ampersand, non_empty, replace_braces, strip_chars, strip_quotes,
    strip_subfield_delimiters,
};
use crate::normalizer::Normalizer;
use crate::padding::{right_justify, run_end, DEFAULT_PAD_WIDTH};

/// Punctuation removed before padding. `.`, `,` and `-` survive because the
/// padder reads them.
const DEWEY_PUNCTUATION: &[char] = &[
    '!', '\'', '(', ')', '*', '/', ':', ';', '<', '=', '>', '?', '[', '\\', ']', '^', '_', '`',
    '|', '~',
];

impl Normalizer {
    /// Dewey call-number pipeline.
    #[must_use]
    pub fn dewey_normalize(&self, phrase: &str) -> Option<String> {
        let text = replace_braces(&strip_subfield_delimiters(phrase));
        let text = self.strip_diacritics(&text).to_lowercase();
        let text = remove_stray_commas(&text);
        let text = strip_quotes(&strip_chars(&text, &['#']));
        let text = strip_chars(&text, DEWEY_PUNCTUATION);
        let text = collapse_whitespace(&expand_ampersand(&text));
        let text = pad_dewey_numbers(&text);
        non_empty(strip_chars(&text, &[',']).trim_end().to_string())
    }
}

/// Pad Dewey numbers.
///
/// A number is split at hyphens; in each part the integer before any
/// decimal point is right-justified. When a comma group follows, the width
/// is chosen so the integer and the group together fill eight places (five
/// before a three-digit group, four before a four-digit group). Numbers
/// directly after a letter or a `.` are cutters or decimals and are left
/// alone. Commas stay in place.
///
/// # Examples
///
/// ```
/// use phrase_index::call_number::pad_dewey_numbers;
///
/// assert_eq!(pad_dewey_numbers("373.757 m13e"), "     373.757 m13e");
/// assert_eq!(pad_dewey_numbers("1,234"), "    1,234");
/// ```
#[must_use]
pub fn pad_dewey_numbers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + DEFAULT_PAD_WIDTH);
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let end = run_end(&chars, i, &[',', '-', '.']);
        let prev = i.checked_sub(1).map(|p| chars[p]);
        if prev.is_some_and(|p| p == '.' || p.is_alphanumeric()) {
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }

        let run: String = chars[i..end].iter().collect();
        for (k, segment) in run.split('-').enumerate() {
            if k > 0 {
                out.push('-');
            }
            out.push_str(&pad_segment(segment));
        }
        i = end;
    }

    out
}

fn pad_segment(segment: &str) -> String {
    if !segment.contains(|c: char| c.is_ascii_digit()) {
        return segment.to_string();
    }

    let mut groups = segment.split(',');
    let head = groups.next().unwrap_or_default();
    let width = match groups
        .clone()
        .next()
        .map(|group| group.chars().take_while(char::is_ascii_digit).count())
    {
        Some(3) => 5,
        Some(4) => 4,
        _ => DEFAULT_PAD_WIDTH,
    };

    let (integer, decimal) = head.split_at(head.find('.').unwrap_or(head.len()));
    let mut out = right_justify(integer, width, ' ');
    out.push_str(decimal);
    for group in groups {
        out.push(',');
        out.push_str(group);
    }
    out
}

/// Drop commas with no digit on either side.
fn remove_stray_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c != ',' {
                return true;
            }
            let prev_digit = i.checked_sub(1).is_some_and(|p| chars[p].is_ascii_digit());
            let next_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
            prev_digit || next_digit
        })
        .map(|(_, &c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_call_number() {
        let n = Normalizer::default();
        assert_eq!(
            n.dewey_normalize("373.757 M13e").as_deref(),
            Some("     373.757 m13e")
        );
    }

    #[test]
    fn test_thousands_groups() {
        assert_eq!(pad_dewey_numbers("1,234"), "    1,234");
        assert_eq!(pad_dewey_numbers("12,3456"), "  12,3456");
        assert_eq!(pad_dewey_numbers("1,23"), "       1,23");
        let n = Normalizer::default();
        assert_eq!(n.dewey_normalize("1,234 Smith").as_deref(), Some("    1234 smith"));
    }

    #[test]
    fn test_hyphenated_parts() {
        assert_eq!(
            pad_dewey_numbers("331.88-1"),
            "     331.88-       1"
        );
    }

    #[test]
    fn test_cutters_and_decimals_untouched() {
        assert_eq!(pad_dewey_numbers("b23 v.2"), "b23 v.2");
    }

    #[test]
    fn test_stray_commas() {
        assert_eq!(remove_stray_commas("smith , john"), "smith  john");
        assert_eq!(remove_stray_commas("b23, 1992"), "b23, 1992");
        let n = Normalizer::default();
        assert_eq!(
            n.dewey_normalize("975.004 B23, 1992").as_deref(),
            Some("     975.004 b23     1992")
        );
    }

    #[test]
    fn test_punctuation_and_ampersand() {
        let n = Normalizer::default();
        assert_eq!(
            n.dewey_normalize("#813.54 \"Ref\" (Q&A)").as_deref(),
            Some("     813.54 ref q and a")
        );
    }

    #[test]
    fn test_diacritics_and_braces() {
        let n = Normalizer::default();
        assert_eq!(
            n.dewey_normalize("{843} Dürer").as_deref(),
            Some("     843 durer")
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(Normalizer::default().dewey_normalize(" ; "), None);
    }
}
