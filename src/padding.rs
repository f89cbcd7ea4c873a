//! Number padding.
//!
//! The legacy index right-justifies digit runs so that numbers sort and
//! compare by magnitude. Two variants exist:
//!
//! - [`pad_numbers`], the general form used by the standard pipeline
//! - [`pad_numbers_year_aware`], used by the bib-utility pipeline, which
//!   splits runs at hyphens and leaves a two-digit part after a four-digit
//!   year unpadded
//!
//! Both leave a run alone when it directly follows `+`, `#`, `$` or `{`
//! (prices, counts, and the like), and when it follows `.` unless decimals
//! are allowed.

/// Width used when no other width is requested.
pub const DEFAULT_PAD_WIDTH: usize = 8;

/// Characters that suppress padding of an immediately following digit run.
const NO_PAD_PREFIXES: &[char] = &['+', '#', '$', '{'];

/// Options for [`pad_numbers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions {
    /// Target width for a digit run.
    pub width: usize,
    /// Fill character.
    pub pad_char: char,
    /// Pad runs that directly follow a `.`.
    pub allow_decimal: bool,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAD_WIDTH,
            pad_char: ' ',
            allow_decimal: false,
        }
    }
}

impl PadOptions {
    /// Default options with a given width and fill character.
    #[must_use]
    pub fn new(width: usize, pad_char: char) -> Self {
        Self {
            width,
            pad_char,
            ..Self::default()
        }
    }
}

/// Right-justify `text` in `width` characters using `pad_char`.
///
/// Text already at least `width` characters long is returned unchanged.
#[must_use]
pub fn right_justify(text: &str, width: usize, pad_char: char) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.extend(std::iter::repeat(pad_char).take(width.saturating_sub(len)));
    out.push_str(text);
    out
}

/// Right-justify digit runs.
///
/// Thousands separators inside a run are dropped. A run followed by `-` and
/// exactly two digits keeps that suffix bare, and only the main block is
/// padded, always to [`DEFAULT_PAD_WIDTH`].
///
/// # Examples
///
/// ```
/// use phrase_index::padding::{pad_numbers, PadOptions};
///
/// assert_eq!(pad_numbers("2", PadOptions::default()), "       2");
/// assert_eq!(pad_numbers("B-1565-11", PadOptions::default()), "B-    1565-11");
/// assert_eq!(pad_numbers("$5,000", PadOptions::default()), "$5,000");
/// ```
#[must_use]
pub fn pad_numbers(text: &str, options: PadOptions) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + DEFAULT_PAD_WIDTH);
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let end = run_end(&chars, i, &[',']);
        if padding_blocked(&chars, i, options.allow_decimal) {
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }

        let digits: String = chars[i..end].iter().filter(|&&c| c != ',').collect();
        if let Some(suffix_end) = two_digit_suffix(&chars, end) {
            out.push_str(&right_justify(&digits, DEFAULT_PAD_WIDTH, options.pad_char));
            out.extend(&chars[end..suffix_end]);
            i = suffix_end;
        } else {
            out.push_str(&right_justify(&digits, options.width, options.pad_char));
            i = end;
        }
    }

    out
}

/// Right-justify hyphen-separated digit segments to width 8.
///
/// Each hyphen becomes a space. A two-digit segment directly after a
/// four-digit segment (a year followed by a month, day, or part) is left
/// unpadded.
///
/// # Examples
///
/// ```
/// use phrase_index::padding::pad_numbers_year_aware;
///
/// assert_eq!(pad_numbers_year_aware("1999-02", ' '), "    1999 02");
/// assert_eq!(pad_numbers_year_aware("12-345", ' '), "      12      345");
/// ```
#[must_use]
pub fn pad_numbers_year_aware(text: &str, pad_char: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + DEFAULT_PAD_WIDTH);
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let end = run_end(&chars, i, &[',', '-']);
        if padding_blocked(&chars, i, false) {
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }

        let segments: Vec<String> = chars[i..end]
            .split(|&c| c == '-')
            .map(|segment| segment.iter().filter(|&&c| c != ',').collect())
            .collect();
        for (k, segment) in segments.iter().enumerate() {
            if k > 0 {
                out.push(' ');
            }
            let follows_year = k > 0 && segments[k - 1].len() == 4 && segment.len() == 2;
            if follows_year {
                out.push_str(segment);
            } else {
                out.push_str(&right_justify(segment, DEFAULT_PAD_WIDTH, pad_char));
            }
        }
        i = end;
    }

    out
}

/// End (exclusive) of the digit run starting at `start`.
///
/// A joiner character extends the run only when a digit follows it.
pub(crate) fn run_end(chars: &[char], start: usize, joiners: &[char]) -> usize {
    let mut j = start;
    while j < chars.len() {
        let joins =
            joiners.contains(&chars[j]) && chars.get(j + 1).is_some_and(char::is_ascii_digit);
        if chars[j].is_ascii_digit() || joins {
            j += 1;
        } else {
            break;
        }
    }
    j
}

fn padding_blocked(chars: &[char], start: usize, allow_decimal: bool) -> bool {
    match start.checked_sub(1).map(|prev| chars[prev]) {
        Some('.') => !allow_decimal,
        Some(prev) => NO_PAD_PREFIXES.contains(&prev),
        None => false,
    }
}

/// End of a `-NN` suffix at `pos`, when exactly two digits follow the hyphen.
fn two_digit_suffix(chars: &[char], pos: usize) -> Option<usize> {
    let digit_at = |k: usize| chars.get(k).is_some_and(char::is_ascii_digit);
    if chars.get(pos) == Some(&'-') && digit_at(pos + 1) && digit_at(pos + 2) && !digit_at(pos + 3)
    {
        Some(pos + 3)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_justify() {
        assert_eq!(right_justify("42", 5, ' '), "   42");
        assert_eq!(right_justify("123456", 4, ' '), "123456");
        assert_eq!(right_justify("7", 0, '~'), "7");
    }

    #[test]
    fn test_pad_single_digit() {
        assert_eq!(pad_numbers("2", PadOptions::default()), "       2");
        assert_eq!(pad_numbers("vol 2", PadOptions::new(8, '~')), "vol ~~~~~~~2");
    }

    #[test]
    fn test_thousands_separators_dropped() {
        assert_eq!(
            pad_numbers("1,000,000 dollar", PadOptions::default()),
            " 1000000 dollar"
        );
    }

    #[test]
    fn test_trailing_comma_not_part_of_run() {
        assert_eq!(pad_numbers("1, 2", PadOptions::new(3, ' ')), "  1,   2");
    }

    #[test]
    fn test_two_digit_suffix() {
        assert_eq!(
            pad_numbers("B-1565-11", PadOptions::default()),
            "B-    1565-11"
        );
        // three digits after the hyphen is a separate run
        assert_eq!(
            pad_numbers("1565-111", PadOptions::new(4, ' ')),
            "1565- 111"
        );
    }

    #[test]
    fn test_suffix_uses_default_width() {
        assert_eq!(pad_numbers("12-34", PadOptions::new(0, ' ')), "      12-34");
        assert_eq!(pad_numbers("12 34", PadOptions::new(0, ' ')), "12 34");
    }

    #[test]
    fn test_blocked_prefixes() {
        let opts = PadOptions::default();
        assert_eq!(pad_numbers("$5,000", opts), "$5,000");
        assert_eq!(pad_numbers("#12", opts), "#12");
        assert_eq!(pad_numbers("+3", opts), "+3");
        assert_eq!(pad_numbers("{4", opts), "{4");
    }

    #[test]
    fn test_decimal_handling() {
        assert_eq!(pad_numbers("3.14", PadOptions::new(3, ' ')), "  3.14");
        let decimal = PadOptions {
            allow_decimal: true,
            ..PadOptions::new(3, ' ')
        };
        assert_eq!(pad_numbers("3.14", decimal), "  3. 14");
    }

    #[test]
    fn test_year_aware_segments() {
        assert_eq!(pad_numbers_year_aware("1999-02", '~'), "~~~~1999 02");
        assert_eq!(
            pad_numbers_year_aware("1999-02-15", '~'),
            "~~~~1999 02 ~~~~~~15"
        );
        assert_eq!(pad_numbers_year_aware("199-02", '~'), "~~~~~199 ~~~~~~02");
        assert_eq!(pad_numbers_year_aware("1999-023", '~'), "~~~~1999 ~~~~~023");
    }

    #[test]
    fn test_year_aware_commas() {
        assert_eq!(pad_numbers_year_aware("12,345", ' '), "   12345");
        assert_eq!(pad_numbers_year_aware("ocm12345", ' '), "ocm   12345");
    }

    #[test]
    fn test_year_aware_dangling_hyphen() {
        assert_eq!(pad_numbers_year_aware("12-", ' '), "      12-");
    }
}
