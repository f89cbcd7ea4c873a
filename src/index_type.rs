//! Index-type codes and their match strategies.
//!
//! Every phrase-index entry carries a one-character index code naming the
//! field category the value came from. The code selects the normalization
//! pipeline, and, for the retrieval side, whether stored keys are compared by
//! equality or by prefix.

use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phrase-index code.
///
/// A value with no index code (`Option::<IndexType>::None`) behaves like a
/// standard-pipeline index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexType {
    /// a - Author
    #[serde(rename = "a")]
    Author,
    /// t - Title
    #[serde(rename = "t")]
    Title,
    /// s - Series
    #[serde(rename = "s")]
    Series,
    /// d - Subject
    #[serde(rename = "d")]
    Subject,
    /// j - Journal title
    #[serde(rename = "j")]
    JournalTitle,
    /// n - Name (author as a personal/corporate name heading)
    #[serde(rename = "n")]
    Name,
    /// o - Bibliographic utility number (OCLC and similar)
    #[serde(rename = "o")]
    BibUtility,
    /// i - Standard number (ISBN, ISSN)
    #[serde(rename = "i")]
    StandardNumber,
    /// b - Item barcode
    #[serde(rename = "b")]
    Barcode,
    /// c - Library of Congress call number
    #[serde(rename = "c")]
    LcCallNumber,
    /// e - Dewey call number
    #[serde(rename = "e")]
    DeweyCallNumber,
    /// g - SuDoc (government document) call number
    #[serde(rename = "g")]
    SudocCallNumber,
}

/// How a retrieval component compares a normalized search key with stored
/// index entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Stored entry must equal the key.
    Exact,
    /// Stored entry must start with the key.
    Prefix,
}

impl MatchStrategy {
    /// Default match strategy for an optional index code.
    ///
    /// Values with no index code match exactly.
    #[must_use]
    pub fn for_index(index_type: Option<IndexType>) -> Self {
        index_type.map_or(MatchStrategy::Exact, IndexType::match_strategy)
    }
}

impl IndexType {
    /// All recognized index codes.
    pub const ALL: [IndexType; 12] = [
        IndexType::Author,
        IndexType::Title,
        IndexType::Series,
        IndexType::Subject,
        IndexType::JournalTitle,
        IndexType::Name,
        IndexType::BibUtility,
        IndexType::StandardNumber,
        IndexType::Barcode,
        IndexType::LcCallNumber,
        IndexType::DeweyCallNumber,
        IndexType::SudocCallNumber,
    ];

    /// Look up an index type from its one-character code.
    ///
    /// Codes are case-sensitive, as in the legacy index.
    ///
    /// # Examples
    ///
    /// ```
    /// use phrase_index::IndexType;
    ///
    /// assert_eq!(IndexType::from_code('t'), Some(IndexType::Title));
    /// assert_eq!(IndexType::from_code('z'), None);
    /// ```
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'a' => Some(IndexType::Author),
            't' => Some(IndexType::Title),
            's' => Some(IndexType::Series),
            'd' => Some(IndexType::Subject),
            'j' => Some(IndexType::JournalTitle),
            'n' => Some(IndexType::Name),
            'o' => Some(IndexType::BibUtility),
            'i' => Some(IndexType::StandardNumber),
            'b' => Some(IndexType::Barcode),
            'c' => Some(IndexType::LcCallNumber),
            'e' => Some(IndexType::DeweyCallNumber),
            'g' => Some(IndexType::SudocCallNumber),
            _ => None,
        }
    }

    /// The one-character code stored in the phrase index.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            IndexType::Author => 'a',
            IndexType::Title => 't',
            IndexType::Series => 's',
            IndexType::Subject => 'd',
            IndexType::JournalTitle => 'j',
            IndexType::Name => 'n',
            IndexType::BibUtility => 'o',
            IndexType::StandardNumber => 'i',
            IndexType::Barcode => 'b',
            IndexType::LcCallNumber => 'c',
            IndexType::DeweyCallNumber => 'e',
            IndexType::SudocCallNumber => 'g',
        }
    }

    /// Default match strategy used by retrieval for this index.
    ///
    /// Name, author, title and series entries are searched by prefix; every
    /// other index is searched by equality.
    #[must_use]
    pub const fn match_strategy(self) -> MatchStrategy {
        match self {
            IndexType::Name | IndexType::Author | IndexType::Title | IndexType::Series => {
                MatchStrategy::Prefix
            }
            _ => MatchStrategy::Exact,
        }
    }

    /// Check if this index holds call numbers.
    #[must_use]
    pub const fn is_call_number(self) -> bool {
        matches!(
            self,
            IndexType::LcCallNumber | IndexType::DeweyCallNumber | IndexType::SudocCallNumber
        )
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for IndexType {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_code(c).ok_or_else(|| NormalizeError::UnknownIndexType(s.to_string()))
            }
            _ => Err(NormalizeError::UnknownIndexType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_every_index() {
        for index in IndexType::ALL {
            assert_eq!(IndexType::from_code(index.code()), Some(index));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(IndexType::from_code('x'), None);
        assert_eq!(IndexType::from_code('A'), None);
        assert!("tt".parse::<IndexType>().is_err());
        assert!("".parse::<IndexType>().is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("c".parse::<IndexType>().unwrap(), IndexType::LcCallNumber);
        let err = "q".parse::<IndexType>().unwrap_err();
        assert!(matches!(err, NormalizeError::UnknownIndexType(ref s) if s == "q"));
    }

    #[test]
    fn test_match_strategy_table() {
        let prefix: Vec<char> = IndexType::ALL
            .iter()
            .copied()
            .filter(|index| index.match_strategy() == MatchStrategy::Prefix)
            .map(IndexType::code)
            .collect();
        assert_eq!(prefix, vec!['a', 't', 's', 'n']);
        assert_eq!(MatchStrategy::for_index(None), MatchStrategy::Exact);
        assert_eq!(
            MatchStrategy::for_index(Some(IndexType::Barcode)),
            MatchStrategy::Exact
        );
        for index in IndexType::ALL {
            assert_eq!(MatchStrategy::for_index(Some(index)), index.match_strategy());
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&IndexType::SudocCallNumber).unwrap();
        assert_eq!(json, "\"g\"");
        let parsed: IndexType = serde_json::from_str("\"o\"").unwrap();
        assert_eq!(parsed, IndexType::BibUtility);
        let strategy = serde_json::to_string(&MatchStrategy::Prefix).unwrap();
        assert_eq!(strategy, "\"prefix\"");
    }

    #[test]
    fn test_call_number_indexes() {
        assert!(IndexType::DeweyCallNumber.is_call_number());
        assert!(!IndexType::Title.is_call_number());
    }
}
