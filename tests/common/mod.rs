//! Common test helpers shared across the integration suite.

use phrase_index::{IndexType, Normalizer, TransliterationTable};
use std::sync::Arc;

/// Normalizer over the built-in table with legacy defaults.
pub fn default_normalizer() -> Normalizer {
    Normalizer::default()
}

/// Normalizer over a small custom table with two overlapping categories.
#[allow(dead_code)]
pub fn custom_normalizer() -> Normalizer {
    let table = TransliterationTable::builder()
        .category("base", [("ø", "o"), ("å", "a"), ("æ", "ae")])
        .category("danish", [("ø", "oe"), ("å", "aa")])
        .build()
        .expect("valid test table");
    Normalizer::new(Arc::new(table))
}

/// Index codes paired with the pipeline name they should route to.
#[allow(dead_code)]
pub fn routing_table() -> Vec<(Option<IndexType>, &'static str)> {
    vec![
        (None, "standard"),
        (Some(IndexType::Author), "standard"),
        (Some(IndexType::Title), "standard"),
        (Some(IndexType::Series), "standard"),
        (Some(IndexType::Subject), "standard"),
        (Some(IndexType::JournalTitle), "standard"),
        (Some(IndexType::Name), "name"),
        (Some(IndexType::BibUtility), "bib_utility"),
        (Some(IndexType::StandardNumber), "number"),
        (Some(IndexType::Barcode), "number"),
        (Some(IndexType::LcCallNumber), "lc"),
        (Some(IndexType::DeweyCallNumber), "dewey"),
        (Some(IndexType::SudocCallNumber), "sudoc"),
    ]
}

/// Run the named pipeline directly.
#[allow(dead_code)]
pub fn run_pipeline(normalizer: &Normalizer, pipeline: &str, phrase: &str) -> Option<String> {
    match pipeline {
        "standard" => normalizer.standard_normalize(phrase),
        "name" => normalizer.name_normalize(phrase),
        "bib_utility" => normalizer.bib_utility_normalize(phrase),
        "number" => normalizer.number_normalize(phrase),
        "lc" => normalizer.lc_normalize(phrase),
        "dewey" => normalizer.dewey_normalize(phrase),
        "sudoc" => normalizer.sudoc_normalize(phrase),
        other => panic!("unknown pipeline {other}"),
    }
}
