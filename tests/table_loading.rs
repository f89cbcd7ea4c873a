//! Loading transliteration tables and configuration from disk.

mod common;

use common::custom_normalizer;
use phrase_index::{NormalizeError, Normalizer, NormalizerConfig, TransliterationTable};
use std::io::Write;
use std::sync::Arc;

#[test]
fn test_later_category_overrides_earlier() {
    let n = custom_normalizer();
    assert_eq!(n.standard_normalize("Søren Århus").as_deref(), Some("soeren aarhus"));
    assert_eq!(n.standard_normalize("Æble").as_deref(), Some("aeble"));
}

#[test]
fn test_table_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"categories": [
            {{"name": "latin", "entries": {{"ß": "ss"}}}},
            {{"name": "local", "entries": {{"ß": "sz"}}}}
        ]}}"#
    )
    .unwrap();

    let table = TransliterationTable::from_path(file.path()).unwrap();
    assert_eq!(table.categories(), ["latin", "local"]);
    let n = Normalizer::new(Arc::new(table));
    assert_eq!(n.standard_normalize("Straße").as_deref(), Some("strasze"));
}

#[test]
fn test_missing_table_file() {
    let result = TransliterationTable::from_path("/nonexistent/table.json");
    assert!(matches!(result, Err(NormalizeError::IoError(_))));
}

#[test]
fn test_table_with_empty_key() {
    let json = r#"{"categories": [{"name": "bad", "entries": {"": "x"}}]}"#;
    let result = TransliterationTable::from_json_str(json);
    assert!(matches!(result, Err(NormalizeError::InvalidTable(_))));
}

#[test]
fn test_shared_table_across_threads() {
    let n = custom_normalizer();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let n = n.clone();
            std::thread::spawn(move || n.standard_normalize("Søren"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("soeren"));
    }
}

#[test]
fn test_config_from_json() {
    let config = NormalizerConfig::from_json_str(r#"{"max_key_chars": 8}"#).unwrap();
    let n = Normalizer::with_config(TransliterationTable::builtin(), config);
    assert_eq!(n.standard_normalize("abcdefgh ijk").as_deref(), Some("abcdefgh"));
    assert_eq!(n.config().max_input_chars, 150);
}
