//! Title normalization for duplicate comparison

use crate::domain::{Record, FIELD_TITLE};

/// Normalize a title into a duplicate-comparison key.
///
/// - Converts to lowercase
/// - Keeps only word characters (alphanumerics and `_`) and whitespace
/// - Trims leading and trailing whitespace
///
/// Internal whitespace is left alone: `"deep  learning"` keeps its two
/// spaces. The key is only ever compared, never displayed.
pub fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();

    kept.trim().to_string()
}

/// Duplicate-detection key for a record.
///
/// A record without a title yields the empty key, so two untitled records
/// compare equal. That is deliberate: untitled rows cannot be told apart,
/// and the screening workflow treats the later one as a duplicate.
pub fn title_key(record: &Record) -> String {
    normalize_title(&record.field_text(FIELD_TITLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;
    use rstest::rstest;

    #[rstest]
    #[case("Deep Learning for X", "deep learning for x")]
    #[case("deep learning for x!!", "deep learning for x")]
    #[case("  Surrounded by Spaces  ", "surrounded by spaces")]
    #[case("Hyphen-ated: A Study?", "hyphenated a study")]
    #[case("snake_case_title", "snake_case_title")]
    #[case("", "")]
    #[case("!!!", "")]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_title(input), expected);
    }

    #[test]
    fn internal_whitespace_is_not_collapsed() {
        assert_eq!(normalize_title("deep  learning"), "deep  learning");
        assert_ne!(normalize_title("deep  learning"), normalize_title("deep learning"));
    }

    #[test]
    fn accented_characters_are_word_characters() {
        assert_eq!(normalize_title("Análisis de Señales"), "análisis de señales");
    }

    #[test]
    fn untitled_record_yields_empty_key() {
        let record = Record::new();
        assert_eq!(title_key(&record), "");

        let mut empty_title = Record::new();
        empty_title.set_field(FIELD_TITLE, FieldValue::Empty);
        assert_eq!(title_key(&empty_title), "");
    }
}
