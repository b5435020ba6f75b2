//! Skin-type catalog: the distinct skin types present in a corpus.
//!
//! Used to validate filter input, so only values that actually occur are
//! offered (plus the `"All"` wildcard).

use std::collections::BTreeSet;

use super::domain::{ALL, SkinTypeFilter};
use super::dto::RawAnimal;
use super::normalize::display_text;

/// Distinct `skin_type` values observed, sorted.
pub fn skin_types(animals: &[RawAnimal]) -> Vec<String> {
    animals
        .iter()
        .filter_map(|a| a.characteristics.as_ref()?.skin_type.as_ref())
        .filter_map(|v| display_text(v).map(|s| s.into_owned()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Allowed filter values for one corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinTypeCatalog {
    skin_types: Vec<String>,
}

impl SkinTypeCatalog {
    pub fn from_corpus(animals: &[RawAnimal]) -> Self {
        Self {
            skin_types: skin_types(animals),
        }
    }

    /// Skin types in the corpus, without the wildcard.
    pub fn skin_types(&self) -> &[String] {
        &self.skin_types
    }

    /// Every accepted input, `"All"` first.
    pub fn choices(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL).chain(self.skin_types.iter().map(String::as_str))
    }

    /// Accept `"All"` or a catalog member.
    pub fn parse_filter(&self, input: &str) -> Option<SkinTypeFilter> {
        if input == ALL || self.skin_types.iter().any(|s| s == input) {
            Some(SkinTypeFilter::parse(input))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{animal, fox};
    use serde_json::json;

    fn corpus() -> Vec<RawAnimal> {
        vec![
            animal(json!({"name": "Snake", "characteristics": {"skin_type": "Scales"}})),
            fox(),
            animal(json!({"name": "Lizard", "characteristics": {"skin_type": "Scales"}})),
            animal(json!({"name": "Blob"})),
            animal(json!({"name": "Ghost", "characteristics": {"skin_type": null}})),
        ]
    }

    #[test]
    fn test_distinct_sorted() {
        assert_eq!(skin_types(&corpus()), vec!["Fur", "Scales"]);
    }

    #[test]
    fn test_non_string_skin_type_listed_as_text() {
        let corpus = vec![fox(), animal(json!({"name": "Odd", "characteristics": {"skin_type": 3}}))];
        assert_eq!(skin_types(&corpus), vec!["3", "Fur"]);
    }

    #[test]
    fn test_empty_corpus() {
        let catalog = SkinTypeCatalog::from_corpus(&[]);
        assert!(catalog.skin_types().is_empty());
        assert_eq!(catalog.choices().collect::<Vec<_>>(), vec!["All"]);
        assert_eq!(catalog.parse_filter("All"), Some(SkinTypeFilter::All));
    }

    #[test]
    fn test_choices_lists_all_first() {
        let catalog = SkinTypeCatalog::from_corpus(&corpus());
        assert_eq!(catalog.choices().collect::<Vec<_>>(), vec!["All", "Fur", "Scales"]);
    }

    #[test]
    fn test_parse_filter() {
        let catalog = SkinTypeCatalog::from_corpus(&corpus());
        assert_eq!(
            catalog.parse_filter("Fur"),
            Some(SkinTypeFilter::Exact("Fur".to_string()))
        );
        assert_eq!(catalog.parse_filter("All"), Some(SkinTypeFilter::All));
        assert_eq!(catalog.parse_filter("Feathers"), None);
        assert_eq!(catalog.parse_filter("fur"), None);
        // "not specified" is never offered, even when records lack a skin type
        assert_eq!(catalog.parse_filter("not specified"), None);
    }
}
