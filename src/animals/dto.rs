//! Animal record Data Transfer Objects
//!
//! These types match what the API Ninjas animals endpoint returns, which is
//! also the shape of the local corpus file.
//! DO NOT use these types outside the animals module - normalize to domain types.
//!
//! Display fields are kept as raw JSON values: a number or a stray `null`
//! in one record must not fail the whole corpus. The normalizer decides
//! what is displayable, and only for records the filter includes.
//!
//! API Reference: https://api-ninjas.com/api/animals
//!
//! Example response:
//! ```json
//! [{
//!   "name": "Red Fox",
//!   "taxonomy": {"kingdom": "Animalia", "phylum": "Chordata", "class": "Mammalia"},
//!   "locations": ["Africa", "Asia", "Europe"],
//!   "characteristics": {"diet": "Omnivore", "skin_type": "Fur", "type": "Mammal"}
//! }]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One animal entry as delivered by the data source
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawAnimal {
    pub name: Option<Value>,
    /// Object of rank name -> value, in document order
    pub taxonomy: Option<Value>,
    pub characteristics: Option<Characteristics>,
    /// Array of place names; `null` and absent are treated alike
    pub locations: Option<Value>,
}

/// The `characteristics` section; only the fields we display are named
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Characteristics {
    pub skin_type: Option<Value>,
    pub diet: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub lifespan: Option<Value>,
    /// Everything else the source reports (prey, habitat, top_speed, ...)
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_empty_response() {
        let animals: Vec<RawAnimal> = serde_json::from_str("[]").expect("Should parse empty array");
        assert!(animals.is_empty());
    }

    #[test]
    fn test_parse_real_world_response() {
        let json = r#"[{
            "name": "Arctic Fox",
            "taxonomy": {
                "kingdom": "Animalia",
                "phylum": "Chordata",
                "class": "Mammalia",
                "order": "Carnivora",
                "family": "Canidae",
                "genus": "Vulpes",
                "scientific_name": "Vulpes lagopus"
            },
            "locations": ["Eurasia", "North-America"],
            "characteristics": {
                "prey": "Lemmings, Fish, Birds",
                "name_of_young": "Kit",
                "group_behavior": "Solitary",
                "diet": "Omnivore",
                "type": "Mammal",
                "lifespan": "3 - 6 years",
                "skin_type": "Fur",
                "top_speed": "48 km/h"
            }
        }]"#;

        let animals: Vec<RawAnimal> = serde_json::from_str(json).expect("Should parse response");
        assert_eq!(animals.len(), 1);

        let fox = &animals[0];
        assert_eq!(fox.name, Some(json!("Arctic Fox")));

        let taxonomy = fox.taxonomy.as_ref().and_then(Value::as_object).unwrap();
        let ranks: Vec<&str> = taxonomy.keys().map(String::as_str).collect();
        assert_eq!(
            ranks,
            ["kingdom", "phylum", "class", "order", "family", "genus", "scientific_name"]
        );

        let c = fox.characteristics.as_ref().unwrap();
        assert_eq!(c.skin_type, Some(json!("Fur")));
        assert_eq!(c.kind, Some(json!("Mammal")));
        assert_eq!(c.lifespan, Some(json!("3 - 6 years")));
        assert!(c.other.contains_key("top_speed"));

        assert_eq!(fox.locations, Some(json!(["Eurasia", "North-America"])));
    }

    #[test]
    fn test_parse_sparse_record() {
        let json = r#"[{"name": "Mystery", "locations": null}]"#;
        let animals: Vec<RawAnimal> = serde_json::from_str(json).expect("Should parse sparse record");
        assert!(animals[0].taxonomy.is_none());
        assert!(animals[0].characteristics.is_none());
        assert!(animals[0].locations.is_none());
    }

    #[test]
    fn test_unknown_top_level_fields_ignored() {
        let json = r#"[{"name": "Owl", "taxonomy": {}, "extra": 42}]"#;
        let animals: Vec<RawAnimal> = serde_json::from_str(json).expect("Should ignore unknown fields");
        assert_eq!(animals[0].name, Some(json!("Owl")));
    }

    #[test]
    fn test_mixed_value_types_parse() {
        let json = r#"[
            {"name": "Owl", "locations": "Everywhere"},
            {"name": 42, "taxonomy": "none", "locations": ["Asia", null]},
            {"name": "Odd", "characteristics": {"skin_type": "Scales", "lifespan": 5, "diet": true}}
        ]"#;
        let animals: Vec<RawAnimal> = serde_json::from_str(json).expect("Should accept any value types");
        assert_eq!(animals.len(), 3);
        assert_eq!(animals[1].name, Some(json!(42)));
        let odd = animals[2].characteristics.as_ref().unwrap();
        assert_eq!(odd.lifespan, Some(json!(5)));
        assert_eq!(odd.diet, Some(json!(true)));
    }
}
