//! Normalizer: the ONLY place raw records become display records.
//!
//! Decides inclusion under a [`SkinTypeFilter`] and maps a heterogeneous
//! [`RawAnimal`] onto the fixed [`DisplayRecord`] schema. Everything here is
//! a pure function of its inputs.

use std::borrow::Cow;

use serde_json::Value;

use super::domain::{AnimalError, Attribute, DisplayRecord, NOT_SPECIFIED, SkinTypeFilter};
use super::dto::RawAnimal;

/// Separator between taxonomy ranks.
pub const TAXONOMY_SEPARATOR: &str = " >> ";

/// Separator between location names.
pub const LOCATION_SEPARATOR: &str = " and ";

/// Display text of a JSON value. Strings are used as-is, other scalars
/// print as JSON, `null` has no text.
pub fn display_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        other => Some(Cow::Owned(other.to_string())),
    }
}

fn field_text(value: Option<&Value>) -> Option<String> {
    value.and_then(display_text).map(Cow::into_owned)
}

/// Skin type used for filtering; records without one resolve to `"not specified"`.
pub fn resolve_skin_type(animal: &RawAnimal) -> Cow<'_, str> {
    animal
        .characteristics
        .as_ref()
        .and_then(|c| c.skin_type.as_ref())
        .and_then(display_text)
        .unwrap_or(Cow::Borrowed(NOT_SPECIFIED))
}

/// Normalize one record.
///
/// Returns `Ok(None)` when the filter excludes the record. An included
/// record must carry a name, a taxonomy object of string values and, if it
/// has locations at all, an array of them; otherwise it is malformed.
/// Excluded records are never inspected past their skin type.
pub fn normalize(
    animal: &RawAnimal,
    filter: &SkinTypeFilter,
) -> Result<Option<DisplayRecord>, AnimalError> {
    let skin_type = resolve_skin_type(animal);
    if !filter.matches(&skin_type) {
        tracing::debug!(name = ?animal.name, skin_type = %skin_type, "excluded by filter");
        return Ok(None);
    }

    let name = field_text(animal.name.as_ref())
        .ok_or_else(|| AnimalError::malformed(None, "missing name"))?;

    let taxonomy = join_taxonomy(animal, &name)?;

    let characteristics = animal.characteristics.as_ref();
    let fields = [
        (Attribute::Diet, field_text(characteristics.and_then(|c| c.diet.as_ref()))),
        (Attribute::Type, field_text(characteristics.and_then(|c| c.kind.as_ref()))),
        (Attribute::Lifespan, field_text(characteristics.and_then(|c| c.lifespan.as_ref()))),
        (Attribute::Location, join_locations(animal, &name)?),
    ];
    let attributes = fields
        .into_iter()
        .filter_map(|(attribute, value)| value.map(|v| (attribute, v)))
        .collect();

    tracing::debug!(name = %name, skin_type = %skin_type, "included");
    Ok(Some(DisplayRecord {
        name,
        taxonomy,
        attributes,
    }))
}

fn join_taxonomy(animal: &RawAnimal, name: &str) -> Result<String, AnimalError> {
    let taxonomy = match &animal.taxonomy {
        None | Some(Value::Null) => {
            return Err(AnimalError::malformed(Some(name), "missing taxonomy"));
        }
        Some(Value::Object(ranks)) => ranks,
        Some(other) => {
            return Err(AnimalError::malformed(
                Some(name),
                format!("taxonomy is not an object: {other}"),
            ));
        }
    };

    let ranks = taxonomy
        .iter()
        .map(|(rank, value)| match value {
            Value::String(s) => Ok(s.as_str()),
            other => Err(AnimalError::malformed(
                Some(name),
                format!("taxonomy rank '{rank}' is not a string: {other}"),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ranks.join(TAXONOMY_SEPARATOR))
}

/// `null` entries inside the array are skipped.
fn join_locations(animal: &RawAnimal, name: &str) -> Result<Option<String>, AnimalError> {
    match &animal.locations {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(places)) => {
            let places: Vec<Cow<'_, str>> = places.iter().filter_map(display_text).collect();
            Ok(Some(places.join(LOCATION_SEPARATOR)))
        }
        Some(other) => Err(AnimalError::malformed(
            Some(name),
            format!("locations is not a list: {other}"),
        )),
    }
}

/// Normalize a whole corpus in order.
///
/// Records are keyed by name: a later record with the same name replaces
/// the earlier one but keeps its position. The first malformed included
/// record aborts the call.
pub fn normalize_corpus(
    animals: &[RawAnimal],
    filter: &SkinTypeFilter,
) -> Result<Vec<DisplayRecord>, AnimalError> {
    let mut records: Vec<DisplayRecord> = Vec::new();
    for animal in animals {
        let Some(record) = normalize(animal, filter)? else {
            continue;
        };
        match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }
    Ok(records)
}
