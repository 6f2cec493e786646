//! Fruit and nutrition records
//!
//! Records are built from the loosely-typed JSON object returned by the
//! FruityVice API. Construction never fails: any absent or wrongly typed
//! field falls back to its default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON key holding the nutrition sub-object in API responses.
const NUTRITIONS_KEY: &str = "nutritions";

/// Nutrient breakdown for a fruit (grams, calories in kcal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
    pub sugar: f64,
}

impl Nutrition {
    /// Build from the `nutritions` sub-object, defaulting each field to `0.0`.
    pub fn from_mapping(raw: &Map<String, Value>) -> Self {
        Self {
            carbohydrates: float_field(raw, "carbohydrates"),
            protein: float_field(raw, "protein"),
            fat: float_field(raw, "fat"),
            calories: float_field(raw, "calories"),
            sugar: float_field(raw, "sugar"),
        }
    }
}

/// Taxonomic and nutritional data for one named fruit.
///
/// Serde uses the API's field names, so records round-trip through the
/// same JSON shape the API serves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fruit {
    pub id: i64,
    pub name: String,
    pub family: String,
    pub genus: String,
    pub order: String,
    #[serde(rename = "nutritions")]
    pub nutrition: Nutrition,
}

impl Fruit {
    /// Build a fruit from an API response object.
    ///
    /// Missing keys default to `0` (id) or an empty string; a missing
    /// `nutritions` object yields an all-zero [`Nutrition`].
    pub fn from_mapping(raw: &Map<String, Value>) -> Self {
        let nutrition = raw
            .get(NUTRITIONS_KEY)
            .and_then(Value::as_object)
            .map(Nutrition::from_mapping)
            .unwrap_or_default();

        Self {
            id: raw.get("id").and_then(Value::as_i64).unwrap_or(0),
            name: string_field(raw, "name"),
            family: string_field(raw, "family"),
            genus: string_field(raw, "genus"),
            order: string_field(raw, "order"),
            nutrition,
        }
    }
}

/// Map a raw API object to a [`Fruit`]. Total over any object.
pub fn fruit_from_mapping(raw: &Map<String, Value>) -> Fruit {
    Fruit::from_mapping(raw)
}

fn float_field(raw: &Map<String, Value>, key: &str) -> f64 {
    raw.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn string_field(raw: &Map<String, Value>, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}
