//! Output formatting for fruit lookups
//!
//! Provides human-readable text and JSON rendering.

use fruity_core::{Fruit, FruityError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Machine,
}

impl OutputFormat {
    /// Tag used on the command line and in the library entry point.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Machine => "machine",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FruityError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "machine" => Ok(OutputFormat::Machine),
            other => Err(FruityError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select a formatter by tag (`"human"` or `"machine"`).
pub fn get_formatter(format_type: &str) -> Result<OutputFormat> {
    format_type.parse()
}

/// Render a fruit in the given format
pub fn format_fruit(fruit: &Fruit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(fruit)),
        OutputFormat::Machine => format_machine(fruit),
    }
}

/// Six fixed lines, no trailing newline.
pub fn format_human(fruit: &Fruit) -> String {
    let lines = [
        format!("Name: {}", fruit.name),
        format!("ID: {}", fruit.id),
        format!("Family: {}", fruit.family),
        "Nutrition:".to_string(),
        format!("  - Sugar: {}g", fruit.nutrition.sugar),
        format!("  - Carbohydrates: {}g", fruit.nutrition.carbohydrates),
    ];

    lines.join("\n")
}

/// Pretty-printed JSON with only sugar and carbohydrates under `nutrition`.
pub fn format_machine(fruit: &Fruit) -> Result<String> {
    #[derive(Serialize)]
    struct NutritionSummary {
        sugar: f64,
        carbohydrates: f64,
    }

    #[derive(Serialize)]
    struct FruitSummary<'a> {
        name: &'a str,
        id: i64,
        family: &'a str,
        nutrition: NutritionSummary,
    }

    let summary = FruitSummary {
        name: &fruit.name,
        id: fruit.id,
        family: &fruit.family,
        nutrition: NutritionSummary {
            sugar: fruit.nutrition.sugar,
            carbohydrates: fruit.nutrition.carbohydrates,
        },
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
