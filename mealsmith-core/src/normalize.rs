//! Normalization of parsed model output into canonical recipes.

use serde_json::Value;

use crate::error::NormalizeError;
use crate::types::{Difficulty, Recipe};

/// Instruction steps used when the model omits instructions entirely.
pub const FALLBACK_INSTRUCTIONS: &[&str] = &[
    "Prepare ingredients",
    "Cook according to recipe",
    "Season to taste",
    "Serve hot",
];

const DEFAULT_COOKING_TIME: &str = "30 minutes";
const DEFAULT_SERVINGS: &str = "4 people";
const DEFAULT_CUISINE: &str = "International";

const DEFAULT_PRECAUTIONS: &str =
    "Follow standard cooking safety practices. Wash hands before and after handling ingredients.";

const DEFAULT_SERVING_SUGGESTIONS: &str = "Serve hot and enjoy with your favorite sides!";

/// Normalize a parsed model response into a recipe batch.
///
/// Strict at the batch level: a missing or empty `recipes` array means the
/// model ignored the schema wholesale and is escalated as a violation (the
/// orchestrator then synthesizes instead). Lenient at the field level: each
/// missing or blank field is defaulted independently without invalidating
/// its siblings. The batch length is otherwise accepted as-is.
pub fn normalize_batch(
    parsed: &Value,
    ingredients: &[String],
    seed: u64,
) -> Result<Vec<Recipe>, NormalizeError> {
    let entries = parsed
        .get("recipes")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            NormalizeError::SchemaViolation("missing top-level `recipes` array".to_string())
        })?;

    if entries.is_empty() {
        return Err(NormalizeError::SchemaViolation(
            "`recipes` array is empty".to_string(),
        ));
    }

    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_recipe(entry, ingredients, seed, index))
        .collect())
}

/// Normalize one parsed recipe entry, defaulting every missing field.
fn normalize_recipe(entry: &Value, ingredients: &[String], seed: u64, index: usize) -> Recipe {
    let title = string_field(entry, "title").unwrap_or_else(|| {
        let first = ingredients.first().map(String::as_str).unwrap_or("Chef's");
        format!("{} Recipe {}", first, index + 1)
    });

    Recipe {
        id: format!("ai-recipe-{}-{}", seed, index),
        title,
        cooking_time: string_field(entry, "cookingTime")
            .unwrap_or_else(|| DEFAULT_COOKING_TIME.to_string()),
        servings: string_field(entry, "servings").unwrap_or_else(|| DEFAULT_SERVINGS.to_string()),
        instructions: string_list(entry, "instructions").unwrap_or_else(|| {
            FALLBACK_INSTRUCTIONS.iter().map(|s| s.to_string()).collect()
        }),
        precautions: string_field(entry, "precautions")
            .unwrap_or_else(|| DEFAULT_PRECAUTIONS.to_string()),
        serving_suggestions: string_field(entry, "servingSuggestions")
            .unwrap_or_else(|| DEFAULT_SERVING_SUGGESTIONS.to_string()),
        ingredients: ingredients.to_vec(),
        image_url: image_url(seed, index),
        difficulty: string_field(entry, "difficulty")
            .map(|s| Difficulty::parse_lenient(&s))
            .unwrap_or(Difficulty::Medium),
        cuisine: string_field(entry, "cuisine").unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
        dietary_info: string_list(entry, "dietaryInfo")
            .unwrap_or_else(|| vec!["Homestyle".to_string()]),
    }
}

/// Non-blank string field, or None.
fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Non-empty list of non-blank strings, or None.
fn string_list(entry: &Value, key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = entry
        .get(key)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    (!items.is_empty()).then_some(items)
}

/// Placeholder image reference, seeded for per-batch uniqueness.
pub(crate) fn image_url(seed: u64, index: usize) -> String {
    format!(
        "https://picsum.photos/400/300?random={}&blur=0",
        seed + index as u64
    )
}
