use serde::{Deserialize, Serialize};

/// Difficulty rating for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in the cycling order used by the synthesizer.
    pub const ALL: &'static [Difficulty] =
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a model-supplied difficulty string, accepting any casing.
    /// Anything unrecognized becomes Medium.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Canonical recipe entity returned by both generation paths.
///
/// Every field is guaranteed populated once normalization or synthesis
/// completes; consumers never see a partial recipe. The id encodes the
/// generation path (`ai-recipe-*` for the model path, `enhanced-recipe-*`
/// for synthesis) plus the batch index, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub cooking_time: String,
    pub servings: String,
    /// Ordered cooking steps; never empty.
    pub instructions: Vec<String>,
    pub precautions: String,
    pub serving_suggestions: String,
    /// Echo of the caller's ingredient list, unmodified.
    pub ingredients: Vec<String>,
    /// Placeholder image reference; not owned by this service.
    pub image_url: String,
    pub difficulty: Difficulty,
    pub cuisine: String,
    /// Dietary tags; defaults to ["Homestyle"] when no rule applies.
    pub dietary_info: Vec<String>,
}
