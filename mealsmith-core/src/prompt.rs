//! Recipe generation prompt.
//!
//! The prompt is the sole mechanism for shaping model output: it pins the
//! exact JSON schema, the step count, and the "JSON only" requirement.
//! There is no structural enforcement downstream beyond parsing.

/// Prompt name for logging and diagnostics.
pub const RECIPE_PROMPT_NAME: &str = "generate_recipes";

/// Render the recipe-generation prompt for the given ingredients.
///
/// Deterministic: identical input yields byte-identical output.
pub fn render_recipe_prompt(ingredients: &[String]) -> String {
    let list = ingredients.join(", ");

    format!(
        r#"You are a professional chef and recipe creator. Create 4-6 diverse and delicious recipes using these ingredients: {list}.

IMPORTANT: Respond with ONLY a valid JSON object in this exact format (no markdown, no extra text):

{{
  "recipes": [
    {{
      "title": "Creative Recipe Name",
      "cookingTime": "X minutes",
      "servings": "X people",
      "instructions": [
        "Detailed step 1",
        "Detailed step 2",
        "Detailed step 3",
        "Continue with 8-12 clear steps"
      ],
      "precautions": "Important safety tips and cooking warnings",
      "servingSuggestions": "How to serve and what pairs well with this dish",
      "difficulty": "Easy",
      "cuisine": "Italian",
      "dietaryInfo": ["Vegetarian", "Gluten-Free"]
    }}
  ]
}}

Requirements:
- Each recipe must use at least 3 of the provided ingredients: {list}
- Include recipes from different cuisines (Italian, Asian, Mexican, Mediterranean, etc.)
- Provide 8-12 detailed, easy-to-follow cooking steps for each recipe
- Include specific cooking times, temperatures, and techniques
- Add safety precautions where relevant (especially for meat, eggs, or high-heat cooking)
- Suggest creative serving ideas and food pairings
- Vary difficulty levels: Easy, Medium, Hard
- Consider dietary restrictions and add appropriate tags
- Make recipes practical for home cooking with common kitchen equipment
- Be creative but ensure recipes are achievable for home cooks

Focus on creating unique, flavorful recipes that make the most of the available ingredients."#,
        list = list
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prompt_embeds_ingredients() {
        let prompt = render_recipe_prompt(&ingredients(&["chicken", "garlic", "tomatoes"]));
        assert!(prompt.contains("chicken, garlic, tomatoes"));
        assert!(prompt.contains("ONLY a valid JSON object"));
        assert!(prompt.contains("\"recipes\""));
        assert!(prompt.contains("8-12"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let list = ingredients(&["rice", "beans"]);
        assert_eq!(render_recipe_prompt(&list), render_recipe_prompt(&list));
    }

    #[test]
    fn test_prompt_lists_schema_fields() {
        let prompt = render_recipe_prompt(&ingredients(&["eggs"]));
        for field in [
            "title",
            "cookingTime",
            "servings",
            "instructions",
            "precautions",
            "servingSuggestions",
            "difficulty",
            "cuisine",
            "dietaryInfo",
        ] {
            assert!(prompt.contains(field), "prompt missing field {}", field);
        }
    }
}
