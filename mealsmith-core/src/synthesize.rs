//! Offline template-driven recipe synthesis.
//!
//! This is the fallback generator used whenever the model path is
//! unavailable or fails. It is deterministic modulo the injected seed:
//! six fixed cuisine templates, each cycled over the supplied
//! ingredients, cooking methods, and difficulties, always produce
//! exactly six recipes.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::normalize::image_url;
use crate::types::{Difficulty, Recipe};

/// Cooking methods cycled across templates.
const COOKING_METHODS: &[&str] = &[
    "Stir-fry", "Baked", "Grilled", "Sautéed", "Roasted", "Braised",
];

/// Matches the featured-ingredient placeholder inside template steps.
static MAIN_INGREDIENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)main ingredients?").expect("Invalid main-ingredient regex"));

/// Matches generic "ingredients" mentions, rewritten to the supplied list.
static INGREDIENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredients").expect("Invalid ingredients regex"));

/// A fixed cuisine-specific recipe skeleton.
struct CuisineTemplate {
    cuisine: &'static str,
    title: fn(main: &str, method: &str) -> String,
    steps: &'static [&'static str],
}

fn herb_roast_title(main: &str, method: &str) -> String {
    format!("{} {} with Herbs", method, main)
}

fn spicy_title(main: &str, method: &str) -> String {
    format!("Spicy {} {}", main, method)
}

fn skillet_title(main: &str, _method: &str) -> String {
    format!("Rustic {} Skillet", main)
}

fn pasta_title(main: &str, _method: &str) -> String {
    format!("Creamy {} Pasta", main)
}

fn bowl_title(main: &str, _method: &str) -> String {
    format!("Healthy {} Bowl", main)
}

fn soup_title(main: &str, _method: &str) -> String {
    format!("Classic {} Soup", main)
}

/// The six templates, in generation order.
const TEMPLATES: &[CuisineTemplate] = &[
    CuisineTemplate {
        cuisine: "Mediterranean",
        title: herb_roast_title,
        steps: &[
            "Preheat your oven to 400°F (200°C) and line a baking sheet with parchment paper",
            "Wash and prepare all vegetables by cutting them into uniform pieces for even cooking",
            "In a large mixing bowl, toss the main ingredients with olive oil, salt, and pepper",
            "Add minced garlic, fresh herbs, and any additional seasonings to enhance flavor",
            "Arrange ingredients in a single layer on the prepared baking sheet, ensuring they don't overlap",
            "Roast in the preheated oven for 20-25 minutes, turning once halfway through cooking",
            "Check for doneness by testing with a fork - ingredients should be tender and lightly golden",
            "Remove from oven and let rest for 5 minutes before serving",
            "Garnish with fresh herbs and a drizzle of high-quality olive oil",
            "Serve immediately while hot, accompanied by your choice of sides",
        ],
    },
    CuisineTemplate {
        cuisine: "Asian",
        title: spicy_title,
        steps: &[
            "Heat a large wok or heavy-bottomed skillet over high heat until smoking",
            "Add oil and swirl to coat the entire surface of the pan evenly",
            "Add aromatics like ginger, garlic, and chilies, stir-frying for 30 seconds until fragrant",
            "Add the main protein or vegetables, cooking without stirring for 2-3 minutes to develop color",
            "Stir-fry ingredients rapidly, keeping them moving to prevent burning",
            "Create a sauce by combining soy sauce, rice wine, and seasonings in a small bowl",
            "Push ingredients to one side of the wok and pour in the sauce mixture",
            "Toss everything together, ensuring all ingredients are well-coated with sauce",
            "Add any quick-cooking vegetables or garnishes in the final minute",
            "Taste and adjust seasoning with salt, pepper, or additional sauce as needed",
            "Serve immediately over steamed rice or noodles while piping hot",
        ],
    },
    CuisineTemplate {
        cuisine: "American",
        title: skillet_title,
        steps: &[
            "Heat a large cast-iron skillet over medium-high heat until hot but not smoking",
            "Add a generous amount of oil or butter, allowing it to heat until shimmering",
            "Season the main ingredients generously with salt, pepper, and your favorite spices",
            "Carefully place ingredients in the hot skillet, leaving space between pieces",
            "Cook without moving for 4-5 minutes to develop a beautiful golden crust",
            "Flip or stir ingredients and continue cooking until evenly browned on all sides",
            "Add aromatics like onions, garlic, or herbs to build layers of flavor",
            "Deglaze the pan with wine, broth, or citrus juice, scraping up any browned bits",
            "Reduce heat to medium-low and simmer until ingredients are tender and sauce thickens",
            "Finish with fresh herbs, a pat of butter, or a splash of cream for richness",
            "Serve directly from the skillet for a rustic, homestyle presentation",
        ],
    },
    CuisineTemplate {
        cuisine: "Italian",
        title: pasta_title,
        steps: &[
            "Bring a large pot of salted water to a rolling boil for cooking pasta",
            "Add pasta to boiling water and cook according to package directions until al dente",
            "While pasta cooks, heat olive oil in a large skillet over medium heat",
            "Sauté garlic and onions until fragrant and translucent, about 3-4 minutes",
            "Add the main ingredients and cook until they begin to soften and release flavors",
            "Pour in cream or milk, bringing the mixture to a gentle simmer",
            "Season with salt, pepper, and Italian herbs like basil or oregano",
            "Reserve 1 cup of pasta cooking water before draining the pasta",
            "Add drained pasta to the skillet with the sauce, tossing to combine",
            "Use pasta water to adjust consistency, adding gradually until sauce coats pasta",
            "Remove from heat and stir in fresh herbs and grated Parmesan cheese",
            "Serve immediately in warmed bowls with additional cheese on the side",
        ],
    },
    CuisineTemplate {
        cuisine: "Modern",
        title: bowl_title,
        steps: &[
            "Prepare a base of quinoa or brown rice according to package instructions",
            "While grains cook, wash and chop all fresh vegetables into bite-sized pieces",
            "Heat a large skillet with a small amount of olive oil over medium-high heat",
            "Season the main ingredients with salt, pepper, and your favorite spices",
            "Cook the main ingredients until tender and lightly caramelized, about 8-10 minutes",
            "In a small bowl, whisk together a simple dressing with lemon juice and olive oil",
            "Add fresh herbs, minced garlic, and a touch of honey to the dressing",
            "Arrange the cooked grains in serving bowls as the base",
            "Top with the cooked ingredients and fresh vegetables in colorful sections",
            "Drizzle with the prepared dressing and add any desired toppings",
            "Garnish with seeds, nuts, or fresh herbs for extra texture and flavor",
            "Serve immediately while warm, or chill for a refreshing cold bowl",
        ],
    },
    CuisineTemplate {
        cuisine: "Comfort Food",
        title: soup_title,
        steps: &[
            "In a large heavy-bottomed pot, heat olive oil over medium heat",
            "Add diced onions, carrots, and celery, cooking until softened, about 5-7 minutes",
            "Add minced garlic and cook for another minute until fragrant",
            "Add the main ingredients and cook, stirring occasionally, for 5 minutes",
            "Pour in enough broth to cover ingredients by 2 inches",
            "Add bay leaves, thyme, and other herbs, then bring to a boil",
            "Reduce heat to low and simmer partially covered for 25-30 minutes",
            "Taste and season with salt and pepper as needed",
            "For a thicker soup, mash some ingredients against the side of the pot",
            "Remove bay leaves and adjust consistency with more broth if needed",
            "Ladle into bowls and garnish with fresh herbs or a dollop of cream",
            "Serve hot with crusty bread or crackers on the side",
        ],
    },
];

/// Food-safety text keyed by ingredient keyword; first match wins, in
/// table order.
const PRECAUTIONS: &[(&str, &str)] = &[
    (
        "chicken",
        "Ensure chicken reaches internal temperature of 165°F (74°C). Wash hands and surfaces after handling raw chicken.",
    ),
    (
        "beef",
        "Cook to desired doneness but ensure minimum internal temperature of 145°F (63°C) for safety.",
    ),
    (
        "fish",
        "Cook until fish flakes easily with a fork. Fresh fish should smell like the ocean, not 'fishy'.",
    ),
    (
        "eggs",
        "Use fresh eggs and cook thoroughly. Avoid cross-contamination with other ingredients.",
    ),
    (
        "mushrooms",
        "Clean mushrooms gently with a damp cloth. Never eat wild mushrooms unless identified by an expert.",
    ),
];

const DEFAULT_PRECAUTION: &str =
    "Always wash hands before cooking. Keep hot foods hot and cold foods cold. Taste and adjust seasoning gradually.";

/// Serving suggestions keyed by cuisine; "American" is the named default
/// for unknown cuisines.
const SERVING_SUGGESTIONS: &[(&str, &str)] = &[
    (
        "Italian",
        "Serve with crusty Italian bread and a glass of Chianti. Garnish with fresh basil and extra Parmesan cheese.",
    ),
    (
        "Asian",
        "Perfect with steamed jasmine rice and a side of pickled vegetables. Garnish with sesame seeds and green onions.",
    ),
    (
        "Mexican",
        "Serve with warm tortillas, lime wedges, and fresh cilantro. Add avocado slices and hot sauce on the side.",
    ),
    (
        "Mediterranean",
        "Pair with warm pita bread, olives, and a Greek salad. Drizzle with extra virgin olive oil and lemon juice.",
    ),
    (
        "American",
        "Great with mashed potatoes or roasted vegetables. Serve with a crisp green salad and dinner rolls.",
    ),
    (
        "Indian",
        "Serve with basmati rice and naan bread. Accompany with yogurt raita and mango chutney.",
    ),
    (
        "French",
        "Pair with a crusty baguette and a glass of French wine. Serve with a simple green salad dressed with vinaigrette.",
    ),
    (
        "Modern",
        "Serve in a bowl with additional toppings like avocado, nuts, or seeds. Perfect for meal prep and healthy eating.",
    ),
    (
        "Comfort Food",
        "Serve hot with crusty bread or crackers. Perfect for cold days and pairs well with a warm beverage.",
    ),
];

const VEGETARIAN_KEYWORDS: &[&str] = &[
    "vegetables", "cheese", "eggs", "milk", "pasta", "rice", "beans", "lentils", "quinoa", "tofu",
];

const GLUTEN_FREE_KEYWORDS: &[&str] = &[
    "rice", "quinoa", "vegetables", "meat", "fish", "eggs", "potatoes",
];

const MEAT_KEYWORDS: &[&str] = &["chicken", "beef", "pork", "fish", "meat", "turkey", "lamb"];

const GLUTEN_KEYWORDS: &[&str] = &["wheat", "flour", "pasta", "bread"];

const SPICE_KEYWORDS: &[&str] = &["spicy", "chili", "pepper", "hot"];

/// Synthesize exactly one recipe per template.
///
/// Callers must supply at least one ingredient; the orchestrator
/// validates this before routing here.
pub fn synthesize(ingredients: &[String], seed: u64) -> Vec<Recipe> {
    debug_assert!(!ingredients.is_empty());

    let featured: String = ingredients
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let main = &ingredients[index % ingredients.len()];
            let method = COOKING_METHODS[index % COOKING_METHODS.len()];
            let difficulty = Difficulty::ALL[index % Difficulty::ALL.len()];

            let instructions = template
                .steps
                .iter()
                .map(|step| {
                    let step = MAIN_INGREDIENT_RE.replace_all(step, NoExpand(main));
                    INGREDIENTS_RE
                        .replace_all(&step, NoExpand(&featured))
                        .into_owned()
                })
                .collect();

            Recipe {
                id: format!("enhanced-recipe-{}-{}", seed, index),
                title: (template.title)(main, method),
                cooking_time: format!("{} minutes", 25 + index * 5),
                servings: format!("{} people", 3 + index % 3),
                instructions,
                precautions: precautions_for(main).to_string(),
                serving_suggestions: serving_suggestions_for(template.cuisine).to_string(),
                ingredients: ingredients.to_vec(),
                image_url: image_url(seed, index),
                difficulty,
                cuisine: template.cuisine.to_string(),
                dietary_info: dietary_info_for(ingredients, template.cuisine),
            }
        })
        .collect()
}

/// Look up food-safety text for the featured ingredient.
fn precautions_for(ingredient: &str) -> &'static str {
    let lowered = ingredient.to_lowercase();
    PRECAUTIONS
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_PRECAUTION)
}

/// Look up serving suggestions for a cuisine, defaulting to American.
fn serving_suggestions_for(cuisine: &str) -> &'static str {
    SERVING_SUGGESTIONS
        .iter()
        .find(|(key, _)| *key == cuisine)
        .or_else(|| SERVING_SUGGESTIONS.iter().find(|(key, _)| *key == "American"))
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_PRECAUTION)
}

fn any_keyword_match(ingredients: &[String], keywords: &[&str]) -> bool {
    ingredients.iter().any(|ingredient| {
        let lowered = ingredient.to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword))
    })
}

/// Infer dietary tags from the ingredient list and cuisine.
///
/// Rules, in order: Vegetarian (vegetarian keyword present, no meat
/// keyword), Gluten-Free (gluten-free keyword present, no gluten
/// keyword), Heart Healthy (Mediterranean or Modern), Spicy (spice
/// keyword), Nutritious (Modern). If nothing fires, ["Homestyle"].
fn dietary_info_for(ingredients: &[String], cuisine: &str) -> Vec<String> {
    let mut info = Vec::new();

    let has_vegetarian = any_keyword_match(ingredients, VEGETARIAN_KEYWORDS);
    let has_gluten_free = any_keyword_match(ingredients, GLUTEN_FREE_KEYWORDS);
    let has_meat = any_keyword_match(ingredients, MEAT_KEYWORDS);
    let has_gluten = any_keyword_match(ingredients, GLUTEN_KEYWORDS);

    if has_vegetarian && !has_meat {
        info.push("Vegetarian".to_string());
    }

    if has_gluten_free && !has_gluten {
        info.push("Gluten-Free".to_string());
    }

    if cuisine == "Mediterranean" || cuisine == "Modern" {
        info.push("Heart Healthy".to_string());
    }

    if any_keyword_match(ingredients, SPICE_KEYWORDS) {
        info.push("Spicy".to_string());
    }

    if cuisine == "Modern" {
        info.push("Nutritious".to_string());
    }

    if info.is_empty() {
        info.push("Homestyle".to_string());
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_synthesize_produces_six_recipes() {
        let recipes = synthesize(&ingredients(&["Tomatoes", "Onions", "Garlic"]), 42);
        assert_eq!(recipes.len(), 6);

        for (index, recipe) in recipes.iter().enumerate() {
            assert_eq!(recipe.id, format!("enhanced-recipe-42-{}", index));
            assert!(!recipe.instructions.is_empty());
            assert!(!recipe.precautions.is_empty());
            assert!(!recipe.serving_suggestions.is_empty());
            assert!(!recipe.dietary_info.is_empty());
        }
    }

    #[test]
    fn test_template_cycling_and_titles() {
        let recipes = synthesize(&ingredients(&["Tomatoes", "Onions", "Garlic"]), 1);

        // ingredients and methods cycle by index
        assert_eq!(recipes[0].title, "Stir-fry Tomatoes with Herbs");
        assert_eq!(recipes[1].title, "Spicy Onions Baked");
        assert_eq!(recipes[2].title, "Rustic Garlic Skillet");
        assert_eq!(recipes[3].title, "Creamy Tomatoes Pasta");
        assert_eq!(recipes[4].title, "Healthy Onions Bowl");
        assert_eq!(recipes[5].title, "Classic Garlic Soup");

        assert_eq!(recipes[0].cuisine, "Mediterranean");
        assert_eq!(recipes[5].cuisine, "Comfort Food");
    }

    #[test]
    fn test_single_ingredient_cycles_via_modulo() {
        let recipes = synthesize(&ingredients(&["Chicken"]), 1);
        assert_eq!(recipes.len(), 6);
        for recipe in &recipes {
            assert!(recipe.title.contains("Chicken"));
        }
    }

    #[test]
    fn test_times_servings_and_difficulty_cycle() {
        let recipes = synthesize(&ingredients(&["Rice"]), 1);

        assert_eq!(recipes[0].cooking_time, "25 minutes");
        assert_eq!(recipes[5].cooking_time, "50 minutes");
        assert_eq!(recipes[0].servings, "3 people");
        assert_eq!(recipes[1].servings, "4 people");
        assert_eq!(recipes[2].servings, "5 people");
        assert_eq!(recipes[3].servings, "3 people");

        assert_eq!(recipes[0].difficulty, Difficulty::Easy);
        assert_eq!(recipes[1].difficulty, Difficulty::Medium);
        assert_eq!(recipes[2].difficulty, Difficulty::Hard);
        assert_eq!(recipes[3].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_instruction_placeholder_substitution() {
        let recipes = synthesize(&ingredients(&["Chicken", "Rice", "Peppers", "Celery"]), 1);

        // Mediterranean step 3 mentions "the main ingredients"
        let step = &recipes[0].instructions[2];
        assert!(step.contains("Chicken"), "step was: {}", step);
        assert!(!step.to_lowercase().contains("main ingredient"));

        // Mediterranean step 5 mentions plain "ingredients": first three supplied
        let step = &recipes[0].instructions[4];
        assert!(step.contains("Chicken, Rice, Peppers"), "step was: {}", step);
        assert!(!step.contains("Celery"));
    }

    #[test]
    fn test_precaution_keyword_lookup() {
        let recipes = synthesize(&ingredients(&["Ground Beef"]), 1);
        assert!(recipes[0].precautions.contains("145°F"));

        let recipes = synthesize(&ingredients(&["Zucchini"]), 1);
        assert_eq!(recipes[0].precautions, DEFAULT_PRECAUTION);
    }

    #[test]
    fn test_serving_suggestions_lookup_and_default() {
        assert!(serving_suggestions_for("Italian").contains("Chianti"));
        assert!(serving_suggestions_for("Comfort Food").contains("crusty bread"));
        // unknown cuisine falls back to the American entry
        assert!(serving_suggestions_for("Martian").contains("mashed potatoes"));
    }

    #[test]
    fn test_dietary_meat_blocks_vegetarian() {
        let tags = dietary_info_for(&ingredients(&["Rice", "Chicken"]), "American");
        assert!(!tags.contains(&"Vegetarian".to_string()));
        // rice is a gluten-free keyword and no gluten keyword is present
        assert!(tags.contains(&"Gluten-Free".to_string()));
    }

    #[test]
    fn test_dietary_vegetarian_without_meat() {
        let tags = dietary_info_for(&ingredients(&["Rice", "Cheese"]), "American");
        assert!(tags.contains(&"Vegetarian".to_string()));
    }

    #[test]
    fn test_dietary_gluten_keyword_blocks_gluten_free() {
        let tags = dietary_info_for(&ingredients(&["Rice", "Flour"]), "American");
        assert!(!tags.contains(&"Gluten-Free".to_string()));
    }

    #[test]
    fn test_dietary_cuisine_rules() {
        let tags = dietary_info_for(&ingredients(&["Dragonfruit"]), "Modern");
        assert!(tags.contains(&"Heart Healthy".to_string()));
        assert!(tags.contains(&"Nutritious".to_string()));

        let tags = dietary_info_for(&ingredients(&["Chili Peppers"]), "American");
        assert!(tags.contains(&"Spicy".to_string()));
    }

    #[test]
    fn test_dietary_defaults_to_homestyle() {
        let tags = dietary_info_for(&ingredients(&["Dragonfruit"]), "American");
        assert_eq!(tags, vec!["Homestyle"]);
    }

    #[test]
    fn test_synthesize_is_deterministic_for_fixed_seed() {
        let list = ingredients(&["Tomatoes", "Onions"]);
        assert_eq!(synthesize(&list, 99), synthesize(&list, 99));
    }
}
