pub mod ai;
pub mod error;
pub mod extract;
pub mod generate;
pub mod normalize;
pub mod prompt;
pub mod synthesize;
pub mod types;

pub use error::{AiError, ExtractError, GenerateError, NormalizeError};
pub use generate::{generate_recipes, timestamp_seed, ModelPathError};
pub use types::{Difficulty, Recipe};
