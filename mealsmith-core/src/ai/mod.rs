//! Model client abstraction for recipe generation.
//!
//! This module provides:
//! - `AiClient` trait abstracting the text-generation provider
//! - `OpenAiClient` implementation over the OpenAI chat completion API
//! - `FakeClient` deterministic test double
//! - `AiConfig` and the static `Capability` check
//!
//! # Configuration
//!
//! Set these environment variables (see `AiConfig::from_env`):
//!
//! - `OPENAI_API_KEY`: API key; absence routes generation to the
//!   offline synthesizer rather than failing
//! - `MEALSMITH_AI_MODEL` (optional): Model name
//! - `MEALSMITH_AI_BASE_URL` (optional): API base URL

mod client;
mod config;
mod fake;

pub use client::{AiClient, OpenAiClient};
pub use config::{AiConfig, Capability, API_KEY_PREFIX, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeClient;
