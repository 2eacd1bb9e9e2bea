//! Text generation: backend client, prompt builders, fallback policy

pub mod client;
pub mod fallback;
pub mod prompts;

pub use client::{GeminiClient, GenerationError, TextGenerator};
