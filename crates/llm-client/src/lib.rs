//! Client for the hosted text-generation service.

pub mod client;
pub mod types;

pub use client::LlmClient;
pub use types::{GenerationError, GenerationParams};
