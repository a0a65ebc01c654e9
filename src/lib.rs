//! hallu-forge: hallucinated-caption dataset generator.
//!
//! This library turns ground-truth image captions into five fixed
//! corruption variants (object, attribute, relationship, scene, irrelevant)
//! by prompting a chat-completion LLM, and persists the results as one
//! combined JSONL plus five per-type CSV files.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod llm;
pub mod pipeline;
pub mod prompts;

// Re-export commonly used error types
pub use error::{ConfigError, ExportError, LlmError, LoaderError};
