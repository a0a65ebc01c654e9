//! Error types for hallu-forge operations.
//!
//! Defines error types for the major subsystems:
//! - Startup configuration loading
//! - JSONL dataset loading
//! - LLM API interactions
//! - Result export (JSONL, CSV)

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Errors that can occur while loading the source dataset.
///
/// All loader errors are fatal for the run: a malformed line or an
/// unreadable file yields no records rather than a partial set.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Dataset file not found: {0}")]
    FileNotFound(String),

    #[error("Malformed JSON on line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Line {line} is not a JSON object")]
    NotAnObject { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Response contained no choices")]
    EmptyResponse,
}

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Output file already exists: {0} (pass --overwrite to replace it)")]
    PathExists(String),

    #[error("No results to export")]
    NoResults,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
