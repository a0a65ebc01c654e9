//! Source dataset loading.

pub mod loader;

pub use loader::{load_jsonl, SourceRecord};
