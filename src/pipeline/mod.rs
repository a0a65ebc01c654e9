//! Batch generation pipeline.

pub mod orchestrator;
pub mod result;

pub use orchestrator::BatchOrchestrator;
pub use result::{ResultRecord, FIXED_QUESTION, PROCESSING_ERROR};
