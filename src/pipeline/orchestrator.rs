//! Batch orchestration over the source records.
//!
//! Strictly sequential: one record at a time, five model calls per record,
//! no overlap. A failed call degrades only its own variant; a record whose
//! task dies wholesale is replaced by a degraded record; a record with a
//! missing caption is skipped with a warning. No single record or call ever
//! aborts the batch.

use std::sync::Arc;

use crate::config::GenerationParams;
use crate::dataset::SourceRecord;
use crate::llm::{CaptionModel, ERROR_SENTINEL};
use crate::pipeline::result::{ResultRecord, PROCESSING_ERROR};
use crate::prompts::{HallucinationKind, PromptLibrary};

/// Drives prompt building and model calls across all source records.
pub struct BatchOrchestrator {
    model: Arc<dyn CaptionModel>,
    prompts: Arc<PromptLibrary>,
    params: GenerationParams,
    /// Optional cap on record count, used for smoke runs.
    max_samples: Option<usize>,
}

impl BatchOrchestrator {
    pub fn new(
        model: Arc<dyn CaptionModel>,
        prompts: PromptLibrary,
        params: GenerationParams,
        max_samples: Option<usize>,
    ) -> Self {
        Self {
            model,
            prompts: Arc::new(prompts),
            params,
            max_samples,
        }
    }

    /// Processes records in input order and returns the collected results.
    ///
    /// Output order matches input order; skipped records (missing caption)
    /// leave no result behind. Each record runs as its own task, awaited
    /// before the next starts, so a panic inside one record's processing is
    /// contained and replaced by a degraded record.
    pub async fn run(&self, records: &[SourceRecord]) -> Vec<ResultRecord> {
        let total = match self.max_samples {
            Some(cap) => {
                let capped = records.len().min(cap);
                tracing::info!(cap, "Processing a capped subset of {} records", capped);
                capped
            }
            None => {
                tracing::info!("Processing all {} records", records.len());
                records.len()
            }
        };

        let mut results = Vec::with_capacity(total);

        for record in records.iter().take(total) {
            let Some(ground_truth) = record.caption.as_deref().filter(|c| !c.is_empty()) else {
                tracing::warn!(
                    index = record.index,
                    identifier = %record.identifier,
                    "Skipping record with missing ground-truth caption"
                );
                continue;
            };

            let task = {
                let model = Arc::clone(&self.model);
                let prompts = Arc::clone(&self.prompts);
                let params = self.params.clone();
                let record = record.clone();
                let ground_truth = ground_truth.to_string();
                tokio::spawn(async move {
                    process_record(model, &prompts, &params, &record, &ground_truth).await
                })
            };

            match task.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(
                        index = record.index,
                        identifier = %record.identifier,
                        error = %e,
                        "Record processing failed; emitting degraded record"
                    );
                    let mut degraded = ResultRecord::uniform(
                        record.identifier.clone(),
                        ground_truth.to_string(),
                        PROCESSING_ERROR,
                    );
                    degraded.error_message = Some(e.to_string());
                    results.push(degraded);
                }
            }

            tracing::info!(
                index = record.index,
                processed = results.len(),
                total,
                "Record complete"
            );
        }

        tracing::info!(results = results.len(), "Generation loop finished");
        results
    }
}

/// Produces one result record: five prompts, five sequential model calls.
///
/// A failed call contributes the error sentinel for its variant and its
/// error text to `error_message`; the remaining variants still run.
async fn process_record(
    model: Arc<dyn CaptionModel>,
    prompts: &PromptLibrary,
    params: &GenerationParams,
    record: &SourceRecord,
    ground_truth: &str,
) -> ResultRecord {
    let mut result = ResultRecord::uniform(record.identifier.clone(), ground_truth.to_string(), "");
    let mut errors = Vec::new();

    for kind in HallucinationKind::ALL {
        let prompt = prompts.build_prompt(kind, ground_truth);
        match model.complete(&prompt, params).await {
            Ok(text) => result.set_variant(kind, text),
            Err(e) => {
                tracing::error!(
                    index = record.index,
                    kind = %kind,
                    error = %e,
                    "Model call failed"
                );
                result.set_variant(kind, ERROR_SENTINEL.to_string());
                errors.push(format!("{}: {}", kind, e));
            }
        }
    }

    if !errors.is_empty() {
        result.error_message = Some(errors.join("; "));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    use crate::error::LlmError;

    /// Mock model: echoes a marker per call, optionally failing or
    /// panicking on a configured set of call indices.
    struct ScriptedModel {
        calls: Mutex<usize>,
        fail_on: Vec<usize>,
        panic_on: Vec<usize>,
    }

    impl ScriptedModel {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                calls: Mutex::new(0),
                fail_on,
                panic_on: Vec::new(),
            }
        }

        fn panicking(panic_on: Vec<usize>) -> Self {
            Self {
                calls: Mutex::new(0),
                fail_on: Vec::new(),
                panic_on,
            }
        }
    }

    #[async_trait]
    impl CaptionModel for ScriptedModel {
        async fn complete(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, LlmError> {
            let call_index = {
                let mut calls = self.calls.lock().expect("lock");
                let index = *calls;
                *calls += 1;
                index
            };

            if self.panic_on.contains(&call_index) {
                panic!("scripted panic on call {}", call_index);
            }
            if self.fail_on.contains(&call_index) {
                Err(LlmError::RequestFailed("simulated outage".to_string()))
            } else {
                Ok(format!("generated-{}", call_index))
            }
        }
    }

    fn record(index: usize, caption: Option<&str>) -> SourceRecord {
        SourceRecord {
            index,
            identifier: Value::from(index),
            caption: caption.map(|c| c.to_string()),
        }
    }

    fn orchestrator(model: ScriptedModel, cap: Option<usize>) -> BatchOrchestrator {
        BatchOrchestrator::new(
            Arc::new(model),
            PromptLibrary::default(),
            GenerationParams::default(),
            cap,
        )
    }

    #[tokio::test]
    async fn test_one_result_per_record_in_order() {
        let records = vec![record(0, Some("first")), record(1, Some("second"))];
        let results = orchestrator(ScriptedModel::new(vec![]), None)
            .run(&records)
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].identifier, Value::from(0));
        assert_eq!(results[1].identifier, Value::from(1));
        assert_eq!(results[0].ground_truth, "first");
        // Five calls per record, strictly sequential.
        assert_eq!(
            results[0].variant(HallucinationKind::Irrelevant),
            "generated-4"
        );
        assert_eq!(results[1].variant(HallucinationKind::Object), "generated-5");
    }

    #[tokio::test]
    async fn test_empty_caption_skipped() {
        let records = vec![
            record(0, Some("ok")),
            record(1, Some("")),
            record(2, None),
            record(3, Some("also ok")),
        ];
        let results = orchestrator(ScriptedModel::new(vec![]), None)
            .run(&records)
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].identifier, Value::from(0));
        assert_eq!(results[1].identifier, Value::from(3));
    }

    #[tokio::test]
    async fn test_single_call_failure_is_isolated() {
        // Fail only the second variant of the first record.
        let records = vec![record(0, Some("a")), record(1, Some("b"))];
        let results = orchestrator(ScriptedModel::new(vec![1]), None)
            .run(&records)
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].variant(HallucinationKind::Attribute),
            ERROR_SENTINEL
        );
        assert_eq!(results[0].variant(HallucinationKind::Object), "generated-0");
        assert_eq!(results[0].variant(HallucinationKind::Scene), "generated-3");
        let message = results[0].error_message.as_deref().expect("error message");
        assert!(message.contains("Attribute"));
        // Second record untouched.
        assert!(results[1].error_message.is_none());
    }

    #[tokio::test]
    async fn test_all_calls_failing_yields_sentinel_record() {
        let records = vec![record(0, Some("caption"))];
        let results = orchestrator(ScriptedModel::new((0..5).collect()), None)
            .run(&records)
            .await;

        assert_eq!(results.len(), 1);
        for kind in HallucinationKind::ALL {
            assert_eq!(results[0].variant(kind), ERROR_SENTINEL);
        }
        assert!(!results[0]
            .error_message
            .as_deref()
            .unwrap_or_default()
            .is_empty());
    }

    #[tokio::test]
    async fn test_panicking_record_is_degraded_not_fatal() {
        // Panic during the first record's third variant; second record runs.
        let records = vec![record(0, Some("a")), record(1, Some("b"))];
        let results = orchestrator(ScriptedModel::panicking(vec![2]), None)
            .run(&records)
            .await;

        assert_eq!(results.len(), 2);
        for kind in HallucinationKind::ALL {
            assert_eq!(results[0].variant(kind), PROCESSING_ERROR);
        }
        assert!(results[0].error_message.is_some());
        assert!(results[1].error_message.is_none());
        assert_eq!(results[1].variant(HallucinationKind::Irrelevant), "generated-7");
    }

    #[tokio::test]
    async fn test_sample_cap_limits_to_first_records() {
        let records: Vec<SourceRecord> = (0..5).map(|i| record(i, Some("caption"))).collect();
        let results = orchestrator(ScriptedModel::new(vec![]), Some(1))
            .run(&records)
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].identifier, Value::from(0));
    }
}
