//! Result records produced by the orchestrator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompts::HallucinationKind;

/// Fixed question string attached to every result record.
pub const FIXED_QUESTION: &str = "Please describe the image in detail.";

/// Sentinel filling all five variant fields of a degraded record.
pub const PROCESSING_ERROR: &str = "[Processing Error]";

/// One generated record: five caption variants for a single source record.
///
/// Exactly five variant fields, each either model-generated text or a
/// sentinel. Never mutated after creation; appended in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord {
    /// Identifier carried over from the source record.
    pub identifier: Value,
    /// Fixed question string.
    pub question: String,
    /// Original ground-truth caption.
    pub ground_truth: String,
    pub object_hallucination: String,
    pub attribute_hallucination: String,
    pub relationship_hallucination: String,
    pub scene_hallucination: String,
    pub irrelevant_hallucination: String,
    /// Joined error texts when one or more variant calls failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ResultRecord {
    /// Creates a record with all five variant fields set to the same text.
    pub fn uniform(identifier: Value, ground_truth: String, text: &str) -> Self {
        Self {
            identifier,
            question: FIXED_QUESTION.to_string(),
            ground_truth,
            object_hallucination: text.to_string(),
            attribute_hallucination: text.to_string(),
            relationship_hallucination: text.to_string(),
            scene_hallucination: text.to_string(),
            irrelevant_hallucination: text.to_string(),
            error_message: None,
        }
    }

    /// The variant text for a given kind.
    pub fn variant(&self, kind: HallucinationKind) -> &str {
        match kind {
            HallucinationKind::Object => &self.object_hallucination,
            HallucinationKind::Attribute => &self.attribute_hallucination,
            HallucinationKind::Relationship => &self.relationship_hallucination,
            HallucinationKind::Scene => &self.scene_hallucination,
            HallucinationKind::Irrelevant => &self.irrelevant_hallucination,
        }
    }

    /// Sets the variant text for a given kind.
    pub fn set_variant(&mut self, kind: HallucinationKind, text: String) {
        match kind {
            HallucinationKind::Object => self.object_hallucination = text,
            HallucinationKind::Attribute => self.attribute_hallucination = text,
            HallucinationKind::Relationship => self.relationship_hallucination = text,
            HallucinationKind::Scene => self.scene_hallucination = text,
            HallucinationKind::Irrelevant => self.irrelevant_hallucination = text,
        }
    }
}
