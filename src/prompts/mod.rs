//! Prompt construction for the five caption-corruption categories.
//!
//! Each [`HallucinationKind`] maps 1:1 to a variant-specific instruction and
//! a hand-authored few-shot counterpart. Prompt assembly is pure string
//! interpolation in a fixed order, so the same caption always yields the
//! same prompt byte-for-byte.

pub mod few_shot;

pub use few_shot::EXAMPLE_GROUND_TRUTH;

/// Shared base instruction prepended to every prompt.
pub const BASE_INSTRUCTION: &str = "Rephrase the description slightly while keeping most original information intact. Add MULTIPLE (2-3) instances of ONLY the specific hallucination type mentioned below. Do NOT introduce any other types of hallucinations.";

/// The five fixed caption-corruption categories.
///
/// This set is closed: each variant maps to one prompt template, one result
/// field, and one per-type output file. No dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HallucinationKind {
    Object,
    Attribute,
    Relationship,
    Scene,
    Irrelevant,
}

impl HallucinationKind {
    /// All five kinds in canonical order.
    pub const ALL: [HallucinationKind; 5] = [
        HallucinationKind::Object,
        HallucinationKind::Attribute,
        HallucinationKind::Relationship,
        HallucinationKind::Scene,
        HallucinationKind::Irrelevant,
    ];

    /// Human-readable type tag used in the per-type CSV rows.
    pub fn type_name(&self) -> &'static str {
        match self {
            HallucinationKind::Object => "Object",
            HallucinationKind::Attribute => "Attribute",
            HallucinationKind::Relationship => "Relationship",
            HallucinationKind::Scene => "Scene",
            HallucinationKind::Irrelevant => "Irrelevant",
        }
    }

    /// Field name this kind occupies in a result record.
    pub fn result_field(&self) -> &'static str {
        match self {
            HallucinationKind::Object => "object_hallucination",
            HallucinationKind::Attribute => "attribute_hallucination",
            HallucinationKind::Relationship => "relationship_hallucination",
            HallucinationKind::Scene => "scene_hallucination",
            HallucinationKind::Irrelevant => "irrelevant_hallucination",
        }
    }

    /// File name of the per-type CSV export.
    pub fn csv_file_name(&self) -> String {
        format!("{}_hallucinations.csv", self.type_name().to_lowercase())
    }

    /// Phrase naming this kind inside the prompt template.
    fn prompt_label(&self) -> &'static str {
        match self {
            HallucinationKind::Object => "object",
            HallucinationKind::Attribute => "attribute",
            HallucinationKind::Relationship => "relationship",
            HallucinationKind::Scene => "scene",
            HallucinationKind::Irrelevant => "irrelevant",
        }
    }
}

impl std::fmt::Display for HallucinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One few-shot demonstration: variant instruction plus corrupted example.
#[derive(Debug, Clone)]
pub struct FewShotExample {
    /// Variant-specific instruction naming the one dimension to corrupt.
    pub instruction: String,
    /// Hand-authored corrupted counterpart of the shared example caption.
    pub corrupted: String,
}

/// Immutable prompt data built once at startup and passed explicitly.
///
/// Holds the base instruction, the shared ground-truth example and one
/// [`FewShotExample`] per kind. [`PromptLibrary::default`] carries the fixed
/// texts of the original tool.
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    base_instruction: String,
    example_ground_truth: String,
    object: FewShotExample,
    attribute: FewShotExample,
    relationship: FewShotExample,
    scene: FewShotExample,
    irrelevant: FewShotExample,
}

impl Default for PromptLibrary {
    fn default() -> Self {
        Self {
            base_instruction: BASE_INSTRUCTION.to_string(),
            example_ground_truth: few_shot::EXAMPLE_GROUND_TRUTH.to_string(),
            object: FewShotExample {
                instruction: few_shot::OBJECT_INSTRUCTION.to_string(),
                corrupted: few_shot::EXAMPLE_OBJECT_HALLUCINATION.to_string(),
            },
            attribute: FewShotExample {
                instruction: few_shot::ATTRIBUTE_INSTRUCTION.to_string(),
                corrupted: few_shot::EXAMPLE_ATTRIBUTE_HALLUCINATION.to_string(),
            },
            relationship: FewShotExample {
                instruction: few_shot::RELATIONSHIP_INSTRUCTION.to_string(),
                corrupted: few_shot::EXAMPLE_RELATIONSHIP_HALLUCINATION.to_string(),
            },
            scene: FewShotExample {
                instruction: few_shot::SCENE_INSTRUCTION.to_string(),
                corrupted: few_shot::EXAMPLE_SCENE_HALLUCINATION.to_string(),
            },
            irrelevant: FewShotExample {
                instruction: few_shot::IRRELEVANT_INSTRUCTION.to_string(),
                corrupted: few_shot::EXAMPLE_IRRELEVANT_HALLUCINATION.to_string(),
            },
        }
    }
}

impl PromptLibrary {
    /// The few-shot example pair for a given kind.
    pub fn example(&self, kind: HallucinationKind) -> &FewShotExample {
        match kind {
            HallucinationKind::Object => &self.object,
            HallucinationKind::Attribute => &self.attribute,
            HallucinationKind::Relationship => &self.relationship,
            HallucinationKind::Scene => &self.scene,
            HallucinationKind::Irrelevant => &self.irrelevant,
        }
    }

    /// Builds the full prompt for one kind and one ground-truth caption.
    ///
    /// Composition order is fixed: base instruction, variant instruction,
    /// few-shot pair, literal input caption.
    pub fn build_prompt(&self, kind: HallucinationKind, ground_truth: &str) -> String {
        let example = self.example(kind);
        let label = kind.prompt_label();
        format!(
            r#"{base}
Specific Instruction: {instruction}

Example:
Input Description: "{example_input}"
Rephrased description with ONLY multiple {label} hallucinations: "{example_output}"

---
Now, apply this to the following description:
Input Description: '{ground_truth}'
Rephrased description with ONLY multiple {label} hallucinations:"#,
            base = self.base_instruction,
            instruction = example.instruction,
            example_input = self.example_ground_truth,
            example_output = example.corrupted,
            label = label,
            ground_truth = ground_truth,
        )
    }
}
