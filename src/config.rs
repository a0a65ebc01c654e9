//! Run configuration for the generation pipeline.
//!
//! Credentials come from the environment exactly once at startup; a missing
//! key is a fatal startup error unless offline mode is requested.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default OpenAI-compatible API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model used for caption corruption.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default maximum tokens per generated variant.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Default output directory for generated files.
pub const DEFAULT_OUTPUT_DIR: &str = "./generated_hallucinations";

/// Sampling parameters passed with every completion request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Model identifier sent to the API.
    pub model: String,
    /// Maximum number of tokens to generate per call.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Configuration for a full generation run.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// API key for the model service. `None` only in offline mode.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub api_base: String,
    /// Generation parameters applied to every call.
    pub params: GenerationParams,
    /// Path to the line-delimited JSON input file.
    pub dataset_path: PathBuf,
    /// Directory the combined JSONL and per-type CSVs are written to.
    pub output_dir: PathBuf,
    /// Optional cap on the number of source records processed.
    pub max_samples: Option<usize>,
    /// Replace existing output files instead of failing on collision.
    pub overwrite: bool,
    /// Run without a real model client; every variant gets the placeholder.
    pub offline: bool,
}

impl ForgeConfig {
    /// Builds a configuration from the values the CLI resolved.
    ///
    /// The key arrives from `--api-key` or the `OPENAI_API_KEY` environment
    /// variable, read once at startup; its absence is fatal unless `offline`
    /// is set. `OPENAI_API_BASE` optionally overrides the endpoint.
    pub fn resolve(
        api_key: Option<String>,
        params: GenerationParams,
        dataset_path: PathBuf,
        output_dir: PathBuf,
        max_samples: Option<usize>,
        overwrite: bool,
        offline: bool,
    ) -> Result<Self, ConfigError> {
        let api_key = match (api_key, offline) {
            (Some(key), _) => Some(key),
            (None, true) => None,
            (None, false) => {
                return Err(ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))
            }
        };

        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let config = Self {
            api_key,
            api_base,
            params,
            dataset_path,
            output_dir,
            max_samples,
            overwrite,
            offline,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.params.model.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "model identifier must not be empty".to_string(),
            ));
        }

        if self.params.max_tokens == 0 {
            return Err(ConfigError::ValidationFailed(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.params.temperature) {
            return Err(ConfigError::InvalidValue {
                key: "temperature".to_string(),
                message: format!("{} is outside the range 0.0-2.0", self.params.temperature),
            });
        }

        if let Some(0) = self.max_samples {
            return Err(ConfigError::ValidationFailed(
                "max_samples must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ForgeConfig {
        ForgeConfig {
            api_key: Some("sk-test".to_string()),
            api_base: DEFAULT_API_BASE.to_string(),
            params: GenerationParams::default(),
            dataset_path: PathBuf::from("input.jsonl"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_samples: None,
            overwrite: false,
            offline: false,
        }
    }

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.model, DEFAULT_MODEL);
        assert_eq!(params.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(params.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = base_config();
        config.params.model = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = base_config();
        config.params.temperature = 3.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_max_samples() {
        let mut config = base_config();
        config.max_samples = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_requires_key_when_online() {
        let result = ForgeConfig::resolve(
            None,
            GenerationParams::default(),
            PathBuf::from("input.jsonl"),
            PathBuf::from("out"),
            None,
            false,
            false,
        );
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_resolve_allows_missing_key_offline() {
        let config = ForgeConfig::resolve(
            None,
            GenerationParams::default(),
            PathBuf::from("input.jsonl"),
            PathBuf::from("out"),
            Some(1),
            false,
            true,
        )
        .expect("offline config should resolve");
        assert!(config.api_key.is_none());
        assert!(config.offline);
    }
}
