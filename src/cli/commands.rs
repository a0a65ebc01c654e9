//! CLI command definitions for hallu-forge.
//!
//! One-shot dataset generation: load a JSONL of ground-truth captions,
//! prompt the model five times per caption, write the combined JSONL and
//! the five per-type CSVs.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use crate::config::{
    ForgeConfig, GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
    DEFAULT_TEMPERATURE,
};
use crate::dataset::load_jsonl;
use crate::export;
use crate::llm::{CaptionModel, OpenAiClient, PlaceholderModel};
use crate::pipeline::BatchOrchestrator;
use crate::prompts::PromptLibrary;

/// Hallucinated-caption dataset generator.
#[derive(Parser)]
#[command(name = "hallu-forge")]
#[command(about = "Generate hallucinated caption variants for detection datasets")]
#[command(version)]
#[command(
    long_about = "hallu-forge corrupts ground-truth image captions along five fixed dimensions\n(object, attribute, relationship, scene, irrelevant) by prompting an\nOpenAI-compatible model, then writes one combined JSONL plus five per-type CSVs.\n\nExample usage:\n  hallu-forge generate --input captions.jsonl --max-samples 10"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run the full generation pipeline over a JSONL caption file.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Re-project an existing combined JSONL into the five per-type CSVs.
    Export(ExportArgs),
}

/// Arguments for `hallu-forge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the line-delimited JSON input file of ground-truth captions.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output directory for the combined JSONL and per-type CSVs.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Model identifier to use for generation.
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum tokens per generated variant.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Sampling temperature (0.0 - 2.0).
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Process only the first N input records (smoke testing).
    #[arg(short = 'n', long)]
    pub max_samples: Option<usize>,

    /// API key (can also be set via OPENAI_API_KEY env var).
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Run without a model client; every variant gets the placeholder text.
    #[arg(long)]
    pub offline: bool,

    /// Replace existing output files instead of failing on collision.
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for `hallu-forge export`.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to an existing combined JSONL file.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output directory for the per-type CSVs.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Replace existing CSV files instead of failing on collision.
    #[arg(long)]
    pub overwrite: bool,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before
/// running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate_command(args).await,
        Commands::Export(args) => run_export_command(args),
    }
}

async fn run_generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let params = GenerationParams {
        model: args.model,
        max_tokens: args.max_tokens,
        temperature: args.temperature,
    };

    let config = ForgeConfig::resolve(
        args.api_key,
        params,
        args.input,
        args.output,
        args.max_samples,
        args.overwrite,
        args.offline,
    )?;

    info!(
        model = %config.params.model,
        output = %config.output_dir.display(),
        "Starting hallucination generation process"
    );

    let model: Arc<dyn CaptionModel> = match &config.api_key {
        Some(key) => Arc::new(OpenAiClient::new(key.clone(), config.api_base.clone())),
        None => {
            warn!("Running in offline mode; all variants will be placeholder text");
            Arc::new(PlaceholderModel)
        }
    };

    let records = load_jsonl(&config.dataset_path)?;
    if records.is_empty() {
        warn!("Input file contains no records; nothing to do");
        return Ok(());
    }

    let orchestrator = BatchOrchestrator::new(
        model,
        PromptLibrary::default(),
        config.params.clone(),
        config.max_samples,
    );
    let results = orchestrator.run(&records).await;

    if results.is_empty() {
        warn!("No results were generated");
        return Ok(());
    }

    export::write_all(&results, &config.output_dir, config.overwrite)?;
    info!(results = results.len(), "Process finished");
    Ok(())
}

fn run_export_command(args: ExportArgs) -> anyhow::Result<()> {
    let results = export::read_combined(&args.input)?;
    if results.is_empty() {
        anyhow::bail!("No results found in {}", args.input.display());
    }

    std::fs::create_dir_all(&args.output)?;
    for kind in crate::prompts::HallucinationKind::ALL {
        let path = args.output.join(kind.csv_file_name());
        match export::csv::write_kind(&results, kind, &path, args.overwrite) {
            Ok(rows) => info!(kind = %kind, rows, path = %path.display(), "Saved per-type CSV"),
            Err(e) => warn!(kind = %kind, error = %e, "Skipping per-type CSV"),
        }
    }

    Ok(())
}
