//! CLI entrypoint for feedback-client
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use feedback_application::{GenerateResponsesUseCase, SubmitUploadUseCase, SuggestionOutcome};
use feedback_domain::{AnalysisType, UploadFile};
use feedback_infrastructure::{ConfigLoader, FileConfig, HttpFeedbackGateway};
use feedback_presentation::{
    Cli, Command, OutputFormat, ReviewExtractor, ReviewSource, TerminalSuggestionView,
    TerminalUploadView,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    info!("Using feedback service at {}", base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpFeedbackGateway::with_config(
        &base_url,
        &config.endpoints,
        config.server.timeout(),
    )?);

    let succeeded = match cli.command {
        Some(Command::Analyze {
            file,
            analysis_type,
        }) => run_analyze(gateway, &config, file.as_deref(), &analysis_type, cli.quiet).await?,
        Some(Command::Suggest {
            page,
            review,
            format,
        }) => run_suggest(gateway, &config, page, review, format, cli.quiet).await?,
        None => bail!("No command given. Use --help to see available commands."),
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_analyze(
    gateway: Arc<HttpFeedbackGateway>,
    config: &FileConfig,
    path: Option<&Path>,
    analysis_type: &str,
    quiet: bool,
) -> Result<bool> {
    let analysis_type: AnalysisType = analysis_type.parse()?;
    if !analysis_type.is_known() {
        warn!(
            "Analysis type '{}' is not one of {:?}; sending it anyway",
            analysis_type,
            AnalysisType::known()
        );
    }

    let file = match path {
        Some(path) => Some(read_upload_file(path).await?),
        None => None,
    };

    let origin = gateway.results_url().origin().ascii_serialization();
    let view = TerminalUploadView::new(file, analysis_type)
        .with_base_url(origin)
        .with_progress(!quiet);

    let use_case = SubmitUploadUseCase::new(gateway).with_endpoints(config.endpoints.clone());
    let outcome = use_case.execute(&view).await?;

    Ok(outcome.is_accepted())
}

async fn run_suggest(
    gateway: Arc<HttpFeedbackGateway>,
    config: &FileConfig,
    page: Option<PathBuf>,
    reviews: Vec<String>,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<bool> {
    let mut sources = Vec::new();

    if let Some(path) = page {
        if !path.exists() {
            bail!("Results page not found: {}", path.display());
        }
        let extractor = ReviewExtractor::new(
            &config.page.negative_review_selector,
            &config.page.review_text_selector,
        )?;
        sources.push(ReviewSource::Page { path, extractor });
    }

    if !reviews.is_empty() {
        sources.push(ReviewSource::Texts(reviews));
    }

    let format = format
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let view = TerminalSuggestionView::new(sources, format).with_progress(!quiet);
    let use_case = GenerateResponsesUseCase::new(gateway);
    let outcome = use_case.execute(&view).await?;

    Ok(matches!(outcome, SuggestionOutcome::Rendered(_)))
}

async fn read_upload_file(path: &Path) -> Result<UploadFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Not a file: {}", path.display()))?;

    let mut file = UploadFile::new(file_name, bytes)?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("csv") => file = file.with_mime("text/csv"),
        Some("txt") => file = file.with_mime("text/plain"),
        _ => {}
    }

    Ok(file)
}
