mod cli;

use anyhow::Context;
use cli::{Args, Command, DetailsArgs, ResolveArgs};
use purl_licenses::adapters::outbound::console::StderrProgressReporter;
use purl_licenses::adapters::outbound::filesystem::FileSystemReader;
use purl_licenses::adapters::outbound::network::{
    CachingComponentResolver, HttpComponentResolver, DEFAULT_TIMEOUT_SECS,
};
use purl_licenses::adapters::outbound::snapshot::SnapshotStore;
use purl_licenses::application::dto::{
    ComponentBatchRequest, ComponentRequest, DetailOptions, OutputFormat, ResolutionOptions,
};
use purl_licenses::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use purl_licenses::application::use_cases::LicenseEngine;
use purl_licenses::config::{self, ConfigFile};
use purl_licenses::license_resolution::domain::{LicenseDetailsOutcome, ResponseStatus};
use purl_licenses::license_resolution::services::SpdxRegistry;
use purl_licenses::ports::inbound::LicenseResolutionPort;
use purl_licenses::ports::outbound::{ComponentResolver, OutputPresenter, ResultFormatter};
use purl_licenses::shared::{EngineError, ExitCode, Result};
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Engine = LicenseEngine<Arc<dyn ComponentResolver>, Arc<SnapshotStore>>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    init_logging(args.verbose, config.log_level.as_deref());
    config::warn_unknown_fields(&config);

    // Fatal: nothing can be resolved without the license list
    let registry = Arc::new(SpdxRegistry::embedded()?);
    debug!(
        version = registry.license_list_version(),
        licenses = registry.len(),
        "SPDX license list loaded"
    );

    let format = output_format(&args, &config)?;
    let colored = format == OutputFormat::Text
        && args.output.is_none()
        && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(format, colored);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let mut detail_options = config.detail_options();
    let mut resolution_options = config.resolution_options()?;

    match &args.command {
        Command::Resolve(resolve) => {
            apply_resolve_overrides(&mut resolution_options, resolve)?;
            let requests = build_requests(resolve)?;
            let engine = build_engine(&args, &config, registry, resolution_options, detail_options)?;
            run_resolve(&engine, &requests, args.quiet, &*formatter, &*presenter).await
        }
        Command::Details(details) => {
            if details.no_osadl {
                detail_options.osadl_enrichment = false;
            }
            let engine = build_engine(&args, &config, registry, resolution_options, detail_options)?;
            run_details(&engine, details, &*formatter, &*presenter).await
        }
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

/// `RUST_LOG` wins over `-v`, which wins over the configured level
fn init_logging(verbose: u8, configured: Option<&str>) {
    let level = match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn output_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(value) => Ok(OutputFormat::from_str(value)
            .map_err(|details| EngineError::InvalidConfig { details })?),
        None => Ok(OutputFormat::default()),
    }
}

fn apply_resolve_overrides(options: &mut ResolutionOptions, args: &ResolveArgs) -> Result<()> {
    if let Some(concurrency) = args.concurrency {
        if concurrency == 0 {
            return Err(EngineError::invalid_input("concurrency", "must be greater than 0").into());
        }
        options.concurrency = concurrency;
    }
    if let Some(strategy) = args.merge_strategy {
        options.merge_strategy = strategy;
    }
    if !args.sources.is_empty() {
        options.sources = args.sources.clone();
    }
    Ok(())
}

fn build_requests(args: &ResolveArgs) -> Result<Vec<ComponentRequest>> {
    if let Some(path) = &args.input {
        let content = FileSystemReader::new().read_to_string(path, "batch file")?;
        let batch: ComponentBatchRequest = serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse batch file: {}\n\n💡 Hint: Expected {{\"components\": [{{\"purl\": \"...\", \"requirement\": \"...\"}}]}}",
                path.display()
            )
        })?;
        return Ok(batch.components);
    }

    Ok(args
        .purls
        .iter()
        .map(|purl| ComponentRequest::new(purl.clone(), args.requirement.clone()))
        .collect())
}

fn build_engine(
    args: &Args,
    config: &ConfigFile,
    registry: Arc<SpdxRegistry>,
    resolution_options: ResolutionOptions,
    detail_options: DetailOptions,
) -> Result<Engine> {
    let snapshot_path = args
        .snapshot
        .as_deref()
        .or(config.snapshot.as_deref())
        .ok_or_else(|| EngineError::InvalidConfig {
            details: "no license data snapshot configured.\n\n💡 Hint: Pass --snapshot <FILE> or set 'snapshot' in purl-licenses.config.yml".to_string(),
        })?;
    let store = Arc::new(SnapshotStore::load(snapshot_path)?);

    let resolver_url = args.resolver_url.as_deref().or(config.resolver_url());
    let resolver = build_resolver(resolver_url, config, &store)?;

    Ok(LicenseEngine::new(
        resolver,
        store,
        registry,
        resolution_options,
        detail_options,
    ))
}

fn build_resolver(
    url: Option<&str>,
    config: &ConfigFile,
    store: &Arc<SnapshotStore>,
) -> Result<Arc<dyn ComponentResolver>> {
    let Some(url) = url else {
        debug!("resolving component versions from the snapshot");
        let resolver: Arc<dyn ComponentResolver> = store.clone();
        return Ok(resolver);
    };

    let timeout = Duration::from_secs(config.resolver_timeout_secs().unwrap_or(DEFAULT_TIMEOUT_SECS));
    let http = HttpComponentResolver::new(url, timeout)?;
    info!(url, cache = config.resolver_cache(), "resolving component versions remotely");

    let resolver: Arc<dyn ComponentResolver> = if config.resolver_cache() {
        Arc::new(CachingComponentResolver::new(http))
    } else {
        Arc::new(http)
    };
    Ok(resolver)
}

async fn run_resolve(
    engine: &Engine,
    requests: &[ComponentRequest],
    quiet: bool,
    formatter: &dyn ResultFormatter,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let mut progress = StderrProgressReporter::new(!quiet);
    progress.start(&format!("🔍 Resolving {} component(s)...", requests.len()));

    let batch = match engine.resolve_batch(requests).await {
        Ok(batch) => batch,
        Err(e) => {
            progress.clear();
            return Err(e);
        }
    };
    progress.finish(&format!(
        "✅ Resolved {} of {} component(s)",
        batch.summary.resolved(),
        batch.summary.total
    ));

    presenter.present(&formatter.format_resolution(&batch)?)?;

    Ok(match batch.status {
        ResponseStatus::Failed => ExitCode::NotFound,
        _ => ExitCode::Success,
    })
}

async fn run_details(
    engine: &Engine,
    args: &DetailsArgs,
    formatter: &dyn ResultFormatter,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let outcome = engine.get_details(&args.license_id).await?;
    presenter.present(&formatter.format_details(&outcome)?)?;

    Ok(match outcome {
        LicenseDetailsOutcome::Found(_) => ExitCode::Success,
        LicenseDetailsOutcome::NotFound { .. } => ExitCode::NotFound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_args(purls: &[&str], requirement: Option<&str>) -> ResolveArgs {
        ResolveArgs {
            purls: purls.iter().map(|p| p.to_string()).collect(),
            requirement: requirement.map(str::to_string),
            input: None,
            concurrency: None,
            merge_strategy: None,
            sources: vec![],
        }
    }

    #[test]
    fn test_build_requests_from_purls() {
        let requests =
            build_requests(&resolve_args(&["pkg:npm/a", "pkg:npm/b"], Some("1.0"))).unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests
            .iter()
            .all(|r| r.requirement.as_deref() == Some("1.0")));
    }

    #[test]
    fn test_build_requests_from_input_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("batch.json");
        std::fs::write(
            &path,
            r#"{"components": [{"purl": "pkg:npm/a@1.0"}, {"purl": "pkg:npm/b", "requirement": "2.0"}]}"#,
        )
        .unwrap();

        let mut args = resolve_args(&[], None);
        args.input = Some(path);
        let requests = build_requests(&args).unwrap();

        assert_eq!(requests[0], ComponentRequest::new("pkg:npm/a@1.0", None));
        assert_eq!(requests[1].requirement.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_zero_concurrency_override_rejected() {
        let mut args = resolve_args(&["pkg:npm/a"], None);
        args.concurrency = Some(0);
        let mut options = ResolutionOptions::default();
        assert!(apply_resolve_overrides(&mut options, &args).is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let mut args = resolve_args(&["pkg:npm/a"], None);
        args.concurrency = Some(2);
        args.sources = vec![purl_licenses::license_resolution::domain::SourceId::ComponentDeclared];
        let mut options = ResolutionOptions::default();

        apply_resolve_overrides(&mut options, &args).unwrap();
        assert_eq!(options.concurrency, 2);
        assert_eq!(options.sources.len(), 1);
    }
}
