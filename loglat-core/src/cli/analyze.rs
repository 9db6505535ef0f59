use crate::conf::{ValidatedConfig, load_config_or_default, validate_config};
use crate::extract::ExtractionPolicy;
use crate::pipeline::{self, Publisher, RunSummary};
use crate::publish::PublishQueue;
use crate::report::render_summary;
use crate::verbs::VerbSet;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Path to an HCL config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Percentile ranks to report, e.g. "50,90,99"
    #[arg(long, value_delimiter = ',')]
    pub percentiles: Option<Vec<u32>>,

    /// Read the latency from this zero-based field instead of the last one
    #[arg(long)]
    pub field_index: Option<usize>,

    /// Longest accepted input line in bytes
    #[arg(long)]
    pub max_line_bytes: Option<usize>,

    /// Indexing endpoint for published readings
    #[arg(long)]
    pub publish_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Comma-separated substrings selecting lines, e.g. "GET,POST"
    pub verbs: String,

    /// Log file to scan ("-" for stdin, *.gz is decompressed)
    pub file: PathBuf,

    /// Region id attached to each reading; enables publishing
    pub region_id: Option<String>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Load the config file (if any), apply command-line overrides, validate.
pub fn effective_config(overrides: &ConfigOverrides) -> Result<ValidatedConfig> {
    let mut config = load_config_or_default(overrides.config.as_deref())?;

    if let Some(percentiles) = &overrides.percentiles {
        config.analyzer.percentiles = percentiles.clone();
    }
    if let Some(index) = overrides.field_index {
        config.analyzer.extraction = ExtractionPolicy::FieldIndex { index };
    }
    if let Some(max) = overrides.max_line_bytes {
        config.analyzer.max_line_bytes = max;
    }
    if let Some(url) = &overrides.publish_url {
        config.publisher.endpoint = url.clone();
    }

    Ok(validate_config(config)?)
}

/// Run one analysis and print the report to stdout.
pub fn run(args: AnalyzeArgs) -> Result<RunSummary> {
    let validated = effective_config(&args.overrides)?;
    let request = validated.analyze_request(&args.file, VerbSet::parse(&args.verbs));

    let publisher = match &args.region_id {
        Some(region) => {
            let cfg = &validated.config.publisher;
            let queue = PublishQueue::start(cfg.settings()).context("failed to start publisher")?;
            info!(endpoint = %cfg.endpoint, region = %region, "publishing readings");

            Some(Publisher {
                format: cfg.reading_format(region.as_str()),
                sink: Box::new(queue),
            })
        }
        None => None,
    };

    let summary = pipeline::run(&request, publisher)
        .with_context(|| format!("failed to analyze {}", args.file.display()))?;

    info!(
        readings = summary.result.count(),
        skipped = summary.skipped,
        "analysis complete"
    );
    print!("{}", render_summary(&summary));

    Ok(summary)
}
