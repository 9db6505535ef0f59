use crate::conf::error::{ConfigError, ValidationIssue};
use crate::conf::types::LoglatConfig;
use crate::percentile::Percentiles;
use crate::pipeline::AnalyzeRequest;
use crate::verbs::VerbSet;
use std::path::PathBuf;

/// A config that passed validation, with its derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub config: LoglatConfig,
    pub percentiles: Percentiles,
}

impl ValidatedConfig {
    pub fn analyze_request(&self, input: impl Into<PathBuf>, verbs: VerbSet) -> AnalyzeRequest {
        let analyzer = &self.config.analyzer;
        AnalyzeRequest {
            input: input.into(),
            verbs,
            percentiles: self.percentiles.clone(),
            extraction: analyzer.extraction,
            max_line_bytes: analyzer.max_line_bytes,
            channel_capacity: analyzer.channel_capacity,
        }
    }
}

/// Check every setting and report all problems at once.
pub fn validate_config(config: LoglatConfig) -> Result<ValidatedConfig, ConfigError> {
    let mut issues = Vec::new();

    let analyzer = &config.analyzer;
    let percentiles = match Percentiles::new(analyzer.percentiles.iter().copied()) {
        Ok(p) => Some(p),
        Err(e) => {
            issues.push(ValidationIssue::from(e));
            None
        }
    };

    if analyzer.channel_capacity == 0 {
        issues.push(ValidationIssue::ZeroChannelCapacity);
    }
    if analyzer.max_line_bytes == 0 {
        issues.push(ValidationIssue::ZeroMaxLineBytes);
    }

    let publisher = &config.publisher;
    if publisher.queue_capacity == 0 {
        issues.push(ValidationIssue::ZeroQueueCapacity);
    }
    if !is_http_url(&publisher.endpoint) {
        issues.push(ValidationIssue::InvalidEndpoint {
            endpoint: publisher.endpoint.clone(),
        });
    }

    let cb = &publisher.circuit_breaker;
    for (field, value) in [
        ("failure_threshold", cb.failure_threshold),
        ("half_open_max_requests", cb.half_open_max_requests),
        ("success_threshold", cb.success_threshold),
    ] {
        if value == 0 {
            issues.push(ValidationIssue::ZeroCircuitSetting { field });
        }
    }

    match percentiles {
        Some(percentiles) if issues.is_empty() => Ok(ValidatedConfig {
            config,
            percentiles,
        }),
        _ => Err(ConfigError::Invalid { issues }),
    }
}

fn is_http_url(raw: &str) -> bool {
    reqwest::Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}
