use crate::percentile::RankError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("invalid configuration:\n{}", render_issues(.issues))]
    Invalid { issues: Vec<ValidationIssue> },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// One semantic problem found while validating a parsed config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("analyzer.percentiles: {0}")]
    Percentiles(#[from] RankError),

    #[error("analyzer.channel_capacity must be greater than zero")]
    ZeroChannelCapacity,

    #[error("analyzer.max_line_bytes must be greater than zero")]
    ZeroMaxLineBytes,

    #[error("publisher.queue_capacity must be greater than zero")]
    ZeroQueueCapacity,

    #[error("publisher.endpoint '{endpoint}' is not an http(s) URL")]
    InvalidEndpoint { endpoint: String },

    #[error("publisher.circuit_breaker.{field} must be greater than zero")]
    ZeroCircuitSetting { field: &'static str },
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
