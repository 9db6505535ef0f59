mod analyzer;
mod publisher;

pub use analyzer::*;
pub use publisher::*;

use serde::{Deserialize, Serialize};

/// Top-level configuration file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoglatConfig {
    pub analyzer: AnalyzerConfig,
    pub publisher: PublisherConfig,
}
