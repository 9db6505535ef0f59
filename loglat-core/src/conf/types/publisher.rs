use crate::publish::{CircuitBreakerParams, PublishSettings, ReadingFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9200/frontend3/log/";

/// Indexing endpoint settings. Only used when a region id is given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub queue_capacity: usize,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,

    /// Whitespace field holding the date, joined with the time as `dateTtime`.
    pub date_field_index: usize,
    pub time_field_index: usize,

    pub circuit_breaker: CircuitBreakerConfig,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 5_000,
            queue_capacity: 1_024,
            max_retries: 2,
            retry_backoff_ms: 100,
            date_field_index: 3,
            time_field_index: 4,
            circuit_breaker: CircuitBreakerConfig::default(),
        }
    }
}

impl PublisherConfig {
    pub fn settings(&self) -> PublishSettings {
        PublishSettings {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
            queue_capacity: self.queue_capacity,
            max_retries: self.max_retries,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
            circuit: self.circuit_breaker.params(),
        }
    }

    pub fn reading_format(&self, region_id: impl Into<String>) -> ReadingFormat {
        ReadingFormat {
            region_id: region_id.into(),
            date_field_index: self.date_field_index,
            time_field_index: self.time_field_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub open_duration_ms: u64,
    pub half_open_max_requests: u32,
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        let p = CircuitBreakerParams::default();
        Self {
            failure_threshold: p.failure_threshold,
            open_duration_ms: p.open_duration.as_millis() as u64,
            half_open_max_requests: p.half_open_max_requests,
            success_threshold: p.success_threshold,
        }
    }
}

impl CircuitBreakerConfig {
    pub fn params(&self) -> CircuitBreakerParams {
        CircuitBreakerParams {
            failure_threshold: self.failure_threshold,
            open_duration: Duration::from_millis(self.open_duration_ms),
            half_open_max_requests: self.half_open_max_requests,
            success_threshold: self.success_threshold,
        }
    }
}
