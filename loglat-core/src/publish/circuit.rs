use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitBreakerParams {
    pub failure_threshold: u32,
    pub open_duration: Duration,
    pub half_open_max_requests: u32,
    pub success_threshold: u32,
}

impl Default for CircuitBreakerParams {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            open_duration: Duration::from_secs(30),
            half_open_max_requests: 1,
            success_threshold: 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Closed { failures: u32 },
    Open { until: Instant },
    HalfOpen { trials: u32, successes: u32 },
}

impl Phase {
    fn state(self) -> CircuitState {
        match self {
            Phase::Closed { .. } => CircuitState::Closed,
            Phase::Open { .. } => CircuitState::Open,
            Phase::HalfOpen { .. } => CircuitState::HalfOpen,
        }
    }
}

/// Guards the indexing endpoint so a dead collector costs one timeout per
/// cooldown instead of one per reading.
///
/// Owned by the single publisher thread; one breaker per endpoint.
#[derive(Debug, Clone)]
pub struct CircuitBreaker {
    endpoint: String,
    params: CircuitBreakerParams,
    phase: Phase,
}

impl CircuitBreaker {
    pub fn new(endpoint: impl Into<String>, params: CircuitBreakerParams) -> Self {
        Self {
            endpoint: endpoint.into(),
            params,
            phase: Phase::Closed { failures: 0 },
        }
    }

    pub fn state(&self) -> CircuitState {
        self.phase.state()
    }

    /// Whether a post may go out now. While half-open, admits at most
    /// `half_open_max_requests` trial posts until their outcomes are recorded.
    pub fn allow_request(&mut self) -> bool {
        if let Phase::Open { until } = self.phase {
            if Instant::now() < until {
                return false;
            }
            self.enter(Phase::HalfOpen { trials: 0, successes: 0 }, "cooldown_expired");
        }

        match &mut self.phase {
            Phase::Closed { .. } => true,
            Phase::Open { .. } => false,
            Phase::HalfOpen { trials, .. } => {
                if *trials < self.params.half_open_max_requests {
                    *trials += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Feed back the outcome of a post admitted by `allow_request`.
    pub fn record(&mut self, success: bool) {
        let p = &self.params;
        let reopen = || Phase::Open {
            until: Instant::now() + p.open_duration,
        };

        let next = match (&mut self.phase, success) {
            (Phase::Closed { failures }, true) => {
                *failures = 0;
                None
            }
            (Phase::Closed { failures }, false) => {
                *failures = failures.saturating_add(1);
                (*failures >= p.failure_threshold)
                    .then(|| (reopen(), "failure_threshold_exceeded"))
            }
            (Phase::Open { .. }, _) => None,
            (Phase::HalfOpen { trials, successes }, true) => {
                *trials = trials.saturating_sub(1);
                *successes = successes.saturating_add(1);
                (*successes >= p.success_threshold)
                    .then_some((Phase::Closed { failures: 0 }, "success_threshold_reached"))
            }
            (Phase::HalfOpen { .. }, false) => Some((reopen(), "half_open_failure")),
        };

        if let Some((phase, reason)) = next {
            self.enter(phase, reason);
        }
    }

    fn enter(&mut self, next: Phase, reason: &'static str) {
        let from = self.phase.state();
        self.phase = next;

        info!(
            event = "circuit_transition",
            endpoint = %self.endpoint,
            from = ?from,
            to = ?next.state(),
            reason
        );
    }
}
