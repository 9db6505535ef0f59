mod circuit;
mod client;
mod queue;
mod reading;

#[cfg(test)]
mod tests;

pub use circuit::{CircuitBreaker, CircuitBreakerParams, CircuitState};
pub use client::{IndexClient, PublishError};
pub use queue::{PublishQueue, PublishSettings};
pub use reading::{LatencyReading, PublishStats, ReadingFormat, ReadingSink};
