pub mod collector;
pub mod fixtures;
pub mod tracing;

pub use collector::{Collector, Received, dead_endpoint};
pub use fixtures::LogFile;
pub use self::tracing::{CapturedEvent, events_with, init_test_tracing};
