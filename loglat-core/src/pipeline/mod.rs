//! Two-stage analysis pipeline.
//!
//! ```text
//! file
//!   LineScanner          (scanner thread)
//!   filter::matches      (scanner thread)
//!   bounded channel      (backpressure)
//!   Aggregate::ingest    (calling thread)
//!   percentile::compute
//!   RunSummary
//! ```

mod run;
mod types;


pub use run::run;
pub use types::*;
