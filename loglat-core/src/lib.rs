pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod error;
pub mod extract;
pub mod filter;
pub mod logging;
pub mod percentile;
pub mod pipeline;
pub mod publish;
pub mod report;
pub mod scan;
pub mod verbs;

pub use error::AnalyzeError;
