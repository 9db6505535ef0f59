mod analyze;
mod check;

pub use analyze::{AnalyzeArgs, ConfigOverrides, effective_config, run};
pub use check::check;
