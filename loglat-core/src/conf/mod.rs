mod error;
mod loader;
pub mod types;
mod validate;


pub use error::{ConfigError, ValidationIssue};
pub use loader::{load_config, load_config_or_default};
pub use types::LoglatConfig;
pub use validate::{ValidatedConfig, validate_config};
