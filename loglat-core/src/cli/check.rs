use crate::cli::analyze::{ConfigOverrides, effective_config};
use crate::extract::ExtractionPolicy;
use anyhow::Result;

/// Validate configuration and print the effective settings.
pub fn check(overrides: &ConfigOverrides) -> Result<()> {
    let validated = effective_config(overrides)?;
    let analyzer = &validated.config.analyzer;
    let publisher = &validated.config.publisher;

    println!("✔ Config loaded successfully");
    println!("✔ percentiles: {}", validated.percentiles);
    match analyzer.extraction {
        ExtractionPolicy::LastField => println!("✔ extraction: last field"),
        ExtractionPolicy::FieldIndex { index } => println!("✔ extraction: field {index}"),
    }
    println!("✔ max line length: {} bytes", analyzer.max_line_bytes);
    println!("✔ channel capacity: {}", analyzer.channel_capacity);
    println!(
        "✔ publisher: {} (timeout {}ms, {} retries, queue {})",
        publisher.endpoint, publisher.timeout_ms, publisher.max_retries, publisher.queue_capacity
    );

    Ok(())
}
