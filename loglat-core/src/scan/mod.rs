mod input;
mod scanner;

#[cfg(test)]
mod tests;

pub use input::open_input;
pub use scanner::{DEFAULT_MAX_LINE_BYTES, LineScanner, ScanError};
