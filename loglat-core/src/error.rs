use crate::publish::PublishError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start scanner thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("scanner thread panicked while reading {}", path.display())]
    ScannerPanicked { path: PathBuf },

    #[error("failed to start publisher")]
    Publish(#[from] PublishError),
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
