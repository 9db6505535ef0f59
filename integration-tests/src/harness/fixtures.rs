use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A log file in its own temporary directory, removed on drop.
pub struct LogFile {
    dir: TempDir,
    path: PathBuf,
}

impl LogFile {
    pub fn plain(name: &str, lines: &[&str]) -> Self {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, joined(lines)).expect("failed to write log file");
        Self { dir, path }
    }

    pub fn gzip(name: &str, lines: &[&str]) -> Self {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let file = File::create(&path).expect("failed to create log file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(joined(lines).as_bytes())
            .expect("failed to write gzip log");
        encoder.finish().expect("failed to finish gzip log");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a sibling file (e.g. a config) into the same directory.
    pub fn sibling(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write sibling file");
        path
    }
}

fn joined(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
