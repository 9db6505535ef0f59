use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, stdin};
use std::path::Path;

/// Read buffer for the input file. Independent of the maximum line length,
/// which the scanner enforces on its own line buffer.
const READ_BUFFER_BYTES: usize = 128 * 1024;

/// Open a log file for scanning.
///
/// `-` reads stdin. Paths ending in `.gz` (any case) are decompressed on the fly.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    if path.to_str() == Some("-") {
        return Ok(Box::new(BufReader::with_capacity(READ_BUFFER_BYTES, stdin())));
    }

    let file = File::open(path)?;

    if is_gzip(path) {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(BufReader::with_capacity(READ_BUFFER_BYTES, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(READ_BUFFER_BYTES, file)))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}
