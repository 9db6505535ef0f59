use std::io::{self, BufRead};
use thiserror::Error;

pub const DEFAULT_MAX_LINE_BYTES: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("line {line} exceeds the maximum line length of {max} bytes")]
    LineTooLong { line: u64, max: usize },

    #[error("read failed at line {line}: {source}")]
    Io {
        line: u64,
        #[source]
        source: io::Error,
    },
}

/// Forward-only iterator over the lines of a reader.
///
/// Terminators (`\n`, `\r\n`) are stripped. The first error is yielded once
/// and then the scanner is exhausted.
pub struct LineScanner<R> {
    reader: R,
    max_line_bytes: usize,
    buf: Vec<u8>,
    line_no: u64,
    finished: bool,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R, max_line_bytes: usize) -> Self {
        Self {
            reader,
            max_line_bytes,
            buf: Vec::new(),
            line_no: 0,
            finished: false,
        }
    }

    /// Number of lines produced so far.
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    fn fail(&mut self, err: ScanError) -> Option<Result<String, ScanError>> {
        self.finished = true;
        self.buf.clear();
        Some(Err(err))
    }

    /// Buffered line length once a trailing `\r` is stripped.
    fn content_len(&self) -> usize {
        match self.buf.last() {
            Some(b'\r') => self.buf.len() - 1,
            _ => self.buf.len(),
        }
    }

    fn emit(&mut self) -> Option<Result<String, ScanError>> {
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        self.line_no += 1;

        let bytes = std::mem::take(&mut self.buf);
        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Some(Ok(line))
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (found_newline, used) = {
                let available = match self.reader.fill_buf() {
                    Ok(chunk) => chunk,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(source) => {
                        let line = self.line_no + 1;
                        return self.fail(ScanError::Io { line, source });
                    }
                };

                if available.is_empty() {
                    self.finished = true;
                    if self.buf.is_empty() {
                        return None;
                    }
                    return self.emit();
                }

                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => {
                        self.buf.extend_from_slice(&available[..i]);
                        (true, i + 1)
                    }
                    None => {
                        self.buf.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            };
            self.reader.consume(used);

            if self.content_len() > self.max_line_bytes {
                let line = self.line_no + 1;
                let max = self.max_line_bytes;
                return self.fail(ScanError::LineTooLong { line, max });
            }

            if found_newline {
                return self.emit();
            }
        }
    }
}
