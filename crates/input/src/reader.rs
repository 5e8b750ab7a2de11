//! Buffered line reader for the command loop.

use std::io::{self, BufRead};

/// Reads one trimmed line at a time, reusing its buffer.
pub struct LineReader<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::with_capacity(256),
        }
    }

    /// Next line with surrounding whitespace removed, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }
}
