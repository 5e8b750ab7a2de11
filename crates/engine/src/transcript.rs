//! NDJSON session transcript.
//!
//! One JSON object per line, appended to the file named by `BOWLING_LOG_PATH`.
//! Write failures disable the transcript instead of interrupting play.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::reply::Reply;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRecord {
    pub kind: String,
    pub text: String,
}

impl From<&Reply> for ReplyRecord {
    fn from(reply: &Reply) -> Self {
        Self {
            kind: reply.kind().to_string(),
            text: reply.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub ts_ms: u64,
    /// Command word, or `"pins"` for the line typed at the roll prompt.
    pub command: String,
    pub input: String,
    pub replies: Vec<ReplyRecord>,
    /// Game state after the command, if a game exists.
    pub game: Option<GameSnapshot>,
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

pub struct Transcript {
    out: Option<Box<dyn Write + Send>>,
    buf: Vec<u8>,
}

impl Transcript {
    /// Open (or create) a transcript file in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open transcript {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Transcript over any writer (used by tests).
    pub fn from_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn is_active(&self) -> bool {
        self.out.is_some()
    }

    pub fn write(&mut self, record: &TranscriptRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, record) {
            log::warn!("transcript record not serialized: {e}");
            return;
        }
        self.buf.push(b'\n');

        let result = out.write_all(&self.buf).and_then(|_| out.flush());
        if let Err(e) = result {
            eprintln!("[Session] transcript disabled after write error: {e}");
            self.out = None;
        }
    }
}
