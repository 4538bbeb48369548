//! Streamed transcript accumulation.
//!
//! Upstream responses arrive as incremental text chunks. The accumulator
//! collects them and, on finalization, strips the inline `<ref>…</ref>`
//! citation markup the retrieval backend embeds in the text.

use regex::Regex;
use std::sync::OnceLock;

fn ref_markup() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<ref>.*?</ref>").expect("valid ref markup pattern"))
}

/// A finalized transcript: the raw streamed text and the cleaned rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// The text exactly as streamed, citation markup included.
    pub raw: String,
    /// The text with `<ref>…</ref>` spans removed.
    pub cleaned: String,
}

/// Accumulates incremental streamed chunks into a transcript.
///
/// # Example
///
/// ```
/// use leave_engine::session::StreamAccumulator;
///
/// let mut acc = StreamAccumulator::new();
/// acc.push_chunk("Annual leave is covered in ");
/// acc.push_chunk("<ref>[1]</ref>the handbook.");
///
/// let transcript = acc.finalize();
/// assert_eq!(transcript.cleaned, "Annual leave is covered in the handbook.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamAccumulator {
    buffer: String,
}

impl StreamAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a streamed chunk.
    pub fn push_chunk(&mut self, chunk: &str) {
        self.buffer.push_str(chunk);
    }

    /// Returns the text accumulated so far, uncleaned.
    ///
    /// Used to render the in-progress message while the stream is open.
    pub fn as_partial(&self) -> &str {
        &self.buffer
    }

    /// Returns true when nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the accumulator and returns the finalized transcript.
    pub fn finalize(self) -> Transcript {
        let cleaned = ref_markup().replace_all(&self.buffer, "").into_owned();
        Transcript {
            raw: self.buffer,
            cleaned,
        }
    }
}
