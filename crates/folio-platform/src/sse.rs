//! Incremental server-sent-events framing.
//!
//! Bytes arrive in arbitrary slices (an event, or even a UTF-8 sequence, may
//! be split across reads), so the decoder buffers raw bytes and only decodes
//! complete events.

use folio_types::{FolioError, Result};

#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk; returns the `data` payload of every event it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<String>> {
        self.buf.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some((end, sep_len)) = find_boundary(&self.buf) {
            let block: Vec<u8> = self.buf.drain(..end + sep_len).take(end).collect();
            if let Some(data) = parse_block(&block)? {
                events.push(data);
            }
        }
        Ok(events)
    }

    /// End of body: a trailing event without its blank line still counts.
    pub fn finish(&mut self) -> Result<Vec<String>> {
        let block = std::mem::take(&mut self.buf);
        if block.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }
        Ok(parse_block(&block)?.into_iter().collect())
    }
}

/// Earliest blank-line separator: (index where it starts, its length)
fn find_boundary(buf: &[u8]) -> Option<(usize, usize)> {
    let lf = find(buf, b"\n\n").map(|i| (i, 2));
    let crlf = find(buf, b"\r\n\r\n").map(|i| (i, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Collect the `data:` lines of one event; comments and other fields are skipped.
fn parse_block(block: &[u8]) -> Result<Option<String>> {
    let text = std::str::from_utf8(block)
        .map_err(|e| FolioError::Decode(format!("invalid UTF-8 in event stream: {}", e)))?;

    let mut data: Option<String> = None;
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        if field == "data" {
            match data.as_mut() {
                Some(d) => {
                    d.push('\n');
                    d.push_str(value);
                }
                None => data = Some(value.to_string()),
            }
        }
    }
    Ok(data)
}
