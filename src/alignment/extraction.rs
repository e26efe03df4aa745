use crate::types::{DropReason, DroppedSegment, ExtractedSubtitles, Segment};

const TIMESTAMP_MARKER: &str = "-->";
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Default)]
struct PendingSegment {
    index: Option<u64>,
    /// 1-based line where the record started; 0 until text arrives for the
    /// record preceding the first index line.
    line: usize,
    text: Vec<String>,
}

impl PendingSegment {
    fn starting_at(index: u64, line: usize) -> Self {
        Self {
            index: Some(index),
            line,
            ..Self::default()
        }
    }

    fn touch(&mut self, line: usize) {
        if self.line == 0 {
            self.line = line;
        }
    }
}

/// Splits SRT-like lines into segments.
///
/// An ASCII digit-only line opens a new record and any non-empty line
/// without `-->` is text of the open record. A `-->` line sets the current
/// timestamp, which stays in effect across index lines until the next
/// `-->` line replaces it. A record without text, or closed before any
/// timestamp was seen, is dropped and reported in
/// [`ExtractedSubtitles::dropped`]; nothing here is an error.
pub fn extract_segments<'a, I>(lines: I) -> ExtractedSubtitles
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = ExtractedSubtitles::default();
    let mut pending = PendingSegment::default();
    let mut timestamp: Option<String> = None;

    for (line_idx, raw_line) in lines.into_iter().enumerate() {
        let line_no = line_idx + 1;
        let raw_line = if line_idx == 0 {
            raw_line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw_line)
        } else {
            raw_line
        };
        let line = raw_line.trim();

        if let Some(index) = parse_index(line) {
            let next = PendingSegment::starting_at(index, line_no);
            finalize(
                std::mem::replace(&mut pending, next),
                timestamp.as_deref(),
                &mut out,
            );
        } else if line.contains(TIMESTAMP_MARKER) {
            timestamp = Some(line.to_string());
        } else if !line.is_empty() {
            pending.touch(line_no);
            pending.text.push(line.to_string());
        }
    }
    finalize(pending, timestamp.as_deref(), &mut out);

    tracing::debug!(
        segments = out.segments.len(),
        dropped = out.dropped.len(),
        "extracted subtitle segments"
    );
    out
}

pub fn extract_segments_from_str(content: &str) -> ExtractedSubtitles {
    extract_segments(split_lines(content))
}

/// Splits on `\n`, `\r\n` and bare `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(|c: char| c == '\r' || c == '\n') else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
        Some(line)
    })
}

/// Text-only view of a subtitle file: every trimmed line that is neither an
/// index nor a timestamp, blank lines included.
pub fn subtitle_text_lines(content: &str) -> Vec<String> {
    split_lines(content)
        .enumerate()
        .map(|(line_idx, raw_line)| {
            let raw_line = if line_idx == 0 {
                raw_line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw_line)
            } else {
                raw_line
            };
            raw_line.trim()
        })
        .filter(|line| !line.contains(TIMESTAMP_MARKER) && !is_digit_line(line))
        .map(str::to_string)
        .collect()
}

fn is_digit_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(line: &str) -> Option<u64> {
    if !is_digit_line(line) {
        return None;
    }
    line.parse().ok()
}

fn finalize(pending: PendingSegment, timestamp: Option<&str>, out: &mut ExtractedSubtitles) {
    let PendingSegment { index, line, text } = pending;

    let Some(index) = index else {
        if !text.is_empty() {
            tracing::warn!(line, "subtitle text before the first index line dropped");
            out.dropped.push(DroppedSegment {
                index: None,
                line,
                reason: DropReason::MissingIndex,
            });
        }
        return;
    };

    let reason = match (timestamp, text.is_empty()) {
        (Some(timestamp), false) => {
            out.segments.push(Segment {
                index,
                timestamp: timestamp.to_string(),
                text: text.join(" "),
            });
            return;
        }
        (Some(_), true) => DropReason::MissingText,
        (None, false) => DropReason::MissingTimestamp,
        (None, true) => DropReason::MissingTimestampAndText,
    };
    tracing::warn!(index, line, ?reason, "incomplete subtitle segment dropped");
    out.dropped.push(DroppedSegment {
        index: Some(index),
        line,
        reason,
    });
}
