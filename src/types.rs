use serde::Serialize;

/// One subtitle record as read from the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub index: u64,
    /// Opaque range token, e.g. `00:00:01,000 --> 00:00:03,500`.
    pub timestamp: String,
    pub text: String,
}

/// A segment whose text has been replaced by the matched reference span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedBlock {
    pub index: u64,
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingTimestamp,
    MissingText,
    MissingTimestampAndText,
    /// Timestamp or text lines seen before any index line.
    MissingIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedSegment {
    pub index: Option<u64>,
    /// 1-based line where the dropped record started.
    pub line: usize,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSubtitles {
    pub segments: Vec<Segment>,
    pub dropped: Vec<DroppedSegment>,
}

/// Per-segment result of alignment. Offsets are character offsets into the
/// normalized reference text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SegmentOutcome {
    Matched {
        index: u64,
        reference_start: usize,
        /// Exclusive end of the matched span, before punctuation carry-over.
        reference_end: usize,
        matched_chars: usize,
        segment_chars: usize,
        exact: bool,
        carried_punctuation: Option<char>,
        /// Non-whitespace characters the separator advance consumed without
        /// emitting them.
        lost_chars: String,
        cursor_after: usize,
    },
    Unmatched {
        index: u64,
        cursor: usize,
    },
}

impl SegmentOutcome {
    pub fn index(&self) -> u64 {
        match self {
            Self::Matched { index, .. } | Self::Unmatched { index, .. } => *index,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// True when the separator advance swallowed reference text.
    pub fn has_flagged_skip(&self) -> bool {
        matches!(self, Self::Matched { lost_chars, .. } if !lost_chars.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentOutput {
    pub blocks: Vec<AlignedBlock>,
    pub outcomes: Vec<SegmentOutcome>,
    /// Final cursor position; may point one past the end of the reference.
    pub cursor: usize,
}

/// Contiguous run shared by two character sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Offset into the searched-in sequence (the reference suffix).
    pub a_start: usize,
    /// Offset into the searched-for sequence (the segment text).
    pub b_start: usize,
    pub size: usize,
}
