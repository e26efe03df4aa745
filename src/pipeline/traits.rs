use std::path::Path;

use crate::error::ResyncError;
use crate::types::{ExtractedSubtitles, SubstringMatch};

pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

pub trait SegmentExtractor: Send + Sync {
    fn extract(&self, subtitle_text: &str) -> ExtractedSubtitles;
}

pub trait SubstringMatcher: Send + Sync {
    /// Longest run shared by `reference` and `segment`; ties must resolve to
    /// the smallest offset into `reference`.
    fn longest_match(&self, reference: &[char], segment: &[char]) -> SubstringMatch;
}

/// File boundary of the pipeline.
pub trait TextStore: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String, ResyncError>;

    /// Writes `contents` verbatim, replacing anything already at `path`.
    fn write_text(&self, path: &Path, contents: &str) -> Result<(), ResyncError>;

    /// Byte-for-byte copy.
    fn copy(&self, from: &Path, to: &Path) -> Result<(), ResyncError>;
}
