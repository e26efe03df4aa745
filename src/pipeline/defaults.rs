use std::path::Path;

use crate::alignment::extraction::extract_segments_from_str;
use crate::alignment::matching::longest_common_substring;
use crate::alignment::normalize::collapse_whitespace;
use crate::error::ResyncError;
use crate::pipeline::traits::{SegmentExtractor, SubstringMatcher, TextNormalizer, TextStore};
use crate::types::{ExtractedSubtitles, SubstringMatch};

pub struct WhitespaceCollapser;

impl TextNormalizer for WhitespaceCollapser {
    fn normalize(&self, text: &str) -> String {
        collapse_whitespace(text)
    }
}

pub struct SrtSegmentExtractor;

impl SegmentExtractor for SrtSegmentExtractor {
    fn extract(&self, subtitle_text: &str) -> ExtractedSubtitles {
        extract_segments_from_str(subtitle_text)
    }
}

pub struct LongestCommonSubstringMatcher;

impl SubstringMatcher for LongestCommonSubstringMatcher {
    fn longest_match(&self, reference: &[char], segment: &[char]) -> SubstringMatch {
        longest_common_substring(reference, segment)
    }
}

/// Plain filesystem store. Writes are not atomic.
pub struct FsTextStore;

impl TextStore for FsTextStore {
    fn read_text(&self, path: &Path) -> Result<String, ResyncError> {
        std::fs::read_to_string(path).map_err(|e| ResyncError::io("reading", path, e))
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), ResyncError> {
        std::fs::write(path, contents).map_err(|e| ResyncError::io("writing", path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), ResyncError> {
        let bytes = std::fs::read(from).map_err(|e| ResyncError::io("reading", from, e))?;
        std::fs::write(to, bytes).map_err(|e| ResyncError::io("writing", to, e))
    }
}
