use crate::alignment::greedy::align_segments_with;
use crate::alignment::serialize::render_blocks;
use crate::config::{AlignerConfig, ResyncJob};
use crate::error::ResyncError;
use crate::pipeline::traits::{SegmentExtractor, SubstringMatcher, TextNormalizer, TextStore};
use crate::types::{AlignmentOutput, ExtractedSubtitles, Segment};

pub struct SubtitleResyncer {
    config: AlignerConfig,
    normalizer: Box<dyn TextNormalizer>,
    extractor: Box<dyn SegmentExtractor>,
    matcher: Box<dyn SubstringMatcher>,
    store: Box<dyn TextStore>,
}

pub(crate) struct SubtitleResyncerParts {
    pub config: AlignerConfig,
    pub normalizer: Box<dyn TextNormalizer>,
    pub extractor: Box<dyn SegmentExtractor>,
    pub matcher: Box<dyn SubstringMatcher>,
    pub store: Box<dyn TextStore>,
}

/// Everything one [`SubtitleResyncer::run`] produced, for reporting.
#[derive(Debug, Clone)]
pub struct ResyncRun {
    pub extracted: ExtractedSubtitles,
    pub alignment: AlignmentOutput,
    pub rendered: String,
    /// Length of the normalized reference in characters.
    pub reference_char_count: usize,
}

impl SubtitleResyncer {
    pub(crate) fn from_parts(parts: SubtitleResyncerParts) -> Self {
        Self {
            config: parts.config,
            normalizer: parts.normalizer,
            extractor: parts.extractor,
            matcher: parts.matcher,
            store: parts.store,
        }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Normalizes `reference` and aligns `segments` onto it. No I/O.
    pub fn align(&self, reference: &str, segments: &[Segment]) -> AlignmentOutput {
        let normalized = self.normalizer.normalize(reference);
        self.align_normalized(&normalized, segments)
    }

    fn align_normalized(&self, normalized: &str, segments: &[Segment]) -> AlignmentOutput {
        align_segments_with(normalized, segments, &self.config, |reference, segment| {
            self.matcher.longest_match(reference, segment)
        })
    }

    /// Reads both inputs, writes the aligned text, then copies it verbatim
    /// to the subtitle output path. Any I/O failure aborts the run.
    pub fn run(&self, job: &ResyncJob) -> Result<ResyncRun, ResyncError> {
        let reference = self.store.read_text(&job.original_text_path)?;
        let subtitle_text = self.store.read_text(&job.srt_path)?;

        let extracted = self.extractor.extract(&subtitle_text);
        let normalized = self.normalizer.normalize(&reference);
        let reference_char_count = normalized.chars().count();
        let alignment = self.align_normalized(&normalized, &extracted.segments);
        let rendered = render_blocks(&alignment.blocks);

        self.store.write_text(&job.output_txt_path, &rendered)?;
        self.store.copy(&job.output_txt_path, &job.output_srt_path)?;

        let unmatched = alignment.outcomes.len() - alignment.blocks.len();
        if unmatched > 0 || !extracted.dropped.is_empty() {
            tracing::warn!(
                dropped = extracted.dropped.len(),
                unmatched,
                "some subtitle segments are missing from the output"
            );
        }
        tracing::info!(
            segments = extracted.segments.len(),
            written = alignment.blocks.len(),
            reference_chars = reference_char_count,
            "resync complete"
        );

        Ok(ResyncRun {
            extracted,
            alignment,
            rendered,
            reference_char_count,
        })
    }
}
