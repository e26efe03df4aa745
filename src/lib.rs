pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use alignment::extraction::{extract_segments, extract_segments_from_str, subtitle_text_lines};
pub use alignment::greedy::{align_segments, align_segments_with};
pub use alignment::matching::longest_common_substring;
pub use alignment::normalize::collapse_whitespace;
pub use alignment::report::{compute_report, to_json_pretty, Meta, ResyncReport};
pub use alignment::serialize::{format_block, render_blocks};
pub use config::{AlignerConfig, ResyncJob};
pub use error::ResyncError;
pub use pipeline::builder::SubtitleResyncerBuilder;
pub use pipeline::runtime::{ResyncRun, SubtitleResyncer};
pub use pipeline::traits::{SegmentExtractor, SubstringMatcher, TextNormalizer, TextStore};
pub use types::{
    AlignedBlock, AlignmentOutput, DropReason, DroppedSegment, ExtractedSubtitles, Segment,
    SegmentOutcome, SubstringMatch,
};
