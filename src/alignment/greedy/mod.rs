use crate::alignment::matching::longest_common_substring;
use crate::config::AlignerConfig;
use crate::types::{AlignedBlock, AlignmentOutput, Segment, SegmentOutcome, SubstringMatch};


/// Aligns `segments` onto `reference` with the default matcher.
///
/// `reference` is expected to be whitespace-normalized already.
pub fn align_segments(
    reference: &str,
    segments: &[Segment],
    config: &AlignerConfig,
) -> AlignmentOutput {
    align_segments_with(reference, segments, config, longest_common_substring)
}

/// Greedy forward-only alignment.
///
/// Each segment takes the longest run it shares with the unconsumed part of
/// the reference. The cursor then moves past that run plus
/// `config.separator_skip` characters and never moves back, so a segment
/// can never claim text an earlier segment already walked over.
///
/// The skip is applied even when it consumes something other than the
/// separating space (end of a word, punctuation that was not carried). Such
/// skips are kept as-is and surfaced through
/// [`SegmentOutcome::has_flagged_skip`].
pub fn align_segments_with<F>(
    reference: &str,
    segments: &[Segment],
    config: &AlignerConfig,
    find_match: F,
) -> AlignmentOutput
where
    F: Fn(&[char], &[char]) -> SubstringMatch,
{
    let reference: Vec<char> = reference.chars().collect();
    let mut output = AlignmentOutput {
        blocks: Vec::with_capacity(segments.len()),
        outcomes: Vec::with_capacity(segments.len()),
        cursor: 0,
    };
    let mut cursor = 0usize;

    for segment in segments {
        let remaining = reference.get(cursor..).unwrap_or(&[]);
        let segment_chars: Vec<char> = segment.text.chars().collect();
        let found = find_match(remaining, &segment_chars);

        if found.size == 0 {
            tracing::warn!(
                index = segment.index,
                cursor,
                "segment shares no text with the remaining reference; skipped"
            );
            output.outcomes.push(SegmentOutcome::Unmatched {
                index: segment.index,
                cursor,
            });
            continue;
        }

        let start = cursor + found.a_start;
        let end = start + found.size;
        let mut text: String = reference[start..end].iter().collect();

        let carried_punctuation = reference.get(end).copied().filter(|&c| config.carries(c));
        if let Some(c) = carried_punctuation {
            text.push(c);
        }

        let skip_end = end.saturating_add(config.separator_skip).min(reference.len());
        let lost_chars: String = reference
            .get(end..skip_end)
            .unwrap_or(&[])
            .iter()
            .copied()
            .skip(usize::from(carried_punctuation.is_some()))
            .filter(|c| !c.is_whitespace())
            .collect();
        if !lost_chars.is_empty() {
            tracing::warn!(
                index = segment.index,
                lost = %lost_chars,
                "cursor advance consumed reference text that no segment emitted"
            );
        }

        cursor = end.saturating_add(config.separator_skip);
        tracing::debug!(
            index = segment.index,
            start,
            end,
            cursor,
            matched = found.size,
            segment_len = segment_chars.len(),
            "segment aligned"
        );

        output.outcomes.push(SegmentOutcome::Matched {
            index: segment.index,
            reference_start: start,
            reference_end: end,
            matched_chars: found.size,
            segment_chars: segment_chars.len(),
            exact: found.size == segment_chars.len(),
            carried_punctuation,
            lost_chars,
            cursor_after: cursor,
        });
        output.blocks.push(AlignedBlock {
            index: segment.index,
            timestamp: segment.timestamp.clone(),
            text,
        });
    }

    output.cursor = cursor;
    output
}
