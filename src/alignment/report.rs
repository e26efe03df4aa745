use serde::Serialize;

use crate::error::ResyncError;
use crate::types::{AlignmentOutput, DroppedSegment, ExtractedSubtitles, SegmentOutcome};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct ResyncReport {
    pub schema_version: u32,
    pub meta: Meta,
    pub segments: Vec<SegmentOutcome>,
    pub dropped: Vec<DroppedSegment>,
    pub aggregates: AggregateReport,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub reference_path: String,
    pub subtitle_path: String,
    /// Length of the normalized reference in characters.
    pub reference_char_count: usize,
    pub segment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub matched_count: u32,
    pub unmatched_count: u32,
    pub dropped_count: u32,
    pub exact_match_count: u32,
    pub flagged_skip_count: u32,
    /// Mean of matched/segment characters over matched segments.
    pub mean_coverage: f32,
    pub reference_consumed_ratio: f32,
}

pub fn compute_report(
    meta: Meta,
    extracted: &ExtractedSubtitles,
    alignment: &AlignmentOutput,
) -> Result<ResyncReport, ResyncError> {
    let aggregates = aggregate_outcomes(
        &alignment.outcomes,
        extracted.dropped.len(),
        meta.reference_char_count,
        alignment.cursor,
    )?;

    let mut notes = Vec::new();
    if meta.reference_char_count == 0 {
        notes.push("empty_reference".to_string());
    }
    if extracted.segments.is_empty() {
        notes.push("no_segments_extracted".to_string());
    }
    if aggregates.unmatched_count > 0 {
        let indices = alignment
            .outcomes
            .iter()
            .filter(|outcome| !outcome.is_matched())
            .map(|outcome| outcome.index().to_string())
            .collect::<Vec<_>>()
            .join(",");
        notes.push(format!("unmatched_indices={indices}"));
    }
    if aggregates.flagged_skip_count > 0 {
        notes.push(format!(
            "separator_skip_lost_text={}",
            aggregates.flagged_skip_count
        ));
    }

    Ok(ResyncReport {
        schema_version: REPORT_SCHEMA_VERSION,
        meta,
        segments: alignment.outcomes.clone(),
        dropped: extracted.dropped.clone(),
        aggregates,
        notes,
    })
}

pub fn aggregate_outcomes(
    outcomes: &[SegmentOutcome],
    dropped_count: usize,
    reference_char_count: usize,
    cursor: usize,
) -> Result<AggregateReport, ResyncError> {
    let mut matched = 0usize;
    let mut exact = 0usize;
    let mut flagged = 0usize;
    let mut coverages = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        if outcome.has_flagged_skip() {
            flagged += 1;
        }
        let SegmentOutcome::Matched {
            matched_chars,
            segment_chars,
            exact: is_exact,
            ..
        } = outcome
        else {
            continue;
        };
        matched += 1;
        if *is_exact {
            exact += 1;
        }
        if *segment_chars > 0 {
            coverages.push(*matched_chars as f64 / *segment_chars as f64);
        }
    }

    let consumed_ratio = if reference_char_count == 0 {
        0.0
    } else {
        cursor.min(reference_char_count) as f64 / reference_char_count as f64
    };

    Ok(AggregateReport {
        matched_count: to_u32(matched),
        unmatched_count: to_u32(outcomes.len() - matched),
        dropped_count: to_u32(dropped_count),
        exact_match_count: to_u32(exact),
        flagged_skip_count: to_u32(flagged),
        mean_coverage: checked_f32(mean(&coverages), "mean_coverage")?,
        reference_consumed_ratio: checked_f32(consumed_ratio, "reference_consumed_ratio")?,
    })
}

pub fn to_json_pretty(report: &ResyncReport) -> Result<String, ResyncError> {
    serde_json::to_string_pretty(report).map_err(|e| ResyncError::json("serialize report", e))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn checked_f32(value: f64, metric_name: &str) -> Result<f32, ResyncError> {
    if !value.is_finite() {
        return Err(ResyncError::invalid_input(format!(
            "metric '{metric_name}' produced non-finite value: {value}"
        )));
    }
    Ok(value as f32)
}
