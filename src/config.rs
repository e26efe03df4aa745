use std::path::PathBuf;

/// Knobs of the greedy segment aligner. `Default` reproduces the reference
/// behavior exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignerConfig {
    /// Characters appended to a match when they directly follow it in the reference.
    pub carry_punctuation: String,
    /// Characters skipped after each match before the next segment is searched.
    pub separator_skip: usize,
}

impl AlignerConfig {
    pub const DEFAULT_CARRY_PUNCTUATION: &'static str = ",.!?";
    pub const DEFAULT_SEPARATOR_SKIP: usize = 1;

    pub(crate) fn carries(&self, c: char) -> bool {
        self.carry_punctuation.contains(c)
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            carry_punctuation: Self::DEFAULT_CARRY_PUNCTUATION.to_string(),
            separator_skip: Self::DEFAULT_SEPARATOR_SKIP,
        }
    }
}

/// Input and output locations of one resync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResyncJob {
    pub original_text_path: PathBuf,
    pub srt_path: PathBuf,
    pub output_txt_path: PathBuf,
    pub output_srt_path: PathBuf,
}
