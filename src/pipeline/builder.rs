use crate::config::AlignerConfig;
use crate::error::ResyncError;
use crate::pipeline::defaults::{
    FsTextStore, LongestCommonSubstringMatcher, SrtSegmentExtractor, WhitespaceCollapser,
};
use crate::pipeline::runtime::{SubtitleResyncer, SubtitleResyncerParts};
use crate::pipeline::traits::{SegmentExtractor, SubstringMatcher, TextNormalizer, TextStore};

pub struct SubtitleResyncerBuilder {
    config: AlignerConfig,
    normalizer: Option<Box<dyn TextNormalizer>>,
    extractor: Option<Box<dyn SegmentExtractor>>,
    matcher: Option<Box<dyn SubstringMatcher>>,
    store: Option<Box<dyn TextStore>>,
}

impl SubtitleResyncerBuilder {
    pub fn new(config: AlignerConfig) -> Self {
        Self {
            config,
            normalizer: None,
            extractor: None,
            matcher: None,
            store: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn TextNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_extractor(mut self, extractor: Box<dyn SegmentExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn SubstringMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_store(mut self, store: Box<dyn TextStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<SubtitleResyncer, ResyncError> {
        if let Some(c) = self
            .config
            .carry_punctuation
            .chars()
            .find(|c| c.is_whitespace())
        {
            return Err(ResyncError::invalid_input(format!(
                "carry-over punctuation must not contain whitespace, found {c:?}"
            )));
        }

        Ok(SubtitleResyncer::from_parts(SubtitleResyncerParts {
            config: self.config,
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Box::new(WhitespaceCollapser)),
            extractor: self
                .extractor
                .unwrap_or_else(|| Box::new(SrtSegmentExtractor)),
            matcher: self
                .matcher
                .unwrap_or_else(|| Box::new(LongestCommonSubstringMatcher)),
            store: self.store.unwrap_or_else(|| Box::new(FsTextStore)),
        }))
    }
}
