pub mod extraction;
pub mod greedy;
pub mod matching;
pub mod normalize;
pub mod report;
pub mod serialize;
