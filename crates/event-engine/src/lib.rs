//! Event extraction engine: row normalization, impact/relevance
//! classification, and lexicon sentiment scoring.

pub mod classifier;
pub mod normalizer;
pub mod sentiment;

pub use classifier::{classify, impact_from_indicator, RelevancePolicy};
pub use normalizer::{normalize_row, NormalizedRow};
pub use sentiment::SentimentScorer;
