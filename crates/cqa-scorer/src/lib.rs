//! Continuity scoring for frame sequences.
//!
//! This crate provides:
//! - A narrow [`FrameEmbedder`] seam (`bytes -> fixed-size vector`) with the
//!   byte-statistics placeholder embedder
//! - Cosine similarity between adjacent frames
//! - Aggregate continuity score and visual-jump issue detection
//! - An async entry point that awaits frame reads before scoring
//! - The dashboard's demo mock generator, isolated in [`demo`]

pub mod config;
pub mod demo;
pub mod embedding;
pub mod error;
pub mod scorer;
pub mod similarity;
pub mod source;

pub use config::ScorerConfig;
pub use demo::DemoIssueGenerator;
pub use embedding::{ByteStatsEmbedder, Embedding, FrameEmbedder};
pub use error::{FrameReadError, ScorerError, ScorerResult};
pub use scorer::{
    continuity_score, detect_issues, ContinuityScorer, ABRUPT_CHANGE_DESCRIPTION,
    SEVERE_DISCONTINUITY_DESCRIPTION,
};
pub use similarity::{cosine_similarity, mean, pairwise_similarities};
pub use source::FrameSource;
