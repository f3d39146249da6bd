//! Shared data models for the continuity QA service.
//!
//! This crate provides Serde-serializable types for:
//! - Continuity analysis results produced by the scorer
//! - Discontinuity issues between adjacent frames
//! - Demo mock payloads (kept apart from real scorer output)

pub mod analysis;
pub mod demo;

// Re-export common types
pub use analysis::{AnalysisResult, Issue, IssueType, FRAMES_FIELD};
pub use demo::{
    ColorDelta, DemoAnalysis, DemoIssue, DemoIssueType, DemoMetrics, IssueLocation, Severity,
};
