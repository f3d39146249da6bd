//! Continuity analysis data models.
//!
//! These are the wire types of `POST /api/analyze`. Field names are
//! camelCase on the wire to match what the dashboard consumes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Multipart field name under which frames are uploaded.
pub const FRAMES_FIELD: &str = "frames";

/// Kind of discontinuity reported by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Similarity between two adjacent frames dropped well below the sequence average
    VisualJump,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisualJump => "visual_jump",
        }
    }
}

/// A discontinuity between two adjacent frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Adjacent frame numbers (1-based)
    pub frame_pair: [usize; 2],

    /// Issue kind
    #[serde(rename = "type")]
    pub issue_type: IssueType,

    /// Human-readable description
    pub description: String,

    /// Similarity value that triggered the issue
    pub similarity: f64,
}

impl Issue {
    /// Create a visual jump issue for the pair at 0-based similarity index `idx`.
    pub fn visual_jump(idx: usize, description: impl Into<String>, similarity: f64) -> Self {
        Self {
            frame_pair: [idx + 1, idx + 2],
            issue_type: IssueType::VisualJump,
            description: description.into(),
            similarity,
        }
    }
}

/// Aggregate output of a continuity analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall continuity score (0-100)
    pub continuity_score: u8,

    /// Similarity of each adjacent pair; entry `i` compares frames `i` and `i + 1`
    pub similarities: Vec<f64>,

    /// Detected issues in ascending frame-pair order
    pub issues: Vec<Issue>,
}

impl AnalysisResult {
    /// Result for sequences too short to compare (fewer than two frames).
    pub fn perfect() -> Self {
        Self {
            continuity_score: 100,
            similarities: Vec::new(),
            issues: Vec::new(),
        }
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::perfect()
    }
}
