//! Demo mock payloads.
//!
//! These mirror what the interactive dashboard shows in demo mode. They are
//! randomly generated and unrelated to [`crate::AnalysisResult`]; the two
//! types are never converted into one another.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of a demo issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Kind of a demo issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DemoIssueType {
    PropDiscontinuity,
    ColorShift,
    WardrobeChange,
    LightingInconsistency,
    PositionJump,
}

/// Pixel location of a demo issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssueLocation {
    pub x: u32,
    pub y: u32,
}

/// Colour difference attached to a `color_shift` demo issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorDelta {
    pub delta_e: f64,
    pub temp: String,
}

/// A randomly generated issue shown by the dashboard in demo mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemoIssue {
    /// 1-based emission order
    pub id: u32,

    #[serde(rename = "type")]
    pub issue_type: DemoIssueType,

    pub severity: Severity,

    /// Frame indices (0-based, dashboard convention)
    pub frames: [usize; 2],

    pub description: String,

    pub confidence: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<IssueLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_delta: Option<ColorDelta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displacement: Option<String>,
}

/// Per-category scores shown next to the demo issue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemoMetrics {
    pub color_consistency: u32,
    pub object_tracking: u32,
    pub lighting_consistency: u32,
    pub spatial_continuity: u32,
}

/// Full demo mock payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemoAnalysis {
    /// Always true; lets consumers tell mock output from real scorer output
    pub mock: bool,
    pub total_frames: usize,
    pub scene_name: String,
    pub analysis_date: String,
    pub continuity_score: u32,
    pub issues: Vec<DemoIssue>,
    pub metrics: DemoMetrics,
}
