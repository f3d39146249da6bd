//! Demo mock issue generator.
//!
//! Reproduces the dashboard's demo mode: random issues whose count depends
//! only on how many frames were uploaded. The output is mock data. It does
//! not look at frame content and shares nothing with [`crate::ContinuityScorer`].

use chrono::Local;
use cqa_models::{
    ColorDelta, DemoAnalysis, DemoIssue, DemoIssueType, DemoMetrics, IssueLocation, Severity,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates randomized demo analyses.
pub struct DemoIssueGenerator<R> {
    rng: R,
}

impl DemoIssueGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DemoIssueGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// `floor(U * span)`.
    fn below(&mut self, span: usize) -> usize {
        (self.unit() * span as f64).floor() as usize
    }

    /// Adjacent frame pair starting at `floor(U * span) + offset`.
    fn pair(&mut self, span: usize, offset: usize) -> [usize; 2] {
        let first = self.below(span) + offset;
        [first, first + 1]
    }

    /// Build the mock issue list for `frame_count` frames.
    pub fn issues(&mut self, frame_count: usize) -> Vec<DemoIssue> {
        let n = frame_count;
        let mut issues: Vec<DemoIssue> = Vec::new();

        if n >= 3 {
            let frames = self.pair(n - 1, 0);
            let issue = DemoIssue {
                id: issues.len() as u32 + 1,
                issue_type: DemoIssueType::PropDiscontinuity,
                severity: Severity::High,
                frames,
                description: format!(
                    "Object disappears between frame {} and {}",
                    frames[0] + 1,
                    frames[1] + 1
                ),
                confidence: 0.92 + self.unit() * 0.06,
                location: Some(IssueLocation {
                    x: 300 + self.below(200) as u32,
                    y: 400 + self.below(200) as u32,
                }),
                color_delta: None,
                exposure: None,
                displacement: None,
            };
            issues.push(issue);
        }

        if n >= 4 {
            let frames = self.pair(n - 2, 1);
            let shift = 300 + self.below(300);
            let confidence = 0.85 + self.unit() * 0.08;
            let delta_e = 10.0 + self.unit() * 5.0;
            let temp = format!("+{}K", 300 + self.below(300));
            let issue = DemoIssue {
                id: issues.len() as u32 + 1,
                issue_type: DemoIssueType::ColorShift,
                severity: Severity::Medium,
                frames,
                description: format!("Color temperature shift detected (+{}K)", shift),
                confidence,
                location: None,
                color_delta: Some(ColorDelta { delta_e, temp }),
                exposure: None,
                displacement: None,
            };
            issues.push(issue);
        }

        if n >= 5 {
            let frames = self.pair(n - 2, 2);
            let issue = DemoIssue {
                id: issues.len() as u32 + 1,
                issue_type: DemoIssueType::WardrobeChange,
                severity: Severity::High,
                frames,
                description: format!(
                    "Wardrobe inconsistency detected in frame {}",
                    frames[0] + 1
                ),
                confidence: 0.88 + self.unit() * 0.08,
                location: Some(IssueLocation {
                    x: 450 + self.below(150) as u32,
                    y: 150 + self.below(100) as u32,
                }),
                color_delta: None,
                exposure: None,
                displacement: None,
            };
            issues.push(issue);
        }

        if n >= 6 {
            let frames = self.pair(n - 2, 1);
            let stops = self.unit() * 0.5 - 0.3;
            let confidence = 0.72 + self.unit() * 0.08;
            let ev = self.unit() * 0.5 - 0.3;
            let issue = DemoIssue {
                id: issues.len() as u32 + 1,
                issue_type: DemoIssueType::LightingInconsistency,
                severity: Severity::Low,
                frames,
                description: format!("Minor exposure variation ({:.1} stops)", stops),
                confidence,
                location: None,
                color_delta: None,
                exposure: Some(format!("{:.1} EV", ev)),
                displacement: None,
            };
            issues.push(issue);
        }

        if n >= 7 {
            let frames = self.pair(n - 2, 2);
            let jump = 10 + self.below(20);
            let confidence = 0.78 + self.unit() * 0.08;
            let displacement = format!("{}px", 10 + self.below(20));
            let issue = DemoIssue {
                id: issues.len() as u32 + 1,
                issue_type: DemoIssueType::PositionJump,
                severity: Severity::Medium,
                frames,
                description: format!("Background element position jump ({}px)", jump),
                confidence,
                location: None,
                color_delta: None,
                exposure: None,
                displacement: Some(displacement),
            };
            issues.push(issue);
        }

        issues
    }

    /// Build a full demo analysis for `frame_count` frames.
    pub fn generate(&mut self, frame_count: usize) -> DemoAnalysis {
        let issues = self.issues(frame_count);

        let scene_name = format!(
            "Scene_{:03}_Shot_{}",
            self.below(100) + 1,
            self.below(20) + 1
        );
        let metrics = DemoMetrics {
            color_consistency: 75 + self.below(15) as u32,
            object_tracking: 70 + self.below(20) as u32,
            lighting_consistency: 80 + self.below(15) as u32,
            spatial_continuity: 72 + self.below(18) as u32,
        };

        DemoAnalysis {
            mock: true,
            total_frames: frame_count,
            scene_name,
            analysis_date: Local::now().to_rfc3339(),
            continuity_score: demo_score(&issues),
            issues,
            metrics,
        }
    }
}

/// Score shown next to demo issues: 95 minus 8 per high and 4 per medium
/// issue, clamped to 60..=95.
pub fn demo_score(issues: &[DemoIssue]) -> u32 {
    let high = issues.iter().filter(|i| i.severity == Severity::High).count() as i64;
    let medium = issues.iter().filter(|i| i.severity == Severity::Medium).count() as i64;
    (95 - high * 8 - medium * 4).clamp(60, 95) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_count_follows_frame_count() {
        let mut generator = DemoIssueGenerator::seeded(7);
        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 1),
            (4, 2),
            (5, 3),
            (6, 4),
            (7, 5),
            (40, 5),
        ];
        for (frames, count) in expected {
            assert_eq!(generator.issues(frames).len(), count, "frames = {}", frames);
        }
    }

    #[test]
    fn test_issue_kinds_and_ids_in_order() {
        let issues = DemoIssueGenerator::seeded(1).issues(10);
        let kinds: Vec<DemoIssueType> = issues.iter().map(|i| i.issue_type).collect();
        assert_eq!(
            kinds,
            vec![
                DemoIssueType::PropDiscontinuity,
                DemoIssueType::ColorShift,
                DemoIssueType::WardrobeChange,
                DemoIssueType::LightingInconsistency,
                DemoIssueType::PositionJump,
            ]
        );
        let ids: Vec<u32> = issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_value_ranges() {
        let mut generator = DemoIssueGenerator::seeded(42);
        for _ in 0..200 {
            let n = 8;
            let analysis = generator.generate(n);
            assert!(analysis.mock);
            assert_eq!(analysis.total_frames, n);
            assert!((60..=95).contains(&analysis.continuity_score));

            for issue in &analysis.issues {
                assert_eq!(issue.frames[1], issue.frames[0] + 1);
                assert!(issue.frames[1] <= n);
                assert!(issue.confidence > 0.7 && issue.confidence < 1.0);
            }

            let prop = &analysis.issues[0];
            assert!(prop.frames[0] <= n - 2);
            let location = prop.location.unwrap();
            assert!((300..500).contains(&location.x));
            assert!((400..600).contains(&location.y));

            let color = analysis.issues[1].color_delta.as_ref().unwrap();
            assert!(color.delta_e >= 10.0 && color.delta_e < 15.0);

            let m = analysis.metrics;
            assert!((75..90).contains(&m.color_consistency));
            assert!((70..90).contains(&m.object_tracking));
            assert!((80..95).contains(&m.lighting_consistency));
            assert!((72..90).contains(&m.spatial_continuity));

            assert!(analysis.scene_name.starts_with("Scene_"));
            assert!(analysis.scene_name.contains("_Shot_"));
        }
    }

    #[test]
    fn test_demo_score_with_all_kinds() {
        // 2 high + 2 medium -> 95 - 16 - 8 = 71
        let issues = DemoIssueGenerator::seeded(3).issues(7);
        assert_eq!(demo_score(&issues), 71);
        assert_eq!(demo_score(&[]), 95);
    }

    #[test]
    fn test_same_seed_same_issues() {
        let a = DemoIssueGenerator::seeded(99).issues(9);
        let b = DemoIssueGenerator::seeded(99).issues(9);
        assert_eq!(a, b);
    }
}
