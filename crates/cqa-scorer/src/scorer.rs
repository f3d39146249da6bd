//! Continuity scorer.
//!
//! # Algorithm
//! 1. Fewer than two frames: return the perfect result without embedding
//! 2. Embed every frame independently
//! 3. Cosine similarity of each adjacent pair
//! 4. Score = round(clamp(mean similarity, 0, 1) * 100)
//! 5. Report pairs whose similarity sits at least `issue_drop_threshold`
//!    below the mean, in pair order

use cqa_models::{AnalysisResult, Issue};
use tracing::debug;

use crate::config::ScorerConfig;
use crate::embedding::{ByteStatsEmbedder, Embedding, FrameEmbedder};
use crate::error::FrameReadError;
use crate::similarity::{mean, pairwise_similarities};
use crate::source::FrameSource;

/// Description for pairs whose drop exceeds the severe threshold.
pub const SEVERE_DISCONTINUITY_DESCRIPTION: &str = "Severe visual discontinuity between frames.";

/// Description for all other reported pairs.
pub const ABRUPT_CHANGE_DESCRIPTION: &str = "Abrupt visual change detected between frames.";

/// Map a mean similarity to a 0-100 continuity score.
pub fn continuity_score(avg_similarity: f64) -> u8 {
    (avg_similarity.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Flag pairs whose similarity drops meaningfully below the average.
pub fn detect_issues(
    similarities: &[f64],
    avg_similarity: f64,
    config: &ScorerConfig,
) -> Vec<Issue> {
    similarities
        .iter()
        .enumerate()
        .filter_map(|(idx, &sim)| {
            let drop = avg_similarity - sim;
            if drop < config.issue_drop_threshold {
                return None;
            }

            let description = if drop > config.severe_drop_threshold {
                SEVERE_DISCONTINUITY_DESCRIPTION
            } else {
                ABRUPT_CHANGE_DESCRIPTION
            };

            debug!(
                frames = %format!("{}-{}", idx + 1, idx + 2),
                similarity = sim,
                drop = drop,
                "Visual jump detected"
            );

            Some(Issue::visual_jump(idx, description, sim))
        })
        .collect()
}

/// Scores an ordered frame sequence for visual continuity.
///
/// Stateless between calls; one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ContinuityScorer<E = ByteStatsEmbedder> {
    embedder: E,
    config: ScorerConfig,
}

impl ContinuityScorer<ByteStatsEmbedder> {
    /// Create a scorer with the byte-statistics embedder and default thresholds.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: FrameEmbedder> ContinuityScorer<E> {
    /// Replace the embedder, keeping the current thresholds.
    pub fn with_embedder<F: FrameEmbedder>(self, embedder: F) -> ContinuityScorer<F> {
        ContinuityScorer {
            embedder,
            config: self.config,
        }
    }

    /// Replace the thresholds.
    pub fn with_config(mut self, config: ScorerConfig) -> Self {
        self.config = config;
        self
    }

    /// Embed each frame independently, in input order.
    pub fn embed_all<F: AsRef<[u8]>>(&self, frames: &[F]) -> Vec<Embedding> {
        frames
            .iter()
            .map(|frame| self.embedder.embed(frame.as_ref()))
            .collect()
    }

    /// Score a sequence of raw frame buffers.
    pub fn score<F: AsRef<[u8]>>(&self, frames: &[F]) -> AnalysisResult {
        if frames.len() < 2 {
            return AnalysisResult::perfect();
        }

        let embeddings = self.embed_all(frames);
        let similarities = pairwise_similarities(&embeddings);

        // At least one pair exists past the short-circuit above.
        let avg_similarity = mean(&similarities).unwrap_or(1.0);
        let issues = detect_issues(&similarities, avg_similarity, &self.config);

        AnalysisResult {
            continuity_score: continuity_score(avg_similarity),
            similarities,
            issues,
        }
    }

    /// Drain a source, then score what it produced.
    ///
    /// The first failed read aborts the analysis; no partial result is built.
    pub async fn score_source<S>(
        &self,
        source: &mut S,
    ) -> Result<AnalysisResult, FrameReadError<S::Error>>
    where
        S: FrameSource,
    {
        let mut frames = Vec::new();
        while let Some(next) = source.next_frame().await {
            match next {
                Ok(frame) => frames.push(frame),
                Err(error) => {
                    return Err(FrameReadError {
                        index: frames.len(),
                        source: error,
                    })
                }
            }
        }

        Ok(self.score(&frames))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use super::*;
    use cqa_models::IssueType;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fewer_than_two_frames_is_perfect() {
        let scorer = ContinuityScorer::new();
        let none: [&[u8]; 0] = [];
        assert_eq!(scorer.score(&none), AnalysisResult::perfect());
        assert_eq!(scorer.score(&[vec![1u8, 2, 3]]), AnalysisResult::perfect());
        assert_eq!(scorer.score(&[Vec::<u8>::new()]), AnalysisResult::perfect());
    }

    #[test]
    fn test_identical_frames_score_100() {
        let frame = vec![5u8; 10];
        let result = ContinuityScorer::new().score(&[frame.clone(), frame]);

        assert_eq!(result.similarities.len(), 1);
        assert!((result.similarities[0] - 1.0).abs() < EPS);
        assert_eq!(result.continuity_score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_all_empty_frames_score_zero_without_issues() {
        let frames = vec![Vec::<u8>::new(); 4];
        let result = ContinuityScorer::new().score(&frames);

        assert_eq!(result.similarities, vec![0.0, 0.0, 0.0]);
        assert_eq!(result.continuity_score, 0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_outlier_frame_flags_both_neighbouring_pairs() {
        // Frames 1, 3, 4 share the same shape; frame 2 is tiny with extreme bytes.
        let normal = vec![10u8; 1000];
        let outlier = vec![255u8; 2];
        let frames = vec![normal.clone(), outlier, normal.clone(), normal];

        let result = ContinuityScorer::new().score(&frames);
        assert_eq!(result.similarities.len(), 3);

        let pairs: Vec<[usize; 2]> = result.issues.iter().map(|i| i.frame_pair).collect();
        assert_eq!(pairs, vec![[1, 2], [2, 3]]);
        for issue in &result.issues {
            assert_eq!(issue.issue_type, IssueType::VisualJump);
        }
        assert!(result.continuity_score < 100);
    }

    #[test]
    fn test_issue_similarity_matches_pair() {
        let normal = vec![10u8; 1000];
        let outlier = vec![255u8; 2];
        let result = ContinuityScorer::new().score(&[normal.clone(), normal.clone(), outlier]);

        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.frame_pair, [2, 3]);
        assert_eq!(issue.similarity, result.similarities[1]);
    }

    #[test]
    fn test_detect_issues_thresholds() {
        let config = ScorerConfig::default();

        // drop 0.05 -> none, drop 0.2 -> abrupt, drop 0.5 -> severe
        let issues = detect_issues(&[0.85, 0.7, 0.4], 0.9, &config);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].frame_pair, [2, 3]);
        assert_eq!(issues[0].description, ABRUPT_CHANGE_DESCRIPTION);
        assert_eq!(issues[1].frame_pair, [3, 4]);
        assert_eq!(issues[1].description, SEVERE_DISCONTINUITY_DESCRIPTION);
    }

    #[test]
    fn test_detect_issues_severe_boundary_is_exclusive() {
        let config = ScorerConfig::new(0.25, 0.5).unwrap();
        let issues = detect_issues(&[0.5], 1.0, &config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, ABRUPT_CHANGE_DESCRIPTION);
    }

    #[test]
    fn test_detect_issues_keeps_pair_order() {
        let issues = detect_issues(&[0.0, 0.9, 0.1, 0.9, 0.0], 0.5, &ScorerConfig::default());
        let pairs: Vec<[usize; 2]> = issues.iter().map(|i| i.frame_pair).collect();
        assert_eq!(pairs, vec![[1, 2], [3, 4], [5, 6]]);
    }

    #[test]
    fn test_continuity_score_clamps_and_rounds() {
        assert_eq!(continuity_score(-0.2), 0);
        assert_eq!(continuity_score(0.0), 0);
        assert_eq!(continuity_score(0.556), 56);
        assert_eq!(continuity_score(0.994), 99);
        assert_eq!(continuity_score(0.996), 100);
        assert_eq!(continuity_score(1.7), 100);
    }

    #[test]
    fn test_score_is_deterministic() {
        let frames: Vec<Vec<u8>> = (1..8u8).map(|i| vec![i * 30; i as usize * 17]).collect();
        let scorer = ContinuityScorer::new();
        assert_eq!(scorer.score(&frames), scorer.score(&frames));
    }

    #[test]
    fn test_issue_frame_pairs_are_in_range_and_consecutive() {
        let frames: Vec<Vec<u8>> = vec![
            vec![1u8; 50],
            vec![200u8; 3],
            vec![1u8; 50],
            Vec::new(),
            vec![90u8; 4000],
            vec![1u8; 50],
        ];
        let result = ContinuityScorer::new().score(&frames);

        assert_eq!(result.similarities.len(), frames.len() - 1);
        assert!(result.continuity_score <= 100);
        for issue in &result.issues {
            let [a, b] = issue.frame_pair;
            assert!(a >= 1 && b <= frames.len());
            assert_eq!(b, a + 1);
        }
    }

    #[test]
    fn test_custom_embedder() {
        struct LengthOnly;
        impl FrameEmbedder for LengthOnly {
            const DIMENSIONS: usize = 1;
            fn embed(&self, frame: &[u8]) -> Embedding {
                Embedding::new(vec![frame.len() as f64])
            }
        }

        // Lengths all positive -> every similarity is exactly 1.
        let scorer = ContinuityScorer::new().with_embedder(LengthOnly);
        let result = scorer.score(&[vec![0u8; 1], vec![9u8; 500], vec![3u8; 2]]);
        assert_eq!(result.continuity_score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_score_source_reads_all_frames() {
        let mut source: VecDeque<Vec<u8>> = VecDeque::from(vec![vec![5u8; 10], vec![5u8; 10]]);
        let scorer = ContinuityScorer::new();

        let result = tokio_test::block_on(scorer.score_source(&mut source)).unwrap();
        assert_eq!(result.continuity_score, 100);
        assert!(source.is_empty());
    }

    struct FailingSource {
        frames: VecDeque<Vec<u8>>,
        fail_at: usize,
        read: usize,
    }

    impl FrameSource for FailingSource {
        type Frame = Vec<u8>;
        type Error = io::Error;

        async fn next_frame(&mut self) -> Option<Result<Vec<u8>, io::Error>> {
            if self.read == self.fail_at {
                self.read += 1;
                return Some(Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection reset",
                )));
            }
            self.read += 1;
            self.frames.pop_front().map(Ok)
        }
    }

    #[test]
    fn test_score_source_propagates_read_failure() {
        let mut source = FailingSource {
            frames: VecDeque::from(vec![vec![1u8; 4], vec![1u8; 4], vec![1u8; 4]]),
            fail_at: 2,
            read: 0,
        };

        let err = tokio_test::block_on(ContinuityScorer::new().score_source(&mut source))
            .unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.source.kind(), io::ErrorKind::UnexpectedEof);
        assert!(err.to_string().contains("frame 2"));
    }
}
