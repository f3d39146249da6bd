//! Frame embeddings.
//!
//! An embedding is a small fixed-size numeric summary of a frame. The only
//! embedder shipped today derives it from raw byte statistics; a perceptual
//! model can replace it by implementing [`FrameEmbedder`] without touching
//! similarity, scoring or issue detection.

/// A fixed-dimension numeric vector describing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    values: Vec<f64>,
}

impl Embedding {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Returns true if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Cosine similarity with another embedding.
    ///
    /// Zero when either vector has zero magnitude or the dimensions differ.
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        let dot: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum();

        let magnitude_a = self.magnitude();
        let magnitude_b = other.magnitude();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }

        dot / (magnitude_a * magnitude_b)
    }
}

impl From<[f64; 3]> for Embedding {
    fn from(values: [f64; 3]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Maps a frame's raw bytes to an embedding.
///
/// Implementations must be deterministic and keep no state between frames.
pub trait FrameEmbedder: Send + Sync {
    /// Number of components in every embedding this embedder produces.
    const DIMENSIONS: usize;

    fn embed(&self, frame: &[u8]) -> Embedding;
}

/// Placeholder embedder built from byte statistics.
///
/// The vector is `(len, first_byte, middle_byte)` divided by its Euclidean
/// norm. Missing bytes count as zero and a zero norm is treated as 1, so an
/// empty frame embeds to the zero vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteStatsEmbedder;

impl ByteStatsEmbedder {
    pub fn new() -> Self {
        Self
    }
}

impl FrameEmbedder for ByteStatsEmbedder {
    const DIMENSIONS: usize = 3;

    fn embed(&self, frame: &[u8]) -> Embedding {
        let len = frame.len();
        let n = len as f64;
        let first = frame.first().copied().unwrap_or(0) as f64;
        let middle = frame.get(len / 2).copied().unwrap_or(0) as f64;

        let mut norm = (n * n + first * first + middle * middle).sqrt();
        if norm == 0.0 {
            norm = 1.0;
        }

        Embedding::from([n / norm, first / norm, middle / norm])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_empty_frame_is_zero_vector() {
        let embedding = ByteStatsEmbedder.embed(&[]);
        assert_eq!(embedding.values(), &[0.0, 0.0, 0.0]);
        assert!(embedding.is_zero());
    }

    #[test]
    fn test_embedding_is_unit_length() {
        let frame = [7u8, 1, 2, 3, 200, 5];
        let embedding = ByteStatsEmbedder.embed(&frame);
        assert_eq!(embedding.dimensions(), ByteStatsEmbedder::DIMENSIONS);
        assert!((embedding.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_components_use_length_first_and_middle_byte() {
        // len 4, first 3, middle (index 2) 0 -> (4, 3, 0) / 5
        let frame = [3u8, 9, 0, 9];
        let embedding = ByteStatsEmbedder.embed(&frame);
        let values = embedding.values();
        assert!((values[0] - 0.8).abs() < EPS);
        assert!((values[1] - 0.6).abs() < EPS);
        assert!(values[2].abs() < EPS);
    }

    #[test]
    fn test_single_byte_frame_uses_same_byte_twice() {
        // len 1, first = middle = byte 0
        let embedding = ByteStatsEmbedder.embed(&[2u8]);
        let norm = (1.0f64 + 4.0 + 4.0).sqrt();
        let values = embedding.values();
        assert!((values[0] - 1.0 / norm).abs() < EPS);
        assert!((values[1] - 2.0 / norm).abs() < EPS);
        assert!((values[2] - 2.0 / norm).abs() < EPS);
    }

    #[test]
    fn test_cosine_of_zero_vector_is_zero() {
        let zero = Embedding::from([0.0, 0.0, 0.0]);
        let unit = Embedding::from([1.0, 0.0, 0.0]);
        assert_eq!(zero.cosine_similarity(&unit), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_zero() {
        let a = Embedding::new(vec![1.0, 0.0]);
        let b = Embedding::from([1.0, 0.0, 0.0]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_parallel() {
        let a = Embedding::from([1.0, 0.0, 0.0]);
        let b = Embedding::from([0.0, 1.0, 0.0]);
        let c = Embedding::from([3.0, 0.0, 0.0]);
        assert!(a.cosine_similarity(&b).abs() < EPS);
        assert!((a.cosine_similarity(&c) - 1.0).abs() < EPS);
    }
}
