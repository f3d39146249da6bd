//! Pairwise similarity helpers.

use crate::embedding::Embedding;

/// Cosine similarity of two embeddings (zero for zero-magnitude inputs).
pub fn cosine_similarity(a: &Embedding, b: &Embedding) -> f64 {
    a.cosine_similarity(b)
}

/// Similarity of every adjacent pair.
///
/// Entry `i` compares `embeddings[i]` with `embeddings[i + 1]`, so the result
/// has `len - 1` entries (none for fewer than two embeddings).
pub fn pairwise_similarities(embeddings: &[Embedding]) -> Vec<f64> {
    embeddings
        .windows(2)
        .map(|pair| cosine_similarity(&pair[0], &pair[1]))
        .collect()
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
