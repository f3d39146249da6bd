//! Continuity analysis handler.

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use cqa_models::AnalysisResult;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;
use crate::upload::MultipartFrames;

/// Score uploaded frames for visual continuity.
///
/// Reads every `frames` part in upload order, then scores the sequence.
/// A part that cannot be read fails the whole request.
pub async fn analyze_frames(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<AnalysisResult>> {
    let start = Instant::now();
    let mut frames = MultipartFrames::new(multipart, state.config.max_frames);

    let result = state.scorer.score_source(&mut frames).await.map_err(|e| {
        warn!(frame = e.index, "Frame upload failed: {}", e.source);
        e
    })?;

    let elapsed = start.elapsed();
    metrics::record_analysis(frames.read(), &result, elapsed.as_secs_f64());

    info!(
        frames = frames.read(),
        score = result.continuity_score,
        issues = result.issues.len(),
        duration_ms = %elapsed.as_millis(),
        "Continuity analysis completed"
    );

    Ok(Json(result))
}
