//! Demo mock handler.
//!
//! Serves the dashboard's randomized demo issues. The response is mock data
//! flagged with `"mock": true` and is not produced by the continuity scorer.

use axum::extract::{Multipart, State};
use axum::Json;
use cqa_models::DemoAnalysis;
use cqa_scorer::{DemoIssueGenerator, FrameReadError, FrameSource};
use tracing::info;

use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;
use crate::upload::MultipartFrames;

/// Generate a demo mock analysis sized to the uploaded image count.
pub async fn demo_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<DemoAnalysis>> {
    let mut frames =
        MultipartFrames::new(multipart, state.config.max_frames).images_only();

    let mut count = 0;
    while let Some(frame) = frames.next_frame().await {
        frame.map_err(|source| FrameReadError {
            index: count,
            source,
        })?;
        count += 1;
    }

    let analysis = DemoIssueGenerator::from_os_rng().generate(count);
    metrics::record_demo_analysis();

    info!(
        mock = true,
        frames = analysis.total_frames,
        issues = analysis.issues.len(),
        "Demo analysis generated"
    );

    Ok(Json(analysis))
}
