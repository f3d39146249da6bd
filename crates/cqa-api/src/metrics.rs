//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use cqa_models::AnalysisResult;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "cqa_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "cqa_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "cqa_http_requests_in_flight";

    // Scoring metrics
    pub const ANALYSES_TOTAL: &str = "cqa_analyses_total";
    pub const FRAMES_ANALYZED_TOTAL: &str = "cqa_frames_analyzed_total";
    pub const ISSUES_DETECTED_TOTAL: &str = "cqa_issues_detected_total";
    pub const CONTINUITY_SCORE: &str = "cqa_continuity_score";
    pub const ANALYSIS_DURATION_SECONDS: &str = "cqa_analysis_duration_seconds";

    // Demo mock metrics
    pub const DEMO_ANALYSES_TOTAL: &str = "cqa_demo_analyses_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "cqa_rate_limit_hits_total";
}

/// Label used for requests that matched no route.
const UNMATCHED_PATH: &str = "unmatched";

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a completed continuity analysis.
pub fn record_analysis(frame_count: usize, result: &AnalysisResult, duration_secs: f64) {
    counter!(names::ANALYSES_TOTAL).increment(1);
    counter!(names::FRAMES_ANALYZED_TOTAL).increment(frame_count as u64);
    counter!(names::ISSUES_DETECTED_TOTAL).increment(result.issues.len() as u64);
    histogram!(names::CONTINUITY_SCORE).record(f64::from(result.continuity_score));
    histogram!(names::ANALYSIS_DURATION_SECONDS).record(duration_secs);
}

/// Record a demo mock analysis.
pub fn record_demo_analysis() {
    counter!(names::DEMO_ANALYSES_TOTAL).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Route template for a request, so labels stay bounded.
fn route_label(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = route_label(&request);
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label_unmatched() {
        let request = Request::builder().uri("/nope/123").body(Body::empty()).unwrap();
        assert_eq!(route_label(&request), UNMATCHED_PATH);
    }
}
