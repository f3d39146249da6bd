//! API configuration.

use std::str::FromStr;

use cqa_scorer::ScorerConfig;
use tracing::warn;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Rate limit requests per second (per client IP)
    pub rate_limit_rps: u32,
    /// Rate limit burst
    pub rate_limit_burst: u32,
    /// Max request body size
    pub max_body_size: usize,
    /// Max frames accepted in one upload (unlimited when unset)
    pub max_frames: Option<usize>,
    /// Environment (development/production)
    pub environment: String,
    /// Serve Prometheus metrics at /metrics
    pub metrics_enabled: bool,
    /// Issue detection thresholds
    pub scorer: ScorerConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            rate_limit_rps: 10,
            rate_limit_burst: 20,
            max_body_size: 50 * 1024 * 1024, // 50MB
            max_frames: None,
            environment: "development".to_string(),
            metrics_enabled: true,
            scorer: ScorerConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let scorer = ScorerConfig {
            issue_drop_threshold: parse_or(
                &lookup,
                "SCORER_ISSUE_DROP",
                defaults.scorer.issue_drop_threshold,
            ),
            severe_drop_threshold: parse_or(
                &lookup,
                "SCORER_SEVERE_DROP",
                defaults.scorer.severe_drop_threshold,
            ),
        };
        let scorer = match scorer.validate() {
            Ok(()) => scorer,
            Err(e) => {
                warn!("{}; falling back to default thresholds", e);
                ScorerConfig::default()
            }
        };

        Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "API_PORT", defaults.port),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            rate_limit_rps: parse_or(&lookup, "RATE_LIMIT_RPS", defaults.rate_limit_rps),
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", defaults.rate_limit_burst),
            max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", defaults.max_body_size),
            max_frames: lookup("MAX_FRAMES")
                .and_then(|s| s.trim().parse().ok())
                .or(defaults.max_frames),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
            scorer,
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
