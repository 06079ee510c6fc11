use serde::Serialize;

use crate::config::MetricsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LatencyGrade {
    Good,
    Fair,
    Slow,
    Failed,
}

impl LatencyGrade {
    /// Grade a latency against the configured thresholds; a missing latency is `Failed`.
    pub fn from_latency(latency_ms: Option<f64>, config: &MetricsConfig) -> Self {
        match latency_ms {
            Some(time) if time < config.good_threshold_ms as f64 => LatencyGrade::Good,
            Some(time) if time < config.fair_threshold_ms as f64 => LatencyGrade::Fair,
            Some(_) => LatencyGrade::Slow,
            None => LatencyGrade::Failed,
        }
    }
}
