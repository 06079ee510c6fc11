use serde::{Deserialize, Serialize};

use crate::config::MetricsConfig;
use crate::latency_grade::LatencyGrade;

/// One parsed ping observation.
///
/// `ok` is true exactly when `latency_ms` is present; [`crate::parse_line`]
/// guarantees this for every record it returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingRecord {
    pub host: String,
    pub ok: bool,
    pub latency_ms: Option<f64>,
}

impl PingRecord {
    pub fn success(host: impl Into<String>, latency_ms: f64) -> Self {
        Self {
            host: host.into(),
            ok: true,
            latency_ms: Some(latency_ms),
        }
    }

    pub fn failure(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ok: false,
            latency_ms: None,
        }
    }

    pub fn grade(&self, config: &MetricsConfig) -> LatencyGrade {
        if !self.ok {
            return LatencyGrade::Failed;
        }
        LatencyGrade::from_latency(self.latency_ms, config)
    }
}

/// Aggregate statistics over a batch of [`PingRecord`]s.
///
/// Latency fields are `None` when no record carried a latency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PingSummary {
    pub total: usize,
    pub success_rate: f64,
    pub avg_latency_ms: Option<f64>,
    pub p95_latency_ms: Option<f64>,
}
