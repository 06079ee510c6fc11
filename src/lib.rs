//! Parse structured ping log lines into [`PingRecord`]s and summarize a batch
//! of them into success rate, mean latency and p95 latency.
//!
//! ```
//! use ping_metrics::{parse_line, summarize};
//!
//! let records = [
//!     "host=1.1.1.1 status=OK latency_ms=10",
//!     "host=google.com status=FAIL",
//!     "host=1.1.1.1 status=OK latency_ms=30",
//! ]
//! .iter()
//! .map(|line| parse_line(line))
//! .collect::<Result<Vec<_>, _>>()
//! .unwrap();
//!
//! let summary = summarize(&records);
//! assert_eq!(summary.total, 3);
//! assert_eq!(summary.avg_latency_ms, Some(20.0));
//! ```

pub mod config;
pub mod error;
pub mod latency_grade;
pub mod parser;
pub mod percentile;
pub mod ping;
pub mod stats;

pub use config::MetricsConfig;
pub use error::{ParseError, PercentileError};
pub use latency_grade::LatencyGrade;
pub use parser::parse_line;
pub use percentile::percentile;
pub use ping::{PingRecord, PingSummary};
pub use stats::summarize;
