use crate::percentile::percentile;
use crate::ping::{PingRecord, PingSummary};

/// Summarize a batch of ping records.
///
/// Failed pings count against `success_rate`. Latency statistics cover only
/// records that are both `ok` and carry a latency, and are `None` when there
/// are no such records.
pub fn summarize(records: &[PingRecord]) -> PingSummary {
    let total = records.len();
    if total == 0 {
        return PingSummary::default();
    }

    let latencies: Vec<f64> = records
        .iter()
        .filter(|r| r.ok)
        .filter_map(|r| r.latency_ms)
        .collect();
    let success_rate = latencies.len() as f64 / total as f64;

    if latencies.is_empty() {
        log::trace!("summarized {total} ping records, none successful");
        return PingSummary {
            total,
            success_rate,
            ..PingSummary::default()
        };
    }

    let avg_latency_ms = exact_sum(&latencies) / latencies.len() as f64;
    // Non-empty and p is fixed, so this cannot fail.
    let p95_latency_ms = percentile(&latencies, 95.0).ok();

    log::trace!(
        "summarized {total} ping records: success_rate={success_rate:.4} avg={avg_latency_ms:.3}ms"
    );

    PingSummary {
        total,
        success_rate,
        avg_latency_ms: Some(avg_latency_ms),
        p95_latency_ms,
    }
}

/// Correctly rounded sum of `values`, independent of their order.
///
/// Tracks the running total as a list of non-overlapping partials (Shewchuk's
/// algorithm) and rounds them to a single `f64` at the end, half-even.
fn exact_sum(values: &[f64]) -> f64 {
    if values.iter().any(|x| !x.is_finite()) {
        return values.iter().sum();
    }

    let mut partials: Vec<f64> = Vec::new();
    for &value in values {
        let mut x = value;
        let mut i = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        partials.truncate(i);
        partials.push(x);
    }

    let Some(mut n) = partials.len().checked_sub(1) else {
        return 0.0;
    };
    let mut hi = partials[n];
    let mut lo = 0.0;
    while n > 0 {
        n -= 1;
        let x = hi;
        let y = partials[n];
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }
    // Round half-even when the discarded remainder sits exactly on a tie.
    if n > 0 && ((lo < 0.0 && partials[n - 1] < 0.0) || (lo > 0.0 && partials[n - 1] > 0.0)) {
        let y = lo * 2.0;
        let x = hi + y;
        if y == x - hi {
            hi = x;
        }
    }
    hi
}
