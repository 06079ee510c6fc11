use crate::error::PercentileError;

/// Compute the `p`th percentile of `values` (`0 <= p <= 100`).
///
/// Uses linear interpolation between the closest ranks, the same method as
/// NumPy's default. `values` need not be sorted and is left untouched.
pub fn percentile(values: &[f64], p: f64) -> Result<f64, PercentileError> {
    if values.is_empty() {
        return Err(PercentileError::EmptyValues);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(PercentileError::OutOfRange(p));
    }

    let mut xs = values.to_vec();
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n == 1 {
        return Ok(xs[0]);
    }

    let k = (n - 1) as f64 * (p / 100.0);
    let f = k.floor() as usize;
    let c = (f + 1).min(n - 1);
    if f == c {
        return Ok(xs[f]);
    }

    let d0 = xs[f] * (c as f64 - k);
    let d1 = xs[c] * (k - f as f64);
    Ok(d0 + d1)
}
