// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   alpha = 2 / (period + 1)
//   EMA_t = (value_t - EMA_{t-1}) * alpha + EMA_{t-1}
//
// The very first EMA value is seeded with the SMA of the first `period`
// values and sits at index `period - 1`; everything before it is undefined.
// =============================================================================

/// Compute the EMA series for the given `values` slice and look-back `period`.
///
/// The output has the same length as the input. Entries before index
/// `period - 1` are `None` (warm-up); the entry at `period - 1` is the SMA
/// seed and every later entry follows the recurrence above.
///
/// # Edge cases
/// - `period == 0` => all-`None` series (division by zero guard)
/// - `values.len() < period` => all-`None` series
/// - NaN/Inf inputs propagate through the arithmetic; they are not coerced.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` values.
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..values.len() {
        let next = (values[i] - prev) * alpha + prev;
        result[i] = Some(next);
        prev = next;
    }

    result
}

/// Compute the EMA of a partially-undefined series.
///
/// The `None` entries are dropped, the plain EMA recurrence runs over the
/// remaining dense values, and each result is scattered back to the index its
/// input came from. Indices that were `None` on input, or that fall inside
/// the dense warm-up, stay `None`.
///
/// This is what makes a smoothed line over another indicator's output work:
/// the upstream series starts with a warm-up gap, and the gap must not poison
/// the recurrence.
pub fn ema_sparse(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut dense = Vec::with_capacity(values.len());
    let mut origin = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        if let Some(v) = value {
            dense.push(*v);
            origin.push(i);
        }
    }

    let mut result = vec![None; values.len()];
    for (j, value) in ema(&dense, period).into_iter().enumerate() {
        if value.is_some() {
            result[origin[j]] = value;
        }
    }

    result
}
