// =============================================================================
// Relative Strength Index (RSI) -- Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1: Compute price changes (deltas) from consecutive values.
// Step 2: Seed average gain / average loss with the SMA of the first `period`
//         deltas; the first defined RSI sits at index `period`.
// Step 3: Apply Wilder's smoothing:
//           avg_gain = (prev_avg_gain * (period - 1) + gain) / period
//           avg_loss = (prev_avg_loss * (period - 1) + loss) / period
// Step 4: RS  = avg_gain / avg_loss
//         RSI = 100 - 100 / (1 + RS)
//
// When the average loss is zero there is nothing to divide by; RSI is 100 at
// that step. This covers both the all-gains and the perfectly-flat case.
// =============================================================================

/// Compute the full RSI series for the given `values` and `period`.
///
/// The output has the same length as the input; entries before index `period`
/// are `None` (the first `period` deltas are consumed by the seed).
///
/// # Edge cases
/// - `period == 0` => all-`None` series
/// - `values.len() <= period` => all-`None` series (not enough deltas)
/// - `avg_loss == 0` => RSI is 100 at that index, at the seed and at every
///   smoothing step alike.
pub fn rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if period == 0 || n <= period {
        return result;
    }

    let period_f = period as f64;

    // --- Seed averages over the first `period` deltas ------------------------
    let (sum_gain, sum_loss) = values[..=period]
        .windows(2)
        .fold((0.0_f64, 0.0_f64), |(g, l), w| {
            let delta = w[1] - w[0];
            if delta > 0.0 {
                (g + delta, l)
            } else {
                (g, l + delta.abs())
            }
        });

    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;
    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // --- Wilder's smoothing for subsequent values ----------------------------
    for i in (period + 1)..n {
        let delta = values[i] - values[i - 1];
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { delta.abs() } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        result[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
