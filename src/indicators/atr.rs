// =============================================================================
// Average True Range (ATR) -- Wilder's Smoothing Method
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) per bar:
//   TR_0 = H_0 - L_0                                 (no previous close)
//   TR_t = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is then the smoothed average of TR using Wilder's method:
//   ATR_{period-1} = SMA of the first `period` TR values
//   ATR_t          = (ATR_{t-1} * (period - 1) + TR_t) / period
// =============================================================================

/// Compute the ATR series from parallel high/low/close slices.
///
/// All three slices must be positionally aligned and of equal length; the
/// output matches that length. Entries before index `period - 1` are `None`.
///
/// # Edge cases
/// - `period == 0` or fewer than `period` bars => all-`None` series
/// - Every defined value is non-negative (TR is a max of non-negative
///   differences).
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut result = vec![None; n];
    if period == 0 || n < period {
        return result;
    }

    // --- Step 1: True Range per bar ------------------------------------------
    let mut tr = Vec::with_capacity(n);
    tr.push(highs[0] - lows[0]);
    for i in 1..n {
        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        tr.push(hl.max(hc).max(lc));
    }

    // --- Step 2: Seed with SMA of the first `period` TR values ---------------
    let period_f = period as f64;
    let seed: f64 = tr[..period].iter().sum::<f64>() / period_f;
    result[period - 1] = Some(seed);

    // --- Step 3: Wilder's smoothing for the remaining TR values --------------
    let mut prev = seed;
    for i in period..n {
        prev = (prev * (period_f - 1.0) + tr[i]) / period_f;
        result[i] = Some(prev);
    }

    result
}
