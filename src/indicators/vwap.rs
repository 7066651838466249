// =============================================================================
// Volume-Weighted Average Price (VWAP)
// =============================================================================
//
// Running cumulative over the whole supplied series:
//   typical = (high + low + close) / 3
//   VWAP_t  = sum(typical * volume) / sum(volume)
//
// There is no session or day reset; callers that want an anchored VWAP split
// the candle series per session and compute per split.

/// Compute the cumulative VWAP series from parallel H/L/C/volume slices.
///
/// Entries are `None` while the cumulative volume is still zero (for example
/// a data source that reports no volume at all).
pub fn vwap(highs: &[f64], lows: &[f64], closes: &[f64], volumes: &[f64]) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut result = vec![None; n];

    let mut cum_value = 0.0;
    let mut cum_volume = 0.0;
    for i in 0..n {
        let typical = (highs[i] + lows[i] + closes[i]) / 3.0;
        cum_value += typical * volumes[i];
        cum_volume += volumes[i];
        if cum_volume > 0.0 {
            result[i] = Some(cum_value / cum_volume);
        }
    }

    result
}
