// =============================================================================
// Ichimoku Kinko Hyo
// =============================================================================
//
// Four lines derived from rolling high/low midpoints:
//   Tenkan-sen = midpoint over the trailing `conversion` bars
//   Kijun-sen  = midpoint over the trailing `base` bars
//   Span A     = (Tenkan + Kijun) / 2
//   Span B     = midpoint over the trailing `span_b` bars
//
// where midpoint = (highest high + lowest low) / 2 over the window.
//
// Span A and Span B are emitted at the index of the window that produced
// them. There is no forward displacement by the base period; a chart layer
// that wants the classical cloud-ahead-of-price placement applies the shift
// itself.

use serde::Serialize;

/// The four Ichimoku lines, each positionally aligned with the input.
#[derive(Debug, Clone, Serialize)]
pub struct IchimokuSeries {
    pub tenkan: Vec<Option<f64>>,
    pub kijun: Vec<Option<f64>>,
    pub span_a: Vec<Option<f64>>,
    pub span_b: Vec<Option<f64>>,
}

/// Midpoint of the highest high and lowest low over the trailing
/// `period`-length window ending at each index.
fn rolling_midpoint(highs: &[f64], lows: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = highs.len();
    let mut result = vec![None; n];
    if period == 0 || n < period {
        return result;
    }

    for i in (period - 1)..n {
        let mut highest = f64::NEG_INFINITY;
        let mut lowest = f64::INFINITY;
        for j in (i + 1 - period)..=i {
            highest = highest.max(highs[j]);
            lowest = lowest.min(lows[j]);
        }
        result[i] = Some((highest + lowest) / 2.0);
    }

    result
}

/// Compute the Ichimoku lines from parallel high/low slices.
///
/// `span_a[i]` is defined wherever both Tenkan and Kijun are, i.e. once the
/// longer of the two windows has filled.
pub fn ichimoku(
    highs: &[f64],
    lows: &[f64],
    conversion: usize,
    base: usize,
    span_b: usize,
) -> IchimokuSeries {
    let tenkan = rolling_midpoint(highs, lows, conversion);
    let kijun = rolling_midpoint(highs, lows, base);

    let span_a = tenkan
        .iter()
        .zip(&kijun)
        .map(|(t, k)| match (t, k) {
            (Some(t), Some(k)) => Some((t + k) / 2.0),
            _ => None,
        })
        .collect();

    let span_b_line = rolling_midpoint(highs, lows, span_b);

    IchimokuSeries {
        tenkan,
        kijun,
        span_a,
        span_b: span_b_line,
    }
}
