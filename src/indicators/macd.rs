// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
// MACD line  = EMA(values, fast) - EMA(values, slow)
// Signal     = EMA of the MACD line over `signal` bars
// Histogram  = MACD line - Signal
//
// The MACD line is undefined until the slow EMA has warmed up, so the signal
// line is an EMA over a partially-undefined series; the sparse EMA handles
// that by compacting past the gap.

use serde::Serialize;

use super::ema::{ema, ema_sparse};

/// MACD line, signal line and histogram, each aligned with the input.
#[derive(Debug, Clone, Serialize)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Compute the MACD triple for the given `values`.
///
/// `macd[i]` is defined once both EMAs are (index `slow - 1` onwards, for
/// `fast <= slow`); `signal[i]` once `signal` MACD values have accumulated;
/// `histogram[i]` wherever both of the above are defined.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let macd_line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let signal_line = ema_sparse(&macd_line, signal);

    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        macd: macd_line,
        signal: signal_line,
        histogram,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn sample(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.4).sin() * 8.0 + 100.0).collect()
    }

    #[test]
    fn macd_empty_input() {
        let result = macd(&[], 12, 26, 9);
        assert!(result.macd.is_empty());
        assert!(result.signal.is_empty());
        assert!(result.histogram.is_empty());
    }

    #[test]
    fn macd_warm_up_boundary() {
        let values = sample(60);
        let result = macd(&values, 12, 26, 9);
        for i in 0..25 {
            assert_eq!(result.macd[i], None, "macd defined too early at {i}");
        }
        assert!(result.macd[25].is_some());
        // Signal needs `signal` defined MACD values: first at 25 + 9 - 1.
        for i in 0..33 {
            assert_eq!(result.signal[i], None, "signal defined too early at {i}");
        }
        assert!(result.signal[33].is_some());
        assert!(result.histogram[33].is_some());
    }

    #[test]
    fn macd_line_is_ema_difference() {
        let values = sample(80);
        let result = macd(&values, 12, 26, 9);
        let fast = ema(&values, 12);
        let slow = ema(&values, 26);
        for i in 25..80 {
            let expected = fast[i].unwrap() - slow[i].unwrap();
            assert!((result.macd[i].unwrap() - expected).abs() < TOL);
        }
    }

    #[test]
    fn histogram_is_macd_minus_signal() {
        let values = sample(100);
        let result = macd(&values, 12, 26, 9);
        let mut defined = 0;
        for i in 0..100 {
            if let Some(h) = result.histogram[i] {
                let expected = result.macd[i].unwrap() - result.signal[i].unwrap();
                assert!((h - expected).abs() < TOL, "histogram mismatch at {i}");
                defined += 1;
            }
        }
        assert!(defined > 0, "no defined histogram values in 100 bars");
    }

    #[test]
    fn macd_alignment() {
        let values = sample(47);
        let result = macd(&values, 12, 26, 9);
        assert_eq!(result.macd.len(), 47);
        assert_eq!(result.signal.len(), 47);
        assert_eq!(result.histogram.len(), 47);
    }

    #[test]
    fn macd_insufficient_for_slow_ema() {
        let values = sample(20);
        let result = macd(&values, 12, 26, 9);
        assert_eq!(result.macd, vec![None; 20]);
        assert_eq!(result.signal, vec![None; 20]);
        assert_eq!(result.histogram, vec![None; 20]);
    }
}
