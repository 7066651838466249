// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band
// (SMA + k * sigma), and a lower band (SMA - k * sigma), where sigma is the
// population standard deviation over the same trailing window.

use serde::Serialize;

/// The three band lines, each positionally aligned with the input.
#[derive(Debug, Clone, Serialize)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Bands over the trailing `period`-length window.
///
/// Entries before index `period - 1` are `None`. The variance divisor is
/// `period` (population variance), not `period - 1`.
///
/// # Edge cases
/// - `period == 0` or `values.len() < period` => all three lines all-`None`
/// - A flat window yields zero deviation; all three bands collapse onto the
///   mean.
pub fn bollinger(values: &[f64], period: usize, mult: f64) -> BollingerSeries {
    let n = values.len();
    let mut upper = vec![None; n];
    let mut middle = vec![None; n];
    let mut lower = vec![None; n];

    if period == 0 || n < period {
        return BollingerSeries { upper, middle, lower };
    }

    for i in (period - 1)..n {
        let window = &values[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
        let deviation = variance.sqrt();

        upper[i] = Some(mean + mult * deviation);
        middle[i] = Some(mean);
        lower[i] = Some(mean - mult * deviation);
    }

    BollingerSeries { upper, middle, lower }
}
