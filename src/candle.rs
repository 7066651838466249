// =============================================================================
// Candle data model
// =============================================================================
//
// One OHLCV observation as delivered by the historical-data collaborator.
// Candles arrive as an ordered slice, oldest first; positional order is
// trusted and never validated here.
//
// Partial sources are common (some feeds omit high/low/volume entirely), so
// those fields are optional and the scalar derivation below applies the
// documented fallbacks.

use serde::{Deserialize, Serialize};

/// A single OHLCV candle.  `open_time` is epoch milliseconds when the source
/// provides real timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    #[serde(default)]
    pub open_time: Option<i64>,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

/// Close price per candle.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// High per candle, falling back to the close when the source omits it.
pub fn highs(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.high.unwrap_or(c.close)).collect()
}

/// Low per candle, falling back to the close when the source omits it.
pub fn lows(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.low.unwrap_or(c.close)).collect()
}

/// Volume per candle, zero when the source omits it.
pub fn volumes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.volume.unwrap_or(0.0)).collect()
}
