// =============================================================================
// prism-ta -- technical-indicator computation engine
// =============================================================================
//
// Pure numeric transforms from an OHLCV candle series to named, aligned
// output series for charting: moving averages, Bollinger bands, RSI, ATR,
// MACD, Ichimoku lines and cumulative VWAP.
//
// The engine is synchronous and stateless.  It borrows the
// input read-only, allocates fresh output series, and degrades to `None`
// instead of failing when there is not enough history.  Data fetching,
// caching and rendering live elsewhere; this crate only computes.
// =============================================================================

pub mod candle;
pub mod config;
pub mod engine;
pub mod indicators;

pub use candle::Candle;
pub use config::IndicatorConfig;
pub use engine::{compute, IndicatorBundle};
