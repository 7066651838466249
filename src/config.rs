// =============================================================================
// Indicator Configuration
// =============================================================================
//
// One strongly-typed parameter section per indicator.  Every field carries a
// `#[serde(default)]` so a section present in the JSON with fields missing
// deserializes to the documented defaults; this is the single
// apply-defaults step, and the computation modules only ever see concrete
// numeric periods.
//
// A section that is absent entirely means the caller does not want that
// indicator: it is omitted from the output bundle, not null-filled, so the
// chart layer can hide the panel.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ema_fast() -> usize {
    20
}

fn default_ema_slow() -> usize {
    50
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_mult() -> f64 {
    2.0
}

fn default_rsi_period() -> usize {
    14
}

fn default_atr_period() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_ichimoku_conversion() -> usize {
    9
}

fn default_ichimoku_base() -> usize {
    26
}

fn default_ichimoku_span_b() -> usize {
    52
}

// =============================================================================
// Per-indicator parameter sections
// =============================================================================

/// Fast/slow EMA overlay periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaParams {
    #[serde(default = "default_ema_fast")]
    pub fast: usize,
    #[serde(default = "default_ema_slow")]
    pub slow: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self {
            fast: default_ema_fast(),
            slow: default_ema_slow(),
        }
    }
}

/// Bollinger window length and deviation multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerParams {
    #[serde(default = "default_bollinger_period")]
    pub period: usize,
    #[serde(default = "default_bollinger_mult")]
    pub mult: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: default_bollinger_period(),
            mult: default_bollinger_mult(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiParams {
    #[serde(default = "default_rsi_period")]
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self {
            period: default_rsi_period(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrParams {
    #[serde(default = "default_atr_period")]
    pub period: usize,
}

impl Default for AtrParams {
    fn default() -> Self {
        Self {
            period: default_atr_period(),
        }
    }
}

/// Fast/slow/signal MACD periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdParams {
    #[serde(default = "default_macd_fast")]
    pub fast: usize,
    #[serde(default = "default_macd_slow")]
    pub slow: usize,
    #[serde(default = "default_macd_signal")]
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: default_macd_fast(),
            slow: default_macd_slow(),
            signal: default_macd_signal(),
        }
    }
}

/// Conversion/base/leading-span-B window lengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IchimokuParams {
    #[serde(default = "default_ichimoku_conversion")]
    pub conversion: usize,
    #[serde(default = "default_ichimoku_base")]
    pub base: usize,
    #[serde(default = "default_ichimoku_span_b")]
    pub span_b: usize,
}

impl Default for IchimokuParams {
    fn default() -> Self {
        Self {
            conversion: default_ichimoku_conversion(),
            base: default_ichimoku_base(),
            span_b: default_ichimoku_span_b(),
        }
    }
}

/// VWAP takes no parameters; the section's presence alone enables it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VwapParams {}

// =============================================================================
// IndicatorConfig
// =============================================================================

/// The full per-request indicator configuration.  Each `None` section means
/// "do not compute this indicator".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema: Option<EmaParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atr: Option<AtrParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ichimoku: Option<IchimokuParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vwap: Option<VwapParams>,
}

impl IndicatorConfig {
    /// Every section enabled with its default periods; the full chart panel.
    pub fn standard() -> Self {
        Self {
            ema: Some(EmaParams::default()),
            bollinger: Some(BollingerParams::default()),
            rsi: Some(RsiParams::default()),
            atr: Some(AtrParams::default()),
            macd: Some(MacdParams::default()),
            ichimoku: Some(IchimokuParams::default()),
            vwap: Some(VwapParams::default()),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read indicator config from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse indicator config from {}", path.display()))
    }
}
