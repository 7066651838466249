// =============================================================================
// Indicator Engine -- orchestrator
// =============================================================================
//
// Turns a candle slice plus a configuration into one bundle of named,
// positionally-aligned output series.  A single synchronous pass: derive the
// scalar arrays, invoke each enabled indicator with its concrete periods,
// build the axis labels, assemble the bundle.  No state survives the call;
// every invocation recomputes from scratch.

use chrono::{TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::candle::{self, Candle};
use crate::config::IndicatorConfig;
use crate::indicators::bollinger::{bollinger, BollingerSeries};
use crate::indicators::ichimoku::{ichimoku, IchimokuSeries};
use crate::indicators::macd::{macd, MacdSeries};
use crate::indicators::{atr::atr, ema::ema, rsi::rsi, vwap::vwap};

/// Everything computed for one request.  Series for indicators whose config
/// section was absent are omitted entirely (and skipped in serialization) so
/// the chart layer can hide the corresponding panel.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorBundle {
    /// One axis label per candle: the formatted open time, or `#index` when
    /// the source has no real timestamps.
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_fast: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_slow: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ichimoku: Option<IchimokuSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwap: Option<Vec<Option<f64>>>,
}

/// Compute every indicator enabled in `config` over `candles`.
///
/// An empty candle slice yields a bundle of empty series; invalid or
/// too-large periods degrade to all-`None` series inside the modules.  This
/// function never fails.
pub fn compute(candles: &[Candle], config: &IndicatorConfig) -> IndicatorBundle {
    let closes = candle::closes(candles);
    let highs = candle::highs(candles);
    let lows = candle::lows(candles);
    let volumes = candle::volumes(candles);

    let labels = axis_labels(candles);

    let (ema_fast, ema_slow) = match &config.ema {
        Some(p) => (Some(ema(&closes, p.fast)), Some(ema(&closes, p.slow))),
        None => (None, None),
    };

    let bundle = IndicatorBundle {
        labels,
        ema_fast,
        ema_slow,
        bollinger: config
            .bollinger
            .as_ref()
            .map(|p| bollinger(&closes, p.period, p.mult)),
        rsi: config.rsi.as_ref().map(|p| rsi(&closes, p.period)),
        atr: config
            .atr
            .as_ref()
            .map(|p| atr(&highs, &lows, &closes, p.period)),
        macd: config
            .macd
            .as_ref()
            .map(|p| macd(&closes, p.fast, p.slow, p.signal)),
        ichimoku: config
            .ichimoku
            .as_ref()
            .map(|p| ichimoku(&highs, &lows, p.conversion, p.base, p.span_b)),
        vwap: config
            .vwap
            .as_ref()
            .map(|_| vwap(&highs, &lows, &closes, &volumes)),
    };

    debug!(
        candles = candles.len(),
        ema = bundle.ema_fast.is_some(),
        bollinger = bundle.bollinger.is_some(),
        rsi = bundle.rsi.is_some(),
        atr = bundle.atr.is_some(),
        macd = bundle.macd.is_some(),
        ichimoku = bundle.ichimoku.is_some(),
        vwap = bundle.vwap.is_some(),
        "Indicator bundle computed"
    );

    bundle
}

/// One label per candle: formatted UTC open time, or a synthetic `#index`
/// when the candle carries no timestamp.
fn axis_labels(candles: &[Candle]) -> Vec<String> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| match c.open_time.and_then(format_open_time) {
            Some(label) => label,
            None => format!("#{i}"),
        })
        .collect()
}

fn format_open_time(millis: i64) -> Option<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AtrParams, IndicatorConfig, RsiParams};

    fn candles(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.5).sin() * 10.0;
                Candle {
                    open_time: Some(1_700_000_000_000 + i as i64 * 60_000),
                    open: base - 0.5,
                    high: Some(base + 2.0),
                    low: Some(base - 2.0),
                    close: base + 0.5,
                    volume: Some(100.0 + i as f64),
                }
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_bundle() {
        let bundle = compute(&[], &IndicatorConfig::standard());
        assert!(bundle.labels.is_empty());
        assert!(bundle.ema_fast.unwrap().is_empty());
        assert!(bundle.ema_slow.unwrap().is_empty());
        assert!(bundle.rsi.unwrap().is_empty());
        assert!(bundle.atr.unwrap().is_empty());
        assert!(bundle.vwap.unwrap().is_empty());
        assert!(bundle.macd.unwrap().macd.is_empty());
        assert!(bundle.bollinger.unwrap().middle.is_empty());
        assert!(bundle.ichimoku.unwrap().tenkan.is_empty());
    }

    #[test]
    fn every_series_aligns_with_input() {
        let candles = candles(80);
        let bundle = compute(&candles, &IndicatorConfig::standard());
        let n = candles.len();

        assert_eq!(bundle.labels.len(), n);
        assert_eq!(bundle.ema_fast.as_ref().unwrap().len(), n);
        assert_eq!(bundle.ema_slow.as_ref().unwrap().len(), n);
        assert_eq!(bundle.rsi.as_ref().unwrap().len(), n);
        assert_eq!(bundle.atr.as_ref().unwrap().len(), n);
        assert_eq!(bundle.vwap.as_ref().unwrap().len(), n);

        let bands = bundle.bollinger.as_ref().unwrap();
        assert_eq!(bands.upper.len(), n);
        assert_eq!(bands.middle.len(), n);
        assert_eq!(bands.lower.len(), n);

        let macd = bundle.macd.as_ref().unwrap();
        assert_eq!(macd.macd.len(), n);
        assert_eq!(macd.signal.len(), n);
        assert_eq!(macd.histogram.len(), n);

        let cloud = bundle.ichimoku.as_ref().unwrap();
        assert_eq!(cloud.tenkan.len(), n);
        assert_eq!(cloud.kijun.len(), n);
        assert_eq!(cloud.span_a.len(), n);
        assert_eq!(cloud.span_b.len(), n);
    }

    #[test]
    fn absent_sections_are_omitted() {
        let config = IndicatorConfig {
            rsi: Some(RsiParams::default()),
            atr: Some(AtrParams::default()),
            ..Default::default()
        };
        let bundle = compute(&candles(40), &config);
        assert!(bundle.rsi.is_some());
        assert!(bundle.atr.is_some());
        assert!(bundle.ema_fast.is_none());
        assert!(bundle.ema_slow.is_none());
        assert!(bundle.bollinger.is_none());
        assert!(bundle.macd.is_none());
        assert!(bundle.ichimoku.is_none());
        assert!(bundle.vwap.is_none());
    }

    #[test]
    fn omitted_sections_skip_serialization() {
        let config = IndicatorConfig {
            rsi: Some(RsiParams::default()),
            ..Default::default()
        };
        let bundle = compute(&candles(40), &config);
        let json = serde_json::to_value(&bundle).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("labels"));
        assert!(object.contains_key("rsi"));
        assert!(!object.contains_key("macd"));
        assert!(!object.contains_key("vwap"));
        assert!(!object.contains_key("ema_fast"));
    }

    #[test]
    fn labels_use_timestamps_when_present() {
        let candles = vec![Candle {
            open_time: Some(1_700_000_000_000),
            open: 1.0,
            high: None,
            low: None,
            close: 1.0,
            volume: None,
        }];
        let bundle = compute(&candles, &IndicatorConfig::default());
        assert_eq!(bundle.labels, vec!["2023-11-14 22:13".to_string()]);
    }

    #[test]
    fn labels_fall_back_to_index() {
        let candles: Vec<Candle> = (0..3)
            .map(|i| Candle {
                open_time: None,
                open: 1.0,
                high: None,
                low: None,
                close: 1.0 + i as f64,
                volume: None,
            })
            .collect();
        let bundle = compute(&candles, &IndicatorConfig::default());
        assert_eq!(bundle.labels, vec!["#0", "#1", "#2"]);
    }

    #[test]
    fn partial_candles_degrade_gracefully() {
        // No high/low/volume anywhere: ATR sees zero ranges, VWAP never
        // defines (no volume traded), and nothing panics.
        let candles: Vec<Candle> = (0..30)
            .map(|i| Candle {
                open_time: None,
                open: 0.0,
                high: None,
                low: None,
                close: 100.0 + i as f64,
                volume: None,
            })
            .collect();
        let bundle = compute(&candles, &IndicatorConfig::standard());

        let atr = bundle.atr.unwrap();
        // High/low collapse onto the close, so the true range comes entirely
        // from the bar-to-bar close change of 1.0; the smoothed series
        // approaches that from below (the first bar has zero range).
        let last = atr[29].unwrap();
        assert!(last > 0.9 && last < 1.0, "unexpected ATR {last}");
        for value in atr.iter().flatten() {
            assert!(*value >= 0.0);
        }
        assert_eq!(bundle.vwap.unwrap(), vec![None; 30]);
    }
}
