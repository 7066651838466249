// =============================================================================
// prism-ta -- inspection binary
// =============================================================================
//
// Reads a candle series from a JSON file, computes the configured indicators
// and prints the resulting bundle as JSON.  A development harness for eyeballing
// engine output; the dashboard consumes the library directly.
//
// Usage:
//   prism-ta <candles.json> [config.json]
//
// Without a config file the full standard panel is computed.
// =============================================================================

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prism_ta::candle::Candle;
use prism_ta::config::IndicatorConfig;
use prism_ta::engine;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let candles_path = args
        .next()
        .context("usage: prism-ta <candles.json> [config.json]")?;

    let config = match args.next() {
        Some(path) => IndicatorConfig::load(&path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using the standard panel");
            IndicatorConfig::standard()
        }),
        None => IndicatorConfig::standard(),
    };

    let raw = std::fs::read_to_string(&candles_path)
        .with_context(|| format!("Failed to read candles from {candles_path}"))?;
    let candles: Vec<Candle> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse candles from {candles_path}"))?;

    info!(candles = candles.len(), "Computing indicator bundle");
    let bundle = engine::compute(&candles, &config);

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
