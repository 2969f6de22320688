//! Rule-based BUY / SELL / HOLD classification over a computed indicator set.

use signal_core::{Classification, IndicatorSet, Signal};

/// Thresholds for the decision rules.
///
/// Comparisons against a missing indicator are skipped, never treated as
/// satisfied. A missing trailing P/E is the one exception: it counts as
/// "valuation not disqualifying" on the buy side.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Treat P/E above this as expensive (blocks the valuation buy reason)
    pub pe_max_for_buy: f64,
    /// Price within this multiple of the trailing low counts as "near low"
    pub near_low_buffer: f64,
    /// Price above SMA20 times this multiple counts as stretched
    pub above_sma20_sell_buffer: f64,
    /// How many buy conditions must fire before a BUY is issued
    pub buy_confluence: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            pe_max_for_buy: 30.0,
            near_low_buffer: 1.05,
            above_sma20_sell_buffer: 1.05,
            buy_confluence: 3,
        }
    }
}

pub struct SignalClassifier {
    config: ClassifierConfig,
}

impl SignalClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Apply the decision rules in order: buy confluence first, then the
    /// lower-bar sell check, then HOLD with contextual notes. The first
    /// decisive match wins, so an indicator set clearing both bars is a BUY.
    pub fn classify(&self, ind: &IndicatorSet) -> Classification {
        let cfg = &self.config;
        let price = ind.last_price;

        // Buy case: momentum washed out, price near its recent floor,
        // valuation not disqualifying, trading below the short average.
        let mut buy_reasons = Vec::new();
        if let Some(rsi) = ind.rsi {
            if rsi < cfg.rsi_oversold {
                buy_reasons.push(format!("RSI {:.1} < {} (oversold)", rsi, cfg.rsi_oversold));
            }
        }
        if let Some(low) = ind.low_3m {
            if price <= low * cfg.near_low_buffer {
                buy_reasons.push(format!("Price near 3m low ({:.2} vs low {:.2})", price, low));
            }
        }
        if ind.trailing_pe.map_or(true, |pe| pe <= cfg.pe_max_for_buy) {
            buy_reasons.push("Valuation ok (PE not high)".to_string());
        }
        if let Some(sma20) = ind.sma20 {
            if price < sma20 {
                buy_reasons.push(format!("Below SMA20 ({:.2} < {:.2})", price, sma20));
            }
        }
        if buy_reasons.len() >= cfg.buy_confluence {
            return Classification {
                signal: Signal::Buy,
                reasons: buy_reasons,
            };
        }

        // Sell case: stretched or momentum hot. A single condition is
        // enough; trimming needs less confirmation than buying.
        let mut sell_reasons = Vec::new();
        if let Some(rsi) = ind.rsi {
            if rsi > cfg.rsi_overbought {
                sell_reasons.push(format!("RSI {:.1} > {} (overbought)", rsi, cfg.rsi_overbought));
            }
        }
        if let Some(sma20) = ind.sma20 {
            if price > sma20 * cfg.above_sma20_sell_buffer {
                sell_reasons.push(format!(
                    "> {:.0}% above SMA20",
                    (cfg.above_sma20_sell_buffer - 1.0) * 100.0
                ));
            }
        }
        if !sell_reasons.is_empty() {
            return Classification {
                signal: Signal::Sell,
                reasons: sell_reasons,
            };
        }

        // Hold: attach context only, none of it decisive.
        let mut context = Vec::new();
        if let Some(rsi) = ind.rsi {
            context.push(format!("RSI {:.1}", rsi));
        }
        if let (Some(sma20), Some(sma50)) = (ind.sma20, ind.sma50) {
            let trend = if sma20 > sma50 { "up" } else { "down" };
            context.push(format!(
                "Trend: SMA20 {:.2} vs SMA50 {:.2} ({})",
                sma20, sma50, trend
            ));
        }
        Classification {
            signal: Signal::Hold,
            reasons: context,
        }
    }
}

impl Default for SignalClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
