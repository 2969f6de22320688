use signal_core::{DailyClose, IndicatorSet, SignalError, Valuation};

use crate::indicators::{rsi, sma, trailing_low};

pub const SMA_SHORT_PERIOD: usize = 20;
pub const SMA_LONG_PERIOD: usize = 50;
pub const RSI_PERIOD: usize = 14;
/// ~3 months of trading days
pub const DEFAULT_LOW_WINDOW: usize = 60;

/// Derives the full indicator set for one symbol from its daily close
/// history. Pure apart from its inputs: the same series and valuation
/// always produce the same `IndicatorSet`.
pub struct IndicatorEngine {
    low_window: usize,
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self {
            low_window: DEFAULT_LOW_WINDOW,
        }
    }

    pub fn with_low_window(low_window: usize) -> Self {
        Self { low_window }
    }

    /// Compute indicators over a close series (oldest first) plus
    /// best-effort valuation fields already normalized by the lookup.
    ///
    /// Indicators whose window exceeds the series length come back as
    /// `None`; an empty series is the only failure.
    pub fn compute(
        &self,
        symbol: &str,
        history: &[DailyClose],
        valuation: Valuation,
    ) -> Result<IndicatorSet, SignalError> {
        if history.is_empty() {
            return Err(SignalError::NoData(symbol.to_string()));
        }

        let closes: Vec<f64> = history.iter().map(|c| c.close).collect();

        Ok(IndicatorSet {
            last_price: *closes.last().unwrap(),
            sma20: sma(&closes, SMA_SHORT_PERIOD).last().copied(),
            sma50: sma(&closes, SMA_LONG_PERIOD).last().copied(),
            rsi: rsi(&closes, RSI_PERIOD).last().copied(),
            low_3m: trailing_low(&closes, self.low_window),
            trailing_pe: valuation.trailing_pe,
            price_to_book: valuation.price_to_book,
        })
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
