use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily closing price observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyClose {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Valuation multiples from an external lookup. Best-effort: either field
/// may be missing and the lookup itself never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
}

/// Indicators derived for one symbol in one evaluation run.
///
/// Every field except `last_price` is optional; a missing indicator must be
/// handled as its own branch downstream, never collapsed to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub last_price: f64,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi: Option<f64>,
    pub low_3m: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
}

/// Trading signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Report tag for the signal
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

/// A classified signal plus the conditions that fired, in rule order.
/// For HOLD the list holds contextual notes only and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub signal: Signal,
    pub reasons: Vec<String>,
}
