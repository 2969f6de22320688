use signal_core::{Classification, IndicatorSet, Signal, SignalError};

/// Running tally of actionable signals in one report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SignalTally {
    pub buys: usize,
    pub sells: usize,
}

impl SignalTally {
    pub fn any_actionable(&self) -> bool {
        self.buys > 0 || self.sells > 0
    }
}

/// Decide whether a report should go out. Pure function of the tally plus
/// the always-send flag.
pub fn should_dispatch(tally: SignalTally, always_send: bool) -> bool {
    always_send || tally.any_actionable()
}

/// Accumulates one formatted row per ticker plus the BUY/SELL tally.
/// Built fresh every run; nothing carries over between runs.
pub struct DailyReport {
    date: String,
    rows: Vec<String>,
    tally: SignalTally,
}

impl DailyReport {
    pub fn new(date: String) -> Self {
        Self {
            date,
            rows: Vec::new(),
            tally: SignalTally::default(),
        }
    }

    pub fn push_signal(
        &mut self,
        symbol: &str,
        indicators: &IndicatorSet,
        classification: &Classification,
    ) {
        match classification.signal {
            Signal::Buy => self.tally.buys += 1,
            Signal::Sell => self.tally.sells += 1,
            Signal::Hold => {}
        }
        self.rows.push(format_row(symbol, indicators, classification));
    }

    pub fn push_error(&mut self, symbol: &str, error: &SignalError) {
        self.rows.push(format!("{:<10} | ERROR: {}", symbol, error));
    }

    pub fn tally(&self) -> SignalTally {
        self.tally
    }

    pub fn render(&self) -> String {
        let header = format!("Stock Signals - {}", self.date);
        format!("{}\n{}\n{}", header, "-".repeat(80), self.rows.join("\n"))
    }
}

fn fmt_or_na(value: Option<f64>, label: &str, decimals: usize) -> String {
    match value {
        Some(v) => format!("{} {:.*}", label, decimals, v),
        None => format!("{} n/a", label),
    }
}

fn format_row(symbol: &str, ind: &IndicatorSet, classification: &Classification) -> String {
    let bits = [
        format!("{:<10}", symbol),
        format!("Px {:.2}", ind.last_price),
        fmt_or_na(ind.rsi, "RSI", 1),
        fmt_or_na(ind.sma20, "SMA20", 2),
        fmt_or_na(ind.sma50, "SMA50", 2),
        fmt_or_na(ind.low_3m, "3mLow", 2),
        fmt_or_na(ind.trailing_pe, "PE", 1),
        fmt_or_na(ind.price_to_book, "PB", 2),
        format!("=> {}", classification.signal.label()),
    ];
    let line = bits.join(" | ");

    if classification.reasons.is_empty() {
        line
    } else {
        format!("{}\n  -> {}", line, classification.reasons.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators() -> IndicatorSet {
        IndicatorSet {
            last_price: 95.0,
            sma20: Some(100.0),
            sma50: Some(101.5),
            rsi: Some(25.0),
            low_3m: Some(94.0),
            trailing_pe: None,
            price_to_book: Some(4.25),
        }
    }

    #[test]
    fn test_row_renders_fields_and_rationale() {
        let mut report = DailyReport::new("2026-08-25".to_string());
        let classification = Classification {
            signal: Signal::Buy,
            reasons: vec!["RSI 25.0 < 30 (oversold)".to_string(), "Below SMA20".to_string()],
        };
        report.push_signal("AAPL", &indicators(), &classification);

        let rendered = report.render();
        assert!(rendered.starts_with("Stock Signals - 2026-08-25\n"));
        assert!(rendered.contains(
            "AAPL       | Px 95.00 | RSI 25.0 | SMA20 100.00 | SMA50 101.50 | 3mLow 94.00 | PE n/a | PB 4.25 | => BUY"
        ));
        assert!(rendered.contains("\n  -> RSI 25.0 < 30 (oversold); Below SMA20"));
    }

    #[test]
    fn test_hold_with_no_context_is_a_single_line() {
        let mut report = DailyReport::new("2026-08-25".to_string());
        let classification = Classification {
            signal: Signal::Hold,
            reasons: vec![],
        };
        report.push_signal("AAPL", &indicators(), &classification);
        assert!(!report.render().contains("->"));
    }

    #[test]
    fn test_error_row_names_ticker_and_cause() {
        let mut report = DailyReport::new("2026-08-25".to_string());
        report.push_error("BOGUS", &SignalError::NoData("BOGUS".to_string()));
        assert!(report
            .render()
            .contains("BOGUS      | ERROR: No price data for BOGUS"));
    }

    #[test]
    fn test_tally_counts_only_actionable_signals() {
        let mut report = DailyReport::new("2026-08-25".to_string());
        let ind = indicators();
        for signal in [Signal::Buy, Signal::Buy, Signal::Sell, Signal::Hold] {
            report.push_signal(
                "AAPL",
                &ind,
                &Classification {
                    signal,
                    reasons: vec![],
                },
            );
        }
        assert_eq!(report.tally(), SignalTally { buys: 2, sells: 1 });
    }

    #[test]
    fn test_dispatch_policy() {
        let quiet = SignalTally::default();
        let active = SignalTally { buys: 1, sells: 0 };

        assert!(!should_dispatch(quiet, false));
        assert!(should_dispatch(quiet, true));
        assert!(should_dispatch(active, false));
        assert!(should_dispatch(SignalTally { buys: 0, sells: 1 }, false));
    }
}
