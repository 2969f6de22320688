pub mod config;
pub mod report;

pub use config::RunnerConfig;
pub use report::{should_dispatch, DailyReport, SignalTally};

use indicator_engine::IndicatorEngine;
use signal_classifier::SignalClassifier;
use signal_core::{
    Classification, IndicatorSet, PriceHistoryProvider, SignalError, ValuationLookup,
};

/// Batch orchestrator: one daily pass over the configured tickers.
///
/// Generic over its collaborators so tests can drive it with in-memory
/// providers. Tickers are independent; rows land in input order.
pub struct SignalRunner<P, V> {
    provider: P,
    valuation: V,
    engine: IndicatorEngine,
    classifier: SignalClassifier,
    config: RunnerConfig,
}

impl<P, V> SignalRunner<P, V>
where
    P: PriceHistoryProvider,
    V: ValuationLookup,
{
    /// An empty ticker list is the one unrecoverable configuration problem;
    /// it is rejected here, before any fetch happens.
    pub fn new(config: RunnerConfig, provider: P, valuation: V) -> Result<Self, SignalError> {
        if config.tickers.is_empty() {
            return Err(SignalError::Config("ticker list is empty".to_string()));
        }

        Ok(Self {
            engine: IndicatorEngine::with_low_window(config.low_window),
            classifier: SignalClassifier::new(config.classifier.clone()),
            provider,
            valuation,
            config,
        })
    }

    /// Run one batch pass. A per-ticker failure becomes an error row and
    /// the run continues; the report is produced even if every ticker fails.
    pub async fn run_once(&self) -> DailyReport {
        let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let mut report = DailyReport::new(date);

        for symbol in &self.config.tickers {
            match self.evaluate(symbol).await {
                Ok((indicators, classification)) => {
                    tracing::info!(
                        symbol = %symbol,
                        signal = classification.signal.label(),
                        "evaluated"
                    );
                    report.push_signal(symbol, &indicators, &classification);
                }
                Err(e) => {
                    tracing::warn!(symbol = %symbol, "evaluation failed: {}", e);
                    report.push_error(symbol, &e);
                }
            }
        }

        report
    }

    async fn evaluate(
        &self,
        symbol: &str,
    ) -> Result<(IndicatorSet, Classification), SignalError> {
        let history = self
            .provider
            .fetch_closes(symbol, &self.config.lookback_range)
            .await?;
        let valuation = self.valuation.lookup(symbol).await;
        let indicators = self.engine.compute(symbol, &history, valuation)?;
        let classification = self.classifier.classify(&indicators);
        Ok((indicators, classification))
    }
}
