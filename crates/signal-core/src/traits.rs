use crate::{DailyClose, SignalError, Valuation};
use async_trait::async_trait;

/// Source of daily close history for a symbol
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch daily closes, ordered oldest first. Fails with
    /// `SignalError::NoData` when the symbol has no history.
    async fn fetch_closes(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<Vec<DailyClose>, SignalError>;
}

/// Best-effort valuation lookup. Infallible by contract: anything missing
/// or non-numeric resolves to `None` in the returned `Valuation`.
#[async_trait]
pub trait ValuationLookup: Send + Sync {
    async fn lookup(&self, symbol: &str) -> Valuation;
}

/// Outbound notification channel
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns true when the message was handed to a transport. A missing
    /// transport configuration is a normal `false`, not an error.
    async fn send(&self, subject: &str, body: &str) -> bool;
}
