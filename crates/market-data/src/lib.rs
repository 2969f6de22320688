use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use signal_core::{DailyClose, PriceHistoryProvider, SignalError, Valuation, ValuationLookup};
use std::time::Duration;

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo Finance client for daily close history and valuation multiples.
///
/// History comes from the v8 chart endpoint, valuation from v10
/// quoteSummary. Works for US symbols ("AAPL") and exchange-suffixed ones
/// ("0700.HK") alike.
#[derive(Clone)]
pub struct YahooClient {
    client: Client,
}

impl YahooClient {
    pub fn new(timeout: Duration) -> Self {
        // Yahoo rejects the default reqwest user agent
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; signal-sentry/0.1)")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// GET with one bounded retry on HTTP 429.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SignalError> {
        for attempt in 0..2u32 {
            let response = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(|e| SignalError::Api(e.to_string()))?;

            if response.status().as_u16() == 429 && attempt == 0 {
                tracing::warn!("Yahoo rate limited, retrying in 2s");
                tokio::time::sleep(Duration::from_secs(2)).await;
                continue;
            }

            if !response.status().is_success() {
                return Err(SignalError::Api(format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                )));
            }

            return response
                .json::<T>()
                .await
                .map_err(|e| SignalError::Api(e.to_string()));
        }

        Err(SignalError::Api("Rate limited by Yahoo after retry".to_string()))
    }
}

#[async_trait]
impl PriceHistoryProvider for YahooClient {
    async fn fetch_closes(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<Vec<DailyClose>, SignalError> {
        let url = format!("{}/v8/finance/chart/{}", BASE_URL, symbol);
        let response: ChartResponse = self
            .get_json(&url, &[("range", range), ("interval", "1d"), ("includeAdjustedClose", "true")])
            .await?;

        let result = response
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| SignalError::NoData(symbol.to_string()))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .and_then(|q| q.close)
            .unwrap_or_default();

        // Yahoo pads halted sessions with nulls; drop them.
        let series: Vec<DailyClose> = timestamps
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close?;
                let timestamp = DateTime::<Utc>::from_timestamp(ts, 0)?;
                Some(DailyClose { timestamp, close })
            })
            .collect();

        if series.is_empty() {
            return Err(SignalError::NoData(symbol.to_string()));
        }

        Ok(series)
    }
}

#[async_trait]
impl ValuationLookup for YahooClient {
    /// Valuation is best-effort: any failure degrades to empty fields so a
    /// flaky quoteSummary response can never abort the run.
    async fn lookup(&self, symbol: &str) -> Valuation {
        let url = format!("{}/v10/finance/quoteSummary/{}", BASE_URL, symbol);
        let response: Result<QuoteSummaryResponse, SignalError> = self
            .get_json(&url, &[("modules", "summaryDetail,defaultKeyStatistics")])
            .await;

        match response {
            Ok(r) => r.into_valuation(),
            Err(e) => {
                tracing::debug!(symbol = %symbol, "valuation lookup failed: {e}");
                Valuation::default()
            }
        }
    }
}

// --- v8 chart response ---

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Option<Vec<Option<f64>>>,
}

// --- v10 quoteSummary response ---

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryEnvelope,
}

impl QuoteSummaryResponse {
    fn into_valuation(self) -> Valuation {
        let result = self
            .quote_summary
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) });

        match result {
            Some(r) => Valuation {
                trailing_pe: r
                    .summary_detail
                    .and_then(|d| d.trailing_pe)
                    .and_then(|v| v.raw),
                price_to_book: r
                    .default_key_statistics
                    .and_then(|s| s.price_to_book)
                    .and_then(|v| v.raw),
            },
            None => Valuation::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetail>,
    #[serde(rename = "defaultKeyStatistics")]
    default_key_statistics: Option<KeyStatistics>,
}

#[derive(Debug, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct KeyStatistics {
    #[serde(rename = "priceToBook")]
    price_to_book: Option<RawValue>,
}

/// Yahoo wraps numbers as {"raw": 27.5, "fmt": "27.50"}; only raw matters.
#[derive(Debug, Deserialize)]
struct RawValue {
    raw: Option<f64>,
}
