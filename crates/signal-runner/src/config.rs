use indicator_engine::DEFAULT_LOW_WINDOW;
use signal_classifier::ClassifierConfig;
use std::str::FromStr;
use std::time::Duration;

/// Batch run configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Symbols to evaluate, in report order
    pub tickers: Vec<String>,
    /// History range passed to the price provider, e.g. "6mo"
    pub lookback_range: String,
    /// Trailing-low window in observations
    pub low_window: usize,
    pub http_timeout: Duration,
    /// Send the report even when no BUY/SELL occurred
    pub always_send: bool,
    pub classifier: ClassifierConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tickers: vec!["AAPL".to_string(), "TSLA".to_string(), "NVDA".to_string()],
            lookback_range: "6mo".to_string(),
            low_window: DEFAULT_LOW_WINDOW,
            http_timeout: Duration::from_secs(30),
            always_send: false,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Load from environment variables, falling back to defaults per field.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let default_classifier = defaults.classifier.clone();

        let tickers = match std::env::var("TICKERS") {
            Ok(raw) => {
                let parsed: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if parsed.is_empty() {
                    defaults.tickers
                } else {
                    parsed
                }
            }
            Err(_) => defaults.tickers,
        };

        Self {
            tickers,
            lookback_range: std::env::var("LOOKBACK_PERIOD")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.lookback_range),
            low_window: env_parse("LOW_WINDOW_DAYS", defaults.low_window),
            http_timeout: Duration::from_secs(env_parse("HTTP_TIMEOUT_SECS", 30)),
            always_send: env_parse("ALWAYS_SEND", defaults.always_send),
            classifier: ClassifierConfig {
                rsi_oversold: env_parse("RSI_OVERSOLD", default_classifier.rsi_oversold),
                rsi_overbought: env_parse("RSI_OVERBOUGHT", default_classifier.rsi_overbought),
                pe_max_for_buy: env_parse("PE_MAX_FOR_BUY", default_classifier.pe_max_for_buy),
                near_low_buffer: env_parse("NEAR_LOW_BUFFER", default_classifier.near_low_buffer),
                above_sma20_sell_buffer: env_parse(
                    "ABOVE_SMA20_SELL_BUFFER",
                    default_classifier.above_sma20_sell_buffer,
                ),
                buy_confluence: env_parse("BUY_CONFLUENCE", default_classifier.buy_confluence),
            },
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
