use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("No price data for {0}")]
    NoData(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
