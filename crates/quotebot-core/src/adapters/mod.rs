mod alphavantage;

pub use alphavantage::{AlphaVantageClient, ProviderError, DEFAULT_BASE_URL};
