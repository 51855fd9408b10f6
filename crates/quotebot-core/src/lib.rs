//! Core pipeline for quotebot.
//!
//! This crate contains:
//! - Command parsing and the granularity/query mapping
//! - Series location and predecessor lookup
//! - Report building and help text
//! - The HTTP transport seam and the Alpha Vantage adapter
//! - The per-message handler tying the pipeline together

pub mod adapters;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod help;
pub mod http_client;
pub mod parser;
pub mod report;

pub use adapters::{AlphaVantageClient, ProviderError, DEFAULT_BASE_URL};
pub use domain::{Granularity, OhlcvRecord, Selector, SeriesEntry, SeriesMatch, Symbol, TimeSeries};
pub use error::{CommandError, LookupError};
pub use gateway::{IncomingMessage, Reply};
pub use handler::MessageHandler;
pub use help::help_text;
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use parser::{parse_message, LookupRequest, Request};
pub use report::{build_report, ColorHint, ReportField, ReportPayload};
