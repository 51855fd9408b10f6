use thiserror::Error;

use crate::adapters::ProviderError;

/// Command-parse failures surfaced as direct user replies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("missing command(s)")]
    MissingArguments,
    #[error("invalid command '{value}'")]
    InvalidCommand { value: String },
}

/// Failures of a stock lookup after the command parsed successfully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The provider answered with a well-formed body that carries no series
    /// for the requested symbol.
    #[error("no series data for symbol '{symbol}'")]
    UnknownSymbol { symbol: String },

    /// No timestamp key in the fetched series matched the selector.
    #[error("no series entry matches selector '{selector}'")]
    InvalidSelector { selector: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
