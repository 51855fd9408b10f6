use crate::adapters::AlphaVantageClient;
use crate::error::{CommandError, LookupError};
use crate::gateway::{IncomingMessage, Reply};
use crate::help::help_text;
use crate::parser::{parse_message, LookupRequest, Request};
use crate::report::{build_report, ReportPayload};

/// Per-message pipeline: parse, fetch, locate, report.
///
/// Holds no mutable state; concurrent messages run as independent,
/// non-interfering invocations. The provider fetch is the only suspension
/// point.
pub struct MessageHandler {
    prefix: String,
    provider: AlphaVantageClient,
}

impl MessageHandler {
    pub fn new(prefix: impl Into<String>, provider: AlphaVantageClient) -> Self {
        Self {
            prefix: prefix.into(),
            provider,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Handles one incoming message.
    ///
    /// `None` means the message was not addressed to the bot and no reply is
    /// owed. Every failure mode becomes a direct, human-readable reply; none
    /// is fatal to the handler.
    pub async fn handle(&self, message: &IncomingMessage) -> Option<Reply> {
        if message.author_is_bot {
            return None;
        }

        let request = match parse_message(&message.content, &self.prefix)? {
            Ok(request) => request,
            Err(error) => return Some(Reply::Text(self.describe_command_error(&error))),
        };

        let lookup = match request {
            Request::Help => return Some(Reply::Text(help_text(&self.prefix))),
            Request::Lookup(lookup) => lookup,
        };

        let reply = match self.run_lookup(&lookup).await {
            Ok(report) => Reply::Report(report),
            Err(error) => Reply::Text(self.describe_lookup_error(&error)),
        };

        Some(reply)
    }

    async fn run_lookup(&self, lookup: &LookupRequest) -> Result<ReportPayload, LookupError> {
        let series = self
            .provider
            .fetch_series(&lookup.symbol, lookup.granularity)
            .await?
            .ok_or_else(|| LookupError::UnknownSymbol {
                symbol: lookup.symbol.to_string(),
            })?;

        let found = series
            .locate(&lookup.selector)
            .ok_or_else(|| LookupError::InvalidSelector {
                selector: lookup.selector.as_str().to_owned(),
            })?;

        Ok(build_report(
            &lookup.symbol,
            lookup.granularity.series_key(),
            found.entry,
            found.previous,
        ))
    }

    fn describe_command_error(&self, error: &CommandError) -> String {
        match error {
            CommandError::MissingArguments => String::from("Missing command(s)."),
            CommandError::InvalidCommand { .. } => {
                format!("Invalid command. See {}help for details.", self.prefix)
            }
        }
    }

    fn describe_lookup_error(&self, error: &LookupError) -> String {
        match error {
            LookupError::UnknownSymbol { symbol } => {
                format!("The stock you requested, {symbol}, does not exist.")
            }
            LookupError::InvalidSelector { selector } => format!(
                "The date/time you requested, {selector}, is invalid.\n\
                 Either it is too far into the future or the past, or the market was closed at that time.\n\
                 Please note that the stock market opens at 09:30 EST, and closes at 16:00 EST.\n\
                 Refer to the help command ({}help).",
                self.prefix
            ),
            LookupError::Provider(provider_error) => {
                log::warn!("provider fetch failed: {provider_error}");
                String::from("The data provider could not be reached. Please try again later.")
            }
        }
    }
}
