use crate::domain::{Granularity, Selector, Symbol};
use crate::error::CommandError;

/// A parsed stock lookup: symbol, granularity, and point selector.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub symbol: Symbol,
    pub granularity: Granularity,
    pub selector: Selector,
}

/// A message addressed to the bot.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Help,
    Lookup(LookupRequest),
}

/// Parses an incoming message against the configured prefix.
///
/// Returns `None` when the message is not addressed to the bot. The expected
/// form is `[prefix][symbol] [command] [selector]`, split on one-or-more
/// whitespace characters; tokens past the selector are ignored.
pub fn parse_message(content: &str, prefix: &str) -> Option<Result<Request, CommandError>> {
    let rest = content.strip_prefix(prefix)?;
    Some(parse_request(rest))
}

fn parse_request(rest: &str) -> Result<Request, CommandError> {
    let mut tokens = rest.split_whitespace();

    let symbol_token = tokens.next().unwrap_or("");
    if symbol_token.eq_ignore_ascii_case("help") {
        return Ok(Request::Help);
    }

    // A bare prefix carries no symbol; fold it into the missing-arguments
    // path rather than querying the provider with an empty ticker.
    if symbol_token.is_empty() {
        return Err(CommandError::MissingArguments);
    }

    let (Some(command_token), Some(selector_token)) = (tokens.next(), tokens.next()) else {
        return Err(CommandError::MissingArguments);
    };

    let granularity: Granularity = command_token.parse()?;

    Ok(Request::Lookup(LookupRequest {
        symbol: Symbol::new(symbol_token),
        granularity,
        selector: Selector::parse(selector_token),
    }))
}
