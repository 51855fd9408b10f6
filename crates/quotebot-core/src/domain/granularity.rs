use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::Symbol;

/// User-selected time resolution for a stock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One entry per trading day (`d`).
    Daily,
    /// One entry per minute of the most recent sessions (`t`).
    Intraday,
    /// One entry per calendar month (`m`).
    Monthly,
}

impl Granularity {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Intraday, Self::Monthly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "d",
            Self::Intraday => "t",
            Self::Monthly => "m",
        }
    }

    /// Provider function identifier for the upstream query.
    pub const fn provider_function(self) -> &'static str {
        match self {
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Intraday => "TIME_SERIES_INTRADAY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Key under which the provider nests this series in its response body.
    /// The same label appears in report subtitles.
    pub const fn series_key(self) -> &'static str {
        match self {
            Self::Daily => "Time Series (Daily)",
            Self::Intraday => "Time Series (1min)",
            Self::Monthly => "Monthly Time Series",
        }
    }

    /// Query parameters for the upstream request, in provider-documented
    /// order, without the api key.
    pub fn query_params(self, symbol: &Symbol) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("function", self.provider_function().to_owned()),
            ("symbol", symbol.as_str().to_owned()),
        ];

        if self == Self::Intraday {
            params.push(("interval", String::from("1min")));
        }

        // The monthly series is small enough that the provider ignores the
        // output size; it is omitted there.
        if self != Self::Monthly {
            params.push(("outputsize", String::from("full")));
        }

        params
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "d" => Ok(Self::Daily),
            "t" => Ok(Self::Intraday),
            "m" => Ok(Self::Monthly),
            other => Err(CommandError::InvalidCommand {
                value: other.to_owned(),
            }),
        }
    }
}
