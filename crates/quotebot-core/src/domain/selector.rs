use std::fmt::{Display, Formatter};

/// User-supplied token identifying which point in a series to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The literal `now`: the most recent entry.
    Latest,
    /// A substring matched against timestamp keys.
    Match(String),
}

impl Selector {
    pub fn parse(token: &str) -> Self {
        if token == "now" {
            Self::Latest
        } else {
            Self::Match(token.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Latest => "now",
            Self::Match(needle) => needle,
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
