use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Normalized market symbol/ticker.
///
/// Normalization only: the ticker is trimmed and uppercased, never validated
/// against a listing. Whether a symbol exists is confirmed solely by a
/// non-empty provider response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(input: &str) -> Self {
        Self(input.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
