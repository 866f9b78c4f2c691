//! Out-of-range handling policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStrategyError;

/// What the encoder does with a value outside its declared range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Drop the value. The encoded sequence can be shorter than the input,
    /// and input positions no longer line up with decoded positions.
    Ignore,
    /// Clamp the value to the violated bound and encode it
    #[default]
    Saturate,
    /// Reject the value with `EncodeError::OutOfRange`
    Error,
}

impl Strategy {
    /// All strategies, in declaration order
    pub const ALL: [Self; 3] = [Self::Ignore, Self::Saturate, Self::Error];

    /// Lowercase name, as accepted by `from_str`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Saturate => "saturate",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| ParseStrategyError { tag: s.to_owned() })
    }
}
