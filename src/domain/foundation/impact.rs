//! Impact direction value objects: whether more of a criterion is better or worse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{TopsisError, ValidationError};

/// Direction of a criterion: `+` (Benefit) or `-` (Cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher values are preferred.
    Benefit,
    /// Lower values are preferred.
    Cost,
}

impl Impact {
    /// Parses a single impact token at the given position.
    pub fn try_from_token(position: usize, token: &str) -> Result<Self, TopsisError> {
        match token.trim() {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(TopsisError::InvalidImpactToken {
                position,
                token: other.to_string(),
            }),
        }
    }

    /// Returns the wire token.
    pub fn token(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Impact::try_from_token(0, s)
    }
}

/// One impact direction per criterion, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    /// Creates an impact vector from already-parsed directions.
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses a comma-separated token string such as `"+,+,-"`.
    ///
    /// Fails with `InvalidImpactToken` naming the first unrecognised position.
    pub fn parse(raw: &str) -> Result<Self, TopsisError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("impacts").into());
        }

        raw.split(',')
            .enumerate()
            .map(|(position, token)| Impact::try_from_token(position, token))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the number of criteria covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no impacts are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the directions in column order.
    pub fn iter(&self) -> impl Iterator<Item = Impact> + '_ {
        self.0.iter().copied()
    }

    /// Returns the directions as a slice.
    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }
}

impl FromStr for ImpactVector {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImpactVector::parse(s)
    }
}

impl fmt::Display for ImpactVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<_> = self.0.iter().map(Impact::token).collect();
        write!(f, "{}", tokens.join(","))
    }
}
