//! Weight vector value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One weight per criterion, in column order.
///
/// Weights are not required to sum to one. Non-positive weights are
/// accepted but reported through [`WeightVector::non_positive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting non-finite entries.
    pub fn try_new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        if weights.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        if let Some(position) = weights.iter().position(|w| !w.is_finite()) {
            return Err(ValidationError::invalid_format(
                format!("weights[{}]", position),
                "weight must be a finite number",
            ));
        }
        Ok(Self(weights))
    }

    /// Parses a comma-separated list such as `"1,1,0.5"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }

        let weights = raw
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                let token = token.trim();
                token.parse::<f64>().map_err(|_| {
                    ValidationError::invalid_format(
                        format!("weights[{}]", position),
                        format!("'{}' is not a number", token),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_new(weights)
    }

    /// Returns the number of criteria covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no weights are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Positions whose weight is zero or negative.
    pub fn non_positive(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, w)| **w <= 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromStr for WeightVector {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightVector::parse(s)
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.0.iter().map(|w| w.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
