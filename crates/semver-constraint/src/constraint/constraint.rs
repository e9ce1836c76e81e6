//! Single version constraint implementation

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Operator;
use crate::version::{InvalidVersionError, Version};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Invalid operator \"{operator}\", expected one of: {expected}")]
    InvalidOperator { operator: String, expected: String },
    #[error("Constraint string is empty")]
    EmptyConstraintString,
    #[error("Unparsable constraint string \"{constraint}\"")]
    UnparsableConstraintString {
        constraint: String,
        #[source]
        source: InvalidVersionError,
    },
}

/// A single version constraint (e.g., ">=1.0.0")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    operand: Version,
}

// Two-character tokens first, so ">=1.2.3" is not split as ">" + "=1.2.3"
const OPERATOR_TOKENS: [(&str, Operator); 6] = [
    (">=", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    ("!=", Operator::NotEqual),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
    ("=", Operator::Equal),
];

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, operand: Version) -> Self {
        Constraint { operator, operand }
    }

    /// Create a constraint from an operator token
    pub fn from_parts(operator: &str, operand: Version) -> Result<Self, ConstraintError> {
        let operator =
            Operator::from_str(operator).map_err(|_| ConstraintError::InvalidOperator {
                operator: operator.to_string(),
                expected: Operator::supported_operators().join(", "),
            })?;
        Ok(Self::new(operator, operand))
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the operand version
    pub fn operand(&self) -> &Version {
        &self.operand
    }

    /// Check if a candidate version satisfies this constraint
    pub fn matches(&self, candidate: &Version) -> bool {
        match self.operator {
            Operator::Equal => candidate.is_equal_to(&self.operand),
            Operator::NotEqual => !candidate.is_equal_to(&self.operand),
            Operator::GreaterThan => candidate.is_greater_than(&self.operand),
            Operator::GreaterThanOrEqual => candidate.is_greater_or_equal_to(&self.operand),
            Operator::LessThan => candidate.is_less_than(&self.operand),
            Operator::LessThanOrEqual => candidate.is_less_or_equal_to(&self.operand),
        }
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    /// Parse a constraint like ">=1.2.3"; a bare version means "="
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConstraintError::EmptyConstraintString);
        }

        let (operator, rest) = split_operator(trimmed);
        let operand = rest.trim_start().parse::<Version>().map_err(|source| {
            ConstraintError::UnparsableConstraintString {
                constraint: trimmed.to_string(),
                source,
            }
        })?;

        Ok(Constraint { operator, operand })
    }
}

fn split_operator(text: &str) -> (Operator, &str) {
    for (token, operator) in OPERATOR_TOKENS {
        if let Some(rest) = text.strip_prefix(token) {
            return (operator, rest);
        }
    }
    (Operator::Equal, text)
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}
