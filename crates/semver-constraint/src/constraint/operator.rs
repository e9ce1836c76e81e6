//! Operator types for version constraints

use std::fmt;
use thiserror::Error;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse operator from string
    pub fn from_str(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "=" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "!=", ">", ">=", "<", "<="]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Operator::from_str("=").unwrap(), Operator::Equal);
        assert_eq!(Operator::from_str("!=").unwrap(), Operator::NotEqual);
        assert_eq!(Operator::from_str(">").unwrap(), Operator::GreaterThan);
        assert_eq!(Operator::from_str(">=").unwrap(), Operator::GreaterThanOrEqual);
        assert_eq!(Operator::from_str("<").unwrap(), Operator::LessThan);
        assert_eq!(Operator::from_str("<=").unwrap(), Operator::LessThanOrEqual);
    }

    #[test]
    fn test_from_str_invalid() {
        for token in ["==", "<>", "~", "^", "=>", "", ">>", "gte"] {
            let err = Operator::from_str(token).unwrap_err();
            assert_eq!(err, InvalidOperatorError(token.to_string()));
        }
    }

    #[test]
    fn test_round_trip() {
        for symbol in Operator::supported_operators() {
            let operator = Operator::from_str(symbol).unwrap();
            assert_eq!(operator.as_str(), *symbol);
            assert_eq!(operator.to_string(), *symbol);
        }
    }
}
