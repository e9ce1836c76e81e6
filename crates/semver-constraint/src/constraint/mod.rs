//! Constraint types for version matching

mod constraint;
mod operator;

pub use constraint::{Constraint, ConstraintError};
pub use operator::{InvalidOperatorError, Operator};
