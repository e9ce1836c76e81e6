//! Semantic version constraint parsing and matching
//!
//! This crate provides a SemVer 2.0.0 version value type and a single
//! comparison constraint (an operator paired with a target version) that can
//! test whether a concrete version satisfies the relation.

pub mod constraint;
mod version;

pub use constraint::{Constraint, ConstraintError, InvalidOperatorError, Operator};
pub use version::{InvalidVersionError, PreReleaseIdentifier, Version};
