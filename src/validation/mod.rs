//! Decision validation against the labor code rule repository.
//!
//! Rules are data: each [`RuleDefinition`](crate::config::RuleDefinition)
//! carries a condition under which it is violated. This module evaluates
//! those conditions against the facts of an HR decision and builds a
//! [`ValidationVerdict`](crate::models::ValidationVerdict).

mod condition;
mod decision_validator;

pub use condition::evaluate_condition;
pub use decision_validator::{ValidationRequest, classify, validate_decision};
