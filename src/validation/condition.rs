//! Rule condition evaluation.
//!
//! This module evaluates a [`RuleCondition`] against [`DecisionFacts`].
//! Conditions that reference an optional fact fail with `InvalidFacts` when
//! the fact was not supplied; the engine never assumes a value.

use crate::config::RuleCondition;
use crate::error::{EngineError, EngineResult};
use crate::models::DecisionFacts;

/// Evaluates a condition against the supplied facts.
///
/// Nested `all_of`/`any_of` conditions evaluate every child, so a missing
/// fact is reported no matter where it appears in the expression.
///
/// # Examples
///
/// ```
/// use eosb_engine::config::RuleCondition;
/// use eosb_engine::models::{DecisionFacts, DecisionType};
/// use eosb_engine::validation::evaluate_condition;
///
/// let facts = DecisionFacts::new(DecisionType::Termination, 1, 24);
/// let condition = RuleCondition::PriorWarningsBelow { count: 3 };
/// assert!(evaluate_condition(&condition, &facts).unwrap());
/// ```
pub fn evaluate_condition(condition: &RuleCondition, facts: &DecisionFacts) -> EngineResult<bool> {
    match condition {
        RuleCondition::Always => Ok(true),
        RuleCondition::PriorWarningsBelow { count } => Ok(facts.prior_warnings_count < *count),
        RuleCondition::PriorWarningsAtLeast { count } => Ok(facts.prior_warnings_count >= *count),
        RuleCondition::TenureMonthsAbove { months } => Ok(facts.tenure_months > *months),
        RuleCondition::PenaltyDaysAbove { days } => {
            let penalty_days = required(facts.penalty_days, "penalty_days")?;
            Ok(penalty_days > *days)
        }
        RuleCondition::DaysSinceIncidentAbove { days } => {
            let elapsed = required(facts.days_since_incident, "days_since_incident")?;
            Ok(elapsed > *days)
        }
        RuleCondition::HasEvidence { evidence } => Ok(facts.has_evidence(*evidence)),
        RuleCondition::MissingEvidence { evidence } => Ok(!facts.has_evidence(*evidence)),
        RuleCondition::AllOf { conditions } => {
            let results = evaluate_all(conditions, facts)?;
            Ok(results.iter().all(|r| *r))
        }
        RuleCondition::AnyOf { conditions } => {
            let results = evaluate_all(conditions, facts)?;
            Ok(results.iter().any(|r| *r))
        }
        RuleCondition::Not { condition } => Ok(!evaluate_condition(condition, facts)?),
    }
}

fn evaluate_all(conditions: &[RuleCondition], facts: &DecisionFacts) -> EngineResult<Vec<bool>> {
    conditions
        .iter()
        .map(|c| evaluate_condition(c, facts))
        .collect()
}

fn required(value: Option<u32>, field: &str) -> EngineResult<u32> {
    value.ok_or_else(|| EngineError::InvalidFacts {
        field: field.to_string(),
        message: "required by a rule for this decision type but not supplied".to_string(),
    })
}
