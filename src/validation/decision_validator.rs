//! Decision validation against the rule repository.
//!
//! This module classifies an HR decision as compliant, doubtful or
//! non-compliant by evaluating every applicable rule in the repository.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Citation, RuleDefinition, RuleRepository, Severity};
use crate::error::{EngineError, EngineResult};
use crate::models::{Classification, DecisionFacts, ValidationVerdict};

use super::condition::evaluate_condition;

/// The input to a decision validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The facts of the decision.
    pub decision_facts: DecisionFacts,
}

/// Validates an HR decision against every rule for its decision type.
///
/// Every applicable rule is evaluated, so the verdict lists all violated and
/// satisfied rules rather than stopping at the first failure.
///
/// # Errors
///
/// - `UnsupportedDecisionType` when the repository has no rule for the
///   decision type; a decision is never assumed compliant by default
/// - `InvalidFacts` when a rule needs a fact that was not supplied
///
/// # Examples
///
/// ```
/// use eosb_engine::config::RuleRepository;
/// use eosb_engine::models::{Classification, DecisionFacts, DecisionType};
/// use eosb_engine::validation::validate_decision;
///
/// let repository = RuleRepository::builtin().unwrap();
/// let facts = DecisionFacts::new(DecisionType::Termination, 1, 36);
///
/// let verdict = validate_decision(&facts, &repository).unwrap();
/// assert_eq!(verdict.classification, Classification::NonCompliant);
/// assert!(verdict.is_violated("termination.three_written_warnings"));
/// ```
pub fn validate_decision(
    facts: &DecisionFacts,
    repository: &RuleRepository,
) -> EngineResult<ValidationVerdict> {
    let applicable: Vec<&RuleDefinition> = repository.rules_for(facts.decision_type).collect();

    if applicable.is_empty() {
        return Err(EngineError::UnsupportedDecisionType {
            decision_type: facts.decision_type.to_string(),
        });
    }

    let mut violated_rules = Vec::new();
    let mut satisfied_rules = Vec::new();

    for rule in applicable {
        if evaluate_condition(&rule.violated_when, facts)? {
            violated_rules.push(rule.clone());
        } else {
            satisfied_rules.push(rule.clone());
        }
    }

    let classification = classify(&violated_rules);

    let mut citations: Vec<Citation> = Vec::new();
    let mut remediation_steps: Vec<String> = Vec::new();
    for rule in &violated_rules {
        if !citations.contains(&rule.citation) {
            citations.push(rule.citation.clone());
        }
        for step in &rule.remediation {
            if !remediation_steps.contains(step) {
                remediation_steps.push(step.clone());
            }
        }
    }

    debug!(
        decision_type = %facts.decision_type,
        classification = ?classification,
        violated = violated_rules.len(),
        satisfied = satisfied_rules.len(),
        "Decision validated"
    );

    Ok(ValidationVerdict {
        decision_type: facts.decision_type,
        classification,
        violated_rules,
        satisfied_rules,
        citations,
        remediation_steps,
        repository_version: repository.version().to_string(),
    })
}

/// Classifies a set of violated rules.
///
/// Any violation-severity rule makes the decision non-compliant; only
/// warning-severity rules make it doubtful; none makes it compliant.
pub fn classify(violated_rules: &[RuleDefinition]) -> Classification {
    if violated_rules
        .iter()
        .any(|r| r.severity_if_violated == Severity::Violation)
    {
        Classification::NonCompliant
    } else if violated_rules.is_empty() {
        Classification::Compliant
    } else {
        Classification::Doubtful
    }
}
