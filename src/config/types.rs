//! Rule repository types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML rule files: repository metadata, rule definitions, citations and the
//! condition language rules are written in.

use serde::{Deserialize, Serialize};

use crate::models::{DecisionType, EvidenceKind};

/// Metadata about the rule repository.
///
/// The version is opaque to the engine; it is echoed back on every verdict
/// so a caller can tell which rule set produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// A short code identifying the labor code (e.g., "NLC").
    pub code: String,
    /// The human-readable name of the labor code.
    pub name: String,
    /// The version of this rule set.
    pub version: String,
    /// URL to the official text of the labor code.
    pub source_url: String,
}

/// A reference to the statutory article a rule is based on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    /// The article number (e.g., "80").
    pub article_number: String,
    /// The text, or a faithful summary, of the article.
    pub article_text: String,
}

/// How serious it is to break a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Breaking the rule makes the decision doubtful.
    Warning,
    /// Breaking the rule makes the decision non-compliant.
    Violation,
}

/// A predicate over decision facts, written as data.
///
/// A rule is violated when its condition evaluates to true.
///
/// # Example
///
/// ```
/// use eosb_engine::config::RuleCondition;
///
/// let yaml = r#"
/// kind: all_of
/// conditions:
///   - kind: prior_warnings_below
///     count: 3
///   - kind: missing_evidence
///     evidence: immediate_dismissal_just_cause
/// "#;
/// let condition: RuleCondition = serde_yaml::from_str(yaml).unwrap();
/// assert!(matches!(condition, RuleCondition::AllOf { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleCondition {
    /// Always true.
    Always,
    /// Fewer than `count` prior written warnings.
    PriorWarningsBelow {
        /// The warning threshold.
        count: u32,
    },
    /// At least `count` prior written warnings.
    PriorWarningsAtLeast {
        /// The warning threshold.
        count: u32,
    },
    /// More than `months` whole months of service.
    TenureMonthsAbove {
        /// The tenure threshold in months.
        months: u32,
    },
    /// A penalty longer than `days` days. Requires `penalty_days`.
    PenaltyDaysAbove {
        /// The penalty threshold in days.
        days: u32,
    },
    /// More than `days` days since the incident. Requires `days_since_incident`.
    DaysSinceIncidentAbove {
        /// The elapsed-time threshold in days.
        days: u32,
    },
    /// The evidence was supplied.
    HasEvidence {
        /// The evidence kind.
        evidence: EvidenceKind,
    },
    /// The evidence was not supplied.
    MissingEvidence {
        /// The evidence kind.
        evidence: EvidenceKind,
    },
    /// Every nested condition is true.
    AllOf {
        /// The nested conditions.
        conditions: Vec<RuleCondition>,
    },
    /// At least one nested condition is true.
    AnyOf {
        /// The nested conditions.
        conditions: Vec<RuleCondition>,
    },
    /// The nested condition is false.
    Not {
        /// The nested condition.
        condition: Box<RuleCondition>,
    },
}

/// A single compliance rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique identifier (e.g., "termination.three_written_warnings").
    pub id: String,
    /// The decision type this rule applies to.
    pub applies_to: DecisionType,
    /// The condition under which the requirement is not met.
    pub violated_when: RuleCondition,
    /// What the law requires, in plain language.
    pub requirement: String,
    /// The article the requirement comes from.
    pub citation: Citation,
    /// Ordered corrective steps when the rule is violated.
    pub remediation: Vec<String>,
    /// The consequence of violating the rule.
    pub severity_if_violated: Severity,
}

/// Rules file structure (one file per decision family).
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// The rules in this file, in evaluation order.
    pub rules: Vec<RuleDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rule_definition_from_yaml() {
        let yaml = r#"
id: suspension.written_notice
applies_to: suspension
violated_when:
  kind: missing_evidence
  evidence: written_notification_delivered
requirement: The employee must be notified of the suspension in writing.
citation:
  article_number: "71"
  article_text: Penalties are notified to the employee in writing.
remediation:
  - Deliver written notice of the suspension
severity_if_violated: warning
"#;

        let rule: RuleDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.id, "suspension.written_notice");
        assert_eq!(rule.applies_to, DecisionType::Suspension);
        assert_eq!(rule.severity_if_violated, Severity::Warning);
        assert_eq!(
            rule.violated_when,
            RuleCondition::MissingEvidence {
                evidence: EvidenceKind::WrittenNotificationDelivered
            }
        );
        assert_eq!(rule.citation.article_number, "71");
    }

    #[test]
    fn test_deserialize_nested_not_condition() {
        let yaml = r#"
kind: not
condition:
  kind: has_evidence
  evidence: employee_written_consent
"#;
        let condition: RuleCondition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            condition,
            RuleCondition::Not {
                condition: Box::new(RuleCondition::HasEvidence {
                    evidence: EvidenceKind::EmployeeWrittenConsent
                })
            }
        );
    }

    #[test]
    fn test_unknown_condition_kind_is_rejected() {
        let yaml = "kind: salary_above\namount: 100\n";
        let result: Result<RuleCondition, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_condition_serializes_with_kind_tag() {
        let condition = RuleCondition::PriorWarningsBelow { count: 3 };
        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(json["kind"], "prior_warnings_below");
        assert_eq!(json["count"], 3);
    }
}
