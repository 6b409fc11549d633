//! HR decision models.
//!
//! This module defines the [`DecisionFacts`] submitted for validation, the
//! closed [`DecisionType`] and [`EvidenceKind`] enums, and the
//! [`ValidationVerdict`] the validator returns.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{Citation, RuleDefinition};
use crate::error::EngineError;

/// The kind of HR action being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    /// Ending the employment relationship.
    Termination,
    /// Issuing a written warning.
    Warning,
    /// Deducting from wages as a penalty.
    Deduction,
    /// Suspending the employee from work.
    Suspension,
    /// Moving the employee to another post or location.
    Transfer,
    /// Lowering the agreed wage.
    SalaryReduction,
    /// Ending the relationship during or at the end of probation.
    ProbationEnd,
}

impl DecisionType {
    /// All decision types, in declaration order.
    pub const ALL: [DecisionType; 7] = [
        DecisionType::Termination,
        DecisionType::Warning,
        DecisionType::Deduction,
        DecisionType::Suspension,
        DecisionType::Transfer,
        DecisionType::SalaryReduction,
        DecisionType::ProbationEnd,
    ];

    /// Returns the snake_case wire name of the decision type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionType::Termination => "termination",
            DecisionType::Warning => "warning",
            DecisionType::Deduction => "deduction",
            DecisionType::Suspension => "suspension",
            DecisionType::Transfer => "transfer",
            DecisionType::SalaryReduction => "salary_reduction",
            DecisionType::ProbationEnd => "probation_end",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecisionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| EngineError::UnsupportedDecisionType {
                decision_type: s.to_string(),
            })
    }
}

/// A kind of supporting evidence the employer can show for a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// A third written warning was issued for the same kind of violation.
    ThirdWarningIssued,
    /// A written record of a disciplinary investigation exists.
    InvestigationRecordPresent,
    /// The employee committed an act that justifies dismissal without notice.
    ImmediateDismissalJustCause,
    /// The employee was notified of the decision in writing.
    WrittenNotificationDelivered,
    /// The employee consented to the change in writing.
    EmployeeWrittenConsent,
    /// The decision requires the employee to change place of residence.
    RelocationRequired,
    /// Relocation costs were agreed with the employee.
    RelocationAllowanceAgreed,
    /// The parties agreed in writing to extend the probation period.
    ProbationExtensionAgreed,
    /// The contract contains an explicit probation clause.
    ProbationClauseInContract,
}

impl EvidenceKind {
    /// All evidence kinds, in declaration order.
    pub const ALL: [EvidenceKind; 9] = [
        EvidenceKind::ThirdWarningIssued,
        EvidenceKind::InvestigationRecordPresent,
        EvidenceKind::ImmediateDismissalJustCause,
        EvidenceKind::WrittenNotificationDelivered,
        EvidenceKind::EmployeeWrittenConsent,
        EvidenceKind::RelocationRequired,
        EvidenceKind::RelocationAllowanceAgreed,
        EvidenceKind::ProbationExtensionAgreed,
        EvidenceKind::ProbationClauseInContract,
    ];

    /// Returns the snake_case wire name of the evidence kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceKind::ThirdWarningIssued => "third_warning_issued",
            EvidenceKind::InvestigationRecordPresent => "investigation_record_present",
            EvidenceKind::ImmediateDismissalJustCause => "immediate_dismissal_just_cause",
            EvidenceKind::WrittenNotificationDelivered => "written_notification_delivered",
            EvidenceKind::EmployeeWrittenConsent => "employee_written_consent",
            EvidenceKind::RelocationRequired => "relocation_required",
            EvidenceKind::RelocationAllowanceAgreed => "relocation_allowance_agreed",
            EvidenceKind::ProbationExtensionAgreed => "probation_extension_agreed",
            EvidenceKind::ProbationClauseInContract => "probation_clause_in_contract",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvidenceKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvidenceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::InvalidFacts {
                field: "supplied_evidence".to_string(),
                message: format!("unknown evidence kind '{}'", s),
            })
    }
}

/// The employment facts a decision is validated against.
///
/// `penalty_days` and `days_since_incident` are only needed by rules that
/// reference them; a rule that needs an absent fact fails the validation
/// with `InvalidFacts` rather than assuming a value.
///
/// # Example
///
/// ```
/// use eosb_engine::models::{DecisionFacts, DecisionType, EvidenceKind};
///
/// let facts = DecisionFacts::new(DecisionType::Termination, 3, 40)
///     .with_evidence(EvidenceKind::ThirdWarningIssued);
/// assert!(facts.has_evidence(EvidenceKind::ThirdWarningIssued));
/// assert!(!facts.has_evidence(EvidenceKind::InvestigationRecordPresent));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFacts {
    /// The HR action being validated.
    pub decision_type: DecisionType,
    /// Written warnings issued before this decision.
    pub prior_warnings_count: u32,
    /// Whole months of service at the time of the decision.
    pub tenure_months: u32,
    /// Evidence the employer can produce.
    #[serde(default)]
    pub supplied_evidence: BTreeSet<EvidenceKind>,
    /// Days of wage deducted, or days of suspension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_days: Option<u32>,
    /// Days between the employer learning of the incident and the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_since_incident: Option<u32>,
}

impl DecisionFacts {
    /// Creates facts with no evidence and no optional facts.
    pub fn new(decision_type: DecisionType, prior_warnings_count: u32, tenure_months: u32) -> Self {
        Self {
            decision_type,
            prior_warnings_count,
            tenure_months,
            supplied_evidence: BTreeSet::new(),
            penalty_days: None,
            days_since_incident: None,
        }
    }

    /// Adds a piece of supplied evidence.
    pub fn with_evidence(mut self, evidence: EvidenceKind) -> Self {
        self.supplied_evidence.insert(evidence);
        self
    }

    /// Sets the penalty duration in days.
    pub fn with_penalty_days(mut self, days: u32) -> Self {
        self.penalty_days = Some(days);
        self
    }

    /// Sets the days elapsed since the incident came to light.
    pub fn with_days_since_incident(mut self, days: u32) -> Self {
        self.days_since_incident = Some(days);
        self
    }

    /// Returns true if the given evidence was supplied.
    pub fn has_evidence(&self, evidence: EvidenceKind) -> bool {
        self.supplied_evidence.contains(&evidence)
    }
}

/// The compliance classification of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No rule was violated.
    Compliant,
    /// Only warning-severity rules were violated.
    Doubtful,
    /// At least one violation-severity rule was violated.
    NonCompliant,
}

/// The validator's verdict on a decision.
///
/// Citations and remediation steps are gathered from the violated rules in
/// repository order, without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// The decision type that was validated.
    pub decision_type: DecisionType,
    /// The overall classification.
    pub classification: Classification,
    /// Rules whose requirement is not met.
    pub violated_rules: Vec<RuleDefinition>,
    /// Rules whose requirement is met.
    pub satisfied_rules: Vec<RuleDefinition>,
    /// Articles supporting the violated rules.
    pub citations: Vec<Citation>,
    /// Corrective actions for the violated rules.
    pub remediation_steps: Vec<String>,
    /// The version of the rule repository used.
    pub repository_version: String,
}

impl ValidationVerdict {
    /// Returns true if the rule with the given id was violated.
    pub fn is_violated(&self, rule_id: &str) -> bool {
        self.violated_rules.iter().any(|r| r.id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_type_parses_every_wire_name() {
        for decision_type in DecisionType::ALL {
            assert_eq!(
                decision_type.as_str().parse::<DecisionType>().unwrap(),
                decision_type
            );
        }
    }

    #[test]
    fn test_unknown_decision_type_is_unsupported() {
        match "promotion".parse::<DecisionType>() {
            Err(EngineError::UnsupportedDecisionType { decision_type }) => {
                assert_eq!(decision_type, "promotion");
            }
            other => panic!("Expected UnsupportedDecisionType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_evidence_is_invalid_facts() {
        match "signed_confession".parse::<EvidenceKind>() {
            Err(EngineError::InvalidFacts { field, message }) => {
                assert_eq!(field, "supplied_evidence");
                assert!(message.contains("signed_confession"));
            }
            other => panic!("Expected InvalidFacts, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_facts_defaults_optional_fields() {
        let json = r#"{
            "decision_type": "termination",
            "prior_warnings_count": 1,
            "tenure_months": 18
        }"#;

        let facts: DecisionFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.decision_type, DecisionType::Termination);
        assert!(facts.supplied_evidence.is_empty());
        assert_eq!(facts.penalty_days, None);
    }

    #[test]
    fn test_duplicate_evidence_collapses() {
        let facts = DecisionFacts::new(DecisionType::Warning, 0, 5)
            .with_evidence(EvidenceKind::InvestigationRecordPresent)
            .with_evidence(EvidenceKind::InvestigationRecordPresent);
        assert_eq!(facts.supplied_evidence.len(), 1);
    }

    #[test]
    fn test_classification_serializes_snake_case() {
        let json = serde_json::to_string(&Classification::NonCompliant).unwrap();
        assert_eq!(json, "\"non_compliant\"");
    }
}
