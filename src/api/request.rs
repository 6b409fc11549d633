//! Request types for the EOSB engine API.
//!
//! Request bodies take enum values as plain strings and counts as signed
//! integers, so that an unknown reason or a negative count is reported as a
//! domain error rather than a generic JSON error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BenefitRequest, CompensationBasis, ContractType, DecisionFacts, DecisionType,
    EmploymentPeriod, EvidenceKind, TerminationContext, TerminationReason,
};

/// Request body for the `/benefits/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitCalculationRequest {
    /// The span of employment.
    pub employment_period: EmploymentPeriodRequest,
    /// The wage the benefit is based on.
    pub compensation_basis: CompensationBasisRequest,
    /// The separation circumstances.
    pub termination_context: TerminationContextRequest,
}

/// Employment period in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentPeriodRequest {
    /// The first day of employment.
    pub start_date: NaiveDate,
    /// The last day of employment.
    pub end_date: NaiveDate,
}

/// Compensation basis in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationBasisRequest {
    /// The last basic monthly wage.
    pub monthly_salary: Decimal,
}

/// Termination context in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationContextRequest {
    /// The kind of contract that ended.
    pub contract_type: ContractType,
    /// Why it ended (e.g., "resignation", "employer_initiated").
    pub termination_reason: String,
}

impl TryFrom<BenefitCalculationRequest> for BenefitRequest {
    type Error = EngineError;

    fn try_from(req: BenefitCalculationRequest) -> Result<Self, Self::Error> {
        Ok(BenefitRequest {
            employment_period: EmploymentPeriod::new(
                req.employment_period.start_date,
                req.employment_period.end_date,
            )?,
            compensation_basis: CompensationBasis::new(req.compensation_basis.monthly_salary)?,
            termination_context: TerminationContext {
                contract_type: req.termination_context.contract_type,
                termination_reason: req
                    .termination_context
                    .termination_reason
                    .parse::<TerminationReason>()?,
            },
        })
    }
}

/// Request body for the `/decisions/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionValidationRequest {
    /// The facts of the decision under review.
    pub decision_facts: DecisionFactsRequest,
}

/// Decision facts in a validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionFactsRequest {
    /// The kind of decision (e.g., "termination").
    pub decision_type: String,
    /// Written warnings issued before the decision.
    pub prior_warnings_count: i64,
    /// Months of service at the time of the decision.
    pub tenure_months: i64,
    /// Evidence the employer holds (e.g., "third_warning_issued").
    #[serde(default)]
    pub supplied_evidence: Vec<String>,
    /// Days of pay deducted or days suspended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_days: Option<i64>,
    /// Days between the incident and the decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_since_incident: Option<i64>,
}

impl TryFrom<DecisionValidationRequest> for DecisionFacts {
    type Error = EngineError;

    fn try_from(req: DecisionValidationRequest) -> Result<Self, Self::Error> {
        let facts = req.decision_facts;
        let decision_type = facts.decision_type.parse::<DecisionType>()?;

        let mut decision = DecisionFacts::new(
            decision_type,
            non_negative(facts.prior_warnings_count, "prior_warnings_count")?,
            non_negative(facts.tenure_months, "tenure_months")?,
        );

        for evidence in &facts.supplied_evidence {
            decision = decision.with_evidence(evidence.parse::<EvidenceKind>()?);
        }
        if let Some(days) = facts.penalty_days {
            decision = decision.with_penalty_days(non_negative(days, "penalty_days")?);
        }
        if let Some(days) = facts.days_since_incident {
            decision = decision.with_days_since_incident(non_negative(days, "days_since_incident")?);
        }

        Ok(decision)
    }
}

fn non_negative(value: i64, field: &str) -> EngineResult<u32> {
    u32::try_from(value).map_err(|_| EngineError::InvalidFacts {
        field: field.to_string(),
        message: if value < 0 {
            format!("must not be negative, got {}", value)
        } else {
            format!("is too large, got {}", value)
        },
    })
}
