//! Eligibility percentage resolution.
//!
//! This module resolves which share of the full benefit an employee is
//! entitled to, from the contract type, the termination reason and the
//! tenure in years.
//!
//! ## Eligibility Matrix
//!
//! | contract | reason | <2 | 2≤y<5 | 5≤y<10 | ≥10 |
//! |---|---|---|---|---|---|
//! | indefinite | resignation | 0% | 33.33% | 66.66% | 100% |
//! | fixed term | resignation before term end | 0% | 33.33% | 66.66% | 100% |
//! | any | severe disciplinary dismissal | 0% | 0% | 0% | 0% |
//! | any | every other reason | 100% | 100% | 100% | 100% |
//!
//! A tenure exactly on a bracket boundary (2, 5 or 10 years) belongs to the
//! higher bracket.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ContractType, TerminationContext, TerminationReason};

/// Full entitlement.
pub const FULL_ELIGIBILITY: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Resignation brackets as `(lower bound in years, percentage)`, highest first.
pub const RESIGNATION_BRACKETS: [(Decimal, Decimal); 3] = [
    (Decimal::from_parts(10, 0, 0, false, 0), FULL_ELIGIBILITY),
    (
        Decimal::from_parts(5, 0, 0, false, 0),
        Decimal::from_parts(6666, 0, 0, false, 2),
    ),
    (
        Decimal::from_parts(2, 0, 0, false, 0),
        Decimal::from_parts(3333, 0, 0, false, 2),
    ),
];

/// The result of resolving eligibility, including the audit step.
#[derive(Debug, Clone)]
pub struct EligibilityResult {
    /// The entitled share of the benefit, in percent.
    pub percentage: Decimal,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the eligibility percentage for a separation.
///
/// # Arguments
///
/// * `context` - The contract type and termination reason
/// * `fractional_years` - Tenure in fractional years
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `UnsupportedTerminationReason` for a resignation before term end
/// on an indefinite contract, which has no term to end early.
///
/// # Labor Code Reference
///
/// - Article 84: full benefit when the employer ends the relationship or the
///   contract runs its course
/// - Article 85: partial benefit on resignation
/// - Article 80: no benefit on dismissal for a serious act
///
/// # Examples
///
/// ```
/// use eosb_engine::calculation::resolve_eligibility;
/// use eosb_engine::models::{ContractType, TerminationContext, TerminationReason};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let context = TerminationContext {
///     contract_type: ContractType::Indefinite,
///     termination_reason: TerminationReason::Resignation,
/// };
///
/// let result = resolve_eligibility(&context, Decimal::from(5), 1).unwrap();
/// assert_eq!(result.percentage, Decimal::from_str("66.66").unwrap());
/// ```
pub fn resolve_eligibility(
    context: &TerminationContext,
    fractional_years: Decimal,
    step_number: u32,
) -> EngineResult<EligibilityResult> {
    let (rule_id, rule_name, article_ref, percentage, reasoning) =
        match (context.contract_type, context.termination_reason) {
            (ContractType::Indefinite, TerminationReason::ResignationBeforeTermEnd) => {
                return Err(EngineError::UnsupportedTerminationReason {
                    reason: context.termination_reason.to_string(),
                    message: "an indefinite contract has no term to end early".to_string(),
                });
            }
            (ContractType::Indefinite, TerminationReason::Resignation)
            | (ContractType::FixedTerm, TerminationReason::ResignationBeforeTermEnd) => {
                let percentage = resignation_percentage(fractional_years);
                (
                    "eligibility_resignation",
                    "Resignation Eligibility",
                    "85",
                    percentage,
                    format!(
                        "Employee-initiated separation after {} years: {}% of the benefit",
                        fractional_years.round_dp(4).normalize(),
                        percentage
                    ),
                )
            }
            (_, TerminationReason::DisciplinarySevere) => (
                "eligibility_disciplinary",
                "Disciplinary Dismissal Eligibility",
                "80",
                Decimal::ZERO,
                "Dismissal for a serious act forfeits the end-of-service benefit".to_string(),
            ),
            (_, reason) => (
                "eligibility_full",
                "Full Eligibility",
                "84",
                FULL_ELIGIBILITY,
                format!("Separation by {} carries the full benefit", reason),
            ),
        };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        article_ref: article_ref.to_string(),
        input: serde_json::json!({
            "contract_type": context.contract_type.as_str(),
            "termination_reason": context.termination_reason.as_str(),
            "fractional_years": fractional_years.round_dp(6).normalize().to_string()
        }),
        output: serde_json::json!({
            "eligibility_percentage": percentage.to_string()
        }),
        reasoning,
    };

    Ok(EligibilityResult {
        percentage,
        audit_step,
    })
}

/// Returns the resignation percentage for a tenure, using inclusive lower
/// bracket bounds.
pub fn resignation_percentage(fractional_years: Decimal) -> Decimal {
    RESIGNATION_BRACKETS
        .iter()
        .find(|(lower, _)| fractional_years >= *lower)
        .map(|(_, percentage)| *percentage)
        .unwrap_or(Decimal::ZERO)
}
