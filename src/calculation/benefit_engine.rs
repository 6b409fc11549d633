//! End-of-service benefit computation.
//!
//! This module composes the tenure calculator, the tier calculator and the
//! eligibility matrix into a single [`compute_benefit`] call.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, BenefitRequest, BenefitResult};

use super::benefit_tiers::{amount_overflow, calculate_benefit_tiers};
use super::eligibility::resolve_eligibility;
use super::rounding::round_currency;
use super::tenure::calculate_tenure;

/// Computes the end-of-service benefit owed for a separation.
///
/// The steps are:
/// 1. Tenure from the employment period
/// 2. Tier one and tier two amounts from the salary and tenure
/// 3. The eligibility percentage from the termination context
/// 4. `total = (tier one + tier two) × percentage / 100`
///
/// All arithmetic is decimal and unrounded until the final result, where
/// every amount is rounded half-up to the smallest currency unit. The total
/// is rounded from the unrounded gross; the reported gross is the sum of the
/// two reported tiers.
///
/// # Errors
///
/// - `UnsupportedTerminationReason` when the reason does not fit the contract
/// - `InvalidCompensation` when the salary is too large for any amount to be
///   represented
/// - `CalculationError` when the dates overflow the calendar
///
/// No partial result is returned on error.
///
/// # Examples
///
/// ```
/// use eosb_engine::calculation::compute_benefit;
/// use eosb_engine::models::{
///     BenefitRequest, CompensationBasis, ContractType, EmploymentPeriod, TerminationContext,
///     TerminationReason,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = BenefitRequest {
///     employment_period: EmploymentPeriod::new(
///         NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     )
///     .unwrap(),
///     compensation_basis: CompensationBasis::new(Decimal::from(10000)).unwrap(),
///     termination_context: TerminationContext {
///         contract_type: ContractType::Indefinite,
///         termination_reason: TerminationReason::EmployerInitiated,
///     },
/// };
///
/// let result = compute_benefit(&request).unwrap();
/// assert_eq!(result.total_amount, Decimal::from(35000));
/// ```
pub fn compute_benefit(request: &BenefitRequest) -> EngineResult<BenefitResult> {
    let mut audit_trace: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let tenure = calculate_tenure(&request.employment_period, step_number)?;
    audit_trace.push(tenure.audit_step);
    step_number += 1;

    let tiers = calculate_benefit_tiers(
        &request.compensation_basis,
        tenure.fractional_years,
        step_number,
    )?;
    step_number += tiers.audit_steps.len() as u32;
    let gross_amount = tiers.gross_amount()?;

    let eligibility = resolve_eligibility(
        &request.termination_context,
        tenure.fractional_years,
        step_number,
    )?;
    step_number += 1;

    let total_amount = gross_amount
        .checked_mul(eligibility.percentage)
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| amount_overflow(request.compensation_basis.monthly_salary()))?;
    let tier_one_amount = round_currency(tiers.tier_one_amount);
    let tier_two_amount = round_currency(tiers.tier_two_amount);
    let reported_gross = tier_one_amount
        .checked_add(tier_two_amount)
        .ok_or_else(|| amount_overflow(request.compensation_basis.monthly_salary()))?;

    audit_trace.extend(tiers.audit_steps);
    audit_trace.push(eligibility.audit_step);
    audit_trace.push(AuditStep {
        step_number,
        rule_id: "benefit_total".to_string(),
        rule_name: "Benefit Total".to_string(),
        article_ref: "84, 85".to_string(),
        input: serde_json::json!({
            "gross_amount": gross_amount.round_dp(6).normalize().to_string(),
            "eligibility_percentage": eligibility.percentage.to_string()
        }),
        output: serde_json::json!({
            "total_amount": round_currency(total_amount).to_string()
        }),
        reasoning: format!(
            "${} × {}% = ${} (rounded half-up to {})",
            gross_amount.round_dp(4).normalize(),
            eligibility.percentage,
            total_amount.round_dp(4).normalize(),
            round_currency(total_amount)
        ),
    });

    debug!(
        years = tenure.tenure.years,
        months = tenure.tenure.months,
        days = tenure.tenure.days,
        eligibility_percentage = %eligibility.percentage,
        total_amount = %round_currency(total_amount),
        "Benefit computed"
    );

    Ok(BenefitResult {
        total_amount: round_currency(total_amount),
        gross_amount: round_currency(reported_gross),
        tier_one_amount,
        tier_two_amount,
        eligibility_percentage: eligibility.percentage,
        tenure: tenure.tenure,
        fractional_years: tenure.fractional_years.round_dp(6).normalize(),
        audit_trace,
    })
}
