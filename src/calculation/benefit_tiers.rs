//! Benefit tier calculation functionality.
//!
//! This module applies the two-tier statutory end-of-service formula as per
//! Article 84 of the labor code.
//!
//! ## Rate Structure
//!
//! **The benefit is calculated in two tiers:**
//! - First 5 years: half a month's wage per year of service
//! - Beyond 5 years: a full month's wage per year of service
//!
//! The 5-year boundary itself belongs to tier one. Amounts are returned
//! unrounded; rounding happens once in the benefit engine.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CompensationBasis};

/// Years of service paid at the tier one rate.
pub const TIER_ONE_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Article reference for the tiered benefit.
pub const BENEFIT_TIERS_ARTICLE: &str = "84";

/// The result of the tier calculation.
#[derive(Debug, Clone)]
pub struct BenefitTierResult {
    /// The wage the tiers were computed from.
    pub monthly_salary: Decimal,
    /// Years paid at half-month rate.
    pub tier_one_years: Decimal,
    /// Unrounded tier one amount.
    pub tier_one_amount: Decimal,
    /// Years paid at full-month rate.
    pub tier_two_years: Decimal,
    /// Unrounded tier two amount.
    pub tier_two_amount: Decimal,
    /// Audit steps for tier one and tier two, in that order.
    pub audit_steps: Vec<AuditStep>,
}

impl BenefitTierResult {
    /// Returns the sum of both tiers, unrounded.
    pub fn gross_amount(&self) -> EngineResult<Decimal> {
        self.tier_one_amount
            .checked_add(self.tier_two_amount)
            .ok_or_else(|| amount_overflow(self.monthly_salary))
    }
}

/// The error returned when a benefit amount exceeds the decimal range.
pub(super) fn amount_overflow(salary: Decimal) -> EngineError {
    EngineError::InvalidCompensation {
        message: format!(
            "benefit for monthly salary {} exceeds the supported amount range",
            salary
        ),
    }
}

/// Calculates both benefit tiers for a compensation basis and tenure.
///
/// - **Tier 1:** `monthly_salary / 2 × min(fractional_years, 5)`
/// - **Tier 2:** `monthly_salary × max(0, fractional_years − 5)`
///
/// # Arguments
///
/// * `basis` - The last basic monthly wage
/// * `fractional_years` - Tenure in fractional years
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Errors
///
/// Returns `InvalidCompensation` when an amount overflows the decimal range.
///
/// # Examples
///
/// ```
/// use eosb_engine::calculation::calculate_benefit_tiers;
/// use eosb_engine::models::CompensationBasis;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::new(Decimal::from(10000)).unwrap();
/// let result = calculate_benefit_tiers(&basis, Decimal::from(6), 1).unwrap();
///
/// assert_eq!(result.tier_one_amount, Decimal::from(25000));
/// assert_eq!(result.tier_two_amount, Decimal::from(10000));
/// assert_eq!(result.audit_steps.len(), 2);
/// ```
pub fn calculate_benefit_tiers(
    basis: &CompensationBasis,
    fractional_years: Decimal,
    step_number_start: u32,
) -> EngineResult<BenefitTierResult> {
    let salary = basis.monthly_salary();
    let years = fractional_years.max(Decimal::ZERO);

    let tier_one_years = years.min(TIER_ONE_YEARS);
    let half_month = salary / Decimal::TWO;
    let tier_one_amount = half_month
        .checked_mul(tier_one_years)
        .ok_or_else(|| amount_overflow(salary))?;

    let tier_two_years = (years - TIER_ONE_YEARS).max(Decimal::ZERO);
    let tier_two_amount = salary
        .checked_mul(tier_two_years)
        .ok_or_else(|| amount_overflow(salary))?;

    let tier_one_step = AuditStep {
        step_number: step_number_start,
        rule_id: "benefit_tier_1".to_string(),
        rule_name: "Benefit Tier 1 (first 5 years)".to_string(),
        article_ref: BENEFIT_TIERS_ARTICLE.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "fractional_years": years.round_dp(6).normalize().to_string()
        }),
        output: serde_json::json!({
            "years": tier_one_years.round_dp(6).normalize().to_string(),
            "rate_per_year": half_month.normalize().to_string(),
            "amount": tier_one_amount.round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "Half a month's wage per year for the first 5 years: {} years × ${} = ${}",
            tier_one_years.round_dp(4).normalize(),
            half_month.normalize(),
            tier_one_amount.round_dp(4).normalize()
        ),
    };

    let tier_two_reasoning = if tier_two_years > Decimal::ZERO {
        format!(
            "A full month's wage per year beyond 5 years: {} years × ${} = ${}",
            tier_two_years.round_dp(4).normalize(),
            salary.normalize(),
            tier_two_amount.round_dp(4).normalize()
        )
    } else {
        "No service beyond 5 years - tier 2 does not apply".to_string()
    };

    let tier_two_step = AuditStep {
        step_number: step_number_start + 1,
        rule_id: "benefit_tier_2".to_string(),
        rule_name: "Benefit Tier 2 (beyond 5 years)".to_string(),
        article_ref: BENEFIT_TIERS_ARTICLE.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "fractional_years": years.round_dp(6).normalize().to_string()
        }),
        output: serde_json::json!({
            "years": tier_two_years.round_dp(6).normalize().to_string(),
            "rate_per_year": salary.normalize().to_string(),
            "amount": tier_two_amount.round_dp(6).normalize().to_string()
        }),
        reasoning: tier_two_reasoning,
    };

    Ok(BenefitTierResult {
        monthly_salary: salary,
        tier_one_years,
        tier_one_amount,
        tier_two_years,
        tier_two_amount,
        audit_steps: vec![tier_one_step, tier_two_step],
    })
}
