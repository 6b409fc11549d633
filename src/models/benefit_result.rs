//! Benefit result models.
//!
//! This module contains the [`BenefitResult`] type and the structures that
//! describe how it was derived: the calendar [`Tenure`] and the ordered
//! [`AuditStep`]s citing the articles applied at each stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A calendar-aware employment duration.
///
/// # Example
///
/// ```
/// use eosb_engine::models::Tenure;
///
/// let tenure = Tenure { years: 6, months: 2, days: 14 };
/// assert_eq!(tenure.total_months(), 74);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole years of service.
    pub years: u32,
    /// Whole months beyond the last full year (0-11).
    pub months: u32,
    /// Days beyond the last full month.
    pub days: u32,
}

impl Tenure {
    /// Returns the number of whole months of service.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one rule
/// application, and the labor-code article that justifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the labor-code article for this rule.
    pub article_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of an end-of-service benefit computation.
///
/// All amounts are rounded once, at this output boundary, to the smallest
/// currency unit. The result carries no identifiers or timestamps, so the
/// same request always yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitResult {
    /// The amount owed after the eligibility percentage is applied.
    pub total_amount: Decimal,
    /// The full benefit before the eligibility percentage, equal to the sum
    /// of the two reported tier amounts. The total is computed from the
    /// unrounded gross, so at 100% it may differ from this by 0.01.
    pub gross_amount: Decimal,
    /// Half-month pay per year for the first bracket of service.
    pub tier_one_amount: Decimal,
    /// Full-month pay per year for service beyond the first bracket.
    pub tier_two_amount: Decimal,
    /// The percentage of the gross benefit the employee is entitled to.
    pub eligibility_percentage: Decimal,
    /// The calendar tenure the benefit was computed from.
    pub tenure: Tenure,
    /// Tenure as a fractional number of years.
    pub fractional_years: Decimal,
    /// Ordered record of every calculation step.
    pub audit_trace: Vec<AuditStep>,
}
