//! Tenure calculation functionality.
//!
//! This module converts an employment period into a calendar-aware duration
//! (years, months, days) and a fractional number of years.
//!
//! ## Calendar Rules
//!
//! - A month is borrowed when the end day-of-month is before the start
//!   day-of-month, and a year when that borrow passes January.
//! - Adding months clamps to the end of the month, so 31 January plus one
//!   month is 28 (or 29) February. A period from 31 January to the last day
//!   of February is therefore one whole month.
//! - Days are counted from the last whole-month anniversary, so
//!   `start + months + days` always lands exactly on the end date.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EmploymentPeriod, Tenure};

/// Days per year used by the fractional-year approximation.
pub const DAYS_PER_YEAR: u32 = 365;

/// The result of a tenure calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TenureCalculation {
    /// The calendar duration.
    pub tenure: Tenure,
    /// `years + months/12 + days/365`, unrounded.
    pub fractional_years: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the calendar duration between two dates.
///
/// Fails with `InvalidRange` when `end < start`.
///
/// # Examples
///
/// ```
/// use eosb_engine::calculation::tenure_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2018, 11, 20).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
///
/// let tenure = tenure_between(start, end).unwrap();
/// assert_eq!((tenure.years, tenure.months, tenure.days), (6, 2, 21));
/// ```
pub fn tenure_between(start: NaiveDate, end: NaiveDate) -> EngineResult<Tenure> {
    if end < start {
        return Err(EngineError::InvalidRange {
            start_date: start,
            end_date: end,
        });
    }

    let mut total_months = (end.year() - start.year()) * 12 + end.month() as i32
        - start.month() as i32;
    if end.day() < start.day() {
        total_months -= 1;
    }

    let total_months = u32::try_from(total_months).map_err(|_| EngineError::CalculationError {
        message: format!("negative month difference between {} and {}", start, end),
    })?;

    // Month-end clamping can make one more whole month fit.
    let total_months = if add_months(start, total_months + 1)? <= end {
        total_months + 1
    } else {
        total_months
    };

    let anchor = add_months(start, total_months)?;
    let days = u32::try_from((end - anchor).num_days()).map_err(|_| {
        EngineError::CalculationError {
            message: format!("day remainder out of range between {} and {}", anchor, end),
        }
    })?;

    Ok(Tenure {
        years: total_months / 12,
        months: total_months % 12,
        days,
    })
}

/// Converts a calendar tenure into fractional years.
///
/// This is the documented `years + months/12 + days/365` approximation, not
/// an actuarial day count.
pub fn fractional_years(tenure: &Tenure) -> Decimal {
    Decimal::from(tenure.years)
        + Decimal::from(tenure.months) / Decimal::from(12)
        + Decimal::from(tenure.days) / Decimal::from(DAYS_PER_YEAR)
}

/// Calculates the tenure of an employment period.
///
/// # Arguments
///
/// * `period` - The employment period
/// * `step_number` - The step number for audit trail sequencing
///
/// # Labor Code Reference
///
/// Article 84 bases the benefit on years of service, with parts of a year
/// counted proportionally.
pub fn calculate_tenure(period: &EmploymentPeriod, step_number: u32) -> EngineResult<TenureCalculation> {
    let tenure = tenure_between(period.start_date(), period.end_date())?;
    let fractional_years = fractional_years(&tenure);

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_calculation".to_string(),
        rule_name: "Tenure Calculation".to_string(),
        article_ref: "84".to_string(),
        input: serde_json::json!({
            "start_date": period.start_date().to_string(),
            "end_date": period.end_date().to_string()
        }),
        output: serde_json::json!({
            "years": tenure.years,
            "months": tenure.months,
            "days": tenure.days,
            "fractional_years": fractional_years.round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "{} to {} is {} years, {} months and {} days ({} years)",
            period.start_date(),
            period.end_date(),
            tenure.years,
            tenure.months,
            tenure.days,
            fractional_years.round_dp(4).normalize()
        ),
    };

    Ok(TenureCalculation {
        tenure,
        fractional_years,
        audit_step,
    })
}

fn add_months(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("date overflow adding {} months to {}", months, date),
        })
}
