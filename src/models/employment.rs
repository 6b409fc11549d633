//! Employment facts used by the benefit calculation.
//!
//! This module defines the [`EmploymentPeriod`], [`CompensationBasis`] and
//! [`TerminationContext`] inputs together with the closed [`ContractType`] and
//! [`TerminationReason`] enums.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of employment contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// A contract with an agreed end date.
    FixedTerm,
    /// An open-ended contract.
    Indefinite,
}

impl ContractType {
    /// Returns the snake_case wire name of the contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::FixedTerm => "fixed_term",
            ContractType::Indefinite => "indefinite",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the employment relationship ended.
///
/// New reasons require a code change so that an unknown reason can never
/// fall through to a default payout percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The employee resigned from an indefinite contract.
    Resignation,
    /// The employee left a fixed-term contract before its end date.
    ResignationBeforeTermEnd,
    /// The employer ended the relationship.
    EmployerInitiated,
    /// A fixed-term contract reached its agreed end date.
    ContractEnd,
    /// The employee reached retirement age.
    Retirement,
    /// The employee can no longer work due to disability.
    Disability,
    /// The employee died in service.
    Death,
    /// The relationship ended due to force majeure.
    ForceMajeure,
    /// Dismissal for serious misconduct without entitlement.
    DisciplinarySevere,
    /// Any other separation not listed above.
    Other,
}

impl TerminationReason {
    /// All termination reasons, in declaration order.
    pub const ALL: [TerminationReason; 10] = [
        TerminationReason::Resignation,
        TerminationReason::ResignationBeforeTermEnd,
        TerminationReason::EmployerInitiated,
        TerminationReason::ContractEnd,
        TerminationReason::Retirement,
        TerminationReason::Disability,
        TerminationReason::Death,
        TerminationReason::ForceMajeure,
        TerminationReason::DisciplinarySevere,
        TerminationReason::Other,
    ];

    /// Returns the snake_case wire name of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Resignation => "resignation",
            TerminationReason::ResignationBeforeTermEnd => "resignation_before_term_end",
            TerminationReason::EmployerInitiated => "employer_initiated",
            TerminationReason::ContractEnd => "contract_end",
            TerminationReason::Retirement => "retirement",
            TerminationReason::Disability => "disability",
            TerminationReason::Death => "death",
            TerminationReason::ForceMajeure => "force_majeure",
            TerminationReason::DisciplinarySevere => "disciplinary_severe",
            TerminationReason::Other => "other",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminationReason {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TerminationReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| EngineError::UnsupportedTerminationReason {
                reason: s.to_string(),
                message: "unknown termination reason".to_string(),
            })
    }
}

#[derive(Deserialize)]
struct RawEmploymentPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// The calendar span of continuous employment.
///
/// The end date is never before the start date; the only way to obtain a
/// value is through [`EmploymentPeriod::new`] (deserialization goes through
/// the same check).
///
/// # Example
///
/// ```
/// use eosb_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let period = EmploymentPeriod::new(start, end).unwrap();
/// assert_eq!(period.start_date(), start);
///
/// assert!(EmploymentPeriod::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEmploymentPeriod")]
pub struct EmploymentPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl EmploymentPeriod {
    /// Creates a period, failing with `InvalidRange` when `end_date < start_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidRange {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The first day of employment.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of employment.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

impl TryFrom<RawEmploymentPeriod> for EmploymentPeriod {
    type Error = EngineError;

    fn try_from(raw: RawEmploymentPeriod) -> Result<Self, Self::Error> {
        EmploymentPeriod::new(raw.start_date, raw.end_date)
    }
}

#[derive(Deserialize)]
struct RawCompensationBasis {
    monthly_salary: Decimal,
}

/// The last basic monthly wage used for every benefit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCompensationBasis")]
pub struct CompensationBasis {
    monthly_salary: Decimal,
}

impl CompensationBasis {
    /// Creates a compensation basis, rejecting zero or negative salaries.
    pub fn new(monthly_salary: Decimal) -> EngineResult<Self> {
        if monthly_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                message: format!("monthly salary must be positive, got {}", monthly_salary),
            });
        }
        Ok(Self { monthly_salary })
    }

    /// The last basic monthly wage.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }
}

impl TryFrom<RawCompensationBasis> for CompensationBasis {
    type Error = EngineError;

    fn try_from(raw: RawCompensationBasis) -> Result<Self, Self::Error> {
        CompensationBasis::new(raw.monthly_salary)
    }
}

/// Who ended the employment relationship, and under what contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationContext {
    /// The kind of contract that ended.
    pub contract_type: ContractType,
    /// Why it ended.
    pub termination_reason: TerminationReason,
}

/// The complete input to a benefit computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitRequest {
    /// The span of employment.
    pub employment_period: EmploymentPeriod,
    /// The wage the benefit is based on.
    pub compensation_basis: CompensationBasis,
    /// The separation circumstances.
    pub termination_context: TerminationContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_allows_same_day() {
        let period = EmploymentPeriod::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(period.start_date(), period.end_date());
    }

    #[test]
    fn test_period_rejects_end_before_start() {
        let result = EmploymentPeriod::new(date(2024, 1, 2), date(2024, 1, 1));
        match result {
            Err(EngineError::InvalidRange {
                start_date,
                end_date,
            }) => {
                assert_eq!(start_date, date(2024, 1, 2));
                assert_eq!(end_date, date(2024, 1, 1));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_period_enforces_invariant() {
        let json = r#"{"start_date": "2025-02-01", "end_date": "2025-01-01"}"#;
        let result: Result<EmploymentPeriod, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("before start date"), "got: {}", err);
    }

    #[test]
    fn test_compensation_rejects_zero_salary() {
        let result = CompensationBasis::new(Decimal::ZERO);
        assert!(matches!(
            result,
            Err(EngineError::InvalidCompensation { .. })
        ));
    }

    #[test]
    fn test_deserialize_compensation_from_string_decimal() {
        let json = r#"{"monthly_salary": "8500.50"}"#;
        let basis: CompensationBasis = serde_json::from_str(json).unwrap();
        assert_eq!(basis.monthly_salary(), Decimal::new(850050, 2));
    }

    #[test]
    fn test_termination_reason_parses_every_wire_name() {
        for reason in TerminationReason::ALL {
            assert_eq!(reason.as_str().parse::<TerminationReason>().unwrap(), reason);
        }
    }

    #[test]
    fn test_unknown_termination_reason_is_rejected() {
        let result = "mutual_agreement".parse::<TerminationReason>();
        match result {
            Err(EngineError::UnsupportedTerminationReason { reason, .. }) => {
                assert_eq!(reason, "mutual_agreement");
            }
            other => panic!("Expected UnsupportedTerminationReason, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_termination_context() {
        let json = r#"{"contract_type": "fixed_term", "termination_reason": "contract_end"}"#;
        let context: TerminationContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.contract_type, ContractType::FixedTerm);
        assert_eq!(context.termination_reason, TerminationReason::ContractEnd);
    }
}
