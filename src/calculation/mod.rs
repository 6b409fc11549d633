//! Benefit calculation logic for the EOSB engine.
//!
//! This module contains the tenure calculator, the two-tier benefit
//! calculator, the eligibility matrix, the shared currency rounding policy,
//! and the benefit engine that composes them.

mod benefit_engine;
mod benefit_tiers;
mod eligibility;
mod rounding;
mod tenure;

pub use benefit_engine::compute_benefit;
pub use benefit_tiers::{
    BENEFIT_TIERS_ARTICLE, BenefitTierResult, TIER_ONE_YEARS, calculate_benefit_tiers,
};
pub use eligibility::{
    EligibilityResult, FULL_ELIGIBILITY, RESIGNATION_BRACKETS, resignation_percentage,
    resolve_eligibility,
};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use tenure::{DAYS_PER_YEAR, TenureCalculation, calculate_tenure, fractional_years, tenure_between};
