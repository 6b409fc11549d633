//! Core data models for the EOSB & compliance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefit_result;
mod decision;
mod employment;

pub use benefit_result::{AuditStep, BenefitResult, Tenure};
pub use decision::{Classification, DecisionFacts, DecisionType, EvidenceKind, ValidationVerdict};
pub use employment::{
    BenefitRequest, CompensationBasis, ContractType, EmploymentPeriod, TerminationContext,
    TerminationReason,
};
