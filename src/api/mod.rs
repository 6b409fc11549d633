//! HTTP API module for the EOSB engine.
//!
//! This module exposes benefit computation, decision validation and the
//! rule listing as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BenefitCalculationRequest, CompensationBasisRequest, DecisionFactsRequest,
    DecisionValidationRequest, EmploymentPeriodRequest, TerminationContextRequest,
};
pub use response::{ApiError, ApiErrorResponse, RulesResponse};
pub use state::AppState;
