//! HTTP request handlers for the EOSB engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_benefit;
use crate::models::{BenefitRequest, DecisionFacts};
use crate::validation::validate_decision;

use super::request::{BenefitCalculationRequest, DecisionValidationRequest};
use super::response::{ApiError, ApiErrorResponse, RulesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/benefits/calculate", post(calculate_benefit_handler))
        .route("/decisions/validate", post(validate_decision_handler))
        .route("/rules", get(list_rules_handler))
        .with_state(state)
}

/// Handler for POST /benefits/calculate.
async fn calculate_benefit_handler(
    payload: Result<Json<BenefitCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing benefit calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = BenefitRequest::try_from(request).and_then(|req| compute_benefit(&req));

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_amount = %result.total_amount,
                eligibility_percentage = %result.eligibility_percentage,
                duration_us = start_time.elapsed().as_micros(),
                "Benefit calculation completed"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error_kind = err.kind(),
                error = %err,
                "Benefit calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /decisions/validate.
async fn validate_decision_handler(
    State(state): State<AppState>,
    payload: Result<Json<DecisionValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing decision validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = DecisionFacts::try_from(request)
        .and_then(|facts| validate_decision(&facts, state.repository()));

    match result {
        Ok(verdict) => {
            info!(
                correlation_id = %correlation_id,
                decision_type = %verdict.decision_type,
                classification = ?verdict.classification,
                violated_rules = verdict.violated_rules.len(),
                repository_version = %verdict.repository_version,
                duration_us = start_time.elapsed().as_micros(),
                "Decision validation completed"
            );
            json_response(StatusCode::OK, &verdict)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error_kind = err.kind(),
                error = %err,
                "Decision validation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rules.
async fn list_rules_handler(State(state): State<AppState>) -> Response {
    let repository = state.repository();
    let body = RulesResponse {
        repository: repository.metadata().clone(),
        rules: repository.rules().to_vec(),
    };
    json_response(StatusCode::OK, &body)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::missing_field(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleRepository;
    use crate::models::{BenefitResult, Classification, ValidationVerdict};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(RuleRepository::builtin().unwrap()))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_returns_200_with_result() {
        let body = r#"{
            "employment_period": {"start_date": "2019-01-01", "end_date": "2025-01-01"},
            "compensation_basis": {"monthly_salary": "10000"},
            "termination_context": {
                "contract_type": "indefinite",
                "termination_reason": "employer_initiated"
            }
        }"#;

        let response = create_test_router()
            .oneshot(post_json("/benefits/calculate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let result: BenefitResult = read_body(response).await;
        assert_eq!(result.total_amount, Decimal::from(35000));
    }

    #[tokio::test]
    async fn test_validate_returns_verdict() {
        let body = r#"{
            "decision_facts": {
                "decision_type": "termination",
                "prior_warnings_count": 1,
                "tenure_months": 30
            }
        }"#;

        let response = create_test_router()
            .oneshot(post_json("/decisions/validate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let verdict: ValidationVerdict = read_body(response).await;
        assert_eq!(verdict.classification, Classification::NonCompliant);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = create_test_router()
            .oneshot(post_json("/decisions/validate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/benefits/calculate")
            .body(Body::from("{}"))
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_unknown_decision_type_returns_400() {
        let body = r#"{
            "decision_facts": {
                "decision_type": "promotion",
                "prior_warnings_count": 0,
                "tenure_months": 30
            }
        }"#;

        let response = create_test_router()
            .oneshot(post_json("/decisions/validate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "UNSUPPORTED_DECISION_TYPE");
    }

    #[tokio::test]
    async fn test_rules_listing() {
        let request = Request::builder()
            .method("GET")
            .uri("/rules")
            .body(Body::empty())
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let listing: RulesResponse = read_body(response).await;
        assert_eq!(listing.repository.code, "NLC");
        assert_eq!(
            listing.rules.len(),
            RuleRepository::builtin().unwrap().rules().len()
        );
    }
}
