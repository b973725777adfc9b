//! Symptom check endpoint.
//!
//! SRP: request body extraction and wire shape; matching lives in `symcheck_core`.

use std::sync::Arc;

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use symcheck_core::CheckReport;
use tracing::warn;

use crate::state::AppState;

use super::{ApiError, ErrorResponse};

/// Body of `POST /check`, accepted as JSON or as an urlencoded form.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CheckRequest {
    /// Free-text symptom description.
    #[schema(example = "fever and body ache")]
    pub symptoms: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PossibleCondition {
    pub name: String,
    pub explanation: String,
    pub advice: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// The submitted text, unmodified.
    pub input: String,
    /// ISO-8601 UTC generation time.
    pub timestamp: String,
    pub red_flags: Vec<String>,
    /// Ranked matches, or the single fallback entry.
    pub possible_conditions: Vec<PossibleCondition>,
    pub disclaimers: Vec<String>,
}

impl From<CheckReport> for CheckResponse {
    fn from(report: CheckReport) -> Self {
        Self {
            timestamp: report.timestamp_iso(),
            input: report.input,
            red_flags: report.red_flags,
            possible_conditions: report
                .possible_conditions
                .into_iter()
                .map(|c| PossibleCondition {
                    name: c.name,
                    explanation: c.explanation,
                    advice: c.advice,
                })
                .collect(),
            disclaimers: report.disclaimers,
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Pull `symptoms` out of the body. Absent, wrong-typed and unparsable
/// bodies all come back as `None`.
async fn read_symptoms(request: Request) -> Option<String> {
    let parsed = if is_form(request.headers()) {
        Form::<CheckRequest>::from_request(request, &())
            .await
            .map(|Form(req)| req)
            .map_err(|rejection| rejection.body_text())
    } else {
        Json::<CheckRequest>::from_request(request, &())
            .await
            .map(|Json(req)| req)
            .map_err(|rejection| rejection.body_text())
    };

    match parsed {
        Ok(req) => Some(req.symptoms),
        Err(reason) => {
            warn!("Rejected /check body: {}", reason);
            None
        }
    }
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "Check",
    request_body(
        content = CheckRequest,
        description = "JSON object, or `application/x-www-form-urlencoded` with a `symptoms` field"
    ),
    responses(
        (status = 200, description = "Red flags, ranked conditions and disclaimers", body = CheckResponse),
        (status = 400, description = "Missing, non-string or blank `symptoms`", body = ErrorResponse)
    )
)]
pub async fn check(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<CheckResponse>, ApiError> {
    let symptoms = read_symptoms(request).await;

    let report = symcheck_core::check(&state.catalog, symptoms.as_deref()).map_err(|e| {
        warn!("Rejected /check input: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(CheckResponse::from(report)))
}
