//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI 3.1 document, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "symcheck API",
        version = "0.1.0",
        description = "Keyword-based symptom checker. Educational use only, not medical advice.",
    ),
    tags(
        (name = "Check", description = "Red-flag detection and condition ranking for free-text symptoms"),
        (name = "Health", description = "Service readiness and catalog size"),
    ),
    paths(
        crate::api::check::check,
        crate::api::health::health,
    ),
    components(schemas(
        crate::api::check::CheckRequest,
        crate::api::check::CheckResponse,
        crate::api::check::PossibleCondition,
        crate::api::error::ErrorResponse,
        crate::api::health::HealthResponse,
    ))
)]
pub struct ApiDoc;
