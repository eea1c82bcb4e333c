use axum::Json;

use crate::model::api::{HealthDto, MessageDto};

/// API version advertised by the health endpoint and the OpenAPI document.
pub const API_VERSION: &str = "1.0";

/// Tag for grouping service meta endpoints in OpenAPI documentation
pub static META_TAG: &str = "meta";

/// GET / - Landing message confirming the API is up.
///
/// # Returns
/// - `200 OK`: Fixed greeting message
#[utoipa::path(
    get,
    path = "/",
    tag = META_TAG,
    responses(
        (status = 200, description = "Service is running", body = MessageDto)
    ),
)]
pub async fn root() -> Json<MessageDto> {
    Json(MessageDto {
        message: "Gamification Demo API running".to_string(),
    })
}

/// GET /api/health - Liveness and mode report.
///
/// Reports that the service is up, that it runs in demo mode against fixed
/// in-memory data, and which API version it serves.
///
/// # Returns
/// - `200 OK`: Health status object
#[utoipa::path(
    get,
    path = "/api/health",
    tag = META_TAG,
    responses(
        (status = 200, description = "Service health status", body = HealthDto)
    ),
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        mode: "demo".to_string(),
        version: API_VERSION.to_string(),
    })
}
