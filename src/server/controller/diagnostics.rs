use axum::{extract::State, Json};

use crate::{
    model::api::DiagnosticsDto,
    server::{service::diagnostics::DiagnosticsService, state::AppState},
};

/// Tag for grouping diagnostics endpoints in OpenAPI documentation
pub static DIAGNOSTICS_TAG: &str = "diagnostics";

/// GET /test - Database connectivity diagnostics.
///
/// Reports whether a database integration would be available, without
/// performing any real database work. Probes the optional collaborator when
/// one is installed and reports the `DATABASE_URL` / `DATABASE_NAME`
/// environment flags captured at startup. Every failure mode inside the
/// probe is folded into the report's strings.
///
/// # Returns
/// - `200 OK`: Connectivity report; this endpoint never fails
#[utoipa::path(
    get,
    path = "/test",
    tag = DIAGNOSTICS_TAG,
    responses(
        (status = 200, description = "Database connectivity report", body = DiagnosticsDto)
    ),
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsDto> {
    let service = DiagnosticsService::new(
        state.database.as_ref(),
        state.database_url_set,
        state.database_name_set,
    );

    Json(service.report())
}
