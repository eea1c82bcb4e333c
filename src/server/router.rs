//! Axum route configuration and API documentation.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::model::{
    api::{AwardDto, AwardReceiptDto, DiagnosticsDto, ErrorDto, HealthDto, MessageDto},
    badge::BadgeDto,
    leaderboard::LeaderboardEntryDto,
    summary::UserSummaryDto,
    user::UserDto,
};
use crate::server::{
    controller::{demo, diagnostics, meta},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gamification Demo API",
        description = "Read-only demo backend serving fixed gamification data",
        version = "1.0"
    ),
    paths(
        meta::root,
        meta::health,
        demo::get_leaderboard,
        demo::get_badges,
        demo::list_users,
        demo::get_user_summary,
        demo::award_points,
        diagnostics::test_database,
    ),
    components(schemas(
        UserDto,
        BadgeDto,
        LeaderboardEntryDto,
        UserSummaryDto,
        AwardDto,
        AwardReceiptDto,
        DiagnosticsDto,
        ErrorDto,
        HealthDto,
        MessageDto,
    ))
)]
struct ApiDoc;

/// Builds the application router.
///
/// Cross-origin requests are allowed from any origin with any method and
/// header, credentials included. `very_permissive` mirrors the request
/// origin instead of sending a wildcard, which keeps the policy compatible
/// with credentialed requests.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::root))
        .route("/api/health", get(meta::health))
        .route("/api/demo/leaderboard", get(demo::get_leaderboard))
        .route("/api/demo/badges", get(demo::get_badges))
        .route("/api/demo/users", get(demo::list_users))
        .route("/api/demo/user/{user_id}", get(demo::get_user_summary))
        .route("/api/demo/award", post(demo::award_points))
        .route("/test", get(diagnostics::test_database))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

#[cfg(test)]
mod test;
