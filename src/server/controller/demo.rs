use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AwardDto, AwardReceiptDto, ErrorDto},
        badge::BadgeDto,
        leaderboard::LeaderboardEntryDto,
        summary::UserSummaryDto,
        user::UserDto,
    },
    server::{error::AppError, service::demo::DemoService, state::AppState},
};

/// Tag for grouping demo data endpoints in OpenAPI documentation
pub static DEMO_TAG: &str = "demo";

/// GET /api/demo/leaderboard - Get the demo leaderboard.
///
/// Returns all leaderboard entries in rank order. The ordering is fixed at
/// startup; no sorting happens per request.
///
/// # Returns
/// - `200 OK`: JSON array of LeaderboardEntryDto, rank ascending
#[utoipa::path(
    get,
    path = "/api/demo/leaderboard",
    tag = DEMO_TAG,
    responses(
        (status = 200, description = "Leaderboard entries in rank order", body = [LeaderboardEntryDto])
    ),
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntryDto>> {
    let service = DemoService::new(&state.dataset);

    Json(service.leaderboard().to_vec())
}

/// GET /api/demo/badges - Get all badge definitions.
///
/// # Returns
/// - `200 OK`: JSON array of BadgeDto
#[utoipa::path(
    get,
    path = "/api/demo/badges",
    tag = DEMO_TAG,
    responses(
        (status = 200, description = "All badge definitions", body = [BadgeDto])
    ),
)]
pub async fn get_badges(State(state): State<AppState>) -> Json<Vec<BadgeDto>> {
    let service = DemoService::new(&state.dataset);

    Json(service.badges().to_vec())
}

/// GET /api/demo/users - List all demo users.
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
#[utoipa::path(
    get,
    path = "/api/demo/users",
    tag = DEMO_TAG,
    responses(
        (status = 200, description = "All demo users", body = [UserDto])
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserDto>> {
    let service = DemoService::new(&state.dataset);

    Json(service.users().to_vec())
}

/// GET /api/demo/user/{user_id} - Get the summary for one demo user.
///
/// Returns the user's points, level, streak, badges and recent activity.
///
/// # Path Parameters
/// - `user_id`: Demo user identifier, e.g. `u_001`
///
/// # Returns
/// - `200 OK`: UserSummaryDto for the requested user
/// - `404 Not Found`: The id has no record in the demo dataset
#[utoipa::path(
    get,
    path = "/api/demo/user/{user_id}",
    tag = DEMO_TAG,
    params(
        ("user_id" = String, Path, description = "Demo user identifier")
    ),
    responses(
        (status = 200, description = "Summary for the requested user", body = UserSummaryDto),
        (status = 404, description = "User not found in demo dataset", body = ErrorDto)
    ),
)]
pub async fn get_user_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DemoService::new(&state.dataset);

    let summary = service.user_summary(&user_id)?.clone();

    Ok((StatusCode::OK, Json(summary)))
}

/// POST /api/demo/award - Acknowledge an award action.
///
/// Write-shaped endpoint that never writes: the demo dataset is read-only,
/// so the action is acknowledged with a fixed receipt and no data changes.
///
/// # Returns
/// - `200 OK`: Demo-mode receipt stating no data was changed
#[utoipa::path(
    post,
    path = "/api/demo/award",
    tag = DEMO_TAG,
    request_body = AwardDto,
    responses(
        (status = 200, description = "Read-only acknowledgment", body = AwardReceiptDto)
    ),
)]
pub async fn award_points(
    State(state): State<AppState>,
    Json(payload): Json<AwardDto>,
) -> impl IntoResponse {
    let receipt = DemoService::new(&state.dataset).award(payload);

    (StatusCode::OK, Json(receipt))
}
