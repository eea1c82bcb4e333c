use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub mode: String,
    pub version: String,
}

/// Action descriptor accepted by the award endpoint. The demo build
/// acknowledges it without touching any data.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AwardDto {
    pub action: String,
    #[serde(default)]
    pub points: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AwardReceiptDto {
    pub mode: String,
    pub message: String,
}

/// Database connectivity report returned by the diagnostics endpoint.
///
/// Every field is descriptive text; the endpoint folds all failure modes
/// into these strings instead of surfacing errors to the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DiagnosticsDto {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
