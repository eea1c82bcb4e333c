use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BadgeDto {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Hex color used by clients when rendering the badge.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_icon() -> String {
    "Star".to_string()
}

fn default_color() -> String {
    "#6366F1".to_string()
}
