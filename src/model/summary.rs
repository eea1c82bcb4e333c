use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{badge::BadgeDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    pub user: UserDto,
    pub points: u32,
    pub level: u32,
    pub streak_days: u32,
    pub badges: Vec<BadgeDto>,
    /// Free-text activity lines, most recent first.
    pub recent_actions: Vec<String>,
}
