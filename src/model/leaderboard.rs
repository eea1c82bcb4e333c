use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LeaderboardEntryDto {
    pub user: UserDto,
    pub points: u32,
    pub level: u32,
    pub rank: u32,
}
