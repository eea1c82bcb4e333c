use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Player".to_string()
}
