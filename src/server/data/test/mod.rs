use std::collections::HashMap;

use crate::model::{leaderboard::LeaderboardEntryDto, user::UserDto};
use crate::server::data::demo::DemoDataset;
use crate::server::error::dataset::DatasetError;
