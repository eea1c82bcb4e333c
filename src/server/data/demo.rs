//! The fixed demo dataset.
//!
//! All records are compiled in and assembled exactly once during startup.
//! Construction validates the invariants the rest of the application relies
//! on silently: leaderboard entries are stored rank-ascending with strictly
//! decreasing points, and every summary key names a listed user.

use std::collections::HashMap;

use crate::model::{
    badge::BadgeDto, leaderboard::LeaderboardEntryDto, summary::UserSummaryDto, user::UserDto,
};
use crate::server::error::dataset::DatasetError;

/// Immutable demo records served by every endpoint.
///
/// Shared behind an `Arc` across request handlers; nothing writes to it
/// after construction, so no synchronization is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoDataset {
    pub users: Vec<UserDto>,
    pub badges: Vec<BadgeDto>,
    /// Stored in rank order; list endpoints return it as constructed.
    pub leaderboard: Vec<LeaderboardEntryDto>,
    /// Summary lookup keyed by user id.
    pub summaries: HashMap<String, UserSummaryDto>,
}

impl DemoDataset {
    /// Assembles a dataset from its collections, checking construction invariants.
    ///
    /// # Arguments
    /// - `users` - User records, ids unique
    /// - `badges` - Badge records, ids unique
    /// - `leaderboard` - Entries in rank order
    /// - `summaries` - Per-user summaries keyed by user id
    ///
    /// # Returns
    /// - `Ok(DemoDataset)` - Collections satisfy the ordering and referential invariants
    /// - `Err(DatasetError)` - First violated invariant
    pub fn from_parts(
        users: Vec<UserDto>,
        badges: Vec<BadgeDto>,
        leaderboard: Vec<LeaderboardEntryDto>,
        summaries: HashMap<String, UserSummaryDto>,
    ) -> Result<Self, DatasetError> {
        for pair in leaderboard.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);

            if next.rank <= prev.rank {
                return Err(DatasetError::RankOutOfOrder {
                    rank: next.rank,
                    previous: prev.rank,
                });
            }
            if next.points >= prev.points {
                return Err(DatasetError::PointsOutOfOrder {
                    rank: next.rank,
                    points: next.points,
                    previous: prev.points,
                });
            }
        }

        for user_id in summaries.keys() {
            if !users.iter().any(|user| user.id == *user_id) {
                return Err(DatasetError::UnknownSummaryUser(user_id.clone()));
            }
        }

        Ok(Self {
            users,
            badges,
            leaderboard,
            summaries,
        })
    }

    /// Builds the compiled-in sample records.
    pub fn demo() -> Result<Self, DatasetError> {
        let users = vec![
            sample_user("u_001", "Alex Morgan", "Sales Captain"),
            sample_user("u_002", "Jamie Lee", "Ops Strategist"),
            sample_user("u_003", "Riley Chen", "Product Ace"),
            sample_user("u_004", "Jordan Patel", "CX Pro"),
        ];

        let badges = vec![
            sample_badge("b_hero", "Hero", "Top performer of the week", "Trophy", "#F59E0B"),
            sample_badge("b_streak", "Streak", "7-day activity streak", "Flame", "#EF4444"),
            sample_badge("b_helper", "Mentor", "Helped 5 teammates", "Handshake", "#10B981"),
        ];

        let leaderboard = vec![
            rank_entry(users[0].clone(), 18250, 12, 1),
            rank_entry(users[1].clone(), 16940, 11, 2),
            rank_entry(users[2].clone(), 15100, 10, 3),
            rank_entry(users[3].clone(), 13320, 9, 4),
        ];

        let summaries = HashMap::from([
            (
                users[0].id.clone(),
                UserSummaryDto {
                    user: users[0].clone(),
                    points: 18250,
                    level: 12,
                    streak_days: 8,
                    badges: vec![badges[0].clone(), badges[1].clone()],
                    recent_actions: vec![
                        "Closed enterprise deal (+2,000)".to_string(),
                        "Completed onboarding quest (+300)".to_string(),
                        "Shared playbook with team (+100)".to_string(),
                    ],
                },
            ),
            (
                users[1].id.clone(),
                UserSummaryDto {
                    user: users[1].clone(),
                    points: 16940,
                    level: 11,
                    streak_days: 6,
                    badges: vec![badges[1].clone()],
                    recent_actions: vec![
                        "Optimized ops workflow (+500)".to_string(),
                        "Daily check-in (+20)".to_string(),
                    ],
                },
            ),
            (
                users[2].id.clone(),
                UserSummaryDto {
                    user: users[2].clone(),
                    points: 15100,
                    level: 10,
                    streak_days: 4,
                    badges: vec![],
                    recent_actions: vec!["Launched feature beta (+1,200)".to_string()],
                },
            ),
            (
                users[3].id.clone(),
                UserSummaryDto {
                    user: users[3].clone(),
                    points: 13320,
                    level: 9,
                    streak_days: 2,
                    badges: vec![badges[2].clone()],
                    recent_actions: vec!["Resolved 20+ support tickets (+800)".to_string()],
                },
            ),
        ]);

        Self::from_parts(users, badges, leaderboard, summaries)
    }
}

fn sample_user(id: &str, name: &str, title: &str) -> UserDto {
    UserDto {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        title: title.to_string(),
    }
}

fn sample_badge(id: &str, name: &str, description: &str, icon: &str, color: &str) -> BadgeDto {
    BadgeDto {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn rank_entry(user: UserDto, points: u32, level: u32, rank: u32) -> LeaderboardEntryDto {
    LeaderboardEntryDto {
        user,
        points,
        level,
        rank,
    }
}
