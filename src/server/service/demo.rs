//! Demo lookup service.
//!
//! Resolves API requests against the immutable [`DemoDataset`]. All list
//! operations are total and deterministic; the only failure is a summary
//! lookup for an unknown user id.

use crate::model::{
    api::{AwardDto, AwardReceiptDto},
    badge::BadgeDto,
    leaderboard::LeaderboardEntryDto,
    summary::UserSummaryDto,
    user::UserDto,
};
use crate::server::{data::DemoDataset, error::AppError};

/// Message returned when a summary lookup misses.
const USER_NOT_FOUND: &str = "User not found in demo dataset";

/// Service providing read-only lookups over the demo dataset.
pub struct DemoService<'a> {
    pub dataset: &'a DemoDataset,
}

impl<'a> DemoService<'a> {
    /// Creates a new DemoService instance.
    ///
    /// # Arguments
    /// - `dataset` - Reference to the startup-built demo dataset
    ///
    /// # Returns
    /// - `DemoService` - New service instance
    pub fn new(dataset: &'a DemoDataset) -> Self {
        Self { dataset }
    }

    /// Returns the full leaderboard in its constructed order.
    ///
    /// The dataset already satisfies the rank/points ordering invariant, so
    /// no sorting happens per request.
    pub fn leaderboard(&self) -> &[LeaderboardEntryDto] {
        &self.dataset.leaderboard
    }

    /// Returns all badge records.
    pub fn badges(&self) -> &[BadgeDto] {
        &self.dataset.badges
    }

    /// Returns all user records.
    pub fn users(&self) -> &[UserDto] {
        &self.dataset.users
    }

    /// Looks up the summary for a user id.
    ///
    /// # Arguments
    /// - `user_id` - Demo user identifier, e.g. `u_001`
    ///
    /// # Returns
    /// - `Ok(&UserSummaryDto)` - Summary for the requested user
    /// - `Err(AppError::NotFound)` - Id has no record in the demo dataset
    pub fn user_summary(&self, user_id: &str) -> Result<&UserSummaryDto, AppError> {
        self.dataset
            .summaries
            .get(user_id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Acknowledges an award request without changing any data.
    ///
    /// The dataset is read-only, so the action is logged and answered with a
    /// fixed receipt stating that nothing was written.
    ///
    /// # Arguments
    /// - `action` - Free-text action name and point delta from the caller
    ///
    /// # Returns
    /// - `AwardReceiptDto` - Fixed demo-mode acknowledgment
    pub fn award(&self, action: AwardDto) -> AwardReceiptDto {
        tracing::info!(
            action = %action.action,
            points = action.points,
            "Award request acknowledged without changes"
        );

        AwardReceiptDto {
            mode: "demo".to_string(),
            message: "Read-only demo: no data was changed.".to_string(),
        }
    }
}
