use thiserror::Error;

/// Violations of the demo dataset's construction invariants.
///
/// The dataset is compiled in, so any of these indicates a programming error
/// in the sample records. They are checked once at startup and abort the
/// process rather than serving inconsistent data.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Leaderboard ranks must be strictly increasing in insertion order.
    #[error("Leaderboard rank {rank} does not increase over preceding rank {previous}")]
    RankOutOfOrder {
        /// The offending rank
        rank: u32,
        /// The rank of the preceding entry
        previous: u32,
    },

    /// Leaderboard points must strictly decrease as rank increases.
    #[error("Leaderboard entry at rank {rank} has {points} points, not below the preceding {previous}")]
    PointsOutOfOrder {
        /// Rank of the offending entry
        rank: u32,
        /// Points of the offending entry
        points: u32,
        /// Points of the preceding entry
        previous: u32,
    },

    /// Summary index key does not name any user in the user collection.
    #[error("Summary index references unknown user id: {0}")]
    UnknownSummaryUser(String),
}
