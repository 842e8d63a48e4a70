use super::{score, user::UserId};

/// One row of `/v1/leaderboard/top`. Position in the returned list is the rank;
/// any rank the server sends alongside is ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    #[serde(deserialize_with = "score::deserialize")]
    pub score: i64,
}
