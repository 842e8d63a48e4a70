use super::{score, user::UserId};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankResult {
    pub user_id: UserId,
    pub rank: i64,
    #[serde(deserialize_with = "score::deserialize")]
    pub score: i64,
}

impl RankResult {
    pub fn display_lines(&self) -> [String; 3] {
        [
            format!("User ID: {}", self.user_id),
            format!("Rank: {}", self.rank),
            format!("Score: {}", self.score),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lines_match_result() {
        let result: RankResult =
            serde_json::from_str(r#"{"user_id": 7, "rank": 3, "score": 120}"#).unwrap();

        assert_eq!(
            result.display_lines(),
            ["User ID: 7", "Rank: 3", "Score: 120"]
        );
    }

    #[test]
    fn accepts_string_ids_and_float_scores() {
        let result: RankResult = serde_json::from_str(
            r#"{"user_name": "alice", "user_id": "42", "score": 99.0, "rank": 1}"#,
        )
        .unwrap();

        assert_eq!(result.user_id.as_str(), "42");
        assert_eq!(result.score, 99);
        assert_eq!(result.rank, 1);
    }
}
