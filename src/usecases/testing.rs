//! Scripted stand-in for the ranking service.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::{
    errors::{Error, ErrorCode},
    models::{leaderboard::LeaderboardEntry, rank::RankResult},
    repositories::ranking::RankingApi,
};

#[derive(Default)]
pub struct FakeRanking {
    top: Mutex<VecDeque<Result<Vec<LeaderboardEntry>, Error>>>,
    ranks: Mutex<VecDeque<Result<RankResult, Error>>>,
    top_requests: AtomicUsize,
    rank_requests: Mutex<Vec<String>>,
}

impl FakeRanking {
    pub fn push_top(&self, response: Result<Vec<LeaderboardEntry>, Error>) {
        self.top.lock().unwrap().push_back(response);
    }

    pub fn push_rank(&self, response: Result<RankResult, Error>) {
        self.ranks.lock().unwrap().push_back(response);
    }

    pub fn top_requests(&self) -> usize {
        self.top_requests.load(Ordering::SeqCst)
    }

    pub fn rank_requests(&self) -> Vec<String> {
        self.rank_requests.lock().unwrap().clone()
    }

    pub fn entries(rows: &[(&str, i64)]) -> Vec<LeaderboardEntry> {
        let json: Vec<_> = rows
            .iter()
            .map(|(user_id, score)| serde_json::json!({ "user_id": user_id, "score": score }))
            .collect();
        serde_json::from_value(serde_json::Value::Array(json)).unwrap()
    }

    pub fn rank(user_id: &str, rank: i64, score: i64) -> RankResult {
        serde_json::from_value(serde_json::json!({
            "user_id": user_id,
            "rank": rank,
            "score": score,
        }))
        .unwrap()
    }

    pub fn http_error(what: &str, status: u16) -> Error {
        Error::new(
            ErrorCode::UnexpectedStatus,
            format!("Failed to fetch {what}: {status} unavailable"),
        )
    }
}

#[async_trait]
impl RankingApi for FakeRanking {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        self.top_requests.fetch_add(1, Ordering::SeqCst);
        self.top.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn fetch_rank(&self, user_id: &str) -> Result<RankResult, Error> {
        self.rank_requests.lock().unwrap().push(user_id.to_string());
        self.ranks
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::http_error("rank", 404)))
    }
}
