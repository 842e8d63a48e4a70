use async_trait::async_trait;
use reqwest::{header, Client, Response, Url};

use crate::{
    errors::{Error, ErrorCode},
    models::{leaderboard::LeaderboardEntry, rank::RankResult},
};

/// Read side of the ranking service.
#[async_trait]
pub trait RankingApi: Send + Sync {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, Error>;

    async fn fetch_rank(&self, user_id: &str) -> Result<RankResult, Error>;
}

pub struct RankingRepository {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl RankingRepository {
    pub fn new(http: Client, base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            token,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::new(
                    ErrorCode::RequestFailed,
                    format!("Invalid ranking service URL: {}", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, what: &str) -> Result<Response, Error> {
        let mut request = self
            .http
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            let err_str = e.to_string();
            log::error!(resource = what, err = err_str; "Request to ranking service failed");
            Error::new(
                ErrorCode::RequestFailed,
                format!("Network error when fetching {what}"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                resource = what,
                status = status.as_u16();
                "Ranking service returned an error",
            );
            return Err(Error::new(
                ErrorCode::UnexpectedStatus,
                format!("Failed to fetch {what}: {} {}", status.as_u16(), body.trim_end()),
            ));
        }

        Ok(response)
    }
}

fn malformed(what: &str, err: reqwest::Error) -> Error {
    let err_str = err.to_string();
    log::error!(resource = what, err = err_str; "Could not decode ranking service response");
    Error::new(
        ErrorCode::MalformedResponse,
        format!("Malformed {what} response: {err_str}"),
    )
}

#[async_trait]
impl RankingApi for RankingRepository {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        let url = self.endpoint(&["v1", "leaderboard", "top"])?;
        let response = self.get(url, "leaderboard").await?;

        // the backend encodes an empty leaderboard as `null`
        let entries: Option<Vec<LeaderboardEntry>> = response
            .json()
            .await
            .map_err(|e| malformed("leaderboard", e))?;

        Ok(entries.unwrap_or_default())
    }

    async fn fetch_rank(&self, user_id: &str) -> Result<RankResult, Error> {
        let url = self.endpoint(&["v1", "rank", user_id])?;
        let response = self.get(url, "rank").await?;

        response.json().await.map_err(|e| malformed("rank", e))
    }
}
