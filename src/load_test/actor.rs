use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};
use reqwest::{header, Client, RequestBuilder};
use tokio::time::{self, Instant};

use super::{
    checks::{Check, Expectation, Tally},
    LoadTestSettings,
};
use crate::models::{
    score::ScoreSubmission,
    user::{LoginResponse, SyntheticUser},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationEnd {
    Completed,
    /// Login gave no token, so nothing authenticated was attempted.
    NoToken,
}

/// One simulated user. Owns its counters; nothing is shared with other actors.
pub struct Actor {
    id: usize,
    settings: Arc<LoadTestSettings>,
    http: Client,
    rng: StdRng,
    tally: Tally,
}

impl Actor {
    pub fn new(id: usize, settings: Arc<LoadTestSettings>, http: Client) -> Self {
        Self {
            id,
            settings,
            http,
            rng: StdRng::from_entropy(),
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Iterates until `deadline`, idling between iterations. An iteration that has
    /// started always runs to the end.
    pub async fn run_until(mut self, deadline: Instant) -> Tally {
        while Instant::now() < deadline {
            self.iterate().await;
            time::sleep(self.settings.think_time).await;
        }
        self.tally
    }

    pub async fn iterate(&mut self) -> IterationEnd {
        let settings = self.settings.clone();
        let user = SyntheticUser::generate(self.id, &mut self.rng);

        let signup = self
            .http
            .post(settings.signup_url.clone())
            .json(&user)
            .send()
            .await;
        self.check(
            Check::SignedUp,
            Expectation::Status(settings.signup_status),
            &signup,
        );

        let login = self
            .http
            .post(settings.login_url.clone())
            .json(&user)
            .send()
            .await;
        self.check(
            Check::LoggedIn,
            Expectation::Status(settings.login_status),
            &login,
        );

        let token = match login {
            Ok(response) => response
                .json::<LoginResponse>()
                .await
                .ok()
                .and_then(LoginResponse::into_token),
            Err(_) => None,
        };
        self.tally.iterations += 1;

        let token = match token {
            Some(token) => token,
            None => {
                self.tally.tokenless_iterations += 1;
                log::debug!(
                    actor = self.id,
                    username = user.username.as_str();
                    "No token in login response",
                );
                return IterationEnd::NoToken;
            }
        };

        let score = ScoreSubmission {
            score: self.rng.gen_range(0..1000),
            game_mode: settings.game_mode.clone(),
        };
        let submitted = authorized(self.http.post(settings.score_url.clone()), &token)
            .json(&score)
            .send()
            .await;
        self.check(Check::ScoreSubmitted, Expectation::AnySuccess, &submitted);

        let leaderboard = authorized(self.http.get(settings.leaderboard_url.clone()), &token)
            .send()
            .await;
        self.check(
            Check::LeaderboardFetched,
            Expectation::Status(reqwest::StatusCode::OK),
            &leaderboard,
        );

        let rank = authorized(self.http.get(settings.rank_url.clone()), &token)
            .send()
            .await;
        self.check(
            Check::RankFetched,
            Expectation::Status(reqwest::StatusCode::OK),
            &rank,
        );

        IterationEnd::Completed
    }

    fn check(
        &mut self,
        check: Check,
        expectation: Expectation,
        response: &reqwest::Result<reqwest::Response>,
    ) {
        let passed = expectation.is_met(response);
        if !passed {
            let outcome = match response {
                Ok(response) => response.status().to_string(),
                Err(e) => e.to_string(),
            };
            log::debug!(
                actor = self.id,
                check = check.name(),
                outcome = outcome;
                "Check failed",
            );
        }
        self.tally.record(check, passed);
    }
}

fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
    request
        .bearer_auth(token)
        .header(header::CONTENT_TYPE, "application/json")
}
