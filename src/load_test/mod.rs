//! Concurrent signup/login/score/read traffic against the users, score and ranking
//! services. One task per virtual actor; actors never talk to each other.

use std::{sync::Arc, time::Duration};

use anyhow::Context as _;
use futures::{stream::FuturesUnordered, StreamExt};
use reqwest::{Client, StatusCode, Url};
use tokio::time::Instant;

use crate::{config::Config, context::Context};

pub mod actor;
pub mod checks;

use actor::Actor;
use checks::Tally;

#[derive(Debug, Clone)]
pub struct LoadTestSettings {
    pub actors: usize,
    pub duration: Duration,
    pub think_time: Duration,
    pub game_mode: String,
    pub signup_status: StatusCode,
    pub login_status: StatusCode,
    pub signup_url: Url,
    pub login_url: Url,
    pub score_url: Url,
    pub leaderboard_url: Url,
    pub rank_url: Url,
}

fn endpoint(base_url: &str, segments: &[&str]) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url).with_context(|| format!("invalid base URL {base_url}"))?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("base URL {base_url} cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

impl LoadTestSettings {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            actors: config.load_test_actors,
            duration: Duration::from_secs(config.load_test_duration_secs),
            think_time: Duration::from_millis(config.load_test_think_time_ms),
            game_mode: config.load_test_game_mode.clone(),
            signup_status: StatusCode::from_u16(config.load_test_signup_status)?,
            login_status: StatusCode::from_u16(config.load_test_login_status)?,
            signup_url: endpoint(&config.users_base_url, &["v1", "signup"])?,
            login_url: endpoint(&config.users_base_url, &["v1", "login"])?,
            score_url: endpoint(&config.scores_base_url, &["v1", "score"])?,
            leaderboard_url: endpoint(&config.api_base_url, &["v1", "leaderboard", "top"])?,
            rank_url: endpoint(
                &config.api_base_url,
                &["v1", "rank", config.load_test_rank_user_id.as_str()],
            )?,
        })
    }
}

/// Runs every actor to the deadline and returns their merged counters.
pub async fn run(settings: LoadTestSettings, http: Client) -> Tally {
    let settings = Arc::new(settings);
    let deadline = Instant::now() + settings.duration;

    let mut actors: FuturesUnordered<_> = (1..=settings.actors)
        .map(|id| {
            let actor = Actor::new(id, settings.clone(), http.clone());
            tokio::spawn(actor.run_until(deadline))
        })
        .collect();

    let mut total = Tally::default();
    while let Some(result) = actors.next().await {
        match result {
            Ok(tally) => total.merge(&tally),
            Err(e) => {
                let err_str = e.to_string();
                log::error!(err = err_str; "Load test actor failed");
            }
        }
    }

    total
}

pub async fn serve(ctx: Context) -> anyhow::Result<()> {
    let settings = LoadTestSettings::from_config(&ctx.config)?;

    log::info!(
        actors = settings.actors,
        duration_secs = settings.duration.as_secs(),
        users_url = ctx.config.users_base_url.as_str(),
        scores_url = ctx.config.scores_base_url.as_str(),
        ranking_url = ctx.config.api_base_url.as_str();
        "Starting load test",
    );

    let tally = run(settings, ctx.http.clone()).await;

    for check in checks::Check::ALL {
        let count = tally.get(check);
        log::info!(
            check = check.name(),
            passed = count.passed,
            failed = count.failed;
            "Check result",
        );
    }
    log::info!(
        iterations = tally.iterations,
        tokenless_iterations = tally.tokenless_iterations;
        "Load test finished",
    );
    println!("{}", tally.render_text());

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn settings_build_service_endpoints() {
        let config = Config::parse_from([
            "leaderboard-client",
            "--app-component",
            "load_test",
            "--users-base-url",
            "http://users:8084/",
            "--load-test-rank-user-id",
            "a b",
        ]);
        let settings = LoadTestSettings::from_config(&config).unwrap();

        assert_eq!(settings.signup_url.as_str(), "http://users:8084/v1/signup");
        assert_eq!(settings.login_url.as_str(), "http://users:8084/v1/login");
        assert_eq!(settings.score_url.as_str(), "http://localhost:8085/v1/score");
        assert_eq!(
            settings.leaderboard_url.as_str(),
            "http://localhost:8086/v1/leaderboard/top"
        );
        assert_eq!(settings.rank_url.as_str(), "http://localhost:8086/v1/rank/a%20b");
        assert_eq!(settings.actors, 100);
        assert_eq!(settings.duration, Duration::from_secs(30));
        assert_eq!(settings.think_time, Duration::from_secs(1));
        assert_eq!(settings.game_mode, "classic");
        assert_eq!(settings.signup_status, StatusCode::OK);
    }
}
