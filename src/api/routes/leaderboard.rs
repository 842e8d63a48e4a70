use std::sync::Arc;

use axum::{extract::Extension, response::Html, routing::get, Router};
use tokio::sync::watch;

use crate::{
    api::page,
    context::Context,
    views::{leaderboard::LeaderboardState, rank_search::RankSearch},
};

pub fn router() -> Router {
    Router::new().route("/", get(get_leaderboard))
}

async fn get_leaderboard(
    Extension(ctx): Extension<Arc<Context>>,
    Extension(leaderboard): Extension<watch::Receiver<LeaderboardState>>,
) -> Html<String> {
    let snapshot = leaderboard.borrow().clone();

    page::render(
        &snapshot,
        &RankSearch::default(),
        Some(ctx.config.poll_interval_secs),
    )
}
