use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Html,
    routing::get,
    Router,
};
use tokio::sync::watch;

use crate::{
    api::page,
    context::Context,
    usecases::{self, ranks::SubmitOutcome},
    views::{leaderboard::LeaderboardState, rank_search::RankSearch},
};

pub fn router() -> Router {
    Router::new().route(page::RANK_ACTION, get(get_rank))
}

#[derive(serde::Serialize, serde::Deserialize)]
struct RankQuery {
    #[serde(default)]
    user_id: String,
}

async fn get_rank(
    Extension(ctx): Extension<Arc<Context>>,
    Extension(leaderboard): Extension<watch::Receiver<LeaderboardState>>,
    Query(query): Query<RankQuery>,
) -> Html<String> {
    let mut search = RankSearch::new(query.user_id);

    if usecases::ranks::submit(&mut search, ctx.ranking.as_ref()).await == SubmitOutcome::Found {
        log::info!(user_id = search.user_id.trim(); "Looked up rank");
    }

    let snapshot = leaderboard.borrow().clone();
    page::render(&snapshot, &search, None)
}
