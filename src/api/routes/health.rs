use axum::{extract::Extension, http, routing::get, Router};
use tokio::sync::watch;

use crate::views::leaderboard::LeaderboardState;

pub fn router() -> Router {
    Router::new().route("/_health", get(health))
}

async fn health(
    Extension(leaderboard): Extension<watch::Receiver<LeaderboardState>>,
) -> http::StatusCode {
    let (is_polled, error) = {
        let state = leaderboard.borrow();
        (state.updated_at.is_some(), state.error.clone())
    };

    match (is_polled, error) {
        (true, None) => http::StatusCode::OK,
        (_, error) => {
            let err_str = error.unwrap_or_else(|| "no successful poll yet".to_string());
            log::error!(
                polled = is_polled,
                err = err_str;
                "Failed health check.",
            );
            http::StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
