use std::sync::Arc;

use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{context::Context, poller};

mod page;
mod routes;

fn api_router() -> Router {
    routes::leaderboard::router()
        .merge(routes::rank::router())
        .merge(routes::health::router())
}

/// Serves the leaderboard and rank search as HTML while the poller runs in the background.
pub async fn serve(ctx: Context) -> anyhow::Result<()> {
    let server_port = ctx.config.web_port.unwrap_or(8080);
    let server_host = ctx
        .config
        .web_host
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());

    let poller = poller::spawn(ctx.ranking.clone(), ctx.poll_interval());

    let app = api_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(Arc::new(ctx)))
            .layer(Extension(poller.subscribe())),
    );

    log::info!(
        host = server_host.as_str(),
        port = server_port;
        "Serving web UI",
    );
    let listener = TcpListener::bind((server_host.as_str(), server_port)).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    poller.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use clap::Parser;
    use tokio::sync::watch;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::Config, usecases::testing::FakeRanking, views::leaderboard::LeaderboardState,
    };

    fn app(api: Arc<FakeRanking>, state: watch::Receiver<LeaderboardState>) -> Router {
        let ctx = Context {
            config: Config::parse_from(["leaderboard-client", "--app-component", "web"]),
            http: reqwest::Client::new(),
            ranking: api,
        };
        api_router()
            .layer(Extension(Arc::new(ctx)))
            .layer(Extension(state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn loaded() -> LeaderboardState {
        LeaderboardState {
            entries: FakeRanking::entries(&[("7", 120), ("3", 80)]),
            loading: false,
            error: None,
            updated_at: Some(chrono::Utc::now()),
        }
    }

    #[tokio::test]
    async fn index_renders_snapshot_and_form() {
        let (_tx, rx) = watch::channel(loaded());
        let (status, html) = get(app(Arc::new(FakeRanking::default()), rx), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<tr><td>1</td><td>7</td><td>120</td></tr>"));
        assert!(html.contains("<tr><td>2</td><td>3</td><td>80</td></tr>"));
        assert!(html.contains("http-equiv=\"refresh\" content=\"5\""));
        assert!(html.contains("action=\"/rank\""));
    }

    #[tokio::test]
    async fn empty_rank_query_issues_no_request() {
        let api = Arc::new(FakeRanking::default());
        let (_tx, rx) = watch::channel(loaded());

        let (status, html) = get(app(api.clone(), rx.clone()), "/rank?user_id=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Get Rank"));

        get(app(api.clone(), rx), "/rank").await;
        assert!(api.rank_requests().is_empty());
    }

    #[tokio::test]
    async fn rank_query_shows_result() {
        let api = Arc::new(FakeRanking::default());
        api.push_rank(Ok(FakeRanking::rank("7", 3, 120)));
        let (_tx, rx) = watch::channel(loaded());

        let (_, html) = get(app(api.clone(), rx), "/rank?user_id=7").await;

        assert_eq!(api.rank_requests(), vec!["7".to_string()]);
        assert!(html.contains("User ID: 7<br>"));
        assert!(html.contains("Rank: 3<br>"));
        assert!(html.contains("Score: 120</div>"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[tokio::test]
    async fn rank_failure_shows_error() {
        let api = Arc::new(FakeRanking::default());
        let (_tx, rx) = watch::channel(loaded());

        let (_, html) = get(app(api, rx), "/rank?user_id=99").await;

        assert!(html.contains("<div class=\"error\">Failed to fetch rank: 404 unavailable</div>"));
        assert!(!html.contains("class=\"result\""));
    }

    #[tokio::test]
    async fn health_follows_last_poll() {
        let (tx, rx) = watch::channel(LeaderboardState::default());
        let api = Arc::new(FakeRanking::default());

        let (status, _) = get(app(api.clone(), rx.clone()), "/_health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        tx.send_replace(loaded());
        let (status, _) = get(app(api.clone(), rx.clone()), "/_health").await;
        assert_eq!(status, StatusCode::OK);

        tx.send_modify(|state| {
            state.error = Some("Network error when fetching leaderboard".to_string());
        });
        let (status, _) = get(app(api, rx), "/_health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
