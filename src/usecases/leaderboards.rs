use chrono::Utc;
use tokio::sync::watch;

use crate::{repositories::ranking::RankingApi, views::leaderboard::LeaderboardState};

/// One poll cycle. Entries are only replaced on success; a failure keeps them and
/// records the message instead.
pub async fn refresh(state: &watch::Sender<LeaderboardState>, api: &dyn RankingApi) {
    state.send_modify(|state| {
        state.loading = true;
        state.error = None;
    });

    let result = api.fetch_top().await;

    state.send_modify(|state| {
        match result {
            Ok(entries) => {
                state.entries = entries;
                state.updated_at = Some(Utc::now());
            }
            Err(e) => state.error = Some(e.user_feedback),
        }
        state.loading = false;
    });
}
