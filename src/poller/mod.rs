use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::{repositories::ranking::RankingApi, usecases, views::leaderboard::LeaderboardState};

/// Background refresh of the top-scores list.
///
/// The first fetch goes out immediately, then one per `interval`. A cycle never starts
/// while the previous one is unresolved, so responses are applied in request order.
/// Dropping the handle stops the loop just like [`Poller::shutdown`] does.
pub struct Poller {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
    state: watch::Receiver<LeaderboardState>,
}

pub fn spawn(api: Arc<dyn RankingApi>, interval: Duration) -> Poller {
    let (state_tx, state_rx) = watch::channel(LeaderboardState::default());
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(run(api, interval, state_tx, shutdown_rx));

    Poller {
        shutdown: shutdown_tx,
        task,
        state: state_rx,
    }
}

impl Poller {
    pub fn subscribe(&self) -> watch::Receiver<LeaderboardState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> LeaderboardState {
        self.state.borrow().clone()
    }

    /// Stops polling. A fetch still in flight is dropped and never applied.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            let err_str = e.to_string();
            log::error!(err = err_str; "Leaderboard poller task failed");
        }
    }
}

async fn run(
    api: Arc<dyn RankingApi>,
    interval: Duration,
    state: watch::Sender<LeaderboardState>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    log::info!(
        interval_secs = interval.as_secs();
        "Polling leaderboard",
    );

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {}
        }

        tokio::select! {
            _ = &mut shutdown => break,
            _ = usecases::leaderboards::refresh(&state, api.as_ref()) => {}
        }
    }

    log::info!("Leaderboard poller stopped");
}
