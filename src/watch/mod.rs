use std::io::Write;

use tokio::sync::watch;

use crate::{context::Context, poller, views::leaderboard::LeaderboardState};

/// Prints the leaderboard to stdout after every completed poll until interrupted.
pub async fn serve(ctx: Context) -> anyhow::Result<()> {
    let poller = poller::spawn(ctx.ranking.clone(), ctx.poll_interval());
    let mut updates = poller.subscribe();

    tokio::select! {
        result = print_updates(&mut updates, std::io::stdout()) => result?,
        _ = tokio::signal::ctrl_c() => log::info!("Interrupted, stopping"),
    }

    poller.shutdown().await;
    Ok(())
}

async fn print_updates<W: Write>(
    updates: &mut watch::Receiver<LeaderboardState>,
    mut out: W,
) -> anyhow::Result<()> {
    let mut last_printed: Option<LeaderboardState> = None;

    while updates.changed().await.is_ok() {
        let snapshot = updates.borrow_and_update().clone();
        // a cycle in progress has nothing new to show
        if snapshot.loading && last_printed.is_some() {
            continue;
        }
        if last_printed.as_ref() == Some(&snapshot) {
            continue;
        }

        writeln!(out, "{}", frame(&snapshot))?;
        out.flush()?;
        last_printed = Some(snapshot);
    }

    Ok(())
}

fn frame(state: &LeaderboardState) -> String {
    let mut text = String::from("Top Scores Leaderboard\n");
    if let Some(updated_at) = state.updated_at {
        text.push_str(&format!("updated {}\n", updated_at.format("%H:%M:%S UTC")));
    }
    text.push('\n');
    text.push_str(&state.display().render_text());
    text
}
