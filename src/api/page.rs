use std::fmt::Write;

use axum::response::Html;

use crate::views::{escape_html, leaderboard::LeaderboardState, rank_search::RankSearch};

pub const RANK_ACTION: &str = "/rank";

pub fn render(
    leaderboard: &LeaderboardState,
    search: &RankSearch,
    refresh_secs: Option<u64>,
) -> Html<String> {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(secs) = refresh_secs {
        let _ = writeln!(out, "<meta http-equiv=\"refresh\" content=\"{secs}\">");
    }
    out.push_str(concat!(
        "<title>Top Scores Leaderboard</title>\n",
        "<style>body { max-width: 600px; margin: 40px auto; font-family: sans-serif; } ",
        "table { width: 100%; border-collapse: collapse; } ",
        "th { border-bottom: 1px solid #ccc; } td { text-align: center; } ",
        ".error { color: red; margin-top: 8px; } .result { margin-top: 12px; }</style>\n",
        "</head>\n<body>\n<h2>Top Scores Leaderboard</h2>\n",
    ));

    out.push_str(&leaderboard.display().render_html());
    if let Some(updated_at) = leaderboard.updated_at {
        let _ = write!(
            out,
            "\n<p><small>Updated {}</small></p>",
            escape_html(&updated_at.format("%H:%M:%S UTC").to_string())
        );
    }

    out.push_str("\n<hr>\n<h3>Search User Rank</h3>\n");
    out.push_str(&search.render_html(RANK_ACTION));
    out.push_str("\n</body>\n</html>\n");

    Html(out)
}
