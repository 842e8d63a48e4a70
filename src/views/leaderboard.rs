use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::escape_html;
use crate::models::leaderboard::LeaderboardEntry;

pub const LOADING_MESSAGE: &str = "Loading leaderboard...";
pub const EMPTY_MESSAGE: &str = "No scores found.";

/// What the poller publishes after every step of a refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
    pub loading: bool,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for LeaderboardState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            error: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Table(Vec<RankedRow<'a>>),
}

/// Ranks are 1-based list positions.
pub fn ranked(entries: &[LeaderboardEntry]) -> Vec<RankedRow<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| RankedRow { rank: i + 1, entry })
        .collect()
}

impl LeaderboardState {
    pub fn display(&self) -> LeaderboardDisplay<'_> {
        if self.loading {
            return LeaderboardDisplay::Loading;
        }
        if let Some(error) = &self.error {
            return LeaderboardDisplay::Error(error);
        }
        if self.entries.is_empty() {
            return LeaderboardDisplay::Empty;
        }
        LeaderboardDisplay::Table(ranked(&self.entries))
    }
}

impl LeaderboardDisplay<'_> {
    pub fn render_text(&self) -> String {
        match self {
            Self::Loading => LOADING_MESSAGE.to_string(),
            Self::Error(error) => format!("error: {error}"),
            Self::Empty => EMPTY_MESSAGE.to_string(),
            Self::Table(rows) => {
                let mut out = format!("{:>4}  {:<24} {:>10}\n", "Rank", "User ID", "Score");
                for row in rows {
                    let _ = writeln!(
                        out,
                        "{:>4}  {:<24} {:>10}",
                        row.rank, row.entry.user_id, row.entry.score
                    );
                }
                out
            }
        }
    }

    pub fn render_html(&self) -> String {
        match self {
            Self::Loading => format!(r#"<div class="loading">{LOADING_MESSAGE}</div>"#),
            Self::Error(error) => format!(r#"<div class="error">{}</div>"#, escape_html(error)),
            Self::Empty => format!("<div>{EMPTY_MESSAGE}</div>"),
            Self::Table(rows) => {
                let mut out = String::from(concat!(
                    "<table>\n",
                    "<thead><tr><th>Rank</th><th>User ID</th><th>Score</th></tr></thead>\n",
                    "<tbody>\n",
                ));
                for row in rows {
                    let _ = writeln!(
                        out,
                        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                        row.rank,
                        escape_html(row.entry.user_id.as_str()),
                        row.entry.score
                    );
                }
                out.push_str("</tbody>\n</table>");
                out
            }
        }
    }
}
