use std::{collections::BTreeMap, fmt::Write};

use reqwest::{Response, StatusCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    SignedUp,
    LoggedIn,
    ScoreSubmitted,
    LeaderboardFetched,
    RankFetched,
}

impl Check {
    pub const ALL: [Check; 5] = [
        Check::SignedUp,
        Check::LoggedIn,
        Check::ScoreSubmitted,
        Check::LeaderboardFetched,
        Check::RankFetched,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::SignedUp => "signed up",
            Check::LoggedIn => "logged in",
            Check::ScoreSubmitted => "score submitted",
            Check::LeaderboardFetched => "leaderboard fetched",
            Check::RankFetched => "rank fetched",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Status(StatusCode),
    AnySuccess,
}

impl Expectation {
    /// Transport failures never pass.
    pub fn is_met(self, response: &reqwest::Result<Response>) -> bool {
        match (self, response) {
            (_, Err(_)) => false,
            (Expectation::Status(status), Ok(response)) => response.status() == status,
            (Expectation::AnySuccess, Ok(response)) => response.status().is_success(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckCount {
    pub passed: u64,
    pub failed: u64,
}

/// Per-actor counters, merged once every actor is done.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    checks: BTreeMap<Check, CheckCount>,
    pub iterations: u64,
    pub tokenless_iterations: u64,
}

impl Tally {
    pub fn record(&mut self, check: Check, passed: bool) {
        let count = self.checks.entry(check).or_default();
        if passed {
            count.passed += 1;
        } else {
            count.failed += 1;
        }
    }

    pub fn get(&self, check: Check) -> CheckCount {
        self.checks.get(&check).copied().unwrap_or_default()
    }

    pub fn merge(&mut self, other: &Tally) {
        for (check, count) in &other.checks {
            let total = self.checks.entry(*check).or_default();
            total.passed += count.passed;
            total.failed += count.failed;
        }
        self.iterations += other.iterations;
        self.tokenless_iterations += other.tokenless_iterations;
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for check in Check::ALL {
            let count = self.get(check);
            let total = count.passed + count.failed;
            let rate = if total == 0 {
                0.0
            } else {
                count.passed as f64 * 100.0 / total as f64
            };
            let _ = writeln!(
                out,
                "{} {:<20} {:>6.2}%  passed={} failed={}",
                if count.failed == 0 { "ok  " } else { "FAIL" },
                check.name(),
                rate,
                count.passed,
                count.failed,
            );
        }
        let _ = writeln!(out, "iterations={}", self.iterations);
        let _ = write!(out, "iterations without token={}", self.tokenless_iterations);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_counts() {
        let mut a = Tally::default();
        a.record(Check::SignedUp, true);
        a.record(Check::LoggedIn, false);
        a.iterations = 1;
        a.tokenless_iterations = 1;

        let mut b = Tally::default();
        b.record(Check::SignedUp, true);
        b.record(Check::SignedUp, false);
        b.iterations = 2;

        a.merge(&b);

        assert_eq!(a.get(Check::SignedUp), CheckCount { passed: 2, failed: 1 });
        assert_eq!(a.get(Check::LoggedIn), CheckCount { passed: 0, failed: 1 });
        assert_eq!(a.get(Check::RankFetched), CheckCount::default());
        assert_eq!(a.iterations, 3);
        assert_eq!(a.tokenless_iterations, 1);
    }

    #[test]
    fn summary_marks_failing_checks() {
        let mut tally = Tally::default();
        tally.record(Check::SignedUp, true);
        tally.record(Check::LoggedIn, false);

        let text = tally.render_text();
        assert!(text.contains("ok   signed up"));
        assert!(text.contains("FAIL logged in"));
        assert!(text.ends_with("iterations without token=0"));
    }
}
