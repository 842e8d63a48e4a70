pub mod leaderboard;
pub mod rank;
pub mod score;
pub mod user;
