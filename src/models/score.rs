use serde::{Deserialize, Deserializer};

/// Body of `POST /v1/score`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScoreSubmission {
    pub score: i64,
    pub game_mode: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Int(i64),
    Float(f64),
}

/// Scores arrive as integers or floats depending on the backend; floats are rounded.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScore::deserialize(deserializer)? {
        RawScore::Int(score) => score,
        RawScore::Float(score) => score.round() as i64,
    })
}
