use std::fmt;

use rand::{distributions::Alphanumeric, Rng};

/// Opaque user identifier. The backend sends it either as a JSON string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawUserId", into = "String")]
pub struct UserId(String);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(i64),
    Text(String),
}

impl From<RawUserId> for UserId {
    fn from(raw: RawUserId) -> Self {
        match raw {
            RawUserId::Number(id) => Self(id.to_string()),
            RawUserId::Text(id) => Self(id),
        }
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Throwaway credentials for one load-test iteration. Also the body of signup and login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SyntheticUser {
    pub username: String,
    pub password: String,
}

impl SyntheticUser {
    pub fn generate<R: Rng>(actor: usize, rng: &mut R) -> Self {
        Self {
            username: format!("user_{}_{}", actor, random_suffix(rng, 6)),
            password: format!("pass_{}", random_suffix(rng, 8)),
        }
    }
}

fn random_suffix<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// `token` wins over `access_token`; empty strings count as missing.
    pub fn into_token(self) -> Option<String> {
        self.token
            .filter(|token| !token.is_empty())
            .or(self.access_token.filter(|token| !token.is_empty()))
    }
}
