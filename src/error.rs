use thiserror::Error;

/// Failures talking to the key-value backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("local storage is not available in this context")]
    Unavailable,
    #[error("could not read key `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("could not write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("could not serialize record: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialize(e.to_string())
    }
}

/// Operator input that was refused before reaching the reducer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("challenge name is empty")]
    EmptyName,
    #[error("`{0}` is not a whole number of points")]
    InvalidPoints(String),
    #[error("`{0}` is not a valid multiplier")]
    InvalidMultiplier(String),
    #[error("no challenge at position {0}")]
    UnknownChallenge(usize),
}
