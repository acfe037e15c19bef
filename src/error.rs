use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotionError {
    #[error("Unknown easing: {0}")]
    UnknownEase(String),

    #[error("Invalid trigger anchor: {0}")]
    InvalidAnchor(String),

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Invalid motion config: {0}")]
    Config(#[from] serde_json::Error),
}
