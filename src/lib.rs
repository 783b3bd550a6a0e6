pub mod api;
pub mod config;
pub mod consts;
pub mod judgements;
pub mod preview;
pub mod scorer;
pub mod validate;
// cmd and reports are binary modules (declared in main.rs).

use thiserror::Error;

pub use judgements::{JudgementTally, Tier};
pub use scorer::{compute_score_v2, DifficultyParameters, PassAttempt, ScoreDetails, Scorer};

#[derive(Error, Debug)]
pub enum PassForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Incomplete Input: {0}")]
    IncompleteInput(String),

    #[error("Malformed Judgements: {0}")]
    MalformedJudgements(String),

    #[error("Invalid Speed: {0}")]
    InvalidSpeed(String),

    #[error("Invalid Difficulty: {0}")]
    InvalidDifficulty(String),
}

pub type SfResult<T> = Result<T, PassForgeError>;
