use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaffleError {
    #[error("{field} must be a whole number, got \"{value}\"")]
    InvalidRanking { field: &'static str, value: String },

    #[error("{field} must be a number, got \"{value}\"")]
    InvalidVolume { field: &'static str, value: String },

    #[error("{field} must be at least 1")]
    RankingBelowOne { field: &'static str },

    #[error("{field} must not be negative")]
    NegativeVolume { field: &'static str },

    #[error("invalid wheel configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid form: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
