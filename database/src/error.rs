use types::{ParseStatusError, RoundStatus};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Query execution error: {0}")]
    Query(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Seed data error: {0}")]
    SeedData(#[from] std::io::Error),

    #[error("UUID parsing error: {0}")]
    UuidParsing(#[from] uuid::Error),

    #[error("Game not found: {0}")]
    GameNotFound(Uuid),

    #[error("Round not found: {0}")]
    RoundNotFound(Uuid),

    #[error("RoundRole not found: {0}")]
    RoleNotFound(Uuid),

    #[error("At least 4 players are required, got {0}")]
    InsufficientPlayers(usize),

    #[error("No brands available")]
    NoBrandsAvailable,

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] ParseStatusError),

    #[error("Round status cannot move back from {from} to {to}")]
    StatusRegression { from: RoundStatus, to: RoundStatus },
}
