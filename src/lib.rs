pub mod battle;
pub mod config;
pub mod counting;
pub mod optimizer;
pub mod strategy;
pub mod trainer;
// cmd and reports are binary modules (in main.rs or distinct files),
// they belong to the CLI crate, not the library surface.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CastleForgeError {
    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CfResult<T> = Result<T, CastleForgeError>;
