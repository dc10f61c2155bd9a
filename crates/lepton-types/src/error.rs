// ─────────────────────────────────────────────────────────────────────
// Lepton Transport — Lepton Errors
// © 2026 Lepton Transport contributors.
// License: GNU AGPL v3 or later
// ─────────────────────────────────────────────────────────────────────
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeptonError {
    #[error("Input file does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Physics engine {operation} failed with status {code}")]
    Engine { operation: &'static str, code: i32 },

    #[error("Physics engine {operation} reported success but returned no handle")]
    EmptyHandle { operation: &'static str },

    #[error("Model owns no physics handle")]
    NoPhysics,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LeptonResult<T> = Result<T, LeptonError>;
