// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Graph shape (dangling edges, cycles) never produces an error. Errors are
//! reserved for configuration problems, unknown layout modes, unknown node
//! ids requested by a caller, and persistence failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowstateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Unknown layout mode: {0} (expected grid, lr or tb)")]
    UnknownLayoutMode(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, FlowstateError>;
