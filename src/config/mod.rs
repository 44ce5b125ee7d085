// src/config/mod.rs

//! Configuration loading and validation for flowstate.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate relation policy and layout spacing (`validate.rs`).
//! - Turn `[policy]` into lookup tables (`policy.rs`).

pub mod loader;
pub mod model;
pub mod policy;
pub mod validate;

pub use loader::{
    CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, default_config_path, load_and_validate, load_from_path,
    load_or_default, parse_config, resolve_config_path,
};
pub use model::{ConfigFile, LayoutSection, PolicySection, RawConfigFile};
pub use policy::RelationPolicy;
pub use validate::validate_config;
