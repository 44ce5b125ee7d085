// src/config/validate.rs

use crate::config::model::{ConfigFile, LayoutSection, PolicySection, RawConfigFile};
use crate::errors::{FlowstateError, Result};
use crate::types::Relation;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::FlowstateError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.policy, raw.layout))
    }
}

/// Run all semantic checks on a raw config.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_raw_config(cfg)
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_policy(&cfg.policy)?;
    validate_layout(&cfg.layout)?;
    Ok(())
}

fn validate_policy(policy: &PolicySection) -> Result<()> {
    for relation in Relation::ALL {
        let hard = policy.hard.contains(&relation);
        let soft = policy.soft.contains(&relation);
        match (hard, soft) {
            (true, true) => {
                return Err(FlowstateError::ConfigError(format!(
                    "[policy] relation '{relation}' is listed as both hard and soft"
                )));
            }
            (false, false) => {
                return Err(FlowstateError::ConfigError(format!(
                    "[policy] relation '{relation}' must be listed in either `hard` or `soft`"
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

fn validate_layout(layout: &LayoutSection) -> Result<()> {
    if layout.columns == 0 {
        return Err(FlowstateError::ConfigError(
            "[layout].columns must be >= 1 (got 0)".to_string(),
        ));
    }

    if layout.max_sweeps == 0 {
        return Err(FlowstateError::ConfigError(
            "[layout].max_sweeps must be >= 1 (got 0)".to_string(),
        ));
    }

    let spacings = [
        ("cell_width", layout.cell_width),
        ("cell_height", layout.cell_height),
        ("rank_gap", layout.rank_gap),
        ("node_gap", layout.node_gap),
        ("node_width", layout.node_width),
        ("node_height", layout.node_height),
    ];
    for (name, value) in spacings {
        if !value.is_finite() || value <= 0.0 {
            return Err(FlowstateError::ConfigError(format!(
                "[layout].{name} must be a positive number (got {value})"
            )));
        }
    }

    Ok(())
}
