// src/config/model.rs

use serde::Deserialize;

use crate::types::{LayoutMode, Relation};

/// Raw configuration as read from a TOML file, before validation.
///
/// ```toml
/// [policy]
/// hard = ["depends_on", "handoff_to"]
/// soft = ["needs_info_from", "approval_by"]
/// blocking_others = ["depends_on"]
///
/// [layout]
/// mode = "lr"
/// columns = 5
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Relation semantics from `[policy]`.
    #[serde(default)]
    pub policy: PolicySection,

    /// Layout spacing and default mode from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,
}

/// Validated configuration. Only obtainable through
/// `ConfigFile::try_from(RawConfigFile)` or [`ConfigFile::default`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub policy: PolicySection,
    pub layout: LayoutSection,
}

impl ConfigFile {
    /// Construct without validation. Callers must have validated already.
    pub(crate) fn new_unchecked(policy: PolicySection, layout: LayoutSection) -> Self {
        Self { policy, layout }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(PolicySection::default(), LayoutSection::default())
    }
}

/// `[policy]` section.
///
/// Which relations make an incomplete precursor a hard block (`BLOCKED`) or a
/// soft one (`WAITING`), and which relations count when deciding whether a
/// node is holding up somebody else.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicySection {
    #[serde(default = "default_hard")]
    pub hard: Vec<Relation>,

    #[serde(default = "default_soft")]
    pub soft: Vec<Relation>,

    #[serde(default = "default_blocking_others")]
    pub blocking_others: Vec<Relation>,
}

fn default_hard() -> Vec<Relation> {
    vec![Relation::DependsOn, Relation::HandoffTo]
}

fn default_soft() -> Vec<Relation> {
    vec![Relation::NeedsInfoFrom, Relation::ApprovalBy]
}

fn default_blocking_others() -> Vec<Relation> {
    vec![Relation::DependsOn]
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            hard: default_hard(),
            soft: default_soft(),
            blocking_others: default_blocking_others(),
        }
    }
}

/// `[layout]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    /// Mode used when the CLI is not given `--mode`.
    #[serde(default)]
    pub mode: LayoutMode,

    /// Grid mode: nodes per row.
    #[serde(default = "default_columns")]
    pub columns: usize,

    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    #[serde(default = "default_cell_height")]
    pub cell_height: f64,

    /// Layered mode: gap between consecutive ranks.
    #[serde(default = "default_rank_gap")]
    pub rank_gap: f64,

    /// Layered mode: gap between neighbours within a rank.
    #[serde(default = "default_node_gap")]
    pub node_gap: f64,

    #[serde(default = "default_node_width")]
    pub node_width: f64,

    #[serde(default = "default_node_height")]
    pub node_height: f64,

    /// Upper bound on barycenter down/up sweep pairs.
    #[serde(default = "default_max_sweeps")]
    pub max_sweeps: usize,
}

fn default_columns() -> usize {
    5
}

fn default_cell_width() -> f64 {
    280.0
}

fn default_cell_height() -> f64 {
    160.0
}

fn default_rank_gap() -> f64 {
    120.0
}

fn default_node_gap() -> f64 {
    40.0
}

fn default_node_width() -> f64 {
    240.0
}

fn default_node_height() -> f64 {
    80.0
}

fn default_max_sweeps() -> usize {
    24
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            columns: default_columns(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            rank_gap: default_rank_gap(),
            node_gap: default_node_gap(),
            node_width: default_node_width(),
            node_height: default_node_height(),
            max_sweeps: default_max_sweeps(),
        }
    }
}
