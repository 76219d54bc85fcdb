//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_num_sims() -> u32 {
    defaults::num_simulations()
}
fn d_max_children() -> usize {
    defaults::max_children()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_time_limit_ms() -> u64 {
    defaults::time_limit_ms()
}
fn d_log_interval() -> u32 {
    defaults::log_interval()
}
fn d_reuse_tree() -> bool {
    defaults::reuse_tree()
}
fn d_max_plies() -> u32 {
    defaults::max_plies()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub rollout: RolloutConfig,
}

/// MCTS (Monte Carlo Tree Search) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_num_sims")]
    pub num_simulations: u32,
    /// Maximum number of children created by a single expansion
    #[serde(default = "d_max_children")]
    pub max_children: usize,
    /// UCT exploration constant C
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    /// Wall-clock budget per search in milliseconds (0 = unlimited)
    #[serde(default = "d_time_limit_ms")]
    pub time_limit_ms: u64,
    /// Log progress every N iterations (0 = never)
    #[serde(default = "d_log_interval")]
    pub log_interval: u32,
    /// Keep the subtree of the played move between real moves
    #[serde(default = "d_reuse_tree")]
    pub reuse_tree: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: defaults::num_simulations(),
            max_children: defaults::max_children(),
            exploration: defaults::exploration(),
            time_limit_ms: defaults::time_limit_ms(),
            log_interval: defaults::log_interval(),
            reuse_tree: defaults::reuse_tree(),
        }
    }
}

/// Random playout configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RolloutConfig {
    /// Abort a rollout after this many plies (0 = play to the end)
    #[serde(default = "d_max_plies")]
    pub max_plies: u32,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            max_plies: defaults::max_plies(),
        }
    }
}
