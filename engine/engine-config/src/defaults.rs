//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so that every binary
//! linking this crate agrees on the same values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    mcts: MctsDefaults,
    rollout: RolloutDefaults,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    num_simulations: u32,
    max_children: usize,
    exploration: f64,
    time_limit_ms: u64,
    log_interval: u32,
    reuse_tree: bool,
}

#[derive(Debug, Deserialize)]
struct RolloutDefaults {
    max_plies: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// MCTS
pub fn num_simulations() -> u32 {
    DEFAULTS.mcts.num_simulations
}
pub fn max_children() -> usize {
    DEFAULTS.mcts.max_children
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn time_limit_ms() -> u64 {
    DEFAULTS.mcts.time_limit_ms
}
pub fn log_interval() -> u32 {
    DEFAULTS.mcts.log_interval
}
pub fn reuse_tree() -> bool {
    DEFAULTS.mcts.reuse_tree
}

// Rollout
pub fn max_plies() -> u32 {
    DEFAULTS.rollout.max_plies
}
