//! MCTS configuration parameters.

use std::time::Duration;

use crate::search::SearchError;
use crate::uct::DEFAULT_EXPLORATION;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of iterations to run per search.
    pub num_simulations: u32,

    /// Maximum number of children created by one expansion.
    /// A node is expanded once; successors not sampled then are never added.
    pub max_children: usize,

    /// Exploration constant C of the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,

    /// Wall-clock budget per search, checked between iterations.
    pub time_limit: Option<Duration>,

    /// Abort a rollout after this many plies (0 = play to the end).
    pub max_rollout_plies: u32,

    /// Log progress every N iterations (0 = never).
    pub log_interval: u32,

    /// Keep the subtree of the played move when the session advances.
    pub reuse_tree: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self::from(&engine_config::CentralConfig::default())
    }
}

impl From<&engine_config::CentralConfig> for MctsConfig {
    fn from(config: &engine_config::CentralConfig) -> Self {
        let mcts = &config.mcts;
        Self {
            num_simulations: mcts.num_simulations,
            max_children: mcts.max_children,
            exploration: mcts.exploration,
            time_limit: (mcts.time_limit_ms > 0).then(|| Duration::from_millis(mcts.time_limit_ms)),
            max_rollout_plies: config.rollout.max_plies,
            log_interval: mcts.log_interval,
            reuse_tree: mcts.reuse_tree,
        }
    }
}

impl MctsConfig {
    /// Load from config.toml and environment overrides.
    pub fn load() -> Self {
        Self::from(&engine_config::load_config())
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_simulations: 200,
            max_children: 100,
            exploration: DEFAULT_EXPLORATION,
            time_limit: None,
            max_rollout_plies: 0,
            log_interval: 0,
            reuse_tree: false,
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Builder pattern: set maximum children per expansion.
    pub fn with_max_children(mut self, k: usize) -> Self {
        self.max_children = k;
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Builder pattern: set rollout ply limit.
    pub fn with_max_rollout_plies(mut self, plies: u32) -> Self {
        self.max_rollout_plies = plies;
        self
    }

    /// Builder pattern: set progress log interval.
    pub fn with_log_interval(mut self, interval: u32) -> Self {
        self.log_interval = interval;
        self
    }

    /// Builder pattern: enable or disable tree reuse.
    pub fn with_tree_reuse(mut self, reuse: bool) -> Self {
        self.reuse_tree = reuse;
        self
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_children == 0 {
            return Err(SearchError::IllegalOperation(
                "max_children must be at least 1".to_string(),
            ));
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::IllegalOperation(format!(
                "exploration must be finite and non-negative, got {}",
                self.exploration
            )));
        }
        Ok(())
    }
}
