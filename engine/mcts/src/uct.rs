//! UCT (Upper Confidence bound applied to Trees) scoring.
//!
//! `UCT(i) = w_i / n_i + C * sqrt(ln(N) / n_i)` where `w_i`/`n_i` are the
//! child's wins and simulations and `N` is the parent's simulations.

/// Default exploration constant, sqrt(2).
pub const DEFAULT_EXPLORATION: f64 = std::f64::consts::SQRT_2;

/// Score a child for selection.
///
/// Unvisited children score `+inf` so every sibling is tried once before the
/// comparison kicks in. A parent with no simulations contributes no
/// exploration bonus instead of taking `ln(0)`.
#[inline]
pub fn uct_score(wins: u32, simulations: u32, parent_simulations: u32, exploration: f64) -> f64 {
    if simulations == 0 {
        return f64::INFINITY;
    }

    let n = simulations as f64;
    let exploitation = wins as f64 / n;
    let bonus = if parent_simulations == 0 {
        0.0
    } else {
        exploration * ((parent_simulations as f64).ln() / n).sqrt()
    };

    exploitation + bonus
}
