//! Coloring strategies: constraint-satisfaction backtracking searches and a greedy baseline.

use crate::color::Coloring;

/// assignment state (colors, domains, undo trail)
pub mod state;

/// variable (MRV) and value (LCV) ordering heuristics
pub mod heuristics;

/// explicit-stack backtracking engine
pub mod backtracking;

/// AC-3 arc consistency
pub mod arc_consistency;

/// plain backtracking
pub mod naive_backtracking;

/// backtracking with MRV / LCV and forward checking
pub mod improved_backtracking;

/// AC-3 preprocessing followed by the improved backtracking
pub mod ac3_backtracking;

/// greedy baseline (may exceed the color budget)
pub mod greedy;

pub use backtracking::SearchStats;

/**
A coloring strategy, bound to a graph and a number of colors at construction.
*/
pub trait Colorer {
    /** returns a coloring of every node using colors in 0..k, or None if the
    strategy proves that none exists. */
    fn color(&mut self) -> Option<Coloring>;

    /// statistics of the last call to `color` (searching strategies only)
    fn stats(&self) -> Option<&SearchStats> { None }
}
