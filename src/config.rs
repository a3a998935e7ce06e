//! Per-solve configuration: which strategy to run and how to post-check it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Graph;
use crate::search::Colorer;
use crate::search::ac3_backtracking::Ac3BacktrackingColorer;
use crate::search::greedy::{GreedyColorer, GreedyStrategy};
use crate::search::improved_backtracking::ImprovedBacktrackingColorer;
use crate::search::naive_backtracking::NaiveBacktrackingColorer;


/** coloring strategy */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// plain backtracking
    Naive,
    /// MRV / LCV backtracking with forward checking
    Improved,
    /// AC-3 then improved backtracking
    Ac3,
    /// largest-first greedy (baseline)
    Greedy,
    /// DSATUR greedy (baseline)
    Dsatur,
}

impl SolverKind {
    /// every strategy, in increasing order of sophistication
    pub const ALL: [SolverKind; 5] = [
        SolverKind::Naive, SolverKind::Improved, SolverKind::Ac3, SolverKind::Greedy, SolverKind::Dsatur,
    ];

    /// name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Naive => "naive",
            SolverKind::Improved => "improved",
            SolverKind::Ac3 => "ac3",
            SolverKind::Greedy => "greedy",
            SolverKind::Dsatur => "dsatur",
        }
    }

    /// true for the complete searches (a `None` answer proves there is no coloring)
    pub fn is_exact(&self) -> bool {
        matches!(self, SolverKind::Naive | SolverKind::Improved | SolverKind::Ac3)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL.iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown solver '{}' (expected one of naive, improved, ac3, greedy, dsatur)", s))
    }
}

/** configuration of one solve */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// strategy
    pub solver: SolverKind,
    /// size of the palette
    pub n_colors: usize,
    /// if true, the result is validated against the graph after the solve
    pub check_solution: bool,
}

impl SearchConfig {
    /// creates a configuration that checks the solutions
    pub fn new(solver: SolverKind, n_colors: usize) -> Self {
        Self { solver, n_colors, check_solution: true }
    }

    /** builds the colorer described by the configuration (the graph is copied) */
    pub fn build_colorer(&self, graph: &Graph) -> Box<dyn Colorer> {
        match self.solver {
            SolverKind::Naive => Box::new(NaiveBacktrackingColorer::new(graph, self.n_colors)),
            SolverKind::Improved => Box::new(ImprovedBacktrackingColorer::new(graph, self.n_colors)),
            SolverKind::Ac3 => Box::new(Ac3BacktrackingColorer::new(graph, self.n_colors)),
            SolverKind::Greedy => Box::new(GreedyColorer::new(graph, self.n_colors, GreedyStrategy::LargestFirst)),
            SolverKind::Dsatur => Box::new(GreedyColorer::new(graph, self.n_colors, GreedyStrategy::Dsatur)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solver_kind() {
        assert_eq!("ac3".parse::<SolverKind>(), Ok(SolverKind::Ac3));
        assert_eq!("Naive".parse::<SolverKind>(), Ok(SolverKind::Naive));
        assert!("tabucol".parse::<SolverKind>().is_err());
        for kind in SolverKind::ALL {
            assert_eq!(kind.to_string().parse::<SolverKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_build_colorer() {
        let inst = Graph::from_edges(&[(0, 1), (1, 2), (2, 0)]).unwrap();
        for kind in SolverKind::ALL {
            let mut colorer = SearchConfig::new(kind, 3).build_colorer(&inst);
            assert_eq!(colorer.color().map(|c| c.len()), Some(3));
            assert_eq!(colorer.stats().is_some(), kind.is_exact());
        }
    }

    #[test]
    fn test_serde() {
        let config = SearchConfig::new(SolverKind::Improved, 4);
        let s = serde_json::to_string(&config).unwrap();
        assert_eq!(s, r#"{"solver":"improved","n_colors":4,"check_solution":true}"#);
        assert_eq!(serde_json::from_str::<SearchConfig>(&s).unwrap(), config);
    }
}
