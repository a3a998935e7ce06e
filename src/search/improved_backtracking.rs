use tracing::info;

use crate::color::{Color, Coloring, Graph, VertexId};
use crate::search::{Colorer, SearchStats};
use crate::search::backtracking::{BacktrackingSearch, Branching};
use crate::search::heuristics::{order_values, select_unassigned_vertex};
use crate::search::state::AssignmentState;


/// MRV vertex selection, LCV color ordering, forward checking
#[derive(Debug)]
pub(crate) struct MrvLcv;

impl Branching for MrvLcv {
    fn forward_checking(&self) -> bool { true }

    fn next_decisions(&self, inst: &Graph, state: &AssignmentState) -> Option<(VertexId, Vec<Color>)> {
        let v = select_unassigned_vertex(inst, state)?;
        if state.domain(v).is_empty() { // dead end, nothing to branch on
            return Some((v, Vec::new()));
        }
        Some((v, order_values(inst, state, v)))
    }
}

/// runs the MRV/LCV forward-checking search from a given state
pub(crate) fn forward_checking_search(inst: &Graph, state: AssignmentState) -> (Option<Coloring>, SearchStats) {
    let (colors, stats) = BacktrackingSearch::new(inst, state, MrvLcv).run();
    (colors.map(|colors| inst.to_coloring(&colors)), stats)
}

/**
Backtracking with domains, heuristics and forward checking.
    1. choose the uncolored vertex with the fewest legal colors (break ties by the largest degree)
    2. try its legal colors, least constraining first
    3. after coloring a vertex, remove its color from its uncolored neighbors' domains
    4. on backtrack, give the color back to exactly those neighbors
*/
#[derive(Debug)]
pub struct ImprovedBacktrackingColorer {
    /// private copy of the instance
    graph: Graph,
    /// number of colors
    n_colors: usize,
    /// statistics of the last search
    stats: Option<SearchStats>,
}

impl ImprovedBacktrackingColorer {
    /** creates the colorer (copies the graph) */
    pub fn new(graph: &Graph, n_colors: usize) -> Self {
        Self { graph: graph.clone(), n_colors, stats: None }
    }
}

impl Colorer for ImprovedBacktrackingColorer {
    fn color(&mut self) -> Option<Coloring> {
        let state = AssignmentState::new(self.graph.nb_vertices(), self.n_colors);
        let (res, stats) = forward_checking_search(&self.graph, state);
        info!(
            solver = "improved",
            found = res.is_some(),
            nb_expanded = stats.nb_expanded,
            nb_backtracks = stats.nb_backtracks,
            nb_pruned = stats.nb_pruned,
            "search finished"
        );
        self.stats = Some(stats);
        res
    }

    fn stats(&self) -> Option<&SearchStats> { self.stats.as_ref() }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::check;

    #[test]
    fn test_path() {
        let inst = Graph::from_edges(&[(0, 1), (1, 2), (2, 3)]).unwrap();
        let coloring = ImprovedBacktrackingColorer::new(&inst, 2).color().unwrap();
        assert_eq!(check(&inst, &coloring), Ok(true));
        assert_eq!(coloring.len(), 4);
    }

    #[test]
    fn test_wheel() {
        // odd wheel: hub + 5-cycle needs 4 colors
        let edges = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)];
        let inst = Graph::from_edges(&edges).unwrap();
        assert!(ImprovedBacktrackingColorer::new(&inst, 3).color().is_none());
        let coloring = ImprovedBacktrackingColorer::new(&inst, 4).color().unwrap();
        assert_eq!(check(&inst, &coloring), Ok(true));
    }

    #[test]
    fn test_forward_checking_prunes() {
        let inst = Graph::from_edges(&[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let mut colorer = ImprovedBacktrackingColorer::new(&inst, 3);
        assert!(colorer.color().is_some());
        let stats = colorer.stats().unwrap();
        assert!(stats.nb_pruned > 0);
        // forward checking + MRV color a triangle plus a pendant without backtracking
        assert_eq!(stats.nb_backtracks, 0);
    }

    #[test]
    fn test_zero_colors() {
        let inst = Graph::with_nodes(&[1], &[]).unwrap();
        assert!(ImprovedBacktrackingColorer::new(&inst, 0).color().is_none());
        assert!(ImprovedBacktrackingColorer::new(&Graph::default(), 0).color().is_some());
    }
}
