use tracing::info;

use crate::color::{Color, Coloring, Graph, VertexId};
use crate::search::{Colorer, SearchStats};
use crate::search::backtracking::{BacktrackingSearch, Branching};
use crate::search::state::AssignmentState;


/// colors the vertices in their first-seen order, trying colors in increasing order
#[derive(Debug)]
struct FixedOrder;

impl Branching for FixedOrder {
    fn forward_checking(&self) -> bool { false }

    fn next_decisions(&self, inst: &Graph, state: &AssignmentState) -> Option<(VertexId, Vec<Color>)> {
        let v = state.uncolored().iter().next()?;
        let colors = (0..state.n_colors())
            .filter(|c| state.is_safe(inst, v, *c))
            .collect();
        Some((v, colors))
    }
}

/**
Exhaustive backtracking without heuristics nor propagation.
    1. take the first uncolored vertex (in the order the nodes first appeared)
    2. try each color 0..k not used by a colored neighbor
    3. backtrack when a vertex has no color left
*/
#[derive(Debug)]
pub struct NaiveBacktrackingColorer {
    /// private copy of the instance
    graph: Graph,
    /// number of colors
    n_colors: usize,
    /// statistics of the last search
    stats: Option<SearchStats>,
}

impl NaiveBacktrackingColorer {
    /** creates the colorer (copies the graph) */
    pub fn new(graph: &Graph, n_colors: usize) -> Self {
        Self { graph: graph.clone(), n_colors, stats: None }
    }
}

impl Colorer for NaiveBacktrackingColorer {
    fn color(&mut self) -> Option<Coloring> {
        let state = AssignmentState::new(self.graph.nb_vertices(), self.n_colors);
        let (colors, stats) = BacktrackingSearch::new(&self.graph, state, FixedOrder).run();
        info!(
            solver = "naive",
            found = colors.is_some(),
            nb_expanded = stats.nb_expanded,
            nb_backtracks = stats.nb_backtracks,
            "search finished"
        );
        self.stats = Some(stats);
        colors.map(|colors| self.graph.to_coloring(&colors))
    }

    fn stats(&self) -> Option<&SearchStats> { self.stats.as_ref() }
}
