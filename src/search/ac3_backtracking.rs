use tracing::info;

use crate::color::{Coloring, Graph};
use crate::search::{Colorer, SearchStats};
use crate::search::arc_consistency::arc_consistency;
use crate::search::improved_backtracking::forward_checking_search;
use crate::search::state::AssignmentState;


/**
AC-3 preprocessing followed by the MRV/LCV forward-checking backtracking.
If arc consistency empties a domain, no coloring exists and the search is
not started. Otherwise the search starts from the pruned domains.
*/
#[derive(Debug)]
pub struct Ac3BacktrackingColorer {
    /// private copy of the instance
    graph: Graph,
    /// number of colors
    n_colors: usize,
    /// statistics of the last search
    stats: Option<SearchStats>,
}

impl Ac3BacktrackingColorer {
    /** creates the colorer (copies the graph) */
    pub fn new(graph: &Graph, n_colors: usize) -> Self {
        Self { graph: graph.clone(), n_colors, stats: None }
    }
}

impl Colorer for Ac3BacktrackingColorer {
    fn color(&mut self) -> Option<Coloring> {
        let mut state = AssignmentState::new(self.graph.nb_vertices(), self.n_colors);
        let nb_removed = match arc_consistency(&self.graph, state.domains_mut()) {
            Ok(nb_removed) => nb_removed,
            Err(wipeout) => {
                info!(solver = "ac3", vertex = self.graph.label(wipeout.0), "unsatisfiable after arc consistency");
                self.stats = Some(SearchStats::default());
                return None;
            }
        };
        let (res, stats) = forward_checking_search(&self.graph, state);
        info!(
            solver = "ac3",
            found = res.is_some(),
            nb_removed,
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
