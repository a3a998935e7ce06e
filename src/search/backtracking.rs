use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Color, Graph, VertexId};
use crate::search::state::AssignmentState;


/** represents a decision (assigning color c to vertex v) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// vertex
    pub v: VertexId,
    /// color
    pub c: Color,
}

/// either a decision to apply, either a decision to undo
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision), // decision to commit
    Restore(Decision) // decision taken
}

/** counters collected during a search */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// number of expanded search nodes (branching points)
    pub nb_expanded: usize,
    /// number of decisions applied
    pub nb_commits: usize,
    /// number of decisions undone
    pub nb_backtracks: usize,
    /// number of domain values removed by forward checking
    pub nb_pruned: usize,
}

/**
Branching strategy of a backtracking search: which vertex to color next,
and in what order to try its colors.
*/
pub trait Branching {
    /// if true, committing a decision shrinks the domains of the uncolored neighbors
    fn forward_checking(&self) -> bool;

    /** returns the next vertex and the colors to try (in preference order).
    returns None when every vertex is colored. An empty color list means a dead end.
    */
    fn next_decisions(&self, inst: &Graph, state: &AssignmentState) -> Option<(VertexId, Vec<Color>)>;
}

/**
Depth-first backtracking search on an explicit stack.

The stack stores the decisions to be taken. Expanding a vertex pushes, for
each candidate color (least preferred first), a `Restore` then a `Commit`.
Popping a `Commit` applies it and expands the next vertex; popping a
`Restore` undoes it before the next sibling is committed. When all vertices
are assigned, the search stops with a solution. If the stack empties, no
coloring exists.
*/
#[derive(Debug)]
pub struct BacktrackingSearch<'a, B: Branching> {
    /// instance
    inst: &'a Graph,
    /// current assignment
    state: AssignmentState,
    /// branching strategy
    branching: B,
    /// decision history
    decisions: Vec<BacktrackEvent>,
    /// statistics
    stats: SearchStats,
}

impl<'a, B: Branching> BacktrackingSearch<'a, B> {
    /** creates a search starting from the given state (usually nothing colored) */
    pub fn new(inst: &'a Graph, state: AssignmentState, branching: B) -> Self {
        let n = inst.nb_vertices();
        Self {
            inst,
            state,
            branching,
            decisions: Vec::with_capacity(2 * n),
            stats: SearchStats::default(),
        }
    }

    /// applies a decision to the search state
    fn commit(&mut self, decision: Decision) {
        self.state.assign(decision.v, decision.c);
        if self.branching.forward_checking() {
            self.stats.nb_pruned += self.state.propagate(self.inst, decision.v, decision.c);
            debug_assert!(self.state.domains_consistent(self.inst));
        }
        self.stats.nb_commits += 1;
    }

    /// restores the search state from a decision
    fn restore(&mut self, decision: Decision) {
        if self.branching.forward_checking() {
            self.state.undo_propagation(decision.c);
        }
        self.state.unassign(decision.v);
        self.stats.nb_backtracks += 1;
    }

    /// pushes the children of the current state. returns false if the state is complete
    fn push_next_decisions(&mut self) -> bool {
        match self.branching.next_decisions(self.inst, &self.state) {
            None => false,
            Some((v, colors)) => {
                self.stats.nb_expanded += 1;
                for c in colors.iter().rev() {
                    let decision = Decision { v, c: *c };
                    self.decisions.push(BacktrackEvent::Restore(decision)); // prepare to backtrack
                    self.decisions.push(BacktrackEvent::Commit(decision)); // decision to apply
                }
                true
            }
        }
    }

    /**
    runs the search until a complete coloring is found or every branch failed.
    returns the colors of each vertex (if any) and the statistics.
    */
    pub fn run(mut self) -> (Option<Vec<Color>>, SearchStats) {
        let colors = self.explore();
        (colors, self.stats)
    }

    /// main loop. On exhaustion, every decision has been undone
    fn explore(&mut self) -> Option<Vec<Color>> {
        // populate decisions with the root node children
        if !self.push_next_decisions() {
            return self.state.complete_colors();
        }
        while let Some(event) = self.decisions.pop() {
            match event {
                BacktrackEvent::Restore(decision) => { // restore the state
                    self.restore(decision);
                },
                BacktrackEvent::Commit(decision) => { // apply the decision and generate children
                    self.commit(decision);
                    if !self.push_next_decisions() {
                        debug!(nb_expanded = self.stats.nb_expanded, "feasible coloring found");
                        return self.state.complete_colors();
                    }
                }
            }
        }
        debug!(nb_expanded = self.stats.nb_expanded, "search space exhausted");
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::arc_consistency::arc_consistency;
    use crate::search::improved_backtracking::MrvLcv;

    /// colors vertices in index order, every color that is safe
    struct InOrder;

    impl Branching for InOrder {
        fn forward_checking(&self) -> bool { false }

        fn next_decisions(&self, inst: &Graph, state: &AssignmentState) -> Option<(VertexId, Vec<Color>)> {
            let v = state.uncolored().iter().next()?;
            Some((v, (0..state.n_colors()).filter(|c| state.is_safe(inst, v, *c)).collect()))
        }
    }

    #[test]
    fn test_first_solution_follows_preference_order() {
        let inst = Graph::from_edges(&[(0, 1), (1, 2)]).unwrap();
        let search = BacktrackingSearch::new(&inst, AssignmentState::new(3, 2), InOrder);
        let (colors, stats) = search.run();
        assert_eq!(colors, Some(vec![0, 1, 0]));
        assert_eq!(stats.nb_commits, 3);
        assert_eq!(stats.nb_backtracks, 0);
    }

    #[test]
    fn test_exhaustion() {
        let inst = Graph::from_edges(&[(0, 1), (1, 2), (2, 0)]).unwrap();
        let search = BacktrackingSearch::new(&inst, AssignmentState::new(3, 2), InOrder);
        let (colors, stats) = search.run();
        assert_eq!(colors, None);
        // every commit has been undone
        assert_eq!(stats.nb_commits, stats.nb_backtracks);
    }

    fn values(state: &AssignmentState) -> Vec<Vec<Color>> {
        state.domains().iter().map(|d| d.iter().collect()).collect()
    }

    /// hub 0 and odd rim 1..5: needs 4 colors
    fn odd_wheel() -> Graph {
        Graph::from_edges(&[
            (1, 2), (2, 3), (3, 4), (4, 5), (5, 1),
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
        ]).unwrap()
    }

    #[test]
    fn test_failed_search_restores_pruned_domains() {
        let inst = odd_wheel();
        let mut state = AssignmentState::new(inst.nb_vertices(), 3);
        let rim = inst.vertex(3).unwrap();
        state.domains_mut()[rim].remove(2);
        let before = values(&state);
        let mut search = BacktrackingSearch::new(&inst, state, MrvLcv);
        assert_eq!(search.explore(), None);
        assert!(search.stats.nb_pruned > 0);
        assert_eq!(search.stats.nb_commits, search.stats.nb_backtracks);
        assert_eq!(values(&search.state), before);
        assert_eq!(search.state.uncolored().len(), inst.nb_vertices());
    }

    #[test]
    fn test_failed_search_restores_arc_consistent_domains() {
        // hub fixed to color 0: AC-3 removes 0 from the rim, which is an odd cycle on {1,2}
        let inst = odd_wheel();
        let mut state = AssignmentState::new(inst.nb_vertices(), 3);
        let hub = inst.vertex(0).unwrap();
        state.domains_mut()[hub] = [0].into_iter().collect();
        assert_eq!(arc_consistency(&inst, state.domains_mut()), Ok(5));
        let before = values(&state);
        let mut search = BacktrackingSearch::new(&inst, state, MrvLcv);
        assert_eq!(search.explore(), None);
        assert_eq!(search.stats.nb_commits, search.stats.nb_backtracks);
        assert_eq!(values(&search.state), before);
        assert!(search.state.domains_consistent(&inst));
    }

    #[test]
    fn test_empty_graph() {
        let inst = Graph::default();
        let search = BacktrackingSearch::new(&inst, AssignmentState::new(0, 3), InOrder);
        let (colors, stats) = search.run();
        assert_eq!(colors, Some(vec![]));
        assert_eq!(stats, SearchStats::default());
    }
}
