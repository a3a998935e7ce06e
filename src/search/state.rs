use bit_set::BitSet;

use crate::color::{Color, Graph, VertexId};


/**
Assignment state of a coloring search.

 - `colors[u]`: color currently assigned to vertex u (if any)
 - `domains[u]`: colors still legal for u. Forward checking shrinks the
   domains of the uncolored neighbors when a vertex is colored, and the
   undo trail restores them exactly when that vertex is uncolored.

The state is created for one solve and dropped afterwards.
*/
#[derive(Debug, Clone)]
pub struct AssignmentState {
    /// size of the palette
    n_colors: usize,
    /// colors[u]: color assigned to vertex u
    colors: Vec<Option<Color>>,
    /// domains[u]: legal colors of vertex u
    domains: Vec<BitSet>,
    /// set of uncolored vertices
    uncolored: BitSet,
    /// trail[i]: vertices pruned by the i-th propagation still in effect
    trail: Vec<Vec<VertexId>>,
}

impl AssignmentState {
    /** creates a state where no vertex is colored and every domain is full.

    The palette is capped to `nb_vertices`: a coloring never needs more colors
    than vertices, and any coloring can be relabeled into `0..nb_vertices`.
    */
    pub fn new(nb_vertices: usize, n_colors: usize) -> Self {
        let n_colors = n_colors.min(nb_vertices);
        let full: BitSet = (0..n_colors).collect();
        Self {
            n_colors,
            colors: vec![None; nb_vertices],
            domains: vec![full; nb_vertices],
            uncolored: (0..nb_vertices).collect(),
            trail: Vec::with_capacity(nb_vertices),
        }
    }

    /// size of the palette
    pub fn n_colors(&self) -> usize { self.n_colors }

    /// color of vertex u
    pub fn color(&self, u: VertexId) -> Option<Color> { self.colors[u] }

    /// legal colors of vertex u
    pub fn domain(&self, u: VertexId) -> &BitSet { &self.domains[u] }

    /// all the domains
    pub fn domains(&self) -> &[BitSet] { &self.domains }

    /// mutable access to the domains (preprocessing only, before any vertex is colored)
    pub fn domains_mut(&mut self) -> &mut [BitSet] {
        debug_assert!(self.trail.is_empty());
        &mut self.domains
    }

    /// set of uncolored vertices
    pub fn uncolored(&self) -> &BitSet { &self.uncolored }

    /// true iff every vertex is colored
    pub fn is_complete(&self) -> bool { self.uncolored.is_empty() }

    /// true iff no colored neighbor of u uses c
    pub fn is_safe(&self, inst: &Graph, u: VertexId, c: Color) -> bool {
        inst.adj(u).iter().all(|v| self.colors[*v] != Some(c))
    }

    /// colors vertex u with c
    pub fn assign(&mut self, u: VertexId, c: Color) {
        debug_assert!(self.colors[u].is_none());
        self.colors[u] = Some(c);
        self.uncolored.remove(u);
    }

    /// uncolors vertex u
    pub fn unassign(&mut self, u: VertexId) {
        debug_assert!(self.colors[u].is_some());
        self.colors[u] = None;
        self.uncolored.insert(u);
    }

    /**
    forward checking: removes c from the domain of every uncolored neighbor of u.
    Records the vertices that actually lost c so `undo_propagation` can put it back.
    Returns the number of removed values.
    */
    pub fn propagate(&mut self, inst: &Graph, u: VertexId, c: Color) -> usize {
        let mut pruned = Vec::new();
        for v in inst.adj(u) {
            if self.colors[*v].is_none() && self.domains[*v].remove(c) {
                pruned.push(*v);
            }
        }
        let nb_pruned = pruned.len();
        self.trail.push(pruned);
        nb_pruned
    }

    /// restores c in the domains pruned by the last propagation
    pub fn undo_propagation(&mut self, c: Color) {
        if let Some(pruned) = self.trail.pop() {
            for v in pruned {
                self.domains[v].insert(c);
            }
        }
    }

    /// colors of every vertex, None if some vertex is uncolored
    pub fn complete_colors(&self) -> Option<Vec<Color>> {
        self.colors.iter().copied().collect()
    }

    /**
    true iff no uncolored vertex keeps in its domain the color of one of its
    colored neighbors.
    */
    pub fn domains_consistent(&self, inst: &Graph) -> bool {
        self.uncolored.iter().all(|u| {
            inst.adj(u).iter().all(|v| match self.colors[*v] {
                None => true,
                Some(c) => !self.domains[u].contains(c),
            })
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph {
        Graph::from_edges(&[(0, 1), (0, 2), (0, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = AssignmentState::new(4, 3);
        assert_eq!(state.uncolored().len(), 4);
        assert!(state.domains().iter().all(|d| d.len() == 3));
        assert!(!state.is_complete());
        assert_eq!(state.complete_colors(), None);
    }

    #[test]
    fn test_palette_capped_by_vertices() {
        let state = AssignmentState::new(6, 3_000_000);
        assert_eq!(state.n_colors(), 6);
        assert!(state.domains().iter().all(|d| d.len() == 6));
        assert_eq!(AssignmentState::new(6, 2).n_colors(), 2);
        assert_eq!(AssignmentState::new(0, 5).n_colors(), 0);
    }

    #[test]
    fn test_is_safe() {
        let inst = star();
        let mut state = AssignmentState::new(4, 3);
        state.assign(0, 1);
        assert!(!state.is_safe(&inst, 2, 1));
        assert!(state.is_safe(&inst, 2, 0));
        state.unassign(0);
        assert!(state.is_safe(&inst, 2, 1));
    }

    #[test]
    fn test_propagation_is_reversible() {
        let inst = star();
        let mut state = AssignmentState::new(4, 3);
        state.assign(2, 0);
        state.propagate(&inst, 2, 0);
        let before = state.domains().to_vec();
        state.assign(0, 0);
        // vertex 3 already lost color 0 because of vertex 2: only vertex 1 is pruned
        assert_eq!(state.propagate(&inst, 0, 0), 1);
        assert!(!state.domain(1).contains(0));
        assert!(state.domains_consistent(&inst));
        state.undo_propagation(0);
        state.unassign(0);
        assert_eq!(state.domains(), before.as_slice());
        assert!(!state.domain(3).contains(0));
    }

    #[test]
    fn test_domains_consistent() {
        let inst = star();
        let mut state = AssignmentState::new(4, 3);
        state.assign(0, 2);
        assert!(!state.domains_consistent(&inst));
        state.propagate(&inst, 0, 2);
        assert!(state.domains_consistent(&inst));
    }

    #[test]
    fn test_complete_colors() {
        let mut state = AssignmentState::new(2, 2);
        state.assign(0, 1);
        state.assign(1, 0);
        assert!(state.is_complete());
        assert_eq!(state.complete_colors(), Some(vec![1, 0]));
    }
}
