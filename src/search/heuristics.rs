use std::cmp::Ordering;

use crate::color::{Color, Graph, VertexId};
use crate::search::state::AssignmentState;


/** cost & vertex for the MRV vertex ordering */
#[derive(Debug, Clone, PartialEq, Eq)]
struct VertexOrderingInfo {
    /// Vertex ID
    v: VertexId,
    /// number of remaining values
    nb_values: usize,
    /// degree
    d: usize,
}

impl Ord for VertexOrderingInfo {
    /// "greater" means "branch on it first"
    fn cmp(&self, other: &Self) -> Ordering {
        other.nb_values.cmp(&self.nb_values)
            .then_with(|| self.d.cmp(&other.d))
            .then_with(|| other.v.cmp(&self.v))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for VertexOrderingInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/**
minimum remaining values: selects the uncolored vertex with the smallest domain.
Breaks ties by the largest degree, then by the smallest vertex id.
Returns None if every vertex is colored.
*/
pub fn select_unassigned_vertex(inst: &Graph, state: &AssignmentState) -> Option<VertexId> {
    state.uncolored().iter()
        .map(|v| VertexOrderingInfo {
            v,
            nb_values: state.domain(v).len(),
            d: inst.vertex_degree(v),
        })
        .max()
        .map(|info| info.v)
}

/**
least constraining value: orders the legal colors of u by the number of
uncolored neighbors that would lose them (fewest first, ties by color).
*/
pub fn order_values(inst: &Graph, state: &AssignmentState, u: VertexId) -> Vec<Color> {
    let mut ranked: Vec<(usize, Color)> = state.domain(u).iter()
        .map(|c| {
            let nb_constrained = inst.adj(u).iter()
                .filter(|v| state.color(**v).is_none() && state.domain(**v).contains(c))
                .count();
            (nb_constrained, c)
        })
        .collect();
    ranked.sort_unstable();
    ranked.into_iter().map(|(_, c)| c).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mrv_prefers_small_domains() {
        // path 0-1-2 plus pendant 3 on 1
        let inst = Graph::from_edges(&[(0, 1), (1, 2), (1, 3)]).unwrap();
        let mut state = AssignmentState::new(4, 3);
        // initially every domain is full: the largest degree wins
        assert_eq!(select_unassigned_vertex(&inst, &state), Some(1));
        state.assign(1, 0);
        state.propagate(&inst, 1, 0);
        // 0, 2 and 3 have 2 values left and degree 1: smallest id wins
        assert_eq!(select_unassigned_vertex(&inst, &state), Some(0));
    }

    #[test]
    fn test_mrv_none_when_complete() {
        let inst = Graph::from_edges(&[(0, 1)]).unwrap();
        let mut state = AssignmentState::new(2, 2);
        state.assign(0, 0);
        state.assign(1, 1);
        assert_eq!(select_unassigned_vertex(&inst, &state), None);
    }

    #[test]
    fn test_mrv_domain_before_degree() {
        // 0 has the largest degree, but 3 has a smaller domain
        let inst = Graph::from_edges(&[(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
        let mut state = AssignmentState::new(5, 3);
        state.assign(4, 2);
        state.propagate(&inst, 4, 2);
        assert_eq!(select_unassigned_vertex(&inst, &state), Some(3));
    }

    #[test]
    fn test_lcv() {
        // 0 is adjacent to 1, 2 and 5. 1 and 2 already lost color 1.
        let inst = Graph::from_edges(&[(0, 1), (0, 2), (0, 5), (1, 3), (2, 4)]).unwrap();
        let (v0, v3, v4) = (inst.vertex(0).unwrap(), inst.vertex(3).unwrap(), inst.vertex(4).unwrap());
        let mut state = AssignmentState::new(inst.nb_vertices(), 3);
        state.assign(v3, 1);
        state.propagate(&inst, v3, 1);
        state.assign(v4, 1);
        state.propagate(&inst, v4, 1);
        // color 1 only constrains 5, colors 0 and 2 constrain 1, 2 and 5
        assert_eq!(order_values(&inst, &state, v0), vec![1, 0, 2]);
    }

    #[test]
    fn test_lcv_empty_domain() {
        let inst = Graph::from_edges(&[(0, 1)]).unwrap();
        let state = AssignmentState::new(2, 0);
        assert!(order_values(&inst, &state, 0).is_empty());
    }
}
