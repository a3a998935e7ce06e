use std::cmp::{Ordering, Reverse};

use bit_set::BitSet;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color::{Color, Coloring, Graph, VertexId};
use crate::search::Colorer;


/** vertex ordering of the greedy */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreedyStrategy {
    /// vertices by decreasing degree (ties: first-seen order)
    LargestFirst,
    /// vertex that sees the most colors first (ties: largest degree)
    Dsatur,
}

/**
Greedy coloring used as a baseline. It always returns a coloring, which may
use more colors than the budget (a warning is emitted in that case).
*/
#[derive(Debug)]
pub struct GreedyColorer {
    /// private copy of the instance
    graph: Graph,
    /// number of colors
    n_colors: usize,
    /// vertex ordering
    strategy: GreedyStrategy,
}

impl GreedyColorer {
    /** creates the colorer (copies the graph) */
    pub fn new(graph: &Graph, n_colors: usize, strategy: GreedyStrategy) -> Self {
        Self { graph: graph.clone(), n_colors, strategy }
    }
}

impl Colorer for GreedyColorer {
    fn color(&mut self) -> Option<Coloring> {
        let colors = match self.strategy {
            GreedyStrategy::LargestFirst => greedy_largest_first(&self.graph),
            GreedyStrategy::Dsatur => greedy_dsatur(&self.graph),
        };
        let nb_colors = colors.iter().max().map_or(0, |c| c + 1);
        if nb_colors > self.n_colors {
            warn!(
                strategy = ?self.strategy,
                nb_colors,
                budget = self.n_colors,
                "greedy coloring uses more colors than the budget"
            );
        } else {
            info!(strategy = ?self.strategy, nb_colors, "greedy coloring found");
        }
        Some(self.graph.to_coloring(&colors))
    }
}

/// smallest color not in `used`
fn first_fit(used: &BitSet) -> Color {
    let mut color: Color = 0;
    while used.contains(color) { color += 1; }
    color
}

/** greedy coloring, vertices taken by decreasing degree, each one receives
the smallest color unused by its neighbors. Returns colors[v] for every vertex.
*/
pub fn greedy_largest_first(inst: &Graph) -> Vec<Color> {
    let mut order: Vec<VertexId> = inst.vertices().collect();
    order.sort_by_key(|v| Reverse(inst.vertex_degree(*v))); // stable: ties keep first-seen order
    let mut colors: Vec<Option<Color>> = vec![None; inst.nb_vertices()];
    let mut used = BitSet::default();
    for v in order {
        used.clear();
        for w in inst.adj(v) {
            if let Some(c) = colors[*w] { used.insert(c); }
        }
        colors[v] = Some(first_fit(&used));
    }
    colors.into_iter().flatten().collect()
}

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    v: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.v.cmp(&self.v))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colors (break ties by the largest degree)
    2. add the vertex to the first color available
    3. mark all its neighbors seeing this color
    4. repeat until a proper coloring is found
*/
pub fn greedy_dsatur(inst: &Graph) -> Vec<Color> {
    let n: usize = inst.nb_vertices();
    let mut remaining_vertices: PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for v in inst.vertices() {
        remaining_vertices.push(v, DSatInfo { dsat: 0, degree: inst.vertex_degree(v), v });
    }
    let mut colors: Vec<Option<Color>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[v] -> colors v sees
    while let Some((current_vertex, _)) = remaining_vertices.pop() {
        let color = first_fit(&adj_colors[current_vertex]);
        colors[current_vertex] = Some(color);
        // update saturation degree information
        for conflict_vertex in inst.adj(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if adj_colors[*conflict_vertex].insert(color) {
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    colors.into_iter().flatten().collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{check, nb_colors_used};

    fn crown() -> Graph {
        // crown graph on 8 vertices: bipartite, but a bad greedy order needs 4 colors
        Graph::from_edges(&[
            (0, 5), (0, 6), (0, 7),
            (1, 4), (1, 6), (1, 7),
            (2, 4), (2, 5), (2, 7),
            (3, 4), (3, 5), (3, 6),
        ]).unwrap()
    }

    #[test]
    fn test_largest_first_on_k4() {
        let inst = Graph::from_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
        let colors = greedy_largest_first(&inst);
        assert_eq!(colors, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_largest_first_order() {
        // star centered on 9: the center is colored first
        let inst = Graph::from_edges(&[(1, 9), (2, 9), (3, 9)]).unwrap();
        let coloring = GreedyColorer::new(&inst, 2, GreedyStrategy::LargestFirst).color().unwrap();
        assert_eq!(coloring.get(&9), Some(&0));
        assert_eq!(nb_colors_used(&coloring), 2);
    }

    #[test]
    fn test_dsatur_is_exact_on_bipartite() {
        let inst = crown();
        let coloring = GreedyColorer::new(&inst, 2, GreedyStrategy::Dsatur).color().unwrap();
        assert_eq!(check(&inst, &coloring), Ok(true));
        assert_eq!(nb_colors_used(&coloring), 2);
    }

    #[test]
    fn test_over_budget_is_not_an_error() {
        let inst = Graph::from_edges(&[(0, 1), (1, 2), (2, 0)]).unwrap();
        let coloring = GreedyColorer::new(&inst, 2, GreedyStrategy::LargestFirst).color().unwrap();
        assert_eq!(check(&inst, &coloring), Ok(true));
        assert_eq!(nb_colors_used(&coloring), 3);
    }

    #[test]
    fn test_empty_graph() {
        let inst = Graph::default();
        assert_eq!(GreedyColorer::new(&inst, 1, GreedyStrategy::Dsatur).color(), Some(Coloring::new()));
    }
}
