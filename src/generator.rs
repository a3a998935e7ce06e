//! Random instances (Erdős–Rényi graphs) for experiments.

use rand::Rng;

use crate::color::{Graph, Node};
use crate::search::greedy::greedy_largest_first;


/** G(n,p) random graph: each of the n(n-1)/2 possible edges is present with probability p.
Nodes are 0..n (isolated nodes included).

# Panics
 - if p is not in [0,1]
*/
pub fn gnp_random_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> Graph {
    assert!((0.0..=1.0).contains(&p), "gnp_random_graph: p={} is not a probability", p);
    let mut res = graph_with_nodes(n);
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(p) {
                res.link(a, b);
            }
        }
    }
    res
}

/** G(n,m) random graph: m distinct edges drawn uniformly (m is capped to n(n-1)/2).
Nodes are 0..n (isolated nodes included).
*/
pub fn gnm_random_graph<R: Rng>(n: usize, m: usize, rng: &mut R) -> Graph {
    let mut res = graph_with_nodes(n);
    let m = m.min(n * n.saturating_sub(1) / 2);
    while res.nb_edges() < m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            res.link(a, b);
        }
    }
    res
}

/// graph with nodes 0..n and no edges (vertex id == node label)
fn graph_with_nodes(n: usize) -> Graph {
    let mut res = Graph::default();
    for node in 0..n as Node {
        res.push_node(node);
    }
    res
}

/** average number of colors used by the largest-first greedy over `samples` G(n,p) graphs */
pub fn average_greedy_colors<R: Rng>(samples: usize, n: usize, p: f64, rng: &mut R) -> f64 {
    if samples == 0 {
        return 0.;
    }
    let total: usize = (0..samples)
        .map(|_| {
            let inst = gnp_random_graph(n, p, rng);
            greedy_largest_first(&inst).iter().max().map_or(0, |c| c + 1)
        })
        .sum();
    total as f64 / samples as f64
}
