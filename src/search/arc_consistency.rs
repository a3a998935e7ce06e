use std::collections::VecDeque;

use bit_set::BitSet;
use thiserror::Error;
use tracing::debug;

use crate::color::{Color, Graph, VertexId};


/** raised when arc consistency empties the domain of a vertex (no coloring exists) */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("domain of vertex {0} wiped out")]
pub struct DomainWipeout(pub VertexId);

/**
removes from domains[i] every color with no support in domains[j].
For the constraint color(i) != color(j), a color c is supported iff domains[j]
contains some color other than c.
Returns true iff domains[i] changed.
*/
pub fn revise(domains: &mut [BitSet], i: VertexId, j: VertexId) -> bool {
    let unsupported: Vec<Color> = domains[i].iter()
        .filter(|c| domains[j].iter().all(|d| d == *c))
        .collect();
    for c in &unsupported {
        domains[i].remove(*c);
    }
    !unsupported.is_empty()
}

/**
AC-3: makes every arc (i,j) of the graph consistent.
    1. enqueue both directions of every edge
    2. pop an arc (i,j), revise it
    3. if domains[i] changed, enqueue (k,i) for every neighbor k of i
    4. stop when the queue is empty, or fail as soon as a domain is empty

Returns the number of removed values.
*/
pub fn arc_consistency(inst: &Graph, domains: &mut [BitSet]) -> Result<usize, DomainWipeout> {
    let mut queue: VecDeque<(VertexId, VertexId)> = inst.vertex_edges().iter()
        .flat_map(|&(u, v)| [(u, v), (v, u)])
        .collect();
    let mut nb_removed = 0;
    let mut nb_revised = 0;
    while let Some((i, j)) = queue.pop_front() {
        nb_revised += 1;
        let before = domains[i].len();
        if revise(domains, i, j) {
            if domains[i].is_empty() {
                debug!(vertex = i, nb_revised, "arc consistency: domain wiped out");
                return Err(DomainWipeout(i));
            }
            nb_removed += before - domains[i].len();
            for k in inst.adj(i) {
                queue.push_back((*k, i));
            }
        }
    }
    debug!(nb_revised, nb_removed, "arc consistency reached");
    Ok(nb_removed)
}
