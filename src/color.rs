use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use bit_set::BitSet;

use crate::error::{ColoringError, GraphError};

/** Node label (as written in the instance files) */
pub type Node = i64;

/** Vertex Id (dense index, in order of first appearance of the node) */
pub type VertexId = usize;

/** Color (colors of a k-coloring are 0..k) */
pub type Color = usize;

/** Solution of a graph coloring problem (node -> color).
Sorted by node so it can be printed as is.
*/
pub type Coloring = BTreeMap<Node, Color>;

/** models a Graph Coloring instance.

Vertices are stored as dense indices (`VertexId`) so the solvers can use
flat vectors and bitsets. The node labels are only used at the boundary.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// labels[u]: node label of vertex u
    labels: Vec<Node>,
    /// index[node]: vertex id of node
    index: HashMap<Node, VertexId>,
    /// edges of the graph (u,v) in order of insertion
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[u]: list of vertices adjacent to u
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[u]: bitset of the neighbors of u
    adj_matrix: Vec<BitSet>,
}

impl Graph {
    /** creates a graph from an edge list. Nodes are introduced by their first occurrence. */
    pub fn from_edges(edges: &[(Node, Node)]) -> Result<Self, GraphError> {
        let mut res = Self::default();
        for &(a, b) in edges {
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            let u = res.push_node(a);
            let v = res.push_node(b);
            res.link(u, v);
        }
        Ok(res)
    }

    /** creates a graph from a declared node set and an edge list.
    Nodes may be isolated. Fails if an edge references an undeclared node.
    */
    pub fn with_nodes(nodes: &[Node], edges: &[(Node, Node)]) -> Result<Self, GraphError> {
        let mut res = Self::default();
        for node in nodes {
            res.push_node(*node);
        }
        for &(a, b) in edges {
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            let u = res.vertex(a).ok_or(GraphError::UndeclaredNode(a))?;
            let v = res.vertex(b).ok_or(GraphError::UndeclaredNode(b))?;
            res.link(u, v);
        }
        Ok(res)
    }

    /// adds a node if not already present, returns its vertex id
    pub(crate) fn push_node(&mut self, node: Node) -> VertexId {
        if let Some(u) = self.index.get(&node) {
            return *u;
        }
        let u = self.labels.len();
        self.labels.push(node);
        self.index.insert(node, u);
        self.adj_list.push(Vec::new());
        self.adj_matrix.push(BitSet::default());
        u
    }

    /// adds the edge (u,v) unless it already exists (u != v)
    pub(crate) fn link(&mut self, u: VertexId, v: VertexId) {
        debug_assert_ne!(u, v);
        if self.adj_matrix[u].contains(v) {
            return;
        }
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.edges.push((u, v));
    }

    /// nb vertices
    pub fn nb_vertices(&self) -> usize { self.labels.len() }

    /// nb edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// vertex ids (0..n)
    pub fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// list of vertices adjacent to vertex u
    pub fn adj(&self, u: VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of vertex u
    pub fn vertex_degree(&self, u: VertexId) -> usize { self.adj_list[u].len() }

    /// true iff u and v are adjacent (O(1))
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool { self.adj_matrix[u].contains(v) }

    /// edge list (vertex ids)
    pub fn vertex_edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// node label of vertex u
    pub fn label(&self, u: VertexId) -> Node { self.labels[u] }

    /// vertex id of a node, if it belongs to the graph
    pub fn vertex(&self, node: Node) -> Option<VertexId> { self.index.get(&node).copied() }

    /// nodes, in order of first appearance
    pub fn nodes(&self) -> &[Node] { &self.labels }

    /// edge list (node labels)
    pub fn edges(&self) -> Vec<(Node, Node)> {
        self.edges.iter().map(|(u, v)| (self.labels[*u], self.labels[*v])).collect()
    }

    /// neighbors of a node (empty if the node is unknown)
    pub fn neighbors(&self, node: Node) -> Vec<Node> {
        match self.vertex(node) {
            None => Vec::new(),
            Some(u) => self.adj_list[u].iter().map(|v| self.labels[*v]).collect(),
        }
    }

    /// degree of a node (0 if the node is unknown)
    pub fn degree(&self, node: Node) -> usize {
        self.vertex(node).map_or(0, |u| self.vertex_degree(u))
    }

    /// maximum degree of the graph (0 if empty)
    pub fn max_degree(&self) -> usize {
        self.vertices().map(|u| self.vertex_degree(u)).max().unwrap_or(0)
    }

    /** builds a coloring from per-vertex colors (colors[u]: color of vertex u) */
    pub fn to_coloring(&self, colors: &[Color]) -> Coloring {
        debug_assert_eq!(colors.len(), self.nb_vertices());
        colors.iter().enumerate().map(|(u, c)| (self.labels[u], *c)).collect()
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees: Vec<usize> = self.vertices().map(|u| self.vertex_degree(u)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
    }
}

/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible coloring, using the given number of colors
    Ok(usize),
    /// a node of the graph is not colored
    NodeNotColored(Node),
    /// both endpoints of an edge share the same color
    ConflictingEdge(Node, Node),
}

/// number of colors used by a coloring (max color + 1)
pub fn nb_colors_used(coloring: &Coloring) -> usize {
    coloring.values().max().map_or(0, |c| c + 1)
}

/**
checks a complete solution: every node of the graph is colored and no edge
is monochromatic. Returns the number of colors if feasible.
*/
pub fn checker(inst: &Graph, coloring: &Coloring) -> CheckerResult {
    if let Some(node) = inst.nodes().iter().find(|node| !coloring.contains_key(*node)) {
        return CheckerResult::NodeNotColored(*node);
    }
    for (a, b) in inst.edges() {
        if coloring.get(&a) == coloring.get(&b) {
            return CheckerResult::ConflictingEdge(a, b);
        }
    }
    CheckerResult::Ok(nb_colors_used(coloring))
}

/**
returns true iff no edge has both endpoints of the same color.

Fails if an endpoint of some edge has no color.
*/
pub fn check(inst: &Graph, coloring: &Coloring) -> Result<bool, ColoringError> {
    for (a, b) in inst.edges() {
        let ca = coloring.get(&a).ok_or(ColoringError::MissingColor(a))?;
        let cb = coloring.get(&b).ok_or(ColoringError::MissingColor(b))?;
        if ca == cb {
            return Ok(false);
        }
    }
    Ok(true)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        Graph::from_edges(&[(10, 20), (20, 30), (30, 40), (40, 10)]).unwrap()
    }

    #[test]
    fn test_from_edges() {
        let inst = square();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.nodes(), &[10, 20, 30, 40]);
        assert_eq!(inst.adj(0), &[1, 3]);
        assert_eq!(inst.neighbors(20), vec![10, 30]);
        assert_eq!(inst.degree(40), 2);
        assert_eq!(inst.degree(99), 0);
        assert!(inst.are_adjacent(0, 3));
        assert!(!inst.are_adjacent(0, 2));
    }

    #[test]
    fn test_duplicate_edges_are_merged() {
        let inst = Graph::from_edges(&[(1, 2), (2, 1), (1, 2)]).unwrap();
        assert_eq!(inst.nb_edges(), 1);
        assert_eq!(inst.edges(), vec![(1, 2)]);
        assert_eq!(inst.degree(1), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        assert_eq!(Graph::from_edges(&[(1, 2), (3, 3)]), Err(GraphError::SelfLoop(3)));
    }

    #[test]
    fn test_with_nodes() {
        let inst = Graph::with_nodes(&[0, 1, 2, 3, 4], &[(0, 1)]).unwrap();
        assert_eq!(inst.nb_vertices(), 5);
        assert_eq!(inst.nb_edges(), 1);
        assert_eq!(inst.degree(4), 0);
        assert_eq!(
            Graph::with_nodes(&[0, 1], &[(0, 2)]),
            Err(GraphError::UndeclaredNode(2))
        );
    }

    #[test]
    fn test_checker() {
        let inst = square();
        let good: Coloring = [(10, 0), (20, 1), (30, 0), (40, 1)].into_iter().collect();
        assert_eq!(checker(&inst, &good), CheckerResult::Ok(2));
        assert_eq!(check(&inst, &good), Ok(true));
        let bad: Coloring = [(10, 0), (20, 0), (30, 1), (40, 1)].into_iter().collect();
        assert_eq!(checker(&inst, &bad), CheckerResult::ConflictingEdge(10, 20));
        assert_eq!(check(&inst, &bad), Ok(false));
        let partial: Coloring = [(10, 0), (20, 1), (30, 0)].into_iter().collect();
        assert_eq!(checker(&inst, &partial), CheckerResult::NodeNotColored(40));
        assert_eq!(check(&inst, &partial), Err(ColoringError::MissingColor(40)));
    }

    #[test]
    fn test_to_coloring() {
        let inst = square();
        let coloring = inst.to_coloring(&[0, 1, 0, 1]);
        assert_eq!(coloring.get(&30), Some(&0));
        assert_eq!(nb_colors_used(&coloring), 2);
        assert_eq!(nb_colors_used(&Coloring::new()), 0);
    }
}
