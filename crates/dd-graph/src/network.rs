//! Neighbourhood graph representation and builder.
//!
//! # Data layout
//!
//! The graph owns a single arena `Vec<Node>` indexed by `NodeId`.  Each node
//! stores its outgoing edges as `(NodeId, distance)` pairs that point back
//! into the same arena, so node state is never duplicated inside an edge.
//!
//! ```text
//! nodes[0] (depot) ── edges: [(1, 0.40), (10, 0.71)]
//! nodes[1]         ── edges: [(0, 0.40), (2, 0.13)]
//! ...
//! ```
//!
//! The edge set is fixed at construction.  The only mutable state is each
//! node's `order_count`, which is overwritten for every non-depot node at
//! once by [`Graph::update_orders`].

use tracing::debug;

use dd_core::{DayRng, MAX_ORDER_QUANTITY, NodeId, Order};

use crate::{GraphError, GraphResult};

/// Matrix entries at or below this value are treated as "no edge".
///
/// Absorbs floating-point noise around zero, including the zero diagonal.
pub const EPSILON: f64 = 1e-6;

// ── Node ──────────────────────────────────────────────────────────────────────

/// A directed, positively weighted connection into the node arena.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to:       NodeId,
    pub distance: f64,
}

/// A delivery stop (or the depot) with its outgoing edges.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id:          NodeId,
    edges:       Vec<Edge>,
    order_count: u32,
}

impl Node {
    fn new(id: NodeId) -> Self {
        Self { id, edges: Vec::new(), order_count: 0 }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Packages ordered at this stop for the current day.
    pub fn order_count(&self) -> u32 {
        self.order_count
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed, weighted neighbourhood graph.  Node 0 is the depot.
///
/// Build with [`Graph::from_matrix`] or [`GraphBuilder`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Build a graph from a square distance matrix.
    ///
    /// `matrix[i][j] > EPSILON` creates the directed edge `i -> j`.  The
    /// matrix does not need to be symmetric, and the diagonal is never read.
    /// Fails on non-square input and on negative or non-finite entries.
    ///
    /// Time complexity: O(N²).
    pub fn from_matrix(matrix: &[Vec<f64>]) -> GraphResult<Self> {
        let n = matrix.len();
        if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::NotSquare { row, len: r.len(), expected: n });
        }

        let mut b = GraphBuilder::with_nodes(n);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &distance) in row.iter().enumerate() {
                if i == j {
                    continue;
                }
                b.add_edge(NodeId(i as u32), NodeId(j as u32), distance)?;
            }
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub(crate) fn check_node(&self, id: NodeId) -> GraphResult<()> {
        if self.contains(id) { Ok(()) } else { Err(GraphError::NodeNotFound(id)) }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Outgoing edges of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> &[Edge] {
        &self.nodes[node.index()].edges
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_edges(node).len()
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.node(from)?
            .edges
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.distance)
    }

    // ── Daily orders ──────────────────────────────────────────────────────

    /// Replace every stop's order count with a fresh draw seeded by `seed`.
    ///
    /// The same seed always yields the same assignment.
    pub fn update_orders(&mut self, seed: u64) {
        self.update_orders_with(&mut DayRng::new(seed));
    }

    /// Like [`update_orders`](Self::update_orders) with a caller-owned RNG.
    ///
    /// Each non-depot node gets a count uniform in `0..=MAX_ORDER_QUANTITY`;
    /// the depot is reset to 0.
    pub fn update_orders_with(&mut self, rng: &mut DayRng) {
        let Some((depot, stops)) = self.nodes.split_first_mut() else {
            return;
        };
        depot.order_count = 0;
        for node in stops {
            node.order_count = rng.gen_range(0..=MAX_ORDER_QUANTITY);
        }
        debug!(stops = self.nodes.len() - 1, packages = self.total_orders(), "orders updated");
    }

    /// Set one stop's order count directly.
    pub fn set_order_count(&mut self, id: NodeId, quantity: u32) -> GraphResult<()> {
        if id.is_depot() && quantity > 0 {
            return Err(GraphError::DepotOrder);
        }
        self.check_node(id)?;
        self.nodes[id.index()].order_count = quantity;
        Ok(())
    }

    /// One `(node, quantity)` entry per node in id order, depot first.
    pub fn order_list(&self) -> Vec<Order> {
        self.nodes
            .iter()
            .map(|n| Order::new(n.id, n.order_count))
            .collect()
    }

    /// Total packages ordered across all stops today.
    pub fn total_orders(&self) -> u32 {
        self.nodes.iter().map(|n| n.order_count).sum()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] edge by edge, then call [`build`](Self::build).
///
/// Applies the same rules as [`Graph::from_matrix`]: weights at or below
/// [`EPSILON`] are dropped, negative and non-finite weights are rejected.
///
/// # Example
///
/// ```
/// use dd_graph::{GraphBuilder, Verbosity};
///
/// let mut b = GraphBuilder::new();
/// let depot = b.add_node();
/// let house = b.add_node();
/// b.add_road(depot, house, 0.5).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// let sp = graph.shortest_path(depot, house, Verbosity::Silent).unwrap();
/// assert_eq!(sp.distance, 0.5);
/// ```
pub struct GraphBuilder {
    nodes: Vec<Node>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Start with `n` nodes, ids `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        Self {
            nodes: (0..n).map(|i| Node::new(NodeId(i as u32))).collect(),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id));
        id
    }

    /// Add a **directed** edge `from -> to`.
    ///
    /// A `distance` at or below [`EPSILON`] is silently ignored.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, distance: f64) -> GraphResult<()> {
        for id in [from, to] {
            if id.index() >= self.nodes.len() {
                return Err(GraphError::NodeNotFound(id));
            }
        }
        if !distance.is_finite() {
            return Err(GraphError::NonFiniteWeight { from, to });
        }
        if distance < 0.0 {
            return Err(GraphError::NegativeWeight { from, to, weight: distance });
        }
        if distance > EPSILON {
            self.nodes[from.index()].edges.push(Edge { to, distance });
        }
        Ok(())
    }

    /// Convenience: add edges in **both directions**.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, distance: f64) -> GraphResult<()> {
        self.add_edge(a, b, distance)?;
        self.add_edge(b, a, distance)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    pub fn build(self) -> Graph {
        Graph { nodes: self.nodes }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
