//! Single-source shortest paths (Dijkstra) and their rendering.
//!
//! # Result, not side effects
//!
//! A query always computes the same [`ShortestPath`]: distance, node
//! sequence, and reachability.  [`Verbosity`] only selects how much of it the
//! `Display` impl renders, so callers decide what to print.
//!
//! # Termination
//!
//! The search stops as soon as the target is *popped* from the heap.  That
//! is only sound because every edge weight is positive, which the graph
//! guarantees at construction.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use dd_core::NodeId;

use crate::network::Graph;
use crate::GraphResult;

/// Distance reported for an unreachable target.
pub const UNREACHABLE: f64 = -1.0;

// ── Verbosity ─────────────────────────────────────────────────────────────────

/// How much of a [`ShortestPath`] its `Display` impl renders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Distance only.
    #[default]
    Silent,
    /// Arrow-joined node sequence.
    PathOnly,
    /// Header, node sequence, and distance.
    PathAndDistance,
}

impl From<u8> for Verbosity {
    /// 0 → `Silent`, 1 → `PathOnly`, anything higher → `PathAndDistance`.
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Silent,
            1 => Verbosity::PathOnly,
            _ => Verbosity::PathAndDistance,
        }
    }
}

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// The result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    pub source:    NodeId,
    pub target:    NodeId,
    /// Total edge weight, or [`UNREACHABLE`].
    pub distance:  f64,
    /// Nodes from `source` to `target` inclusive; empty when unreachable.
    pub path:      Vec<NodeId>,
    pub reachable: bool,
    pub verbosity: Verbosity,
}

impl ShortestPath {
    fn unreachable(source: NodeId, target: NodeId, verbosity: Verbosity) -> Self {
        Self {
            source,
            target,
            distance: UNREACHABLE,
            path: Vec::new(),
            reachable: false,
            verbosity,
        }
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Same result rendered at a different verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// `0 -> 1 -> 2 -> 3`
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.reachable {
            return write!(f, "no path from {} to {}", self.source, self.target);
        }
        match self.verbosity {
            Verbosity::Silent => write!(f, "{:.2}", self.distance),
            Verbosity::PathOnly => f.write_str(&self.path_string()),
            Verbosity::PathAndDistance => {
                writeln!(f, "Shortest path from {} to {}:", self.source, self.target)?;
                writeln!(f, "{}", self.path_string())?;
                write!(f, "Path distance: {:.2}", self.distance)
            }
        }
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap key: tentative distance, then `NodeId` for deterministic tie-breaking.
#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    dist: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl Graph {
    /// Shortest path from `source` to `target`.
    ///
    /// Returns `Err(NodeNotFound)` for ids outside the graph.  An unreachable
    /// target is reported through [`ShortestPath::reachable`], not an error.
    pub fn shortest_path(
        &self,
        source: NodeId,
        target: NodeId,
        verbosity: Verbosity,
    ) -> GraphResult<ShortestPath> {
        self.check_node(source)?;
        self.check_node(target)?;

        if source == target {
            return Ok(ShortestPath {
                source,
                target,
                distance: 0.0,
                path: vec![source],
                reachable: true,
                verbosity,
            });
        }

        let n = self.node_count();
        // dist[v] = best known distance to v.
        let mut dist = vec![f64::INFINITY; n];
        // prev[v] = predecessor of v on the best path; INVALID for unreached nodes.
        let mut prev = vec![NodeId::INVALID; n];

        dist[source.index()] = 0.0;

        // Reverse makes BinaryHeap (max) behave as min-heap.
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        heap.push(Reverse(HeapEntry { dist: 0.0, node: source }));

        while let Some(Reverse(HeapEntry { dist: d, node })) = heap.pop() {
            if node == target {
                break;
            }

            // Skip stale heap entries.
            if d > dist[node.index()] {
                continue;
            }

            for edge in self.out_edges(node) {
                let alt = d + edge.distance;
                if alt < dist[edge.to.index()] {
                    dist[edge.to.index()] = alt;
                    prev[edge.to.index()] = node;
                    heap.push(Reverse(HeapEntry { dist: alt, node: edge.to }));
                }
            }
        }

        if prev[target.index()] == NodeId::INVALID {
            return Ok(ShortestPath::unreachable(source, target, verbosity));
        }

        Ok(ShortestPath {
            source,
            target,
            distance: dist[target.index()],
            path: reconstruct(&prev, target),
            reachable: true,
            verbosity,
        })
    }

    /// Distance-only convenience for [`shortest_path`](Self::shortest_path).
    /// `None` when unreachable.
    pub fn distance(&self, source: NodeId, target: NodeId) -> GraphResult<Option<f64>> {
        let sp = self.shortest_path(source, target, Verbosity::Silent)?;
        Ok(sp.reachable.then_some(sp.distance))
    }
}

fn reconstruct(prev: &[NodeId], target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut cur = target;
    while prev[cur.index()] != NodeId::INVALID {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    path
}
