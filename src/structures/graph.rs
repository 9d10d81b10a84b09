//! Directed graph implementation
//!
//! [`DirectedGraph`] keeps an unbounded set of string-identified nodes and a
//! per-node adjacency list of outgoing neighbor ids.  Node identity is the id
//! string itself, used directly as the adjacency map key; adjacency order is
//! edge-insertion order, which both traversals honor.
//!
//! Edges are directed and may be duplicated; both endpoints must already be
//! registered when an edge is added.  There is no node or edge removal;
//! `reset` clears everything.
//!
//! # Traversal order
//!
//! BFS marks a node visited when it is *enqueued*, not when it is dequeued,
//! so a node reachable along two frontier paths is queued once.  Iterative
//! DFS pushes neighbors in *reverse* adjacency order so they pop in original
//! adjacency order, matching the pre-order visit a recursive DFS would make.

use crate::audit::{AuditSink, StructureKind};
use crate::error::OperationError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::rc::Rc;

/// Unbounded directed graph over string node ids
pub struct DirectedGraph {
    adjacency: FxHashMap<String, Vec<String>>,
    node_order: Vec<String>,
    edges: Vec<(String, String)>,
    sink: Rc<dyn AuditSink>,
}

impl DirectedGraph {
    /// Create an empty graph
    ///
    /// Emits `(Graph, Create, null)`.
    pub fn new(sink: Rc<dyn AuditSink>) -> Self {
        sink.record(StructureKind::Graph, "Create", None);
        DirectedGraph {
            adjacency: FxHashMap::default(),
            node_order: Vec::new(),
            edges: Vec::new(),
            sink,
        }
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Number of edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Node ids in registration order, for rendering
    pub fn nodes(&self) -> &[String] {
        &self.node_order
    }

    /// All edges as (source, destination) pairs in insertion order
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Outgoing neighbor ids of `id` in edge-insertion order
    pub fn neighbors(&self, id: &str) -> Option<&[String]> {
        self.adjacency.get(id).map(|adj| adj.as_slice())
    }

    /// Register a node with an empty adjacency list
    pub fn add_node(&mut self, id: &str) -> Result<(), OperationError> {
        if self.adjacency.contains_key(id) {
            return Err(OperationError::DuplicateNode { id: id.to_string() });
        }
        self.adjacency.insert(id.to_string(), Vec::new());
        self.node_order.push(id.to_string());
        self.sink.record(StructureKind::Graph, "AddNode", Some(id));
        Ok(())
    }

    /// Add a directed edge between two registered nodes
    ///
    /// No implicit reverse edge; duplicate edges are permitted.  Emits
    /// `(Graph, AddEdge, "from -> to")`.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), OperationError> {
        if !self.adjacency.contains_key(from) {
            return Err(OperationError::UnknownNode {
                id: from.to_string(),
            });
        }
        if !self.adjacency.contains_key(to) {
            return Err(OperationError::UnknownNode { id: to.to_string() });
        }
        if let Some(adj) = self.adjacency.get_mut(from) {
            adj.push(to.to_string());
        }
        self.edges.push((from.to_string(), to.to_string()));
        self.sink.record(
            StructureKind::Graph,
            "AddEdge",
            Some(&format!("{} -> {}", from, to)),
        );
        Ok(())
    }

    /// Breadth-first visitation order from `start`
    ///
    /// Nodes are marked visited at enqueue time so no node is queued twice.
    pub fn bfs(&self, start: &str) -> Result<Vec<String>, OperationError> {
        if !self.adjacency.contains_key(start) {
            return Err(OperationError::UnknownNode {
                id: start.to_string(),
            });
        }

        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        visited.insert(start.to_string());
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            if let Some(adj) = self.adjacency.get(&current) {
                for neighbor in adj {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
            order.push(current);
        }
        Ok(order)
    }

    /// Depth-first (pre-order) visitation order from `start`
    ///
    /// Iterative with an explicit stack.  Neighbors are pushed in reverse
    /// adjacency order so they are popped, and therefore visited, in original
    /// adjacency order; a forward push would visit siblings backwards.
    pub fn dfs(&self, start: &str) -> Result<Vec<String>, OperationError> {
        if !self.adjacency.contains_key(start) {
            return Err(OperationError::UnknownNode {
                id: start.to_string(),
            });
        }

        let mut order = Vec::new();
        let mut stack = vec![start.to_string()];
        let mut visited = FxHashSet::default();

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(adj) = self.adjacency.get(&current) {
                for neighbor in adj.iter().rev() {
                    if !visited.contains(neighbor) {
                        stack.push(neighbor.clone());
                    }
                }
            }
            order.push(current);
        }
        Ok(order)
    }

    /// Clear all nodes and edges back to the construction-time empty state
    ///
    /// Emits `(Graph, Reset, null)`.
    pub fn reset(&mut self) {
        self.adjacency.clear();
        self.node_order.clear();
        self.edges.clear();
        self.sink.record(StructureKind::Graph, "Reset", None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::sinks::NullSink;

    fn diamond() -> DirectedGraph {
        // A → B, A → C, B → D, C → D
        let mut graph = DirectedGraph::new(Rc::new(NullSink));
        for id in ["A", "B", "C", "D"] {
            graph.add_node(id).unwrap();
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "D").unwrap();
        graph.add_edge("C", "D").unwrap();
        graph
    }

    // Guard for the reverse-push rule: DFS must visit siblings in original
    // adjacency order, exactly as a recursive pre-order DFS would.
    #[test]
    fn test_dfs_visits_siblings_in_adjacency_order() {
        let graph = diamond();
        assert_eq!(graph.dfs("A").unwrap(), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_bfs_marks_visited_at_enqueue_time() {
        // D is reachable through both B and C but must appear exactly once.
        let graph = diamond();
        assert_eq!(graph.bfs("A").unwrap(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_duplicate_edges_are_permitted() {
        let mut graph = diamond();
        graph.add_edge("A", "B").unwrap();
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.neighbors("A").unwrap(), ["B", "C", "B"]);
    }
}
