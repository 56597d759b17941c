use crate::error::{DemoError, Result};
use std::collections::{HashMap, HashSet};

/// A directed graph stored as an adjacency list keyed by node label.
///
/// Successor order is preserved and drives traversal order. Every label that
/// appears as a successor must also be added as a node (possibly with no
/// successors), or traversal into it fails with `NodeNotFound`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with its ordered successors, replacing any existing entry.
    pub fn add_node(&mut self, label: &str, successors: &[&str]) {
        self.adjacency.insert(
            label.to_string(),
            successors.iter().map(|s| s.to_string()).collect(),
        );
    }

    /// Whether `label` is defined as a node
    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Ordered successors of `label`
    pub fn successors(&self, label: &str) -> Result<&[String]> {
        self.adjacency
            .get(label)
            .map(Vec::as_slice)
            .ok_or_else(|| DemoError::NodeNotFound(label.to_string()))
    }

}

/// Depth-first walk from `start`, returning each reachable node exactly once
/// in pre-order (a node before its descendants, successors first-child-first).
///
/// The visited set is created fresh per call, so repeated calls never leak
/// state into each other. On any undefined label the walk stops and returns
/// `NodeNotFound` with no partial order.
pub fn traverse(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn visit(
    graph: &Graph,
    node: &str,
    visited: &mut HashSet<String>,
    order: &mut Vec<String>,
) -> Result<()> {
    if visited.contains(node) {
        return Ok(());
    }

    // Resolve before recording, so an undefined node contributes nothing
    let successors = graph.successors(node)?;

    visited.insert(node.to_string());
    order.push(node.to_string());

    for successor in successors {
        visit(graph, successor, visited, order)?;
    }

    Ok(())
}

/// Explicit-stack variant of [`traverse`] with the identical order guarantee.
///
/// Successors are pushed in reverse so the first child is popped first; a
/// label already visited when popped is skipped, which keeps cycles and
/// diamond shapes from being emitted twice. Use this for graphs deep enough
/// to threaten the call stack.
pub fn traverse_iterative(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.to_string()];

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }

        let successors = graph.successors(&node)?;

        visited.insert(node.clone());
        order.push(node.clone());

        for successor in successors.iter().rev() {
            if !visited.contains(successor) {
                stack.push(successor.clone());
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked example: A→[B,C], B→[D,E], C→[F], D→[G,H], E→[F,I],
    /// F→[K], G→[K]; H, I and K are leaves.
    fn example_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("A", &["B", "C"]);
        graph.add_node("B", &["D", "E"]);
        graph.add_node("C", &["F"]);
        graph.add_node("D", &["G", "H"]);
        graph.add_node("E", &["F", "I"]);
        graph.add_node("F", &["K"]);
        graph.add_node("G", &["K"]);
        graph.add_node("H", &[]);
        graph.add_node("I", &[]);
        graph.add_node("K", &[]);
        graph
    }

    fn cyclic_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("X", &["Y"]);
        graph.add_node("Y", &["Z"]);
        graph.add_node("Z", &["X"]);
        graph
    }

    #[test]
    fn test_preorder_from_c() {
        let order = traverse(&example_graph(), "C").unwrap();
        assert_eq!(order, vec!["C", "F", "K"]);
    }

    #[test]
    fn test_preorder_from_a() {
        // First branch fully explored before the second: B's subtree reaches
        // F and K, so C contributes only itself at the end.
        let order = traverse(&example_graph(), "A").unwrap();
        assert_eq!(order, vec!["A", "B", "D", "G", "K", "H", "E", "F", "I", "C"]);
    }

    #[test]
    fn test_each_reachable_node_exactly_once() {
        let order = traverse(&example_graph(), "A").unwrap();
        assert_eq!(order.len(), 10);
        let unique: HashSet<&String> = order.iter().collect();
        assert_eq!(unique.len(), order.len());
    }

    #[test]
    fn test_unreachable_nodes_not_visited() {
        let order = traverse(&example_graph(), "C").unwrap();
        assert!(!order.contains(&"A".to_string()));
        assert!(!order.contains(&"B".to_string()));
        assert!(!order.contains(&"I".to_string()));
    }

    #[test]
    fn test_cycle_terminates_each_node_once() {
        let order = traverse(&cyclic_graph(), "X").unwrap();
        assert_eq!(order, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        graph.add_node("N", &["N"]);

        let order = traverse(&graph, "N").unwrap();
        assert_eq!(order, vec!["N"]);
    }

    #[test]
    fn test_undefined_start_node() {
        let result = traverse(&example_graph(), "Q");
        assert!(matches!(result, Err(DemoError::NodeNotFound(label)) if label == "Q"));
    }

    #[test]
    fn test_undefined_successor() {
        let mut graph = Graph::new();
        graph.add_node("A", &["B"]);
        // B never defined

        let result = traverse(&graph, "A");
        assert!(matches!(result, Err(DemoError::NodeNotFound(label)) if label == "B"));
    }

    #[test]
    fn test_fresh_visited_set_per_call() {
        let graph = example_graph();
        let first = traverse(&graph, "C").unwrap();
        let second = traverse(&graph, "C").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterative_matches_recursive() {
        let graph = example_graph();
        for start in ["A", "B", "C", "K"] {
            assert_eq!(
                traverse_iterative(&graph, start).unwrap(),
                traverse(&graph, start).unwrap(),
            );
        }
    }

    #[test]
    fn test_iterative_on_cycle() {
        let order = traverse_iterative(&cyclic_graph(), "X").unwrap();
        assert_eq!(order, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_iterative_undefined_start_node() {
        let result = traverse_iterative(&example_graph(), "Q");
        assert!(matches!(result, Err(DemoError::NodeNotFound(_))));
    }

    #[test]
    fn test_graph_accessors() {
        let graph = example_graph();
        assert!(graph.contains("A"));
        assert!(!graph.contains("Q"));
        assert_eq!(graph.successors("A").unwrap(), &["B", "C"]);
        assert!(graph.successors("Q").is_err());
    }

    #[test]
    fn test_add_node_replaces_existing_entry() {
        let mut graph = Graph::new();
        graph.add_node("A", &["B"]);
        graph.add_node("A", &["C"]);
        graph.add_node("C", &[]);

        assert_eq!(graph.successors("A").unwrap(), &["C"]);
        assert_eq!(traverse(&graph, "A").unwrap(), vec!["A", "C"]);
    }
}
