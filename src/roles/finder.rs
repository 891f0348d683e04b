use std::collections::HashSet;

use crate::error::GraphError;
use crate::graph::DiGraph;

/// Greedy dominating-set construction. The result covers every node of the
/// graph (each node is in the set or is an out-neighbor of a member) but is
/// not necessarily minimum-size.
pub struct Finder<'a> {
    pub graph: &'a DiGraph,
}

impl<'a> Finder<'a> {
    pub fn new(graph: &'a DiGraph) -> Finder<'a> {
        Finder { graph }
    }

    /// Grows a dominating set starting from `start_with`, or from an
    /// arbitrary node when no start is given. Which node "arbitrary" picks
    /// follows `HashMap` iteration order and so varies between runs; the
    /// covering property of the result does not depend on it.
    pub fn find(&self, start_with: Option<&str>) -> Result<HashSet<String>, GraphError> {
        if let Some(node) = start_with {
            if !self.graph.contains(node) {
                return Err(GraphError::InvalidArgument(format!(
                    "node {:?} is not in the graph",
                    node
                )));
            }
        }
        let start = match start_with {
            Some(node) => node.to_string(),
            None => match self.graph.nodes().next() {
                Some(node) => node.clone(),
                None => return Ok(HashSet::new()),
            },
        };

        let mut dominating: HashSet<String> = HashSet::new();
        dominating.insert(start.clone());

        let mut dominated: HashSet<String> = HashSet::new();
        for neighbor in self.graph.out_neighbors(&start) {
            dominated.insert(neighbor.clone());
        }

        let mut remaining: HashSet<String> = HashSet::new();
        for node in self.graph.nodes() {
            if !dominated.contains(node) && !dominating.contains(node) {
                remaining.insert(node.clone());
            }
        }

        // each node leaves remaining exactly once, either picked or dominated
        loop {
            let v = match remaining.iter().next() {
                Some(node) => node.clone(),
                None => break,
            };
            remaining.remove(&v);
            for neighbor in self.graph.out_neighbors(&v) {
                if !dominating.contains(neighbor) {
                    dominated.insert(neighbor.clone());
                    remaining.remove(neighbor);
                }
            }
            dominating.insert(v);
        }
        Ok(dominating)
    }
}
