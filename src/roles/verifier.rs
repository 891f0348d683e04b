use std::collections::HashSet;

use crate::graph::DiGraph;

/// Checks the covering property: every node of the graph is in the candidate
/// set or is an out-neighbor of one of its members. Candidate entries that are
/// not graph nodes are ignored.
pub struct Verifier<'a> {
    pub candidate: &'a HashSet<String>,
    pub graph: &'a DiGraph,
}

impl<'a> Verifier<'a> {
    pub fn new(candidate: &'a HashSet<String>, graph: &'a DiGraph) -> Verifier<'a> {
        Verifier { candidate, graph }
    }

    pub fn verify(&self) -> bool {
        let mut testset: HashSet<&String> = HashSet::new();
        for node in self.candidate.iter() {
            if self.graph.contains(node) {
                testset.insert(node);
            }
        }

        let mut covered: HashSet<&String> = HashSet::new();
        for node in testset.iter() {
            for neighbor in self.graph.out_neighbors(node) {
                covered.insert(neighbor);
            }
        }

        for node in self.graph.nodes() {
            if !testset.contains(node) && !covered.contains(node) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::creater::Creater;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn full_node_set_always_covers() {
        let graph = Creater::new().matchup();
        let all: HashSet<String> = graph.nodes().cloned().collect();
        assert!(Verifier::new(&all, &graph).verify());
    }

    #[test]
    fn empty_candidate_covers_only_the_empty_graph() {
        let empty_candidate = HashSet::new();
        let empty_graph = DiGraph::new();
        assert!(Verifier::new(&empty_candidate, &empty_graph).verify());

        let graph = Creater::new().matchup();
        assert!(!Verifier::new(&empty_candidate, &graph).verify());
    }

    #[test]
    fn sink_node_does_not_cover_the_matchup_table() {
        // Blanka has no out-edges, so it only covers itself
        let graph = Creater::new().matchup();
        let candidate = set(&["Blanka"]);
        assert!(!Verifier::new(&candidate, &graph).verify());
    }

    #[test]
    fn chun_li_and_ryu_cover_the_matchup_table() {
        let graph = Creater::new().matchup();
        let candidate = set(&["Chun-Li", "Ryu"]);
        assert!(Verifier::new(&candidate, &graph).verify());
    }

    #[test]
    fn nodes_outside_the_graph_are_ignored() {
        let graph = Creater::new().matchup();
        let candidate = set(&["Ryu"]);
        let mut padded = candidate.clone();
        padded.insert("Akuma".to_string());
        assert_eq!(
            Verifier::new(&candidate, &graph).verify(),
            Verifier::new(&padded, &graph).verify()
        );

        let junk_only = set(&["Akuma"]);
        assert!(!Verifier::new(&junk_only, &graph).verify());
    }

    #[test]
    fn partial_chain_cover_is_rejected() {
        let mut graph = DiGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        let head_only = set(&["a"]);
        assert!(!Verifier::new(&head_only, &graph).verify());
        let head_and_middle = set(&["a", "b"]);
        assert!(Verifier::new(&head_and_middle, &graph).verify());
    }
}
