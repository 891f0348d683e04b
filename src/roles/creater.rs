use rand::{thread_rng, Rng};
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind, Read, Result, Write};

use bincode::{deserialize, serialize};

use crate::graph::DiGraph;

pub struct Creater {
    pub graph: DiGraph,
}

impl Creater {
    pub fn new() -> Creater {
        Creater {
            graph: DiGraph::new(),
        }
    }

    /// The built-in fighting-game matchup table. An edge A -> B means A wins
    /// the A vs B matchup.
    pub fn matchup(&mut self) -> DiGraph {
        self.graph = DiGraph::new();
        self.graph.add_edge("Ryu", "Ken");
        self.graph.add_edge("Ryu", "E.Honda");
        self.graph.add_edge("Ryu", "Chun-Li");
        self.graph.add_edge("Ryu", "Blanka");
        self.graph.add_edge("Ken", "E.Honda");
        self.graph.add_edge("E.Honda", "Blanka");
        self.graph.add_edge("Chun-Li", "Ken");
        self.graph.add_edge("Chun-Li", "E.Honda");
        self.graph.add_edge("Chun-Li", "Blanka");
        self.graph.clone()
    }

    /// Random directed graph on nodes "0".."num_node-1", each with between
    /// 1 and num_degree out-edges to distinct other nodes.
    pub fn generate(&mut self, num_node: usize, num_degree: usize) -> DiGraph {
        self.graph = DiGraph::new();
        let mut rng = thread_rng();
        for i in 0..num_node {
            self.graph.add_node(&i.to_string());
        }
        if num_node < 2 || num_degree == 0 {
            return self.graph.clone();
        }

        let max_neighbor = if num_degree < num_node - 1 {
            num_degree
        } else {
            num_node - 1
        };
        for i in 0..num_node {
            let src = i.to_string();
            let num_neighbor = rng.gen_range(1, max_neighbor + 1);
            while self.graph.out_degree(&src) < num_neighbor {
                let n: usize = rng.gen_range(0, num_node);
                if n != i {
                    self.graph.add_edge(&src, &n.to_string());
                }
            }
        }
        self.graph.clone()
    }

    pub fn get_graph(&self) -> DiGraph {
        self.graph.clone()
    }

    pub fn store_graph(&self, filename: &str) -> Result<()> {
        let encoded =
            serialize(&self.graph).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        let f = File::create(filename)?;
        let mut f = BufWriter::new(f);
        f.write_all(&encoded)?;
        Ok(())
    }

    pub fn load_graph(filename: &str) -> Result<DiGraph> {
        let mut bytes = Vec::new();
        File::open(filename)?.read_to_end(&mut bytes)?;
        let graph = deserialize(&bytes).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        Ok(graph)
    }

    pub fn get_max_degree(&self) -> usize {
        self.graph.max_out_degree()
    }
}
