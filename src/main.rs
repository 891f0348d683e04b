mod error;
mod graph;
mod roles;

use graph::DiGraph;
use roles::creater::Creater;
use roles::finder::Finder;
use roles::verifier::Verifier;

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Error, ErrorKind, Result, Write};
use std::time::Instant;

fn main() -> Result<()> {
    let matches = clap_app!(dominating_set =>
        (version: "0.1")
        (about: "greedy dominating set over directed matchup graphs")
        (@arg graph: -g --graph +takes_value "Sets graph file path, each line is a node followed by its out-neighbors, whitespace separated")
        (@arg node: -n --node +takes_value "get number of nodes for random graph generation")
        (@arg degree: -d --degree +takes_value "max out-degree attempted per node for random graph generation")
        (@arg run: -r --run +takes_value "get number of random graphs to solve")
        (@arg start: -s --start +takes_value "node to seed the dominating set")
    )
    .get_matches();

    let graph_path = matches.value_of("graph");
    let input_num_node = matches.value_of("node");
    let input_num_degree = matches.value_of("degree");
    let input_num_run = matches.value_of("run");
    let start_node = matches.value_of("start");

    if let Some(path) = graph_path {
        let graph = input_file_graph(path)?;
        let (_, result) = solve_graph(&graph, start_node)?;
        if !result {
            panic!("found set failed verification");
        }
        return Ok(());
    }

    if input_num_node.is_none() {
        // no flags: solve the built-in matchup table from Ryu
        let mut graph_creater = Creater::new();
        let graph = graph_creater.matchup();
        let (_, result) = solve_graph(&graph, start_node.or(Some("Ryu")))?;
        if !result {
            panic!("found set failed verification");
        }
        return Ok(());
    }

    let num_node = parse_flag(input_num_node, "node")?;
    let num_degree = parse_flag(input_num_degree, "degree")?;
    let num_run = match input_num_run {
        Some(value) => parse_flag(Some(value), "run")?,
        None => 1,
    };

    let filename = format!("n{}_d{}_r{}", num_node, num_degree, num_run);
    let f = File::create(filename)?;
    let mut f = BufWriter::new(f);

    let mut graph_creater = Creater::new();
    for _ in 0..num_run {
        let graph = graph_creater.generate(num_node, num_degree);
        graph_creater.store_graph("graph")?;
        let (summary, result) = solve_graph(&graph, start_node)?;
        f.write_all(summary.as_bytes())?;
        if !result {
            panic!("found set failed verification");
        }
    }
    Ok(())
}

fn parse_flag(value: Option<&str>, name: &str) -> Result<usize> {
    let value = value
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, format!("missing --{}", name)))?;
    value.parse::<usize>().map_err(|_| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("--{} expects a number, got {:?}", name, value),
        )
    })
}

fn solve_graph(graph: &DiGraph, start_with: Option<&str>) -> Result<(String, bool)> {
    let now = Instant::now();
    let finder = Finder::new(graph);

    let solve_now = Instant::now();
    let dominating = finder
        .find(start_with)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;
    let solve_time = solve_now.elapsed().as_millis();

    let verifier = Verifier::new(&dominating, graph);
    let result = verifier.verify();
    let total_time = now.elapsed().as_millis();

    let summary = format!(
        "{} domSize {} maxDeg {} ttime {} stime {} sol {:?}\n",
        result,
        dominating.len(),
        graph.max_out_degree(),
        total_time,
        solve_time,
        dominating,
    );
    println!("{}", summary);

    Ok((summary, result))
}

fn input_file_graph(filename: &str) -> Result<DiGraph> {
    let f = File::open(filename)?;
    let f = BufReader::new(f);
    let mut graph = DiGraph::new();
    for line in f.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let src = match tokens.next() {
            Some(token) => token,
            None => continue,
        };
        graph.add_node(src);
        for dst in tokens {
            graph.add_edge(src, dst);
        }
    }
    Ok(graph)
}
