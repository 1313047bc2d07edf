use std::path::PathBuf;

use divconq_hamiltonian::{Graph, Outcome, SearchConfig};
use log::debug;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Example {
    /// Five vertices, undirected, with a Hamiltonian path.
    Undirected,
    /// Five vertices, directed, with a Hamiltonian path.
    Directed,
}

#[derive(clap::Args, Debug)]
pub struct Options {
    /// Use one of the built-in example graphs.
    #[clap(long, value_enum)]
    example: Option<Example>,

    /// Read the graph from a JSON file: {"vertices": 3, "directed": false, "edges": [[0, 1], [1, 2]]}.
    #[clap(long)]
    graph: Option<PathBuf>,

    /// Start from an empty graph with this many vertices.
    #[clap(long)]
    vertices: Option<usize>,

    /// Make the empty graph created with --vertices directed.
    #[clap(long)]
    directed: bool,

    /// An extra edge, written as "origin destination".
    #[clap(long = "edge")]
    edges: Vec<String>,

    /// Give up after this many path extensions.
    #[clap(long)]
    step_budget: Option<u64>,
}

#[derive(PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GraphDescription {
    vertices: usize,
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    edges: Vec<(usize, usize)>,
}

impl GraphDescription {
    pub fn example(example: Example) -> Self {
        match example {
            Example::Undirected => GraphDescription {
                vertices: 5,
                directed: false,
                edges: vec![(0, 1), (0, 3), (1, 2), (1, 3), (1, 4), (2, 4), (3, 4)],
            },
            Example::Directed => GraphDescription {
                vertices: 5,
                directed: true,
                edges: vec![(0, 1), (1, 2), (2, 3), (3, 4), (1, 4), (1, 3)],
            },
        }
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|error| format!("invalid graph description: {error}"))
    }

    /// Builds the graph, skipping edges whose endpoints are out of range.
    pub fn build(&self) -> Result<(Graph, Vec<String>), String> {
        let mut graph = Graph::try_new(self.vertices, self.directed).map_err(|error| error.to_string())?;
        let mut rejected = Vec::new();
        for &(u, v) in &self.edges {
            if let Err(error) = graph.add_edge(u, v) {
                rejected.push(format!("skipping edge {u} {v}: {error}"));
            }
        }

        Ok((graph, rejected))
    }
}

pub fn parse_edge(text: &str) -> Result<(usize, usize), String> {
    let invalid = || format!("invalid edge '{text}'; use: origin destination (e.g. 0 1)");
    let mut parts = text.split(|ch: char| ch.is_whitespace() || ch == ',').filter(|part| !part.is_empty());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(u), Some(v), None) => Ok((u.parse().map_err(|_| invalid())?, v.parse().map_err(|_| invalid())?)),
        _ => Err(invalid()),
    }
}

/// Resolves the graph source and appends the `--edge` values, returning the messages for malformed edges.
fn load(options: &Options) -> Result<(GraphDescription, Vec<String>), String> {
    let mut description = match (options.example, &options.graph, options.vertices) {
        (Some(example), None, None) => GraphDescription::example(example),
        (None, Some(path), None) => {
            let text = std::fs::read_to_string(path).map_err(|error| format!("failed to read {}: {error}", path.display()))?;
            GraphDescription::from_json(&text)?
        }
        (None, None, Some(vertices)) => GraphDescription {
            vertices,
            directed: options.directed,
            edges: Vec::new(),
        },
        _ => return Err("exactly one of --example, --graph or --vertices must be given".into()),
    };

    let mut malformed = Vec::new();
    for edge in &options.edges {
        match parse_edge(edge) {
            Ok(edge) => description.edges.push(edge),
            Err(error) => malformed.push(error),
        }
    }

    Ok((description, malformed))
}

fn format_path(path: &[usize]) -> String {
    let vertices: Vec<String> = path.iter().map(usize::to_string).collect();
    vertices.join(" -> ")
}

pub fn main(options: Options) -> Result<(), String> {
    let (description, malformed) = load(&options)?;
    let (graph, rejected) = description.build()?;
    for message in malformed.into_iter().chain(rejected) {
        eprintln!("{message}");
    }

    let mut config = SearchConfig::from_env().map_err(|error| error.to_string())?;
    if options.step_budget.is_some() {
        config.set_step_budget(options.step_budget);
    }

    debug!(
        "Searching a {} graph with {} vertices and {} edges",
        if graph.is_directed() { "directed" } else { "undirected" },
        graph.vertex_count(),
        graph.edge_count()
    );

    let search = graph.search(&config);
    match search.outcome {
        Outcome::Found(ref path) => {
            println!("Hamiltonian path found:");
            println!("{}", format_path(path));
        }
        Outcome::NotFound => println!("No Hamiltonian path found in the graph."),
        Outcome::BudgetExhausted => println!("Search stopped after {} steps without finding a path.", search.steps),
    }

    Ok(())
}
