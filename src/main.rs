use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use graphtrace::config::{Config, OutputFormat};
use graphtrace::core::{Graph, Step};
use graphtrace::services::{french_cities, load_from_path, Algorithm, RunOutput};
use graphtrace::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphTrace Contributors")]
enum Cli {
    /// Run an algorithm and print its step-by-step report
    Run {
        /// bfs, dfs, dijkstra, bellman-ford, floyd-warshall, kruskal or prim
        algorithm: String,
        /// Adjacency matrix file; the French cities sample when omitted
        #[clap(short, long)]
        graph: Option<PathBuf>,
        /// Start vertex, by index or name
        #[clap(short, long)]
        from: Option<String>,
        /// End vertex, by index or name
        #[clap(short, long)]
        to: Option<String>,
        #[clap(long, value_enum)]
        format: Option<OutputFormat>,
        /// Replay the recorded highlight steps after the report
        #[clap(long)]
        trace: bool,
        #[clap(short, long, default_value = "graphtrace.toml")]
        config: PathBuf,
    },
    /// Print the adjacency matrix
    Show {
        #[clap(short, long)]
        graph: Option<PathBuf>,
    },
    /// List the available algorithms
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Run {
            algorithm,
            graph,
            from,
            to,
            format,
            trace,
            config,
        } => {
            let config = Config::load_or_default(&config)
                .with_context(|| format!("failed to load {}", config.display()))?;
            logging::init(&config)?;
            let result = run(&config, &algorithm, graph, from, to, format, trace);
            logging::shutdown();
            result?;
        }
        Cli::Show { graph } => {
            let graph = load_graph(graph)?;
            print!("{}", graph);
        }
        Cli::List => {
            for algorithm in Algorithm::all() {
                println!("{:<16}{}", algorithm.name(), algorithm.title());
            }
        }
    }

    Ok(())
}

fn run(
    config: &Config,
    algorithm: &str,
    graph: Option<PathBuf>,
    from: Option<String>,
    to: Option<String>,
    format: Option<OutputFormat>,
    show_trace: bool,
) -> Result<()> {
    let algorithm: Algorithm = algorithm.parse()?;
    let graph = load_graph(graph)?;

    let start = from.map(|v| graph.resolve_vertex(&v)).transpose()?;
    let end = to.map(|v| graph.resolve_vertex(&v)).transpose()?;
    let output = algorithm.run(&graph, start, end)?;

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => print!("{}", output.report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    if show_trace || config.output.show_trace {
        replay(&graph, &output, config.output.step_delay_ms);
    }

    if !output.is_success() {
        log::info!("{} finished with status {:?}", algorithm, output.status);
    }
    Ok(())
}

fn load_graph(path: Option<PathBuf>) -> Result<Graph> {
    match path {
        Some(path) => load_from_path(&path)
            .with_context(|| format!("failed to load graph from {}", path.display())),
        None => Ok(french_cities()?),
    }
}

fn replay(graph: &Graph, output: &RunOutput, delay_ms: u64) {
    let names = graph.names();
    println!();
    println!("Trace ({} steps):", output.trace.len());
    for Step { from, to, state } in output.trace.iter().copied() {
        match from {
            Some(from) => println!("  [{}] {} → {}", state.label(), names[from], names[to]),
            None => println!("  [{}] {}", state.label(), names[to]),
        }
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }
    }
}
