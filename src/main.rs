//! story-graph-layout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use story_graph_layout::{LayoutConfig, OutputFormat, layout_source};

/// Lay out a character relationship graph top-down.
#[derive(Parser, Debug)]
#[command(
    name = "story-graph-layout",
    version = env!("STORY_GRAPH_LAYOUT_VERSION"),
    about = "Top-down hierarchical layout for character relationship graphs"
)]
struct Cli {
    /// Input file, JSON or edge list (reads from stdin if not provided)
    input: Option<String>,

    /// Output format (json, text)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Node card width
    #[arg(long = "node-width", default_value_t = story_graph_layout::config::NODE_WIDTH)]
    node_width: f64,

    /// Node card height
    #[arg(long = "node-height", default_value_t = story_graph_layout::config::NODE_HEIGHT)]
    node_height: f64,

    /// Horizontal gap between nodes of a layer
    #[arg(long = "node-spacing", default_value_t = story_graph_layout::config::NODE_SPACING)]
    node_spacing: f64,

    /// Vertical gap between ranks
    #[arg(long = "rank-spacing", default_value_t = story_graph_layout::config::RANK_SPACING)]
    rank_spacing: f64,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let config = LayoutConfig::new()
        .with_node_size(cli.node_width, cli.node_height)
        .with_spacing(cli.node_spacing, cli.rank_spacing);

    let rendered = match layout_source(&text, cli.format, cli.pretty, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
