//! copurchase-graph CLI — builds the visualizer's graph document.
//!
//! Usage:
//!   copurchase-graph convert <META> <EDGES> <OUTPUT> [--max-nodes N]
//!   copurchase-graph groups <META> [--max-nodes N]

use clap::{Args, Parser, Subcommand};
use copurchase_graph::{
    BalanceThresholds, ConvertConfig, Converter, LogProgress, DEFAULT_MAX_NODES,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "copurchase-graph",
    version,
    about = "Build a balanced co-purchase graph for the network visualizer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log debug output, including the per-group distribution
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select nodes, filter edges and write the graph document
    Convert {
        /// Product metadata dump
        meta: PathBuf,
        /// Co-purchase edge list
        edges: PathBuf,
        /// Output JSON file
        output: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Run node selection only and print the group distribution
    Groups {
        /// Product metadata dump
        meta: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(Args)]
struct SelectionArgs {
    /// Maximum number of nodes to select
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    max_nodes: usize,
    /// Maximum share of the most frequent group (overrides the default limit)
    #[arg(long)]
    max_top_share: Option<f64>,
    /// Maximum share of the second most frequent group (overrides the default limit)
    #[arg(long)]
    max_second_share: Option<f64>,
    /// Maximum share of the third most frequent group (overrides the default limit)
    #[arg(long)]
    max_third_share: Option<f64>,
}

impl SelectionArgs {
    fn thresholds(&self) -> BalanceThresholds {
        BalanceThresholds::default().with_overrides(
            self.max_top_share,
            self.max_second_share,
            self.max_third_share,
        )
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_converter(config: ConvertConfig) -> Result<Converter, i32> {
    Converter::new(config).map_err(|e| {
        eprintln!("Error: {}", e);
        2
    })
}

fn cmd_convert(meta: PathBuf, edges: PathBuf, output: PathBuf, selection: &SelectionArgs) -> i32 {
    let config = ConvertConfig::new(meta, edges, output)
        .with_max_nodes(selection.max_nodes)
        .with_thresholds(selection.thresholds());
    let converter = match build_converter(config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    match converter.run_observed(&mut LogProgress::default()) {
        Ok(summary) => {
            println!("Successfully created {}", summary.output_path.display());
            println!("Nodes: {}, Links: {}", summary.nodes, summary.links);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_groups(meta: PathBuf, selection: &SelectionArgs) -> i32 {
    let config = ConvertConfig {
        meta_path: meta,
        ..ConvertConfig::default()
    }
    .with_max_nodes(selection.max_nodes)
    .with_thresholds(selection.thresholds());
    let converter = match build_converter(config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let path = &converter.config().meta_path;
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: cannot open '{}': {}", path.display(), e);
            return 1;
        }
    };
    let result = match converter.select(BufReader::new(file), &mut LogProgress::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match result.balanced_at {
        Some(total) => println!(
            "Balanced prefix found after {} records; taking first {}.",
            total,
            result.nodes.len()
        ),
        None => println!(
            "No balanced prefix in {} records; taking first {}.",
            result.scanned,
            result.nodes.len()
        ),
    }
    println!();
    println!("{:<24}  {:>7}  {:>7}", "GROUP", "COUNT", "SHARE");
    println!("{}", "-".repeat(42));
    for share in result.distribution() {
        println!(
            "{:<24}  {:>7}  {:>6.1}%",
            share.group, share.count, share.percentage
        );
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let code = match cli.command {
        Commands::Convert {
            meta,
            edges,
            output,
            selection,
        } => cmd_convert(meta, edges, output, &selection),
        Commands::Groups { meta, selection } => cmd_groups(meta, &selection),
    };
    std::process::exit(code);
}
