mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathfinder_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over weighted graph files")]
struct Cli {
    /// Graph file to load. Falls back to PATHFINDER_GRAPH, then the user data directory.
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest path between two nodes.
    Route {
        /// Starting node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
    },
    /// Report node, edge and weight totals for the graph.
    Stats,
    /// Start an interactive session.
    Shell,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let target = cli.graph.as_deref();

    match cli.command {
        Command::Route { from, to } => {
            commands::route::handle_route(target, cli.format, &from, &to)
        }
        Command::Stats => commands::stats::handle_stats(target, cli.format),
        Command::Shell => commands::shell::handle_shell(target, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
