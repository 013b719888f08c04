//! Grappa CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "grappa")]
#[command(about = "Interactive graph builder with content-derived short ids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Name used in the exported digraph header
    #[arg(short, long, default_value = "Grappa")]
    graph_name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from standard input (the default)
    Repl,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; logs go to stderr so they never mix with
    // session replies on stdout
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "grappa={},grappa_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl(cli.graph_name),
        Commands::Version => {
            println!("grappa v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
