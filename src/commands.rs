//! CLI command implementations

use grappa_core::Session;
use std::io;

/// Run an interactive session over stdin/stdout until `exit` or EOF.
pub fn repl(graph_name: String) -> anyhow::Result<()> {
    tracing::info!("grappa v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(graph_name);
    session.run(stdin.lock(), stdout.lock())?;

    let graph = session.graph();
    tracing::info!(
        "session ended with {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}
