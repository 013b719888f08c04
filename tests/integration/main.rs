//! Integration tests for Grappa
//!
//! These tests drive a whole session through the public API, the way the
//! binary does, and check the exported DOT output end to end.

use grappa_core::{Graph, GraphError, Session};
use std::io::Cursor;
use std::process::Command;

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("grappa"));
    assert!(stdout.contains("Interactive graph builder"));
}

/// Build a small graph from a command script and print it
#[test]
fn test_session_round_trip() {
    let script = "\
node Alice
node Bob
edge al bo knows
print
exit
";
    let mut session = Session::new("Grappa");
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(" > new node: al"));
    assert!(text.contains(" > new node: bo"));
    assert!(text.contains("digraph Grappa {"));
    assert!(text.contains("al [label=\"Alice\"];"));
    assert!(text.contains("bo [label=\"Bob\"];"));
    assert!(text.contains("al -> bo [label=\""));
    assert!(text.contains(": knows\"];"));
    assert!(text.ends_with(" > exit\n"));
}

/// Errors are reported inline and the session keeps going
#[test]
fn test_session_recovers_from_errors() {
    let script = "\
edge X Y hello
bogus
node
node Carol
exit
";
    let mut session = Session::new("Grappa");
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(" err > no such node X"));
    assert!(text.contains(" err > unknown command bogus"));
    assert!(text.contains(" err > wrong number of tokens"));
    assert!(text.contains(" > new node: ca"));
    assert_eq!(session.graph().node_count(), 1);
    assert_eq!(session.graph().edge_count(), 0);
}

/// The save command writes the same DOT block print produces
#[test]
fn test_save_and_print_agree() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("graph.dot");

    let mut session = Session::new("Grappa");
    let mut out = Vec::new();
    session.handle_line("node Alice", &mut out).unwrap();
    session.handle_line("node Bob", &mut out).unwrap();
    session.handle_line("edge al bo knows", &mut out).unwrap();

    let mut printed = Vec::new();
    session.handle_line("print", &mut printed).unwrap();
    session
        .handle_line(&format!("save {}", path.display()), &mut out)
        .unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, String::from_utf8(printed).unwrap());
}

/// Custom graph names show up in the export header
#[test]
fn test_graph_name_in_header() {
    let mut session = Session::new("Deps");
    let mut out = Vec::new();
    session.handle_line("print", &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("digraph Deps {\n"));
}

/// Graph-level invariants hold through the public API
#[test]
fn test_registry_invariants() {
    let mut graph = Graph::new();

    // Duplicate titles land under distinct ids
    let first = graph.add_node("Alice").unwrap();
    let second = graph.add_node("Alice").unwrap();
    assert_ne!(first, second);
    assert_eq!(graph.node_count(), 2);

    // Unknown endpoints are rejected before any edge is created
    let err = graph.add_edge(&first, "zz", "knows").unwrap_err();
    assert_eq!(err, GraphError::UnknownNode { id: "zz".to_string() });
    assert_eq!(graph.edge_count(), 0);
}
