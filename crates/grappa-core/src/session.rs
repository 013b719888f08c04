//! Line-command session: tokenizing, dispatch, and reporting

use crate::dot;
use crate::graph::Graph;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Failures local to command parsing. Registry failures come from
/// `GraphError` and are reported the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("wrong number of tokens")]
    MissingTokens,
    #[error("unknown command {0}")]
    UnknownCommand(String),
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Node { title: String },
    Edge { src: String, dst: String, title: String },
    Print,
    Save { filename: String },
    Exit,
}

impl Command {
    /// Tokenize a line on whitespace and classify it. Title words are
    /// re-joined with single spaces.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            return Err(CommandError::MissingTokens);
        };
        match keyword {
            "node" => {
                if tokens.len() < 2 {
                    return Err(CommandError::MissingTokens);
                }
                Ok(Command::Node {
                    title: tokens[1..].join(" "),
                })
            }
            "edge" => {
                if tokens.len() < 3 {
                    return Err(CommandError::MissingTokens);
                }
                Ok(Command::Edge {
                    src: tokens[1].to_string(),
                    dst: tokens[2].to_string(),
                    title: tokens[3..].join(" "),
                })
            }
            "print" => Ok(Command::Print),
            "save" => {
                if tokens.len() < 2 {
                    return Err(CommandError::MissingTokens);
                }
                Ok(Command::Save {
                    filename: tokens[1].to_string(),
                })
            }
            "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// One interactive session: a graph plus the name used in exports.
///
/// Replies and exports go to the writer passed in by the caller, so the
/// session can run over stdin/stdout or over in-memory buffers alike.
pub struct Session {
    graph: Graph,
    graph_name: String,
}

impl Session {
    pub fn new(graph_name: impl Into<String>) -> Self {
        Session {
            graph: Graph::new(),
            graph_name: graph_name.into(),
        }
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Process every line of `input` until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?, &mut out)? == Outcome::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Process a single line. Recoverable failures are reported to `out`
    /// and leave the graph untouched.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Outcome> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, " err > {}", err)?;
                return Ok(Outcome::Continue);
            }
        };

        match command {
            Command::Node { title } => match self.graph.add_node(&title) {
                Ok(id) => writeln!(out, " > new node: {}", id)?,
                Err(err) => writeln!(out, " err > {}", err)?,
            },
            Command::Edge { src, dst, title } => {
                match self.graph.add_edge(&src, &dst, &title) {
                    Ok(id) => writeln!(out, " > new edge: {}", id)?,
                    Err(err) => writeln!(out, " err > {}", err)?,
                }
            }
            Command::Print => dot::write_dot(&self.graph, &self.graph_name, out)?,
            Command::Save { filename } => {
                match dot::save_dot(&self.graph, &self.graph_name, Path::new(&filename)) {
                    Ok(()) => writeln!(out, " > saved to {}", filename)?,
                    Err(err) => writeln!(out, " err > {}", err)?,
                }
            }
            Command::Exit => {
                writeln!(out, " > exit")?;
                return Ok(Outcome::Exit);
            }
        }
        Ok(Outcome::Continue)
    }
}
