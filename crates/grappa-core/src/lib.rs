//! Grappa Core — content-addressed graph registry and DOT export

pub mod model;
pub mod hash;
pub mod ident;
pub mod graph;
pub mod dot;
pub mod error;
pub mod session;


pub use model::{Node, Edge};
pub use graph::Graph;
pub use error::GraphError;
pub use ident::shortest_free_id;
pub use session::{Command, CommandError, Outcome, Session};
