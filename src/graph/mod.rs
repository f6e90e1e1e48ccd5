//! In-memory graph store with visual attributes on nodes and edges.

mod attributes;
mod error;
mod store;

pub use attributes::{EdgeAttributes, NodeAttributes};
pub use error::GraphError;
pub use store::{EdgeKey, EdgeRef, Graph, GraphKind, GraphOptions, NodeRef};
