use thiserror::Error;

use super::store::EdgeKey;

/// Errors raised by [`Graph`](super::Graph) mutations and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// A node with this identifier is already stored.
	#[error("node \"{0}\" already exists")]
	DuplicateNode(String),

	/// The referenced node is not in the store.
	#[error("node \"{0}\" not found")]
	NodeNotFound(String),

	/// An edge between these endpoints is already stored.
	#[error("edge \"{from}\" -> \"{to}\" already exists")]
	DuplicateEdge {
		/// Source id of the rejected edge.
		from: String,
		/// Target id of the rejected edge.
		to: String,
	},

	/// The referenced edge is not in the store.
	#[error("edge {0} not found")]
	EdgeNotFound(EdgeKey),

	/// The store was created with self loops disabled.
	#[error("self loop on node \"{0}\" is not allowed")]
	SelfLoopNotAllowed(String),
}
