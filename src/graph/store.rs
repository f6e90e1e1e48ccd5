use std::collections::HashMap;
use std::fmt;

use log::debug;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef as _, IntoEdgeReferences};

use super::attributes::{EdgeAttributes, NodeAttributes};
use super::error::GraphError;

/// Whether edges have a direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphKind {
	/// `a -> b` and `b -> a` are distinct edges.
	#[default]
	Directed,
	/// An edge joins its endpoints in both directions.
	Undirected,
}

/// Construction options for a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphOptions {
	/// Edge direction semantics, fixed for the life of the graph.
	pub kind: GraphKind,
	/// Accept edges whose source and target are the same node.
	pub allow_self_loops: bool,
}

impl Default for GraphOptions {
	fn default() -> Self {
		Self {
			kind: GraphKind::Directed,
			allow_self_loops: true,
		}
	}
}

/// Store-generated identifier of an edge.
///
/// Keys stay valid while their edge exists. The key of a dropped edge may be
/// handed out again to a later edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(EdgeIndex);

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0.index())
	}
}

/// Borrowed view of a stored node.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
	/// Caller-chosen identifier.
	pub id: &'a str,
	/// Stored attributes.
	pub attributes: &'a NodeAttributes,
}

/// Borrowed view of a stored edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgeRef<'a> {
	/// Key returned by [`Graph::add_edge`].
	pub key: EdgeKey,
	/// Id of the node the edge was added from.
	pub source: &'a str,
	/// Id of the node the edge was added to.
	pub target: &'a str,
	/// Stored attributes.
	pub attributes: &'a EdgeAttributes,
}

#[derive(Clone, Debug)]
struct NodeEntry {
	id: String,
	attributes: NodeAttributes,
}

/// A simple graph (at most one edge per endpoint pair) owning its nodes and
/// edges together with their attributes.
///
/// Nodes are keyed by a caller-chosen string, edges by an [`EdgeKey`] handed
/// out by [`Graph::add_edge`]. Edges are stored with the direction they were
/// added in; undirected graphs only change how duplicates are detected.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	options: GraphOptions,
	graph: StableDiGraph<NodeEntry, EdgeAttributes>,
	node_index: HashMap<String, NodeIndex>,
}

impl Graph {
	/// Empty directed graph allowing self loops.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty graph with the given kind and self-loop policy.
	pub fn with_options(options: GraphOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	/// Directed or undirected.
	pub fn kind(&self) -> GraphKind {
		self.options.kind
	}

	/// Number of nodes.
	pub fn order(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of edges.
	pub fn size(&self) -> usize {
		self.graph.edge_count()
	}

	/// True when the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.graph.node_count() == 0
	}

	/// True when a node with this id is stored.
	pub fn has_node(&self, id: &str) -> bool {
		self.node_index.contains_key(id)
	}

	/// True when [`edge_between`](Self::edge_between) finds an edge.
	pub fn has_edge(&self, source: &str, target: &str) -> bool {
		self.edge_between(source, target).is_some()
	}

	/// Inserts a node, failing if the identifier is taken.
	pub fn add_node(
		&mut self,
		id: impl Into<String>,
		attributes: NodeAttributes,
	) -> Result<(), GraphError> {
		let id = id.into();
		if self.node_index.contains_key(&id) {
			return Err(GraphError::DuplicateNode(id));
		}
		debug!("add node {id} at ({}, {})", attributes.x, attributes.y);
		let idx = self.graph.add_node(NodeEntry {
			id: id.clone(),
			attributes,
		});
		self.node_index.insert(id, idx);
		Ok(())
	}

	/// Inserts an edge between two stored nodes and returns its key.
	pub fn add_edge(
		&mut self,
		source: &str,
		target: &str,
		attributes: EdgeAttributes,
	) -> Result<EdgeKey, GraphError> {
		let a = self.index_of(source)?;
		let b = self.index_of(target)?;
		if a == b && !self.options.allow_self_loops {
			return Err(GraphError::SelfLoopNotAllowed(source.to_string()));
		}
		if self.find_edge(a, b).is_some() {
			return Err(GraphError::DuplicateEdge {
				from: source.to_string(),
				to: target.to_string(),
			});
		}

		let key = EdgeKey(self.graph.add_edge(a, b, attributes));
		debug!("add edge {key}: {source} -> {target}");
		Ok(key)
	}

	/// Looks up a node by id.
	pub fn node(&self, id: &str) -> Option<NodeRef<'_>> {
		let &idx = self.node_index.get(id)?;
		Some(Self::node_ref(&self.graph[idx]))
	}

	/// Looks up an edge by key.
	pub fn edge(&self, key: EdgeKey) -> Option<EdgeRef<'_>> {
		let attributes = self.graph.edge_weight(key.0)?;
		let (a, b) = self.graph.edge_endpoints(key.0)?;
		Some(EdgeRef {
			key,
			source: &self.graph[a].id,
			target: &self.graph[b].id,
			attributes,
		})
	}

	/// The edge joining `source` to `target`. Undirected graphs ignore order.
	pub fn edge_between(&self, source: &str, target: &str) -> Option<EdgeRef<'_>> {
		let a = *self.node_index.get(source)?;
		let b = *self.node_index.get(target)?;
		self.edge(EdgeKey(self.find_edge(a, b)?))
	}

	/// All nodes, in no meaningful order.
	pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
		self.graph
			.node_indices()
			.map(|idx| Self::node_ref(&self.graph[idx]))
	}

	/// All edges, in no meaningful order.
	pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
		let graph = &self.graph;
		graph.edge_references().map(move |e| EdgeRef {
			key: EdgeKey(e.id()),
			source: &graph[e.source()].id,
			target: &graph[e.target()].id,
			attributes: e.weight(),
		})
	}

	/// Applies `update` to the attributes of node `id`.
	pub fn update_node(
		&mut self,
		id: &str,
		update: impl FnOnce(&mut NodeAttributes),
	) -> Result<(), GraphError> {
		let idx = self.index_of(id)?;
		update(&mut self.graph[idx].attributes);
		Ok(())
	}

	/// Applies `update` to the attributes of edge `key`.
	pub fn update_edge(
		&mut self,
		key: EdgeKey,
		update: impl FnOnce(&mut EdgeAttributes),
	) -> Result<(), GraphError> {
		let attributes = self
			.graph
			.edge_weight_mut(key.0)
			.ok_or(GraphError::EdgeNotFound(key))?;
		update(attributes);
		Ok(())
	}

	/// Removes node `id` and every edge touching it.
	pub fn drop_node(&mut self, id: &str) -> Result<NodeAttributes, GraphError> {
		let idx = self
			.node_index
			.remove(id)
			.ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
		let entry = self
			.graph
			.remove_node(idx)
			.ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
		debug!("drop node {id}");
		Ok(entry.attributes)
	}

	/// Removes one edge.
	pub fn drop_edge(&mut self, key: EdgeKey) -> Result<EdgeAttributes, GraphError> {
		let attributes = self
			.graph
			.remove_edge(key.0)
			.ok_or(GraphError::EdgeNotFound(key))?;
		debug!("drop edge {key}");
		Ok(attributes)
	}

	/// Removes every node and edge.
	pub fn clear(&mut self) {
		self.graph.clear();
		self.node_index.clear();
	}

	fn index_of(&self, id: &str) -> Result<NodeIndex, GraphError> {
		self.node_index
			.get(id)
			.copied()
			.ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
	}

	fn find_edge(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
		match self.options.kind {
			GraphKind::Directed => self.graph.find_edge(a, b),
			GraphKind::Undirected => self.graph.find_edge_undirected(a, b).map(|(e, _)| e),
		}
	}

	fn node_ref(entry: &NodeEntry) -> NodeRef<'_> {
		NodeRef {
			id: &entry.id,
			attributes: &entry.attributes,
		}
	}
}
