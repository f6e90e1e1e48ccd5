/// Visual attributes of a node.
///
/// Positions are in graph space; the renderer fits them into the viewport.
/// `size` and `color` fall back to the renderer settings when unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeAttributes {
	/// Text drawn next to the node.
	pub label: Option<String>,
	/// Graph-space x.
	pub x: f64,
	/// Graph-space y, growing upwards.
	pub y: f64,
	/// Radius in pixels at zoom 1.
	pub size: Option<f64>,
	/// CSS fill color.
	pub color: Option<String>,
	/// Skipped by the renderer, along with its edges.
	pub hidden: bool,
}

impl NodeAttributes {
	/// Attributes for a node placed at `(x, y)`.
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			..Self::default()
		}
	}

	/// Sets the label.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets the radius.
	pub fn size(mut self, size: f64) -> Self {
		self.size = Some(size);
		self
	}

	/// Sets the fill color.
	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = Some(color.into());
		self
	}

	/// Hides or shows the node.
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}
}

/// Visual attributes of an edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeAttributes {
	/// Line width in pixels at zoom 1.
	pub size: Option<f64>,
	/// CSS stroke color.
	pub color: Option<String>,
	/// Kept with the edge; not drawn.
	pub label: Option<String>,
	/// Skipped by the renderer.
	pub hidden: bool,
}

impl EdgeAttributes {
	/// Attributes with every field unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the line width.
	pub fn size(mut self, size: f64) -> Self {
		self.size = Some(size);
		self
	}

	/// Sets the stroke color.
	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = Some(color.into());
		self
	}

	/// Sets the label.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Hides or shows the edge.
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_builder_sets_fields() {
		let attrs = NodeAttributes::at(1.0, -2.0)
			.label("Node 1")
			.size(10.0)
			.color("blue");
		assert_eq!(attrs.x, 1.0);
		assert_eq!(attrs.y, -2.0);
		assert_eq!(attrs.label.as_deref(), Some("Node 1"));
		assert_eq!(attrs.size, Some(10.0));
		assert_eq!(attrs.color.as_deref(), Some("blue"));
		assert!(!attrs.hidden);
	}

	#[test]
	fn edge_defaults_are_empty() {
		let attrs = EdgeAttributes::new();
		assert_eq!(attrs.size, None);
		assert_eq!(attrs.color, None);
		assert!(!attrs.hidden);
	}
}
