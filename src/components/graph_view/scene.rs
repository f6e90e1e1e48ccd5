//! Screen-space draw list computed from a graph, independent of the canvas.

use std::collections::HashMap;

use crate::graph::{Graph, GraphKind};

use super::camera::Camera;
use super::scale::Normalizer;
use super::settings::RendererSettings;

/// A node circle in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSprite {
	/// Id of the node in the graph.
	pub id: String,
	/// Centre x in CSS pixels.
	pub x: f64,
	/// Centre y in CSS pixels.
	pub y: f64,
	/// Radius after zoom scaling.
	pub radius: f64,
	/// Fill color.
	pub color: String,
	/// Drawn with a ring on top of the other nodes.
	pub hovered: bool,
}

/// A straight edge trimmed to the rims of its endpoint circles.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSprite {
	/// Start point on the source rim.
	pub from: (f64, f64),
	/// End point, at the target rim or the arrow base.
	pub to: (f64, f64),
	/// Stroke width after zoom scaling.
	pub width: f64,
	/// Stroke and arrow color.
	pub color: String,
	/// Tip, then the two back corners.
	pub arrow: Option<[(f64, f64); 3]>,
}

/// Label text anchored right of its node.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSprite {
	/// Text to draw.
	pub text: String,
	/// Baseline start x.
	pub x: f64,
	/// Baseline y.
	pub y: f64,
}

/// Everything one frame draws, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Drawn first.
	pub edges: Vec<EdgeSprite>,
	/// Drawn over edges; a hovered node comes last.
	pub nodes: Vec<NodeSprite>,
	/// Drawn over everything.
	pub labels: Vec<LabelSprite>,
}

impl Scene {
	/// Lays out the visible part of `graph` for one frame.
	pub fn build(
		graph: &Graph,
		normalizer: &Normalizer,
		camera: &Camera,
		settings: &RendererSettings,
		hovered: Option<&str>,
	) -> Self {
		let zoom_scale = camera.k.sqrt();
		let mut scene = Scene::default();
		let mut placed: HashMap<&str, (f64, f64, f64)> = HashMap::new();
		let mut hovered_node = None;

		for node in graph.nodes().filter(|n| !n.attributes.hidden) {
			let attrs = node.attributes;
			let (nx, ny) = normalizer.apply(attrs.x, attrs.y);
			let (x, y) = camera.apply(nx, ny);
			let radius = attrs.size.unwrap_or(settings.default_node_size) * zoom_scale;
			placed.insert(node.id, (x, y, radius));

			let is_hovered = hovered == Some(node.id);
			let sprite = NodeSprite {
				id: node.id.to_string(),
				x,
				y,
				radius,
				color: attrs
					.color
					.clone()
					.unwrap_or_else(|| settings.default_node_color.clone()),
				hovered: is_hovered,
			};
			let label = attrs.label.as_ref().filter(|_| {
				settings.render_labels
					&& (is_hovered || radius >= settings.label_rendered_size_threshold)
			});
			let label = label.map(|text| LabelSprite {
				text: text.clone(),
				x: x + radius + 3.0,
				y: y + settings.label_size / 3.0,
			});

			// The hovered node and its label go on top
			if is_hovered {
				hovered_node = Some((sprite, label));
			} else {
				scene.nodes.push(sprite);
				scene.labels.extend(label);
			}
		}
		if let Some((sprite, label)) = hovered_node {
			scene.nodes.push(sprite);
			scene.labels.extend(label);
		}

		let arrows = graph.kind() == GraphKind::Directed && settings.render_edge_arrows;
		for edge in graph.edges().filter(|e| !e.attributes.hidden) {
			let (Some(&(x1, y1, r1)), Some(&(x2, y2, r2))) =
				(placed.get(edge.source), placed.get(edge.target))
			else {
				continue;
			};
			let (dx, dy) = (x2 - x1, y2 - y1);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < 0.001 {
				continue;
			}

			let width = edge.attributes.size.unwrap_or(settings.default_edge_size) * zoom_scale;
			let arrow_size = if arrows { (width * 2.5).max(6.0) } else { 0.0 };
			let (ux, uy) = (dx / dist, dy / dist);
			let tip = (x2 - ux * r2, y2 - uy * r2);
			let arrow = arrows.then(|| {
				let (back_x, back_y) = (tip.0 - ux * arrow_size, tip.1 - uy * arrow_size);
				let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
				[tip, (back_x + px, back_y + py), (back_x - px, back_y - py)]
			});

			scene.edges.push(EdgeSprite {
				from: (x1 + ux * r1, y1 + uy * r1),
				to: (tip.0 - ux * arrow_size, tip.1 - uy * arrow_size),
				width,
				color: edge
					.attributes
					.color
					.clone()
					.unwrap_or_else(|| settings.default_edge_color.clone()),
				arrow,
			});
		}

		scene
	}

	/// Topmost node under the screen point, if any.
	pub fn node_at(&self, x: f64, y: f64, margin: f64) -> Option<&str> {
		self.nodes
			.iter()
			.rev()
			.find(|n| {
				let (dx, dy) = (n.x - x, n.y - y);
				(dx * dx + dy * dy).sqrt() <= n.radius + margin
			})
			.map(|n| n.id.as_str())
	}
}
