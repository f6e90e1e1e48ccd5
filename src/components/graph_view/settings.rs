/// Rendering options for a [`Renderer`](super::Renderer).
///
/// Sizes are CSS pixels at zoom 1. Colors are any CSS color string.
#[derive(Clone, Debug, PartialEq)]
pub struct RendererSettings {
	/// Fill behind the graph; `None` leaves the canvas transparent.
	pub background: Option<String>,
	/// Fill for nodes without a color.
	pub default_node_color: String,
	/// Radius for nodes without a size.
	pub default_node_size: f64,
	/// Stroke for edges without a color.
	pub default_edge_color: String,
	/// Width for edges without a size.
	pub default_edge_size: f64,
	/// Draw node labels at all.
	pub render_labels: bool,
	/// Draw arrow heads on edges of directed graphs.
	pub render_edge_arrows: bool,
	/// Font family for labels.
	pub label_font: String,
	/// Label font size in pixels.
	pub label_size: f64,
	/// Label fill color.
	pub label_color: String,
	/// Labels of nodes rendered smaller than this radius are skipped unless hovered.
	pub label_rendered_size_threshold: f64,
	/// Space kept free around the fitted graph.
	pub padding: f64,
	/// Lower zoom bound.
	pub min_zoom: f64,
	/// Upper zoom bound.
	pub max_zoom: f64,
	/// Zoom multiplier applied per wheel notch.
	pub zoom_step: f64,
	/// Extra pick distance around nodes for hovering.
	pub hover_margin: f64,
	/// Accept a container with no width or height instead of failing.
	pub allow_invalid_container: bool,
}

impl Default for RendererSettings {
	fn default() -> Self {
		Self {
			background: Some("#ffffff".into()),
			default_node_color: "#999".into(),
			default_node_size: 4.0,
			default_edge_color: "#ccc".into(),
			default_edge_size: 1.0,
			render_labels: true,
			render_edge_arrows: true,
			label_font: "Arial".into(),
			label_size: 14.0,
			label_color: "#000".into(),
			label_rendered_size_threshold: 6.0,
			padding: 30.0,
			min_zoom: 0.1,
			max_zoom: 10.0,
			zoom_step: 1.1,
			hover_margin: 4.0,
			allow_invalid_container: false,
		}
	}
}

impl RendererSettings {
	/// CSS font shorthand used for node labels.
	pub fn label_css_font(&self) -> String {
		format!("{}px {}", self.label_size, self.label_font)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_keep_zoom_bounds_ordered() {
		let settings = RendererSettings::default();
		assert!(settings.min_zoom < 1.0 && settings.max_zoom > 1.0);
		assert!(settings.zoom_step > 1.0);
		assert!(!settings.allow_invalid_container);
	}

	#[test]
	fn label_font_shorthand() {
		let settings = RendererSettings {
			label_size: 12.0,
			label_font: "sans-serif".into(),
			..RendererSettings::default()
		};
		assert_eq!(settings.label_css_font(), "12px sans-serif");
	}
}
