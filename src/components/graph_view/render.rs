use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::Scene;
use super::settings::RendererSettings;

/// Clears the canvas and draws `scene` on it.
pub fn paint(
	scene: &Scene,
	ctx: &CanvasRenderingContext2d,
	settings: &RendererSettings,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	if let Some(background) = &settings.background {
		ctx.set_fill_style_str(background);
		ctx.fill_rect(0.0, 0.0, width, height);
	}
	draw_edges(scene, ctx);
	draw_nodes(scene, ctx);
	draw_labels(scene, ctx, settings);
}

fn draw_edges(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	for edge in &scene.edges {
		ctx.set_stroke_style_str(&edge.color);
		ctx.set_line_width(edge.width);
		ctx.begin_path();
		ctx.move_to(edge.from.0, edge.from.1);
		ctx.line_to(edge.to.0, edge.to.1);
		ctx.stroke();

		if let Some([tip, left, right]) = edge.arrow {
			ctx.set_fill_style_str(&edge.color);
			ctx.begin_path();
			ctx.move_to(tip.0, tip.1);
			ctx.line_to(left.0, left.1);
			ctx.line_to(right.0, right.1);
			ctx.close_path();
			ctx.fill();
		}
	}
}

fn draw_nodes(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	for node in &scene.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();

		if node.hovered {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, node.radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(0, 0, 0, 0.6)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}
	}
}

fn draw_labels(scene: &Scene, ctx: &CanvasRenderingContext2d, settings: &RendererSettings) {
	if scene.labels.is_empty() {
		return;
	}
	ctx.set_font(&settings.label_css_font());
	ctx.set_fill_style_str(&settings.label_color);
	for label in &scene.labels {
		let _ = ctx.fill_text(&label.text, label.x, label.y);
	}
}
