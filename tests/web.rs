//! Browser tests for the renderer, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use graph_canvas::graph::{EdgeAttributes, Graph, NodeAttributes};
use graph_canvas::{Camera, RenderError, Renderer, RendererSettings, sample_graph};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, MouseEvent, MouseEventInit, WheelEvent, WheelEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str, width: u32, height: u32) -> HtmlElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
	el.set_id(id);
	el.style()
		.set_property("width", &format!("{width}px"))
		.unwrap();
	el.style()
		.set_property("height", &format!("{height}px"))
		.unwrap();
	document.body().unwrap().append_child(&el).unwrap();
	el
}

fn triangle() -> Graph {
	let mut graph = Graph::new();
	graph.add_node("a", NodeAttributes::at(0.0, 0.0).size(6.0)).unwrap();
	graph.add_node("b", NodeAttributes::at(2.0, 0.0).size(6.0)).unwrap();
	graph.add_node("c", NodeAttributes::at(1.0, 2.0).size(6.0)).unwrap();
	graph.add_edge("a", "b", EdgeAttributes::new()).unwrap();
	graph.add_edge("b", "c", EdgeAttributes::new()).unwrap();
	graph
}

/// Sends a mouse event to the canvas at a canvas-relative point.
fn mouse(renderer: &Renderer, kind: &str, x: f64, y: f64) {
	let canvas = renderer.canvas();
	let rect = canvas.get_bounding_client_rect();
	let init = MouseEventInit::new();
	init.set_client_x((rect.left() + x).round() as i32);
	init.set_client_y((rect.top() + y).round() as i32);
	let ev = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
	canvas.dispatch_event(&ev).unwrap();
}

fn wheel(renderer: &Renderer, x: f64, y: f64, delta_y: f64) {
	let canvas = renderer.canvas();
	let rect = canvas.get_bounding_client_rect();
	let init = WheelEventInit::new();
	init.set_client_x((rect.left() + x).round() as i32);
	init.set_client_y((rect.top() + y).round() as i32);
	init.set_delta_y(delta_y);
	init.set_cancelable(true);
	let ev = WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
	canvas.dispatch_event(&ev).unwrap();
}

fn hovered_node(renderer: &Renderer) -> Option<String> {
	renderer
		.scene()
		.nodes
		.iter()
		.find(|n| n.hovered)
		.map(|n| n.id.clone())
}

#[wasm_bindgen_test]
fn mounts_sample_graph_and_draws() {
	let el = container("container", 400, 300);
	let renderer =
		Renderer::mount(sample_graph().unwrap(), "container", RendererSettings::default())
			.unwrap();

	assert_eq!(el.child_element_count(), 1);
	assert_eq!(renderer.canvas().client_width(), 400);
	{
		let scene = renderer.scene();
		assert_eq!(scene.nodes.len(), 2);
		assert_eq!(scene.edges.len(), 1);
	}

	renderer.kill();
	assert_eq!(el.child_element_count(), 0);
	el.remove();
}

#[wasm_bindgen_test]
fn missing_mount_point_fails() {
	let err = Renderer::mount(
		sample_graph().unwrap(),
		"no-such-element",
		RendererSettings::default(),
	)
	.err()
	.unwrap();
	assert_eq!(err, RenderError::MountNotFound("no-such-element".into()));
}

#[wasm_bindgen_test]
fn non_html_mount_point_is_a_dom_error() {
	let document = web_sys::window().unwrap().document().unwrap();
	let svg = document
		.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
		.unwrap();
	svg.set_id("svg-mount");
	document.body().unwrap().append_child(&svg).unwrap();

	let err = Renderer::mount(
		sample_graph().unwrap(),
		"svg-mount",
		RendererSettings::default(),
	)
	.err()
	.unwrap();
	assert!(matches!(err, RenderError::Dom(_)));
	svg.remove();
}

#[wasm_bindgen_test]
fn zero_sized_container_is_rejected_unless_allowed() {
	let el = container("flat", 200, 0);
	let err = Renderer::new(sample_graph().unwrap(), el.clone(), RendererSettings::default())
		.err()
		.unwrap();
	assert!(matches!(err, RenderError::InvalidContainer { .. }));
	assert_eq!(el.child_element_count(), 0);

	let settings = RendererSettings {
		allow_invalid_container: true,
		..RendererSettings::default()
	};
	let renderer = Renderer::new(sample_graph().unwrap(), el.clone(), settings).unwrap();
	assert_eq!(el.child_element_count(), 1);
	drop(renderer);
	el.remove();
}

#[wasm_bindgen_test]
fn set_graph_redraws_and_clears_stale_hover() {
	let el = container("rebind", 400, 300);
	let renderer =
		Renderer::new(sample_graph().unwrap(), el.clone(), RendererSettings::default()).unwrap();

	let (x, y) = {
		let scene = renderer.scene();
		let two = scene.nodes.iter().find(|n| n.id == "2").unwrap();
		(two.x, two.y)
	};
	mouse(&renderer, "mousemove", x, y);
	assert_eq!(hovered_node(&renderer).as_deref(), Some("2"));

	renderer.set_graph(triangle());
	assert_eq!(renderer.graph().order(), 3);
	assert_eq!(renderer.scene().nodes.len(), 3);
	assert_eq!(renderer.scene().edges.len(), 2);
	assert_eq!(hovered_node(&renderer), None);
	assert_eq!(
		renderer.canvas().style().get_property_value("cursor").unwrap(),
		"grab"
	);

	// Node "2" returning must not come back hovered
	renderer.set_graph(sample_graph().unwrap());
	assert_eq!(hovered_node(&renderer), None);

	drop(renderer);
	el.remove();
}

#[wasm_bindgen_test]
fn resize_follows_container() {
	let el = container("resizable", 400, 300);
	let renderer =
		Renderer::new(sample_graph().unwrap(), el.clone(), RendererSettings::default()).unwrap();
	assert_eq!(renderer.canvas().client_width(), 400);

	el.style().set_property("width", "250px").unwrap();
	renderer.resize().unwrap();
	assert_eq!(renderer.canvas().client_width(), 250);
	assert!(renderer.scene().nodes.iter().all(|n| n.x <= 250.0));

	el.style().set_property("height", "0px").unwrap();
	assert!(matches!(
		renderer.resize(),
		Err(RenderError::InvalidContainer { .. })
	));

	drop(renderer);
	el.remove();
}

#[wasm_bindgen_test]
fn wheel_pan_and_reset_camera() {
	let el = container("camera", 400, 300);
	let renderer =
		Renderer::new(sample_graph().unwrap(), el.clone(), RendererSettings::default()).unwrap();
	assert_eq!(renderer.camera(), Camera::default());

	// Horizontal-only scrolling leaves the zoom alone
	wheel(&renderer, 200.0, 150.0, 0.0);
	assert_eq!(renderer.camera(), Camera::default());

	wheel(&renderer, 200.0, 150.0, -100.0);
	assert!(renderer.camera().k > 1.0);

	// Drag the background (the centre is empty between the two nodes' rims)
	let before = renderer.camera();
	mouse(&renderer, "mousedown", 200.0, 150.0);
	mouse(&renderer, "mousemove", 230.0, 140.0);
	mouse(&renderer, "mouseup", 230.0, 140.0);
	let after = renderer.camera();
	assert!((after.x - before.x - 30.0).abs() < 1e-9);
	assert!((after.y - before.y + 10.0).abs() < 1e-9);
	assert_eq!(after.k, before.k);

	let zoomed = renderer.scene().nodes.clone();
	renderer.reset_camera();
	assert_eq!(renderer.camera(), Camera::default());
	assert_ne!(renderer.scene().nodes, zoomed);

	let reset = renderer.scene().nodes.clone();
	renderer.refresh();
	assert_eq!(renderer.scene().nodes, reset);

	drop(renderer);
	el.remove();
}
