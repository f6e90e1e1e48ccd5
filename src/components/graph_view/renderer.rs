use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent,
	WheelEvent,
};

use super::camera::{Camera, PanState};
use super::error::RenderError;
use super::render;
use super::scale::{Extent, Normalizer};
use super::scene::Scene;
use super::settings::RendererSettings;
use crate::graph::Graph;

struct RendererState {
	graph: Graph,
	settings: RendererSettings,
	container: HtmlElement,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
	pixel_ratio: f64,
	camera: Camera,
	pan: PanState,
	hovered: Option<String>,
	scene: Scene,
}

impl RendererState {
	fn render(&mut self) {
		let normalizer = Normalizer::fit(
			Extent::of_graph(&self.graph),
			self.width,
			self.height,
			self.settings.padding,
		);
		self.scene = Scene::build(
			&self.graph,
			&normalizer,
			&self.camera,
			&self.settings,
			self.hovered.as_deref(),
		);
		let r = self.pixel_ratio;
		let _ = self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
		render::paint(&self.scene, &self.ctx, &self.settings, self.width, self.height);
	}

	/// Re-reads the container size and resizes the canvas backing store.
	fn sync_size(&mut self) -> Result<(), RenderError> {
		let (width, height) = (
			self.container.client_width() as f64,
			self.container.client_height() as f64,
		);
		if (width <= 0.0 || height <= 0.0) && !self.settings.allow_invalid_container {
			return Err(RenderError::InvalidContainer { width, height });
		}
		self.width = width;
		self.height = height;
		self.pixel_ratio = web_sys::window()
			.map(|w| w.device_pixel_ratio())
			.filter(|r| *r > 0.0)
			.unwrap_or(1.0);

		self.canvas.set_width((width * self.pixel_ratio) as u32);
		self.canvas.set_height((height * self.pixel_ratio) as u32);
		let style = self.canvas.style();
		style.set_property("width", &format!("{width}px"))?;
		style.set_property("height", &format!("{height}px"))?;
		Ok(())
	}

	fn pointer(&self, ev: &MouseEvent) -> (f64, f64) {
		let rect = self.canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	}

	fn set_hover(&mut self, node: Option<String>) -> bool {
		if self.hovered == node {
			return false;
		}
		let cursor = if node.is_some() { "pointer" } else { "grab" };
		let _ = self.canvas.style().set_property("cursor", cursor);
		self.hovered = node;
		true
	}
}

struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

/// Draws a [`Graph`] on a canvas placed inside a container element.
///
/// The first frame is drawn by the constructor. Afterwards the renderer
/// redraws on pan, zoom, hover and window resize, and whenever
/// [`refresh`](Self::refresh) is called. Dropping the renderer detaches its
/// listeners and removes the canvas.
pub struct Renderer {
	state: Rc<RefCell<RendererState>>,
	listeners: Vec<Listener>,
}

impl Renderer {
	/// Attaches to `container` and draws `graph` once.
	pub fn new(
		graph: Graph,
		container: HtmlElement,
		settings: RendererSettings,
	) -> Result<Self, RenderError> {
		let window = web_sys::window().ok_or(RenderError::NoWindow)?;
		let document = window.document().ok_or(RenderError::NoDocument)?;

		let canvas: HtmlCanvasElement = document
			.create_element("canvas")?
			.dyn_into()
			.map_err(|_| RenderError::Dom("created element is not a canvas".into()))?;
		canvas.set_class_name("graph-canvas");
		let style = canvas.style();
		style.set_property("display", "block")?;
		style.set_property("cursor", "grab")?;

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(RenderError::Context)?
			.dyn_into()
			.map_err(|_| RenderError::Context)?;

		let mut state = RendererState {
			graph,
			settings,
			container,
			canvas,
			ctx,
			width: 0.0,
			height: 0.0,
			pixel_ratio: 1.0,
			camera: Camera::default(),
			pan: PanState::default(),
			hovered: None,
			scene: Scene::default(),
		};
		state.sync_size()?;
		state.container.append_child(&state.canvas)?;
		state.render();
		info!(
			"renderer attached: {} nodes, {} edges, {}x{}",
			state.graph.order(),
			state.graph.size(),
			state.width,
			state.height
		);

		let canvas_target: EventTarget = state.canvas.clone().into();
		let mut renderer = Self {
			state: Rc::new(RefCell::new(state)),
			listeners: Vec::new(),
		};
		renderer.bind_mouse(&canvas_target)?;
		renderer.bind_resize(window.into())?;
		Ok(renderer)
	}

	/// Looks up the mount element by id in the current document.
	pub fn mount(
		graph: Graph,
		container_id: &str,
		settings: RendererSettings,
	) -> Result<Self, RenderError> {
		let document = web_sys::window()
			.ok_or(RenderError::NoWindow)?
			.document()
			.ok_or(RenderError::NoDocument)?;
		let container: HtmlElement = document
			.get_element_by_id(container_id)
			.ok_or_else(|| RenderError::MountNotFound(container_id.to_string()))?
			.dyn_into()
			.map_err(|_| RenderError::Dom("mount element is not an HtmlElement".into()))?;
		Self::new(graph, container, settings)
	}

	/// Redraws the current graph.
	pub fn refresh(&self) {
		self.state.borrow_mut().render();
	}

	/// Picks up a new container size and redraws.
	pub fn resize(&self) -> Result<(), RenderError> {
		let mut state = self.state.borrow_mut();
		state.sync_size()?;
		state.render();
		Ok(())
	}

	/// The graph being drawn.
	pub fn graph(&self) -> Ref<'_, Graph> {
		Ref::map(self.state.borrow(), |s| &s.graph)
	}

	/// Replaces the drawn graph and redraws.
	pub fn set_graph(&self, graph: Graph) {
		let mut state = self.state.borrow_mut();
		let stale_hover = state
			.hovered
			.as_deref()
			.is_some_and(|id| !graph.has_node(id));
		if stale_hover {
			state.set_hover(None);
		}
		debug!("renderer graph replaced: {} nodes", graph.order());
		state.graph = graph;
		state.render();
	}

	/// Current pan and zoom.
	pub fn camera(&self) -> Camera {
		self.state.borrow().camera
	}

	/// Returns to the fitted view and redraws.
	pub fn reset_camera(&self) {
		let mut state = self.state.borrow_mut();
		state.camera = Camera::default();
		state.render();
	}

	/// The draw list of the last frame.
	pub fn scene(&self) -> Ref<'_, Scene> {
		Ref::map(self.state.borrow(), |s| &s.scene)
	}

	/// The canvas inserted into the container.
	pub fn canvas(&self) -> HtmlCanvasElement {
		self.state.borrow().canvas.clone()
	}

	/// Detaches from the document.
	pub fn kill(self) {
		info!("renderer killed");
	}

	fn listen(
		&mut self,
		target: &EventTarget,
		event: &'static str,
		callback: impl FnMut(Event) + 'static,
	) -> Result<(), RenderError> {
		let callback = Closure::<dyn FnMut(Event)>::new(callback);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		self.listeners.push(Listener {
			target: target.clone(),
			event,
			callback,
		});
		Ok(())
	}

	fn bind_mouse(&mut self, canvas: &EventTarget) -> Result<(), RenderError> {
		let state = self.state.clone();
		self.listen(canvas, "mousedown", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let Ok(mut s) = state.try_borrow_mut() else {
				return;
			};
			let (x, y) = s.pointer(ev);
			let camera = s.camera;
			s.pan.begin(x, y, &camera);
			let _ = s.canvas.style().set_property("cursor", "grabbing");
		})?;

		let state = self.state.clone();
		self.listen(canvas, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let Ok(mut s) = state.try_borrow_mut() else {
				return;
			};
			let (x, y) = s.pointer(ev);
			let s = &mut *s;
			if s.pan.update(x, y, &mut s.camera) {
				s.render();
				return;
			}
			let hit = s
				.scene
				.node_at(x, y, s.settings.hover_margin)
				.map(str::to_string);
			if s.set_hover(hit) {
				s.render();
			}
		})?;

		let state = self.state.clone();
		self.listen(canvas, "mouseup", move |_| {
			if let Ok(mut s) = state.try_borrow_mut() {
				s.pan.end();
				let cursor = if s.hovered.is_some() { "pointer" } else { "grab" };
				let _ = s.canvas.style().set_property("cursor", cursor);
			}
		})?;

		let state = self.state.clone();
		self.listen(canvas, "mouseleave", move |_| {
			if let Ok(mut s) = state.try_borrow_mut() {
				s.pan.end();
				if s.set_hover(None) {
					s.render();
				}
			}
		})?;

		let state = self.state.clone();
		self.listen(canvas, "wheel", move |ev| {
			let Some(wheel) = ev.dyn_ref::<WheelEvent>() else {
				return;
			};
			wheel.prevent_default();
			let Ok(mut s) = state.try_borrow_mut() else {
				return;
			};
			let Some(factor) = Camera::wheel_factor(wheel.delta_y(), s.settings.zoom_step) else {
				return;
			};
			let (x, y) = s.pointer(wheel);
			let (min, max) = (s.settings.min_zoom, s.settings.max_zoom);
			s.camera.zoom_at(x, y, factor, min, max);
			s.render();
		})
	}

	fn bind_resize(&mut self, window: EventTarget) -> Result<(), RenderError> {
		let state = self.state.clone();
		self.listen(&window, "resize", move |_| {
			let Ok(mut s) = state.try_borrow_mut() else {
				return;
			};
			match s.sync_size() {
				Ok(()) => s.render(),
				Err(err) => warn!("skipping resize: {err}"),
			}
		})
	}
}

impl Drop for Renderer {
	fn drop(&mut self) {
		for listener in self.listeners.drain(..) {
			let _ = listener.target.remove_event_listener_with_callback(
				listener.event,
				listener.callback.as_ref().unchecked_ref(),
			);
		}
		if let Ok(state) = self.state.try_borrow() {
			state.canvas.remove();
		}
	}
}
