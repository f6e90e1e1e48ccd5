use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use web_sys::HtmlElement;

use super::renderer::Renderer;
use super::settings::RendererSettings;
use crate::graph::Graph;

/// Mount point for a [`Renderer`]; the renderer follows the `graph` signal.
#[component]
pub fn GraphView(
	/// Graph to draw; the renderer is re-bound whenever it changes.
	#[prop(into)]
	graph: Signal<Graph>,
	/// Renderer options, fixed at mount time.
	#[prop(optional)]
	settings: RendererSettings,
	/// Id of the mount element.
	#[prop(default = "container")]
	id: &'static str,
) -> impl IntoView {
	let mount_ref = NodeRef::<leptos::html::Div>::new();
	let renderer: Rc<RefCell<Option<Renderer>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let current = graph.get();
		let Some(mount) = mount_ref.get() else {
			return;
		};

		let mut slot = renderer.borrow_mut();
		if let Some(ref r) = *slot {
			r.set_graph(current);
			return;
		}
		let container: HtmlElement = mount.into();
		match Renderer::new(current, container, settings.clone()) {
			Ok(r) => *slot = Some(r),
			Err(err) => error!("failed to mount graph renderer on #{id}: {err}"),
		}
	});

	view! {
		<div
			id=id
			node_ref=mount_ref
			class="graph-view"
			style="position: relative; width: 100%; height: 100%;"
		/>
	}
}
