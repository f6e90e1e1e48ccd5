use leptos::prelude::*;

use crate::components::graph_view::GraphView;
use crate::graph::{EdgeAttributes, Graph, GraphError, NodeAttributes};

/// Two labelled nodes joined by one edge.
pub fn sample_graph() -> Result<Graph, GraphError> {
	let mut graph = Graph::new();
	graph.add_node(
		"1",
		NodeAttributes::at(0.0, 0.0)
			.label("Node 1")
			.size(10.0)
			.color("blue"),
	)?;
	graph.add_node(
		"2",
		NodeAttributes::at(1.0, 1.0)
			.label("Node 2")
			.size(20.0)
			.color("red"),
	)?;
	graph.add_edge("1", "2", EdgeAttributes::new().size(5.0).color("purple"))?;
	Ok(graph)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				{move || {
					sample_graph()
						.map(|graph| {
							view! { <GraphView graph=Signal::derive(move || graph.clone()) /> }
						})
				}}
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_graph_matches_scene_description() {
		let graph = sample_graph().unwrap();
		assert_eq!(graph.order(), 2);
		assert_eq!(graph.size(), 1);

		let edge = graph.edges().next().unwrap();
		assert_eq!((edge.source, edge.target), ("1", "2"));
		assert_eq!(edge.attributes.color.as_deref(), Some("purple"));
		assert_eq!(graph.node("2").unwrap().attributes.size, Some(20.0));
	}
}
