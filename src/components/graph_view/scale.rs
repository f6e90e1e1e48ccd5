//! Fits graph-space positions into the viewport.

use crate::graph::Graph;

/// Bounding box of a set of graph-space points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
	/// Left edge.
	pub min_x: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub min_y: f64,
	/// Top edge.
	pub max_y: f64,
}

impl Extent {
	/// Smallest box holding every point, `None` for no points.
	pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
		points.into_iter().fold(None, |acc, (x, y)| {
			Some(match acc {
				None => Extent {
					min_x: x,
					max_x: x,
					min_y: y,
					max_y: y,
				},
				Some(e) => Extent {
					min_x: e.min_x.min(x),
					max_x: e.max_x.max(x),
					min_y: e.min_y.min(y),
					max_y: e.max_y.max(y),
				},
			})
		})
	}

	/// Extent of the visible nodes, `None` when there are none.
	pub fn of_graph(graph: &Graph) -> Option<Self> {
		Self::from_points(
			graph
				.nodes()
				.filter(|n| !n.attributes.hidden)
				.map(|n| (n.attributes.x, n.attributes.y)),
		)
	}

	/// Horizontal span.
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	/// Vertical span.
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	fn center(&self) -> (f64, f64) {
		(
			(self.min_x + self.max_x) / 2.0,
			(self.min_y + self.max_y) / 2.0,
		)
	}
}

/// Maps graph space to viewport space, keeping the aspect ratio and flipping
/// the y axis so graph y grows upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
	ratio: f64,
	graph_center: (f64, f64),
	view_center: (f64, f64),
}

impl Normalizer {
	/// Fits `extent` into a `width` x `height` viewport minus `padding`.
	pub fn fit(extent: Option<Extent>, width: f64, height: f64, padding: f64) -> Self {
		let (avail_w, avail_h) = (
			(width - 2.0 * padding).max(0.0),
			(height - 2.0 * padding).max(0.0),
		);
		let view_center = (width / 2.0, height / 2.0);
		let Some(extent) = extent else {
			return Self {
				ratio: 1.0,
				graph_center: (0.0, 0.0),
				view_center,
			};
		};

		// A zero-sized axis does not constrain the ratio
		let fit_axis = |avail: f64, span: f64| {
			if span > f64::EPSILON {
				avail / span
			} else {
				f64::INFINITY
			}
		};
		let ratio = fit_axis(avail_w, extent.width()).min(fit_axis(avail_h, extent.height()));

		Self {
			ratio: if ratio.is_finite() { ratio } else { 1.0 },
			graph_center: extent.center(),
			view_center,
		}
	}

	/// Pixels per graph unit.
	pub fn ratio(&self) -> f64 {
		self.ratio
	}

	/// Viewport position of a graph-space point.
	pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
		(
			self.view_center.0 + (x - self.graph_center.0) * self.ratio,
			self.view_center.1 - (y - self.graph_center.1) * self.ratio,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	#[test]
	fn extent_of_points() {
		let extent = Extent::from_points([(0.0, 3.0), (-2.0, 1.0), (4.0, 2.0)]).unwrap();
		assert_eq!(extent.min_x, -2.0);
		assert_eq!(extent.max_x, 4.0);
		assert_eq!(extent.min_y, 1.0);
		assert_eq!(extent.max_y, 3.0);
		assert!(Extent::from_points(std::iter::empty::<(f64, f64)>()).is_none());
	}

	#[test]
	fn fits_unit_square_into_padded_viewport() {
		let extent = Extent::from_points([(0.0, 0.0), (1.0, 1.0)]);
		let norm = Normalizer::fit(extent, 200.0, 100.0, 10.0);

		// Height is the limiting axis: 80px for one graph unit
		assert_eq!(norm.ratio(), 80.0);
		assert!(close(norm.apply(0.0, 0.0), (60.0, 90.0)));
		assert!(close(norm.apply(1.0, 1.0), (140.0, 10.0)));
	}

	#[test]
	fn single_point_is_centred() {
		let extent = Extent::from_points([(5.0, -3.0)]);
		let norm = Normalizer::fit(extent, 300.0, 200.0, 20.0);
		assert_eq!(norm.ratio(), 1.0);
		assert!(close(norm.apply(5.0, -3.0), (150.0, 100.0)));
	}

	#[test]
	fn horizontal_line_uses_width_only() {
		let extent = Extent::from_points([(0.0, 2.0), (10.0, 2.0)]);
		let norm = Normalizer::fit(extent, 120.0, 60.0, 10.0);
		assert_eq!(norm.ratio(), 10.0);
		assert!(close(norm.apply(0.0, 2.0), (10.0, 30.0)));
		assert!(close(norm.apply(10.0, 2.0), (110.0, 30.0)));
	}
}
