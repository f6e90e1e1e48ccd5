/// Pan and zoom applied on top of the fitted layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
	/// Horizontal offset in CSS pixels.
	pub x: f64,
	/// Vertical offset in CSS pixels.
	pub y: f64,
	/// Zoom factor, 1 is unzoomed.
	pub k: f64,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl Camera {
	/// Zoom multiplier for a wheel event. Scrolls without vertical motion
	/// (horizontal trackpad swipes) do not zoom.
	pub fn wheel_factor(delta_y: f64, step: f64) -> Option<f64> {
		if delta_y > 0.0 {
			Some(1.0 / step)
		} else if delta_y < 0.0 {
			Some(step)
		} else {
			None
		}
	}

	/// Screen position of a fitted layout point.
	pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
		(x * self.k + self.x, y * self.k + self.y)
	}

	/// Fitted layout position under a screen point.
	pub fn invert(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Multiplies the zoom by `factor` while keeping the screen point
	/// `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, min: f64, max: f64) {
		let new_k = (self.k * factor).clamp(min, max);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}

#[derive(Clone, Debug, Default)]
pub(crate) struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub camera_start_x: f64,
	pub camera_start_y: f64,
}

impl PanState {
	pub fn begin(&mut self, x: f64, y: f64, camera: &Camera) {
		self.active = true;
		self.start_x = x;
		self.start_y = y;
		self.camera_start_x = camera.x;
		self.camera_start_y = camera.y;
	}

	/// Moves the camera to follow the pointer. Returns false when no pan is
	/// in progress.
	pub fn update(&self, x: f64, y: f64, camera: &mut Camera) -> bool {
		if !self.active {
			return false;
		}
		camera.x = self.camera_start_x + (x - self.start_x);
		camera.y = self.camera_start_y + (y - self.start_y);
		true
	}

	pub fn end(&mut self) {
		self.active = false;
	}
}
