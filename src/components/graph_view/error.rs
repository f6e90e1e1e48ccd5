use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while attaching a renderer to the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,

	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,

	/// No element carries the requested id.
	#[error("no element with id \"{0}\" to mount on")]
	MountNotFound(String),

	/// The container has no area to draw on.
	#[error("container has no size ({width}x{height})")]
	InvalidContainer {
		/// Client width in CSS pixels.
		width: f64,
		/// Client height in CSS pixels.
		height: f64,
	},

	/// The canvas refused a 2D context.
	#[error("2d canvas context unavailable")]
	Context,

	/// Any other failing DOM call.
	#[error("DOM error: {0}")]
	Dom(String),
}

impl From<JsValue> for RenderError {
	fn from(value: JsValue) -> Self {
		RenderError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

impl From<RenderError> for JsValue {
	fn from(err: RenderError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}
