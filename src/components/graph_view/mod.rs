mod camera;
mod component;
mod error;
mod render;
mod renderer;
pub mod scale;
mod scene;
mod settings;

pub use camera::Camera;
pub use component::GraphView;
pub use error::RenderError;
pub use renderer::Renderer;
pub use scene::{EdgeSprite, LabelSprite, NodeSprite, Scene};
pub use settings::RendererSettings;
