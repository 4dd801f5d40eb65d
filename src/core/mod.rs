pub mod frame_buffer;
pub mod rasterizer;
pub mod renderer;
pub mod scene;
pub mod shader;

pub use frame_buffer::{ColorTarget, DepthBuffer, FrameBuffer};
pub use rasterizer::{barycentric, draw_triangle};
pub use renderer::{RenderStats, Renderer};
pub use scene::Scene;
pub use shader::Shader;
