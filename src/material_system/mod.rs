pub mod color;
pub mod shaders;
pub mod texture;

pub use color::Color;
pub use shaders::PhongShader;
pub use texture::Texture;
