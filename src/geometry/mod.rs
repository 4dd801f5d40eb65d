// geometry/mod.rs
// Linear algebra and camera transforms
pub mod camera;
pub mod general_matrix;
pub mod matrix;
pub mod transform;
pub mod vector;

pub use general_matrix::GeneralMatrix;
pub use matrix::{Mat3, Mat4, Matrix};
pub use vector::{Vec2, Vec3, Vec4, Vector, vec2, vec3, vec4};
