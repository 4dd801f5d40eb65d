use crate::geometry::{Vec2, Vec3};
use crate::material_system::color::Color;

/// Mesh and material maps as seen by the shaders.
///
/// Faces are triangles; `slot` picks one of the three corners.
pub trait Scene {
    fn face_count(&self) -> usize;

    fn vertex_position(&self, face: usize, slot: usize) -> Vec3;

    fn vertex_tex_coord(&self, face: usize, slot: usize) -> Vec2;

    /// Normal read from the normal map at `uv`.
    fn sample_normal(&self, uv: Vec2) -> Vec3;

    fn sample_specular_exponent(&self, uv: Vec2) -> f64;

    fn sample_diffuse_color(&self, uv: Vec2) -> Color;
}
