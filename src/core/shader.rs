//! # Shader stages
//!
//! A material plugs into the pipeline by implementing [`Shader`]. The driving
//! loop calls [`Shader::vertex`] for every corner of every face, then the
//! rasterizer calls [`Shader::fragment`] for every covered pixel of that face.

use crate::geometry::{Vec3, Vec4};
use crate::material_system::color::Color;

pub trait Shader {
    /// Clip-space position of corner `slot` (0, 1 or 2) of face `face`.
    ///
    /// Called exactly once per (face, slot) pair per render, with no sharing
    /// between faces that reuse a vertex. Implementations usually record
    /// per-corner varyings keyed by `slot` for the fragment stage.
    fn vertex(&mut self, face: usize, slot: usize) -> Vec4;

    /// Color of a pixel given its perspective-correct barycentric weights.
    ///
    /// Returning `None` discards the pixel: neither the depth buffer nor the
    /// color target is touched.
    fn fragment(&self, bar: Vec3) -> Option<Color>;
}
