//! A small programmable software rasterizer.
//!
//! Triangles go through a user [`core::Shader`]: the vertex stage maps each
//! corner to clip space, the rasterizer covers the projected triangle with
//! perspective-correct barycentric weights and a depth test, and the fragment
//! stage colors every surviving pixel.

pub mod core;
pub mod geometry;
pub mod io;
pub mod material_system;
