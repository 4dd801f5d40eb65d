//! # Triangle rasterization
//!
//! Scan conversion of one clip-space triangle: viewport transform, bounding
//! box, screen-space barycentric coverage test, perspective-correct weights,
//! depth test and fragment shading.

use crate::core::frame_buffer::{ColorTarget, DepthBuffer};
use crate::core::shader::Shader;
use crate::geometry::{Mat3, Mat4, Vec2, Vec3, Vec4, vec2, vec3};

/// Screen triangles whose homogeneous determinant is smaller than this are
/// treated as degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-3;

/// Weights returned for a degenerate triangle; always rejected.
pub const DEGENERATE_WEIGHTS: Vec3 = vec3(-1.0, 1.0, 1.0);

/// Barycentric weights of `p` with respect to the screen triangle `tri`.
///
/// Solves `p = a*A + b*B + c*C` by inverting the matrix whose rows are the
/// homogeneous corners `(x, y, 1)`.
pub fn barycentric(tri: &[Vec2; 3], p: Vec2) -> Vec3 {
    let abc = Mat3::from_rows(tri.map(|v| v.embed::<3>(1.0)));
    if abc.det().abs() < DEGENERATE_EPSILON {
        return DEGENERATE_WEIGHTS;
    }
    abc.inverse_transpose() * p.embed::<3>(1.0)
}

/// Inclusive pixel bounds of a screen triangle, clamped to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    /// `None` when the clamped box is empty or a corner is not finite.
    pub fn from_points(pts: &[Vec2; 3], width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if !pts.iter().all(|p| p.x().is_finite() && p.y().is_finite()) {
            return None;
        }
        let lo = |axis: usize| pts.iter().map(|p| p[axis]).fold(f64::INFINITY, f64::min).floor();
        let hi = |axis: usize| pts.iter().map(|p| p[axis]).fold(f64::NEG_INFINITY, f64::max).floor();

        let min_x = lo(0).max(0.0);
        let min_y = lo(1).max(0.0);
        let max_x = hi(0).min((width - 1) as f64);
        let max_y = hi(1).min((height - 1) as f64);

        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(BoundingBox {
            min_x: min_x as usize,
            min_y: min_y as usize,
            max_x: max_x as usize,
            max_y: max_y as usize,
        })
    }

    pub fn for_each_pixel<F>(&self, mut callback: F)
    where
        F: FnMut(usize, usize),
    {
        for x in self.min_x..=self.max_x {
            for y in self.min_y..=self.max_y {
                callback(x, y);
            }
        }
    }

    pub fn area(&self) -> usize {
        (self.max_x - self.min_x + 1) * (self.max_y - self.min_y + 1)
    }
}

/// Rasterizes one triangle given in clip space (before the perspective divide).
///
/// # Arguments
/// * `clip_verts` - the three corners as returned by [`Shader::vertex`].
/// * `viewport` - clip space to screen space transform.
/// * `shader` - supplies the fragment stage.
/// * `target` / `depth_buffer` - written only where the depth test passes and
///   the fragment is not discarded.
///
/// Returns the number of pixels written.
pub fn draw_triangle<S, T>(
    clip_verts: &[Vec4; 3],
    viewport: &Mat4,
    shader: &S,
    target: &mut T,
    depth_buffer: &mut DepthBuffer,
) -> usize
where
    S: Shader + ?Sized,
    T: ColorTarget + ?Sized,
{
    assert!(
        depth_buffer.width == target.width() && depth_buffer.height == target.height(),
        "depth buffer {}x{} does not match target {}x{}",
        depth_buffer.width,
        depth_buffer.height,
        target.width(),
        target.height()
    );

    // screen space, before and after the perspective divide
    let pts = clip_verts.map(|v| *viewport * v);
    let pts2 = pts.map(|p| (p / p.w()).proj::<2>());

    let Some(bbox) = BoundingBox::from_points(&pts2, target.width(), target.height()) else {
        return 0;
    };

    let clip_w = vec3(clip_verts[0].w(), clip_verts[1].w(), clip_verts[2].w());
    let clip_z = vec3(clip_verts[0].z(), clip_verts[1].z(), clip_verts[2].z());

    let mut written = 0;
    bbox.for_each_pixel(|x, y| {
        let bc_screen = barycentric(&pts2, vec2(x as f64, y as f64));
        if bc_screen.data.iter().any(|&c| c < 0.0) {
            return;
        }

        let bc_clip = vec3(
            bc_screen[0] / clip_w[0],
            bc_screen[1] / clip_w[1],
            bc_screen[2] / clip_w[2],
        );
        let bc_clip = bc_clip / (bc_clip[0] + bc_clip[1] + bc_clip[2]);

        let frag_depth = bc_clip.dot(&clip_z);
        if !(frag_depth > depth_buffer.get(x, y)) {
            return;
        }

        let Some(color) = shader.fragment(bc_clip) else {
            return;
        };
        depth_buffer.set(x, y, frag_depth);
        target.set(x, y, color);
        written += 1;
    });
    written
}
