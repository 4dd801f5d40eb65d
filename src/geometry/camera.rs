use crate::geometry::matrix::Mat4;
use crate::geometry::transform::{look_at, projection, viewport};
use crate::geometry::vector::Vec3;

/// Camera placement in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Camera { eye, center, up }
    }

    /// Perspective coefficient `-1 / |eye - center|`.
    pub fn projection_coeff(&self) -> f64 {
        -1.0 / (self.eye - self.center).norm()
    }
}

/// Target pixel rectangle of the viewport transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    /// Centered rectangle covering the middle three quarters of a `width x height` image.
    pub fn centered(width: usize, height: usize) -> Self {
        ViewportRect {
            x: (width / 8) as f64,
            y: (height / 8) as f64,
            width: (width * 3 / 4) as f64,
            height: (height * 3 / 4) as f64,
        }
    }
}

/// The three camera matrices of one render, built once and passed explicitly
/// to shaders and the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    pub model_view: Mat4,
    pub projection: Mat4,
    pub viewport: Mat4,
}

impl TransformContext {
    pub fn new(camera: &Camera, rect: ViewportRect, depth_range: f64) -> Self {
        TransformContext {
            model_view: look_at(camera.eye, camera.center, camera.up),
            projection: projection(camera.projection_coeff()),
            viewport: viewport(rect.x, rect.y, rect.width, rect.height, depth_range),
        }
    }

    /// `Projection * ModelView`: object space to clip space.
    pub fn clip_matrix(&self) -> Mat4 {
        self.projection * self.model_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::transform::DEFAULT_DEPTH_RANGE;
    use crate::geometry::vector::{vec3, vec4};

    #[test]
    fn centered_rect_matches_integer_layout() {
        let rect = ViewportRect::centered(800, 800);
        assert_eq!(rect, ViewportRect { x: 100.0, y: 100.0, width: 600.0, height: 600.0 });
        let odd = ViewportRect::centered(10, 7);
        assert_eq!((odd.x, odd.y, odd.width, odd.height), (1.0, 0.0, 7.0, 5.0));
    }

    #[test]
    fn context_combines_camera_matrices() {
        let camera = Camera::new(vec3(0.0, 0.0, 4.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        assert_eq!(camera.projection_coeff(), -0.25);

        let ctx = TransformContext::new(&camera, ViewportRect::centered(800, 800), DEFAULT_DEPTH_RANGE);
        assert_eq!(ctx.projection[3][2], -0.25);
        assert_eq!(ctx.viewport[0][3], 400.0);

        // A point at the target stays at the origin with w = 1.
        let clip = ctx.clip_matrix() * vec4(0.0, 0.0, 0.0, 1.0);
        assert_eq!(clip, vec4(0.0, 0.0, 0.0, 1.0));

        // A point half way to the eye has w < 1 and grows on screen.
        let near = ctx.clip_matrix() * vec4(0.5, 0.0, 2.0, 1.0);
        assert!((near.w() - 0.5).abs() < 1e-12);
        assert!(near.x() / near.w() > 0.5);
    }
}
