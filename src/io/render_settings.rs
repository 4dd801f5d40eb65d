use crate::geometry::camera::{Camera, TransformContext, ViewportRect};
use crate::geometry::transform::DEFAULT_DEPTH_RANGE;
use crate::geometry::{Vec3, Vector};
use serde::{Deserialize, Serialize};

/// Textured sample sphere shipped in `obj/`, relative to the crate root.
pub const DEFAULT_OBJ: &str = "obj/sphere.obj";

/// Every parameter of a render that can be set from a TOML file or the
/// command line. Missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    // ===== files =====
    /// Wavefront OBJ mesh; texture maps are looked up next to it.
    pub obj: String,
    /// Color raster; the format follows the extension.
    pub output: String,
    /// Optional grayscale depth raster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_output: Option<String>,

    // ===== image =====
    pub width: usize,
    pub height: usize,
    /// Depth scale of the viewport transform.
    pub depth_range: f64,

    // ===== camera =====
    pub eye: [f64; 3],
    pub center: [f64; 3],
    pub up: [f64; 3],

    // ===== lighting =====
    pub light_dir: [f64; 3],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            obj: DEFAULT_OBJ.to_string(),
            output: "output.tga".to_string(),
            depth_output: None,
            width: 800,
            height: 800,
            depth_range: DEFAULT_DEPTH_RANGE,
            eye: [1.0, 1.0, 3.0],
            center: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            light_dir: [1.0, 1.0, 1.0],
        }
    }
}

impl RenderSettings {
    pub fn camera(&self) -> Camera {
        Camera::new(
            Vector::new(self.eye),
            Vector::new(self.center),
            Vector::new(self.up),
        )
    }

    pub fn light_dir(&self) -> Vec3 {
        Vector::new(self.light_dir)
    }

    pub fn viewport_rect(&self) -> ViewportRect {
        ViewportRect::centered(self.width, self.height)
    }

    /// Camera, projection and viewport matrices for this render.
    pub fn transform_context(&self) -> TransformContext {
        TransformContext::new(&self.camera(), self.viewport_rect(), self.depth_range)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("image width and height must be greater than 0".to_string());
        }
        if self.output.trim().is_empty() {
            return Err("output file name must not be empty".to_string());
        }
        if self.obj.trim().is_empty() {
            return Err("obj path must not be empty".to_string());
        }
        if !(self.depth_range.is_finite() && self.depth_range > 0.0) {
            return Err(format!("depth_range must be positive, got {}", self.depth_range));
        }
        let all_finite = [self.eye, self.center, self.up, self.light_dir]
            .iter()
            .flatten()
            .all(|c| c.is_finite());
        if !all_finite {
            return Err("camera and light vectors must be finite".to_string());
        }
        if self.eye == self.center {
            return Err("eye and center must differ".to_string());
        }
        if self.up == [0.0; 3] || self.light_dir == [0.0; 3] {
            return Err("up and light_dir must be non-zero".to_string());
        }
        Ok(())
    }
}
