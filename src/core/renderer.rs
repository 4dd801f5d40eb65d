use crate::core::frame_buffer::{DepthBuffer, FrameBuffer};
use crate::core::rasterizer::draw_triangle;
use crate::core::scene::Scene;
use crate::core::shader::Shader;
use crate::geometry::camera::TransformContext;
use crate::geometry::{Mat4, Vec3, Vec4};
use crate::material_system::shaders::PhongShader;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Counters collected during one [`Renderer::render`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    pub pixels_written: usize,
    pub elapsed: Duration,
}

/// Owns the color and depth targets and drives a shader over every face.
pub struct Renderer {
    pub frame_buffer: FrameBuffer,
    pub depth_buffer: DepthBuffer,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Renderer {
            frame_buffer: FrameBuffer::new(width, height),
            depth_buffer: DepthBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.frame_buffer.width
    }

    pub fn height(&self) -> usize {
        self.frame_buffer.height
    }

    pub fn clear(&mut self) {
        self.frame_buffer.clear();
        self.depth_buffer.clear();
    }

    /// Runs the vertex stage on the three corners of each face in order, then
    /// rasterizes the face. Faces are processed strictly one after another.
    pub fn render<S>(&mut self, face_count: usize, viewport: &Mat4, shader: &mut S) -> RenderStats
    where
        S: Shader + ?Sized,
    {
        let start_time = Instant::now();
        let mut pixels_written = 0;

        for face in 0..face_count {
            let clip_verts: [Vec4; 3] = std::array::from_fn(|slot| shader.vertex(face, slot));
            pixels_written += draw_triangle(
                &clip_verts,
                viewport,
                &*shader,
                &mut self.frame_buffer,
                &mut self.depth_buffer,
            );
        }

        let stats = RenderStats {
            faces: face_count,
            pixels_written,
            elapsed: start_time.elapsed(),
        };
        debug!(
            "framebuffer {}x{}: {} pixels written",
            self.width(),
            self.height(),
            stats.pixels_written
        );
        info!("rendered {} faces in {:?}", stats.faces, stats.elapsed);
        stats
    }

    /// Renders every face of `scene` with the stock Phong material.
    pub fn render_scene<S>(&mut self, scene: &S, context: &TransformContext, light_dir: Vec3) -> RenderStats
    where
        S: Scene + ?Sized,
    {
        let mut shader = PhongShader::new(scene, context, light_dir);
        self.render(scene.face_count(), &context.viewport, &mut shader)
    }
}
