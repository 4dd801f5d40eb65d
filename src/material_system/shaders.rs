use crate::core::scene::Scene;
use crate::core::shader::Shader;
use crate::geometry::camera::TransformContext;
use crate::geometry::{Mat4, Matrix, Vec3, Vec4, vec3};
use crate::material_system::color::Color;

/// Light direction used when none is configured.
pub const DEFAULT_LIGHT_DIR: Vec3 = vec3(1.0, 1.0, 1.0);

/// Constant term added to every lit channel.
const AMBIENT: f64 = 5.0;
const SPECULAR_WEIGHT: f64 = 0.6;

/// Normal-mapped Phong material: diffuse texture, tangent-space normal map
/// and specular exponent map, lit by one directional light.
pub struct PhongShader<'a, S: Scene + ?Sized> {
    scene: &'a S,
    /// `Projection * ModelView`
    uniform_m: Mat4,
    /// inverse transpose of `uniform_m`, for normals
    uniform_mit: Mat4,
    light_dir: Vec3,
    /// uv of each corner of the current face, one per column
    varying_uv: Matrix<2, 3>,
}

impl<'a, S: Scene + ?Sized> PhongShader<'a, S> {
    pub fn new(scene: &'a S, context: &TransformContext, light_dir: Vec3) -> Self {
        let uniform_m = context.clip_matrix();
        PhongShader {
            scene,
            uniform_m,
            uniform_mit: uniform_m.inverse_transpose(),
            light_dir,
            varying_uv: Matrix::zeros(),
        }
    }
}

impl<S: Scene + ?Sized> Shader for PhongShader<'_, S> {
    fn vertex(&mut self, face: usize, slot: usize) -> Vec4 {
        self.varying_uv
            .set_col(slot, self.scene.vertex_tex_coord(face, slot));
        self.uniform_m * self.scene.vertex_position(face, slot).embed::<4>(1.0)
    }

    fn fragment(&self, bar: Vec3) -> Option<Color> {
        let uv = self.varying_uv * bar;
        let n = (self.uniform_mit * self.scene.sample_normal(uv).embed::<4>(1.0))
            .proj::<3>()
            .normalize();
        let l = (self.uniform_m * self.light_dir.embed::<4>(1.0))
            .proj::<3>()
            .normalize();
        // reflected light
        let r = (n * (2.0 * n.dot(&l)) - l).normalize();
        let spec = r.z().max(0.0).powf(self.scene.sample_specular_exponent(uv));
        let diff = n.dot(&l).max(0.0);

        let base = self.scene.sample_diffuse_color(uv);
        Some(base.map_rgb(|c| (AMBIENT + c * (diff + SPECULAR_WEIGHT * spec)).min(255.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::camera::{Camera, ViewportRect};
    use crate::geometry::transform::DEFAULT_DEPTH_RANGE;
    use crate::geometry::{Vec2, vec2, vec4};

    /// One triangle with constant maps.
    struct FlatScene {
        normal: Vec3,
        specular: f64,
        diffuse: Color,
    }

    impl Scene for FlatScene {
        fn face_count(&self) -> usize {
            1
        }

        fn vertex_position(&self, _face: usize, slot: usize) -> Vec3 {
            [vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)][slot]
        }

        fn vertex_tex_coord(&self, _face: usize, slot: usize) -> Vec2 {
            [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)][slot]
        }

        fn sample_normal(&self, _uv: Vec2) -> Vec3 {
            self.normal
        }

        fn sample_specular_exponent(&self, _uv: Vec2) -> f64 {
            self.specular
        }

        fn sample_diffuse_color(&self, _uv: Vec2) -> Color {
            self.diffuse
        }
    }

    fn identity_context() -> TransformContext {
        TransformContext {
            model_view: Mat4::identity(),
            projection: Mat4::identity(),
            viewport: Mat4::identity(),
        }
    }

    #[test]
    fn vertex_applies_clip_matrix_and_records_uv() {
        let scene = FlatScene {
            normal: vec3(0.0, 0.0, 1.0),
            specular: 0.0,
            diffuse: Color::WHITE,
        };
        let camera = Camera::new(vec3(1.0, 1.0, 3.0), Vec3::zero(), vec3(0.0, 1.0, 0.0));
        let ctx = TransformContext::new(&camera, ViewportRect::centered(800, 800), DEFAULT_DEPTH_RANGE);
        let mut shader = PhongShader::new(&scene, &ctx, DEFAULT_LIGHT_DIR);

        let clip = shader.vertex(0, 1);
        assert_eq!(clip, ctx.clip_matrix() * vec4(1.0, 0.0, 0.0, 1.0));
        shader.vertex(0, 0);
        shader.vertex(0, 2);
        assert_eq!(shader.varying_uv.col(1), vec2(1.0, 0.0));
        assert_eq!(shader.varying_uv * vec3(0.0, 0.5, 0.5), vec2(0.5, 0.5));
    }

    #[test]
    fn head_on_light_saturates() {
        // n == l, so diff = 1, r = n and spec = r.z^0 = 1
        let scene = FlatScene {
            normal: vec3(0.0, 0.0, 1.0),
            specular: 0.0,
            diffuse: Color::rgba(100, 200, 0, 77),
        };
        let shader = PhongShader::new(&scene, &identity_context(), vec3(0.0, 0.0, 1.0));
        let color = shader.fragment(vec3(1.0, 0.0, 0.0)).expect("never discards");
        assert_eq!(color, Color::rgba(165, 255, 5, 77));
    }

    #[test]
    fn grazing_light_leaves_ambient_term() {
        // n . l = 0 and r = -l, whose z is zero: diff = 0, spec = 0^10 = 0
        let scene = FlatScene {
            normal: vec3(0.0, 0.0, 1.0),
            specular: 10.0,
            diffuse: Color::WHITE,
        };
        let shader = PhongShader::new(&scene, &identity_context(), vec3(1.0, 0.0, 0.0));
        let color = shader.fragment(vec3(0.2, 0.3, 0.5)).expect("never discards");
        assert_eq!(color, Color::rgb(5, 5, 5));
    }

    #[test]
    fn black_diffuse_only_gets_ambient() {
        let scene = FlatScene {
            normal: vec3(0.3, -0.2, 0.9),
            specular: 4.0,
            diffuse: Color::BLACK,
        };
        let shader = PhongShader::new(&scene, &identity_context(), DEFAULT_LIGHT_DIR);
        assert_eq!(shader.fragment(vec3(0.5, 0.25, 0.25)), Some(Color::rgb(5, 5, 5)));
    }
}
