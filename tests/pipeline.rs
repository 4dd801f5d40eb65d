use softgl::core::{ColorTarget, DepthBuffer, Renderer, Scene, Shader};
use softgl::geometry::camera::TransformContext;
use softgl::geometry::{Mat4, Vec3, Vec4, vec2, vec3};
use softgl::io::image_output::{save_color_buffer, save_depth_buffer};
use softgl::io::obj_loader::{FaceCorner, Model, load_obj_model};
use softgl::io::render_settings::RenderSettings;
use softgl::material_system::Color;

fn small_settings() -> RenderSettings {
    RenderSettings {
        width: 64,
        height: 64,
        ..Default::default()
    }
}

/// Axis-aligned square in the plane `z`, as two triangles.
fn square(half: f64, z: f64) -> (Vec<Vec3>, Vec<[FaceCorner; 3]>) {
    let positions = vec![
        vec3(-half, -half, z),
        vec3(half, -half, z),
        vec3(half, half, z),
        vec3(-half, half, z),
    ];
    let corner = |position| FaceCorner {
        position,
        tex_coord: None,
    };
    let faces = vec![
        [corner(0), corner(1), corner(2)],
        [corner(0), corner(2), corner(3)],
    ];
    (positions, faces)
}

fn two_squares(front_first: bool) -> Model {
    let (back_pos, back_faces) = square(0.8, 0.0);
    let (front_pos, front_faces) = square(0.4, 0.5);
    let shift = |faces: Vec<[FaceCorner; 3]>, by: usize| -> Vec<[FaceCorner; 3]> {
        faces
            .into_iter()
            .map(|f| f.map(|c| FaceCorner { position: c.position + by, ..c }))
            .collect()
    };
    let (first_pos, first_faces, second_pos, second_faces) = if front_first {
        (front_pos, front_faces, back_pos, back_faces)
    } else {
        (back_pos, back_faces, front_pos, front_faces)
    };
    let mut positions = first_pos;
    let offset = positions.len();
    positions.extend(second_pos);
    let mut faces = first_faces;
    faces.extend(shift(second_faces, offset));
    Model::from_parts(positions, Vec::new(), faces).expect("indices are in range")
}

/// Paints each square (pair of faces) with a fixed color chosen by its z.
struct DepthColorShader<'a> {
    model: &'a Model,
    clip: Mat4,
    color: Color,
}

impl Shader for DepthColorShader<'_> {
    fn vertex(&mut self, face: usize, slot: usize) -> Vec4 {
        let p = self.model.vertex_position(face, slot);
        self.color = if p.z() > 0.25 {
            Color::rgb(0, 0, 255)
        } else {
            Color::rgb(255, 0, 0)
        };
        self.clip * p.embed::<4>(1.0)
    }

    fn fragment(&self, _bar: Vec3) -> Option<Color> {
        Some(self.color)
    }
}

/// Pixel hit by the object-space point `p`.
fn screen_pixel(ctx: &TransformContext, p: Vec3) -> (usize, usize) {
    let clip = ctx.clip_matrix() * p.embed::<4>(1.0);
    let screen = ctx.viewport * clip;
    ((screen.x() / screen.w()) as usize, (screen.y() / screen.w()) as usize)
}

#[test]
fn default_material_lights_a_facing_square() {
    let settings = small_settings();
    let (positions, faces) = square(0.5, 0.0);
    let model = Model::from_parts(positions, Vec::new(), faces).expect("valid");
    let ctx = settings.transform_context();

    let mut renderer = Renderer::new(settings.width, settings.height);
    let stats = renderer.render_scene(&model, &ctx, settings.light_dir());
    assert_eq!(stats.faces, 2);
    assert!(stats.pixels_written > 0);

    let rect = settings.viewport_rect();
    for y in 0..settings.height {
        for x in 0..settings.width {
            let c = renderer.frame_buffer.get(x, y);
            if c == Color::default() {
                continue;
            }
            assert!(x as f64 >= rect.x && x as f64 <= rect.x + rect.width);
            assert!(y as f64 >= rect.y && y as f64 <= rect.y + rect.height);
            // white base: 5 + 255 * (diff + 0.6) with spec = 1 for exponent 0
            assert!(c.r >= 157 && c.r == c.g && c.g == c.b, "{:?}", c);
            assert_eq!(c.a, 255);
            assert!(renderer.depth_buffer.get(x, y) > DepthBuffer::EMPTY);
        }
    }
}

#[test]
fn nearer_square_hides_farther_one_in_any_order() {
    let settings = small_settings();
    let ctx = settings.transform_context();
    let mut frames = Vec::new();

    for front_first in [true, false] {
        let model = two_squares(front_first);
        let mut shader = DepthColorShader {
            model: &model,
            clip: ctx.clip_matrix(),
            color: Color::default(),
        };
        let mut renderer = Renderer::new(settings.width, settings.height);
        renderer.render(model.face_count(), &ctx.viewport, &mut shader);
        frames.push(renderer);
    }

    assert_eq!(frames[0].frame_buffer.color_buffer, frames[1].frame_buffer.color_buffer);
    assert_eq!(frames[0].depth_buffer.as_slice(), frames[1].depth_buffer.as_slice());

    let (fx, fy) = screen_pixel(&ctx, vec3(0.0, 0.0, 0.5));
    assert_eq!(frames[0].frame_buffer.get(fx, fy), Color::rgb(0, 0, 255));
    let (bx, by) = screen_pixel(&ctx, vec3(0.7, -0.7, 0.0));
    assert_eq!(frames[0].frame_buffer.get(bx, by), Color::rgb(255, 0, 0));
}

/// Discards every fragment dominated by the first corner.
struct HalfDiscardShader {
    clip: [Vec4; 3],
}

impl Shader for HalfDiscardShader {
    fn vertex(&mut self, _face: usize, slot: usize) -> Vec4 {
        self.clip[slot]
    }

    fn fragment(&self, bar: Vec3) -> Option<Color> {
        (bar[0] <= 0.5).then_some(Color::WHITE)
    }
}

#[test]
fn discarded_fragments_leave_no_trace() {
    let clip = [
        softgl::geometry::vec4(0.0, 0.0, 0.0, 1.0),
        softgl::geometry::vec4(30.0, 0.0, 0.0, 1.0),
        softgl::geometry::vec4(0.0, 30.0, 0.0, 1.0),
    ];
    let mut shader = HalfDiscardShader { clip };
    let mut renderer = Renderer::new(32, 32);
    let stats = renderer.render(1, &Mat4::identity(), &mut shader);

    assert!(stats.pixels_written > 0);
    // the corner near (0, 0) is discarded
    assert_eq!(renderer.frame_buffer.get(1, 1), Color::default());
    assert_eq!(renderer.frame_buffer.get(20, 5), Color::WHITE);
    for y in 0..32 {
        for x in 0..32 {
            let written = renderer.frame_buffer.get(x, y) != Color::default();
            assert_eq!(written, renderer.depth_buffer.get(x, y) != DepthBuffer::EMPTY);
        }
    }
}

#[test]
fn mesh_on_disk_renders_to_image_files() {
    let dir = std::env::temp_dir().join(format!("softgl_pipeline_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir is writable");
    let obj = dir.join("plane.obj");
    std::fs::write(
        &obj,
        "v -0.5 -0.5 0\nv 0.5 -0.5 0\nv 0.5 0.5 0\nv -0.5 0.5 0\n\
         vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\nf 1/1 2/2 3/3 4/4\n",
    )
    .expect("write obj");

    let settings = RenderSettings {
        obj: obj.to_string_lossy().into_owned(),
        output: dir.join("out.tga").to_string_lossy().into_owned(),
        depth_output: Some(dir.join("depth.png").to_string_lossy().into_owned()),
        ..small_settings()
    };
    let model = load_obj_model(&settings.obj).expect("valid obj");
    assert_eq!(model.vertex_tex_coord(0, 2), vec2(1.0, 1.0));

    let mut renderer = Renderer::new(settings.width, settings.height);
    renderer.render_scene(&model, &settings.transform_context(), settings.light_dir());
    save_color_buffer(&renderer.frame_buffer, &settings.output).expect("write color");
    let depth_path = settings.depth_output.clone().expect("set above");
    save_depth_buffer(&renderer.depth_buffer, &depth_path).expect("write depth");

    let color = image::open(&settings.output).expect("readable tga").into_rgb8();
    let depth = image::open(&depth_path).expect("readable png").into_luma8();
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(color.dimensions(), (64, 64));
    assert_eq!(depth.dimensions(), (64, 64));
    let lit = color.pixels().filter(|p| p.0 != [0, 0, 0]).count();
    assert!(lit > 0);
    assert_eq!(lit, renderer.frame_buffer.count_written());
    // both rasters are flipped the same way
    for (x, y, px) in color.enumerate_pixels() {
        let fb = renderer.frame_buffer.get(x as usize, 63 - y as usize);
        assert_eq!([fb.r, fb.g, fb.b], px.0);
        if px.0 == [0, 0, 0] {
            assert_eq!(depth.get_pixel(x, y).0, [0]);
        }
    }
    assert!(depth.pixels().any(|p| p.0 == [255]));
}

#[test]
fn empty_model_still_produces_a_blank_frame() {
    let settings = small_settings();
    let model = Model::default();
    let mut renderer = Renderer::new(settings.width, settings.height);
    let stats = renderer.render_scene(&model, &settings.transform_context(), settings.light_dir());
    assert_eq!(stats.pixels_written, 0);
    assert_eq!(renderer.frame_buffer.count_written(), 0);
    assert!(load_obj_model("no/such/mesh.obj").is_err());
}

#[test]
fn bundled_sample_is_the_default_mesh() {
    let settings = small_settings();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&settings.obj);
    let model = load_obj_model(&path).expect("bundled sample loads");
    assert_eq!(model.face_count(), 720);
    assert_eq!(model.diffuse_map.get_type_description(), "image");
    assert_eq!(model.normal_map.get_type_description(), "image");
    assert_eq!(model.specular_map.get_type_description(), "image");

    let checker = [Color::rgb(200, 120, 60), Color::rgb(235, 225, 200)];
    assert!(checker.contains(&model.sample_diffuse_color(vec2(0.01, 0.01))));
    let exponent = model.sample_specular_exponent(vec2(0.01, 0.01));
    assert!(exponent == 10.0 || exponent == 40.0);

    let mut renderer = Renderer::new(settings.width, settings.height);
    let stats = renderer.render_scene(&model, &settings.transform_context(), settings.light_dir());
    // nearer faces may overwrite farther ones
    let covered = renderer.frame_buffer.count_written();
    assert!(covered > 0);
    assert!(covered <= stats.pixels_written);
}
