use crate::core::scene::Scene;
use crate::geometry::{Vec2, Vec3, vec2, vec3};
use crate::material_system::color::Color;
use crate::material_system::texture::{Texture, load_texture};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffixes appended to the mesh path (minus extension) to find its maps.
pub const DIFFUSE_SUFFIX: &str = "_diffuse.tga";
pub const NORMAL_SUFFIX: &str = "_nm_tangent.tga";
pub const SPECULAR_SUFFIX: &str = "_spec.tga";

/// Fallback normal map color, decoding to the straight-up normal `(0, 0, 1)`.
pub const FLAT_NORMAL_COLOR: Color = Color::rgb(128, 128, 255);

/// Indices of one face corner into the model's attribute arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    pub position: usize,
    /// `None` when the OBJ face gives no texture coordinate.
    pub tex_coord: Option<usize>,
}

/// Triangle mesh plus its diffuse, normal and specular maps.
#[derive(Debug, Clone)]
pub struct Model {
    pub positions: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
    pub faces: Vec<[FaceCorner; 3]>,
    pub diffuse_map: Texture,
    pub normal_map: Texture,
    pub specular_map: Texture,
}

impl Default for Model {
    /// No faces; all maps at their fallback colors.
    fn default() -> Self {
        Model {
            positions: Vec::new(),
            tex_coords: Vec::new(),
            faces: Vec::new(),
            diffuse_map: Texture::solid_color(Color::WHITE),
            normal_map: Texture::solid_color(FLAT_NORMAL_COLOR),
            specular_map: Texture::solid_color(Color::BLACK),
        }
    }
}

impl Model {
    /// Builds a model from raw arrays, checking every face index.
    pub fn from_parts(
        positions: Vec<Vec3>,
        tex_coords: Vec<Vec2>,
        faces: Vec<[FaceCorner; 3]>,
    ) -> Result<Self, String> {
        for (i, face) in faces.iter().enumerate() {
            for corner in face {
                if corner.position >= positions.len() {
                    return Err(format!(
                        "face {} references vertex {} of {}",
                        i,
                        corner.position,
                        positions.len()
                    ));
                }
                if let Some(t) = corner.tex_coord {
                    if t >= tex_coords.len() {
                        return Err(format!(
                            "face {} references texture coordinate {} of {}",
                            i,
                            t,
                            tex_coords.len()
                        ));
                    }
                }
            }
        }
        Ok(Model {
            positions,
            tex_coords,
            faces,
            ..Default::default()
        })
    }

    /// Replaces the three maps with `<stem>_diffuse.tga`, `<stem>_nm_tangent.tga`
    /// and `<stem>_spec.tga` next to `obj_path`, keeping fallbacks for missing files.
    pub fn load_textures<P: AsRef<Path>>(&mut self, obj_path: P) {
        let obj_path = obj_path.as_ref();
        self.diffuse_map = load_texture(texture_path(obj_path, DIFFUSE_SUFFIX), Color::WHITE);
        self.normal_map = load_texture(texture_path(obj_path, NORMAL_SUFFIX), FLAT_NORMAL_COLOR);
        self.specular_map = load_texture(texture_path(obj_path, SPECULAR_SUFFIX), Color::BLACK);
        debug!(
            "maps: diffuse={}, normal={}, specular={}",
            self.diffuse_map.get_type_description(),
            self.normal_map.get_type_description(),
            self.specular_map.get_type_description()
        );
    }

    fn corner(&self, face: usize, slot: usize) -> FaceCorner {
        self.faces[face][slot]
    }
}

impl Scene for Model {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex_position(&self, face: usize, slot: usize) -> Vec3 {
        self.positions[self.corner(face, slot).position]
    }

    fn vertex_tex_coord(&self, face: usize, slot: usize) -> Vec2 {
        self.corner(face, slot)
            .tex_coord
            .map_or(Vec2::zero(), |t| self.tex_coords[t])
    }

    /// Decodes `(r, g, b)` from `[0, 255]` to `[-1, 1]`.
    fn sample_normal(&self, uv: Vec2) -> Vec3 {
        let c = self.normal_map.sample(uv);
        vec3(f64::from(c.r), f64::from(c.g), f64::from(c.b)) / 255.0 * 2.0 - vec3(1.0, 1.0, 1.0)
    }

    /// The blue channel, which equals the gray level of a grayscale map.
    fn sample_specular_exponent(&self, uv: Vec2) -> f64 {
        f64::from(self.specular_map.sample(uv).b)
    }

    fn sample_diffuse_color(&self, uv: Vec2) -> Color {
        self.diffuse_map.sample(uv)
    }
}

/// `obj/sphere.obj` + `_diffuse.tga` -> `obj/sphere_diffuse.tga`
fn texture_path(obj_path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = obj_path.with_extension("").into_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Loads a Wavefront OBJ mesh and the texture maps stored next to it.
///
/// Polygons are triangulated and the faces of every object in the file are
/// concatenated. Missing maps are not an error.
pub fn load_obj_model<P: AsRef<Path>>(obj_path: P) -> Result<Model, String> {
    let obj_path = obj_path.as_ref();
    info!("loading OBJ file: {:?}", obj_path);

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
    };

    // Materials come from the naming convention, not from MTL files.
    let (meshes, _materials) = tobj::load_obj(obj_path, &load_options)
        .map_err(|e| format!("cannot load OBJ {:?}: {}", obj_path, e))?;

    let mut positions: Vec<Vec3> = Vec::new();
    let mut tex_coords: Vec<Vec2> = Vec::new();
    let mut faces: Vec<[FaceCorner; 3]> = Vec::new();

    for model in &meshes {
        let mesh = &model.mesh;
        let position_base = positions.len();
        let tex_coord_base = tex_coords.len();

        positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| vec3(f64::from(p[0]), f64::from(p[1]), f64::from(p[2]))),
        );
        tex_coords.extend(
            mesh.texcoords
                .chunks_exact(2)
                .map(|t| vec2(f64::from(t[0]), f64::from(t[1]))),
        );

        if mesh.texcoord_indices.is_empty() {
            debug!("mesh '{}' has no texture coordinates", model.name);
        } else if mesh.texcoord_indices.len() != mesh.indices.len() {
            warn!(
                "mesh '{}': {} texture indices for {} corners, ignoring them",
                model.name,
                mesh.texcoord_indices.len(),
                mesh.indices.len()
            );
        }
        let has_tex_coords = mesh.texcoord_indices.len() == mesh.indices.len();

        for (face, corners) in mesh.indices.chunks_exact(3).enumerate() {
            faces.push(std::array::from_fn(|slot| {
                let k = face * 3 + slot;
                FaceCorner {
                    position: position_base + corners[slot] as usize,
                    tex_coord: has_tex_coords
                        .then(|| tex_coord_base + mesh.texcoord_indices[k] as usize),
                }
            }));
        }
    }

    let mut model = Model::from_parts(positions, tex_coords, faces)
        .map_err(|e| format!("invalid OBJ {:?}: {}", obj_path, e))?;
    info!(
        "v# {} f# {} vt# {}",
        model.positions.len(),
        model.faces.len(),
        model.tex_coords.len()
    );

    model.load_textures(obj_path);
    Ok(model)
}
