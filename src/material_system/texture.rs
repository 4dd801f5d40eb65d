use crate::geometry::Vec2;
use crate::material_system::color::Color;
use image::RgbaImage;
use log::{info, warn};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum TextureData {
    /// Stored bottom row first, so `v = 0` is the bottom of the picture.
    Image(RgbaImage),
    SolidColor(Color),
}

#[derive(Debug, Clone)]
pub struct Texture {
    pub data: TextureData,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| format!("cannot load texture {:?}: {}", path, e))?;
        Ok(Self::from_image(img.into_rgba8()))
    }

    /// Wraps a decoded image whose first row is the top of the picture.
    pub fn from_image(mut img: RgbaImage) -> Self {
        image::imageops::flip_vertical_in_place(&mut img);
        Texture {
            width: img.width(),
            height: img.height(),
            data: TextureData::Image(img),
        }
    }

    pub fn solid_color(color: Color) -> Self {
        Texture {
            data: TextureData::SolidColor(color),
            width: 1,
            height: 1,
        }
    }

    pub fn get_type_description(&self) -> &'static str {
        match &self.data {
            TextureData::Image(_) => "image",
            TextureData::SolidColor(_) => "solid color",
        }
    }

    /// Texel at integer coordinates; out-of-range lookups return the zero color.
    pub fn get(&self, x: i64, y: i64) -> Color {
        match &self.data {
            TextureData::Image(img) => {
                if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
                    return Color::default();
                }
                Color::from(*img.get_pixel(x as u32, y as u32))
            }
            TextureData::SolidColor(color) => *color,
        }
    }

    /// Nearest texel for `uv`, truncating `u * width` and `v * height` toward zero.
    pub fn sample(&self, uv: Vec2) -> Color {
        let x = (uv.x() * f64::from(self.width)) as i64;
        let y = (uv.y() * f64::from(self.height)) as i64;
        self.get(x, y)
    }
}

/// Loads a texture, falling back to a solid `default_color` when the file is
/// missing or unreadable.
pub fn load_texture<P: AsRef<Path>>(path: P, default_color: Color) -> Texture {
    let path = path.as_ref();
    match Texture::from_file(path) {
        Ok(texture) => {
            info!(
                "texture file {:?} loading ok ({}x{})",
                path, texture.width, texture.height
            );
            texture
        }
        Err(e) => {
            warn!("{}; using solid color {:?}", e, default_color);
            Texture::solid_color(default_color)
        }
    }
}
