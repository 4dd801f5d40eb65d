use crate::core::frame_buffer::{DepthBuffer, FrameBuffer};
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Image with framebuffer row 0 at the bottom.
pub fn color_buffer_to_image(frame_buffer: &FrameBuffer) -> RgbImage {
    let (w, h) = (frame_buffer.width, frame_buffer.height);
    RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let c = frame_buffer.color_buffer[(h - 1 - y as usize) * w + x as usize];
        Rgb([c.r, c.g, c.b])
    })
}

/// Maps written depths linearly onto `[0, 255]`; unwritten pixels stay 0.
/// Greater depth (nearer the viewer) is brighter.
pub fn normalize_depth(depth_buffer: &DepthBuffer) -> Vec<u8> {
    let written = || {
        depth_buffer
            .as_slice()
            .iter()
            .copied()
            .filter(|&d| d != DepthBuffer::EMPTY && d.is_finite())
    };
    let min = written().fold(f64::INFINITY, f64::min);
    let max = written().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    depth_buffer
        .as_slice()
        .iter()
        .map(|&d| {
            if d == DepthBuffer::EMPTY || !d.is_finite() {
                0
            } else if span > 0.0 {
                ((d - min) / span * 255.0).round() as u8
            } else {
                255
            }
        })
        .collect()
}

pub fn depth_buffer_to_image(depth_buffer: &DepthBuffer) -> GrayImage {
    let (w, h) = (depth_buffer.width, depth_buffer.height);
    let gray = normalize_depth(depth_buffer);
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([gray[(h - 1 - y as usize) * w + x as usize]])
    })
}

/// TGA unless the extension names another format.
fn output_format(path: &Path) -> ImageFormat {
    ImageFormat::from_path(path).unwrap_or(ImageFormat::Tga)
}

pub fn save_color_buffer<P: AsRef<Path>>(frame_buffer: &FrameBuffer, path: P) -> Result<(), String> {
    let path = path.as_ref();
    color_buffer_to_image(frame_buffer)
        .save_with_format(path, output_format(path))
        .map_err(|e| format!("cannot write image {:?}: {}", path, e))?;
    info!("image saved to {:?}", path);
    Ok(())
}

pub fn save_depth_buffer<P: AsRef<Path>>(depth_buffer: &DepthBuffer, path: P) -> Result<(), String> {
    let path = path.as_ref();
    depth_buffer_to_image(depth_buffer)
        .save_with_format(path, output_format(path))
        .map_err(|e| format!("cannot write depth image {:?}: {}", path, e))?;
    info!("depth image saved to {:?}", path);
    Ok(())
}
