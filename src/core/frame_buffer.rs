use crate::material_system::color::Color;

/// Destination of rasterized colors.
pub trait ColorTarget {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set(&mut self, x: usize, y: usize, color: Color);
    fn get(&self, x: usize, y: usize) -> Color;
}

/// Row-major color buffer, row 0 at the bottom of the final picture.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            color_buffer: vec![Color::default(); width * height],
        }
    }

    pub fn clear(&mut self) {
        self.color_buffer.fill(Color::default());
    }

    /// Number of pixels differing from the clear color.
    pub fn count_written(&self) -> usize {
        self.color_buffer
            .iter()
            .filter(|&&c| c != Color::default())
            .count()
    }
}

impl ColorTarget for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    /// Writes outside the buffer are ignored.
    fn set(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[y * self.width + x] = color;
        }
    }

    fn get(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            self.color_buffer[y * self.width + x]
        } else {
            Color::default()
        }
    }
}

/// Per-pixel depth, holding the greatest accepted depth so far.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    pub width: usize,
    pub height: usize,
    depth: Vec<f64>,
}

impl DepthBuffer {
    /// Value of a pixel nothing has been drawn to.
    pub const EMPTY: f64 = f64::MIN;

    pub fn new(width: usize, height: usize) -> Self {
        DepthBuffer {
            width,
            height,
            depth: vec![Self::EMPTY; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.depth.fill(Self::EMPTY);
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.depth[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, depth: f64) {
        self.depth[y * self.width + x] = depth;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.depth
    }
}
