use std::ops::Mul;

/// 8-bit color with three color channels and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Applies `f` to the three color channels, clamping each result to `[0, 255]`.
    /// Alpha is left untouched.
    pub fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        let channel = |c: u8| f(f64::from(c)).clamp(0.0, 255.0) as u8;
        Color {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    pub fn to_rgba8(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color { r, g, b, a }
    }
}

/// Scales the color channels by an intensity saturated to `[0, 1]`.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, intensity: f64) -> Color {
        let intensity = intensity.clamp(0.0, 1.0);
        self.map_rgb(|c| c * intensity)
    }
}
