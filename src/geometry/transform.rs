use crate::geometry::matrix::Mat4;
use crate::geometry::vector::Vec3;

/// Default depth span of the viewport cube, `[0, 255]`.
pub const DEFAULT_DEPTH_RANGE: f64 = 255.0;

/// Builds the model-view matrix for a camera at `eye` looking at `center`.
///
/// Rows 0..3 are the camera basis (right, up, forward). The translation
/// column holds `-center`, not `-eye`.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let forward = (eye - center).normalize();
    let right = up.cross(&forward).normalize();
    let true_up = forward.cross(&right).normalize();

    let mut model_view = Mat4::identity();
    for i in 0..3 {
        model_view[0][i] = right[i];
        model_view[1][i] = true_up[i];
        model_view[2][i] = forward[i];
        model_view[i][3] = -center[i];
    }
    model_view
}

/// Identity with `coeff` at row 3, column 2.
///
/// `coeff = -1 / |eye - center|` gives a simple perspective divide,
/// `coeff = 0` an orthographic projection.
pub fn projection(coeff: f64) -> Mat4 {
    let mut m = Mat4::identity();
    m[3][2] = coeff;
    m
}

/// Maps the bi-unit cube `[-1, 1]^3` onto `[x, x+w] * [y, y+h] * [0, depth_range]`.
pub fn viewport(x: f64, y: f64, w: f64, h: f64, depth_range: f64) -> Mat4 {
    let mut m = Mat4::identity();
    // scale
    m[0][0] = w / 2.0;
    m[1][1] = h / 2.0;
    m[2][2] = depth_range / 2.0;
    // translate
    m[0][3] = x + w / 2.0;
    m[1][3] = y + h / 2.0;
    m[2][3] = depth_range / 2.0;
    m
}
