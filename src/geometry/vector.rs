use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// Fixed-size vector of `N` real components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize> {
    pub data: [f64; N],
}

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

pub const fn vec2(x: f64, y: f64) -> Vec2 {
    Vector { data: [x, y] }
}

pub const fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vector { data: [x, y, z] }
}

pub const fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vec4 {
    Vector { data: [x, y, z, w] }
}

impl<const N: usize> Vector<N> {
    pub const fn new(data: [f64; N]) -> Self {
        Vector { data }
    }

    pub const fn zero() -> Self {
        Vector { data: [0.0; N] }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn norm2(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length input divides by zero and yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Copies the first `min(N, M)` components and fills the rest with `fill`.
    ///
    /// Appending `1.0` promotes a position to homogeneous form, `0.0` a direction.
    pub fn embed<const M: usize>(&self, fill: f64) -> Vector<M> {
        Vector {
            data: std::array::from_fn(|i| if i < N { self.data[i] } else { fill }),
        }
    }

    /// Keeps the first `M` components.
    ///
    /// Total like `embed`: asking for more components than `N` pads with zeros.
    pub fn proj<const M: usize>(&self) -> Vector<M> {
        self.embed(0.0)
    }
}

impl Vec2 {
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    pub fn y(&self) -> f64 {
        self.data[1]
    }
}

impl Vec3 {
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    pub fn y(&self) -> f64 {
        self.data[1]
    }

    pub fn z(&self) -> f64 {
        self.data[2]
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl Vec4 {
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    pub fn y(&self) -> f64 {
        self.data[1]
    }

    pub fn z(&self) -> f64 {
        self.data[2]
    }

    pub fn w(&self) -> f64 {
        self.data[3]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(data: [f64; N]) -> Self {
        Vector { data }
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector {
            data: std::array::from_fn(|i| self.data[i] + rhs.data[i]),
        }
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vector {
            data: std::array::from_fn(|i| self.data[i] - rhs.data[i]),
        }
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Vector {
            data: self.data.map(|c| c * rhs),
        }
    }
}

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

impl<const N: usize> Div<f64> for Vector<N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Vector {
            data: self.data.map(|c| c / rhs),
        }
    }
}
