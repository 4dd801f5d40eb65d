use crate::geometry::general_matrix::GeneralMatrix;
use crate::geometry::vector::Vector;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// Row-major `R x C` matrix stored as `R` row vectors.
///
/// Every product and sum is checked by the type system, so a dimension
/// mismatch cannot compile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    rows: [Vector<C>; R],
}

pub type Mat3 = Matrix<3, 3>;
pub type Mat4 = Matrix<4, 4>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub fn new(rows: [[f64; C]; R]) -> Self {
        Matrix {
            rows: rows.map(Vector::new),
        }
    }

    pub fn from_rows(rows: [Vector<C>; R]) -> Self {
        Matrix { rows }
    }

    pub fn zeros() -> Self {
        Matrix {
            rows: [Vector::zero(); R],
        }
    }

    pub fn row(&self, i: usize) -> Vector<C> {
        self.rows[i]
    }

    pub fn col(&self, j: usize) -> Vector<R> {
        Vector::new(std::array::from_fn(|i| self.rows[i][j]))
    }

    pub fn set_col(&mut self, j: usize, v: Vector<R>) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row[j] = v[i];
        }
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        Matrix {
            rows: std::array::from_fn(|j| self.col(j)),
        }
    }
}

impl<const N: usize> Matrix<N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.rows[i][i] = 1.0;
        }
        m
    }

    /// Submatrix without `row` and `col`.
    ///
    /// Returned as a [`GeneralMatrix`] because its size is `N - 1`.
    pub fn minor(&self, row: usize, col: usize) -> GeneralMatrix {
        GeneralMatrix::from(self).minor(row, col)
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        self.minor(row, col).det() * sign
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn det(&self) -> f64 {
        assert!(N > 0, "determinant of an empty matrix");
        if N == 1 {
            return self.rows[0][0];
        }
        (0..N).map(|j| self.rows[0][j] * self.cofactor(0, j)).sum()
    }

    /// Matrix of cofactors, entry `(i, j)` holding `cofactor(i, j)`.
    ///
    /// A 1x1 matrix has the empty minor, whose determinant is 1.
    pub fn adjugate(&self) -> Self {
        if N == 1 {
            return Self::identity();
        }
        Matrix {
            rows: std::array::from_fn(|i| Vector::new(std::array::from_fn(|j| self.cofactor(i, j)))),
        }
    }

    /// `(M^-1)^T`, i.e. the adjugate scaled by `1 / det`.
    ///
    /// The scale is taken as `adj[0] . M[0]`, which equals the determinant.
    /// A singular input is not detected: the result fills with NaN/Inf.
    pub fn inverse_transpose(&self) -> Self {
        let adj = self.adjugate();
        let det = adj.rows[0].dot(&self.rows[0]);
        adj / det
    }

    pub fn inverse(&self) -> Self {
        self.inverse_transpose().transpose()
    }

    /// Inverse that refuses matrices with `|det| <= epsilon`.
    pub fn try_inverse(&self, epsilon: f64) -> Option<Self> {
        let adj = self.adjugate();
        let det = adj.rows[0].dot(&self.rows[0]);
        if det.abs() <= epsilon || !det.is_finite() {
            return None;
        }
        Some((adj / det).transpose())
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize> Index<usize> for Matrix<R, C> {
    type Output = Vector<C>;

    fn index(&self, i: usize) -> &Vector<C> {
        &self.rows[i]
    }
}

impl<const R: usize, const C: usize> IndexMut<usize> for Matrix<R, C> {
    fn index_mut(&mut self, i: usize) -> &mut Vector<C> {
        &mut self.rows[i]
    }
}

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Matrix {
            rows: std::array::from_fn(|i| self.rows[i] + rhs.rows[i]),
        }
    }
}

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Matrix {
            rows: std::array::from_fn(|i| self.rows[i] - rhs.rows[i]),
        }
    }
}

impl<const R: usize, const C: usize> Mul<Vector<C>> for Matrix<R, C> {
    type Output = Vector<R>;

    fn mul(self, rhs: Vector<C>) -> Vector<R> {
        Vector::new(std::array::from_fn(|i| self.rows[i].dot(&rhs)))
    }
}

impl<const L: usize, const M: usize, const N: usize> Mul<Matrix<M, N>> for Matrix<L, M> {
    type Output = Matrix<L, N>;

    fn mul(self, rhs: Matrix<M, N>) -> Matrix<L, N> {
        Matrix {
            rows: std::array::from_fn(|i| {
                Vector::new(std::array::from_fn(|j| self.rows[i].dot(&rhs.col(j))))
            }),
        }
    }
}

impl<const R: usize, const C: usize> Mul<f64> for Matrix<R, C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Matrix {
            rows: self.rows.map(|row| row * rhs),
        }
    }
}

impl<const R: usize, const C: usize> Mul<Matrix<R, C>> for f64 {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: Matrix<R, C>) -> Matrix<R, C> {
        rhs * self
    }
}

impl<const R: usize, const C: usize> Div<f64> for Matrix<R, C> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self * (1.0 / rhs)
    }
}
