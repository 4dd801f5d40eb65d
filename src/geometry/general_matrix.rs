use crate::geometry::matrix::Matrix;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// Row-major matrix whose dimensions are only known at run time.
///
/// Dimension mismatches are programmer errors and panic immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl GeneralMatrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "{}x{} matrix needs {} entries, got {}",
            rows,
            cols,
            rows * cols,
            data.len()
        );
        GeneralMatrix { rows, cols, data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        GeneralMatrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// Matrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.rows && col < self.cols,
            "minor ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self[(i, j)]);
            }
        }
        GeneralMatrix::new(self.rows - 1, self.cols - 1, data)
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        self.minor(row, col).det() * sign
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Cost grows factorially with the dimension; callers only go through
    /// this path for small transforms.
    pub fn det(&self) -> f64 {
        assert!(
            self.is_square(),
            "determinant of non-square {}x{} matrix",
            self.rows,
            self.cols
        );
        assert!(self.rows > 0, "determinant of an empty matrix");
        if self.rows == 1 {
            return self.data[0];
        }
        (0..self.cols)
            .map(|j| self[(0, j)] * self.cofactor(0, j))
            .sum()
    }

    /// Inverse by Gauss-Jordan elimination on the augmented matrix `[M | I]`.
    ///
    /// No pivot selection is performed: a zero pivot divides by zero and the
    /// result fills with NaN/Inf instead of reporting an error.
    pub fn inverse(&self) -> Self {
        assert!(
            self.is_square(),
            "inverse of non-square {}x{} matrix",
            self.rows,
            self.cols
        );
        let n = self.rows;
        let mut aug = Self::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = self[(i, j)];
            }
            aug[(i, n + i)] = 1.0;
        }

        for i in 0..n {
            let pivot = aug[(i, i)];
            for j in 0..2 * n {
                aug[(i, j)] /= pivot;
            }
            for k in (0..n).filter(|&k| k != i) {
                let coeff = aug[(k, i)];
                for j in 0..2 * n {
                    aug[(k, j)] -= aug[(i, j)] * coeff;
                }
            }
        }

        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inv[(i, j)] = aug[(i, n + j)];
            }
        }
        inv
    }

    /// Converts into a fixed-size matrix; panics if the dimensions differ.
    pub fn to_fixed<const R: usize, const C: usize>(&self) -> Matrix<R, C> {
        assert!(
            self.rows == R && self.cols == C,
            "cannot view {}x{} matrix as {}x{}",
            self.rows,
            self.cols,
            R,
            C
        );
        Matrix::new(std::array::from_fn(|i| {
            std::array::from_fn(|j| self[(i, j)])
        }))
    }
}

impl<const R: usize, const C: usize> From<&Matrix<R, C>> for GeneralMatrix {
    fn from(m: &Matrix<R, C>) -> Self {
        let data = (0..R).flat_map(|i| m[i].data).collect();
        GeneralMatrix::new(R, C, data)
    }
}

impl Index<(usize, usize)> for GeneralMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of range", i, j);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for GeneralMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of range", i, j);
        &mut self.data[i * self.cols + j]
    }
}

impl Mul for &GeneralMatrix {
    type Output = GeneralMatrix;

    fn mul(self, rhs: &GeneralMatrix) -> GeneralMatrix {
        assert_eq!(
            self.cols, rhs.rows,
            "cannot multiply {}x{} by {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut out = GeneralMatrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                out[(i, j)] = (0..self.cols).map(|k| self[(i, k)] * rhs[(k, j)]).sum();
            }
        }
        out
    }
}

impl fmt::Display for GeneralMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let row: Vec<String> = (0..self.cols).map(|j| format!("{}", self[(i, j)])).collect();
            writeln!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}
