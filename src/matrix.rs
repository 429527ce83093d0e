//! Dense 2-D matrix of `f64` values.
//!
//! Elements are stored row-major in a single `Vec`. In-place operations
//! (`hadamard`, `scale`, `add_matrix`, `add_scalar`, `map_in_place`) mutate the
//! existing backing store and return `&mut Self` for chaining. `transpose`,
//! `product`, `subtract` and the conversions always allocate a new matrix.
//!
//! Element-wise operations between two matrices require identical shapes;
//! there is no broadcasting.

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::errors::{NetworkError, Shape};

/// A dense `rows x cols` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix with every element drawn uniformly from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut matrix = Self::zeros(rows, cols);
        matrix.randomize(rng);
        matrix
    }

    /// Builds a matrix from row vectors.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, NetworkError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(NetworkError::mismatch(
                    "from_rows",
                    (num_rows, num_cols),
                    (1, row.len()),
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Creates a column vector holding `values` in order.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Overwrites every element with a uniform sample from `[-1, 1)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for value in &mut self.data {
            *value = rng.gen_range(-1.0..1.0);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`, the key used to compare shapes.
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Flattens the matrix row-major into a new vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Hadamard (Schur) product with a matrix of the same shape, in place.
    pub fn hadamard(&mut self, other: &Matrix) -> Result<&mut Self, NetworkError> {
        self.ensure_same_shape("hadamard", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a *= b;
        }
        Ok(self)
    }

    /// Multiplies every element by `factor`, in place.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for value in &mut self.data {
            *value *= factor;
        }
        self
    }

    /// Element-wise addition of a matrix of the same shape, in place.
    pub fn add_matrix(&mut self, other: &Matrix) -> Result<&mut Self, NetworkError> {
        self.ensure_same_shape("add", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(self)
    }

    /// Adds `value` to every element, in place.
    pub fn add_scalar(&mut self, value: f64) -> &mut Self {
        for element in &mut self.data {
            *element += value;
        }
        self
    }

    /// Applies `f` to every element, in place.
    ///
    /// Returns the same matrix, so any handle to it observes the new values.
    pub fn map_in_place<F: Fn(f64) -> f64>(&mut self, f: F) -> &mut Self {
        for value in &mut self.data {
            *value = f(*value);
        }
        self
    }

    /// Returns a new `cols x rows` matrix with `result[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    /// Standard matrix product `a * b`.
    ///
    /// `a.cols()` must equal `b.rows()`; the result is `a.rows() x b.cols()`.
    pub fn product(a: &Matrix, b: &Matrix) -> Result<Matrix, NetworkError> {
        if a.cols != b.rows {
            return Err(NetworkError::mismatch("product", a.shape(), b.shape()));
        }
        let mut result = Matrix::zeros(a.rows, b.cols);
        for i in 0..a.rows {
            let row = &a.data[i * a.cols..(i + 1) * a.cols];
            for j in 0..b.cols {
                let mut sum = 0.0;
                for (k, value) in row.iter().enumerate() {
                    sum += value * b.data[k * b.cols + j];
                }
                result.data[i * b.cols + j] = sum;
            }
        }
        Ok(result)
    }

    /// Element-wise `a - b` into a new matrix. Shapes must match.
    pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, NetworkError> {
        a.ensure_same_shape("subtract", b)?;
        let data = a.data.iter().zip(&b.data).map(|(x, y)| x - y).collect();
        Ok(Matrix {
            rows: a.rows,
            cols: a.cols,
            data,
        })
    }

    /// Subtracts `value` from every element of `a` into a new matrix.
    pub fn subtract_scalar(a: &Matrix, value: f64) -> Matrix {
        Matrix {
            rows: a.rows,
            cols: a.cols,
            data: a.data.iter().map(|x| x - value).collect(),
        }
    }

    fn ensure_same_shape(&self, op: &'static str, other: &Matrix) -> Result<(), NetworkError> {
        if self.shape() != other.shape() {
            return Err(NetworkError::mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
