use rand::Rng;
use std::ops::Mul;

/// Dense row-major matrix of `f64`.
///
/// Columns are samples throughout the crate: a single input vector of
/// length `n` is an `(n × 1)` matrix. `data.len() == rows * cols` always.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 1.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Samples every entry uniformly from `[lower, upper)`.
    pub fn random_uniform<R: Rng>(
        rows: usize,
        cols: usize,
        lower: f64,
        upper: f64,
        rng: &mut R,
    ) -> Matrix {
        let data = (0..rows * cols)
            .map(|_| lower + rng.gen::<f64>() * (upper - lower))
            .collect();
        Matrix { rows, cols, data }
    }

    /// Builds a matrix from row vectors. An empty outer vector yields a
    /// `(0 × 0)` matrix.
    ///
    /// # Panics
    /// Panics if the rows have differing lengths.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Rows are of differing lengths"
        );
        Matrix {
            rows,
            cols,
            data: data.into_iter().flatten().collect(),
        }
    }

    /// Wraps a column vector as an `(n × 1)` matrix.
    pub fn column(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Copies column `col` out as a vector.
    pub fn col_values(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Adds the `(rows × 1)` column `bias` to every column of `self`.
    ///
    /// # Panics
    /// Panics if `bias` is not a column of matching height.
    pub fn add_column(&self, bias: &Matrix) -> Matrix {
        if bias.cols != 1 || bias.rows != self.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = self.clone();
        for i in 0..self.rows {
            let b = bias.data[i];
            for x in &mut res.data[i * self.cols..(i + 1) * self.cols] {
                *x += b;
            }
        }
        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        // i-k-j order keeps both rhs and res walks contiguous.
        for i in 0..self.rows {
            let out = &mut res.data[i * rhs.cols..(i + 1) * rhs.cols];
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                let rhs_row = &rhs.data[k * rhs.cols..(k + 1) * rhs.cols];
                for (o, &b) in out.iter_mut().zip(rhs_row) {
                    *o += a * b;
                }
            }
        }

        res
    }
}
