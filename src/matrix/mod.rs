use crate::prelude::*;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

pub mod ops;

/// Dense row-major matrix. Every matrix has at least one row and one column.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

impl<T: Default + Clone> Matrix2<T> {
    /// Creates a `rows` x `cols` matrix filled with `T::default()`.
    /// Returns a DimensionErr if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::DimensionErr);
        }
        Ok(Self::zeroed(rows, cols))
    }

    /// Caller guarantees both dimensions are non-zero.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            dim: (rows, cols),
        }
    }
}

impl<T> Matrix2<T> {
    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "matrix literal must not be empty");
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    /// Builds a column matrix (`values.len()` x 1), keeping the order of `values`.
    pub fn from_column(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::DimensionErr);
        }

        Ok(Self {
            dim: (values.len(), 1),
            data: values,
        })
    }

    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionErr);
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.cols())
    }

    pub fn to_vec(self) -> Vec<Vec<T>> {
        let cols = self.cols();
        let mut res = Vec::with_capacity(self.rows());
        let mut data = self.data.into_iter();
        for _ in 0..self.dim.0 {
            res.push(data.by_ref().take(cols).collect());
        }
        res
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexErr {
                row,
                col,
                dim: self.dim,
            });
        }
        Ok(row * self.cols() + col)
    }

    /// Overwrites the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.checked_offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }
}

impl<T: Copy> Matrix2<T> {
    /// Reads the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.checked_offset(row, col).map(|idx| self.data[idx])
    }
}

impl<T> Matrix2<T>
where
    T: Default,
{
    /// Applies a function to every element of the matrix
    pub fn apply<F: FnMut(T) -> T>(&mut self, mut f: F) -> &mut Self {
        for x in &mut self.data {
            let old = std::mem::take(x);
            *x = f(old);
        }
        self
    }

    /// Like [`Matrix2::apply`] but also hands the function the position of the
    /// element. Elements are visited in row-major order.
    pub fn map<F: FnMut(T, usize, usize) -> T>(&mut self, mut f: F) -> &mut Self {
        let cols = self.cols();
        for (idx, x) in self.data.iter_mut().enumerate() {
            let old = std::mem::take(x);
            *x = f(old, idx / cols, idx % cols);
        }
        self
    }
}

impl<T: Clone> Matrix2<T> {
    /// Appends `values` as a new bottom row.
    pub fn push_row(&mut self, values: &[T]) -> Result<&mut Self> {
        if values.len() != self.cols() {
            return Err(Error::DimensionErr);
        }
        self.data.extend_from_slice(values);
        self.dim.0 += 1;
        Ok(self)
    }

    /// Appends `values` as a new rightmost column.
    pub fn push_col(&mut self, values: &[T]) -> Result<&mut Self> {
        if values.len() != self.rows() {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(self.rows() * (self.cols() + 1));
        for (row, value) in self.data.chunks(self.cols()).zip(values) {
            data.extend_from_slice(row);
            data.push(value.clone());
        }

        self.data = data;
        self.dim.1 += 1;
        Ok(self)
    }

    /// Removes column `col`, shifting the columns to its right one place left.
    /// The last remaining column can't be removed.
    pub fn remove_col(&mut self, col: usize) -> Result<&mut Self> {
        if col >= self.cols() {
            return Err(Error::IndexErr {
                row: 0,
                col,
                dim: self.dim,
            });
        }
        if self.cols() == 1 {
            return Err(Error::DimensionErr);
        }

        let cols = self.cols();
        let mut idx = 0;
        self.data.retain(|_| {
            let keep = idx % cols != col;
            idx += 1;
            keep
        });
        self.dim.1 -= 1;
        Ok(self)
    }

    /// Returns the elements in row-major order.
    pub fn flatten(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl Matrix2<f64> {
    pub fn identity(n: usize) -> Result<Self> {
        let mut res = Self::new(n, n)?;
        for i in 0..n {
            res[(i, i)] = 1.0;
        }
        Ok(res)
    }

    /// Fills the matrix with values drawn uniformly from `[from, to)`, floored
    /// when `as_int` is set.
    pub fn randomize(&mut self, from: f64, to: f64, as_int: bool) -> Result<&mut Self> {
        self.randomize_with(&mut rand::thread_rng(), from, to, as_int)
    }

    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        from: f64,
        to: f64,
        as_int: bool,
    ) -> Result<&mut Self> {
        if !(from < to) || !(to - from).is_finite() {
            return Err(Error::ConfigErr(format!(
                "cannot sample from the range [{from}, {to})"
            )));
        }

        let die = Uniform::from(from..to);
        Ok(self.apply(|_| {
            let v = die.sample(&mut *rng);
            if as_int {
                v.floor()
            } else {
                v
            }
        }))
    }
}

impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let idx = i * self.cols() + j;
        &mut self.data[idx]
    }
}

impl From<Matrix2<i32>> for Matrix2<f64> {
    fn from(value: Matrix2<i32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(|x| x as f64).collect(),
        }
    }
}

/// One row per line, fixed-point with the formatter's precision (3 by default).
/// Non-negative values get a leading space so signs line up.
impl fmt::Display for Matrix2<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        for (i, row) in self.iter_rows().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, " ")?;
                }
                if *x >= 0.0 {
                    write!(f, " ")?;
                }
                write!(f, "{x:.precision$}")?;
            }
        }
        Ok(())
    }
}
