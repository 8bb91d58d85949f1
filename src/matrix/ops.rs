use super::Matrix2;
use crate::prelude::*;
use std::ops::{Add, AddAssign, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<T: Default + Copy> Transpose for Matrix2<T> {
    fn transpose(&self) -> Self {
        let mut transposed = Matrix2::zeroed(self.cols(), self.rows());

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                transposed[(col, row)] = self[(row, col)];
            }
        }
        transposed
    }
}

impl<'a, T> Dot<&Matrix2<T>> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = Matrix2<T>;
    fn dot(self, rhs: &Matrix2<T>) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(self.rows() * rhs.cols());

        for lhs_row in 0..self.rows() {
            for rhs_col in 0..rhs.cols() {
                let mut sum = T::default();
                for n in 0..self.cols() {
                    sum += self[(lhs_row, n)] * rhs[(n, rhs_col)]
                }
                data.push(sum);
            }
        }

        Ok(Matrix2 {
            data,
            dim: (self.rows(), rhs.cols()),
        })
    }
}

impl<T> Matrix2<T> {
    fn check_same_dim(&self, rhs: &Matrix2<T>) -> Result<()> {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }
        Ok(())
    }

    fn zip_with<F>(&mut self, rhs: &Matrix2<T>, f: F) -> Result<&mut Self>
    where
        T: Copy,
        F: Fn(T, T) -> T,
    {
        self.check_same_dim(rhs)?;
        for (x, &y) in self.data.iter_mut().zip(&rhs.data) {
            *x = f(*x, y);
        }
        Ok(self)
    }
}

/// Adds two Matrix2s element-wise into a new matrix.
impl<'a, T> Add for &'a Matrix2<T>
where
    &'a T: Add<Output = T>,
{
    type Output = Result<Matrix2<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        self.check_same_dim(rhs)?;

        Ok(Matrix2 {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect(),
            dim: self.dim,
        })
    }
}

/// Subs two Matrix2s element-wise into a new matrix.
impl<'a, T> Sub for &'a Matrix2<T>
where
    &'a T: Sub<Output = T>,
{
    type Output = Result<Matrix2<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.check_same_dim(rhs)?;

        Ok(Matrix2 {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect(),
            dim: self.dim,
        })
    }
}

// The in-place operations below mutate the receiver and hand it back, so they
// can be chained: `m.hadamard(&err)?.scale(rate)`.

impl<T: Copy + Add<Output = T>> Matrix2<T> {
    /// Adds `n` to every element in place.
    pub fn add_scalar(&mut self, n: T) -> &mut Self {
        for x in &mut self.data {
            *x = *x + n;
        }
        self
    }

    /// Adds `rhs` element-wise in place.
    pub fn add_elementwise(&mut self, rhs: &Matrix2<T>) -> Result<&mut Self> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Copy + Sub<Output = T>> Matrix2<T> {
    /// Subtracts `n` from every element in place.
    pub fn sub_scalar(&mut self, n: T) -> &mut Self {
        for x in &mut self.data {
            *x = *x - n;
        }
        self
    }

    /// Subtracts `rhs` element-wise in place.
    pub fn sub_elementwise(&mut self, rhs: &Matrix2<T>) -> Result<&mut Self> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Copy + Mul<Output = T>> Matrix2<T> {
    /// Multiplies every element by `n` in place.
    pub fn scale(&mut self, n: T) -> &mut Self {
        for x in &mut self.data {
            *x = *x * n;
        }
        self
    }

    /// Hadamard product with `rhs`, in place.
    pub fn hadamard(&mut self, rhs: &Matrix2<T>) -> Result<&mut Self> {
        self.zip_with(rhs, |a, b| a * b)
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{
        ops::{Dot, Transpose},
        Matrix2,
    };
    use crate::prelude::*;

    #[test]
    fn matrix2_transpose() {
        let matrix = Matrix2::from_array([[1, 2, 3], [4, 5, 6]]).transpose();

        assert_eq!(matrix.clone().to_vec(), [[1, 4], [2, 5], [3, 6]]);
        assert_eq!(matrix.dim, (3, 2));
    }

    #[test]
    fn transpose_round_trip() {
        let matrix = Matrix2::from_array([[1.5, -2.0], [0.0, 4.0], [7.0, 8.25]]);
        assert_eq!(matrix.transpose().transpose(), matrix);
    }

    #[test]
    fn square_matrix_multiplication() {
        let m1 = Matrix2::from_array([[1, 2], [3, 4]]);
        let m2 = Matrix2::from_array([[3, 2], [1, 3]]);

        let m3 = m1.dot(&m2).unwrap();

        assert_eq!(m3.clone().to_vec(), [[5, 8], [13, 18]]);

        assert_eq!(m3.dim, (2, 2));
    }

    #[test]
    fn non_square_matrix_multiplication() {
        let m1 = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]);
        let m2 = Matrix2::from_array([[1, 2], [3, 4]]);

        let m3 = m1.dot(&m2).unwrap();
        assert_eq!(m3.clone().to_vec(), [[7, 10], [15, 22], [23, 34]]);
        assert_eq!(m3.dim, (3, 2));
    }

    #[test]
    fn column_vector_product() {
        let weights = Matrix2::from_array([[1, 0, 2], [0, 1, -1]]);
        let column = Matrix2::from_column(vec![3, 4, 1]).unwrap();

        let out = weights.dot(&column).unwrap();
        assert_eq!(out.dim(), (2, 1));
        assert_eq!(out.flatten(), [5, 3]);
    }

    #[test]
    fn identity_product() {
        let m: Matrix2<f64> = Matrix2::from_array([[1, 2, 3], [4, 5, 6]]).into();

        let same = m.dot(&Matrix2::identity(3).unwrap()).unwrap();
        assert_eq!(same, m);
    }

    #[test]
    fn matrix_multiplication_error() {
        let m1 = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]).transpose();
        let m2 = Matrix2::from_array([[1, 2], [3, 4]]);

        let m3 = m1.dot(&m2);
        assert_eq!(m3, Err(Error::DimensionErr));
    }

    #[test]
    fn matrix2_addition() {
        let m1 = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]);
        let m2 = Matrix2::from_array([[1, 2], [3, 4], [2, 1]]);

        let m3 = &m1 + &m2;
        assert_eq!(m3.unwrap().to_vec(), [[2, 4], [6, 8], [7, 7]]);
    }

    #[test]
    fn matrix2_subtraction() {
        let m1 = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]);
        let m2 = Matrix2::from_array([[1, 2], [3, 4], [2, 1]]);

        let m3 = &m1 - &m2;
        assert_eq!(m3.unwrap().to_vec(), [[0, 0], [0, 0], [3, 5]]);

        // operands are left untouched
        assert_eq!(m1.flatten(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn matrix2_addition_err() {
        // unequal rows
        let m1 = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]).transpose();
        let m2 = Matrix2::from_array([[1, 2], [3, 4]]);

        let m3 = &m1 + &m2;
        assert_eq!(m3, Err(Error::DimensionErr));

        // unequal cols
        let m1 = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]).transpose();
        let m2 = Matrix2::from_array([[1, 2, 1], [3, 4, 1], [1, 2, 3]]);

        let m3 = &m1 - &m2;
        assert_eq!(m3, Err(Error::DimensionErr));
    }

    #[test]
    fn scalar_ops_chain() {
        let mut m = Matrix2::from_array([[1, 2], [3, 4]]);

        m.add_scalar(1).scale(3).sub_scalar(2);

        assert_eq!(m.to_vec(), [[4, 7], [10, 13]]);
    }

    #[test]
    fn elementwise_in_place() -> Result<()> {
        let mut m = Matrix2::from_array([[1, 2], [3, 4]]);
        let rhs = Matrix2::from_array([[2, 2], [1, 0]]);

        m.hadamard(&rhs)?.add_elementwise(&rhs)?.sub_elementwise(&rhs)?;
        assert_eq!(m.clone().to_vec(), [[2, 4], [3, 0]]);

        let wrong = Matrix2::from_array([[1, 2, 3]]);
        assert_eq!(m.hadamard(&wrong).err(), Some(Error::DimensionErr));
        assert_eq!(m.add_elementwise(&wrong).err(), Some(Error::DimensionErr));
        assert_eq!(m.sub_elementwise(&wrong).err(), Some(Error::DimensionErr));
        Ok(())
    }
}
