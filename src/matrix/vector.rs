//! Operations on matrices with a single row or a single column.
//!
//! Using any of these on a matrix with more than one row *and* more than one column fails to
//! compile (the error is reported when the method is instantiated).

use std::ops::{Index, IndexMut};

use crate::{Matrix, MinMax, Scalar, Sqrt, Zero};

struct VectorShape<const R: usize, const C: usize>;

impl<const R: usize, const C: usize> VectorShape<R, C> {
    const OK: () = assert!(
        R == 1 || C == 1,
        "vector operations need a matrix with a single row or a single column"
    );
    const CROSS: () = assert!(
        (R == 1 && C == 3) || (R == 3 && C == 1),
        "the cross product is only defined for 3-element vectors"
    );
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// assert_eq!(matrix![1, 3, -5].dot(&matrix![4, -2, -1]), 3);
    /// assert_eq!(matrix![1; 3; -5].dot(&matrix![1; 3; -5]), 35);
    /// ```
    pub fn dot(&self, other: &Self) -> T {
        let () = VectorShape::<R, C>::OK;
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T {
        self.dot(self)
    }

    /// Returns the Euclidean length of this vector.
    pub fn length(&self) -> T::Float {
        self.length2().to_float().sqrt()
    }

    /// Divides every element by the length of the vector.
    ///
    /// Normalizing a zero vector produces NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// assert_eq!(matrix![3, 4].normalize(), matrix![0.6, 0.8]);
    /// ```
    pub fn normalize(&self) -> Matrix<T::Float, R, C> {
        let length = self.length();
        self.map(|elem| elem.to_float() / length)
    }

    /// Returns the smallest element of this vector.
    pub fn min(&self) -> T {
        let () = VectorShape::<R, C>::OK;
        let first = self[0];
        self.iter().skip(1).fold(first, |acc, &elem| MinMax::min(acc, elem))
    }

    /// Returns the largest element of this vector.
    pub fn max(&self) -> T {
        let () = VectorShape::<R, C>::OK;
        let first = self[0];
        self.iter().skip(1).fold(first, |acc, &elem| MinMax::max(acc, elem))
    }

    /// Computes the cross product of two 3-element vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let x = matrix![1, 0, 0];
    /// let y = matrix![0, 1, 0];
    /// assert_eq!(x.cross(&y), matrix![0, 0, 1]);
    /// assert_eq!(y.cross(&x), matrix![0, 0, -1]);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let () = VectorShape::<R, C>::CROSS;
        let (a1, a2, a3) = (self[0], self[1], self[2]);
        let (b1, b2, b3) = (other[0], other[1], other[2]);

        #[rustfmt::skip]
        let cross = [
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ];
        Self::from_fn(|row, col| cross[row + col])
    }

    /// Returns the Euclidean distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// assert_eq!(matrix![1, 1].l2(&matrix![4, 5]), 5.0);
    /// ```
    pub fn l2(&self, other: &Self) -> T::Float {
        let () = VectorShape::<R, C>::OK;
        self.iter()
            .zip(other.iter())
            .fold(<T::Float as Zero>::ZERO, |acc, (&a, &b)| {
                let diff = a.to_float() - b.to_float();
                acc + diff * diff
            })
            .sqrt()
    }
}

/// Vector element subscript.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let () = VectorShape::<R, C>::OK;
        &self.as_slice()[index]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let () = VectorShape::<R, C>::OK;
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::Matrix;

    #[test]
    fn subscript() {
        let mut row = matrix![1, 2, 3];
        let mut col = matrix![1; 2; 3];
        assert_eq!(row[2], 3);
        assert_eq!(col[2], 3);
        row[0] = 9;
        col[0] = 9;
        assert_eq!(row, matrix![9, 2, 3]);
        assert_eq!(col, matrix![9; 2; 3]);
    }

    #[test]
    fn dot() {
        assert_eq!(matrix![1, 3, -5].dot(&matrix![4, -2, -1]), 3);
        assert_eq!(matrix![1, 3, -5].dot(&matrix![1, 3, -5]), 35);

        let x = matrix![1.0f32, 0.0];
        let y = matrix![0.0f32, 1.0];
        assert_eq!(x.dot(&x), 1.0);
        assert_eq!(x.dot(&y), 0.0);
    }

    #[test]
    fn length() {
        assert_eq!(matrix![3, 4].length(), 5.0);
        assert_eq!(matrix![3.0f32; 4.0].length2(), 25.0);
        assert_relative_eq!(matrix![1.0f32, 1.0].length(), 2.0f32.sqrt());
    }

    #[test]
    fn normalize() {
        let n = matrix![0.0f64, 3.0, 4.0].normalize();
        assert_relative_eq!(n, matrix![0.0, 0.6, 0.8]);
        assert_relative_eq!(n.length(), 1.0);

        let zero = Matrix::<f32, 1, 2>::zeros().normalize();
        assert!(zero.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn min_max() {
        let v = matrix![4, -7, 12, 0];
        assert_eq!(v.min(), -7);
        assert_eq!(v.max(), 12);

        let v = matrix![0.5f32; -1.5; 2.25];
        assert_eq!(v.min(), -1.5);
        assert_eq!(v.max(), 2.25);
    }

    #[test]
    fn cross() {
        let a = matrix![1; 2; 3];
        let b = matrix![4; 5; 6];
        assert_eq!(a.cross(&b), matrix![-3; 6; -3]);
        assert_eq!(a.cross(&b).dot(&a), 0);
        assert_eq!(a.cross(&a), Matrix::<i32, 3, 1>::zeros());
    }

    #[test]
    fn l2() {
        assert_eq!(matrix![0, 0, 0].l2(&matrix![2, 3, 6]), 7.0);
        assert_relative_eq!(matrix![1.5f32; 2.0].l2(&matrix![1.5; 2.0]), 0.0);
    }
}
