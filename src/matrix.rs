use std::{array, fmt};

use crate::{
    det,
    expr::{Adjugate, Block, Cast, Cofactor, Expr, Inverse, Minor, SubMatrix, Transposed},
    Error, MatrixExpr, Number, One, Scalar, Zero,
};

mod ops;
mod vector;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with a single row.
pub type RowVector<T, const N: usize> = Matrix<T, 1, N>;
/// A matrix with a single column.
pub type ColVector<T, const N: usize> = Matrix<T, N, 1>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// `R` and `C` must both be at least 1. Constructing a matrix with a zero dimension fails to
/// compile.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from nested arrays. The
///   [`matrix!`][crate::matrix] macro does the same with a row-major literal list.
/// - [`Matrix::from_slice`] copies a row-major flat buffer, failing if its length is not `R * C`.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::zeros`] (or the [`Matrix::ZERO`] constant, or [`Default`]) creates a zero matrix,
///   and [`Matrix::identity`] creates a square identity matrix.
/// - Any [`MatrixExpr`] can be evaluated into a new matrix with [`MatrixExpr::eval`] or
///   [`From`], or written into an existing one with [`Matrix::assign`].
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use lazy_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Expressions
///
/// Arithmetic on `&Matrix` does not compute anything. It builds an [`Expr`] tree that borrows the
/// operands and is only evaluated on request:
///
/// ```
/// # use lazy_linalg::*;
/// let a = matrix![1, 2; 3, 4];
/// let b = matrix![6, 7; 8, 9];
/// let sum = &a + &b + &b;
/// assert_eq!(sum.eval(), matrix![13, 16; 19, 22]);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

struct NonEmpty<const R: usize, const C: usize>;

impl<const R: usize, const C: usize> NonEmpty<R, C> {
    const OK: () = assert!(R > 0 && C > 0, "matrices need at least one row and one column");
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        let () = NonEmpty::<R, C>::OK;
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns(columns: [[T; R]; C]) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Alias of [`Matrix::from_columns`].
    #[inline]
    pub fn from_cols(columns: [[T; R]; C]) -> Self
    where
        T: Copy,
    {
        Self::from_columns(columns)
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`]. Elements are produced in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let () = NonEmpty::<R, C>::OK;
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a row-major slice of exactly `R * C` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `elems` has any other length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let mat = Matrix::<i32, 2, 2>::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(mat, matrix![1, 2; 3, 4]);
    ///
    /// let err = Matrix::<i32, 2, 2>::from_slice(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err, Error::LengthMismatch { expected: 4, actual: 3 });
    /// ```
    pub fn from_slice(elems: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        if elems.len() != R * C {
            return Err(Error::LengthMismatch {
                expected: R * C,
                actual: elems.len(),
            });
        }
        Ok(Self::from_fn(|row, col| elems[row * C + col]))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Returns the rows of this matrix.
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns a reference to the rows of this matrix.
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Returns the elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` are out of bounds.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    /// Returns row `idx` as a 1xC matrix.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not less than `R`.
    #[track_caller]
    pub fn get_row(&self, idx: usize) -> Matrix<T, 1, C>
    where
        T: Copy,
    {
        assert!(idx < R, "row index {idx} out of bounds for a matrix with {R} rows");
        Matrix([self.0[idx]])
    }

    /// Replaces row `idx` with the contents of `row`.
    #[track_caller]
    pub fn set_row(&mut self, idx: usize, row: &Matrix<T, 1, C>)
    where
        T: Copy,
    {
        assert!(idx < R, "row index {idx} out of bounds for a matrix with {R} rows");
        self.0[idx] = row.0[0];
    }

    /// Returns column `idx` as an Rx1 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not less than `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let mut mat = matrix![1, 2; 3, 4];
    /// assert_eq!(mat.get_col(1), matrix![2; 4]);
    ///
    /// mat.set_col(0, &matrix![9; 9]);
    /// assert_eq!(mat, matrix![9, 2; 9, 4]);
    /// ```
    #[track_caller]
    pub fn get_col(&self, idx: usize) -> Matrix<T, R, 1>
    where
        T: Copy,
    {
        assert!(idx < C, "column index {idx} out of bounds for a matrix with {C} columns");
        Matrix::from_fn(|row, _| self.0[row][idx])
    }

    /// Replaces column `idx` with the contents of `col`.
    #[track_caller]
    pub fn set_col(&mut self, idx: usize, col: &Matrix<T, R, 1>)
    where
        T: Copy,
    {
        assert!(idx < C, "column index {idx} out of bounds for a matrix with {C} columns");
        for (row, [elem]) in self.0.iter_mut().zip(col.0) {
            row[idx] = elem;
        }
    }

    /// Swaps rows `a` and `b`.
    #[track_caller]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Subtracts `factor` times row `source` from row `target`.
    ///
    /// This is the elementary row operation used by [`Matrix::gaussian_elim`].
    #[track_caller]
    pub fn subtract_row(&mut self, target: usize, source: usize, factor: T)
    where
        T: Copy + std::ops::Sub<Output = T> + std::ops::Mul<Output = T>,
    {
        let source = self.0[source];
        for (elem, s) in self.0[target].iter_mut().zip(source) {
            *elem = *elem - factor * s;
        }
    }

    /// Returns an expression handle borrowing this matrix as a leaf.
    #[inline]
    pub fn expr(&self) -> Expr<&Self, R, C>
    where
        T: Copy,
    {
        Expr::new(self)
    }

    /// Returns a lazily transposed view of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.transpose().eval(), Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Expr<Transposed<&Self>, C, R>
    where
        T: Copy,
    {
        self.expr().transpose()
    }

    /// Returns a `RS`x`CS` window of this matrix starting at row `R0` and column `C0`.
    ///
    /// See [`Expr::block`].
    pub fn block<const R0: usize, const C0: usize, const RS: usize, const CS: usize>(
        &self,
    ) -> Expr<Block<&Self, R, C, R0, C0>, RS, CS>
    where
        T: Copy,
    {
        self.expr().block::<R0, C0, RS, CS>()
    }

    /// Returns this matrix with row `row` and column `col` removed.
    ///
    /// See [`Expr::sub_matrix`].
    #[track_caller]
    pub fn sub_matrix<const R2: usize, const C2: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Expr<SubMatrix<&Self, R, C>, R2, C2>
    where
        T: Copy,
    {
        self.expr().sub_matrix(row, col)
    }

    /// Returns this matrix with row `ROW` and column `COL` removed.
    ///
    /// See [`Expr::delete_rc`].
    pub fn delete_rc<const ROW: usize, const COL: usize, const R2: usize, const C2: usize>(
        &self,
    ) -> Expr<SubMatrix<&Self, R, C>, R2, C2>
    where
        T: Copy,
    {
        self.expr().delete_rc::<ROW, COL, R2, C2>()
    }

    /// Converts every element to `U` with an `as` cast.
    pub fn cast<U>(&self) -> Expr<Cast<&Self, U>, R, C>
    where
        T: num_traits::AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.expr().cast::<U>()
    }

    /// Evaluates `expr` into `self`, overwriting every element.
    ///
    /// `expr` cannot borrow `self`, so the destination never aliases an operand.
    pub fn assign<E>(&mut self, expr: E)
    where
        E: MatrixExpr<R, C, Elem = T>,
    {
        expr.eval_into(self);
    }

    /// Reduces a copy of this matrix to row-echelon form by forward elimination.
    ///
    /// Elimination always happens in the floating-point type of `T`. For each column, the row with
    /// the largest magnitude at or below the diagonal is swapped into the pivot position. A column
    /// without any non-zero candidate is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let echelon = matrix![2, 4; 4, 2].gaussian_elim();
    /// assert_eq!(echelon, matrix![4.0, 2.0; 0.0, 3.0]);
    /// ```
    pub fn gaussian_elim(&self) -> Matrix<T::Float, R, C>
    where
        T: Scalar,
    {
        let mut echelon = self.map(T::to_float);
        det::eliminate(&mut echelon);
        echelon
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Prints every element in row-major order, separated by spaces.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            elem.fmt(f)?;
        }
        Ok(())
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    ///
    /// Like every constructor, using this with a zero dimension fails to compile:
    ///
    /// ```compile_fail
    /// # use lazy_linalg::*;
    /// let empty = Matrix::<f32, 0, 3>::ZERO;
    /// ```
    pub const ZERO: Self = {
        let () = NonEmpty::<R, C>::OK;
        Self([[T::ZERO; C]; R])
    };

    /// Returns a matrix with every element set to 0.
    pub fn zeros() -> Self {
        let () = NonEmpty::<R, C>::OK;
        Self::ZERO
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Only square matrices have
    /// an identity:
    ///
    /// ```compile_fail
    /// # use lazy_linalg::*;
    /// let id = Matrix::<i32, 2, 3>::identity();
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal(diag: [T; N]) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the diagonal elements of this square matrix.
    pub fn diagonal(&self) -> [T; N]
    where
        T: Copy,
    {
        array::from_fn(|i| self.0[i][i])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Scalar,
    {
        self.diagonal().into_iter().fold(T::ZERO, |acc, x| acc + x)
    }

    /// Returns the [determinant] of the matrix, computed by recursive cofactor expansion along the
    /// first row.
    ///
    /// The result has the element type of the matrix, so integer determinants are exact.
    ///
    /// Cofactor expansion alternates signs, so this needs a signed [`Number`] element type. The
    /// same holds for [`Matrix::minor`], [`Matrix::cofactor`] and [`Matrix::adjugate`]. Unsigned
    /// matrices can use [`Matrix::det_elimination`], or [`Matrix::cast`] to a signed type first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// assert_eq!(matrix![1, 2; 3, 4].det(), -2);
    /// assert_eq!(matrix![5].det(), 5);
    /// assert!((matrix![1u32, 2; 3, 4].det_elimination() + 2.0).abs() < 1e-12);
    /// assert_eq!(matrix![1u32, 2; 3, 4].cast::<i64>().eval().det(), -2);
    /// ```
    ///
    /// ```compile_fail
    /// # use lazy_linalg::*;
    /// let det = matrix![1u32, 2; 3, 4].det();
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn det(&self) -> T
    where
        T: Number,
    {
        det::cofactor_expansion(&self.0)
    }

    /// Returns the determinant computed from the diagonal of the row-echelon form produced by
    /// [`Matrix::gaussian_elim`].
    ///
    /// The result is always in the floating-point type of `T`, and agrees with [`Matrix::det`] up
    /// to rounding.
    pub fn det_elimination(&self) -> T::Float
    where
        T: Scalar,
    {
        det::elimination(self.map(T::to_float))
    }

    /// Returns the matrix of minors. See [`Minor`].
    pub fn minor(&self) -> Expr<Minor<T, N>, N, N>
    where
        T: Number,
    {
        self.expr().minor()
    }

    /// Returns the cofactor matrix. See [`Cofactor`].
    pub fn cofactor(&self) -> Expr<Cofactor<T, N>, N, N>
    where
        T: Number,
    {
        self.expr().cofactor()
    }

    /// Returns the adjugate matrix. See [`Adjugate`].
    pub fn adjugate(&self) -> Expr<Adjugate<T, N>, N, N>
    where
        T: Number,
    {
        self.expr().adjugate()
    }

    /// Returns the inverse of this matrix. See [`Expr::inverse`].
    pub fn inverse(&self) -> Expr<Inverse<&Self, T::Float, N>, N, N>
    where
        T: Scalar,
    {
        self.expr().inverse()
    }

    /// Returns the inverse of this matrix, or [`Error::Singular`] if its determinant is zero.
    pub fn try_inverse(&self) -> Result<Expr<Inverse<&Self, T::Float, N>, N, N>, Error>
    where
        T: Scalar,
    {
        self.expr().try_inverse()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(elems: &[T]) -> Result<Self, Error> {
        Self::from_slice(elems)
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<Vec<T>> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(elems: Vec<T>) -> Result<Self, Error> {
        Self::from_slice(&elems)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::<i32, 2, 3>::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(matrix![1, 2; 3, 4], Matrix::from_cols([[1, 3], [2, 4]]));
    }

    #[test]
    fn row_major_layout() {
        let mat = matrix![1.0f32, 2.0, 3.0; 4.0, 5.0, 6.0];
        assert_eq!(mat.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(bytemuck::cast::<_, [f32; 6]>(mat), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(mat.iter().copied().collect::<Vec<_>>(), mat.as_slice());
    }

    #[test]
    fn flat_buffer() {
        let mat = Matrix::<i32, 2, 3>::try_from(vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(mat, matrix![1, 2, 3; 4, 5, 6]);

        assert_eq!(
            Matrix::<i32, 2, 3>::try_from(&[1, 2, 3, 4, 5, 6, 7][..]),
            Err(Error::LengthMismatch {
                expected: 6,
                actual: 7
            }),
        );
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(format!("{}", mat), "0 1 2 3");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3::<i32>::default(), Mat3::<i32>::zeros());
    }

    #[rustfmt::skip]
    #[test]
    fn rows_and_columns() {
        let mut mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(mat.get_row(1), matrix![4, 5, 6]);
        assert_eq!(mat.get_col(2), matrix![3; 6]);

        mat.set_row(0, &matrix![7, 8, 9]);
        mat.set_col(1, &matrix![0; 0]);
        mat.set(1, 2, -1);
        assert_eq!(mat, Matrix::from_rows([
            [7, 0, 9],
            [4, 0, -1],
        ]));

        mat.swap_rows(0, 1);
        assert_eq!(mat.get_row(0), matrix![4, 0, -1]);
    }

    #[test]
    #[should_panic(expected = "row index 2 out of bounds")]
    fn get_row_out_of_bounds() {
        matrix![1, 2; 3, 4].get_row(2);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = matrix![1, 2; 3, 4];
        let _ = mat[(0, 2)];
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn determinant() {
        assert_eq!(matrix![7].det(), 7);
        assert_eq!(matrix![1, 2; 3, 4].det(), -2);
        assert_eq!(Mat4::<i32>::identity().det(), 1);
        assert_eq!(Mat3::<i64>::zeros().det(), 0);
        assert_relative_eq!(matrix![1i32, 2; 3, 4].det_elimination(), -2.0);
    }

    #[rustfmt::skip]
    #[test]
    fn gaussian_elim() {
        let mat = Matrix::from_rows([
            [1i32, 2, 1],
            [2, 4, 0],
            [3, 1, 2],
        ]);
        let echelon = mat.gaussian_elim();
        for (row, col) in [(1, 0), (2, 0), (2, 1)] {
            assert!(echelon[(row, col)].abs() < 1e-12, "{echelon:?}");
        }
        let product: f64 = echelon.diagonal().iter().product();
        assert!((product.abs() - mat.det().abs() as f64).abs() < 1e-9);
    }

    #[test]
    fn assign_expression() {
        let a = matrix![1, 2; 3, 4];
        let mut out = Mat2::zeros();
        out.assign(&a + &a);
        assert_eq!(out, matrix![2, 4; 6, 8]);

        let from: Mat2<i32> = (&a - &a).into();
        assert_eq!(from, Mat2::<i32>::zeros());
    }
}
