//! Lazily evaluated matrix expressions.
//!
//! Every operation on a [`Matrix`] (or on another expression) produces an *expression node*: a
//! small value that implements [`MatrixExpr`] by computing its elements on demand from its
//! children. Nodes store their children by value, and leaves are `&Matrix` references, so a tree
//! like `&a * 2.0f32 + &b` is a `Sum<ScalarMul<&Matrix, f32>, &Matrix>` that borrows `a` and `b`
//! and performs no arithmetic until it is evaluated.
//!
//! Trees are handled through [`Expr`], which carries the dimensions of the expression and
//! implements the arithmetic operators:
//!
//! - `+` and `-` between two equally shaped expressions build [`Sum`] and [`Difference`].
//! - `*` between two expressions builds a matrix [`Product`].
//! - `*` and `/` with a primitive scalar build [`ScalarMul`] and [`ScalarDiv`].
//! - Unary `-` builds [`Negated`].
//!
//! Every operator is also available on `&Matrix`.
//!
//! Most nodes are pure views. [`Minor`], [`Cofactor`], [`Adjugate`], [`Inverse`] and [`Product`]
//! are the exception: their elements depend on the whole operand, so they evaluate their operand
//! once when they are built and keep the result.
//!
//! Transposing a transpose, negating a negation and inverting an inverse unwrap the inner node
//! instead of stacking another one, so the result of `transpose(transpose(&m))` *is* `&m`.

use itertools::iproduct;
use num_traits::AsPrimitive;

use crate::{Error, Matrix, Number, Promote, Scalar};

mod binary;
mod eager;
mod ops;
mod unary;

pub use binary::*;
pub use eager::*;
pub use unary::*;

/// A matrix-shaped value whose elements can be read by position.
///
/// `R` and `C` are the number of rows and columns. Implemented by [`Matrix`], by references to
/// any implementor (a `&Matrix` is the leaf node of every expression tree), by [`Expr`], and by
/// every node type in this module.
pub trait MatrixExpr<const R: usize, const C: usize> {
    /// The type of the elements this expression evaluates to.
    type Elem: Copy;

    /// The number of rows.
    const ROWS: usize = R;

    /// The number of columns.
    const COLS: usize = C;

    /// Computes the element at `(row, col)`.
    ///
    /// Callers must pass in-bounds positions. Out-of-bounds positions may panic or return an
    /// unrelated element.
    fn elem(&self, row: usize, col: usize) -> Self::Elem;

    /// Evaluates every element, in row-major order, into a new [`Matrix`].
    fn eval(&self) -> Matrix<Self::Elem, R, C> {
        Matrix::from_fn(|row, col| self.elem(row, col))
    }

    /// Evaluates every element, in row-major order, into `out`.
    fn eval_into(&self, out: &mut Matrix<Self::Elem, R, C>) {
        for (row, col) in iproduct!(0..R, 0..C) {
            out[(row, col)] = self.elem(row, col);
        }
    }
}

impl<T: Copy, const R: usize, const C: usize> MatrixExpr<R, C> for Matrix<T, R, C> {
    type Elem = T;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    fn eval(&self) -> Self {
        *self
    }
}

impl<'a, E, const R: usize, const C: usize> MatrixExpr<R, C> for &'a E
where
    E: MatrixExpr<R, C> + ?Sized,
{
    type Elem = E::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        (**self).elem(row, col)
    }

    fn eval(&self) -> Matrix<Self::Elem, R, C> {
        (**self).eval()
    }
}

/// An `R`x`C` matrix expression with root node `E`.
///
/// This is the handle the arithmetic operators and the methods below work with. It derefs to
/// nothing and computes nothing; use [`MatrixExpr::eval`] (or [`From`]) to obtain a [`Matrix`].
///
/// # Examples
///
/// ```
/// # use lazy_linalg::*;
/// let m = matrix![1, 2, 3; 4, 5, 6];
/// let expr: Expr<_, 3, 2> = m.transpose();
/// assert_eq!(expr.elem(2, 1), 6);
/// assert_eq!(Matrix::from(expr), matrix![1, 4; 2, 5; 3, 6]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Expr<E, const R: usize, const C: usize>(E);

impl<E, const R: usize, const C: usize> Expr<E, R, C> {
    #[inline]
    pub(crate) fn new(node: E) -> Self
    where
        E: MatrixExpr<R, C>,
    {
        Self(node)
    }

    /// Returns the root node of this expression.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }

    /// Returns a reference to the root node of this expression.
    #[inline]
    pub fn inner(&self) -> &E {
        &self.0
    }
}

impl<E: MatrixExpr<R, C>, const R: usize, const C: usize> MatrixExpr<R, C> for Expr<E, R, C> {
    type Elem = E::Elem;

    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        self.0.elem(row, col)
    }

    fn eval(&self) -> Matrix<Self::Elem, R, C> {
        self.0.eval()
    }
}

impl<E, T, const R: usize, const C: usize> From<Expr<E, R, C>> for Matrix<T, R, C>
where
    E: MatrixExpr<R, C, Elem = T>,
{
    fn from(expr: Expr<E, R, C>) -> Self {
        expr.eval()
    }
}

/// Conversion into an [`Expr`], implemented for `&Matrix` and for [`Expr`] itself.
///
/// The free functions in this module accept any `IntoExpr`, so matrices and expressions can be
/// passed interchangeably.
pub trait IntoExpr<const R: usize, const C: usize> {
    type Node: MatrixExpr<R, C>;

    fn into_expr(self) -> Expr<Self::Node, R, C>;
}

impl<'a, T: Copy, const R: usize, const C: usize> IntoExpr<R, C> for &'a Matrix<T, R, C> {
    type Node = &'a Matrix<T, R, C>;

    #[inline]
    fn into_expr(self) -> Expr<Self::Node, R, C> {
        Expr(self)
    }
}

impl<E: MatrixExpr<R, C>, const R: usize, const C: usize> IntoExpr<R, C> for Expr<E, R, C> {
    type Node = E;

    #[inline]
    fn into_expr(self) -> Self {
        self
    }
}

/// Nodes that know how to build their own transpose.
///
/// Every node implements this by wrapping itself in [`Transposed`], except [`Transposed`], which
/// returns its child.
pub trait TransposeExpr<const R: usize, const C: usize>: MatrixExpr<R, C> + Sized {
    type Output: MatrixExpr<C, R, Elem = Self::Elem>;

    fn transpose_expr(self) -> Self::Output;
}

/// Nodes that know how to build their own negation.
///
/// Every node implements this by wrapping itself in [`Negated`], except [`Negated`], which
/// returns its child.
pub trait NegateExpr<const R: usize, const C: usize>: MatrixExpr<R, C> + Sized {
    type Output: MatrixExpr<R, C, Elem = Self::Elem>;

    fn negate_expr(self) -> Self::Output;
}

/// Square nodes that know how to build their own inverse.
///
/// Every node implements this by wrapping itself in [`Inverse`], except [`Inverse`], which
/// returns its child.
pub trait InvertExpr<const N: usize>: MatrixExpr<N, N> + Sized {
    type Output: MatrixExpr<N, N>;

    /// Builds the inverse, logging a warning if `self` is singular.
    fn invert_expr(self) -> Self::Output;

    /// Builds the inverse, or returns [`Error::Singular`] if `self` is singular.
    fn try_invert_expr(self) -> Result<Self::Output, Error>;
}

/// Implements the involution traits for node types that have no special form of them.
macro_rules! impl_involutions {
    ([$($gen:tt)*] $node:ty) => {
        impl_involutions!(@transpose [$($gen)*] $node);
        impl_involutions!(@negate [$($gen)*] $node);
        impl_involutions!(@invert [$($gen)*] $node);
    };
    (@transpose [$($gen:tt)*] $node:ty) => {
        impl<$($gen)* const R: usize, const C: usize> $crate::expr::TransposeExpr<R, C> for $node
        where
            Self: $crate::expr::MatrixExpr<R, C>,
        {
            type Output = $crate::expr::Transposed<Self>;

            #[inline]
            fn transpose_expr(self) -> Self::Output {
                $crate::expr::Transposed::new(self)
            }
        }
    };
    (@negate [$($gen:tt)*] $node:ty) => {
        impl<$($gen)* const R: usize, const C: usize> $crate::expr::NegateExpr<R, C> for $node
        where
            Self: $crate::expr::MatrixExpr<R, C>,
            <Self as $crate::expr::MatrixExpr<R, C>>::Elem:
                std::ops::Neg<Output = <Self as $crate::expr::MatrixExpr<R, C>>::Elem>,
        {
            type Output = $crate::expr::Negated<Self>;

            #[inline]
            fn negate_expr(self) -> Self::Output {
                $crate::expr::Negated::new(self)
            }
        }
    };
    (@invert [$($gen:tt)*] $node:ty) => {
        impl<$($gen)* const N: usize> $crate::expr::InvertExpr<N> for $node
        where
            Self: $crate::expr::MatrixExpr<N, N>,
            <Self as $crate::expr::MatrixExpr<N, N>>::Elem: $crate::Scalar,
        {
            type Output = $crate::expr::Inverse<
                Self,
                <<Self as $crate::expr::MatrixExpr<N, N>>::Elem as $crate::Scalar>::Float,
                N,
            >;

            fn invert_expr(self) -> Self::Output {
                $crate::expr::Inverse::new(self)
            }

            fn try_invert_expr(self) -> Result<Self::Output, $crate::Error> {
                $crate::expr::Inverse::try_new(self)
            }
        }
    };
}
pub(crate) use impl_involutions;

impl_involutions!(['a, T, const MR: usize, const MC: usize,] &'a Matrix<T, MR, MC>);

/// Checks that a block lies within its source.
struct BlockBounds<
    const SR: usize,
    const SC: usize,
    const R0: usize,
    const C0: usize,
    const RS: usize,
    const CS: usize,
>;

impl<
        const SR: usize,
        const SC: usize,
        const R0: usize,
        const C0: usize,
        const RS: usize,
        const CS: usize,
    > BlockBounds<SR, SC, R0, C0, RS, CS>
{
    const OK: () = assert!(
        RS > 0 && CS > 0 && R0 + RS <= SR && C0 + CS <= SC,
        "block does not fit within its source expression"
    );
}

/// Checks that a sub-matrix is exactly one row and one column smaller than its source.
struct SubMatrixShape<const SR: usize, const SC: usize, const R2: usize, const C2: usize>;

impl<const SR: usize, const SC: usize, const R2: usize, const C2: usize>
    SubMatrixShape<SR, SC, R2, C2>
{
    const OK: () = assert!(
        R2 + 1 == SR && C2 + 1 == SC,
        "a sub-matrix has one row and one column less than its source"
    );
}

/// Checks that the row and column removed by [`Expr::delete_rc`] exist.
struct SubMatrixIndex<const SR: usize, const SC: usize, const ROW: usize, const COL: usize>;

impl<const SR: usize, const SC: usize, const ROW: usize, const COL: usize>
    SubMatrixIndex<SR, SC, ROW, COL>
{
    const OK: () = assert!(
        ROW < SR && COL < SC,
        "removed row or column is out of bounds"
    );
}

impl<A: MatrixExpr<R, C>, const R: usize, const C: usize> Expr<A, R, C> {
    /// Swaps rows and columns.
    ///
    /// Transposing an expression that is itself a transpose returns the original expression.
    pub fn transpose(self) -> Expr<<A as TransposeExpr<R, C>>::Output, C, R>
    where
        A: TransposeExpr<R, C>,
    {
        Expr(self.0.transpose_expr())
    }

    /// Returns the `RS`x`CS` window starting at row `R0` and column `C0`.
    ///
    /// The block reads through to this expression; nothing is copied. A block that does not fit
    /// within the source fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let m = Matrix::<i32, 4, 4>::from_fn(|row, col| (row * 4 + col + 1) as i32);
    /// let block: Matrix<i32, 3, 2> = m.block::<0, 1, 3, 2>().eval();
    /// assert_eq!(block, matrix![2, 3; 6, 7; 10, 11]);
    /// ```
    ///
    /// ```compile_fail
    /// # use lazy_linalg::*;
    /// let m = Matrix::<i32, 4, 4>::zeros();
    /// let block = m.block::<3, 3, 2, 2>().eval();
    /// ```
    pub fn block<const R0: usize, const C0: usize, const RS: usize, const CS: usize>(
        self,
    ) -> Expr<Block<A, R, C, R0, C0>, RS, CS> {
        let () = BlockBounds::<R, C, R0, C0, RS, CS>::OK;
        Expr(Block::new(self.0))
    }

    /// Removes row `row` and column `col`.
    ///
    /// The output dimensions are inferred and must be `R - 1` and `C - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let m = matrix![1, 2, 3; 4, 5, 6; 7, 8, 9];
    /// let sub: Matrix<i32, 2, 2> = m.sub_matrix(1, 0).eval();
    /// assert_eq!(sub, matrix![2, 3; 8, 9]);
    /// ```
    #[track_caller]
    pub fn sub_matrix<const R2: usize, const C2: usize>(
        self,
        row: usize,
        col: usize,
    ) -> Expr<SubMatrix<A, R, C>, R2, C2> {
        let () = SubMatrixShape::<R, C, R2, C2>::OK;
        Expr(SubMatrix::new(self.0, row, col))
    }

    /// Removes row `ROW` and column `COL`, checking both indices at compile time.
    ///
    /// This is [`Expr::sub_matrix`] for indices known up front. `R2` and `C2` must be `R - 1` and
    /// `C - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let m = matrix![1, 2, 3; 4, 5, 6; 7, 8, 9];
    /// assert_eq!(m.delete_rc::<1, 0, 2, 2>().eval(), matrix![2, 3; 8, 9]);
    /// ```
    ///
    /// ```compile_fail
    /// # use lazy_linalg::*;
    /// let m = Matrix::<i32, 3, 3>::zeros();
    /// let sub = m.delete_rc::<3, 0, 2, 2>().eval();
    /// ```
    pub fn delete_rc<const ROW: usize, const COL: usize, const R2: usize, const C2: usize>(
        self,
    ) -> Expr<SubMatrix<A, R, C>, R2, C2> {
        let () = SubMatrixShape::<R, C, R2, C2>::OK;
        let () = SubMatrixIndex::<R, C, ROW, COL>::OK;
        Expr(SubMatrix::new(self.0, ROW, COL))
    }

    /// Converts every element to `U` with an `as` cast.
    pub fn cast<U>(self) -> Expr<Cast<A, U>, R, C>
    where
        A::Elem: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Expr(Cast::new(self.0))
    }

    /// Takes the square root of every element, in the floating-point type of the elements.
    pub fn sqrt(self) -> Expr<ElemSqrt<A>, R, C>
    where
        A::Elem: Scalar,
    {
        Expr(ElemSqrt::new(self.0))
    }

    /// Multiplies each element by the element at the same position in `rhs`.
    pub fn emul<B: IntoExpr<R, C>>(self, rhs: B) -> Expr<ElemMul<A, B::Node>, R, C>
    where
        ElemMul<A, B::Node>: MatrixExpr<R, C>,
    {
        Expr(ElemMul::new(self.0, rhs.into_expr().0))
    }

    /// Divides each element by the element at the same position in `rhs`.
    ///
    /// Division by a zero element follows the semantics of the element type: floats produce
    /// infinities or NaN, integers panic.
    pub fn ediv<B: IntoExpr<R, C>>(self, rhs: B) -> Expr<ElemDiv<A, B::Node>, R, C>
    where
        ElemDiv<A, B::Node>: MatrixExpr<R, C>,
    {
        Expr(ElemDiv::new(self.0, rhs.into_expr().0))
    }

    /// Divides every element by `divisor`, producing floating-point elements.
    ///
    /// The `/` operator does the same, but panics instead of returning an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if `divisor` is zero (within epsilon for floats).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let m = matrix![1, 2; 3, 4];
    /// assert_eq!(m.expr().checked_div(2i32).unwrap().eval(), matrix![0.5, 1.0; 1.5, 2.0]);
    /// assert_eq!(m.expr().checked_div(0i32).unwrap_err(), Error::DivideByZero);
    /// ```
    pub fn checked_div<S: Scalar>(self, divisor: S) -> Result<Expr<ScalarDiv<A, S>, R, C>, Error>
    where
        A::Elem: Promote<S>,
    {
        ScalarDiv::new(self.0, divisor).map(Expr)
    }
}

impl<A: MatrixExpr<N, N>, const N: usize> Expr<A, N, N> {
    /// Computes the matrix of minors. See [`Minor`].
    pub fn minor(self) -> Expr<Minor<A::Elem, N>, N, N>
    where
        A::Elem: Number,
    {
        Expr(Minor::new(self.0))
    }

    /// Computes the cofactor matrix. See [`Cofactor`].
    pub fn cofactor(self) -> Expr<Cofactor<A::Elem, N>, N, N>
    where
        A::Elem: Number,
    {
        Expr(Cofactor::new(self.0))
    }

    /// Computes the adjugate matrix. See [`Adjugate`].
    pub fn adjugate(self) -> Expr<Adjugate<A::Elem, N>, N, N>
    where
        A::Elem: Number,
    {
        Expr(Adjugate::new(self.0))
    }

    /// Computes the inverse.
    ///
    /// Inverting an expression that is itself an inverse returns the original expression. Inverting
    /// a singular matrix logs a warning and produces infinite or NaN elements; use
    /// [`Expr::try_inverse`] to detect that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazy_linalg::*;
    /// let m = matrix![4.0f64, 7.0; 2.0, 6.0];
    /// let inv = m.inverse().eval();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
    /// ```
    pub fn inverse(self) -> Expr<<A as InvertExpr<N>>::Output, N, N>
    where
        A: InvertExpr<N>,
    {
        Expr(self.0.invert_expr())
    }

    /// Computes the inverse, or returns [`Error::Singular`] if the determinant is zero relative to
    /// the magnitude of the rows.
    pub fn try_inverse(self) -> Result<Expr<<A as InvertExpr<N>>::Output, N, N>, Error>
    where
        A: InvertExpr<N>,
    {
        self.0.try_invert_expr().map(Expr)
    }
}

/// Swaps the rows and columns of `x`. See [`Expr::transpose`].
pub fn transpose<X, const R: usize, const C: usize>(
    x: X,
) -> Expr<<X::Node as TransposeExpr<R, C>>::Output, C, R>
where
    X: IntoExpr<R, C>,
    X::Node: TransposeExpr<R, C>,
{
    x.into_expr().transpose()
}

/// Computes the matrix of minors of `x`. See [`Minor`].
pub fn minor<X, const N: usize>(
    x: X,
) -> Expr<Minor<<X::Node as MatrixExpr<N, N>>::Elem, N>, N, N>
where
    X: IntoExpr<N, N>,
    <X::Node as MatrixExpr<N, N>>::Elem: Number,
{
    x.into_expr().minor()
}

/// Computes the cofactor matrix of `x`. See [`Cofactor`].
pub fn cofactor<X, const N: usize>(
    x: X,
) -> Expr<Cofactor<<X::Node as MatrixExpr<N, N>>::Elem, N>, N, N>
where
    X: IntoExpr<N, N>,
    <X::Node as MatrixExpr<N, N>>::Elem: Number,
{
    x.into_expr().cofactor()
}

/// Computes the adjugate matrix of `x`. See [`Adjugate`].
pub fn adjugate<X, const N: usize>(
    x: X,
) -> Expr<Adjugate<<X::Node as MatrixExpr<N, N>>::Elem, N>, N, N>
where
    X: IntoExpr<N, N>,
    <X::Node as MatrixExpr<N, N>>::Elem: Number,
{
    x.into_expr().adjugate()
}

/// Computes the inverse of `x`. See [`Expr::inverse`].
pub fn inverse<X, const N: usize>(x: X) -> Expr<<X::Node as InvertExpr<N>>::Output, N, N>
where
    X: IntoExpr<N, N>,
    X::Node: InvertExpr<N>,
{
    x.into_expr().inverse()
}

/// Computes the inverse of `x`, failing if it is singular. See [`Expr::try_inverse`].
pub fn try_inverse<X, const N: usize>(
    x: X,
) -> Result<Expr<<X::Node as InvertExpr<N>>::Output, N, N>, Error>
where
    X: IntoExpr<N, N>,
    X::Node: InvertExpr<N>,
{
    x.into_expr().try_inverse()
}

/// Takes the square root of every element of `x`. See [`Expr::sqrt`].
pub fn sqrt<X, const R: usize, const C: usize>(x: X) -> Expr<ElemSqrt<X::Node>, R, C>
where
    X: IntoExpr<R, C>,
    <X::Node as MatrixExpr<R, C>>::Elem: Scalar,
{
    x.into_expr().sqrt()
}

/// Multiplies `a` and `b` elementwise (Hadamard product).
pub fn emul<X, Y, const R: usize, const C: usize>(
    a: X,
    b: Y,
) -> Expr<ElemMul<X::Node, Y::Node>, R, C>
where
    X: IntoExpr<R, C>,
    Y: IntoExpr<R, C>,
    ElemMul<X::Node, Y::Node>: MatrixExpr<R, C>,
{
    a.into_expr().emul(b)
}

/// Divides `a` by `b` elementwise.
pub fn ediv<X, Y, const R: usize, const C: usize>(
    a: X,
    b: Y,
) -> Expr<ElemDiv<X::Node, Y::Node>, R, C>
where
    X: IntoExpr<R, C>,
    Y: IntoExpr<R, C>,
    ElemDiv<X::Node, Y::Node>: MatrixExpr<R, C>,
{
    a.into_expr().ediv(b)
}
