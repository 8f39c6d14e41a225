use std::{fmt, ops};

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for signed numeric types that support basic arithmetic operations.
///
/// Everything that needs to flip signs (negation, cofactors, determinants) is bounded on this.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Primitive element types that can be stored in a [`Matrix`][crate::Matrix].
///
/// Every scalar has an associated floating-point type that operations producing fractional results
/// (scalar division, square roots, inversion, elimination) evaluate to. Integers use [`f64`].
pub trait Scalar:
    Zero
    + One
    + MinMax
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
    + fmt::Debug
    + 'static
{
    /// The floating-point type this scalar is promoted to.
    type Float: Float;

    /// Converts `self` to its floating-point type.
    fn to_float(self) -> Self::Float;

    /// Returns whether `self` is zero.
    ///
    /// Integers compare exactly. Floats are treated as zero when their magnitude is at most the
    /// machine epsilon, or below the smallest positive normal value.
    fn is_zero(self) -> bool;
}

/// Floating-point element types ([`f32`] and [`f64`]).
pub trait Float: Scalar<Float = Self> + Number + Sqrt {
    /// The difference between `1.0` and the next larger representable number.
    const EPSILON: Self;

    fn abs(self) -> Self;
}

/// Determines the element type produced by combining a matrix element of type `Self` with a
/// scalar of type `S`.
///
/// The result is a floating-point type if either side is one (the wider one if both are), and
/// `Self` otherwise.
pub trait Promote<S: Scalar>: Scalar {
    type Promoted: Scalar;

    /// Converts a matrix element to the promoted type.
    fn promote(self) -> Self::Promoted;

    /// Converts the scalar operand to the promoted type.
    ///
    /// # Panics
    ///
    /// Integer scalars that don't fit in an integer promoted type panic, like an overflowing
    /// integer multiplication would.
    fn promote_scalar(scalar: S) -> Self::Promoted;

    /// Converts the scalar operand directly to the floating-point type of the promoted type.
    ///
    /// Unlike [`Promote::promote_scalar`], this never narrows the scalar to an integer type first.
    fn promote_divisor(scalar: S) -> <Self::Promoted as Scalar>::Float;
}

/// The floating-point type produced by dividing a `T` element by an `S` scalar.
pub type FloatOf<T, S> = <<T as Promote<S>>::Promoted as Scalar>::Float;

macro_rules! int_impls {
    ($($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl One for $t {
                const ONE: Self = 1;
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $t {
                type Float = f64;

                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! float_impls {
    ($($t:ident),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }

            impl One for $t {
                const ONE: Self = 1.0;
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Scalar for $t {
                type Float = $t;

                #[inline]
                fn to_float(self) -> $t {
                    self
                }

                #[inline]
                fn is_zero(self) -> bool {
                    let abs = self.abs();
                    abs <= $t::EPSILON || abs < $t::MIN_POSITIVE
                }
            }

            impl Float for $t {
                const EPSILON: Self = $t::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! promote {
    // Integer matrices keep their type when scaled by any integer.
    (@ints $($t:ty),+) => {
        $( promote!(@keep $t; u8, u16, u32, u64, i8, i16, i32, i64); )+
    };
    // Integer matrices scaled by a float take on the float type.
    (@int_float $($t:ty),+) => {
        $(
            promote!(@to f32; $t; f32);
            promote!(@to f64; $t; f64);
        )+
    };
    (@keep $t:ty; $($s:ty),+) => {
        $(
            impl Promote<$s> for $t {
                type Promoted = $t;

                #[inline]
                fn promote(self) -> $t {
                    self
                }

                #[inline]
                fn promote_scalar(scalar: $s) -> $t {
                    match num_traits::cast::<$s, $t>(scalar) {
                        Some(scalar) => scalar,
                        None => panic!(
                            "scalar {scalar} does not fit in the `{}` element type",
                            stringify!($t)
                        ),
                    }
                }

                #[inline]
                fn promote_divisor(scalar: $s) -> f64 {
                    scalar as f64
                }
            }
        )+
    };
    (@to $out:ty; $t:ty; $($s:ty),+) => {
        $(
            impl Promote<$s> for $t {
                type Promoted = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_scalar(scalar: $s) -> $out {
                    scalar as $out
                }

                #[inline]
                fn promote_divisor(scalar: $s) -> $out {
                    scalar as $out
                }
            }
        )+
    };
}
promote!(@ints u8, u16, u32, u64, i8, i16, i32, i64);
promote!(@to f32; f32; u8, u16, u32, u64, i8, i16, i32, i64, f32);
promote!(@to f64; f64; u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
promote!(@to f64; f32; f64);
promote!(@int_float u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<T: Promote<S>, S: Scalar>(_: T, _: S) -> &'static str {
        std::any::type_name::<T::Promoted>()
    }

    #[test]
    fn promotion() {
        assert_eq!(promoted(1i32, 2i32), "i32");
        assert_eq!(promoted(1u8, 2i64), "u8");
        assert_eq!(promoted(1i32, 2.0f32), "f32");
        assert_eq!(promoted(1.0f32, 2i32), "f32");
        assert_eq!(promoted(1.0f32, 2.0f64), "f64");
        assert_eq!(promoted(1.0f64, 2.0f32), "f64");
    }

    #[test]
    fn promote_scalar() {
        assert_eq!(<i8 as Promote<i32>>::promote_scalar(100), 100i8);
        assert_eq!(<u64 as Promote<i8>>::promote_scalar(7), 7u64);
        assert_eq!(<u8 as Promote<i32>>::promote_divisor(256), 256.0);
        assert_eq!(<u8 as Promote<i32>>::promote_divisor(-2), -2.0);
        assert_eq!(<f32 as Promote<i64>>::promote_divisor(3), 3.0f32);
    }

    #[test]
    #[should_panic(expected = "does not fit in the `i8` element type")]
    fn promote_scalar_overflow() {
        <i8 as Promote<i32>>::promote_scalar(1000);
    }

    #[test]
    #[should_panic(expected = "does not fit in the `u32` element type")]
    fn promote_negative_scalar_to_unsigned() {
        <u32 as Promote<i32>>::promote_scalar(-1);
    }

    #[test]
    fn is_zero() {
        assert!(0i32.is_zero());
        assert!(!1i32.is_zero());
        assert!(0.0f32.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(f32::EPSILON.is_zero());
        assert!(!1e-3f32.is_zero());
        assert!(1e-300f64.is_zero());
    }

    #[test]
    fn float_type() {
        assert_eq!(3i32.to_float(), 3.0f64);
        assert_eq!(1.5f32.to_float(), 1.5f32);
    }
}
