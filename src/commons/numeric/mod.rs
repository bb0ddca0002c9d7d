//! Module containing traits abstracting over the integer types used by the
//! cryptographic entities.

mod signed;
mod unsigned;

pub use signed::*;
pub use unsigned::*;

/// A trait for types that can be converted from another type with the `as`
/// casting semantics.
pub trait CastFrom<Input>: Sized {
    fn cast_from(input: Input) -> Self;
}

/// A trait for types that can be converted into another type with the `as`
/// casting semantics.
pub trait CastInto<Output>: Sized {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

macro_rules! implement_cast_as {
    ($Input:ty => $($Output:ty),*) => {
        $(
            impl CastFrom<$Input> for $Output {
                #[inline]
                fn cast_from(input: $Input) -> Self {
                    input as $Output
                }
            }
        )*
    };
}

implement_cast_as!(u8 => u8, u16, u32, u64, u128, usize, f64, i8);
implement_cast_as!(u16 => u8, u16, u32, u64, u128, usize, f64, i16);
implement_cast_as!(u32 => u8, u16, u32, u64, u128, usize, f64, i32);
implement_cast_as!(u64 => u8, u16, u32, u64, u128, usize, f64, i64);
implement_cast_as!(u128 => u8, u16, u32, u64, u128, usize, f64, i128);
implement_cast_as!(usize => u8, u16, u32, u64, u128, usize, f64);
implement_cast_as!(i8 => i8, i16, i32, i64, i128);
implement_cast_as!(i16 => i8, i16, i32, i64, i128);
implement_cast_as!(i32 => i8, i16, i32, i64, i128);
implement_cast_as!(i64 => i8, i16, i32, i64, i128);
implement_cast_as!(i128 => i8, i16, i32, i64, i128);

// Casting a float to an unsigned integer goes through the signed type of the
// same width, so that negative inputs wrap around the modulus instead of
// saturating to zero.
macro_rules! implement_cast_from_float {
    ($(($Unsigned:ty, $Signed:ty)),*) => {
        $(
            impl CastFrom<f64> for $Unsigned {
                #[inline]
                fn cast_from(input: f64) -> Self {
                    input as $Signed as $Unsigned
                }
            }
        )*
    };
}

implement_cast_from_float!((u8, i8), (u16, i16), (u32, i32), (u64, i64), (u128, i128));

/// A trait shared by all the numeric types manipulated by the crate.
pub trait Numeric:
    Sized + Copy + PartialEq + PartialOrd + core::fmt::Debug + Send + Sync + 'static
{
    /// The number of bits of the representation.
    const BITS: usize;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MAX: Self;
}

macro_rules! implement_numeric {
    ($Type:ty) => {
        impl Numeric for $Type {
            const BITS: usize = <$Type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const MAX: Self = <$Type>::MAX;
        }
    };
}

implement_numeric!(u8);
implement_numeric!(u16);
implement_numeric!(u32);
implement_numeric!(u64);
implement_numeric!(u128);
implement_numeric!(i8);
implement_numeric!(i16);
implement_numeric!(i32);
implement_numeric!(i64);
implement_numeric!(i128);
