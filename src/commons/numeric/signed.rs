use super::Numeric;
use core::ops::{Add, AddAssign, Neg, Shl, Shr, Sub, SubAssign};

/// A trait shared by all the signed integer types.
pub trait SignedInteger:
    Numeric
    + Ord
    + Eq
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
    fn wrapping_abs(self) -> Self;
}

macro_rules! implement {
    ($Type:ty) => {
        impl SignedInteger for $Type {
            #[inline]
            fn wrapping_abs(self) -> Self {
                self.wrapping_abs()
            }
        }
    };
}

implement!(i8);
implement!(i16);
implement!(i32);
implement!(i64);
implement!(i128);
