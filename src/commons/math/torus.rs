//! Module with the conversions between the real torus and its unsigned
//! integer representations.
//!
//! An unsigned integer `x` of width `N` represents the torus element
//! `x / 2^N`, i.e. the fractional part of a real number. Modular arithmetic on
//! the integers then matches the torus arithmetic exactly.

use crate::commons::math::random::{RandomGenerable, Uniform};
use crate::commons::numeric::{CastFrom, CastInto, UnsignedInteger};

/// A trait for unsigned integer types used as torus representations.
pub trait UnsignedTorus: UnsignedInteger + RandomGenerable<Uniform> {
    /// Round the fractional part of the input to the closest representable
    /// torus element.
    fn from_torus(input: f64) -> Self;

    /// Return the torus element represented by the integer, in `[0, 1)`.
    fn into_torus(self) -> f64;
}

macro_rules! implement {
    ($Type:ty) => {
        impl UnsignedTorus for $Type {
            #[inline]
            fn from_torus(input: f64) -> Self {
                let mut fract = input - f64::round(input);
                fract *= 2f64.powi(Self::BITS as i32);
                fract = f64::round(fract);
                Self::cast_from(fract)
            }

            #[inline]
            fn into_torus(self) -> f64 {
                let self_f64: f64 = self.cast_into();
                self_f64 * 2f64.powi(-(Self::BITS as i32))
            }
        }
    };
}

implement!(u32);
implement!(u64);
implement!(u128);
