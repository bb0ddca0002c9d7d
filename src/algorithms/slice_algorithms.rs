//! Module with primitives pertaining to the computation of operations between
//! slices of scalars.

use crate::commons::numeric::UnsignedInteger;

/// Compute the wrapping dot product between two slices of unsigned integers.
pub fn slice_wrapping_dot_product<Scalar>(lhs: &[Scalar], rhs: &[Scalar]) -> Scalar
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );

    lhs.iter()
        .zip(rhs.iter())
        .fold(Scalar::ZERO, |acc, (&left, &right)| {
            acc.wrapping_add(left.wrapping_mul(right))
        })
}

/// Add a slice containing unsigned integers to another one element-wise and
/// in place.
pub fn slice_wrapping_add_assign<Scalar>(lhs: &mut [Scalar], rhs: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );

    lhs.iter_mut()
        .zip(rhs.iter())
        .for_each(|(lhs, &rhs)| *lhs = (*lhs).wrapping_add(rhs));
}

/// Subtract a slice containing unsigned integers from another one element-wise
/// and in place.
pub fn slice_wrapping_sub_assign<Scalar>(lhs: &mut [Scalar], rhs: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );

    lhs.iter_mut()
        .zip(rhs.iter())
        .for_each(|(lhs, &rhs)| *lhs = (*lhs).wrapping_sub(rhs));
}

/// Subtract a slice containing unsigned integers multiplied by a scalar from
/// another one, element-wise and in place.
///
/// Let *a*,*b* be two slices, let *c* be a scalar, this computes: *a <- a-bc*
pub fn slice_wrapping_sub_scalar_mul_assign<Scalar>(
    lhs: &mut [Scalar],
    rhs: &[Scalar],
    scalar: Scalar,
) where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );
    lhs.iter_mut()
        .zip(rhs.iter())
        .for_each(|(lhs, &rhs)| *lhs = (*lhs).wrapping_sub(rhs.wrapping_mul(scalar)));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dot_product_wraps_around() {
        let lhs = [u64::MAX, 2];
        let rhs = [2u64, 3];
        // MAX * 2 wraps to MAX - 1
        assert_eq!(
            slice_wrapping_dot_product(&lhs, &rhs),
            u64::MAX.wrapping_mul(2).wrapping_add(6)
        );
    }

    #[test]
    fn sub_scalar_mul_matches_reference() {
        let mut lhs = [1u64, 2, 3];
        let rhs = [10u64, 20, 30];
        slice_wrapping_sub_scalar_mul_assign(&mut lhs, &rhs, 2);
        assert_eq!(
            lhs,
            [
                1u64.wrapping_sub(20),
                2u64.wrapping_sub(40),
                3u64.wrapping_sub(60)
            ]
        );
    }
}
