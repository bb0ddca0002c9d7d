use crate::commons::math::decomposition::SignedDecompositionIter;
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevelCount};
use std::marker::PhantomData;

/// A structure which allows to decompose unsigned integers into a set of
/// balanced signed digits.
///
/// See the [module documentation](`super`) for a description of the
/// decomposition.
pub struct SignedDecomposer<Scalar>
where
    Scalar: UnsignedInteger,
{
    pub(crate) base_log: usize,
    pub(crate) level_count: usize,
    integer_type: PhantomData<Scalar>,
}

impl<Scalar> SignedDecomposer<Scalar>
where
    Scalar: UnsignedInteger,
{
    /// Create a new decomposer.
    ///
    /// # Panics
    ///
    /// Panics if `base_log * level_count` exceeds the scalar width, or if
    /// `base_log` alone covers the full width.
    pub fn new(
        base_log: DecompositionBaseLog,
        level_count: DecompositionLevelCount,
    ) -> SignedDecomposer<Scalar> {
        assert!(
            Scalar::BITS >= base_log.0 * level_count.0,
            "Decomposed bits exceed the size of the integer to be decomposed"
        );
        assert!(
            Scalar::BITS > base_log.0,
            "Balanced digits of the full integer width are not representable"
        );
        SignedDecomposer {
            base_log: base_log.0,
            level_count: level_count.0,
            integer_type: PhantomData,
        }
    }

    /// Return the logarithm in base two of the base of this decomposer.
    pub fn base_log(&self) -> DecompositionBaseLog {
        DecompositionBaseLog(self.base_log)
    }

    /// Return the number of levels of this decomposer.
    pub fn level_count(&self) -> DecompositionLevelCount {
        DecompositionLevelCount(self.level_count)
    }

    /// Return the closest value representable by the decomposition.
    ///
    /// The result is the input rounded at the last represented bit, with ties
    /// going away from zero.
    #[inline]
    pub fn closest_representable(&self, input: Scalar) -> Scalar {
        // The number of least significant bits which can not be represented by
        // the decomposition
        let non_rep_bit_count: usize = Scalar::BITS - self.level_count * self.base_log;
        if non_rep_bit_count == 0 {
            return input;
        }
        // We extract the msb of the non representable bits to perform the
        // rounding
        let non_rep_msb = (input >> (non_rep_bit_count - 1)) & Scalar::ONE;
        // We remove the non representable bits and round
        let res = (input >> non_rep_bit_count) + non_rep_msb;
        res << non_rep_bit_count
    }

    /// Generate an iterator over the terms of the decomposition of the input.
    ///
    /// The input is rounded to the closest representable value first. Terms
    /// are yielded in decreasing level order, i.e. least significant scale
    /// first.
    pub fn decompose(&self, input: Scalar) -> SignedDecompositionIter<Scalar> {
        SignedDecompositionIter::new(
            self.closest_representable(input),
            DecompositionBaseLog(self.base_log),
            DecompositionLevelCount(self.level_count),
        )
    }

    /// Recompose a value from a fresh decomposition iterator.
    ///
    /// Returns `None` if the iterator has already been partially consumed.
    pub fn recompose(&self, decomp: SignedDecompositionIter<Scalar>) -> Option<Scalar> {
        if decomp.is_fresh() {
            Some(decomp.fold(Scalar::ZERO, |acc, term| {
                acc.wrapping_add(term.to_recomposition_summand())
            }))
        } else {
            None
        }
    }
}
