use crate::commons::math::decomposition::{decompose_one_level, DecompositionTerm};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevel, DecompositionLevelCount};

/// An iterator over the terms of the signed decomposition of an integer.
pub struct SignedDecompositionIter<T>
where
    T: UnsignedInteger,
{
    // The base log of the decomposition
    base_log: usize,
    // The current level
    current_level: usize,
    // The internal state of the decomposition, containing the digits yet to
    // be output, least significant first
    state: T,
    // A mask which allows to extract one digit from the state
    mod_b_mask: T,
    // A flag which stores whether the iterator is a fresh one (for the
    // recompose method)
    fresh: bool,
}

impl<T> SignedDecompositionIter<T>
where
    T: UnsignedInteger,
{
    pub(crate) fn new(
        input: T,
        base_log: DecompositionBaseLog,
        level: DecompositionLevelCount,
    ) -> SignedDecompositionIter<T> {
        SignedDecompositionIter {
            base_log: base_log.0,
            current_level: level.0,
            state: input >> (T::BITS - base_log.0 * level.0),
            mod_b_mask: (T::ONE << base_log.0) - T::ONE,
            fresh: true,
        }
    }

    pub(crate) fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Return the logarithm in base two of the base of this decomposition.
    pub fn base_log(&self) -> DecompositionBaseLog {
        DecompositionBaseLog(self.base_log)
    }
}

impl<T> Iterator for SignedDecompositionIter<T>
where
    T: UnsignedInteger,
{
    type Item = DecompositionTerm<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.fresh = false;
        // The decomposition is over
        if self.current_level == 0 {
            return None;
        }
        // We decompose the current level
        let output = decompose_one_level(self.base_log, &mut self.state, self.mod_b_mask);
        self.current_level -= 1;
        Some(DecompositionTerm::new(
            DecompositionLevel(self.current_level + 1),
            DecompositionBaseLog(self.base_log),
            output,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current_level, Some(self.current_level))
    }
}
