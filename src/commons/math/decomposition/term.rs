use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevel};

/// A member of the decomposition.
///
/// If `B` is the base of the decomposition and `l` the level of the term, the
/// term represents the digit `value` scaled by `B^{-l}` on the torus, i.e.
/// `value * 2^(BITS - base_log * l)` in integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionTerm<T>
where
    T: UnsignedInteger,
{
    level: usize,
    base_log: usize,
    value: T,
}

impl<T> DecompositionTerm<T>
where
    T: UnsignedInteger,
{
    pub(crate) fn new(
        level: DecompositionLevel,
        base_log: DecompositionBaseLog,
        value: T,
    ) -> DecompositionTerm<T> {
        DecompositionTerm {
            level: level.0,
            base_log: base_log.0,
            value,
        }
    }

    /// Turn the term into its scaled summand, ready to be added to the other
    /// summands of the decomposition.
    pub fn to_recomposition_summand(&self) -> T {
        let shift: usize = T::BITS - self.base_log * self.level;
        self.value << shift
    }

    /// Return the value of the term, i.e. the digit as a two's complement
    /// signed integer stored in the unsigned type.
    pub fn value(&self) -> T {
        self.value
    }

    /// Return the level of the term.
    pub fn level(&self) -> DecompositionLevel {
        DecompositionLevel(self.level)
    }
}
