//! Module with the balanced signed decomposition of unsigned integers.
//!
//! The decomposition writes the most significant `base_log * level_count`
//! bits of an integer as a sum of signed digits in
//! `[-2^(base_log-1), 2^(base_log-1)]`, each scaled by a power of the
//! `2^base_log` basis. Digits are balanced around zero to halve the worst
//! case digit magnitude, which directly reduces the noise introduced by key
//! switching.

mod decomposer;
mod iter;
mod term;

pub use decomposer::*;
pub use iter::*;
pub use term::*;

use crate::commons::numeric::UnsignedInteger;

// Extract the next balanced digit from the decomposition state.
//
// `state` holds the remaining digits, least significant first. The extracted
// digit is mapped from `[0, 2^base_log)` to the balanced range by borrowing a
// carry from the next digit when it is at least `2^(base_log-1)`.
pub(crate) fn decompose_one_level<S: UnsignedInteger>(
    base_log: usize,
    state: &mut S,
    mod_b_mask: S,
) -> S {
    let res = *state & mod_b_mask;
    *state >>= base_log;
    let mut carry = (res.wrapping_sub(S::ONE) | *state) & res;
    carry >>= base_log - 1;
    *state += carry;
    res.wrapping_sub(carry << base_log)
}

#[cfg(test)]
mod tests;
