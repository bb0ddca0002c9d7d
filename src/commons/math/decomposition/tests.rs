use crate::commons::math::decomposition::SignedDecomposer;
use crate::commons::math::random::{RandomGenerable, Uniform};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevelCount};
use crate::commons::test_tools::{any_uint, random_usize_between};

fn test_decompose_recompose<T: UnsignedInteger + RandomGenerable<Uniform>>()
where
    i64: From<T::Signed>,
{
    // Checks that the decomposing and recomposing a value brings the closest
    // representable value
    for _ in 0..100_000 {
        let input = any_uint::<T>();
        let base_log = random_usize_between(2..T::BITS / 4);
        let level_max = random_usize_between(1..(T::BITS / base_log).min(5) + 1);
        let decomposer = SignedDecomposer::<T>::new(
            DecompositionBaseLog(base_log),
            DecompositionLevelCount(level_max),
        );

        let rounded = decomposer.closest_representable(input);
        let recomposed = decomposer.recompose(decomposer.decompose(rounded)).unwrap();
        assert_eq!(rounded, recomposed);
    }
}

#[test]
fn test_decompose_recompose_u32() {
    test_decompose_recompose::<u32>();
}

#[test]
fn test_decompose_recompose_u64() {
    test_decompose_recompose::<u64>();
}

fn test_decompose_digits_are_balanced<T: UnsignedInteger + RandomGenerable<Uniform>>()
where
    i64: From<T::Signed>,
{
    // Checks that the decomposition outputs digits in the balanced range
    // [-B/2, B/2]
    for _ in 0..100_000 {
        let input = any_uint::<T>();
        let base_log = random_usize_between(2..T::BITS / 4);
        let level_max = random_usize_between(1..(T::BITS / base_log).min(5) + 1);
        let decomposer = SignedDecomposer::<T>::new(
            DecompositionBaseLog(base_log),
            DecompositionLevelCount(level_max),
        );

        let half_basis = 1i64 << (base_log - 1);
        let mut level_count = 0;
        for term in decomposer.decompose(input) {
            let signed_value = i64::from(term.value().into_signed());
            assert!(signed_value >= -half_basis);
            assert!(signed_value <= half_basis);
            level_count += 1;
        }
        assert_eq!(level_count, level_max);
    }
}

#[test]
fn test_decompose_digits_are_balanced_u32() {
    test_decompose_digits_are_balanced::<u32>();
}

#[test]
fn test_decompose_digits_are_balanced_u64() {
    test_decompose_digits_are_balanced::<u64>();
}

#[test]
fn test_round_to_the_closest_representable() {
    let decomposer =
        SignedDecomposer::<u64>::new(DecompositionBaseLog(4), DecompositionLevelCount(1));

    // rounding at bit 60: values below the half step round down, values at or
    // above round up
    let val = 1u64 << 60;
    assert_eq!(decomposer.closest_representable(val), val);
    assert_eq!(decomposer.closest_representable(val + (1 << 58)), val);
    assert_eq!(
        decomposer.closest_representable(val + (1 << 59)),
        val + (1 << 60)
    );
    assert_eq!(decomposer.closest_representable(val - 1), val);
}

#[test]
fn test_full_width_decomposition_is_exact() {
    // base_log * level_count == 64 leaves no bit unrepresented
    let decomposer =
        SignedDecomposer::<u64>::new(DecompositionBaseLog(16), DecompositionLevelCount(4));
    for _ in 0..1000 {
        let input = any_uint::<u64>();
        assert_eq!(decomposer.closest_representable(input), input);
        let recomposed = decomposer.recompose(decomposer.decompose(input)).unwrap();
        assert_eq!(recomposed, input);
    }
}

#[test]
fn test_recompose_requires_fresh_iterator() {
    let decomposer =
        SignedDecomposer::<u64>::new(DecompositionBaseLog(8), DecompositionLevelCount(3));
    let mut iter = decomposer.decompose(any_uint::<u64>());
    let _ = iter.next();
    assert!(decomposer.recompose(iter).is_none());
}
