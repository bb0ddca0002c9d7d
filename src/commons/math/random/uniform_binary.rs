use crate::commons::math::random::{ByteRandomGenerator, RandomGenerable, RandomGenerator};

/// The uniform distribution over `{0, 1}`.
#[derive(Debug, Copy, Clone)]
pub struct UniformBinary;

macro_rules! implement_uniform_binary {
    ($Type:ty) => {
        impl RandomGenerable<UniformBinary> for $Type {
            #[allow(unused)]
            fn generate_one<G: ByteRandomGenerator>(
                generator: &mut RandomGenerator<G>,
                distribution: UniformBinary,
            ) -> Self {
                <$Type>::from(generator.generate_next() & 1)
            }
        }
    };
}

implement_uniform_binary!(u8);
implement_uniform_binary!(u16);
implement_uniform_binary!(u32);
implement_uniform_binary!(u64);
implement_uniform_binary!(u128);
