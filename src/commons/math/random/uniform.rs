use crate::commons::math::random::{ByteRandomGenerator, RandomGenerable, RandomGenerator};

/// The uniform distribution over the full range of an integer type.
#[derive(Debug, Copy, Clone)]
pub struct Uniform;

macro_rules! implement_uniform {
    ($Type:ty) => {
        impl RandomGenerable<Uniform> for $Type {
            #[allow(unused)]
            fn generate_one<G: ByteRandomGenerator>(
                generator: &mut RandomGenerator<G>,
                distribution: Uniform,
            ) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$Type>()];
                buf.iter_mut().for_each(|a| *a = generator.generate_next());
                <$Type>::from_le_bytes(buf)
            }
        }
    };
}

implement_uniform!(u8);
implement_uniform!(u16);
implement_uniform!(u32);
implement_uniform!(u64);
implement_uniform!(u128);
implement_uniform!(i8);
implement_uniform!(i16);
implement_uniform!(i32);
implement_uniform!(i64);
implement_uniform!(i128);
