use crate::commons::math::random::{ByteRandomGenerator, RandomGenerable, RandomGenerator};
use crate::commons::math::torus::UnsignedTorus;

/// The gaussian distribution of mean `mean` and standard deviation `std`.
#[derive(Debug, Copy, Clone)]
pub struct Gaussian<T> {
    /// The standard deviation of the distribution.
    pub std: T,
    /// The mean of the distribution.
    pub mean: T,
}

impl RandomGenerable<Gaussian<f64>> for (f64, f64) {
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        Gaussian { std, mean }: Gaussian<f64>,
    ) -> Self {
        // Marsaglia polar method: rejection-sample a point in the unit disk,
        // then derive two independent normal samples from it.
        loop {
            let u: f64 = (generator.random_uniform::<i64>() as f64) * 2f64.powi(-63);
            let v: f64 = (generator.random_uniform::<i64>() as f64) * 2f64.powi(-63);
            let s = u * u + v * v;
            if s > 0. && s < 1. {
                let cst = std * f64::sqrt(-2. * f64::ln(s) / s);
                return (u * cst + mean, v * cst + mean);
            }
        }
    }
}

impl<Torus> RandomGenerable<Gaussian<f64>> for (Torus, Torus)
where
    Torus: UnsignedTorus,
{
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: Gaussian<f64>,
    ) -> Self {
        let (s0, s1) = <(f64, f64)>::generate_one(generator, distribution);
        (Torus::from_torus(s0), Torus::from_torus(s1))
    }
}

impl<Torus> RandomGenerable<Gaussian<f64>> for Torus
where
    Torus: UnsignedTorus,
{
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: Gaussian<f64>,
    ) -> Self {
        <(Torus, Torus)>::generate_one(generator, distribution).0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::math::random::DefaultRandomGenerator;
    use crate::commons::test_tools::any_seed;

    #[test]
    fn gaussian_f64_moments() {
        let mut generator = RandomGenerator::<DefaultRandomGenerator>::new(any_seed());
        let n = 100_000usize;
        let std = 2f64.powi(-20);

        let mut sum = 0f64;
        let mut sum_sq = 0f64;
        for _ in 0..n {
            let (s0, s1) = <(f64, f64)>::generate_one(
                &mut generator,
                Gaussian { std, mean: 0. },
            );
            sum += s0 + s1;
            sum_sq += s0 * s0 + s1 * s1;
        }
        let samples = (2 * n) as f64;
        let mean = sum / samples;
        let var = sum_sq / samples - mean * mean;

        assert!(mean.abs() < 5. * std / samples.sqrt());
        assert!((var / std.powi(2) - 1.).abs() < 0.05);
    }

    #[test]
    fn gaussian_torus_values_stay_close_to_zero() {
        let mut generator = RandomGenerator::<DefaultRandomGenerator>::new(any_seed());
        let std = 2f64.powi(-25);
        for _ in 0..1000 {
            let (s0, s1): (u64, u64) =
                <(u64, u64)>::generate_one(&mut generator, Gaussian { std, mean: 0. });
            for s in [s0, s1] {
                let centered = (s as i64).abs() as f64 * 2f64.powi(-64);
                assert!(centered < 10. * std);
            }
        }
    }
}
