//! Module containing the definition of the noise dispersion types.
//!
//! When dealing with noise, we tend to use different representations for the
//! same value. In general, the noise is specified by the standard deviation of
//! a gaussian distribution, which is of the form `s = 2^p` with `p` a negative
//! number. To avoid manipulating bare floats with implicit conventions, the
//! noise strength is always passed around as a type implementing
//! [`DispersionParameter`].

use serde::{Deserialize, Serialize};

/// A trait for types representing the dispersion of a random noise
/// distribution, over the normalized `[0, 1)` torus.
pub trait DispersionParameter: Copy {
    /// Return the standard deviation of the distribution.
    fn get_standard_dev(&self) -> f64;

    /// Return the variance of the distribution.
    fn get_variance(&self) -> f64;

    /// Return the standard deviation of the distribution scaled to a
    /// `2^log2_modulus` modulus.
    fn get_modular_standard_dev(&self, log2_modulus: u32) -> f64 {
        2f64.powi(log2_modulus as i32) * self.get_standard_dev()
    }

    /// Return the variance of the distribution scaled to a `2^log2_modulus`
    /// modulus.
    fn get_modular_variance(&self, log2_modulus: u32) -> f64 {
        2f64.powi(2 * log2_modulus as i32) * self.get_variance()
    }
}

/// A dispersion parameter expressed as the standard deviation of the
/// distribution.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StandardDev(pub f64);

impl StandardDev {
    pub fn from_standard_dev(std: f64) -> Self {
        Self(std)
    }

    pub fn from_log_standard_dev(log_std: f64) -> Self {
        Self(2f64.powf(log_std))
    }
}

impl DispersionParameter for StandardDev {
    fn get_standard_dev(&self) -> f64 {
        self.0
    }

    fn get_variance(&self) -> f64 {
        self.0.powi(2)
    }
}

/// A dispersion parameter expressed as the variance of the distribution.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Variance(pub f64);

impl Variance {
    pub fn from_variance(var: f64) -> Self {
        Self(var)
    }
}

impl DispersionParameter for Variance {
    fn get_standard_dev(&self) -> f64 {
        self.0.sqrt()
    }

    fn get_variance(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn variance_standard_dev_conversion() {
        let std = StandardDev::from_log_standard_dev(-25.);
        assert!((std.get_standard_dev() - 2f64.powi(-25)).abs() < f64::EPSILON);
        assert!((std.get_variance() - 2f64.powi(-50)).abs() < f64::EPSILON);

        let var = Variance(2f64.powi(-50));
        assert!((var.get_standard_dev() - 2f64.powi(-25)).abs() < f64::EPSILON);
    }

    #[test]
    fn modular_standard_dev_scaling() {
        let std = StandardDev(2f64.powi(-25));
        assert!((std.get_modular_standard_dev(64) - 2f64.powi(39)).abs() < 2f64.powi(-10));
    }
}
