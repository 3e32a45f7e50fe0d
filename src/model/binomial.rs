//! Binomial distribution helpers for `X ~ B(n, p)`.

use statrs::distribution::{Binomial, Discrete};

/// `P(X = x)`. Zero for `x > n` or a probability outside `[0, 1]`.
pub fn binomial_pmf(x: u32, n: u32, p: f64) -> f64 {
    match Binomial::new(p, u64::from(n)) {
        Ok(dist) => dist.pmf(u64::from(x)),
        Err(_) => 0.0,
    }
}

/// `E[X] = n·p`
pub fn binomial_expectation(n: u32, p: f64) -> f64 {
    n as f64 * p
}

/// `Var[X] = n·p·(1 − p)`
pub fn binomial_variance(n: u32, p: f64) -> f64 {
    n as f64 * p * (1.0 - p)
}

pub fn binomial_std_dev(n: u32, p: f64) -> f64 {
    binomial_variance(n, p).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pmf_sums_to_one() {
        let total: f64 = (0..=12).map(|x| binomial_pmf(x, 12, 0.37)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn pmf_known_value() {
        // C(5,2) * 0.5^5 = 10/32
        assert_relative_eq!(binomial_pmf(2, 5, 0.5), 0.3125, epsilon = 1e-12);
        assert_eq!(binomial_pmf(6, 5, 0.5), 0.0);
    }

    #[test]
    fn pmf_degenerate_probabilities() {
        assert_relative_eq!(binomial_pmf(0, 4, 0.0), 1.0, epsilon = 1e-12);
        assert_eq!(binomial_pmf(1, 4, 0.0), 0.0);
        assert_relative_eq!(binomial_pmf(4, 4, 1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn moments() {
        assert_relative_eq!(binomial_expectation(20, 0.3), 6.0, epsilon = 1e-12);
        assert_relative_eq!(binomial_variance(20, 0.3), 4.2, epsilon = 1e-12);
        assert_relative_eq!(binomial_std_dev(20, 0.3), 4.2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn invalid_probability_has_no_mass() {
        assert_eq!(binomial_pmf(1, 4, 1.5), 0.0);
        assert_eq!(binomial_pmf(1, 4, f64::NAN), 0.0);
    }
}
