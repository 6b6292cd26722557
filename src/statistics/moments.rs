//! Sample moments over a fixed-size slice.

/// Arithmetic mean.
///
/// Returns `NaN` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (divides by `n - 1`).
///
/// Undefined below two observations; returns `NaN` there instead of a
/// misleading zero.
pub fn sample_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let mu = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - mu).powi(2)).sum();
    sum_sq / (n - 1) as f64
}

/// Sample standard deviation, the square root of [`sample_variance`].
pub fn sample_stddev(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_stddev_uses_n_minus_one() {
        // Population variance of [2,4,4,4,5,5,7,9] is 4, sample variance is 32/7
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_variance(&data) - 32.0 / 7.0).abs() < 1e-12);
        assert!((sample_stddev(&data) - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        assert_eq!(sample_stddev(&[1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_single_observation_is_undefined() {
        assert!(sample_variance(&[0.6]).is_nan());
        assert!(sample_stddev(&[0.6]).is_nan());
    }
}
