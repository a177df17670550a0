//! Descriptive statistics over return series.
//!
//! All helpers are total: empty inputs and zero-variance series return
//! zero instead of `NaN`, matching the fallback policy of the analysers.

use num_traits::Float;

/// Arithmetic mean; zero for an empty slice.
///
/// # Examples
/// ```
/// use econ_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), 2.0);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// ```
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    values.iter().fold(T::zero(), |acc, &v| acc + v) / n
}

/// Population variance around `centre`; zero for an empty slice.
pub fn variance_about<T: Float>(values: &[T], centre: T) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - centre) * (v - centre))
        / n
}

/// Population standard deviation; zero for fewer than one value.
pub fn std_dev<T: Float>(values: &[T]) -> T {
    variance_about(values, mean(values)).sqrt()
}

/// Simple period returns `(x_i - x_{i-1}) / x_{i-1}`.
///
/// A zero previous value yields a zero return.
///
/// # Examples
/// ```
/// use econ_core::math::stats::simple_returns;
///
/// let r = simple_returns(&[100.0_f64, 110.0, 99.0]);
/// assert_eq!(r.len(), 2);
/// assert!((r[0] - 0.1).abs() < 1e-12);
/// assert!((r[1] + 0.1).abs() < 1e-12);
/// ```
pub fn simple_returns<T: Float>(series: &[T]) -> Vec<T> {
    series
        .windows(2)
        .map(|w| {
            if w[0] == T::zero() {
                T::zero()
            } else {
                (w[1] - w[0]) / w[0]
            }
        })
        .collect()
}

/// Ascending sort of a copy of the input; `NaN` compares equal.
pub fn sorted_ascending<T: Float>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Index `floor(q * len)` used by the historical VaR method, clamped to the
/// last element. `None` for an empty slice.
pub fn tail_index(len: usize, q: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let idx = (q * len as f64).floor() as usize;
    Some(idx.min(len - 1))
}

/// Element of `sorted` at `floor(q * len)`; `None` for an empty slice.
pub fn empirical_quantile<T: Float>(sorted: &[T], q: f64) -> Option<T> {
    tail_index(sorted.len(), q).map(|i| sorted[i])
}

/// Pearson correlation over the common prefix of two series.
///
/// Zero when fewer than two paired observations exist or either series
/// has zero variance.
///
/// # Examples
/// ```
/// use econ_core::math::stats::pearson_correlation;
///
/// let a = [1.0_f64, 2.0, 3.0, 4.0];
/// let b = [2.0_f64, 4.0, 6.0, 8.0];
/// assert!((pearson_correlation(&a, &b) - 1.0).abs() < 1e-12);
/// ```
pub fn pearson_correlation<T: Float>(a: &[T], b: &[T]) -> T {
    let n = a.len().min(b.len());
    if n < 2 {
        return T::zero();
    }
    let (a, b) = (&a[..n], &b[..n]);
    let (mean_a, mean_b) = (mean(a), mean(b));
    let mut cov = T::zero();
    let mut var_a = T::zero();
    let mut var_b = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov = cov + dx * dy;
        var_a = var_a + dx * dx;
        var_b = var_b + dy * dy;
    }
    let denom = (var_a * var_b).sqrt();
    if denom == T::zero() {
        T::zero()
    } else {
        cov / denom
    }
}
