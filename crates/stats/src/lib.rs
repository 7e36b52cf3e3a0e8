//! Statistical helper functions for chainsim.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Returns an ascending copy of `data`. NaN values compare as equal.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Linear-interpolation quantile (Hyndman & Fan type 7).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// `n` evenly spaced points from `start` to `end`, both inclusive.
///
/// `n == 1` yields `[start]` and `n == 0` yields an empty vector. The last
/// point is exactly `end` so grids line up with closed windows.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Equal-width histogram over `[min(data), max(data)]`.
///
/// Returns `(edges, counts)` with `edges.len() == bins + 1`. The last bin is
/// closed on the right so the maximum is counted. A constant sample puts
/// every value in the first bin of a unit-width range. Returns empty
/// vectors if `data` is empty or `bins == 0`.
pub fn histogram(data: &[f64], bins: usize) -> (Vec<f64>, Vec<usize>) {
    if data.is_empty() || bins == 0 {
        return (Vec::new(), Vec::new());
    }
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi <= lo {
        hi = lo + 1.0;
    }
    let edges = linspace(lo, hi, bins + 1);
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &x in data {
        let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    (edges, counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_quantile_type7_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 1.4, epsilon = 1e-10);
        assert_relative_eq!(quantile_type7(&sorted, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile_type7(&sorted, 1.0), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_median_odd() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0]), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_median_even() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    #[should_panic(expected = "median: input must not be empty")]
    fn test_median_empty_panics() {
        median(&[]);
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid[1], 0.25, epsilon = 1e-12);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[4], 1.0);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn test_histogram_counts() {
        let data = [0.0, 0.1, 0.5, 0.9, 1.0];
        let (edges, counts) = histogram(&data, 2);
        assert_eq!(edges.len(), 3);
        assert_eq!(counts, vec![2, 3]);
        assert_eq!(counts.iter().sum::<usize>(), data.len());
    }

    #[test]
    fn test_histogram_constant() {
        let (edges, counts) = histogram(&[4.0, 4.0, 4.0], 3);
        assert_eq!(edges[0], 4.0);
        assert_eq!(counts, vec![3, 0, 0]);
    }

    #[test]
    fn test_histogram_empty() {
        let (edges, counts) = histogram(&[], 4);
        assert!(edges.is_empty());
        assert!(counts.is_empty());
    }
}
