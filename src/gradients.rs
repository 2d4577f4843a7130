use bon::builder;

/// Arithmetic gradient present worth factor (P/G, i, n).
///
/// Moves an arithmetic gradient series to a single payment two periods
/// earlier than the first nonzero payment of the series. The series starts
/// at 0 in period 1 and increases by a constant amount each period.
///
/// # Formula
/// ```text
/// (P/G, i, n) = ((1 + i)ⁿ - in - 1) / (i²(1 + i)ⁿ)
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of periods spanned by the gradient
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = arithmetic_gradient_present_worth().i(0.10).n(5).call();
/// assert!((factor - 6.8618).abs() < 1e-4);
/// ```
#[builder]
pub fn arithmetic_gradient_present_worth(i: f64, n: u32) -> f64 {
    let compound = (1.0 + i).powf(n as f64);
    (compound - i * n as f64 - 1.0) / (i.powi(2) * compound)
}

/// Arithmetic gradient to uniform series factor (A/G, i, n).
///
/// Converts an arithmetic gradient series to a uniform series. The two
/// series cover the same interval, but the first payment of the gradient
/// series is 0.
///
/// # Formula
/// ```text
/// (A/G, i, n) = ((1 + i)ⁿ - in - 1) / (i(1 + i)ⁿ - i)
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of periods spanned by both series
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = arithmetic_gradient_to_uniform_series().i(0.10).n(5).call();
/// assert!((factor - 1.8101).abs() < 1e-4);
/// ```
#[builder]
pub fn arithmetic_gradient_to_uniform_series(i: f64, n: u32) -> f64 {
    let compound = (1.0 + i).powf(n as f64);
    (compound - i * n as f64 - 1.0) / (i * compound - i)
}

/// Geometric series present worth factor (P/A, g, i, n).
///
/// Moves a geometric gradient series to a single payment one period earlier
/// than the first payment. The first payment is 1 at the end of period 1 and
/// each later payment grows by the factor `(1 + g)`.
///
/// # Formula
/// ```text
/// (P/A, g, i, n) = (1 - ((1 + g)/(1 + i))ⁿ) / (i - g)    for g ≠ i
///                = n / (1 + i)                            for g = i
/// ```
/// where:
/// - `g` is the growth rate of the payment series per period
/// - `i` is the interest rate per period
/// - `n` is the number of payment periods
///
/// The `g = i` branch is an exact floating-point equality test: at that
/// point the general quotient degenerates to 0/0, while the limit of the
/// series is n/(1 + i).
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = geometric_series_present_worth().g(0.08).i(0.08).n(10).call();
/// assert!((factor - 10.0 / 1.08).abs() < 1e-12);
/// ```
#[builder]
pub fn geometric_series_present_worth(g: f64, i: f64, n: u32) -> f64 {
    if g == i {
        n as f64 / (1.0 + i)
    } else {
        let growth_ratio = (1.0 + g) / (1.0 + i);
        (1.0 - growth_ratio.powf(n as f64)) / (i - g)
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_arithmetic_gradient_present_worth_01() {
        let rates = [0.05, 0.08, 0.10, 0.15];
        let terms = [10, 20, 5, 20];
        let expected = [31.6520, 69.0898, 6.8618, 33.5822];
        for (k, (rate, term)) in rates.iter().zip(terms.iter()).enumerate() {
            let ans = arithmetic_gradient_present_worth().i(*rate).n(*term).call();
            assert_abs_diff_eq!(ans, expected[k], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_fn_arithmetic_gradient_to_uniform_series_01() {
        let rates = [0.05, 0.08, 0.10, 0.15];
        let terms = [10, 20, 5, 20];
        let expected = [4.0991, 7.0369, 1.8101, 5.3651];
        for (k, (rate, term)) in rates.iter().zip(terms.iter()).enumerate() {
            let ans = arithmetic_gradient_to_uniform_series().i(*rate).n(*term).call();
            assert_abs_diff_eq!(ans, expected[k], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_fn_arithmetic_gradient_matches_cash_flow_sum() {
        // (P/G, i, n) discounts payments of 0, 1, 2, ..., n-1 at the ends of
        // periods 1 through n.
        let i: f64 = 0.06;
        let n = 15u32;
        let mut discounted = 0.0;
        for k in 1..=n {
            discounted += (k - 1) as f64 / (1.0 + i).powf(k as f64);
        }
        let pg = arithmetic_gradient_present_worth().i(i).n(n).call();
        assert_abs_diff_eq!(pg, discounted, epsilon = 1e-9);
    }

    #[test]
    fn test_fn_geometric_series_present_worth_equal_rates() {
        // At g = i the series limit is n/(1 + i), reached by the exact
        // equality branch rather than the 0/0 general quotient.
        let ans = geometric_series_present_worth().g(0.08).i(0.08).n(10).call();
        assert_abs_diff_eq!(ans, 10.0 / 1.08, epsilon = 1e-12);
        assert_abs_diff_eq!(ans, 9.259259, epsilon = 1e-6);
    }

    #[test]
    fn test_fn_geometric_series_present_worth_general() {
        let ans = geometric_series_present_worth().g(0.05).i(0.08).n(10).call();
        let expected = (1.0 - (1.05f64 / 1.08).powf(10.0)) / (0.08 - 0.05);
        assert_abs_diff_eq!(ans, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(ans, 8.1836, epsilon = 1e-4);
    }

    #[test]
    fn test_fn_geometric_series_matches_cash_flow_sum() {
        // First payment 1 at the end of period 1, growing by (1 + g) each
        // period thereafter, discounted at i.
        let g: f64 = 0.04;
        let i: f64 = 0.09;
        let n = 25u32;
        let mut discounted = 0.0;
        for k in 1..=n {
            discounted += (1.0 + g).powf((k - 1) as f64) / (1.0 + i).powf(k as f64);
        }
        let pw = geometric_series_present_worth().g(g).i(i).n(n).call();
        assert_abs_diff_eq!(pw, discounted, epsilon = 1e-9);
    }

    #[test]
    fn test_fn_geometric_series_declining_payments() {
        // Negative growth is allowed: a shrinking series still discounts.
        let pw = geometric_series_present_worth().g(-0.03).i(0.07).n(10).call();
        let mut discounted = 0.0;
        for k in 1..=10u32 {
            discounted += (0.97f64).powf((k - 1) as f64) / (1.07f64).powf(k as f64);
        }
        assert_abs_diff_eq!(pw, discounted, epsilon = 1e-10);
    }
}
