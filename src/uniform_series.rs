use bon::builder;

/// Uniform series sinking fund factor (A/F, i, n).
///
/// Spreads a single future payment into a uniform series over the n earlier
/// periods. The last deposit in the series occurs at the same time as F.
///
/// # Formula
/// ```text
/// (A/F, i, n) = i / ((1 + i)ⁿ - 1)
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of deposit periods
///
/// Degenerate inputs are not intercepted: `i = 0` or `n = 0` divides by zero
/// and yields an IEEE special value.
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = uniform_series_sinking_fund().i(0.10).n(5).call();
/// assert!((factor - 0.16380).abs() < 1e-5);
/// ```
#[builder]
pub fn uniform_series_sinking_fund(i: f64, n: u32) -> f64 {
    i / ((1.0 + i).powf(n as f64) - 1.0)
}

/// Uniform series compound amount factor (F/A, i, n).
///
/// Moves a uniform series to a single value at the time of the last payment
/// in the series.
///
/// # Formula
/// ```text
/// (F/A, i, n) = ((1 + i)ⁿ - 1) / i
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of payment periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = uniform_series_compound_amount().i(0.10).n(5).call();
/// assert!((factor - 6.10510).abs() < 1e-5);
/// ```
#[builder]
pub fn uniform_series_compound_amount(i: f64, n: u32) -> f64 {
    ((1.0 + i).powf(n as f64) - 1.0) / i
}

/// Uniform series capital recovery factor (A/P, i, n).
///
/// Spreads a single present payment into a uniform series over the n later
/// periods. The first payment in the series occurs one period later than P.
///
/// # Formula
/// ```text
/// (A/P, i, n) = i(1 + i)ⁿ / ((1 + i)ⁿ - 1)
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of payment periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = uniform_series_capital_recovery().i(0.10).n(5).call();
/// assert!((factor - 0.26380).abs() < 1e-5);
/// ```
#[builder]
pub fn uniform_series_capital_recovery(i: f64, n: u32) -> f64 {
    let compound = (1.0 + i).powf(n as f64);
    i * compound / (compound - 1.0)
}

/// Uniform series present worth factor (P/A, i, n).
///
/// Moves a uniform series to a single payment one period earlier than the
/// first payment of the series.
///
/// # Formula
/// ```text
/// (P/A, i, n) = ((1 + i)ⁿ - 1) / (i(1 + i)ⁿ)
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of payment periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = uniform_series_present_worth().i(0.10).n(5).call();
/// assert!((factor - 3.79079).abs() < 1e-5);
/// ```
#[builder]
pub fn uniform_series_present_worth(i: f64, n: u32) -> f64 {
    let compound = (1.0 + i).powf(n as f64);
    (compound - 1.0) / (i * compound)
}
