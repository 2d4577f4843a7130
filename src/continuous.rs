use bon::builder;

/// Continuous compounding sinking fund factor (A/F, r, n).
///
/// Spreads a single future payment into a uniform series of n end-of-period
/// deposits under continuous compounding at nominal rate `r` per period.
///
/// # Formula
/// ```text
/// (A/F, r, n) = (eʳ - 1) / (eʳⁿ - 1)
/// ```
/// where:
/// - `r` is the nominal interest rate per period, compounded continuously
/// - `n` is the number of deposit periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = continuous_compounding_sinking_fund().r(0.10).n(5).call();
/// assert!((factor - 0.16212).abs() < 1e-5);
/// ```
#[builder]
pub fn continuous_compounding_sinking_fund(r: f64, n: u32) -> f64 {
    (r.exp() - 1.0) / ((r * n as f64).exp() - 1.0)
}

/// Continuous compounding capital recovery factor (A/P, r, n).
///
/// Spreads a single present payment into a uniform series of n end-of-period
/// payments under continuous compounding at nominal rate `r` per period.
///
/// # Formula
/// ```text
/// (A/P, r, n) = eʳⁿ(eʳ - 1) / (eʳⁿ - 1)
/// ```
/// where:
/// - `r` is the nominal interest rate per period, compounded continuously
/// - `n` is the number of payment periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = continuous_compounding_capital_recovery().r(0.10).n(5).call();
/// assert!((factor - 0.26729).abs() < 1e-5);
/// ```
#[builder]
pub fn continuous_compounding_capital_recovery(r: f64, n: u32) -> f64 {
    let compound = (r * n as f64).exp();
    compound * (r.exp() - 1.0) / (compound - 1.0)
}

/// Continuous compounding series compound amount factor (F/A, r, n).
///
/// Moves a uniform series of n end-of-period payments to a single value at
/// the time of the last payment, under continuous compounding at nominal
/// rate `r` per period.
///
/// # Formula
/// ```text
/// (F/A, r, n) = (eʳⁿ - 1) / (eʳ - 1)
/// ```
/// where:
/// - `r` is the nominal interest rate per period, compounded continuously
/// - `n` is the number of payment periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = continuous_compounding_series_compound_amount().r(0.10).n(5).call();
/// assert!((factor - 6.16826).abs() < 1e-5);
/// ```
#[builder]
pub fn continuous_compounding_series_compound_amount(r: f64, n: u32) -> f64 {
    ((r * n as f64).exp() - 1.0) / (r.exp() - 1.0)
}

/// Continuous compounding series present worth factor (P/A, r, n).
///
/// Moves a uniform series of n end-of-period payments to a single payment
/// one period earlier than the first payment, under continuous compounding
/// at nominal rate `r` per period.
///
/// # Formula
/// ```text
/// (P/A, r, n) = (eʳⁿ - 1) / (eʳⁿ(eʳ - 1))
/// ```
/// where:
/// - `r` is the nominal interest rate per period, compounded continuously
/// - `n` is the number of payment periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = continuous_compounding_series_present_worth().r(0.10).n(5).call();
/// assert!((factor - 3.74124).abs() < 1e-5);
/// ```
#[builder]
pub fn continuous_compounding_series_present_worth(r: f64, n: u32) -> f64 {
    let compound = (r * n as f64).exp();
    (compound - 1.0) / (compound * (r.exp() - 1.0))
}
