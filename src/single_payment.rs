use bon::builder;

/// Single payment compound amount factor (F/P, i, n).
///
/// Moves a single payment to n periods later in time: the amount a payment
/// of 1 grows to after n periods of compounding at rate `i`.
///
/// # Formula
/// ```text
/// (F/P, i, n) = (1 + i)ⁿ
/// ```
/// where:
/// - `i` is the interest rate per period
/// - `n` is the number of compounding periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = single_payment_compound_amount().i(0.10).n(5).call();
/// assert!((factor - 1.61051).abs() < 1e-5);
/// ```
#[builder]
pub fn single_payment_compound_amount(i: f64, n: u32) -> f64 {
    (1.0 + i).powf(n as f64)
}

/// Single payment present worth factor (P/F, i, n).
///
/// Moves a single payment to n periods earlier in time: the present value of
/// a payment of 1 due n periods from now, discounted at rate `i`.
///
/// # Formula
/// ```text
/// (P/F, i, n) = 1 / (1 + i)ⁿ
/// ```
/// where:
/// - `i` is the interest (discount) rate per period
/// - `n` is the number of discounting periods
///
/// # Example
/// ```rust
/// # use engecon::prelude::*;
/// let factor = single_payment_present_worth().i(0.10).n(5).call();
/// assert!((factor - 0.62092).abs() < 1e-5);
/// ```
#[builder]
pub fn single_payment_present_worth(i: f64, n: u32) -> f64 {
    1.0 / (1.0 + i).powf(n as f64)
}
