/// Convert a continuously compounded nominal rate to the equivalent
/// effective rate per period.
///
/// # Formula
/// ```text
/// i = eʳ - 1
/// ```
/// where:
/// - `r` is the nominal rate per period, compounded continuously
///
/// # Example
/// ```rust
/// # use engecon::prelude::cont_r_to_eff_i;
/// let i = cont_r_to_eff_i(0.10); // continuous 10%
/// assert!((i - 0.105171).abs() < 1e-6);
/// ```
pub fn cont_r_to_eff_i(r: f64) -> f64 {
    r.exp() - 1.0
}

/// Convert an effective rate per period to the equivalent continuously
/// compounded nominal rate.
///
/// # Formula
/// ```text
/// r = ln(1 + i)
/// ```
/// where:
/// - `i` is the effective interest rate per period
///
/// # Example
/// ```rust
/// # use engecon::prelude::eff_i_to_cont_r;
/// let r = eff_i_to_cont_r(0.105171); // effective 10.5171%
/// assert!((r - 0.10).abs() < 1e-5);
/// ```
pub fn eff_i_to_cont_r(i: f64) -> f64 {
    (1.0 + i).ln()
}
