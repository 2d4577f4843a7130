#![allow(non_snake_case)]

//! Functional-notation shorthand for the discrete compounding factors.
//!
//! Engineering-economics texts write the discrete factors as two-letter
//! symbols, `(F/P, i, n)` and so on. Each shorthand here is a thin wrapper
//! over the descriptively named factor; none re-states a formula.

use crate::gradients::{arithmetic_gradient_present_worth, arithmetic_gradient_to_uniform_series};
use crate::single_payment::{single_payment_compound_amount, single_payment_present_worth};
use crate::uniform_series::{
    uniform_series_capital_recovery, uniform_series_compound_amount,
    uniform_series_present_worth, uniform_series_sinking_fund,
};

/// Single payment compound amount factor (F/P, i, n).
///
/// Shorthand for [`single_payment_compound_amount`].
pub fn FP(i: f64, n: u32) -> f64 {
    single_payment_compound_amount().i(i).n(n).call()
}

/// Single payment present worth factor (P/F, i, n).
///
/// Shorthand for [`single_payment_present_worth`].
pub fn PF(i: f64, n: u32) -> f64 {
    single_payment_present_worth().i(i).n(n).call()
}

/// Uniform series sinking fund factor (A/F, i, n).
///
/// Shorthand for [`uniform_series_sinking_fund`].
pub fn AF(i: f64, n: u32) -> f64 {
    uniform_series_sinking_fund().i(i).n(n).call()
}

/// Uniform series compound amount factor (F/A, i, n).
///
/// Shorthand for [`uniform_series_compound_amount`].
pub fn FA(i: f64, n: u32) -> f64 {
    uniform_series_compound_amount().i(i).n(n).call()
}

/// Uniform series capital recovery factor (A/P, i, n).
///
/// Shorthand for [`uniform_series_capital_recovery`].
pub fn AP(i: f64, n: u32) -> f64 {
    uniform_series_capital_recovery().i(i).n(n).call()
}

/// Uniform series present worth factor (P/A, i, n).
///
/// Shorthand for [`uniform_series_present_worth`].
pub fn PA(i: f64, n: u32) -> f64 {
    uniform_series_present_worth().i(i).n(n).call()
}

/// Arithmetic gradient present worth factor (P/G, i, n).
///
/// Shorthand for [`arithmetic_gradient_present_worth`].
pub fn PG(i: f64, n: u32) -> f64 {
    arithmetic_gradient_present_worth().i(i).n(n).call()
}

/// Arithmetic gradient to uniform series factor (A/G, i, n).
///
/// Shorthand for [`arithmetic_gradient_to_uniform_series`].
pub fn AG(i: f64, n: u32) -> f64 {
    arithmetic_gradient_to_uniform_series().i(i).n(n).call()
}
