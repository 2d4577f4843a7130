//! # EngEcon
//!
//! A small, dependency-light Rust library of closed-form engineering-economics
//! factors for time-value-of-money calculations.
//!
//! ## Features
//! - **Complete factor set**: single payment, uniform series, arithmetic and
//!   geometric gradients, and continuous compounding
//! - **Pure functions**: every factor is a stateless closed-form mapping from
//!   rate(s) and a period count to a dimensionless multiplier
//! - **Textbook semantics**: degenerate inputs (zero rates, zero periods) are
//!   not intercepted; IEEE floating-point values propagate as they do through
//!   the underlying equations
//! - **Builder Pattern**: factor functions take named parameters, so `g` and
//!   `i` cannot be transposed at a call site
//! - **Functional notation**: the classical `(F/P, i, n)` shorthand is
//!   available as thin aliases over the descriptive names
//!
//! ## Quick Start
//!
//! ```rust
//! use engecon::prelude::*;
//!
//! // (F/P, 10%, 5): grow a single payment forward five periods
//! let fp = single_payment_compound_amount().i(0.10).n(5).call();
//! assert!((fp - 1.61051).abs() < 1e-5);
//!
//! // (A/P, 10%, 5): level payment equivalent to a present amount
//! let ap = uniform_series_capital_recovery().i(0.10).n(5).call();
//! assert!((ap - 0.26380).abs() < 1e-5);
//!
//! // Geometric series growing 5% per period, discounted at 8%
//! let pw = geometric_series_present_worth().g(0.05).i(0.08).n(10).call();
//! assert!((pw - 8.1836).abs() < 1e-4);
//! ```
//!
//! ## Supported Functions
//!
//! - **Single payment**: `single_payment_compound_amount`,
//!   `single_payment_present_worth`
//! - **Uniform series**: `uniform_series_sinking_fund`,
//!   `uniform_series_compound_amount`, `uniform_series_capital_recovery`,
//!   `uniform_series_present_worth`
//! - **Gradients**: `arithmetic_gradient_present_worth`,
//!   `arithmetic_gradient_to_uniform_series`, `geometric_series_present_worth`
//! - **Continuous compounding**: `continuous_compounding_sinking_fund`,
//!   `continuous_compounding_capital_recovery`,
//!   `continuous_compounding_series_compound_amount`,
//!   `continuous_compounding_series_present_worth`
//! - **Shorthand**: `FP`, `PF`, `AF`, `FA`, `AP`, `PA`, `PG`, `AG`
//! - **Rate conversions**: between continuously compounded nominal rates and
//!   effective per-period rates
//!
//! ## Notes
//! - A factor is a dimensionless multiplier; callers apply it to a cash
//!   amount themselves
//! - Factors that divide by the rate follow IEEE semantics at `i = 0` (the
//!   result is infinite or NaN rather than an error)
//! - All functions are pure and safe to call concurrently from any number of
//!   threads

pub mod continuous;
pub mod gradients;
pub mod notation;
pub mod prelude;
pub mod rate_convert;
pub mod single_payment;
pub mod uniform_series;
