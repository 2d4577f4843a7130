//! # EngEcon Prelude
//!
//! Conveniently re-exports every factor function, the functional-notation
//! shorthand, and the rate conversions with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! use engecon::prelude::*;
//!
//! // Level payment that repays a present amount over five periods at 10%
//! let payment_factor = uniform_series_capital_recovery().i(0.10).n(5).call();
//! assert!((payment_factor - 0.26380).abs() < 1e-5);
//!
//! // Same factor through the functional-notation shorthand
//! assert_eq!(payment_factor, AP(0.10, 5));
//! ```

// Discrete compounding factors
pub use crate::gradients::*;
pub use crate::single_payment::*;
pub use crate::uniform_series::*;

// Continuous compounding factors
pub use crate::continuous::*;

// Functional-notation shorthand
pub use crate::notation::*;

// Interest rate conversions
pub use crate::rate_convert::*;
