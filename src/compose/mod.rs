//! Composition helpers for monadic code.
//!
//! - [`mdo!`]: Do-notation that desugars to nested `flat_map` calls
//!
//! # Examples
//!
//! ```
//! use monadic::control::Maybe;
//! use monadic::mdo;
//!
//! fn reciprocal(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Maybe::absent() } else { Maybe::present(1.0 / n) }
//! }
//!
//! let result = mdo! {
//!     x <= Maybe::present(4.0);
//!     r <= reciprocal(x);
//!     Maybe::present(r * 2.0)
//! };
//! assert_eq!(result, Maybe::present(0.5));
//! ```

mod mdo_macro;

pub use crate::mdo;
