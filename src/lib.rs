//! # monadic
//!
//! Monadic composition over three generic containers, with console demos.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over a GAT-based
//!   type constructor
//! - **Containers**: [`Maybe`](control::Maybe) (zero or one value) and
//!   [`Sequence`](control::Sequence) (zero or more values)
//! - **Effects**: [`IO`](effect::IO), the value an eager side effect produced,
//!   and the [`Console`](effect::Console) it is produced from
//! - **Composition**: the `>>` bind operator and the `mdo!` macro
//! - **Demos**: the scenarios behind the three demo binaries
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe` and `Sequence`
//! - `compose`: The `mdo!` macro
//! - `effect`: `IO` and the console
//! - `demo`: Demo scenarios and binaries
//! - `serde`: Serialization for `Maybe` and `Sequence`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn safe_log(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Maybe::absent() } else { Maybe::present(n.ln()) }
//! }
//!
//! fn reciprocal(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Maybe::absent() } else { Maybe::present(1.0 / n) }
//! }
//!
//! let result = Maybe::present(2.0) >> safe_log >> reciprocal;
//! assert_eq!(result.to_string(), "Present 1.4426950408889634");
//!
//! let nothing = Maybe::absent() >> safe_log >> reciprocal;
//! assert_eq!(nothing.to_string(), "Absent");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "control")]
    pub use crate::sequence;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "demo")]
pub mod demo;
