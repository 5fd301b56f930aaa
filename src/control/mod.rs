//! Value containers composed through monadic bind.
//!
//! - [`Maybe`]: Zero or one value; binding short-circuits on absence
//! - [`Sequence`]: Zero or more values; binding flattens
//!
//! # Examples
//!
//! ## Short-circuiting lookups
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! let lookup = |id: u32| if id == 7 { Maybe::present("seven") } else { Maybe::absent() };
//!
//! assert_eq!(Maybe::present(7) >> lookup, Maybe::present("seven"));
//! assert_eq!(Maybe::present(8) >> lookup, Maybe::absent());
//! ```
//!
//! ## Non-deterministic expansion
//!
//! ```rust
//! use monadic::sequence;
//!
//! let steps = |n: i32| sequence![n - 1, n + 1];
//!
//! let two_steps = sequence![0] >> steps >> steps;
//! assert_eq!(two_steps, sequence![-2, 0, 0, 2]);
//! ```

mod maybe;
mod sequence;

pub use maybe::Maybe;
pub use sequence::Sequence;
