//! Type class traits shared by the monadic containers.
//!
//! This module provides the composition conventions that `Maybe`, `IO` and
//! `Sequence` agree on:
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types with GATs
//! - [`Functor`]: Mapping over a single-shot container
//! - [`FunctorMut`]: Mapping over a container with many elements
//! - [`Applicative`]: Lifting pure values and combining independent containers
//! - [`Monad`]: Sequencing computations where each step depends on the last
//! - [`MonadMut`]: Monadic bind for containers that call the function per element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so a trait cannot speak about
//! `Maybe<_>` on its own. Every container implements [`TypeConstructor`],
//! whose `WithType<B>` associated type names "the same container holding a
//! `B`". `Functor`, `Applicative` and `Monad` are written against it.
//!
//! ## Single-shot versus per-element functions
//!
//! `Maybe` and `IO` call the bound function at most once, so their traits
//! take `FnOnce`. `Sequence` calls the function once per element and needs
//! `FnMut`; it implements [`FunctorMut`] and [`MonadMut`] instead.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, Monad};
//!
//! let halved = Maybe::present(10).flat_map(|n| {
//!     if n % 2 == 0 {
//!         <Maybe<()>>::pure(n / 2)
//!     } else {
//!         Maybe::absent()
//!     }
//! });
//! assert_eq!(halved, Maybe::present(5));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadMut, bind};
