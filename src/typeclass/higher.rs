//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this: each container reports the type it
//! is currently applied to (`Inner`) and how to re-apply itself to another
//! type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let filled: Maybe<i32> = Maybe::present(42);
//! let empty: Maybe<String> = emptied(filled);
//! assert!(empty.is_absent());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a container applied to some type `A`, for
/// example `Maybe<A>` or `Sequence<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor, so transformations
    /// can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
