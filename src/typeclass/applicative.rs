//! Applicative type class - lifting values and combining independent containers.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::Functor;

/// A type class for functors that can lift pure values and combine
/// independent computations.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::present(42));
///
/// let sum = Maybe::present(1).map2(Maybe::present(2), |x, y| x + y);
/// assert_eq!(sum, Maybe::present(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    ///
    /// This is Haskell's `return`: `Maybe::present`, `IO::pure`, `Sequence::singleton`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context using a binary function.
    ///
    /// If either side has no value (an absent `Maybe`), the result has none.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two values in the context into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    /// use monadic::typeclass::Applicative;
    ///
    /// let pair = IO::pure(1).product(IO::pure("one"));
    /// assert_eq!(pair.into_inner(), (1, "one"));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in the context to a value held in the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
