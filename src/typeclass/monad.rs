//! Monad type class - sequencing computations within a context.
//!
//! A monad controls how the result of one step is handed to the next. The
//! three containers of this crate each merge the bound function's result in
//! their own way:
//!
//! - `Maybe`: substitution, or short-circuit when absent
//! - `IO`: substitution
//! - `Sequence`: concatenation, in input order
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn parse_positive(input: &str) -> Maybe<i32> {
//!     Maybe::from(input.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::present(n * 2));
//! assert_eq!(result, Maybe::present(84));
//! ```

use super::{Applicative, TypeConstructor};

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which lets the result of
/// one computation decide the computation that follows.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Monad;
///
/// let safe_half = |n: i32| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() };
///
/// assert_eq!(Maybe::present(8).flat_map(safe_half), Maybe::present(4));
/// assert_eq!(Maybe::present(7).flat_map(safe_half), Maybe::absent());
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell this is `>>=` (bind). The containers in this crate also
    /// expose it as the `>>` operator.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` carries no value, `next` is dropped and the absence
    /// propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).then(Maybe::present("next")), Maybe::present("next"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::present("next")), Maybe::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// Monadic bind for containers that run the function once per element.
///
/// `Sequence` is the list monad: every element is fed to the function and
/// the produced sequences are concatenated, so the function must be `FnMut`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::typeclass::MonadMut;
///
/// let expanded = Sequence::from(vec![1, 2]).flat_map_mut(|n| Sequence::from(vec![n, n * 10]));
/// assert_eq!(expanded, Sequence::from(vec![1, 10, 2, 20]));
/// ```
pub trait MonadMut: TypeConstructor {
    /// Applies a function to each element and concatenates the results.
    fn flat_map_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;
}

/// Binds a monadic value to a function, as a free function.
///
/// This is the prefix form of `flat_map`, for call sites that read better as
/// `bind(m, f)` than `m.flat_map(f)`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::bind;
///
/// let inverted = bind(Maybe::present(4.0), |x: f64| Maybe::present(1.0 / x));
/// assert_eq!(inverted, Maybe::present(0.25));
/// ```
#[inline]
pub fn bind<M, B, F>(monad: M, function: F) -> M::WithType<B>
where
    M: Monad,
    F: FnOnce(M::Inner) -> M::WithType<B>,
{
    monad.flat_map(function)
}
