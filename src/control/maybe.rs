//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Present(A)` or `Absent`. Binding over an absent
//! value short-circuits: the bound function is never called, so absence
//! travels through arbitrarily long chains untouched.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! fn safe_log(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Maybe::absent() } else { Maybe::present(n.ln()) }
//! }
//!
//! fn reciprocal(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Maybe::absent() } else { Maybe::present(1.0 / n) }
//! }
//!
//! // ln(1) == 0, so the reciprocal step turns the chain absent.
//! let result = Maybe::present(1.0) >> safe_log >> reciprocal;
//! assert_eq!(result, Maybe::absent());
//! assert_eq!(format!("{result}"), "Absent");
//! ```

use std::fmt;
use std::ops::Shr;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// Exactly one of the two states holds, and `Absent` never carries a value.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Monad;
///
/// let balance = Maybe::present(123.45).flat_map(|balance: f64| {
///     let remaining = balance - 5.0;
///     Maybe::when(remaining >= 0.0, remaining)
/// });
/// assert_eq!(balance, Maybe::present(118.45));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// No value. Produced by short-circuiting binds and by producers that
    /// refuse their input.
    #[default]
    Absent,
    /// A value.
    Present(A),
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` in the filled state.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates a `Maybe` in the empty state.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Creates a present value when `condition` holds, absent otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::when(2 > 1, "yes"), Maybe::present("yes"));
    /// assert_eq!(Maybe::when(1 > 2, "yes"), Maybe::absent());
    /// ```
    #[inline]
    pub fn when(condition: bool, value: A) -> Self {
        if condition { Self::Present(value) } else { Self::Absent }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Binds `maybe` to `function`; the associated-function form of
    /// [`Monad::flat_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let doubled = Maybe::bind(Maybe::present(21), |n| Maybe::present(n * 2));
    /// assert_eq!(doubled, Maybe::present(42));
    /// ```
    #[inline]
    pub fn bind<B, F>(maybe: Self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match maybe {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only when `predicate` accepts it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the value, or computes one when absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present {value}"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Bind Operator
// =============================================================================

/// `maybe >> function` is `maybe.flat_map(function)`.
///
/// `>>` is left-associative, so `m >> f >> g` reads as a pipeline.
impl<A, B, F> Shr<F> for Maybe<A>
where
    F: FnOnce(A) -> Maybe<B>,
{
    type Output = Maybe<B>;

    #[inline]
    fn shr(self, function: F) -> Maybe<B> {
        Self::bind(self, function)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::bind(self, function)
    }
}

// =============================================================================
// Serde Implementation
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
