//! IO Monad - the result of a side effect that has already run.
//!
//! `IO<A>` wraps a single value understood as "what an effect produced".
//! Effects in this crate are **eager**: the side effect happens when the
//! `IO` value is constructed, and binding only passes the value on.
//!
//! # Design Philosophy
//!
//! A producer function such as "ask the user for their name" performs its
//! console read the moment it is called and hands back an `IO<String>`.
//! Composing `IO` values therefore orders *expressions*, not deferred
//! execution: constructing two `IO` values and composing them later runs
//! both effects in construction order. This is a deliberate simplification
//! relative to lazy IO.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::IO;
//! use monadic::typeclass::Monad;
//!
//! let io = IO::pure(10)
//!     .flat_map(|x| IO::pure(x * 2))
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.into_inner(), 21);
//! ```
//!
//! # Eager Side Effects
//!
//! ```rust
//! use monadic::effect::IO;
//! use std::cell::Cell;
//!
//! let executed = Cell::new(false);
//!
//! let io = IO::capture(|| {
//!     executed.set(true);
//!     42
//! });
//!
//! // Already executed at construction
//! assert!(executed.get());
//! assert_eq!(io.into_inner(), 42);
//! ```

use std::fmt;
use std::io::{BufRead, Write};
use std::ops::Shr;

use super::{Console, ConsoleError};
use crate::control::{Maybe, Sequence};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The value produced by an effect that has already happened.
///
/// There is no empty state. `IO<()>` stands for an effect performed only
/// for its side effect, such as printing.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IO<A> {
    value: A,
}

impl<A> IO<A> {
    /// Wraps an already-computed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self { value }
    }

    /// Alias for [`IO::pure`].
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::pure(value)
    }

    /// Runs `action` now and wraps what it returns.
    ///
    /// This is the shape of every effect producer: the side effect happens
    /// during this call, not when the result is later composed.
    #[inline]
    pub fn capture<F>(action: F) -> Self
    where
        F: FnOnce() -> A,
    {
        Self::pure(action())
    }

    /// Consumes the `IO` and returns the produced value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.value
    }

    /// Returns a reference to the produced value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.value
    }

    /// Binds `io` to `function`; the associated-function form of
    /// [`Monad::flat_map`].
    #[inline]
    pub fn bind<B, F>(io: Self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B>,
    {
        function(io.value)
    }

    /// Binds `io` to an effect producer that can fail.
    ///
    /// Console-backed producers return `Result<IO<B>, E>`; this threads the
    /// produced value into one of them and hands its result back unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever error `function` returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::{Console, IO};
    ///
    /// let mut console = Console::new(std::io::empty(), Vec::new());
    /// let greeted = IO::pure("Ada")
    ///     .try_flat_map(|name| console.write_line(format!("Pleased to meet you, {name}!")));
    ///
    /// assert!(greeted.is_ok());
    /// ```
    #[inline]
    pub fn try_flat_map<B, E, F>(self, function: F) -> Result<IO<B>, E>
    where
        F: FnOnce(A) -> Result<IO<B>, E>,
    {
        function(self.value)
    }
}

impl IO<()> {
    /// Writes `message` as one line to the console now.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the console output fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::{Console, IO};
    ///
    /// let mut console = Console::new(std::io::empty(), Vec::new());
    /// IO::print_line(&mut console, "Pleased to meet you, Ada!").unwrap();
    ///
    /// let (_, output) = console.into_parts();
    /// assert_eq!(String::from_utf8(output).unwrap(), "Pleased to meet you, Ada!\n");
    /// ```
    pub fn print_line<R, W, M>(console: &mut Console<R, W>, message: M) -> Result<Self, ConsoleError>
    where
        R: BufRead,
        W: Write,
        M: fmt::Display,
    {
        console.write_line(message)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

/// Values an `IO` knows how to print.
///
/// The unit value prints as empty text, so a side-effect-only `IO<()>`
/// renders as `IO ()`.
pub trait ShowValue {
    /// Writes the value's printed form.
    ///
    /// # Errors
    ///
    /// Propagates the formatter's error.
    fn show(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ShowValue for () {
    fn show(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

macro_rules! show_via_display {
    ($($type:ty),+ $(,)?) => {
        $(
            impl ShowValue for $type {
                fn show(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, formatter)
                }
            }
        )+
    };
}

show_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &str,
);

impl<A: fmt::Display> ShowValue for Maybe<A> {
    fn show(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

impl<A: fmt::Display> ShowValue for Sequence<A> {
    fn show(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

impl<A: ShowValue> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "IO (")?;
        self.value.show(formatter)?;
        write!(formatter, ")")
    }
}

// =============================================================================
// Bind Operator
// =============================================================================

/// `io >> function` is `io.flat_map(function)`.
impl<A, B, F> Shr<F> for IO<A>
where
    F: FnOnce(A) -> IO<B>,
{
    type Output = IO<B>;

    #[inline]
    fn shr(self, function: F) -> IO<B> {
        Self::bind(self, function)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A> Functor for IO<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B,
    {
        IO::pure(function(self.value))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> IO<B>
    where
        F: FnOnce(&A) -> B,
    {
        IO::pure(function(&self.value))
    }
}

impl<A> Applicative for IO<A> {
    #[inline]
    fn pure<B>(value: B) -> IO<B> {
        IO::pure(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C,
    {
        IO::pure(function(self.value, other.value))
    }
}

impl<A> Monad for IO<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B>,
    {
        Self::bind(self, function)
    }
}
