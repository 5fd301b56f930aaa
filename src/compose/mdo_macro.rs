//! Do-notation over the crate's containers.
//!
//! `mdo!` rewrites a block of binds into nested `flat_map` calls, so a chain
//! reads top to bottom instead of as a tower of closures. It works for every
//! container: [`Maybe`](crate::control::Maybe) and [`IO`](crate::effect::IO)
//! through [`Monad`](crate::typeclass::Monad), and
//! [`Sequence`](crate::control::Sequence) through its own `flat_map`.
//!
//! # Syntax
//!
//! ```text
//! mdo! {
//!     pattern <= container;   // bind the value(s) inside the container
//!     let pattern = expr;     // plain binding
//!     container_expression    // final container, returned as-is
//! }
//! ```

/// Chains binds in do-notation.
///
/// Each `pattern <= expression;` line binds the value of `expression` and
/// continues with the remaining lines. The last line must be a container
/// value of the same kind.
///
/// Bind closures are `move` closures. For [`Sequence`](crate::control::Sequence)
/// the continuation runs once per element, so everything it captures must be
/// usable more than once (typically `Copy` values or values that are cloned).
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::mdo;
///
/// let result = mdo! {
///     user <= Maybe::present(0xC001_D00D_u32);
///     wallet <= Maybe::when(user == 0xC001_D00D, 0x6361_7368_u32);
///     let balance = if wallet == 0x6361_7368 { 123.45 } else { 0.0 };
///     Maybe::present(balance - 5.0)
/// };
/// assert_eq!(result, Maybe::present(118.45));
/// ```
///
/// ```rust
/// use monadic::{mdo, sequence};
///
/// let pairs = mdo! {
///     x <= sequence![1, 2];
///     y <= sequence!['a', 'b'];
///     sequence![(x, y)]
/// };
/// assert_eq!(pairs, sequence![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
#[macro_export]
macro_rules! mdo {
    ($result:expr) => {
        $result
    };

    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        ($container).flat_map(move |$pattern| {
            $crate::mdo!($($rest)+)
        })
    }};

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        ($container).flat_map(move |($($pattern)*)| {
            $crate::mdo!($($rest)+)
        })
    }};

    (_ <= $container:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        ($container).flat_map(move |_| {
            $crate::mdo!($($rest)+)
        })
    }};

    (let $pattern:ident = $expression:expr ; $($rest:tt)+) => {{
        let $pattern = $expression;
        $crate::mdo!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expression:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expression;
        $crate::mdo!($($rest)+)
    }};
}

#[cfg(all(test, feature = "effect"))]
mod tests {
    use crate::control::{Maybe, Sequence};
    use crate::effect::IO;
    use crate::sequence;
    use rstest::rstest;
    use std::cell::Cell;

    fn safe_log(n: f64) -> Maybe<f64> {
        if n == 0.0 { Maybe::absent() } else { Maybe::present(n.ln()) }
    }

    #[rstest]
    fn maybe_binds_in_order() {
        let result = mdo! {
            x <= Maybe::present(5);
            y <= Maybe::present(10);
            Maybe::present(x + y)
        };
        assert_eq!(result, Maybe::present(15));
    }

    #[rstest]
    fn maybe_short_circuits() {
        let calls = Cell::new(0);
        let counter = &calls;
        let result: Maybe<f64> = mdo! {
            x <= Maybe::present(0.0);
            y <= safe_log(x);
            {
                counter.set(counter.get() + 1);
                Maybe::present(y)
            }
        };
        assert_eq!(result, Maybe::absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn let_and_wildcard() {
        let result = mdo! {
            _ <= Maybe::present("ignored");
            let doubled = 21 * 2;
            Maybe::present(doubled)
        };
        assert_eq!(result, Maybe::present(42));
    }

    #[rstest]
    fn tuple_patterns() {
        let result = mdo! {
            (a, b) <= Maybe::present((1, 2));
            let (c, d) = (a * 10, b * 10);
            Maybe::present(a + b + c + d)
        };
        assert_eq!(result, Maybe::present(33));
    }

    #[rstest]
    fn single_expression() {
        assert_eq!(mdo! { IO::pure(42) }, IO::pure(42));
    }

    #[rstest]
    fn io_threads_values() {
        let result = mdo! {
            name <= IO::pure(String::from("Ada"));
            let greeting = format!("Pleased to meet you, {name}!");
            IO::pure(greeting)
        };
        assert_eq!(result.into_inner(), "Pleased to meet you, Ada!");
    }

    #[rstest]
    fn sequence_expands_every_path() {
        let result = mdo! {
            x <= sequence![1, 2, 3];
            y <= sequence![x, x * 10];
            Sequence::singleton(y)
        };
        assert_eq!(result, sequence![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn sequence_empty_drops_path() {
        let result = mdo! {
            x <= sequence![1, 2, 3, 4];
            let even = x % 2 == 0;
            if even { sequence![x] } else { Sequence::new() }
        };
        assert_eq!(result, sequence![2, 4]);
    }
}
