//! Partial numeric functions that refuse instead of faulting.

use crate::control::Maybe;

/// Natural logarithm that refuses zero.
///
/// Negative inputs are passed through to [`f64::ln`] and produce `NaN`;
/// only the division-style fault at zero is turned into absence.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::demo::numeric::safe_log;
///
/// assert_eq!(safe_log(1.0), Maybe::present(0.0));
/// assert_eq!(safe_log(0.0), Maybe::absent());
/// ```
pub fn safe_log(n: f64) -> Maybe<f64> {
    if n == 0.0 {
        tracing::trace!("safe_log refused zero");
        Maybe::absent()
    } else {
        Maybe::present(n.ln())
    }
}

/// Reciprocal that refuses zero.
pub fn reciprocal(n: f64) -> Maybe<f64> {
    if n == 0.0 {
        tracing::trace!("reciprocal refused zero");
        Maybe::absent()
    } else {
        Maybe::present(1.0 / n)
    }
}

/// `1 / ln(start)`, absent when any step refuses.
pub fn inverse_log(start: Maybe<f64>) -> Maybe<f64> {
    start >> safe_log >> reciprocal
}
