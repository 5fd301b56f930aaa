//! Fibonacci numbers fanned out through the sequence bind.

use crate::control::Sequence;
use crate::sequence;

/// The first six Fibonacci numbers.
pub const FIBONACCI: [i64; 6] = [1, 1, 2, 3, 5, 8];

/// Returns the Fibonacci numbers as a sequence.
pub fn fibonacci() -> Sequence<i64> {
    Sequence::from(FIBONACCI.to_vec())
}

/// `n -> [n + 1, n + 2]`
pub fn add_one_and_two(n: i64) -> Sequence<i64> {
    sequence![n + 1, n + 2]
}

/// Every Fibonacci number replaced by its two successors, in order.
pub fn expanded_fibonacci() -> Sequence<i64> {
    fibonacci() >> add_one_and_two
}
