//! Sequence type - zero or more values, composed by flattening.
//!
//! `Sequence<A>` is the list monad. Binding feeds every element to the
//! function, in order, and concatenates the sequences it returns. Nothing is
//! deduplicated: when two paths produce the same value, it appears twice.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Sequence;
//! use monadic::sequence;
//!
//! let add_one_and_two = |n: i32| sequence![n + 1, n + 2];
//!
//! let fibonacci = sequence![1, 1, 2, 3, 5, 8];
//! let expanded = fibonacci >> add_one_and_two;
//! assert_eq!(expanded, sequence![2, 3, 2, 3, 3, 4, 4, 5, 6, 7, 9, 10]);
//! ```

use std::fmt;
use std::ops::Shr;

use crate::typeclass::{FunctorMut, MonadMut, TypeConstructor};

/// An ordered collection of zero or more values.
///
/// Order reflects production order and duplicates are kept. The only
/// mutation is appending.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<A> {
    elements: Vec<A>,
}

/// Creates a [`Sequence`] from a literal list of values, keeping their order.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::sequence;
///
/// let empty: Sequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let fibonacci = sequence![1, 1, 2, 3, 5, 8];
/// assert_eq!(fibonacci.len(), 6);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::control::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::control::Sequence::from(vec![$($element),+])
    };
}

impl<A> Sequence<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a sequence holding exactly one value.
    #[inline]
    #[must_use]
    pub fn singleton(value: A) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Lifts a value into a one-element sequence.
    ///
    /// Same as [`Sequence::singleton`]; named for the monad vocabulary.
    #[inline]
    #[must_use]
    pub fn pure(value: A) -> Self {
        Self::singleton(value)
    }

    /// Appends a value at the end.
    #[inline]
    pub fn push(&mut self, value: A) {
        self.elements.push(value);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[A] {
        self.elements.as_slice()
    }

    /// Consumes the sequence and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<A> {
        self.elements
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Binds `sequence` to `function`; the associated-function form of
    /// [`Sequence::flat_map`].
    #[inline]
    pub fn bind<B, F>(sequence: Self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> Sequence<B>,
    {
        sequence.flat_map(function)
    }

    /// Applies `function` to every element in order and concatenates the
    /// produced sequences.
    ///
    /// The result length is the sum of the lengths of the per-element
    /// results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::sequence;
    ///
    /// let result = sequence![1, 2, 3].flat_map(|n| sequence![n, n * 10]);
    /// assert_eq!(result, sequence![1, 10, 2, 20, 3, 30]);
    /// ```
    pub fn flat_map<B, F>(self, mut function: F) -> Sequence<B>
    where
        F: FnMut(A) -> Sequence<B>,
    {
        let mut output = Sequence::new();
        for element in self.elements {
            output.elements.extend(function(element).elements);
        }
        output
    }

    /// Alias for [`Sequence::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> Sequence<B>,
    {
        self.flat_map(function)
    }

    /// Applies `function` to every element in order.
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }

    /// Sequences two computations, discarding the values of the first.
    ///
    /// Each element of `self` contributes one full copy of `next`, so the
    /// result has `self.len() * next.len()` elements.
    pub fn then<B: Clone>(self, next: &Sequence<B>) -> Sequence<B> {
        let capacity = self.len().saturating_mul(next.len());
        let mut result = Vec::with_capacity(capacity);
        for _ in self.elements {
            result.extend(next.elements.iter().cloned());
        }
        Sequence { elements: result }
    }
}

impl<A> Sequence<Sequence<A>> {
    /// Flattens a nested sequence one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Sequence;
    /// use monadic::sequence;
    ///
    /// let nested = sequence![sequence![1, 2], Sequence::new(), sequence![3]];
    /// assert_eq!(nested.flatten(), sequence![1, 2, 3]);
    /// ```
    pub fn flatten(self) -> Sequence<A> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A: fmt::Display> fmt::Display for Sequence<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

impl<A> From<Vec<A>> for Sequence<A> {
    fn from(elements: Vec<A>) -> Self {
        Self { elements }
    }
}

impl<A> FromIterator<A> for Sequence<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<A> Extend<A> for Sequence<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<A> IntoIterator for Sequence<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Sequence<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Bind Operator
// =============================================================================

/// `sequence >> function` is `sequence.flat_map(function)`.
impl<A, B, F> Shr<F> for Sequence<A>
where
    F: FnMut(A) -> Sequence<B>,
{
    type Output = Sequence<B>;

    #[inline]
    fn shr(self, function: F) -> Sequence<B> {
        self.flat_map(function)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Sequence<A> {
    type Inner = A;
    type WithType<B> = Sequence<B>;
}

impl<A> FunctorMut for Sequence<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&A) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<A> MonadMut for Sequence<A> {
    #[inline]
    fn flat_map_mut<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> Sequence<B>,
    {
        self.flat_map(function)
    }
}

// =============================================================================
// Serde Implementation
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Sequence<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<A>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Default);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_literal_preserves_order_and_duplicates() {
        let values = sequence![3, 1, 3, 2];
        assert_eq!(values.into_vec(), vec![3, 1, 3, 2]);
    }

    #[rstest]
    fn test_empty_literal() {
        let values: Sequence<i32> = sequence![];
        assert!(values.is_empty());
        assert_eq!(values, Sequence::default());
    }

    #[rstest]
    fn test_push_appends() {
        let mut values = Sequence::singleton(1);
        values.push(2);
        values.extend([3, 4]);
        assert_eq!(values, sequence![1, 2, 3, 4]);
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    #[case(Sequence::new(), "[]")]
    #[case(sequence![1], "[1]")]
    #[case(sequence![1, 2, 3], "[1, 2, 3]")]
    fn test_display(#[case] values: Sequence<i32>, #[case] expected: &str) {
        assert_eq!(format!("{values}"), expected);
    }

    // =========================================================================
    // Bind Tests
    // =========================================================================

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let function = |n: i32| sequence![n, n * 100];
        let left = sequence![1, 2].flat_map(function);

        let mut right = function(1);
        right.extend(function(2));

        assert_eq!(left, right);
        assert_eq!(left, sequence![1, 100, 2, 200]);
    }

    #[rstest]
    fn test_flat_map_length_is_sum_of_parts() {
        let result = sequence![0usize, 1, 2, 3].flat_map(|n| (0..n).collect());
        assert_eq!(result.len(), 1 + 2 + 3);
        assert_eq!(result, sequence![0, 0, 1, 0, 1, 2]);
    }

    #[rstest]
    fn test_flat_map_keeps_duplicates() {
        let result = sequence![1, 2] >> (|_: i32| sequence!["same"]);
        assert_eq!(result, sequence!["same", "same"]);
    }

    #[rstest]
    fn test_flat_map_empty_input_never_calls_function() {
        let mut calls = 0;
        let empty: Sequence<i32> = Sequence::new();
        let result = empty.flat_map(|n| {
            calls += 1;
            sequence![n]
        });
        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_flat_map_to_empty_drops_element() {
        let result = sequence![1, 2, 3, 4]
            >> (|n: i32| if n % 2 == 0 { sequence![n] } else { Sequence::new() });
        assert_eq!(result, sequence![2, 4]);
    }

    #[rstest]
    fn test_bind_associated_function() {
        let result = Sequence::bind(sequence!['a', 'b'], |c| sequence![c, c]);
        assert_eq!(result, sequence!['a', 'a', 'b', 'b']);
    }

    #[rstest]
    fn test_then_multiplies() {
        let next = sequence!["a", "b"];
        let result = sequence![1, 2].then(&next);
        assert_eq!(result, sequence!["a", "b", "a", "b"]);
        assert_eq!(next, sequence!["a", "b"]);
    }

    #[rstest]
    fn test_then_on_empty_is_empty() {
        let result = Sequence::<i32>::new().then(&sequence!["a"]);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_flatten_nested() {
        let nested = sequence![sequence![1, 2], sequence![3, 4]];
        assert_eq!(nested.flatten(), sequence![1, 2, 3, 4]);
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    #[rstest]
    fn test_left_identity_law() {
        let function = |n: i32| sequence![n, n * 10];
        assert_eq!(Sequence::pure(5) >> function, function(5));
    }

    #[rstest]
    fn test_right_identity_law() {
        let monad = sequence![1, 2, 3];
        assert_eq!(monad.clone() >> Sequence::pure, monad);
    }

    #[rstest]
    fn test_associativity_law() {
        let function1 = |n: i32| sequence![n, n + 10];
        let function2 = |n: i32| sequence![n, n * 100];

        let left = sequence![1, 2].flat_map(function1).flat_map(function2);
        let right = sequence![1, 2].flat_map(|x| function1(x).flat_map(function2));

        assert_eq!(left, right);
        assert_eq!(left, sequence![1, 100, 11, 1100, 2, 200, 12, 1200]);
    }
}
