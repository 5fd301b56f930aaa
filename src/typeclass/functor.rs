//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::TypeConstructor;

/// A type class for containers whose value can be transformed.
///
/// `Functor` is the single-shot variant: the function is called at most
/// once, which fits `Maybe` (zero or one value) and `IO` (exactly one).
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Functor;
///
/// let length = Maybe::present("wallet").fmap(str::len);
/// assert_eq!(length, Maybe::present(6));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).fmap(|n| n * 2), Maybe::present(10));
    /// assert_eq!(Maybe::<i32>::absent().fmap(|n| n * 2), Maybe::absent());
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the original untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Mapping for containers that hold many elements.
///
/// `Functor::fmap` takes an `FnOnce`, which cannot be called once per
/// element. `Sequence` implements this trait instead.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::typeclass::FunctorMut;
///
/// let doubled = Sequence::from(vec![1, 2, 3]).fmap_mut(|n| n * 2);
/// assert_eq!(doubled, Sequence::from(vec![2, 4, 6]));
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element, in order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element, in order.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
