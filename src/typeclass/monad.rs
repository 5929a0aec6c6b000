//! Monad type class - sequencing computations with dependency.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step depends on the
//! result of the previous one, and to collapse one level of container
//! nesting (`flatten`).
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Monad;
//!
//! let x = Some(5);
//! let y = x.flat_map(|n| Some(n * 2));
//! assert_eq!(y, Some(10));
//!
//! // Chaining with potential failure
//! let z = Some(10).flat_map(|n| if n > 0 { Some(n / 2) } else { None });
//! assert_eq!(z, Some(5));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing dependent computations.
///
/// `flat_map` is the fundamental operation: apply a function returning a
/// new container, then collapse the nesting. Containers in an empty/failed
/// state short-circuit: the function is never called and the state
/// propagates unchanged.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity
///
/// ```text
/// m.flat_map(pure) == m
/// ```
///
/// ## Associativity
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    ///
    /// In Haskell, this is `>>=` (bind). In Rust's standard library, this
    /// is `and_then` on `Option` and `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
    ///
    /// let y = Some(5).flat_map(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(y, None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.and_then(|n| Some(n * 2)), Some(10));
    /// ```
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
    /// If `self` represents a failure (`None`, `Err`, `Left`), the failure
    /// propagates and `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(absent.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }

    /// Collapses one level of container nesting: `F<F<A>> -> F<A>`.
    ///
    /// For `Option` and `Result`-like containers, an empty/failed outer
    /// state wins; a present/successful outer state returns the inner
    /// container as-is, without further combining its state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// let nested: Option<Option<i32>> = Some(Some(3));
    /// let flat: Option<i32> = Monad::flatten(nested);
    /// assert_eq!(flat, Some(3));
    ///
    /// let inner_absent: Option<Option<i32>> = Some(None);
    /// assert_eq!(Monad::flatten::<i32>(inner_absent), None);
    /// ```
    #[inline]
    fn flatten<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: Into<Self::WithType<B>>,
    {
        self.flat_map(Into::into)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Delegate to Option's built-in and_then
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        // Delegate to Result's built-in and_then
        Self::and_then(self, function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Note: Vec requires FnMut for flat_map because the function is called for
// each element. This is expressed through a separate trait to keep the
// Monad interface on FnOnce.
// =============================================================================

/// Extension trait for Vec providing Monad-like operations.
///
/// Vec's monadic instance represents non-deterministic computation:
/// `flat_map` applies a function to each element and concatenates all
/// results.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::MonadVec;
///
/// let numbers = vec![1, 2, 3];
/// let result = numbers.flat_map(|n| vec![n, n * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Applies a function to each element and flattens the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::MonadVec;
    ///
    /// let v = vec![1, 2, 3];
    /// assert_eq!(v.flat_map(|n| vec![n, n * 10]), vec![1, 10, 2, 20, 3, 30]);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two Vec computations, discarding the first results.
    ///
    /// For each element in `self`, the entire `next` Vec is included,
    /// producing `self.len() * next.len()` elements.
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B>;

    /// Flattens a nested Vec one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::MonadVec;
    ///
    /// let nested = vec![vec![1, 2], vec![3, 4]];
    /// let flat: Vec<i32> = nested.flatten();
    /// assert_eq!(flat, vec![1, 2, 3, 4]);
    /// ```
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    #[inline]
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B> {
        let capacity = self.len().saturating_mul(next.len());
        let mut result = Vec::with_capacity(capacity);
        for _ in self {
            result.extend(next.iter().cloned());
        }
        result
    }

    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flatten().collect()
    }
}
