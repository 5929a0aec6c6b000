//! Foldable type class - folding structures down to summary values.
//!
//! This module provides the `Foldable` trait for containers whose elements
//! can be collapsed into a single value, either with an explicit
//! accumulator (`fold_left`/`fold_right`) or through a [`Monoid`]
//! (`fold_map`). The Monoid layer is the folding foundation: `fold_map`
//! maps every element into a monoid and combines the results starting from
//! the identity element.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Foldable, Sum};
//!
//! let numbers = vec![1, 2, 3, 4];
//! let total: Sum<i32> = numbers.fold_map(Sum::new);
//! assert_eq!(total, Sum(10));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A type class for structures that can be folded to a summary value.
///
/// Empty states (absent `Option`, failed `Result`) fold to the initial
/// accumulator without calling the function.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Foldable;
///
/// let sum = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 6);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the left with an explicit accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Foldable;
    ///
    /// let result = vec!["a", "b", "c"]
    ///     .fold_left(String::new(), |accumulator, element| accumulator + element);
    /// assert_eq!(result, "abc");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right with an explicit accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Foldable;
    ///
    /// let result = vec!["a", "b", "c"]
    ///     .fold_right(String::new(), |element, accumulator| element.to_string() + &accumulator);
    /// assert_eq!(result, "abc");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a [`Monoid`] and combines the results.
    ///
    /// Starts from the monoid's identity element, so empty structures fold
    /// to `M::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{All, Foldable};
    ///
    /// let flags = vec![1, 2, 3];
    /// let all_positive: All = flags.fold_map(|n| All(n > 0));
    /// assert_eq!(all_positive, All(true));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure has no elements to fold.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize;

    /// Collects the structure's elements into a `Vec` in fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Foldable;
    ///
    /// assert_eq!(Some(1).to_list(), vec![1]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(value) => function(value, init),
            Err(_) => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_err()
    }

    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// HashMap<K, V> Implementation
// =============================================================================

/// Folds over the map's values. Iteration order is unspecified, so the
/// accumulator function should be commutative (or the fold should go
/// through a commutative monoid via `fold_map`).
impl<K: Eq + Hash, V> Foldable for HashMap<K, V> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_values()
            .fold(init, |accumulator, value| function(accumulator, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        self.into_values()
            .fold(init, |accumulator, value| function(value, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn length(&self) -> usize {
        1
    }
}
