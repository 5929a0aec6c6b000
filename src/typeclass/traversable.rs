//! Traversable type class - traversing structures with effects.
//!
//! This module provides the `Traversable` trait: applying an effectful
//! function to each element of a structure while turning the structure
//! inside out with respect to the effect, so that a collection of effects
//! becomes one effect wrapping a collection of results.
//!
//! # Motivation
//!
//! Consider a `Vec<String>` where each string should parse to an integer.
//! The parsing function returns `Option<i32>` (or `Result<i32, E>`):
//!
//! - If all parses succeed: `Some(Vec<i32>)` containing all results in order
//! - If any parse fails: `None` (or the first error)
//!
//! That inversion is exactly what `traverse` does.
//!
//! # Limitations in Rust
//!
//! Rust lacks Higher-Kinded Types, which would allow one generic `traverse`
//! for any `Applicative` target. Instead, specialized methods cover the
//! synchronous effect targets (`traverse_option`, `traverse_result`); the
//! deferred effects provide their own `sequence`/`traverse` associated
//! functions because their closures carry `Send + 'static` bounds a shared
//! trait method cannot express.
//!
//! Each method fuses the map and sequence passes into one traversal; the
//! observable result is identical to mapping first and sequencing after.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Traversable;
//!
//! let strings = vec!["1", "2", "3"];
//! let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"];
//! let result: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
//! assert_eq!(result, None);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures that can be traversed with effects.
///
/// `Traversable` combines `Functor` and `Foldable` with the ability to
/// sequence effects: apply an effectful function to each element and
/// collect all the effects into one.
///
/// # Laws
///
/// Expressed informally (Rust cannot state them generically without HKT):
///
/// ## Identity
///
/// Traversing with a pure wrapper is the same as mapping:
/// ```text
/// traverse(Identity) == fmap(Identity)
/// ```
///
/// ## Naturality
///
/// Natural transformations commute with traversal:
/// ```text
/// transform(traverse(f)) == traverse(transform . f)
/// ```
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Traversable;
///
/// fn validate_positive(number: i32) -> Result<i32, &'static str> {
///     if number > 0 { Ok(number) } else { Err("must be positive") }
/// }
///
/// let valid = vec![1, 2, 3];
/// assert_eq!(valid.traverse_result(validate_positive), Ok(vec![1, 2, 3]));
///
/// let invalid = vec![1, -2, 3];
/// assert_eq!(invalid.traverse_result(validate_positive), Err("must be positive"));
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies a function returning `Option` to each element and collects
    /// the results.
    ///
    /// If all applications return `Some`, the result is `Some` of the
    /// collected values in traversal order. The first `None` short-circuits
    /// the whole traversal to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Traversable;
    ///
    /// let values = vec!["1", "2", "3"];
    /// let result: Option<Vec<i32>> = values.traverse_option(|s| s.parse().ok());
    /// assert_eq!(result, Some(vec![1, 2, 3]));
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element and collects
    /// the results.
    ///
    /// If all applications return `Ok`, the result is `Ok` of the collected
    /// values in traversal order. The first `Err` short-circuits the whole
    /// traversal to that error, propagated unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Traversable;
    ///
    /// fn parse(s: &str) -> Result<i32, String> {
    ///     s.parse().map_err(|_| format!("bad number: {s}"))
    /// }
    ///
    /// let values = vec!["2", "3", "4"];
    /// assert_eq!(values.traverse_result(parse), Ok(vec![2, 3, 4]));
    ///
    /// let broken = vec!["2", "x", "4"];
    /// assert_eq!(broken.traverse_result(parse), Err("bad number: x".to_string()));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of `Option`s inside out.
    ///
    /// Converts `Self<Option<A>>` to `Option<Self<A>>`. Equivalent to
    /// `traverse_option(|x| x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Traversable;
    ///
    /// let values: Vec<Option<i32>> = vec![Some(1), Some(2), Some(3)];
    /// assert_eq!(values.sequence_option(), Some(vec![1, 2, 3]));
    ///
    /// let with_absent: Vec<Option<i32>> = vec![Some(1), None, Some(3)];
    /// assert_eq!(with_absent.sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out.
    ///
    /// Converts `Self<Result<A, E>>` to `Result<Self<A>, E>`. Equivalent to
    /// `traverse_result(|x| x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Traversable;
    ///
    /// let values: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2), Ok(3)];
    /// assert_eq!(values.sequence_result(), Ok(vec![1, 2, 3]));
    ///
    /// let with_error: Vec<Result<i32, &str>> = vec![Ok(1), Err("error"), Ok(3)];
    /// assert_eq!(with_error.sequence_result(), Err("error"));
    /// ```
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }

    /// Applies an effectful function for its effects only, discarding
    /// results.
    fn traverse_option_<F>(self, function: F) -> Option<()>
    where
        F: FnMut(Self::Inner) -> Option<()>,
        Self: Sized,
    {
        self.traverse_option(function).map(|_| ())
    }

    /// Alias for `traverse_option_`, following the `for_`/`forM_` naming
    /// convention for flipped traversals that discard results.
    fn for_each_option<F>(self, function: F) -> Option<()>
    where
        F: FnMut(Self::Inner) -> Option<()>,
        Self: Sized,
    {
        self.traverse_option_(function)
    }

    /// Applies an effectful function for its effects only, discarding
    /// results.
    fn traverse_result_<E, F>(self, function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.traverse_result(function).map(|_| ())
    }

    /// Alias for `traverse_result_`.
    fn for_each_result<E, F>(self, function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.traverse_result_(function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            match function(element) {
                Some(value) => result.push(value),
                None => return None,
            }
        }
        Some(result)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            match function(element) {
                Ok(value) => result.push(value),
                Err(error) => return Err(error),
            }
        }
        Ok(result)
    }
}

// =============================================================================
// HashMap<K, V> Implementation
// =============================================================================

/// Traverses the map's values, rebuilding the map with the same keys.
/// Visit order is unspecified, so which failure is observed first is
/// unspecified when several values fail.
impl<K: Eq + Hash + Clone, V> Traversable for HashMap<K, V> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<HashMap<K, B>>
    where
        F: FnMut(V) -> Option<B>,
    {
        let mut result = HashMap::with_capacity(self.len());
        for (key, value) in self {
            match function(value) {
                Some(mapped) => {
                    result.insert(key, mapped);
                }
                None => return None,
            }
        }
        Some(result)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<HashMap<K, B>, E>
    where
        F: FnMut(V) -> Result<B, E>,
    {
        let mut result = HashMap::with_capacity(self.len());
        for (key, value) in self {
            match function(value) {
                Ok(mapped) => {
                    result.insert(key, mapped);
                }
                Err(error) => return Err(error),
            }
        }
        Ok(result)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}
