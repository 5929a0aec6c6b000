//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value(s) while preserving the
//! structure: the contents change, the shape and context do not.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence equals mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved
//! let none_value: Option<i32> = None;
//! let transformed: Option<String> = none_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, None);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value(s)
/// inside a container while preserving the container's structure. Containers
/// in an "empty" state (absent `Option`, failed `Result`) return themselves
/// unchanged: the function is never called and the state propagates.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed, or the inner type
    /// does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    ///
    /// let y: Option<i32> = None;
    /// assert_eq!(y.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful when only the structure/effect of the functor matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// An extension of `Functor` for containers with multiple elements.
///
/// While `Functor::fmap` takes a `FnOnce` (callable only once), containers
/// like `Vec` and `HashMap` need to apply the function to every element.
/// This trait provides `fmap_mut` which takes a `FnMut`.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::FunctorMut;
///
/// let numbers = vec![1, 2, 3];
/// let doubled: Vec<i32> = numbers.fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: Functor {
    /// Applies a mutable function to each element in the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::FunctorMut;
    ///
    /// let v = vec![1, 2, 3];
    /// let result: Vec<i32> = v.fmap_mut(|x| x + 1);
    /// assert_eq!(result, vec![2, 3, 4]);
    /// ```
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    /// Maps a function over a single-element Vec.
    ///
    /// Note: For multi-element Vecs, use `fmap_mut` instead, as `FnOnce`
    /// can only be called once. This implementation is only correct for
    /// empty or single-element Vecs; remaining elements are dropped.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnOnce(T) -> B,
    {
        let mut iterator = self.into_iter();
        iterator.next().map_or_else(Vec::new, |first| {
            let mut result = Vec::with_capacity(1);
            result.push(function(first));
            result
        })
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnOnce(&T) -> B,
    {
        let mut iterator = self.iter();
        iterator.next().map_or_else(Vec::new, |first| {
            let mut result = Vec::with_capacity(1);
            result.push(function(first));
            result
        })
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// HashMap<K, V> Implementation
// =============================================================================

impl<K: Eq + Hash + Clone, V> Functor for HashMap<K, V> {
    /// Maps a function over a single-entry map.
    ///
    /// Note: For multi-entry maps, use `fmap_mut` instead, as `FnOnce`
    /// can only be called once. This implementation is only correct for
    /// empty or single-entry maps; remaining entries are dropped.
    #[inline]
    fn fmap<B, F>(self, function: F) -> HashMap<K, B>
    where
        F: FnOnce(V) -> B,
    {
        let mut iterator = self.into_iter();
        iterator.next().map_or_else(HashMap::new, |(key, value)| {
            let mut result = HashMap::with_capacity(1);
            result.insert(key, function(value));
            result
        })
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> HashMap<K, B>
    where
        F: FnOnce(&V) -> B,
    {
        let mut iterator = self.iter();
        iterator.next().map_or_else(HashMap::new, |(key, value)| {
            let mut result = HashMap::with_capacity(1);
            result.insert(key.clone(), function(value));
            result
        })
    }
}

impl<K: Eq + Hash + Clone, V> FunctorMut for HashMap<K, V> {
    /// Maps a mutable function over every value, keeping keys unchanged.
    #[inline]
    fn fmap_mut<B, F>(self, mut function: F) -> HashMap<K, B>
    where
        F: FnMut(V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, mut function: F) -> HashMap<K, B>
    where
        F: FnMut(&V) -> B,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), function(value)))
            .collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
