//! Either type - a disjoint success/failure value.
//!
//! This module provides the `Either<L, R>` type, representing a value that
//! is either a `Left(L)` or a `Right(R)`. By convention `Left` carries a
//! failure payload and `Right` carries a success value, and every container
//! operation is right-biased: mapping, applying, and chaining act on
//! `Right` and pass `Left` through untouched.
//!
//! The failure payload is caller-defined and opaque: the container never
//! inspects it, only propagates it unchanged.
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Either;
//! use kindling::typeclass::{Functor, Monad};
//!
//! let success: Either<String, i32> = Either::Right(21);
//! assert_eq!(success.fmap(|n| n * 2), Either::Right(42));
//!
//! let failure: Either<String, i32> = Either::Left("no value".to_string());
//! assert_eq!(
//!     failure.flat_map(|n| Either::Right(n * 2)),
//!     Either::Left("no value".to_string())
//! );
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Semigroup, Traversable, TypeConstructor,
};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - The type of the left (failure) value
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use kindling::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is the boundary point where host code finally observes a
    /// failure or success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Inverts an ordered collection of eithers into one either wrapping
    /// the ordered collection of right values.
    ///
    /// The first `Left` encountered determines the whole result, carrying
    /// its payload unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let values: Vec<Either<&str, i32>> =
    ///     vec![Either::Right(1), Either::Right(2), Either::Right(3)];
    /// assert_eq!(Either::sequence(values), Either::Right(vec![1, 2, 3]));
    ///
    /// let broken: Vec<Either<&str, i32>> =
    ///     vec![Either::Right(1), Either::Left("broken"), Either::Right(3)];
    /// assert_eq!(Either::sequence(broken), Either::Left("broken"));
    /// ```
    pub fn sequence(eithers: Vec<Self>) -> Either<L, Vec<R>> {
        let mut results = Vec::with_capacity(eithers.len());
        for either in eithers {
            match either {
                Self::Left(error) => return Either::Left(error),
                Self::Right(value) => results.push(value),
            }
        }
        Either::Right(results)
    }

    /// Maps each element to an either, then sequences the results.
    ///
    /// Equivalent to mapping and then calling [`Either::sequence`], fused
    /// into a single pass that stops at the first `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// fn parse(s: &str) -> Either<String, i32> {
    ///     s.parse().map_or_else(
    ///         |_| Either::Left(format!("bad number: {s}")),
    ///         Either::Right,
    ///     )
    /// }
    ///
    /// assert_eq!(
    ///     Either::traverse(vec!["2", "3", "4"], parse),
    ///     Either::Right(vec![2, 3, 4])
    /// );
    /// assert_eq!(
    ///     Either::traverse(vec!["2", "x", "4"], parse),
    ///     Either::Left("bad number: x".to_string())
    /// );
    /// ```
    pub fn traverse<T, F>(items: Vec<T>, mut function: F) -> Either<L, Vec<R>>
    where
        F: FnMut(T) -> Self,
    {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            match function(item) {
                Self::Left(error) => return Either::Left(error),
                Self::Right(value) => results.push(value),
            }
        }
        Either::Right(results)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`: `Ok(r)` becomes `Right(r)`,
    /// `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`: `Right(r)` becomes `Ok(r)`,
    /// `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    /// Lifting always produces `Right`; `Left` values exist only through
    /// the explicit `Either::Left` constructor.
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _)
            | (_, Either::Left(error), _)
            | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Right(function), Either::Right(b)) => Either::Right(function(b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }

    fn is_empty(&self) -> bool {
        self.is_left()
    }

    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

impl<L: Clone, R> Traversable for Either<L, R> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Either<L, B>>
    where
        F: FnMut(R) -> Option<B>,
    {
        match self {
            Self::Left(error) => Some(Either::Left(error)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Either<L, B>, E>
    where
        F: FnMut(R) -> Result<B, E>,
    {
        match self {
            Self::Left(error) => Ok(Either::Left(error)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }
}

// =============================================================================
// Semigroup Implementation
// =============================================================================

/// Either forms a semigroup when its success type is a semigroup.
///
/// `Right(a).combine(Right(b))` = `Right(a.combine(b))`; the first `Left`
/// wins otherwise.
impl<L, R: Semigroup> Semigroup for Either<L, R> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Right(left), Self::Right(right)) => Self::Right(left.combine(right)),
            (Self::Left(error), _) | (_, Self::Left(error)) => Self::Left(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction and inspection
    // =========================================================================

    #[rstest]
    fn either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.left_ref(), Some(&42));
    }

    #[rstest]
    fn either_right_construction() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert!(value.is_right());
        assert_eq!(value.right(), Some("hello".to_string()));
    }

    #[rstest]
    fn either_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, Either::Left("error".to_string()));
    }

    #[rstest]
    fn either_fold_eliminates_both_sides() {
        let left: Either<i32, String> = Either::Left(42);
        assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");

        let right: Either<i32, String> = Either::Right("hello".to_string());
        assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    }

    #[rstest]
    fn either_swap_flips_variants() {
        let left: Either<i32, String> = Either::Left(42);
        assert_eq!(left.swap(), Either::Right(42));
    }

    // =========================================================================
    // Functor
    // =========================================================================

    #[rstest]
    fn fmap_transforms_right() {
        let right: Either<String, i32> = Either::Right(21);
        assert_eq!(right.fmap(|n| n * 2), Either::Right(42));
    }

    #[rstest]
    fn fmap_passes_left_through_unchanged() {
        let left: Either<String, i32> = Either::Left("failure".to_string());
        assert_eq!(left.fmap(|n| n * 2), Either::Left("failure".to_string()));
    }

    #[rstest]
    fn fmap_ref_clones_left() {
        let left: Either<String, i32> = Either::Left("failure".to_string());
        let mapped: Either<String, String> = left.fmap_ref(|n| n.to_string());
        assert_eq!(mapped, Either::Left("failure".to_string()));
        assert!(left.is_left());
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    #[rstest]
    fn pure_always_produces_right() {
        let lifted: Either<String, i32> = <Either<String, ()>>::pure(5);
        assert_eq!(lifted, Either::Right(5));
    }

    #[rstest]
    fn map2_combines_two_rights() {
        let a: Either<String, i32> = Either::Right(2);
        let b: Either<String, i32> = Either::Right(3);
        assert_eq!(a.map2(b, |x, y| x + y), Either::Right(5));
    }

    #[rstest]
    fn map2_function_side_failure_wins() {
        let a: Either<&str, i32> = Either::Left("first");
        let b: Either<&str, i32> = Either::Left("second");
        assert_eq!(a.map2(b, |x, y| x + y), Either::Left("first"));
    }

    #[rstest]
    fn apply_propagates_failure_from_either_side() {
        let function: Either<&str, fn(i32) -> i32> = Either::Left("bad function");
        let argument: Either<&str, i32> = Either::Right(3);
        assert_eq!(function.apply(argument), Either::Left("bad function"));

        let function: Either<&str, fn(i32) -> i32> = Either::Right(|x| x + 1);
        let argument: Either<&str, i32> = Either::Left("bad argument");
        assert_eq!(function.apply(argument), Either::Left("bad argument"));
    }

    // =========================================================================
    // Monad
    // =========================================================================

    #[rstest]
    fn flat_map_chains_rights() {
        let value: Either<String, i32> = Either::Right(5);
        assert_eq!(value.flat_map(|n| Either::Right(n + 1)), Either::Right(6));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let value: Either<String, i32> = Either::Left("failure".to_string());
        let chained = value.flat_map(|n| -> Either<String, i32> { Either::Right(n + 1) });
        assert_eq!(chained, Either::Left("failure".to_string()));
    }

    #[rstest]
    fn flatten_outer_left_wins() {
        let nested: Either<&str, Either<&str, i32>> = Either::Left("outer");
        let flat: Either<&str, i32> = Monad::flatten(nested);
        assert_eq!(flat, Either::Left("outer"));

        let inner: Either<&str, Either<&str, i32>> = Either::Right(Either::Left("inner"));
        assert_eq!(Monad::flatten(inner), Either::Left::<&str, i32>("inner"));
    }

    // =========================================================================
    // Traversable / Semigroup
    // =========================================================================

    #[rstest]
    fn traverse_right_value() {
        let right: Either<String, &str> = Either::Right("42");
        assert_eq!(
            right.traverse_option(|s| s.parse::<i32>().ok()),
            Some(Either::Right(42))
        );
    }

    #[rstest]
    fn traverse_left_passes_through() {
        let left: Either<String, &str> = Either::Left("failure".to_string());
        assert_eq!(
            left.traverse_option(|s| s.parse::<i32>().ok()),
            Some(Either::Left("failure".to_string()))
        );
    }

    #[rstest]
    fn sequence_collects_rights_in_order() {
        let values: Vec<Either<&str, i32>> =
            vec![Either::Right(1), Either::Right(2), Either::Right(3)];
        assert_eq!(Either::sequence(values), Either::Right(vec![1, 2, 3]));
    }

    #[rstest]
    fn sequence_first_left_wins() {
        let values: Vec<Either<&str, i32>> = vec![
            Either::Right(1),
            Either::Left("first"),
            Either::Left("second"),
        ];
        assert_eq!(Either::sequence(values), Either::Left("first"));
    }

    #[rstest]
    fn traverse_parses_or_fails() {
        let parse = |s: &str| -> Either<String, i32> {
            s.parse()
                .map_or_else(|_| Either::Left(format!("bad number: {s}")), Either::Right)
        };

        assert_eq!(
            Either::traverse(vec!["2", "3", "4"], parse),
            Either::Right(vec![2, 3, 4])
        );
        assert_eq!(
            Either::traverse(vec!["2", "x", "4"], parse),
            Either::Left("bad number: x".to_string())
        );
    }

    #[rstest]
    fn semigroup_combines_rights_and_keeps_first_left() {
        let a: Either<&str, String> = Either::Right("foo".to_string());
        let b: Either<&str, String> = Either::Right("bar".to_string());
        assert_eq!(a.combine(b), Either::Right("foobar".to_string()));

        let failed: Either<&str, String> = Either::Left("first");
        let other: Either<&str, String> = Either::Left("second");
        assert_eq!(failed.combine(other), Either::Left("first"));
    }
}
