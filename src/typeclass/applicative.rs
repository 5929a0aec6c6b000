//! Applicative type class - lifting values and applying functions within
//! contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to:
//!
//! - Lift pure values into the container (`pure`)
//! - Combine multiple independent container values (`map2`, `map3`, `product`)
//! - Apply a contained function to a contained argument (`apply`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//!
//! let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
//! assert_eq!(function.apply(Some(5)), Some(6));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with `pure` (lift any value into the
/// context) and `map2` (combine two independent values in the context).
/// If either operand is in its empty/failure state, that state propagates:
/// the function-holding side is consulted first, then the argument side.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Applicative;
///
/// let a = Some(3);
/// let b = Some(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// `pure` never inspects the value and always produces the "present"
    /// or "successful" state of the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either operand is empty/failed, the result carries that state and
    /// the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(Some(1).map2(absent, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(Some(1).product_left(absent), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. If
    /// the function-holding container is empty/failed, that state
    /// propagates; otherwise if the argument container is empty/failed,
    /// that state propagates; otherwise the function is applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Note: Vec requires Clone bounds for map2/map3/apply because the cartesian
// product visits every element more than once. This is expressed through a
// separate trait to keep the Applicative interface on FnOnce.
// =============================================================================

/// Extension trait for Vec providing Applicative-like operations.
///
/// Vec's applicative instance represents non-deterministic computation:
/// combining two Vecs produces all combinations (cartesian product).
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::ApplicativeVec;
///
/// let pairs = vec![1, 2].product(vec!["a", "b"]);
/// assert_eq!(pairs, vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Lifts a pure value into a singleton Vec.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines two Vecs using a binary function (cartesian product).
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Creates the cartesian product of two Vecs as tuples.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone;

    /// Applies every function in this Vec to every value in another Vec.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output + Clone;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    #[inline]
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(A, B)>
    where
        A: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    #[inline]
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output + Clone,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for function in self {
            let mut function = function;
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Option<A> Tests
    // =========================================================================

    #[rstest]
    fn option_pure_lifts_value() {
        let x: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(x, Some(42));
    }

    #[rstest]
    fn option_map2_combines_present_values() {
        assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    }

    #[rstest]
    fn option_map2_absent_short_circuits() {
        let absent: Option<i32> = None;
        assert_eq!(Some(1).map2(absent, |x, y| x + y), None);
        let absent: Option<i32> = None;
        assert_eq!(absent.map2(Some(1), |x, y| x + y), None);
    }

    #[rstest]
    fn option_apply_identity_law() {
        let value = Some(5);
        let identity_fn: Option<fn(i32) -> i32> = <Option<()>>::pure(|x| x);
        assert_eq!(identity_fn.apply(value), value);
    }

    #[rstest]
    fn option_apply_homomorphism_law() {
        let function = |x: i32| x * 3;
        let lifted: Option<fn(i32) -> i32> = <Option<()>>::pure(function);
        assert_eq!(lifted.apply(<Option<()>>::pure(7)), <Option<()>>::pure(function(7)));
    }

    #[rstest]
    fn option_product_variants() {
        assert_eq!(Some(1).product(Some("x")), Some((1, "x")));
        assert_eq!(Some(1).product_left(Some(2)), Some(1));
        assert_eq!(Some(1).product_right(Some(2)), Some(2));
    }

    // =========================================================================
    // Result<T, E> Tests
    // =========================================================================

    #[rstest]
    fn result_map2_first_error_wins() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn result_apply_function_side_error_propagates() {
        let failed: Result<fn(i32) -> i32, &str> = Err("bad function");
        assert_eq!(failed.apply(Ok(3)), Err("bad function"));
    }

    #[rstest]
    fn result_apply_argument_side_error_propagates() {
        let function: Result<fn(i32) -> i32, &str> = Ok(|x| x + 1);
        let argument: Result<i32, &str> = Err("bad argument");
        assert_eq!(function.apply(argument), Err("bad argument"));
    }

    #[rstest]
    fn result_map3_combines_three() {
        let result: Result<i32, &str> = Ok(1).map3(Ok(2), Ok(3), |x, y, z| x + y + z);
        assert_eq!(result, Ok(6));
    }

    // =========================================================================
    // Identity<A> Tests
    // =========================================================================

    #[rstest]
    fn identity_map2_combines() {
        let result = Identity(2).map2(Identity(3), |x, y| x * y);
        assert_eq!(result, Identity(6));
    }

    #[rstest]
    fn identity_apply_applies() {
        let function: Identity<fn(i32) -> i32> = Identity(|x| x + 1);
        assert_eq!(function.apply(Identity(41)), Identity(42));
    }

    // =========================================================================
    // Vec<A> Tests
    // =========================================================================

    #[rstest]
    fn vec_map2_is_cartesian() {
        let result = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
        assert_eq!(result, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn vec_product_pairs_everything() {
        let pairs = vec![1, 2].product(vec!["a"]);
        assert_eq!(pairs, vec![(1, "a"), (2, "a")]);
    }

    #[rstest]
    fn vec_apply_applies_each_function() {
        let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
        let result = functions.apply(vec![1, 2]);
        assert_eq!(result, vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn vec_pure_is_singleton() {
        let singleton: Vec<i32> = <Vec<()>>::pure(9);
        assert_eq!(singleton, vec![9]);
    }
}
