//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). It is the base every
//! type class trait in this library builds on.
//!
//! # Background
//!
//! Rust cannot natively abstract over `Option<_>` and `Vec<_>` as type
//! constructors. The [`TypeConstructor`] trait works around this limitation
//! by recording, per concrete type, which type parameter it is applied to
//! (`Inner`) and how to re-apply the constructor to a different parameter
//! (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use kindling::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

use std::collections::HashMap;

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, `Vec<_>`, and `HashMap<K, _>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use kindling::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {}
///
/// example::<Option<i32>>();
/// example::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`. The constraint `TypeConstructor<Inner = B>` ensures
    /// the resulting type is itself a valid type constructor so that
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

/// `HashMap` is a type constructor over its value type; the key type is
/// fixed, mirroring how `Result` fixes its error type.
impl<K, V> TypeConstructor for HashMap<K, V> {
    type Inner = V;
    type WithType<B> = HashMap<K, B>;
}
