//! Type class traits for the container family.
//!
//! This module provides the fundamental type classes (traits) shared by
//! every synchronous container kind in the library:
//!
//! - [`Functor`]: Mapping over container values
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`Applicative`]: Lifting values and applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding structures down to summary values
//! - [`Traversable`]: Traversing structures with effects
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to abstract over
//! type constructors such as `Option<_>` and `Vec<_>`.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (identity functor)
//! - [`Sum`], [`Product`]: Numeric wrappers for additive/multiplicative folding
//! - [`Max`], [`Min`]: Order-based wrappers with [`Bounded`] identities
//! - [`Any`], [`All`]: Boolean wrappers for logical-or/logical-and folding
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use kindling::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use kindling::typeclass::{Monoid, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use kindling::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::{Applicative, ApplicativeVec};
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{All, Any, Bounded, Max, Min, Product, Sum};
