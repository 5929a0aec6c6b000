//! # kindling
//!
//! Algebraic container and effect abstractions for Rust.
//!
//! ## Overview
//!
//! This library provides a small, closed family of container types that
//! uniformly support lifting, mapping, applying, and flattening:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Semigroup, Monoid — implemented for `Option`, `Result`, `Vec`,
//!   `HashMap`, [`Identity`](typeclass::Identity), and
//!   [`Either`](control::Either)
//! - **Deferred Effects**: [`IO`](effect::IO) for deferred synchronous
//!   actions and [`Task`](effect::Task) for deferred asynchronous actions
//!   with a success/failure settlement contract
//! - **Traversal**: `sequence`/`traverse` turning a collection of effects
//!   inside out into a single effect of a collection
//! - **Natural Transformations**: structure-preserving conversions between
//!   container kinds in [`effect::interop`]
//!
//! ## Feature Flags
//!
//! - `async`: The [`effect::Task`] engine and its shared runtime (enabled
//!   by default; pulls in `tokio`, `futures`, `num_cpus`, and
//!   `pin-project-lite`)
//!
//! ## Example
//!
//! ```rust
//! use kindling::prelude::*;
//!
//! let parsed: Result<Vec<i32>, String> = vec!["2", "3", "4"]
//!     .traverse_result(|s| s.parse::<i32>().map_err(|_| format!("bad number: {s}")));
//! assert_eq!(parsed, Ok(vec![2, 3, 4]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::typeclass::*;
}

pub mod control;
pub mod effect;
pub mod typeclass;
