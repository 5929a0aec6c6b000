//! Control-flow data types.
//!
//! This module provides [`Either`], the disjoint success/failure container
//! used throughout the library: `Left` carries an opaque, caller-defined
//! failure payload, `Right` carries a success value, and all container
//! operations are right-biased.

mod either;

pub use either::Either;
