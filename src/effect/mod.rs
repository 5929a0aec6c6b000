//! Deferred effect types and conversions between container kinds.
//!
//! This module provides the two deferred effects:
//!
//! - [`IO`]: a synchronous computation that is described now and executed
//!   later, when `run_unsafe` is called
//! - [`Task`]: an asynchronous computation with a success/failure
//!   settlement contract, executed by awaiting it (or via
//!   [`task::runtime::run_blocking`]) — requires the `async` feature
//!
//! plus [`interop`], the natural transformations that repackage one
//! container kind as another without executing anything.

pub mod interop;
mod io;

#[cfg(feature = "async")]
pub mod task;

pub use io::IO;

#[cfg(feature = "async")]
pub use task::Task;
