//! Natural transformations between container kinds.
//!
//! Each function here converts one container kind into another while
//! preserving structure: for any transformation `nt` and any function `f`,
//!
//! ```text
//! nt(x).fmap(f) == nt(x.fmap(f))
//! ```
//!
//! Conversions only repackage. None of them executes an effect: converting
//! into a [`Task`] produces a constructed-but-not-run task, and execution
//! remains deferred until the resulting effect is explicitly run.
//!
//! Where the source kind has no failure payload of its own (an absent
//! `Option`), the caller supplies the rejection value for the target kind.
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Either;
//! use kindling::effect::interop::option_to_either;
//!
//! let present = option_to_either(Some(5), "none");
//! assert_eq!(present, Either::Right(5));
//!
//! let absent = option_to_either(None::<i32>, "none");
//! assert_eq!(absent, Either::Left("none"));
//! ```

use crate::control::Either;
use crate::typeclass::Identity;

#[cfg(feature = "async")]
use super::task::Task;

/// Converts an [`Identity`] into an `Option`.
///
/// The result is always present: `Identity` has no empty state to map
/// from.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::interop::identity_to_option;
/// use kindling::typeclass::Identity;
///
/// assert_eq!(identity_to_option(Identity(5)), Some(5));
/// ```
pub fn identity_to_option<A>(identity: Identity<A>) -> Option<A> {
    Some(identity.into_inner())
}

/// Converts an `Option` into an [`Either`], mapping absence to the
/// caller-supplied failure value.
///
/// # Examples
///
/// ```rust
/// use kindling::control::Either;
/// use kindling::effect::interop::option_to_either;
///
/// assert_eq!(option_to_either(Some(5), "none"), Either::Right(5));
/// assert_eq!(option_to_either(None::<i32>, "none"), Either::Left("none"));
/// ```
pub fn option_to_either<A, L>(option: Option<A>, on_absent: L) -> Either<L, A> {
    match option {
        Some(value) => Either::Right(value),
        None => Either::Left(on_absent),
    }
}

/// Converts an `Option` into a [`Task`], mapping absence to a rejection
/// carrying the caller-supplied value.
///
/// The returned task is constructed but not run.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::Task;
/// use kindling::effect::interop::option_to_task;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let present: Task<i32, &str> = option_to_task(Some(5), "none");
///     assert_eq!(present.await, Ok(5));
///
///     let absent: Task<i32, &str> = option_to_task(None, "none");
///     assert_eq!(absent.await, Err("none"));
/// }
/// ```
#[cfg(feature = "async")]
pub fn option_to_task<A, E>(option: Option<A>, on_absent: E) -> Task<A, E> {
    match option {
        Some(value) => Task::pure(value),
        None => Task::rejected(on_absent),
    }
}

/// Converts an [`Either`] into a [`Task`]: `Left` becomes a rejection
/// carrying the original failure payload, `Right` becomes a success.
///
/// The returned task is constructed but not run.
///
/// # Examples
///
/// ```rust
/// use kindling::control::Either;
/// use kindling::effect::Task;
/// use kindling::effect::interop::either_to_task;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let success: Task<i32, String> = either_to_task(Either::Right(5));
///     assert_eq!(success.await, Ok(5));
///
///     let failure: Task<i32, String> = either_to_task(Either::Left("bad".to_string()));
///     assert_eq!(failure.await, Err("bad".to_string()));
/// }
/// ```
#[cfg(feature = "async")]
pub fn either_to_task<A, E>(either: Either<E, A>) -> Task<A, E> {
    match either {
        Either::Left(error) => Task::rejected(error),
        Either::Right(value) => Task::pure(value),
    }
}

/// Converts a `Result` into a [`Task`]: `Err` becomes a rejection, `Ok` a
/// success. The std-interop twin of [`either_to_task`].
#[cfg(feature = "async")]
pub fn result_to_task<A, E>(result: Result<A, E>) -> Task<A, E> {
    Task::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Functor;
    use rstest::rstest;

    // =========================================================================
    // identity_to_option
    // =========================================================================

    #[rstest]
    fn identity_to_option_is_always_present() {
        assert_eq!(identity_to_option(Identity(5)), Some(5));
        assert_eq!(
            identity_to_option(Identity(String::from("x"))),
            Some(String::from("x"))
        );
    }

    #[rstest]
    fn identity_to_option_naturality() {
        let double = |n: i32| n * 2;
        let value = Identity(21);

        let transform_then_map = identity_to_option(value).fmap(double);
        let map_then_transform = identity_to_option(value.fmap(double));
        assert_eq!(transform_then_map, map_then_transform);
    }

    // =========================================================================
    // option_to_either
    // =========================================================================

    #[rstest]
    fn option_to_either_maps_both_states() {
        assert_eq!(option_to_either(Some(5), "none"), Either::Right(5));
        assert_eq!(option_to_either(None::<i32>, "none"), Either::Left("none"));
    }

    #[rstest]
    #[case(Some(10))]
    #[case(None)]
    fn option_to_either_naturality(#[case] option: Option<i32>) {
        let double = |n: i32| n * 2;

        let transform_then_map = option_to_either(option, "none").fmap(double);
        let map_then_transform = option_to_either(option.fmap(double), "none");
        assert_eq!(transform_then_map, map_then_transform);
    }

    // =========================================================================
    // Conversions into Task (construction only; settlement outcomes are
    // covered by the task integration tests)
    // =========================================================================

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn option_to_task_maps_both_states() {
        let present: Task<i32, &str> = option_to_task(Some(5), "none");
        assert_eq!(present.await, Ok(5));

        let absent: Task<i32, &str> = option_to_task(None, "none");
        assert_eq!(absent.await, Err("none"));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn either_to_task_maps_both_states() {
        let success: Task<i32, String> = either_to_task(Either::Right(5));
        assert_eq!(success.await, Ok(5));

        let failure: Task<i32, String> = either_to_task(Either::Left("bad".to_string()));
        assert_eq!(failure.await, Err("bad".to_string()));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn result_to_task_maps_both_states() {
        let success: Task<i32, String> = result_to_task(Ok(5));
        assert_eq!(success.await, Ok(5));

        let failure: Task<i32, String> = result_to_task(Err("bad".to_string()));
        assert_eq!(failure.await, Err("bad".to_string()));
    }
}
