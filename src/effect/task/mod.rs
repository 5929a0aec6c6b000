//! Task - deferred asynchronous effect handling with a settlement contract.
//!
//! The `Task` type represents an asynchronous computation that has not run
//! yet and that, once run, settles exactly once: either with a success
//! value or with a caller-defined rejection value. Nothing is executed
//! until the `Task` is awaited (or run through
//! [`runtime::run_blocking`]), maintaining referential transparency in
//! pure code.
//!
//! # Design Philosophy
//!
//! `Task` "describes" an asynchronous effect but doesn't "execute" it. A
//! `Task<A, E>` value is an inert description that can be mapped, chained,
//! and combined freely; execution happens only at the program's edge.
//!
//! Rejection is not an exception: it is a first-class settlement outcome
//! that propagates automatically through every combinator. Host code
//! observes it only at the boundary, by matching on the awaited `Result`
//! or by supplying the two continuations of [`Task::fork`].
//!
//! # Settlement Contract
//!
//! A `Task` moves through an explicit state machine:
//!
//! - *constructed* (`Ready` or `Defer`): holds the outcome or the deferred
//!   procedure, nothing has run
//! - *running* (`Running`): the procedure has been started by the first poll
//! - *settled* (`Completed`): the task produced exactly one outcome
//!
//! Exactly one of the success/rejection outcomes is produced per run, and
//! polling a settled task is a contract violation that fails loudly with a
//! panic rather than being silently tolerated — no composition law holds
//! once settlement is violated.
//!
//! A `Task` is not memoized: the value is consumed by execution, and
//! running the same procedure again means rebuilding the task. Ownership
//! enforces the one-run-per-value discipline.
//!
//! # impl `Future`
//!
//! `Task<A, E>` implements `Future<Output = Result<A, E>>` directly via
//! `pin_project_lite`, so awaiting it is the single run-call that surfaces
//! the settlement:
//!
//! ```rust
//! use kindling::effect::Task;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let task: Task<i32, String> = Task::pure(42);
//!     assert_eq!(task.await, Ok(42));
//! }
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use kindling::effect::Task;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let executed = Arc::new(AtomicBool::new(false));
//!     let flag = executed.clone();
//!
//!     let task: Task<i32, String> = Task::new(move || async move {
//!         flag.store(true, Ordering::SeqCst);
//!         Ok(42)
//!     });
//!
//!     // Not executed yet
//!     assert!(!executed.load(Ordering::SeqCst));
//!
//!     assert_eq!(task.await, Ok(42));
//!     assert!(executed.load(Ordering::SeqCst));
//! }
//! ```
//!
//! # Combination Strategies
//!
//! Sequential combinators (`flat_map`, `map2`, `apply`, `sequence`) settle
//! in program order: the second effect does not start until the first has
//! settled successfully, and the first rejection short-circuits everything
//! after it.
//!
//! Concurrent combinators (`zip_par`, `map2_par`, `sequence_par`) start
//! their operands together and impose no relative order; the first observed
//! rejection settles the composed task, exactly once, and successful
//! results keep their index order regardless of settlement order.

pub mod runtime;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

type BoxedOutcome<A, E> = Pin<Box<dyn Future<Output = Result<A, E>> + Send>>;

pin_project! {
    /// A deferred asynchronous computation that settles exactly once with
    /// either a success value `A` or a rejection value `E`.
    ///
    /// The rejection type is caller-defined and opaque: `Task` never
    /// inspects it, only propagates it unchanged through every combinator.
    ///
    /// # Monad Laws
    ///
    /// `Task` satisfies the monad laws over its success channel:
    ///
    /// 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
    /// 2. **Right Identity**: `m.flat_map(Task::pure) == m`
    /// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::pure(20)
    ///         .fmap(|x| x * 2)
    ///         .flat_map(|x| Task::pure(x + 2));
    ///     assert_eq!(task.await, Ok(42));
    /// }
    /// ```
    pub struct Task<A, E> {
        #[pin]
        state: TaskState<A, E>,
    }
}

pin_project! {
    /// Internal state machine for `Task`.
    ///
    /// State transitions:
    ///
    /// - `Ready` -> `Completed` (outcome returned on first poll)
    /// - `Defer` -> `Running` (first poll executes the thunk)
    /// - `Running` -> `Completed` (inner future settles)
    ///
    /// `Completed` is terminal; polling it again violates the settlement
    /// contract and panics.
    #[project = TaskStateProj]
    enum TaskState<A, E> {
        /// An already-known outcome, returned on the first poll.
        Ready {
            outcome: Option<Result<A, E>>,
        },
        /// A deferred procedure (thunk) that creates the future when the
        /// task is first polled.
        Defer {
            thunk: Option<Box<dyn FnOnce() -> BoxedOutcome<A, E> + Send>>,
        },
        /// The running future created from the deferred thunk.
        Running {
            #[pin]
            future: BoxedOutcome<A, E>,
        },
        /// The task has settled.
        Completed,
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<A, E> Future for Task<A, E> {
    type Output = Result<A, E>;

    /// Polls the `Task` to drive it towards settlement.
    ///
    /// - `Ready`: returns the outcome immediately on first poll.
    /// - `Defer`: executes the thunk to create the future, then transitions
    ///   to `Running`.
    /// - `Running`: polls the inner future until it settles.
    /// - `Completed`: panics — the settlement contract allows exactly one
    ///   outcome per run.
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                TaskStateProj::Ready { outcome } => {
                    // INVARIANT: Ready is polled at most once before the
                    // transition to Completed
                    let result = outcome.take().expect(
                        "Task internal error: ready outcome was already consumed. \
                         This indicates the Task was polled after settlement.",
                    );
                    this.state.set(TaskState::Completed);
                    return Poll::Ready(result);
                }
                TaskStateProj::Defer { thunk } => {
                    // INVARIANT: Defer is polled at most once before the
                    // transition to Running
                    let thunk = thunk.take().expect(
                        "Task internal error: deferred thunk was already consumed. \
                         This indicates a state machine invariant violation.",
                    );
                    let future = thunk();
                    this.state.set(TaskState::Running { future });
                    // Loop to poll the newly created future
                }
                TaskStateProj::Running { future } => match future.poll(context) {
                    Poll::Ready(result) => {
                        this.state.set(TaskState::Completed);
                        return Poll::Ready(result);
                    }
                    Poll::Pending => return Poll::Pending,
                },
                TaskStateProj::Completed => {
                    panic!(
                        "Task polled after settlement: a run settles exactly once, \
                         and no further continuation invocation is allowed"
                    );
                }
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A, E> Task<A, E> {
    /// Constructs a task that settles immediately with the given success
    /// value.
    ///
    /// The value is never inspected, and the rejection continuation can
    /// never fire for this task.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::pure(5);
    ///     assert_eq!(task.await, Ok(5));
    /// }
    /// ```
    pub const fn pure(value: A) -> Self {
        Self {
            state: TaskState::Ready {
                outcome: Some(Ok(value)),
            },
        }
    }

    /// Constructs a task that settles immediately with the given rejection
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::rejected("missing".to_string());
    ///     assert_eq!(task.await, Err("missing".to_string()));
    /// }
    /// ```
    pub const fn rejected(error: E) -> Self {
        Self {
            state: TaskState::Ready {
                outcome: Some(Err(error)),
            },
        }
    }

    /// Lifts an already-computed `Result` into a task.
    ///
    /// `Ok` becomes a successful settlement, `Err` a rejection.
    pub const fn from_result(result: Result<A, E>) -> Self {
        Self {
            state: TaskState::Ready {
                outcome: Some(result),
            },
        }
    }

    /// Creates a task from a thunk producing a future.
    ///
    /// The thunk is not invoked until the task is first polled, so
    /// constructing and combining tasks never performs the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::new(|| async { Ok(10 + 20) });
    ///     assert_eq!(task.await, Ok(30));
    /// }
    /// ```
    pub fn new<F, Fut>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            state: TaskState::Defer {
                thunk: Some(Box::new(move || Box::pin(thunk()))),
            },
        }
    }

    /// Wraps an existing future as a task.
    ///
    /// The future is not polled until the task runs.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            state: TaskState::Running {
                future: Box::pin(future),
            },
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<A, E> Task<A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    /// Transforms the success value with a function.
    ///
    /// The returned task runs the receiver and applies `function` to a
    /// successful outcome before forwarding it; a rejection passes through
    /// untouched, carrying the original error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::pure(21).fmap(|x| x * 2);
    ///     assert_eq!(task.await, Ok(42));
    /// }
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Task<B, E>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Task::new(move || async move { self.await.map(function) })
    }

    /// Transforms the rejection value with a function.
    ///
    /// The success channel is not affected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, usize> =
    ///         Task::rejected("missing".to_string()).map_rejected(|error| error.len());
    ///     assert_eq!(task.await, Err(7));
    /// }
    /// ```
    pub fn map_rejected<E2, F>(self, function: F) -> Task<A, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        Task::new(move || async move { self.await.map_err(function) })
    }

    /// Sequences two tasks, passing the first success value to a function
    /// that produces the second task.
    ///
    /// The second task is not created (and its effect not started) until
    /// the receiver settles successfully; a rejection short-circuits and
    /// the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::pure(1).flat_map(|x| Task::pure(x + 1));
    ///     assert_eq!(task.await, Ok(2));
    /// }
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<B, E>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Task<B, E> + Send + 'static,
    {
        Task::new(move || async move {
            match self.await {
                Ok(value) => function(value).await,
                Err(error) => Err(error),
            }
        })
    }

    /// Alias for `flat_map`, matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Task<B, E>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Task<B, E> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two tasks, discarding the first success value.
    ///
    /// A rejection of the receiver propagates and `next` never starts.
    pub fn then<B>(self, next: Task<B, E>) -> Task<B, E>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two tasks sequentially using a binary function.
    ///
    /// The receiver runs first, then `other`; the first rejection wins and
    /// the later task never starts. For the concurrent strategy see
    /// [`Task::map2_par`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::pure(10).map2(Task::pure(20), |a, b| a + b);
    ///     assert_eq!(task.await, Ok(30));
    /// }
    /// ```
    pub fn map2<B, C, F>(self, other: Task<B, E>, function: F) -> Task<C, E>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        Task::new(move || async move {
            let first = self.await?;
            let second = other.await?;
            Ok(function(first, second))
        })
    }

    /// Combines three tasks sequentially using a ternary function.
    pub fn map3<B, C, D, F>(self, second: Task<B, E>, third: Task<C, E>, function: F) -> Task<D, E>
    where
        B: Send + 'static,
        C: Send + 'static,
        D: Send + 'static,
        F: FnOnce(A, B, C) -> D + Send + 'static,
    {
        Task::new(move || async move {
            let first = self.await?;
            let second = second.await?;
            let third = third.await?;
            Ok(function(first, second, third))
        })
    }

    /// Combines two tasks sequentially into a tuple.
    pub fn product<B>(self, other: Task<B, E>) -> Task<(A, B), E>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a task holding a function to a task holding an argument.
    ///
    /// The function task runs first, then the argument task. A rejection
    /// in either source surfaces as the rejection of the composed task,
    /// exactly once; success requires both to settle successfully and
    /// carries the application result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let function: Task<fn(i32) -> i32, String> = Task::pure(|x| x + 1);
    ///     let task = function.apply(Task::pure(41));
    ///     assert_eq!(task.await, Ok(42));
    /// }
    /// ```
    pub fn apply<B, C>(self, argument: Task<B, E>) -> Task<C, E>
    where
        A: FnOnce(B) -> C,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Combines two tasks concurrently into a tuple.
    ///
    /// Both tasks start together; the composed task settles with the pair
    /// once both succeed, or with the first observed rejection. Exactly one
    /// outcome is produced either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<(i32, &str), String> = Task::pure(1).zip_par(Task::pure("x"));
    ///     assert_eq!(task.await, Ok((1, "x")));
    /// }
    /// ```
    pub fn zip_par<B>(self, other: Task<B, E>) -> Task<(A, B), E>
    where
        B: Send + 'static,
    {
        Task::new(move || futures::future::try_join(self, other))
    }

    /// Combines two tasks concurrently using a binary function.
    ///
    /// The concurrent counterpart of [`Task::map2`].
    pub fn map2_par<B, C, F>(self, other: Task<B, E>, function: F) -> Task<C, E>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        self.zip_par(other)
            .fmap(move |(first, second)| function(first, second))
    }

    /// Chains a recovery task onto the rejection channel.
    ///
    /// A successful settlement passes through untouched; a rejection is
    /// handed to `handler`, whose task provides the composed outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::rejected("missing".to_string())
    ///         .recover_with(|_| Task::pure(0));
    ///     assert_eq!(task.await, Ok(0));
    /// }
    /// ```
    pub fn recover_with<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static,
    {
        Task::new(move || async move {
            match self.await {
                Ok(value) => Ok(value),
                Err(error) => handler(error).await,
            }
        })
    }

    /// Alias for `recover_with`, matching Rust's naming conventions.
    pub fn or_else<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static,
    {
        self.recover_with(handler)
    }

    /// Eliminates the task with two continuations.
    ///
    /// Runs the task and invokes exactly one of the continuations exactly
    /// once: `on_rejected` with the rejection value or `on_resolved` with
    /// the success value. This is the two-continuation boundary where host
    /// code finally observes the settlement.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<i32, String> = Task::pure(5);
    ///     let report = task
    ///         .fork(|error| format!("failed: {error}"), |value| format!("got: {value}"))
    ///         .await;
    ///     assert_eq!(report, "got: 5");
    /// }
    /// ```
    pub async fn fork<T, FR, FS>(self, on_rejected: FR, on_resolved: FS) -> T
    where
        FR: FnOnce(E) -> T,
        FS: FnOnce(A) -> T,
    {
        match self.await {
            Ok(value) => on_resolved(value),
            Err(error) => on_rejected(error),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Inverts an ordered collection of tasks into one task producing the
    /// ordered collection of their success values.
    ///
    /// Elements run strictly in order; the first rejection settles the
    /// composed task and later elements never start. For the concurrent
    /// strategy see [`Task::sequence_par`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let tasks: Vec<Task<i32, String>> = vec![Task::pure(1), Task::pure(2)];
    ///     assert_eq!(Task::sequence(tasks).await, Ok(vec![1, 2]));
    /// }
    /// ```
    pub fn sequence(tasks: Vec<Self>) -> Task<Vec<A>, E> {
        Task::new(move || async move {
            let mut results = Vec::with_capacity(tasks.len());
            for task in tasks {
                results.push(task.await?);
            }
            Ok(results)
        })
    }

    /// Maps each element to a task, then sequences the results in order.
    ///
    /// Equivalent to mapping and then calling [`Task::sequence`], fused
    /// into a single deferred pass.
    pub fn traverse<T, F>(items: Vec<T>, function: F) -> Task<Vec<A>, E>
    where
        T: Send + 'static,
        F: FnMut(T) -> Self + Send + 'static,
    {
        Task::new(move || async move {
            let mut function = function;
            let mut results = Vec::with_capacity(items.len());
            for item in items {
                results.push(function(item).await?);
            }
            Ok(results)
        })
    }

    /// Inverts an ordered collection of tasks into one task, running all
    /// elements concurrently.
    ///
    /// Results keep their index order regardless of settlement order; the
    /// first observed rejection settles the composed task exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let tasks: Vec<Task<i32, String>> = vec![Task::pure(1), Task::pure(2)];
    ///     assert_eq!(Task::sequence_par(tasks).await, Ok(vec![1, 2]));
    /// }
    /// ```
    pub fn sequence_par(tasks: Vec<Self>) -> Task<Vec<A>, E> {
        Task::new(move || futures::future::try_join_all(tasks))
    }

    /// Maps each element to a task, then runs all of them concurrently.
    ///
    /// The concurrent counterpart of [`Task::traverse`].
    pub fn traverse_par<T, F>(items: Vec<T>, function: F) -> Task<Vec<A>, E>
    where
        T: Send + 'static,
        F: FnMut(T) -> Self + Send + 'static,
    {
        Task::new(move || {
            let mut function = function;
            futures::future::try_join_all(items.into_iter().map(move |item| function(item)))
        })
    }
}

// =============================================================================
// Flatten
// =============================================================================

impl<A, E> Task<Task<A, E>, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    /// Collapses one level of task nesting.
    ///
    /// Runs the outer task; upon outer success the inner task runs with
    /// the same settlement contract, while an outer rejection propagates
    /// directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let nested: Task<Task<i32, String>, String> = Task::pure(Task::pure(42));
    ///     assert_eq!(nested.flatten().await, Ok(42));
    /// }
    /// ```
    pub fn flatten(self) -> Task<A, E> {
        self.flat_map(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::AssertUnwindSafe;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    // =========================================================================
    // Settlement
    // =========================================================================

    #[tokio::test]
    async fn task_pure_settles_success_exactly_once() {
        let successes = Arc::new(AtomicUsize::new(0));
        let failures = Arc::new(AtomicUsize::new(0));
        let success_counter = successes.clone();
        let failure_counter = failures.clone();

        let outcome = Task::<i32, String>::pure(5)
            .fork(
                move |_error| {
                    failure_counter.fetch_add(1, Ordering::SeqCst);
                    0
                },
                move |value| {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    value
                },
            )
            .await;

        assert_eq!(outcome, 5);
        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(failures.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn task_rejected_settles_failure_exactly_once() {
        let failures = Arc::new(AtomicUsize::new(0));
        let failure_counter = failures.clone();

        let outcome = Task::<i32, String>::rejected("bad".to_string())
            .fork(
                move |error| {
                    failure_counter.fetch_add(1, Ordering::SeqCst);
                    error
                },
                |value| value.to_string(),
            )
            .await;

        assert_eq!(outcome, "bad");
        assert_eq!(failures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn task_polled_after_settlement_panics() {
        let waker = futures::task::noop_waker();
        let mut context = Context::from_waker(&waker);

        let mut task = Box::pin(Task::<i32, String>::pure(1));
        assert!(matches!(
            task.as_mut().poll(&mut context),
            Poll::Ready(Ok(1))
        ));

        let violation = std::panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = task.as_mut().poll(&mut context);
        }));
        assert!(violation.is_err());
    }

    // =========================================================================
    // Deferral
    // =========================================================================

    #[tokio::test]
    async fn task_new_defers_execution_until_awaited() {
        let executed = Arc::new(AtomicBool::new(false));
        let flag = executed.clone();

        let task: Task<i32, String> = Task::new(move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(42)
        });

        assert!(!executed.load(Ordering::SeqCst));
        assert_eq!(task.await, Ok(42));
        assert!(executed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn task_combinators_do_not_execute_anything() {
        let executed = Arc::new(AtomicBool::new(false));
        let flag = executed.clone();

        let task: Task<i32, String> = Task::new(move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(1)
        });
        let composed = task.fmap(|x| x + 1).flat_map(|x| Task::pure(x * 2));

        assert!(!executed.load(Ordering::SeqCst));
        assert_eq!(composed.await, Ok(4));
    }

    // =========================================================================
    // Functor / error channel
    // =========================================================================

    #[tokio::test]
    async fn task_fmap_transforms_success() {
        let task: Task<i32, String> = Task::pure(21).fmap(|x| x * 2);
        assert_eq!(task.await, Ok(42));
    }

    #[tokio::test]
    async fn task_fmap_passes_rejection_through() {
        let task: Task<i32, String> = Task::rejected("failure".to_string()).fmap(|x: i32| x * 2);
        assert_eq!(task.await, Err("failure".to_string()));
    }

    #[tokio::test]
    async fn task_map_rejected_transforms_error_only() {
        let rejected: Task<i32, usize> =
            Task::rejected("abcd".to_string()).map_rejected(|error| error.len());
        assert_eq!(rejected.await, Err(4));

        let successful: Task<i32, usize> = Task::pure(7).map_rejected(|error: String| error.len());
        assert_eq!(successful.await, Ok(7));
    }

    // =========================================================================
    // Monad
    // =========================================================================

    #[tokio::test]
    async fn task_chain_ordering() {
        let task: Task<i32, String> = Task::pure(1).flat_map(|x| Task::pure(x + 1));
        assert_eq!(task.await, Ok(2));
    }

    #[tokio::test]
    async fn task_flat_map_rejection_skips_continuation() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();

        let task: Task<i32, String> =
            Task::rejected("failure".to_string()).flat_map(move |x: i32| {
                flag.store(true, Ordering::SeqCst);
                Task::pure(x + 1)
            });

        assert_eq!(task.await, Err("failure".to_string()));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn task_flat_map_sequences_in_program_order() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let first_log = log.clone();
        let second_log = log.clone();

        let task: Task<i32, String> = Task::new(move || async move {
            first_log.lock().unwrap().push("first");
            Ok(1)
        })
        .flat_map(move |x| {
            Task::new(move || async move {
                second_log.lock().unwrap().push("second");
                Ok(x + 1)
            })
        });

        assert_eq!(task.await, Ok(2));
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn task_flatten_inner_and_outer() {
        let nested: Task<Task<i32, String>, String> = Task::pure(Task::pure(42));
        assert_eq!(nested.flatten().await, Ok(42));

        let outer_rejected: Task<Task<i32, String>, String> =
            Task::rejected("outer".to_string());
        assert_eq!(outer_rejected.flatten().await, Err("outer".to_string()));

        let inner_rejected: Task<Task<i32, String>, String> =
            Task::pure(Task::rejected("inner".to_string()));
        assert_eq!(inner_rejected.flatten().await, Err("inner".to_string()));
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    #[tokio::test]
    async fn task_apply_applies_function_to_argument() {
        let function: Task<fn(i32) -> i32, String> = Task::pure(|x| x + 1);
        assert_eq!(function.apply(Task::pure(41)).await, Ok(42));
    }

    #[tokio::test]
    async fn task_apply_function_side_rejection_propagates() {
        let function: Task<fn(i32) -> i32, String> = Task::rejected("bad".to_string());
        assert_eq!(function.apply(Task::pure(3)).await, Err("bad".to_string()));
    }

    #[tokio::test]
    async fn task_apply_argument_side_rejection_propagates() {
        let function: Task<fn(i32) -> i32, String> = Task::pure(|x| x + 1);
        let argument: Task<i32, String> = Task::rejected("bad argument".to_string());
        assert_eq!(function.apply(argument).await, Err("bad argument".to_string()));
    }

    #[tokio::test]
    async fn task_map2_first_rejection_stops_second() {
        let second_ran = Arc::new(AtomicBool::new(false));
        let flag = second_ran.clone();

        let first: Task<i32, String> = Task::rejected("first".to_string());
        let second: Task<i32, String> = Task::new(move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(2)
        });

        assert_eq!(first.map2(second, |a, b| a + b).await, Err("first".to_string()));
        assert!(!second_ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn task_map3_combines_three() {
        let task: Task<i32, String> =
            Task::pure(1).map3(Task::pure(2), Task::pure(3), |a, b, c| a + b + c);
        assert_eq!(task.await, Ok(6));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn task_zip_par_combines_concurrently() {
        let slow: Task<i32, String> = Task::new(|| async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            Ok(1)
        });
        let fast: Task<&str, String> = Task::pure("x");

        assert_eq!(slow.zip_par(fast).await, Ok((1, "x")));
    }

    #[tokio::test]
    async fn task_zip_par_first_rejection_wins() {
        let pending_forever: Task<i32, String> = Task::new(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            Ok(1)
        });
        let rejected: Task<i32, String> = Task::rejected("fast failure".to_string());

        assert_eq!(
            pending_forever.zip_par(rejected).await,
            Err("fast failure".to_string())
        );
    }

    #[tokio::test]
    async fn task_map2_par_applies_function() {
        let task: Task<i32, String> = Task::pure(10).map2_par(Task::pure(20), |a, b| a + b);
        assert_eq!(task.await, Ok(30));
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    #[tokio::test]
    async fn task_recover_with_handles_rejection() {
        let task: Task<i32, String> =
            Task::rejected("missing".to_string()).recover_with(|error| {
                assert_eq!(error, "missing");
                Task::pure(0)
            });
        assert_eq!(task.await, Ok(0));
    }

    #[tokio::test]
    async fn task_recover_with_passes_success_through() {
        let handler_ran = Arc::new(AtomicBool::new(false));
        let flag = handler_ran.clone();

        let task: Task<i32, String> = Task::pure(5).recover_with(move |_| {
            flag.store(true, Ordering::SeqCst);
            Task::pure(0)
        });

        assert_eq!(task.await, Ok(5));
        assert!(!handler_ran.load(Ordering::SeqCst));
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    #[tokio::test]
    async fn task_sequence_preserves_order() {
        let tasks: Vec<Task<i32, String>> = vec![Task::pure(1), Task::pure(2), Task::pure(3)];
        assert_eq!(Task::sequence(tasks).await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn task_sequence_first_rejection_stops_later_elements() {
        let third_ran = Arc::new(AtomicBool::new(false));
        let flag = third_ran.clone();

        let tasks: Vec<Task<i32, String>> = vec![
            Task::pure(1),
            Task::rejected("broken".to_string()),
            Task::new(move || async move {
                flag.store(true, Ordering::SeqCst);
                Ok(3)
            }),
        ];

        assert_eq!(Task::sequence(tasks).await, Err("broken".to_string()));
        assert!(!third_ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn task_traverse_maps_and_sequences() {
        let task = Task::<usize, String>::traverse(vec!["a", "bb", "ccc"], |s| {
            Task::pure(s.len())
        });
        assert_eq!(task.await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn task_sequence_par_keeps_index_order() {
        let tasks: Vec<Task<i32, String>> = vec![
            Task::new(|| async {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                Ok(1)
            }),
            Task::pure(2),
            Task::pure(3),
        ];

        assert_eq!(Task::sequence_par(tasks).await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn task_sequence_par_rejection_wins() {
        let tasks: Vec<Task<i32, String>> = vec![
            Task::pure(1),
            Task::rejected("broken".to_string()),
            Task::pure(3),
        ];
        assert_eq!(Task::sequence_par(tasks).await, Err("broken".to_string()));
    }

    #[tokio::test]
    async fn task_traverse_par_collects_in_order() {
        let task = Task::<usize, String>::traverse_par(vec!["a", "bb"], |s| Task::pure(s.len()));
        assert_eq!(task.await, Ok(vec![1, 2]));
    }

    // =========================================================================
    // Laws
    // =========================================================================

    #[tokio::test]
    async fn task_monad_left_identity() {
        let function = |x: i32| Task::<i32, String>::pure(x + 1);
        let left = Task::<i32, String>::pure(5).flat_map(function).await;
        let right = function(5).await;
        assert_eq!(left, right);
    }

    #[tokio::test]
    async fn task_monad_right_identity() {
        let left = Task::<i32, String>::pure(5).flat_map(Task::pure).await;
        assert_eq!(left, Ok(5));
    }

    #[tokio::test]
    async fn task_monad_associativity() {
        let first = |x: i32| Task::<i32, String>::pure(x + 1);
        let second = |x: i32| Task::<i32, String>::pure(x * 2);

        let left = Task::<i32, String>::pure(5)
            .flat_map(first)
            .flat_map(second)
            .await;
        let right = Task::<i32, String>::pure(5)
            .flat_map(move |x| first(x).flat_map(second))
            .await;
        assert_eq!(left, right);
    }

    #[tokio::test]
    async fn task_functor_composition() {
        let first = |x: i32| x + 1;
        let second = |x: i32| x * 2;

        let chained = Task::<i32, String>::pure(5).fmap(first).fmap(second).await;
        let composed = Task::<i32, String>::pure(5)
            .fmap(move |x| second(first(x)))
            .await;
        assert_eq!(chained, composed);
    }
}
