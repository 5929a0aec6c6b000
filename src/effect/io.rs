//! IO - deferred synchronous effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until `run_unsafe` is called, maintaining
//! referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Execution happens
//! only via `run_unsafe`, which should be called at the program's "edge"
//! (e.g., in the `main` function). Until then an `IO` value is an inert,
//! immutable description that can be mapped, chained, and combined freely.
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::pure(42);
//! assert_eq!(io.run_unsafe(), 42);
//!
//! // Chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use kindling::effect::IO;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let io = IO::new(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Execute the IO action
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.load(Ordering::SeqCst));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

/// A monad representing deferred synchronous side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until `run_unsafe`
/// is called; each `IO` value owns its thunk exclusively and is consumed by
/// exactly one run.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    /// The wrapped computation that produces a value of type `A`.
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let io = IO::new(|| 10 + 20);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// The lifted action returns the value without performing any side
    /// effects; the value is never inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the IO action and returns the result.
    ///
    /// This is the only way to extract a value from an IO action. It should
    /// be called at the program's "edge".
    ///
    /// # Safety Note
    ///
    /// This method is named `run_unsafe` to indicate that it executes side
    /// effects. It is memory-safe, but calling it breaks referential
    /// transparency.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// This is the `fmap` operation from Functor. The function is not
    /// applied until the action runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || {
            let value = self.run_unsafe();
            function(value)
        })
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// This is the `bind` operation from Monad: the second action is not
    /// even constructed until the first has run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let value = self.run_unsafe();
            function(value).run_unsafe()
        })
    }

    /// Alias for `flat_map`, matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two IO actions using a function.
    ///
    /// `self` runs first, then `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Combines two IO actions into a tuple.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a deferred function to a deferred argument.
    ///
    /// The function action runs first, then the argument action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let function = IO::pure(|x: i32| x + 1);
    /// let argument = IO::pure(41);
    /// assert_eq!(function.apply(argument).run_unsafe(), 42);
    /// ```
    pub fn apply<B, Output>(self, other: IO<B>) -> IO<Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, argument| function(argument))
    }

    /// Catches panics in an IO action and converts them to a recovery value.
    ///
    /// If the IO action panics, the handler is called with the panic info
    /// (as a string) and should return a recovery value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let panicking = IO::new(|| panic!("oops"));
    /// let recovered = IO::catch(panicking, |_| "recovered".to_string());
    /// assert_eq!(recovered.run_unsafe(), "recovered");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: FnOnce(String) -> A + 'static,
    {
        Self::new(move || {
            let result = catch_unwind(AssertUnwindSafe(|| io.run_unsafe()));
            match result {
                Ok(value) => value,
                Err(panic_info) => {
                    let message = if let Some(string) = panic_info.downcast_ref::<&str>() {
                        (*string).to_string()
                    } else if let Some(string) = panic_info.downcast_ref::<String>() {
                        string.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    handler(message)
                }
            }
        })
    }

    /// Inverts an ordered collection of IO actions into one IO action
    /// producing the ordered collection of their results.
    ///
    /// When the composed action runs, each element runs in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let actions = vec![IO::pure(1), IO::pure(2), IO::pure(3)];
    /// assert_eq!(IO::sequence(actions).run_unsafe(), vec![1, 2, 3]);
    /// ```
    pub fn sequence(actions: Vec<Self>) -> IO<Vec<A>> {
        IO::new(move || {
            actions
                .into_iter()
                .map(|action| action.run_unsafe())
                .collect()
        })
    }

    /// Maps each element to an IO action, then sequences the results.
    ///
    /// Equivalent to mapping and then calling [`IO::sequence`], fused into
    /// a single deferred pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let io = IO::traverse(vec![1, 2, 3], |n| IO::pure(n * 10));
    /// assert_eq!(io.run_unsafe(), vec![10, 20, 30]);
    /// ```
    pub fn traverse<T, F>(items: Vec<T>, function: F) -> IO<Vec<A>>
    where
        T: 'static,
        F: Fn(T) -> Self + 'static,
    {
        IO::new(move || {
            items
                .into_iter()
                .map(|item| function(item).run_unsafe())
                .collect()
        })
    }
}

impl<A: 'static> IO<IO<A>> {
    /// Collapses one level of IO nesting.
    ///
    /// Running the flattened action runs the outer action, then the inner
    /// action it produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::IO;
    ///
    /// let nested = IO::pure(IO::pure(42));
    /// assert_eq!(nested.flatten().run_unsafe(), 42);
    /// ```
    pub fn flatten(self) -> IO<A> {
        self.flat_map(|inner| inner)
    }
}
