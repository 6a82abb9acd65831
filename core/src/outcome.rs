use crate::{
    dispatch::OutcomeArms,
    error::{CaughtPanic, UnwrapFailureError, UnwrapSuccessError},
    maybe::Maybe,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    panic::{self, UnwindSafe},
};

/// Result of a computation: `Success` with a `T`, or `Failure` with an `E`.
///
/// Serialized externally tagged, e.g. `{"Success": 42}` or `{"Failure": "oops"}`.
///
/// ```rust
/// use fallible_core::outcome::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success("42")
///     .flat_map(|s| match s.parse::<i32>() {
///         Ok(n) => Outcome::success(n),
///         Err(_) => Outcome::failure("not a number".to_string()),
///     });
///
/// assert_eq!(parsed.unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Runs `f` once and turns what it returned into an `Outcome`.
    ///
    /// The error is kept verbatim, normalize it afterwards with [`Outcome::map_err`].
    ///
    /// ```rust
    /// use fallible_core::outcome::Outcome;
    ///
    /// use serde_json::Value;
    ///
    /// let ok = Outcome::from_throwable(|| serde_json::from_str::<Value>(r#"{"ok": true}"#));
    /// let bad = Outcome::from_throwable(|| serde_json::from_str::<Value>("invalid"));
    ///
    /// assert!(ok.is_success());
    /// assert!(bad.is_failure());
    /// ```
    pub fn from_throwable<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        f().into()
    }

    /// Aggregates outcomes in order. Stops at the first `Failure` and
    /// returns it, the rest of `outcomes` is not inspected.
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        outcomes.into_iter().collect()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapFailureError`] (stored error included) on `Failure`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_unwrap(self) -> Result<T, UnwrapFailureError<E>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(UnwrapFailureError { error }),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapSuccessError`] on `Success`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, UnwrapSuccessError<T>> {
        match self {
            Outcome::Success(value) => Err(UnwrapSuccessError { value }),
            Outcome::Failure(error) => Ok(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that can fail with the same error type.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`Outcome::flat_map`], but the next step may fail with a wider
    /// error type `E2`. A carried `Failure` is converted with `Into`.
    ///
    /// ```rust
    /// use fallible_core::outcome::Outcome;
    ///
    /// let port: Outcome<u16, std::num::ParseIntError> = Outcome::from_throwable(|| "80".parse());
    ///
    /// let checked: Outcome<u16, anyhow::Error> = port.flat_map_into(|p| {
    ///     if p < 1024 {
    ///         Outcome::failure(anyhow::anyhow!("privileged port {}", p))
    ///     } else {
    ///         Outcome::success(p)
    ///     }
    /// });
    ///
    /// assert_eq!(checked.unwrap_err().to_string(), "privileged port 80");
    /// ```
    pub fn flat_map_into<U, E2, F>(self, f: F) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> Outcome<U, E2>,
        E: Into<E2>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error.into()),
        }
    }

    /// Exhaustive case analysis, calls exactly one of the arms.
    pub fn match_with<R, S, F>(self, arms: OutcomeArms<S, F>) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => (arms.success)(value),
            Outcome::Failure(error) => (arms.failure)(error),
        }
    }

    /// Success value as `Maybe`, the error is dropped.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// Failure error as `Maybe`, the value is dropped.
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(error) => Maybe::Present(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T> Outcome<T, CaughtPanic> {
    /// Runs `f` once, trapping a panic raised by that call as `Failure`.
    ///
    /// Only the call itself is guarded: anything `f` hands back is returned
    /// as is, even if using it later panics.
    pub fn from_panicking<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Outcome::Success(value),
            Err(payload) => {
                let caught = CaughtPanic::from_payload(payload);
                debug!("Outcome::from_panicking - captured: {}", caught);
                Outcome::Failure(caught)
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Maybe<T> {
    fn from(value: Outcome<T, E>) -> Self {
        value.ok()
    }
}

/// Collects successes into `V`, short-circuiting on the first `Failure`.
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
